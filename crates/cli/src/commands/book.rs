//! Address book inspection commands.

use doorstep_core::AddressId;
use doorstep_server::db::{AddressRepository, RepositoryError};

use super::CommandError;

/// List all saved addresses.
///
/// # Errors
///
/// Returns an error if the environment is incomplete or the query fails.
pub async fn list() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let addresses = AddressRepository::new(&pool).list().await?;

    if addresses.is_empty() {
        tracing::info!("Address book is empty");
        return Ok(());
    }

    for address in &addresses {
        tracing::info!(
            id = %address.id,
            kind = %address.kind,
            same_as_billing = address.same_as_billing,
            "{}, {}, {} {} ({})",
            address.street,
            address.city,
            address.state,
            address.zip_code,
            address.country,
        );
    }

    tracing::info!(count = addresses.len(), "Listed addresses");
    Ok(())
}

/// Delete an address by id.
///
/// # Errors
///
/// Returns an error if the id does not exist or the delete fails.
pub async fn delete(id: i32) -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let id = AddressId::new(id);

    match AddressRepository::new(&pool).delete(id).await {
        Ok(()) => {
            tracing::info!(address_id = %id, "Address deleted");
            Ok(())
        }
        Err(RepositoryError::NotFound) => {
            tracing::warn!(address_id = %id, "Address not found");
            Err(RepositoryError::NotFound.into())
        }
        Err(e) => Err(e.into()),
    }
}
