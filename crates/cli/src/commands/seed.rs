//! Seed the address book with demo data for local development.

use doorstep_core::{AddressPayload, SaveAddressesRequest};
use doorstep_server::db::AddressRepository;
use doorstep_server::db::addresses::plan_save;

use super::CommandError;

/// Insert a consolidated record and a distinct billing/shipping pair.
///
/// # Errors
///
/// Returns an error if the environment is incomplete, a seed request is
/// malformed, or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let repo = AddressRepository::new(&pool);

    let demo_requests = [
        SaveAddressesRequest {
            billing_address: AddressPayload {
                country: "AR".to_string(),
                street: "Av. Corrientes 1234".to_string(),
                city: "CABA".to_string(),
                state: "Ciudad Autónoma de Buenos Aires".to_string(),
                zip_code: "01043".to_string(),
                extra_info: Some("Piso 4".to_string()),
            },
            shipping_address: None,
            same_as_shipping: true,
        },
        SaveAddressesRequest {
            billing_address: AddressPayload {
                country: "US".to_string(),
                street: "350 5th Ave".to_string(),
                city: "New York".to_string(),
                state: "New York".to_string(),
                zip_code: "10118".to_string(),
                extra_info: None,
            },
            shipping_address: Some(AddressPayload {
                country: "ES".to_string(),
                street: "Calle Mayor 10".to_string(),
                city: "Madrid".to_string(),
                state: "Madrid".to_string(),
                zip_code: "28013".to_string(),
                extra_info: None,
            }),
            same_as_shipping: false,
        },
    ];

    for request in demo_requests {
        let plan = plan_save(&request)?;
        let saved = repo.save(plan).await?;
        tracing::info!(
            billing_id = %saved.billing_address.id,
            shipping_id = %saved.shipping_address.id,
            consolidated = saved.is_consolidated(),
            "Seeded addresses"
        );
    }

    tracing::info!("Seeding complete");
    Ok(())
}
