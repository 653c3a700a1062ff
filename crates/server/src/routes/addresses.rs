//! Address route handlers.
//!
//! Saving applies the consolidation rule before writing: identical billing
//! and shipping input becomes one `billing-shipping` row, distinct input
//! becomes two rows.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use doorstep_core::{Address, AddressId, AddressPayload, SaveAddressesRequest, SavedAddresses};

use crate::db::AddressRepository;
use crate::db::addresses::plan_save;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Save billing/shipping addresses.
///
/// Returns 201 with the persisted pair; in the consolidated case both fields
/// carry the same record.
///
/// # Errors
///
/// Returns 400 when required payload fields are empty or the shipping
/// payload is missing, 500 on storage failure.
#[instrument(skip(state, request), fields(same_as_shipping = request.same_as_shipping))]
pub async fn save(
    State(state): State<AppState>,
    Json(request): Json<SaveAddressesRequest>,
) -> Result<(StatusCode, Json<SavedAddresses>)> {
    validate_request(&request)?;

    let plan = plan_save(&request).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let saved = AddressRepository::new(state.pool()).save(plan).await?;
    tracing::info!(
        billing_id = %saved.billing_address.id,
        shipping_id = %saved.shipping_address.id,
        consolidated = saved.is_consolidated(),
        "Addresses saved"
    );

    Ok((StatusCode::CREATED, Json(saved)))
}

/// List all saved addresses.
///
/// # Errors
///
/// Returns 500 on storage failure.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Address>>> {
    let addresses = AddressRepository::new(state.pool()).list().await?;
    Ok(Json(addresses))
}

/// Delete an address by ID.
///
/// # Errors
///
/// Returns 404 with the offending ID when no row matched, 500 on other
/// storage failures.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let id = AddressId::new(id);

    AddressRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound(format!("Address with ID {id} not found."))
            }
            other => AppError::Database(other),
        })?;

    tracing::info!(address_id = %id, "Address deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Server-side payload validation: every persisted field must be non-empty.
///
/// Pattern-level checks (postal code format, subdivision lists) are the
/// capture form's job; the service only refuses blank required fields.
fn validate_request(request: &SaveAddressesRequest) -> Result<()> {
    let mut blank = Vec::new();

    collect_blank_fields(&request.billing_address, "billingAddress", &mut blank);
    if let Some(shipping) = &request.shipping_address {
        collect_blank_fields(shipping, "shippingAddress", &mut blank);
    }

    if blank.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "missing required fields: {}",
            blank.join(", ")
        )))
    }
}

fn collect_blank_fields(payload: &AddressPayload, prefix: &str, blank: &mut Vec<String>) {
    let fields = [
        ("country", &payload.country),
        ("street", &payload.street),
        ("city", &payload.city),
        ("state", &payload.state),
        ("zipCode", &payload.zip_code),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            blank.push(format!("{prefix}.{name}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AddressPayload {
        AddressPayload {
            country: "AR".to_string(),
            street: "Calle 1".to_string(),
            city: "CABA".to_string(),
            state: "Buenos Aires".to_string(),
            zip_code: "1414".to_string(),
            extra_info: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = SaveAddressesRequest {
            billing_address: payload(),
            shipping_address: None,
            same_as_shipping: true,
        };
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_blank_fields_are_named() {
        let mut billing = payload();
        billing.city = String::new();
        billing.zip_code = "  ".to_string();

        let request = SaveAddressesRequest {
            billing_address: billing,
            shipping_address: Some(payload()),
            same_as_shipping: false,
        };

        let err = validate_request(&request).expect_err("blank fields");
        let message = err.to_string();
        assert!(message.contains("billingAddress.city"));
        assert!(message.contains("billingAddress.zipCode"));
        assert!(!message.contains("shippingAddress"));
    }
}
