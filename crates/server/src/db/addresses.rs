//! Address repository and the consolidation rule.
//!
//! The consolidation rule decides whether a save request becomes one
//! `billing-shipping` row or a `billing` row plus a `shipping` row. The
//! decision is pure ([`plan_save`]); the repository only executes it.

use sqlx::PgPool;
use thiserror::Error;

use doorstep_core::{Address, AddressId, AddressPayload, SaveAddressesRequest, SavedAddresses};

use super::RepositoryError;
use crate::models::AddressRow;

/// The save request named distinct addresses but carried no shipping payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("shippingAddress is required when sameAsShipping is false")]
pub struct MissingShippingAddress;

/// How a save request will be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePlan {
    /// One consolidated `billing-shipping` row.
    Consolidated(AddressPayload),
    /// Two rows, `billing` then `shipping`.
    Distinct {
        billing: AddressPayload,
        shipping: AddressPayload,
    },
}

/// Decide how a save request collapses into stored rows.
///
/// Billing and shipping consolidate when the request says so explicitly or
/// when the two payloads are deeply equal. Otherwise both payloads must be
/// present and are stored as two rows.
///
/// # Errors
///
/// Returns [`MissingShippingAddress`] when the request is not consolidated
/// and carries no shipping payload.
pub fn plan_save(request: &SaveAddressesRequest) -> Result<SavePlan, MissingShippingAddress> {
    if request.same_as_shipping
        || request.shipping_address.as_ref() == Some(&request.billing_address)
    {
        return Ok(SavePlan::Consolidated(request.billing_address.clone()));
    }

    let shipping = request
        .shipping_address
        .clone()
        .ok_or(MissingShippingAddress)?;

    Ok(SavePlan::Distinct {
        billing: request.billing_address.clone(),
        shipping,
    })
}

/// Repository for address database operations.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Execute a save plan, returning the persisted billing/shipping pair.
    ///
    /// The distinct case runs two independent inserts without a transaction:
    /// if the shipping insert fails after the billing insert succeeded, the
    /// billing row remains. Recorded product decision, see DESIGN.md.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either insert fails.
    pub async fn save(&self, plan: SavePlan) -> Result<SavedAddresses, RepositoryError> {
        match plan {
            SavePlan::Consolidated(payload) => {
                let record = self
                    .insert(&payload, "billing-shipping", true)
                    .await?;
                Ok(SavedAddresses {
                    billing_address: record.clone(),
                    shipping_address: record,
                })
            }
            SavePlan::Distinct { billing, shipping } => {
                let billing_address = self.insert(&billing, "billing", false).await?;
                let shipping_address = self.insert(&shipping, "shipping", false).await?;
                Ok(SavedAddresses {
                    billing_address,
                    shipping_address,
                })
            }
        }
    }

    /// List all persisted addresses in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored kind tag is invalid.
    pub async fn list(&self) -> Result<Vec<Address>, RepositoryError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r"
            SELECT id, country, street, city, state, zip_code, extra_info,
                   kind, same_as_billing, created_at
            FROM addresses
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Address::try_from).collect()
    }

    /// Delete an address by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row matched the ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: AddressId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn insert(
        &self,
        payload: &AddressPayload,
        kind: &str,
        same_as_billing: bool,
    ) -> Result<Address, RepositoryError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r"
            INSERT INTO addresses (country, street, city, state, zip_code, extra_info,
                                   kind, same_as_billing)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, country, street, city, state, zip_code, extra_info,
                      kind, same_as_billing, created_at
            ",
        )
        .bind(&payload.country)
        .bind(&payload.street)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(&payload.zip_code)
        .bind(&payload.extra_info)
        .bind(kind)
        .bind(same_as_billing)
        .fetch_one(self.pool)
        .await?;

        Address::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(street: &str) -> AddressPayload {
        AddressPayload {
            country: "AR".to_string(),
            street: street.to_string(),
            city: "CABA".to_string(),
            state: "Buenos Aires".to_string(),
            zip_code: "1414".to_string(),
            extra_info: None,
        }
    }

    #[test]
    fn test_explicit_flag_consolidates() {
        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: None,
            same_as_shipping: true,
        };
        let plan = plan_save(&request).expect("plan");
        assert_eq!(plan, SavePlan::Consolidated(payload("Calle 1")));
    }

    #[test]
    fn test_flag_wins_even_with_distinct_shipping_payload() {
        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: Some(payload("Calle 2")),
            same_as_shipping: true,
        };
        let plan = plan_save(&request).expect("plan");
        assert_eq!(plan, SavePlan::Consolidated(payload("Calle 1")));
    }

    #[test]
    fn test_deep_equality_consolidates_without_flag() {
        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: Some(payload("Calle 1")),
            same_as_shipping: false,
        };
        let plan = plan_save(&request).expect("plan");
        assert_eq!(plan, SavePlan::Consolidated(payload("Calle 1")));
    }

    #[test]
    fn test_distinct_payloads_stay_distinct() {
        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: Some(payload("Calle 2")),
            same_as_shipping: false,
        };
        let plan = plan_save(&request).expect("plan");
        assert_eq!(
            plan,
            SavePlan::Distinct {
                billing: payload("Calle 1"),
                shipping: payload("Calle 2"),
            }
        );
    }

    #[test]
    fn test_extra_info_participates_in_equality() {
        let mut with_apartment = payload("Calle 1");
        with_apartment.extra_info = Some("3B".to_string());

        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: Some(with_apartment.clone()),
            same_as_shipping: false,
        };
        let plan = plan_save(&request).expect("plan");
        assert_eq!(
            plan,
            SavePlan::Distinct {
                billing: payload("Calle 1"),
                shipping: with_apartment,
            }
        );
    }

    #[test]
    fn test_missing_shipping_is_rejected() {
        let request = SaveAddressesRequest {
            billing_address: payload("Calle 1"),
            shipping_address: None,
            same_as_shipping: false,
        };
        assert_eq!(plan_save(&request), Err(MissingShippingAddress));
    }
}
