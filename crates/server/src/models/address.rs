//! Database row types for addresses.
//!
//! Row types are separate from the wire-facing domain types in
//! `doorstep-core`; conversion validates what the type system can't
//! (the `kind` tag stored as text).

use chrono::{DateTime, Utc};

use doorstep_core::{Address, AddressId, AddressKind};

use crate::db::RepositoryError;

/// Internal row type for `PostgreSQL` address queries.
#[derive(Debug, sqlx::FromRow)]
pub struct AddressRow {
    pub id: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub extra_info: Option<String>,
    pub kind: String,
    pub same_as_billing: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AddressRow> for Address {
    type Error = RepositoryError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        let kind = AddressKind::parse(&row.kind).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "invalid address kind in database: {}",
                row.kind
            ))
        })?;

        Ok(Self {
            id: AddressId::new(row.id),
            country: row.country,
            street: row.street,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            extra_info: row.extra_info,
            kind,
            same_as_billing: row.same_as_billing,
            created_at: row.created_at,
        })
    }
}
