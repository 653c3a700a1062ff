//! Address domain types and wire DTOs.
//!
//! These are the types exchanged between the checkout flow and the address
//! store service, serialized as camelCase JSON on the wire.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::AddressId;

/// How a stored address is used.
///
/// When a save request indicates billing and shipping are the same address,
/// the service persists a single consolidated record tagged
/// [`AddressKind::BillingShipping`] instead of two duplicated rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// Billing address only.
    #[serde(rename = "billing")]
    Billing,
    /// Shipping address only.
    #[serde(rename = "shipping")]
    Shipping,
    /// One record serving as both billing and shipping address.
    #[serde(rename = "billing-shipping")]
    BillingShipping,
}

impl AddressKind {
    /// The wire/database representation of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Shipping => "shipping",
            Self::BillingShipping => "billing-shipping",
        }
    }

    /// Parse a kind from its wire/database representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "billing" => Some(Self::Billing),
            "shipping" => Some(Self::Shipping),
            "billing-shipping" => Some(Self::BillingShipping),
            _ => None,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An address as entered in the capture form, before persistence.
///
/// Deep equality on this type (derived `PartialEq`) is what the consolidation
/// rule uses to decide whether billing and shipping collapse to one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    /// ISO country code (e.g. "US", "AR").
    pub country: String,
    /// Street address, including house/street number.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// State, province, or region.
    pub state: String,
    /// Zip or postal code.
    pub zip_code: String,
    /// Apartment, floor, or other free-text extra info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
}

/// A persisted address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Database-assigned sequential ID.
    pub id: AddressId,
    /// ISO country code.
    pub country: String,
    /// Street address.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// State, province, or region.
    pub state: String,
    /// Zip or postal code.
    pub zip_code: String,
    /// Apartment, floor, or other free-text extra info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// How this record is used (billing, shipping, or both).
    #[serde(rename = "type")]
    pub kind: AddressKind,
    /// Whether this record was consolidated from identical billing/shipping
    /// input.
    pub same_as_billing: bool,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
}

impl Address {
    /// The payload portion of this record, without identity or bookkeeping.
    #[must_use]
    pub fn payload(&self) -> AddressPayload {
        AddressPayload {
            country: self.country.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            extra_info: self.extra_info.clone(),
        }
    }
}

/// Request body for `POST /addresses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAddressesRequest {
    /// The billing address, always present.
    pub billing_address: AddressPayload,
    /// The shipping address; omitted when `same_as_shipping` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressPayload>,
    /// Whether billing and shipping should be treated as one address.
    pub same_as_shipping: bool,
}

/// Response body for `POST /addresses`.
///
/// In the consolidated case both fields carry the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddresses {
    /// The persisted billing address.
    pub billing_address: Address,
    /// The persisted shipping address (equal to billing when consolidated).
    pub shipping_address: Address,
}

impl SavedAddresses {
    /// Whether this save collapsed to a single consolidated record.
    #[must_use]
    pub fn is_consolidated(&self) -> bool {
        self.billing_address.id == self.shipping_address.id
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
    fn test_kind_wire_names() {
        assert_eq!(AddressKind::Billing.as_str(), "billing");
        assert_eq!(AddressKind::Shipping.as_str(), "shipping");
        assert_eq!(AddressKind::BillingShipping.as_str(), "billing-shipping");
        assert_eq!(
            AddressKind::parse("billing-shipping"),
            Some(AddressKind::BillingShipping)
        );
        assert_eq!(AddressKind::parse("mailing"), None);
    }

    #[test]
    fn test_payload_camel_case_wire_format() {
        let json = serde_json::to_value(payload()).expect("serialize");
        assert_eq!(json["zipCode"], "1414");
        assert!(json.get("extra_info").is_none());
        // extra_info is omitted entirely when absent
        assert!(json.get("extraInfo").is_none());
    }

    #[test]
    fn test_request_deserializes_without_shipping() {
        let req: SaveAddressesRequest = serde_json::from_str(
            r#"{
                "billingAddress": {
                    "country": "AR",
                    "street": "Calle 1",
                    "city": "CABA",
                    "state": "Buenos Aires",
                    "zipCode": "1414"
                },
                "sameAsShipping": true
            }"#,
        )
        .expect("deserialize");

        assert_eq!(req.billing_address, payload());
        assert!(req.shipping_address.is_none());
        assert!(req.same_as_shipping);
    }

    #[test]
    fn test_record_kind_serializes_as_type() {
        let record = Address {
            id: AddressId::new(1),
            country: "AR".to_string(),
            street: "Calle 1".to_string(),
            city: "CABA".to_string(),
            state: "Buenos Aires".to_string(),
            zip_code: "1414".to_string(),
            extra_info: Some("3B".to_string()),
            kind: AddressKind::BillingShipping,
            same_as_billing: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["type"], "billing-shipping");
        assert_eq!(json["sameAsBilling"], true);
        assert_eq!(json["extraInfo"], "3B");
    }
}
