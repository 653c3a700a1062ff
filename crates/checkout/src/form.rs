//! Billing/shipping capture form.
//!
//! Each side of the form is an [`AddressEntry`] with an explicit entry mode:
//! search-assisted (type-ahead against a place provider) or manual fields.
//! The two modes are mutually exclusive per side; switching modes keeps the
//! fields entered so far.
//!
//! Validation runs on submit only. When the same-as-shipping flag is set the
//! form skips client-side validation entirely and submits billing data as the
//! single consolidated address; the server's blank-field check remains the
//! backstop.

use doorstep_core::countries::{FieldErrors, validate_payload};
use doorstep_core::{Address, AddressPayload};

use crate::places::ExtractedAddress;

/// How one side of the form captures its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Type-ahead search with manual fallback.
    #[default]
    Search,
    /// Discrete manual fields.
    Manual,
}

/// One side (billing or shipping) of the capture form.
#[derive(Debug, Clone, Default)]
pub struct AddressEntry {
    mode: EntryMode,
    country: String,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    extra_info: Option<String>,
}

impl AddressEntry {
    /// Current entry mode.
    #[must_use]
    pub const fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Switch to manual entry, keeping fields entered so far.
    pub const fn use_manual(&mut self) {
        self.mode = EntryMode::Manual;
    }

    /// Switch to search-assisted entry, keeping fields entered so far.
    pub const fn use_search(&mut self) {
        self.mode = EntryMode::Search;
    }

    /// Set the country code; country drives validation and the search
    /// restriction.
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    /// Country code entered so far.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Set a manual field by name, as wired from form inputs.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match field {
            "country" => self.country = value,
            "street" => self.street = value,
            "city" => self.city = value,
            "state" => self.state = value,
            "zipCode" => self.zip_code = value,
            "extraInfo" => self.extra_info = Some(value).filter(|v| !v.is_empty()),
            _ => tracing::warn!(field, "Ignoring unknown form field"),
        }
    }

    /// Prefill from a resolved place, switching to manual so the user can
    /// review and complete what the provider left blank.
    pub fn apply_place(&mut self, extracted: &ExtractedAddress) {
        self.street = extracted.street.clone();
        self.city = extracted.city.clone();
        self.state = extracted.state.clone();
        self.zip_code = extracted.zip_code.clone();
        self.mode = EntryMode::Manual;
    }

    /// Prefill from a previously saved address record.
    pub fn apply_saved(&mut self, address: &Address) {
        let payload = address.payload();
        self.country = payload.country;
        self.street = payload.street;
        self.city = payload.city;
        self.state = payload.state;
        self.zip_code = payload.zip_code;
        self.extra_info = payload.extra_info;
        self.mode = EntryMode::Manual;
    }

    /// The payload this side would submit.
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

/// Per-side field errors from a failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitErrors {
    /// Errors on the billing side, keyed by field name.
    pub billing: FieldErrors,
    /// Errors on the shipping side.
    pub shipping: FieldErrors,
}

impl SubmitErrors {
    /// Whether the submit passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.billing.is_empty() && self.shipping.is_empty()
    }
}

/// The coordinating capture form: two sides plus the same-as-shipping flag.
#[derive(Debug, Clone, Default)]
pub struct CaptureForm {
    /// Billing side.
    pub billing: AddressEntry,
    /// Shipping side; ignored while `same_as_shipping` is set.
    pub shipping: AddressEntry,
    same_as_shipping: bool,
}

impl CaptureForm {
    /// Create an empty form, both sides in search mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether billing doubles as the shipping address.
    #[must_use]
    pub const fn same_as_shipping(&self) -> bool {
        self.same_as_shipping
    }

    /// Set the same-as-shipping flag. Shipping fields are kept, merely
    /// hidden, so unchecking restores them.
    pub const fn set_same_as_shipping(&mut self, same: bool) {
        self.same_as_shipping = same;
    }

    /// Validate and build the save request.
    ///
    /// When billing doubles as shipping no client-side validation runs at
    /// all; the server's blank-field check covers that path.
    ///
    /// # Errors
    ///
    /// Returns per-field errors for each side; the request is only produced
    /// when every check passes.
    pub fn submit(&self) -> Result<doorstep_core::SaveAddressesRequest, SubmitErrors> {
        let billing = self.billing.payload();

        if self.same_as_shipping {
            return Ok(doorstep_core::SaveAddressesRequest {
                billing_address: billing,
                shipping_address: None,
                same_as_shipping: true,
            });
        }

        let shipping = self.shipping.payload();
        let errors = SubmitErrors {
            billing: validate_payload(&billing),
            shipping: validate_payload(&shipping),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(doorstep_core::SaveAddressesRequest {
            billing_address: billing,
            shipping_address: Some(shipping),
            same_as_shipping: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_entry() -> AddressEntry {
        let mut entry = AddressEntry::default();
        entry.set_field("country", "US");
        entry.set_field("street", "350 5th Ave");
        entry.set_field("city", "New York");
        entry.set_field("state", "New York");
        entry.set_field("zipCode", "10001");
        entry
    }

    #[test]
    fn test_same_as_shipping_skips_shipping_validation() {
        let mut form = CaptureForm::new();
        form.billing = filled_entry();
        form.set_same_as_shipping(true);
        // Shipping side left completely empty

        let request = form.submit().expect("valid submit");
        assert!(request.same_as_shipping);
        assert!(request.shipping_address.is_none());
        assert_eq!(request.billing_address.zip_code, "10001");
    }

    #[test]
    fn test_same_as_shipping_bypasses_validation_entirely() {
        let mut form = CaptureForm::new();
        form.set_same_as_shipping(true);
        // Every field blank; the server rejects blanks, not the form

        let request = form.submit().expect("flag set submits unvalidated");
        assert!(request.same_as_shipping);
        assert!(request.billing_address.street.is_empty());
    }

    #[test]
    fn test_empty_shipping_blocks_submit_when_distinct() {
        let mut form = CaptureForm::new();
        form.billing = filled_entry();

        let errors = form.submit().expect_err("shipping is empty");
        assert!(errors.billing.is_empty());
        assert!(errors.shipping.contains_key("street"));
        assert!(errors.shipping.contains_key("city"));
    }

    #[test]
    fn test_zip_format_error_references_example() {
        let mut form = CaptureForm::new();
        form.billing = filled_entry();
        form.billing.set_field("zipCode", "ABCDE");
        form.shipping = filled_entry();

        let errors = form.submit().expect_err("bad zip");
        let message = errors.billing.get("zipCode").expect("zip error");
        assert!(message.contains("10001 or 10001-1234"));
        assert!(errors.shipping.is_empty());
    }

    #[test]
    fn test_apply_place_switches_to_manual() {
        let mut entry = AddressEntry::default();
        entry.set_country("US");
        assert_eq!(entry.mode(), EntryMode::Search);

        entry.apply_place(&ExtractedAddress {
            street: "350 5th Avenue".to_string(),
            city: "New York".to_string(),
            state: "New York".to_string(),
            zip_code: "10118".to_string(),
        });

        assert_eq!(entry.mode(), EntryMode::Manual);
        let payload = entry.payload();
        assert_eq!(payload.street, "350 5th Avenue");
        // Country set before search is preserved
        assert_eq!(payload.country, "US");
    }

    #[test]
    fn test_apply_saved_prefills_every_field() {
        use chrono::Utc;
        use doorstep_core::{AddressId, AddressKind};

        let saved = Address {
            id: AddressId::new(4),
            country: "ES".to_string(),
            street: "Calle Mayor 10".to_string(),
            city: "Madrid".to_string(),
            state: "Madrid".to_string(),
            zip_code: "28013".to_string(),
            extra_info: Some("2º izquierda".to_string()),
            kind: AddressKind::BillingShipping,
            same_as_billing: true,
            created_at: Utc::now(),
        };

        let mut entry = AddressEntry::default();
        entry.apply_saved(&saved);

        assert_eq!(entry.mode(), EntryMode::Manual);
        assert_eq!(entry.payload(), saved.payload());
    }

    #[test]
    fn test_mode_switch_keeps_fields() {
        let mut entry = filled_entry();
        entry.use_manual();
        entry.use_search();
        assert_eq!(entry.payload().street, "350 5th Ave");
    }

    #[test]
    fn test_unchecking_flag_restores_shipping_fields() {
        let mut form = CaptureForm::new();
        form.billing = filled_entry();
        form.shipping = filled_entry();
        form.shipping.set_field("street", "1 Main St");

        form.set_same_as_shipping(true);
        form.set_same_as_shipping(false);

        let request = form.submit().expect("valid submit");
        let shipping = request.shipping_address.expect("shipping present");
        assert_eq!(shipping.street, "1 Main St");
    }

    #[test]
    fn test_extra_info_field_empty_becomes_none() {
        let mut entry = filled_entry();
        entry.set_field("extraInfo", "3B");
        assert_eq!(entry.payload().extra_info.as_deref(), Some("3B"));
        entry.set_field("extraInfo", "");
        assert_eq!(entry.payload().extra_info, None);
    }
}
