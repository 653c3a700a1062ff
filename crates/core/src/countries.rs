//! Per-country address formatting rules and the capture-form validator.
//!
//! Each supported country code maps to a postal-code pattern, an example
//! value for error messages, and the subdivision (state/province) policy.
//! Countries without an entry fall back to [`CountryRules::DEFAULT`]: no
//! subdivision required, any non-empty postal code accepted.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::AddressPayload;

/// Address formatting rules for one country.
#[derive(Debug, Clone)]
pub struct CountryRules {
    /// Pattern the zip/postal code must match.
    pub postal_pattern: &'static str,
    /// Example postal code shown in format error messages.
    pub postal_example: &'static str,
    /// Whether the subdivision field is required.
    pub requires_subdivision: bool,
    /// Enumerated subdivisions, empty when free text is accepted.
    pub subdivisions: &'static [&'static str],
    /// Label for the subdivision field ("State", "Province", ...).
    pub subdivision_label: &'static str,
}

impl CountryRules {
    /// Fallback for countries without a configured entry.
    pub const DEFAULT: Self = Self {
        postal_pattern: r"^.+$",
        postal_example: "",
        requires_subdivision: false,
        subdivisions: &[],
        subdivision_label: "State/Province",
    };

    /// Whether `zip_code` matches this country's postal pattern.
    #[must_use]
    pub fn postal_code_matches(&self, zip_code: &str) -> bool {
        compiled(self.postal_pattern).is_match(zip_code)
    }
}

const AR_PROVINCES: &[&str] = &[
    "Buenos Aires",
    "Catamarca",
    "Chaco",
    "Chubut",
    "Córdoba",
    "Corrientes",
    "Entre Ríos",
    "Formosa",
    "Jujuy",
    "La Pampa",
    "La Rioja",
    "Mendoza",
    "Misiones",
    "Neuquén",
    "Río Negro",
    "Salta",
    "San Juan",
    "San Luis",
    "Santa Cruz",
    "Santa Fe",
    "Santiago del Estero",
    "Tierra del Fuego",
    "Tucumán",
    "Ciudad Autónoma de Buenos Aires",
];

const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
    "District of Columbia",
];

const ES_REGIONS: &[&str] = &[
    "Andalucía",
    "Aragón",
    "Asturias",
    "Baleares",
    "Canarias",
    "Cantabria",
    "Castilla y León",
    "Castilla-La Mancha",
    "Cataluña",
    "Comunidad Valenciana",
    "Extremadura",
    "Galicia",
    "Madrid",
    "Murcia",
    "Navarra",
    "País Vasco",
    "La Rioja",
    "Ceuta",
    "Melilla",
];

static COUNTRY_RULES: LazyLock<BTreeMap<&'static str, CountryRules>> = LazyLock::new(|| {
    BTreeMap::from([
        (
            "AR",
            CountryRules {
                postal_pattern: r"^\d{5}$",
                postal_example: "1414",
                requires_subdivision: true,
                subdivisions: AR_PROVINCES,
                subdivision_label: "Province",
            },
        ),
        (
            "US",
            CountryRules {
                postal_pattern: r"^\d{5}(-\d{4})?$",
                postal_example: "10001 or 10001-1234",
                requires_subdivision: true,
                subdivisions: US_STATES,
                subdivision_label: "State",
            },
        ),
        (
            "ES",
            CountryRules {
                postal_pattern: r"^\d{5}$",
                postal_example: "28001",
                requires_subdivision: true,
                subdivisions: ES_REGIONS,
                subdivision_label: "Province",
            },
        ),
    ])
});

static COMPILED: LazyLock<BTreeMap<&'static str, Regex>> = LazyLock::new(|| {
    COUNTRY_RULES
        .values()
        .map(|r| r.postal_pattern)
        .chain(std::iter::once(CountryRules::DEFAULT.postal_pattern))
        .map(|p| {
            let re = Regex::new(p).expect("country postal pattern is valid");
            (p, re)
        })
        .collect()
});

fn compiled(pattern: &'static str) -> &'static Regex {
    COMPILED
        .get(pattern)
        .unwrap_or_else(|| unreachable!("pattern {pattern} not registered"))
}

/// Look up the rules for a country code, falling back to the default.
#[must_use]
pub fn rules_for(country_code: &str) -> &'static CountryRules {
    static DEFAULT: CountryRules = CountryRules::DEFAULT;
    COUNTRY_RULES.get(country_code).unwrap_or(&DEFAULT)
}

/// Country codes with configured rules, for populating country pickers.
#[must_use]
pub fn configured_countries() -> Vec<&'static str> {
    COUNTRY_RULES.keys().copied().collect()
}

/// Field-level errors keyed by field name, empty when the payload is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Validate a capture-form payload against its country's rules.
///
/// Runs on submit; an empty map means the form may be sent to the server.
#[must_use]
pub fn validate_payload(payload: &AddressPayload) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if payload.country.trim().is_empty() {
        errors.insert("country", "Country is required".to_string());
    }

    if payload.street.trim().is_empty() {
        errors.insert("street", "Street address is required".to_string());
    }

    if payload.city.trim().is_empty() {
        errors.insert("city", "City is required".to_string());
    }

    if !payload.country.trim().is_empty() {
        let rules = rules_for(payload.country.trim());

        if rules.requires_subdivision && payload.state.trim().is_empty() {
            errors.insert(
                "state",
                format!("{} is required", rules.subdivision_label),
            );
        }

        if payload.zip_code.trim().is_empty() {
            errors.insert("zipCode", "Zip/Postal code is required".to_string());
        } else if !rules.postal_code_matches(payload.zip_code.trim()) {
            errors.insert(
                "zipCode",
                format!("Invalid format. Example: {}", rules.postal_example),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_payload(zip: &str) -> AddressPayload {
        AddressPayload {
            country: "US".to_string(),
            street: "350 5th Ave".to_string(),
            city: "New York".to_string(),
            state: "New York".to_string(),
            zip_code: zip.to_string(),
            extra_info: None,
        }
    }

    #[test]
    fn test_us_zip_patterns() {
        assert!(validate_payload(&us_payload("10001")).is_empty());
        assert!(validate_payload(&us_payload("10001-1234")).is_empty());

        let errors = validate_payload(&us_payload("ABCDE"));
        let message = errors.get("zipCode").expect("zip error");
        assert!(message.contains("10001 or 10001-1234"));
    }

    #[test]
    fn test_ar_zip_pattern() {
        let payload = AddressPayload {
            country: "AR".to_string(),
            street: "Calle 1".to_string(),
            city: "CABA".to_string(),
            state: "Buenos Aires".to_string(),
            zip_code: "1414".to_string(),
            extra_info: None,
        };
        // AR postal codes are five digits; "1414" is four
        let errors = validate_payload(&payload);
        assert!(errors.contains_key("zipCode"));

        let mut valid = payload;
        valid.zip_code = "01414".to_string();
        assert!(validate_payload(&valid).is_empty());
    }

    #[test]
    fn test_unknown_country_falls_back_to_default() {
        let payload = AddressPayload {
            country: "NZ".to_string(),
            street: "1 Queen St".to_string(),
            city: "Auckland".to_string(),
            state: String::new(),
            zip_code: "1010".to_string(),
            extra_info: None,
        };
        // No subdivision required, any non-empty postal code passes
        assert!(validate_payload(&payload).is_empty());

        let rules = rules_for("NZ");
        assert!(!rules.requires_subdivision);
        assert!(rules.subdivisions.is_empty());
    }

    #[test]
    fn test_required_fields() {
        let payload = AddressPayload {
            country: "US".to_string(),
            street: "  ".to_string(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            extra_info: None,
        };
        let errors = validate_payload(&payload);
        assert_eq!(errors.get("street").map(String::as_str), Some("Street address is required"));
        assert_eq!(errors.get("city").map(String::as_str), Some("City is required"));
        assert_eq!(errors.get("state").map(String::as_str), Some("State is required"));
        assert_eq!(
            errors.get("zipCode").map(String::as_str),
            Some("Zip/Postal code is required")
        );
    }

    #[test]
    fn test_subdivision_labels() {
        assert_eq!(rules_for("AR").subdivision_label, "Province");
        assert_eq!(rules_for("US").subdivision_label, "State");
        assert_eq!(rules_for("ES").subdivision_label, "Province");
        assert_eq!(rules_for("XX").subdivision_label, "State/Province");
    }

    #[test]
    fn test_configured_countries_listed() {
        let countries = configured_countries();
        assert!(countries.contains(&"AR"));
        assert!(countries.contains(&"US"));
        assert!(countries.contains(&"ES"));
    }
}
