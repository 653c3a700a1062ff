//! Place-autocomplete provider interface.
//!
//! Search-assisted entry queries a geocoding provider with free text and a
//! country restriction, gets back ranked suggestions with opaque place IDs,
//! and later fetches the components of the chosen place to prefill the form.
//!
//! [`HttpPlacesClient`] speaks the Google Places web service wire format;
//! anything implementing [`SuggestionSource`] can stand in (tests use an
//! in-memory fake).

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Base URL of the Places web service.
const BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Errors from the autocomplete provider.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status.
    #[error("provider error: HTTP {0}")]
    HttpStatus(StatusCode),

    /// Provider answered with an application-level error status.
    #[error("provider error: {status}{}", .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Api {
        status: String,
        message: Option<String>,
    },
}

/// A candidate address from the autocomplete provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceSuggestion {
    /// Human-readable place description shown in the dropdown.
    pub description: String,
    /// Opaque identifier for a later detail lookup.
    pub place_id: String,
}

/// One component of a resolved place (street number, locality, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressComponent {
    /// Full text of the component.
    pub long_name: String,
    /// Provider-assigned component types.
    pub types: Vec<String>,
}

/// The resolved detail of a chosen place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PlaceDetail {
    /// Components making up the address.
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Form fields extracted from a [`PlaceDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Map provider components onto capture-form fields.
///
/// Street number and route combine into the street line; locality becomes
/// the city; the first-level administrative area becomes the state; the
/// postal code fills the zip field. Missing components leave fields empty.
#[must_use]
pub fn extract_address(detail: &PlaceDetail) -> ExtractedAddress {
    let mut extracted = ExtractedAddress::default();

    for component in &detail.address_components {
        let has = |t: &str| component.types.iter().any(|ty| ty == t);

        if has("street_number") {
            extracted.street = format!("{} {}", component.long_name, extracted.street);
        }
        if has("route") {
            extracted.street = format!("{}{}", extracted.street, component.long_name);
        }
        if has("locality") {
            extracted.city = component.long_name.clone();
        }
        if has("administrative_area_level_1") {
            extracted.state = component.long_name.clone();
        }
        if has("postal_code") {
            extracted.zip_code = component.long_name.clone();
        }
    }

    extracted.street = extracted.street.trim().to_string();
    extracted
}

/// A source of place suggestions and place details.
#[allow(async_fn_in_trait)]
pub trait SuggestionSource {
    /// Query suggestions for free-text input, optionally country-restricted.
    async fn suggest(
        &self,
        query: &str,
        country: Option<&str>,
    ) -> Result<Vec<PlaceSuggestion>, PlacesError>;

    /// Resolve a suggestion's place ID into address components.
    async fn detail(&self, place_id: &str) -> Result<PlaceDetail, PlacesError>;
}

/// HTTP client for a Places-style autocomplete web service.
#[derive(Debug, Clone)]
pub struct HttpPlacesClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<PlaceSuggestion>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    status: String,
    #[serde(default)]
    result: PlaceDetail,
    #[serde(default)]
    error_message: Option<String>,
}

impl HttpPlacesClient {
    /// Create a client for the public Places web service.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against a custom base URL (proxies, test servers).
    #[must_use]
    pub fn with_base_url(api_key: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    fn check_status(status: String, error_message: Option<String>) -> Result<(), PlacesError> {
        // ZERO_RESULTS is a successful query with no matches
        if status == "OK" || status == "ZERO_RESULTS" {
            Ok(())
        } else {
            Err(PlacesError::Api {
                status,
                message: error_message,
            })
        }
    }
}

impl SuggestionSource for HttpPlacesClient {
    async fn suggest(
        &self,
        query: &str,
        country: Option<&str>,
    ) -> Result<Vec<PlaceSuggestion>, PlacesError> {
        let mut params = vec![
            ("input", query.to_string()),
            ("types", "address".to_string()),
            ("key", self.api_key.expose_secret().to_string()),
        ];
        if let Some(code) = country {
            params.push(("components", format!("country:{code}")));
        }

        let response = self
            .client
            .get(format!("{}/autocomplete/json", self.base_url))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::HttpStatus(response.status()));
        }

        let body: AutocompleteResponse = response.json().await?;
        Self::check_status(body.status, body.error_message)?;
        Ok(body.predictions)
    }

    async fn detail(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let response = self
            .client
            .get(format!("{}/details/json", self.base_url))
            .query(&[
                ("place_id", place_id),
                ("fields", "address_component"),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::HttpStatus(response.status()));
        }

        let body: DetailResponse = response.json().await?;
        Self::check_status(body.status, body.error_message)?;
        Ok(body.result)
    }
}
