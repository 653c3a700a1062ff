//! REST client for the address store service.
//!
//! Thin wrapper over `reqwest`: one method per endpoint, no retries, no
//! caching. Failures surface as [`ApiError`] for the shell to render as a
//! transient notification.

use reqwest::StatusCode;

use doorstep_core::{Address, AddressId, SaveAddressesRequest, SavedAddresses};

/// Errors from the address store API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Whether the service reported the target resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Api {
                status: 404,
                ..
            }
        )
    }
}

/// Client for the address store REST surface.
#[derive(Debug, Clone)]
pub struct AddressApi {
    client: reqwest::Client,
    base_url: String,
}

impl AddressApi {
    /// Create a client against a base URL such as `http://localhost:3000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    /// Save billing/shipping addresses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure, `ApiError::Api` when
    /// the service rejects the request.
    pub async fn save(&self, request: &SaveAddressesRequest) -> Result<SavedAddresses, ApiError> {
        let response = self
            .client
            .post(format!("{}/addresses", self.base_url))
            .json(request)
            .send()
            .await?;

        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch all saved addresses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure, `ApiError::Api` when
    /// the service answers with an error status.
    pub async fn list(&self) -> Result<Vec<Address>, ApiError> {
        let response = self
            .client
            .get(format!("{}/addresses", self.base_url))
            .send()
            .await?;

        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a saved address by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 when the ID does not exist.
    pub async fn delete(&self, id: AddressId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/addresses/{id}", self.base_url))
            .send()
            .await?;

        error_for_status(response).await?;
        Ok(())
    }
}

/// Convert an error status into `ApiError::Api`, keeping the body as message.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| status_fallback(status));

    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

fn status_fallback(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let api = AddressApi::new("http://localhost:3000/");
        assert_eq!(api.base_url, "http://localhost:3000");

        let api = AddressApi::new("http://localhost:3000");
        assert_eq!(api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_not_found_detection() {
        let err = ApiError::Api {
            status: 404,
            message: "Address with ID 9 not found.".to_string(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
