//! HTTP client for the Gatekeeper API.
//!
//! Per-domain request methods live in sibling modules (`auth`, `users`) as
//! `impl ApiClient` blocks. This module owns the connection plumbing: base
//! URL resolution, bearer injection and the shared response decoding helpers.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config;
use crate::utils::storage;

use super::types::ApiError;

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of consulting the runtime configuration.
    /// Tests point this at a local mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base_url) => base_url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    /// Attaches the bearer token when a session exists. Requests without a
    /// session go out unauthenticated and the server answers 401.
    fn auth_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = storage::access_token() {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) async fn send_authorized(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request
            .headers(Self::auth_headers())
            .send()
            .await
            .map_err(|error| ApiError::request_failed(format!("Request failed: {}", error)))
    }

    /// A 401 means the session is gone. Drop the stale token and return to
    /// the login screen.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage::clear_session();
            redirect_to_login_if_needed();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn handle_unauthorized_status(_status: StatusCode) {}

    pub(crate) fn map_error_payload_parse_failure(error: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error response: {}", error))
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if let Ok(pathname) = location.pathname() {
        if pathname == "/login" {
            return;
        }
    }
    let _ = location.set_href("/login");
}

/// Decodes a JSON success body, or the API error payload on a failure status.
pub(crate) async fn map_typed_response<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::unknown(format!("Failed to parse response: {}", error)))
    } else {
        let error: ApiError = response
            .json()
            .await
            .map_err(ApiClient::map_error_payload_parse_failure)?;
        Err(error)
    }
}

/// Like [`map_typed_response`] but discards any success body.
pub(crate) async fn map_empty_response(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        Ok(())
    } else {
        let error: ApiError = response
            .json()
            .await
            .map_err(ApiClient::map_error_payload_parse_failure)?;
        Err(error)
    }
}
