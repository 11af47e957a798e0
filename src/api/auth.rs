//! Session endpoints.

use crate::utils::storage;

use super::client::{map_empty_response, map_typed_response, ApiClient};
use super::types::{ApiError, LoginRequest, LoginResponse, User};

impl ApiClient {
    /// `POST /auth/login`. Persists the returned token so later requests
    /// carry it.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(|error| ApiError::request_failed(format!("Request failed: {}", error)))?;
        let login: LoginResponse = map_typed_response(response).await?;
        storage::store_access_token(&login.token);
        Ok(login)
    }

    /// `POST /auth/logout`. Invalidates the session server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().post(format!("{}/auth/logout", base_url)))
            .await?;
        map_empty_response(response).await
    }

    /// `GET /auth/me`. Resolves the account behind the stored token.
    pub async fn get_me(&self) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().get(format!("{}/auth/me", base_url)))
            .await?;
        map_typed_response(response).await
    }
}
