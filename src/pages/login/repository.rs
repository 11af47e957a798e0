use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

/// Data access for the sign-in flow and session teardown.
#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(&request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }
}
