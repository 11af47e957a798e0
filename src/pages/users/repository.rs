use crate::api::{ApiClient, ApiError, BanUserRequest, User, UserDetail, UserPatch};
use std::rc::Rc;

/// Data access for the user management page.
#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl Default for UsersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_users().await
    }

    pub async fn fetch_user_detail(&self, id: i64) -> Result<UserDetail, ApiError> {
        self.client.get_user_detail(id).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }

    pub async fn ban_user(&self, id: i64, request: BanUserRequest) -> Result<(), ApiError> {
        self.client.ban_user(id, &request).await
    }

    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, ApiError> {
        self.client.update_user(id, &patch).await
    }
}
