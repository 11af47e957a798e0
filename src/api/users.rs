//! Admin user management endpoints.

use super::client::{map_empty_response, map_typed_response, ApiClient};
use super::types::{ApiError, BanUserRequest, User, UserDetail, UserPatch};

impl ApiClient {
    /// `GET /admin/users`. The whole list, no paging.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/admin/users", base_url)),
            )
            .await?;
        map_typed_response(response).await
    }

    /// `GET /admin/users/{id}`.
    pub async fn get_user_detail(&self, id: i64) -> Result<UserDetail, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/admin/users/{}", base_url, id)),
            )
            .await?;
        map_typed_response(response).await
    }

    /// `DELETE /admin/users/{id}`.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .delete(format!("{}/admin/users/{}", base_url, id)),
            )
            .await?;
        map_empty_response(response).await
    }

    /// `POST /admin/users/{id}/ban`.
    pub async fn ban_user(&self, id: i64, request: &BanUserRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .post(format!("{}/admin/users/{}/ban", base_url, id))
                    .json(request),
            )
            .await?;
        map_empty_response(response).await
    }

    /// `PATCH /admin/users/{id}`. Returns the updated record.
    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .patch(format!("{}/admin/users/{}", base_url, id))
                    .json(patch),
            )
            .await?;
        map_typed_response(response).await
    }
}
