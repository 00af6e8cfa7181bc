use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CreateUserRequest, ManagedUser, RoleList, UpdateUserRequest, UserList, UserListParams,
    UserRole,
};
use crate::params::QueryParams;

impl ApiClient {
    pub async fn list_users(&self, params: &UserListParams) -> Result<Vec<ManagedUser>, ApiError> {
        let url = self.org_url("users")?;
        let list: UserList = self
            .get(&url, &params.to_query(), "Failed to fetch users")
            .await?;
        Ok(list.users)
    }

    pub async fn list_roles(&self) -> Result<Vec<UserRole>, ApiError> {
        let url = self.org_url("users/roles")?;
        let list: RoleList = self
            .get(&url, &QueryParams::new(), "Failed to fetch user roles")
            .await?;
        Ok(list.roles)
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<(), ApiError> {
        let url = self.org_url("users")?;
        self.send(Method::POST, &url, Some(req), "Failed to create user")
            .await?;
        tracing::info!("created user {} ({})", req.email, req.role);
        Ok(())
    }

    pub async fn update_user(&self, id: &str, req: &UpdateUserRequest) -> Result<(), ApiError> {
        let url = self.org_url(&format!("users/{id}"))?;
        self.send(Method::PUT, &url, Some(req), "Failed to update user")
            .await?;
        tracing::info!("updated user {id}");
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = self.org_url(&format!("users/{id}"))?;
        self.send::<()>(Method::DELETE, &url, None, "Failed to delete user")
            .await?;
        tracing::info!("deleted user {id}");
        Ok(())
    }
}
