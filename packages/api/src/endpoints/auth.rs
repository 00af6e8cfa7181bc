use reqwest::Method;

use crate::client::{decode, ApiClient};
use crate::error::ApiError;
use crate::models::{HealthStatus, LoginRequest, LoginResponse};
use crate::params::QueryParams;

impl ApiClient {
    /// `GET /health`. Public.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get(&self.url("/health"), &QueryParams::new(), "API unreachable")
            .await
    }

    /// `POST /auth/login`. Public; a rejected password is an `Http` error
    /// carrying the server's message, not `Unauthorized`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let req = self
            .request(Method::POST, &self.url("/auth/login"))
            .json(&body);
        let text = self.execute(req, "Login failed").await?;
        let resp: LoginResponse = decode(&text)?;
        if resp.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried no token".into()));
        }
        tracing::info!("signed in as {}", resp.user.email);
        Ok(resp)
    }

    /// `GET /auth/me`: the user and organization behind the held token.
    pub async fn me(&self) -> Result<LoginResponse, ApiError> {
        if self.token().is_none() {
            return Err(ApiError::NoSession);
        }
        self.get(&self.url("/auth/me"), &QueryParams::new(), "Failed to restore session")
            .await
    }
}
