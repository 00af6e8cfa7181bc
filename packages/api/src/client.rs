use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{error_message, ApiError};
use crate::models::Session;
use crate::params::QueryParams;

/// REST client for the Flex ERP API.
///
/// Cheap to clone. A client without a token can only reach the public
/// endpoints (`/health`, `/auth/login`); organization-scoped calls also need
/// the organization id and fail with [`ApiError::NoSession`] before any
/// request is sent when either is missing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    org_id: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            org_id: None,
        }
    }

    /// Bearer token sent with every request. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Organization the `/api/v1/orgs/{org}` calls are scoped to.
    pub fn with_org(mut self, org_id: impl Into<String>) -> Self {
        let org_id = org_id.into();
        self.org_id = (!org_id.trim().is_empty()).then_some(org_id);
        self
    }

    pub fn with_session(self, session: &Session) -> Self {
        self.with_token(session.token.clone())
            .with_org(session.org_id().to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    /// Whether organization-scoped calls can be made.
    pub fn has_session(&self) -> bool {
        self.token.is_some() && self.org_id.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/api/v1/orgs/{org}/{path}`, or `NoSession` without a token and org.
    pub(crate) fn org_url(&self, path: &str) -> Result<String, ApiError> {
        match (&self.token, &self.org_id) {
            (Some(_), Some(org)) => Ok(format!(
                "{}/api/v1/orgs/{}/{}",
                self.base_url,
                org,
                path.trim_start_matches('/')
            )),
            _ => Err(ApiError::NoSession),
        }
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let req = self.http.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends the request and returns the raw body of a 2xx response.
    ///
    /// A 401 on an authenticated request means the token is no longer valid.
    /// Other failures carry the server's error text or `fallback`.
    pub(crate) async fn execute(
        &self,
        req: RequestBuilder,
        fallback: &str,
    ) -> Result<String, ApiError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!("{fallback}: {e}");
            ApiError::from(e)
        })?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            return Ok(body);
        }
        if status == StatusCode::UNAUTHORIZED && self.token.is_some() {
            tracing::warn!("{fallback}: token rejected");
            return Err(ApiError::Unauthorized);
        }

        let message = error_message(&body, fallback);
        tracing::warn!("{fallback}: HTTP {} {message}", status.as_u16());
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &QueryParams,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let req = self.request(Method::GET, url).query(query.pairs());
        let body = self.execute(req, fallback).await?;
        decode(&body)
    }

    /// GET of a bare JSON array. The API writes `null` for an empty list.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &QueryParams,
        fallback: &str,
    ) -> Result<Vec<T>, ApiError> {
        let list: Option<Vec<T>> = self.get(url, query, fallback).await?;
        Ok(list.unwrap_or_default())
    }

    /// Mutation with a JSON body. The response body is not interpreted;
    /// callers refetch through the query cache.
    pub(crate) async fn send<B: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let mut req = self.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(req, fallback).await.map(|_| ())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/health"), "http://localhost:8080/health");
        assert_eq!(client.org_url("skus"), Err(ApiError::NoSession));

        let client = client.with_token("abc").with_org("1100401179193344001");
        assert_eq!(
            client.org_url("skus/4/status").unwrap(),
            "http://localhost:8080/api/v1/orgs/1100401179193344001/skus/4/status"
        );
    }

    #[test]
    fn test_session_needs_token_and_org() {
        let client = ApiClient::new("http://api").with_token("  ");
        assert!(client.token().is_none());
        assert!(!client.with_org("7").has_session());

        let client = ApiClient::new("http://api").with_token("t");
        assert!(!client.has_session());
        assert!(client.with_org("7").has_session());
    }

    #[test]
    fn test_decode_reports_shape_errors() {
        let err = decode::<Vec<u32>>("{\"oops\": 1}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let empty: Option<Vec<u32>> = decode("null").unwrap();
        assert!(empty.is_none());
    }
}
