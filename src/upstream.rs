//! HTTP client side of the internal service calls: session validation and
//! profile retrieval against the configured API base URL.

use axum::http::{header, HeaderMap, StatusCode};
use cookie::Cookie;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::{ApiResponse, Session, SessionToken, UserProfile, SESSION_COOKIE};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream answered {0}")]
    Status(StatusCode),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the validator endpoint who a bearer token belongs to.
    pub async fn validate_session(&self, token: &SessionToken) -> Result<Session, UpstreamError> {
        let response = self
            .http
            .get(format!("{}/auth/validate", self.base_url))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }
        Ok(response.json::<Session>().await?)
    }

    /// Fetch a user profile and unwrap it from the response envelope.
    pub async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError> {
        let response = self
            .http
            .get(format!("{}/users/{user_id}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }
        let envelope = response.json::<ApiResponse<UserProfile>>().await?;
        Ok(envelope.data)
    }
}

/// Resolve the caller's session from the request cookies.
///
/// `Ok(None)` means anonymous: no session cookie, or the validator rejected
/// the token. `Err` means the validator could not be consulted at all, and
/// the caller picks the fallback.
pub async fn current_session(
    api: &ApiClient,
    headers: &HeaderMap,
) -> Result<Option<Session>, UpstreamError> {
    let Some(token) = session_cookie(headers) else {
        return Ok(None);
    };

    match api.validate_session(&token).await {
        Ok(session) => Ok(Some(session)),
        Err(UpstreamError::Status(status)) if status == StatusCode::UNAUTHORIZED => {
            debug!("session cookie rejected by validator");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<SessionToken> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .and_then(|cookie| SessionToken::new(cookie.value()))
}
