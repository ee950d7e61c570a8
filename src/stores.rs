use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::models::{Role, Session, SessionToken, UserProfile, UserStats};

const ACCEPTED_EMAIL: &str = "demo@example.com";
const ACCEPTED_PASSWORD: &str = "password123";
const ACCEPTED_TOKEN: &str = "mock-session-token";
const SESSION_USER_ID: &str = "user-123";
const SESSION_EMAIL: &str = "john@example.com";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid token")]
    InvalidToken,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile service unavailable: {0}")]
    Unavailable(String),
}

/// Identity-provider seam: credential checks and bearer-token resolution.
/// A real backing implementation replaces the fixture without touching the
/// handlers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Accept or reject a credential pair, issuing a session token.
    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionToken, AuthError>;

    /// Decide whether a bearer token is live and return the identity it names.
    async fn resolve(&self, token: &SessionToken) -> Result<Session, AuthError>;
}

/// User-data seam for profile retrieval.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<UserProfile, ProfileError>;
}

/// In-memory identity provider accepting one fixed pair and one fixed token.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialStore;

#[async_trait]
impl CredentialStore for FixtureCredentialStore {
    async fn authenticate(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        if email != ACCEPTED_EMAIL || password != ACCEPTED_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        SessionToken::new(ACCEPTED_TOKEN).ok_or(AuthError::InvalidCredentials)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Session, AuthError> {
        if token.as_str() != ACCEPTED_TOKEN {
            return Err(AuthError::InvalidToken);
        }
        // The token itself carries no timestamp; only the session echoed
        // back gets an expiry, one hour out.
        Ok(Session {
            user_id: SESSION_USER_ID.to_string(),
            email: SESSION_EMAIL.to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }
}

/// Mock user-data service. Synthesizes a fresh profile on every fetch after
/// a simulated network round trip.
#[derive(Debug, Clone)]
pub struct FixtureProfileStore {
    delay: Duration,
}

impl FixtureProfileStore {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ProfileStore for FixtureProfileStore {
    async fn fetch(&self, id: &str) -> Result<UserProfile, ProfileError> {
        tokio::time::sleep(self.delay).await;

        Ok(UserProfile {
            id: id.to_string(),
            name: "Yusuf King".to_string(),
            email: "yking@example.com".to_string(),
            last_login: Utc::now() - chrono::Duration::hours(1),
            role: Role::Admin,
            stats: UserStats {
                posts: 42,
                followers: 1234,
                following: 567,
            },
        })
    }
}
