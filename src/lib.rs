pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rest;
pub mod stores;
pub mod upstream;

use std::sync::Arc;

use crate::config::Config;
use crate::stores::{CredentialStore, FixtureCredentialStore, FixtureProfileStore, ProfileStore};
use crate::upstream::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub credentials: Arc<dyn CredentialStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        Self {
            credentials: Arc::new(FixtureCredentialStore),
            profiles: Arc::new(FixtureProfileStore::new(config.profile_delay)),
            api,
            config,
        }
    }
}
