use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::info;

/// Settings resolved once at startup and passed into construction, so no
/// component reads the environment on its own.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Base URL the server uses to call its own API routes.
    pub api_base_url: String,
    /// Gates the `Secure` attribute on the session cookie.
    pub is_production: bool,
    /// Simulated latency of the mock profile store.
    pub profile_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let delay_ms: u64 = load_or("PROFILE_DELAY_MS", "500");
        Self {
            bind_addr: load_or("BIND_ADDR", "0.0.0.0:3000"),
            api_base_url: load_or("API_URL", "http://localhost:3000/api"),
            is_production: env::var("APP_ENV").is_ok_and(|v| v == "production"),
            profile_delay: Duration::from_millis(delay_ms),
        }
    }
}

fn load_or<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| format!("invalid {key}: {e}"))
        .expect("Environment misconfigured!")
}
