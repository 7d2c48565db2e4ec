//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SUPABASE_URL};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub supabase_url: String,
    supabase_key: String,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if SUPABASE_KEY is not set in a release build. The key is the
    /// only credential the service holds; there is no useful fallback.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let supabase_key = env::var("SUPABASE_KEY").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("SUPABASE_KEY not set, using local development key");
                "local-dev-service-key".to_string()
            } else {
                panic!("SUPABASE_KEY environment variable must be set in production");
            }
        });

        Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| DEFAULT_SUPABASE_URL.to_string()),
            supabase_key,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the service key used to authenticate against the hosted database.
    pub fn supabase_key(&self) -> &str {
        &self.supabase_key
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
