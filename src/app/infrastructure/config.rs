//! Credentials and endpoint for the shortening API.
//!
//! Values come from the process environment, after an optional `.env` file
//! in the working directory has been merged in. Missing credentials are not
//! an error here; the API rejects the request and the user sees that message.

pub const DEFAULT_ENDPOINT: &str = "https://url-shortener42.p.rapidapi.com/shorten/";

pub const API_KEY_VAR: &str = "X_RAPIDAPI_KEY";
pub const API_HOST_VAR: &str = "X_RAPIDAPI_HOST";
pub const ENDPOINT_VAR: &str = "FERRISLINK_ENDPOINT";

// Names used by the web build of this tool; still honored so one .env works for both.
const LEGACY_API_KEY_VAR: &str = "VITE_X_RAPIDAPI_KEY";
const LEGACY_API_HOST_VAR: &str = "VITE_X_RAPIDAPI_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_host: String,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Load `.env` (if present) and read the configuration from the environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("failed to read .env file: {}", e),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, legacy: Option<&str>| {
            lookup(primary)
                .filter(|v| !v.is_empty())
                .or_else(|| legacy.and_then(|name| lookup(name)).filter(|v| !v.is_empty()))
        };

        let api_key = read(API_KEY_VAR, Some(LEGACY_API_KEY_VAR)).unwrap_or_else(|| {
            tracing::warn!("{} is not set; requests will be sent without an API key", API_KEY_VAR);
            String::new()
        });
        let api_host = read(API_HOST_VAR, Some(LEGACY_API_HOST_VAR)).unwrap_or_else(|| {
            tracing::warn!("{} is not set; requests will be sent without an API host", API_HOST_VAR);
            String::new()
        });
        let endpoint = read(ENDPOINT_VAR, None).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            api_key,
            api_host,
        }
    }
}
