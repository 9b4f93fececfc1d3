use serde::{Deserialize, Serialize};

use crate::app::infrastructure::config::ApiConfig;
use crate::app::infrastructure::error::ShortenError;

/// How long the service keeps a short link alive. The unit is the service's.
pub const VALIDITY_DURATION: u32 = 5;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "FerrisLink";

/// Anything that can turn a long URL into a short one.
///
/// Implementations are called from a worker thread.
pub trait Shortener: Send + Sync {
    fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}

#[derive(Debug, Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
    validity_duration: u32,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Error body the gateway sends back on rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the RapidAPI url-shortener42 service.
#[derive(Debug, Clone)]
pub struct RapidApiShortener {
    config: ApiConfig,
}

impl RapidApiShortener {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Shortener for RapidApiShortener {
    fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        let body = ShortenRequest {
            url,
            validity_duration: VALIDITY_DURATION,
        };

        tracing::debug!(endpoint = %self.config.endpoint, "sending shorten request");

        let response = minreq::post(&self.config.endpoint)
            .with_header("User-Agent", USER_AGENT)
            .with_header("X-RapidAPI-Key", &self.config.api_key)
            .with_header("X-RapidAPI-Host", &self.config.api_host)
            .with_timeout(REQUEST_TIMEOUT_SECS)
            .with_json(&body)
            .map_err(|e| ShortenError::Api(format!("Failed to encode request: {}", e)))?
            .send()
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        if !(200..300).contains(&response.status_code) {
            let detail = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty());
            let message = match detail {
                Some(detail) => format!(
                    "Request failed with status code {}: {}",
                    response.status_code, detail
                ),
                None => format!("Request failed with status code {}", response.status_code),
            };
            return Err(ShortenError::Api(message));
        }

        let parsed: ShortenResponse = response
            .json()
            .map_err(|e| ShortenError::Api(format!("Failed to parse response: {}", e)))?;

        parsed
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ShortenError::Api("Response did not contain a short url".to_string()))
    }
}
