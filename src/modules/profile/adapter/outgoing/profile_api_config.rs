use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("HTTP client could not be built: {0}")]
    HttpClient(String),
}

/// Where the profile backend lives and how to talk to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileApiConfig {
    pub base_url: String,
    /// Opaque bearer token issued by the backend's auth flow.
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl ProfileApiConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Config without env reads.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Load from `DOCLEARN_API_URL`, `DOCLEARN_API_TOKEN` and `DOCLEARN_API_TIMEOUT_SECS`
    /// (a `.env` file is honored when present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("DOCLEARN_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DOCLEARN_API_URL"))?;

        let access_token = env::var("DOCLEARN_API_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let timeout_secs = match env::var("DOCLEARN_API_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            access_token,
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(&base_url)
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ConfigError::Invalid {
            key: "DOCLEARN_API_TIMEOUT_SECS",
            value: raw.to_string(),
        })
}
