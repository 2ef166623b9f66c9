use std::env;
use std::fmt;

use crate::error::SearchError;

pub const API_KEY_VAR: &str = "OPENROUTER_KEY";
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub(crate) fn from_env_with(
        mut get_var: impl FnMut(&str) -> Option<String>,
    ) -> Result<Self, SearchError> {
        let api_key = parse_api_key(get_var(API_KEY_VAR).as_deref())?;
        let api_url = parse_api_url(get_var("OPENROUTER_API_URL").as_deref());
        let request_timeout_secs =
            parse_request_timeout_secs(get_var("REQUEST_TIMEOUT_SECS").as_deref());

        Ok(Self {
            api_key,
            api_url,
            request_timeout_secs,
        })
    }
}

fn parse_api_key(raw: Option<&str>) -> Result<String, SearchError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(SearchError::MissingCredential { var: API_KEY_VAR })
}

fn parse_api_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn parse_request_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}
