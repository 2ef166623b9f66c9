use serde_json::Value;
use thiserror::Error;

/// Failures that are reported to the user as a formatted diagnostic.
///
/// The `Display` output of each variant is exactly what ends up on stderr.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("error: {var} environment variable is not set\nset it with: export {var}='your-api-key'")]
    MissingCredential { var: &'static str },

    #[error("error: API returned an unexpected response shape\nresponse: {}", pretty_json(.body))]
    UnexpectedResponse { body: Value },

    #[error("error: API returned a body that is not valid JSON\nresponse: {body}")]
    InvalidJson { body: String },

    #[error("HTTP error {status}: {reason}{}", detail_suffix(.detail))]
    HttpStatus {
        status: u16,
        reason: String,
        detail: Option<ErrorDetail>,
    },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("error: request timed out ({secs}s)")]
    Timeout { secs: u64 },
}

/// Body of a non-success response, parsed as JSON when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Json(Value),
    Text(String),
}

impl ErrorDetail {
    pub fn from_body(body: &str) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_string()),
        })
    }
}

pub(crate) fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn detail_suffix(detail: &Option<ErrorDetail>) -> String {
    match detail {
        Some(ErrorDetail::Json(value)) => format!("\nerror detail: {}", pretty_json(value)),
        Some(ErrorDetail::Text(text)) => format!("\nerror detail: {text}"),
        None => String::new(),
    }
}
