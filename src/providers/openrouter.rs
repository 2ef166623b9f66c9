use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ErrorDetail, SearchError};
use crate::model::ChatRequest;
use crate::providers::http_errors::gateway_request_error;

const HTTP_REFERER: &str = "https://github.com/pgd-LC2/aisitebuilder";
const X_TITLE: &str = "aisitebuilder-perplexity-search";

/// Pulls `choices[0].message.content` out of a decoded completion body.
fn extract_content(body: &Value) -> Option<&str> {
    body.get("choices")?
        .as_array()?
        .first()?
        .pointer("/message/content")?
        .as_str()
}

pub async fn chat(
    client: &Client,
    cfg: &Config,
    request: &ChatRequest,
) -> Result<String, SearchError> {
    debug!(
        api_url = %cfg.api_url,
        model = %request.model,
        message_count = request.messages.len(),
        timeout_secs = cfg.request_timeout_secs,
        "sending chat completion request"
    );

    let response = client
        .post(&cfg.api_url)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", cfg.api_key))
        .header("HTTP-Referer", HTTP_REFERER)
        .header("X-Title", X_TITLE)
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .json(request)
        .send()
        .await
        .map_err(|err| {
            warn!(
                api_url = %cfg.api_url,
                model = %request.model,
                error = %err,
                "chat completion request failed"
            );
            gateway_request_error(err, cfg.request_timeout_secs)
        })?;

    let status = response.status();
    let response_body = response
        .text()
        .await
        .map_err(|err| gateway_request_error(err, cfg.request_timeout_secs))?;

    if !status.is_success() {
        warn!(
            api_url = %cfg.api_url,
            model = %request.model,
            status = %status,
            response_body_len = response_body.len(),
            "gateway returned non-success status"
        );
        return Err(SearchError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            detail: ErrorDetail::from_body(&response_body),
        });
    }

    let parsed: Value = serde_json::from_str(&response_body).map_err(|err| {
        warn!(error = %err, "gateway returned a non-JSON body");
        SearchError::InvalidJson {
            body: response_body.clone(),
        }
    })?;

    match extract_content(&parsed) {
        Some(content) => {
            debug!(
                model = %request.model,
                response_len = content.len(),
                "received chat completion"
            );
            Ok(content.to_string())
        }
        None => {
            warn!(model = %request.model, "gateway response has no usable choices");
            Err(SearchError::UnexpectedResponse { body: parsed })
        }
    }
}
