use std::error::Error as StdError;
use std::io::ErrorKind;

use crate::error::SearchError;

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == ErrorKind::TimedOut
        {
            return true;
        }

        if source
            .to_string()
            .to_ascii_lowercase()
            .contains("timed out")
        {
            return true;
        }

        current = source.source();
    }

    false
}

/// Innermost message in the source chain, e.g. "Connection refused (os error 111)".
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current: &(dyn StdError + 'static) = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

pub(crate) fn gateway_request_error(err: reqwest::Error, timeout_secs: u64) -> SearchError {
    if err.is_timeout() || error_chain_has_timeout(&err) {
        return SearchError::Timeout { secs: timeout_secs };
    }

    let cause = root_cause(&err);
    let reason = if err.is_connect() || cause == err.to_string() {
        cause
    } else {
        format!("{err}: {cause}")
    };
    SearchError::Network { reason }
}
