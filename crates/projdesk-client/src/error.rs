//! Mapping of reqwest failures onto [`projdesk_core::Error`].

use projdesk_core::Error;

/// Converts a failed send into an unreachable-backend error.
pub fn transport_error(method: &str, url: &str, err: reqwest::Error) -> Error {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };
    Error::unreachable_with_source(format!("{method} {url} {kind}"), err)
}

/// Converts a body that could not be read into an unreachable-backend error.
pub fn body_error(url: &str, err: reqwest::Error) -> Error {
    Error::unreachable_with_source(format!("reading response from {url} failed"), err)
}

/// Converts a body that could not be parsed into a decode error.
pub fn decode_error(url: &str, err: serde_json::Error) -> Error {
    Error::decode(format!("unexpected response from {url}: {err}"))
}
