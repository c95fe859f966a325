//! Reading the client's language preference from HTTP requests.
//!
//! This is based on:
//! - https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Accept-Language
//! - https://httpwg.org/specs/rfc9110.html#field.accept-language
use axum::http::{self, HeaderMap};

use crate::{error::ConfigurationError, SiteLanguage};

/// Raw `Accept-Language` value, or `None` if the client did not send a usable one.
pub fn header_value(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(http::header::ACCEPT_LANGUAGE)?;

    value
        .to_str()
        .inspect_err(|error| {
            tracing::warn!("Expected accept language header to contain a string value: {error}")
        })
        .ok()
}

impl SiteLanguage {
    /// Resolves the language for a request from its `Accept-Language` header.
    pub fn resolve_header(&self, headers: &HeaderMap) -> Result<String, ConfigurationError> {
        self.resolve(header_value(headers))
    }
}
