use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The resolver was used before the embedding application configured it.
///
/// These are returned by [`crate::SiteLanguage::resolve`] only. A missing
/// client preference is not an error and never produces one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("accepted languages not configured")]
    AcceptedLanguagesNotConfigured,
    #[error("default language not configured")]
    DefaultLanguageNotConfigured,
}

impl IntoResponse for ConfigurationError {
    fn into_response(self) -> Response {
        // Don't tell clients how the server is configured
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
