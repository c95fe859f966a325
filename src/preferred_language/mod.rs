//! This is based on:
//! - https://yieldcode.blog/post/webapp-localization-in-rust/
//! - https://docs.rs/axum/latest/axum/extract/trait.FromRequestParts.html

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{error::ConfigurationError, SiteLanguage};

/// The site language resolved for the current request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferredLanguage(pub Arc<str>);

#[async_trait]
impl<S> FromRequestParts<S> for PreferredLanguage
where
    S: Send + Sync,
    Arc<SiteLanguage>: FromRef<S>,
{
    type Rejection = ConfigurationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let site_language = Arc::<SiteLanguage>::from_ref(state);

        let language = site_language
            .resolve_header(&parts.headers)
            .inspect_err(|error| tracing::error!("Failed to resolve site language: {error}"))?;

        tracing::debug!("Preferred language: {language}");
        Ok(PreferredLanguage(Arc::from(language)))
    }
}
