use std::sync::Arc;

use axum::{routing::get, Router};

use crate::SiteLanguage;

pub(crate) mod index;

/// Routes answering with the language resolved for each request.
pub fn router(site_language: Arc<SiteLanguage>) -> Router {
    Router::new()
        .route("/", get(index::get_language))
        .with_state(site_language)
}
