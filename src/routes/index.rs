use axum::{http::header, response::IntoResponse};

use crate::preferred_language::PreferredLanguage;

pub(crate) async fn get_language(
    PreferredLanguage(language): PreferredLanguage,
) -> impl IntoResponse {
    (
        [(header::CONTENT_LANGUAGE, language.to_string())],
        language.to_string(),
    )
}
