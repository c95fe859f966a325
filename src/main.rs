use std::{io, sync::Arc};

use site_language::{configuration, routes};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum Error {
    #[error("Error loading configuration: {0}")]
    Configuration(#[from] configuration::Error),
    #[error("Error running server: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("site_language=debug,tower_http=debug")),
        )
        .init();

    let configuration = configuration::Configuration::from_env()?;
    tracing::debug!(
        "Supported languages: {:?}, default language: {}",
        configuration.supported_languages,
        configuration.default_language
    );

    // Configured once at startup and shared read-only between requests
    let site_language = Arc::new(configuration.resolver());

    let app = routes::router(site_language).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(configuration.address).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
