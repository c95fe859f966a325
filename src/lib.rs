//! Resolves the language a site renders in from the client's `Accept-Language`
//! preferences, falling back to a configured default.

pub mod accept_language;
pub mod configuration;
pub mod error;
pub mod preferred_language;
pub mod routes;
mod site_language;

pub use error::ConfigurationError;
pub use preferred_language::PreferredLanguage;
pub use site_language::SiteLanguage;
