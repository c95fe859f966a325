//! Picks the language a site renders in from the client's `Accept-Language` value.
//!
//! Matching only looks at primary subtags (`en-US` is treated as `en`) and follows the
//! order the client listed them in. Quality values (`;q=0.8`) are stripped and ignored,
//! so `"fr;q=0.1,de"` prefers French when both are supported.

use crate::error::ConfigurationError;

/// The languages a site supports together with the language it falls back to.
///
/// Nothing is validated when the values are set. An unconfigured resolver only fails
/// once [`SiteLanguage::resolve`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteLanguage {
    supported: Vec<String>,
    default: String,
}

impl SiteLanguage {
    pub fn new<I, S>(supported: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported: supported.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }

    /// Resolves the language to render in.
    ///
    /// `preference` is the raw `Accept-Language` value or `None` if the client did not
    /// send one, in which case the default language is returned.
    pub fn resolve(&self, preference: Option<&str>) -> Result<String, ConfigurationError> {
        self.guard_is_configured()?;

        let Some(preference) = preference else {
            tracing::debug!(
                "No language preference provided, using default language {}",
                self.default
            );
            return Ok(self.default.clone());
        };

        match self.best_match(preference) {
            Some(language) => Ok(language.to_owned()),
            None => {
                tracing::debug!(
                    "No supported language in \"{preference}\", using default language {}",
                    self.default
                );
                Ok(self.default.clone())
            }
        }
    }

    /// First primary subtag in client order that the site supports.
    fn best_match<'a>(&self, preference: &'a str) -> Option<&'a str> {
        primary_subtags(preference)
            .into_iter()
            .find(|language| self.supported.iter().any(|supported| supported == language))
    }

    fn guard_is_configured(&self) -> Result<(), ConfigurationError> {
        if self.supported.is_empty() {
            return Err(ConfigurationError::AcceptedLanguagesNotConfigured);
        }

        if self.default.is_empty() {
            return Err(ConfigurationError::DefaultLanguageNotConfigured);
        }

        Ok(())
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn set_supported<I, S>(&mut self, supported: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported = supported.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    pub fn set_default_language(&mut self, default: impl Into<String>) -> &mut Self {
        self.default = default.into();
        self
    }
}

/// Splits a preference value into its distinct primary subtags, keeping client order.
///
/// Weights and region suffixes are dropped: `"en-US,en;q=0.9,fr;q=0.8"` becomes
/// `["en", "fr"]`. Entries are not trimmed and empty entries are skipped.
pub(crate) fn primary_subtags(preference: &str) -> Vec<&str> {
    let mut languages: Vec<&str> = Vec::new();

    for entry in preference.split(',') {
        let tag = entry.split_once(';').map_or(entry, |(tag, _weight)| tag);
        let primary = tag.split_once('-').map_or(tag, |(primary, _)| primary);

        if primary.is_empty() || languages.contains(&primary) {
            continue;
        }

        languages.push(primary);
    }

    languages
}
