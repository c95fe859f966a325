use std::{
    env,
    net::{AddrParseError, Ipv4Addr, SocketAddr, SocketAddrV4},
};

use thiserror::Error;

use crate::SiteLanguage;

const SUPPORTED_LANGUAGES: &str = "SITE_LANGUAGES";
const DEFAULT_LANGUAGE: &str = "SITE_DEFAULT_LANGUAGE";
const ADDRESS: &str = "SITE_ADDRESS";

const DEFAULT_ADDRESS: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load {variable} from environment variables: {source}")]
    Load {
        variable: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("Error parsing {variable} as a socket address: {source}")]
    Address {
        variable: &'static str,
        #[source]
        source: AddrParseError,
    },
}

/// Settings the server reads from the environment at startup.
///
/// Language values are not validated here. An empty list or empty default is only
/// reported once a language is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub supported_languages: Vec<String>,
    pub default_language: String,
    pub address: SocketAddr,
}

impl Configuration {
    pub fn from_env() -> Result<Self, Error> {
        let supported_languages = parse_languages(&load(SUPPORTED_LANGUAGES)?);
        let default_language = load(DEFAULT_LANGUAGE)?.trim().to_owned();

        let address = match env::var(ADDRESS) {
            Ok(value) => value.parse().map_err(|source| Error::Address {
                variable: ADDRESS,
                source,
            })?,
            Err(env::VarError::NotPresent) => DEFAULT_ADDRESS,
            Err(source) => {
                return Err(Error::Load {
                    variable: ADDRESS,
                    source,
                })
            }
        };

        Ok(Self {
            supported_languages,
            default_language,
            address,
        })
    }

    pub fn resolver(&self) -> SiteLanguage {
        SiteLanguage::new(
            self.supported_languages.iter().cloned(),
            self.default_language.clone(),
        )
    }
}

fn load(variable: &'static str) -> Result<String, Error> {
    env::var(variable).map_err(|source| Error::Load { variable, source })
}

/// `"en, fr,,de"` becomes `["en", "fr", "de"]`
fn parse_languages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_owned)
        .collect()
}
