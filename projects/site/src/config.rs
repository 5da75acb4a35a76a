use std::{env, net::SocketAddr, path::PathBuf};

use interfaces_github_activity::index::GITHUB_API_URL;
use thiserror::Error;
use utils_trace::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_SITE_DIR: &str = "public";
pub const DEFAULT_USER_AGENT: &str = "freethecode-site";
pub const DEFAULT_LOG_DIRECTIVES: &str = "info";

/// Environment variables checked for the upstream credential, in order.
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub site_dir: PathBuf,
    pub github_api_url: String,
    pub user_agent: String,
    pub log_directives: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidBindAddr: {value}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[source]
        source: utils_trace::TracingInitError,
    },
}

impl Config {
    /// Reads the process environment, after loading `.env` when one exists.
    /// Credentials are not part of the config; see [`Credential`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let log_format = var_or("LOG_FORMAT", "compact")
            .parse()
            .map_err(|source| ConfigError::InvalidLogFormat { source })?;

        Ok(Self {
            bind_addr,
            site_dir: var_or("SITE_DIR", DEFAULT_SITE_DIR).into(),
            github_api_url: var_or("GITHUB_API_URL", GITHUB_API_URL),
            user_agent: var_or("GH_PROXY_USER_AGENT", DEFAULT_USER_AGENT),
            log_directives: var_or("RUST_LOG", DEFAULT_LOG_DIRECTIVES),
            log_format,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Where the optional upstream bearer token comes from.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Looked up on every call; the first variable set to a non-empty value wins.
    Env(&'static [&'static str]),
    Fixed(Option<String>),
}

impl Credential {
    pub fn from_env() -> Self {
        Credential::Env(&TOKEN_VARS)
    }

    pub fn resolve(&self) -> Option<String> {
        match self {
            Credential::Env(keys) => first_present(keys.iter().map(|key| env::var(key).ok())),
            Credential::Fixed(token) => token.clone().filter(|token| !token.is_empty()),
        }
    }
}

fn first_present(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}
