//! Host configuration: Leptos options plus environment overrides.
//!
//! Leptos reads its own settings from `[package.metadata.leptos]` and
//! `LEPTOS_*` variables. On top of that:
//! - `PORT`: optional u16, replaces the port of the site address
//! - `SITE_ROOT`: optional directory holding the built `/pkg` assets

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::{LeptosOptions, get_configuration};

/// Errors raised while assembling host configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build the host config. Loads `.env` first when one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration is missing or malformed,
    /// or if `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let mut leptos = conf.leptos_options;

        if let Some(port) = parse_port(std::env::var("PORT").ok().as_deref())? {
            leptos.site_addr.set_port(port);
        }
        if let Some(root) = parse_site_root(std::env::var("SITE_ROOT").ok().as_deref()) {
            leptos.site_root = root.into();
        }

        Ok(Self { leptos })
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let without_slash = trimmed.trim_end_matches('/');
    if without_slash.is_empty() {
        Some("/".to_owned())
    } else {
        Some(without_slash.to_owned())
    }
}
