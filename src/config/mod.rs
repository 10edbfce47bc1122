mod schema;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use schema::{ClassesConfig, Config, DocumentConfig, LinksConfig, SafetyConfig};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl SafetyConfig {
    /// Whether a link to `url` may be emitted.
    ///
    /// The URL is cleaned the way browsers clean it before its scheme is read.
    /// Scheme-less URLs are allowed when they are plainly relative, or when
    /// they carry no entity or control character that could hide a scheme.
    pub fn allows_url(&self, url: &str) -> bool {
        if self.allowed_schemes.is_empty() {
            return true;
        }
        let url = clean_url(url);
        match url_scheme(&url) {
            Some(scheme) => self
                .allowed_schemes
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme)),
            None => {
                url.starts_with(['/', '#', '?', '.'])
                    || !(url.contains('&') || url.chars().any(char::is_control))
            }
        }
    }
}

/// Drop leading C0 controls and spaces, and every tab or newline.
fn clean_url(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|&c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

fn url_scheme(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        Some(scheme)
    } else {
        None
    }
}

impl Config {
    /// The defaults shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        match toml::from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "shipped default config is invalid, using built-in defaults");
                Self::default()
            }
        }
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return the compiled defaults if it
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::compiled_default());
        }
        Self::load(path)
    }
}
