use crate::i18n::Language;
use anyhow::{Context, Result};

/// Default tracing directive when `LOG_DIRECTIVE` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "farmnex_lingua=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Logging
    pub log_directive: String,

    // Language selection
    pub force_language: Option<Language>,

    // Startup checks
    pub validate_catalog_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            force_language: None,
            validate_catalog_on_startup: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            // Logging
            log_directive: lookup("LOG_DIRECTIVE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),

            // Language selection - an invalid code is a configuration error
            force_language: lookup("FORCE_LANGUAGE")
                .filter(|v| !v.trim().is_empty())
                .map(|v| Language::from_code(v.trim()))
                .transpose()
                .context("FORCE_LANGUAGE must be one of en, si, ta")?,

            // Startup checks
            validate_catalog_on_startup: lookup("VALIDATE_CATALOG_ON_STARTUP")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
