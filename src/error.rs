use thiserror::Error;

/// Errors raised while constructing engine inputs.
///
/// Lookups themselves never fail; they degrade to a visible fallback instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unknown language code: '{0}'")]
    UnsupportedLanguage(String),
}
