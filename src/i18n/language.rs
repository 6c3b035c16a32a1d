//! Language type: the closed set of languages the engine answers in.
//!
//! Metadata (names, canonical flag) lives in the registry; this
//! type only carries the identity and validates codes against the registry.

use crate::error::I18nError;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// English (canonical, universal fallback)
    #[default]
    English,
    /// Sinhala
    Sinhala,
    /// Tamil
    Tamil,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "si", "ta")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .and_then(|config| Self::from_registered(config.code))
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// Lenient variant of [`Language::from_code`] for string-typed callers.
    ///
    /// Unknown codes resolve to the canonical language.
    pub fn from_code_or_canonical(code: &str) -> Language {
        Self::from_code(code).unwrap_or_else(|_| Self::canonical())
    }

    /// Get the canonical (fallback) language, as flagged in the registry.
    ///
    /// # Panics
    /// Panics if the registry's canonical code has no enum variant.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Self::from_registered(config.code)
            .expect("Canonical language should have a Language variant")
    }

    fn from_registered(code: &str) -> Option<Language> {
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }

    /// All languages, in registry order.
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Sinhala, Language::Tamil]
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Sinhala => "si",
            Language::Tamil => "ta",
        }
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which would mean the
    /// enum and the registry table have drifted apart.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Language code should always be registered")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Language {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        assert_eq!(Language::from_code("en"), Ok(Language::English));
        assert_eq!(Language::from_code("si"), Ok(Language::Sinhala));
        assert_eq!(Language::from_code("ta"), Ok(Language::Tamil));
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert_eq!(
            result,
            Err(I18nError::UnsupportedLanguage("fr".to_string()))
        );
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_or_canonical() {
        assert_eq!(Language::from_code_or_canonical("ta"), Language::Tamil);
        assert_eq!(Language::from_code_or_canonical("fr"), Language::English);
        assert_eq!(Language::from_code_or_canonical(""), Language::English);
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_canonical_is_english() {
        assert_eq!(Language::canonical(), Language::English);
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_canonical());
        assert!(!Language::Sinhala.is_canonical());
        assert!(!Language::Tamil.is_canonical());
    }

    #[test]
    fn test_names() {
        assert_eq!(Language::Sinhala.name(), "Sinhala");
        assert_eq!(Language::Sinhala.native_name(), "සිංහල");
        assert_eq!(Language::Tamil.name(), "Tamil");
        assert_eq!(Language::Tamil.native_name(), "தமிழ்");
    }

    #[test]
    fn test_all_matches_registry() {
        for language in Language::all() {
            assert_eq!(language.config().code, language.code());
        }
        assert_eq!(LanguageRegistry::get().supported().len(), Language::all().len());
    }

    #[test]
    fn test_canonical_agrees_with_registry_flag() {
        let flagged: Vec<_> = Language::all()
            .iter()
            .copied()
            .filter(Language::is_canonical)
            .collect();
        assert_eq!(flagged, vec![Language::canonical()]);
        assert_eq!(
            Language::canonical().code(),
            LanguageRegistry::get().canonical().code
        );
    }

    #[test]
    fn test_from_code_only_reports_unsupported() {
        for code in ["fr", "", "EN", "sin"] {
            assert_eq!(
                Language::from_code(code),
                Err(I18nError::UnsupportedLanguage(code.to_string()))
            );
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_prints_code() {
        assert_eq!(Language::Tamil.to_string(), "ta");
        assert_eq!(format!("{}", Language::Sinhala), "si");
    }

    #[test]
    fn test_from_str() {
        let language: Language = "si".parse().expect("Should parse");
        assert_eq!(language, Language::Sinhala);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Language::Tamil).unwrap();
        assert_eq!(json, "\"ta\"");

        let parsed: Language = serde_json::from_str("\"si\"").unwrap();
        assert_eq!(parsed, Language::Sinhala);

        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }
}
