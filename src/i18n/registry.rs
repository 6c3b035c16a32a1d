//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages the engine
//! understands. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and read-only access afterwards.

use serde::Serialize;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its code, names,
/// and whether it's the canonical (fallback) language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "si", "ta")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Sinhala", "Tamil")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "සිංහල", "தமிழ்")
    pub native_name: &'static str,

    /// Whether this is the canonical/fallback language (only one should be true)
    pub is_canonical: bool,
}

/// Entry returned to language pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

impl From<&LanguageConfig> for SupportedLanguage {
    fn from(config: &LanguageConfig) -> Self {
        Self {
            code: config.code,
            name: config.name,
            native: config.native_name,
        }
    }
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "si")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Languages in the shape language pickers consume.
    pub fn supported(&self) -> Vec<SupportedLanguage> {
        self.languages.iter().map(SupportedLanguage::from).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the universal fallback for every lookup.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical_langs = self.languages.iter().filter(|lang| lang.is_canonical);

        match (canonical_langs.next(), canonical_langs.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations: English (canonical), Sinhala and Tamil.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            code: "si",
            name: "Sinhala",
            native_name: "සිංහල",
            is_canonical: false,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            is_canonical: false,
        },
    ]
}
