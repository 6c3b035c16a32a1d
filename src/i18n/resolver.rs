//! Key-based translation lookup with an English fallback.
//!
//! Every lookup site goes through [`resolve`], which applies the one fallback
//! chain the engine has: requested language, then English. Callers that get
//! nothing back echo their input (key or term name) so that a gap in the
//! tables shows up in the output instead of producing an empty reply.

use crate::i18n::strings::{Localized, ANIMALS, CROPS, GREETING, TEMPLATES, TRANSLATIONS};
use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Read-only mapping from a semantic key to its localized record.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<&'static str, Localized>,
}

impl TranslationTable {
    /// Build a table from a static slice of entries.
    pub fn from_entries(entries: &[(&'static str, Localized)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Record for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Localized> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Localized)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All compiled tables, indexed once per process.
#[derive(Debug)]
pub struct Catalog {
    /// Short semantic keys
    pub translations: TranslationTable,

    /// Crop vocabulary, keyed by lower-cased English name
    pub crops: TranslationTable,

    /// Animal vocabulary, keyed by lower-cased English name
    pub animals: TranslationTable,

    /// Response templates, keyed by template name
    pub templates: TranslationTable,

    /// Assistant greeting
    pub greeting: Localized,
}

/// Global catalog instance (initialized lazily)
static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog instance.
    ///
    /// The catalog is built on first call and never mutated afterwards, so
    /// concurrent readers need no locking.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog {
            translations: TranslationTable::from_entries(TRANSLATIONS),
            crops: TranslationTable::from_entries(CROPS),
            animals: TranslationTable::from_entries(ANIMALS),
            templates: TranslationTable::from_entries(TEMPLATES),
            greeting: GREETING,
        })
    }
}

/// Entry for `language` exactly as stored, without fallback.
///
/// Empty strings count as missing.
pub fn localized(entry: &Localized, language: Language) -> Option<&'static str> {
    let text = match language {
        Language::English => Some(entry.en),
        Language::Sinhala => entry.si,
        Language::Tamil => entry.ta,
    };
    text.filter(|text| !text.is_empty())
}

/// Resolve `entry` for `language`, falling back to English.
///
/// Returns `None` only when neither the requested language nor English has a
/// non-empty string.
pub fn resolve(entry: &Localized, language: Language) -> Option<&'static str> {
    localized(entry, language).or_else(|| {
        if language != Language::canonical() {
            debug!("No {} entry, falling back to English", language);
        }
        localized(entry, Language::canonical())
    })
}

/// Translate a semantic key.
///
/// Unknown keys are returned unchanged.
pub fn translate(key: &str, language: Language) -> String {
    let Some(entry) = Catalog::global().translations.get(key) else {
        debug!("Translation key '{}' not found, echoing key", key);
        return key.to_string();
    };

    resolve(entry, language).unwrap_or(key).to_string()
}

/// Localized assistant greeting.
pub fn get_greeting(language: Language) -> String {
    let greeting = &Catalog::global().greeting;
    resolve(greeting, language)
        .unwrap_or(greeting.en)
        .to_string()
}

/// Localized crop name. Unknown crops pass through unchanged.
pub fn translate_crop(name: &str, language: Language) -> String {
    translate_term(&Catalog::global().crops, name, language)
}

/// Localized animal name. Unknown animals pass through unchanged.
pub fn translate_animal(name: &str, language: Language) -> String {
    translate_term(&Catalog::global().animals, name, language)
}

/// Case-insensitive lookup in a closed vocabulary.
fn translate_term(vocabulary: &TranslationTable, name: &str, language: Language) -> String {
    vocabulary
        .get(&name.to_lowercase())
        .and_then(|entry| resolve(entry, language))
        .unwrap_or(name)
        .to_string()
}
