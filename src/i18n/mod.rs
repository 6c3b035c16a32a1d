//! Internationalization (i18n) engine for the FarmNex assistant.
//!
//! Classifies free-form messages as English, Sinhala or Tamil, resolves
//! semantic keys against compiled translation tables, and renders advice
//! templates. All tables are read-only process-wide state built once on first
//! use; every operation is a synchronous function safe to call from any
//! number of threads.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Type-safe `Language` tag for the closed language set
//! - `strings`: Compiled translation, vocabulary and template data
//! - `detect`: Lexical pattern and script range classifier
//! - `resolver`: Key lookup with the English fallback chain
//! - `template`: Placeholder substitution and multilingual reply wrapping
//! - `validator`: Catalog consistency checks
//!
//! # Failure model
//!
//! Lookups never return errors. A missing key echoes the key, a missing
//! localized entry falls back to English, an unknown template falls back to
//! the raw advice, and an unfilled placeholder stays literal.
//!
//! # Example
//!
//! ```rust
//! use farmnex_lingua::i18n::{detect_language, translate, Language};
//!
//! let language = detect_language("வணக்கம்");
//! assert_eq!(language, Language::Tamil);
//! assert_eq!(translate("rice", language), "அரிசி");
//! ```

mod detect;
mod language;
mod registry;
mod resolver;
mod strings;
mod template;
mod validator;

pub use detect::{
    detect_language, LexicalPatterns, ScriptRange, LEXICAL_PATTERNS, SCRIPT_RANGES,
    SINHALA_BLOCK, TAMIL_BLOCK,
};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, SupportedLanguage};
pub use resolver::{
    get_greeting, resolve, translate, translate_animal, translate_crop, Catalog,
    TranslationTable,
};
pub use strings::Localized;
pub use template::{
    create_multilingual_response, format_response, placeholders, substitute, TemplateParams,
    NO_ADVICE,
};
pub use validator::{CatalogValidator, ValidationReport, REQUIRED_KEYS};
