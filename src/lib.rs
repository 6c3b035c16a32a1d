//! Language engine for the FarmNex agricultural assistant.
//!
//! Detects whether a message is English, Sinhala or Tamil, resolves localized
//! strings with an English fallback, and renders advice templates.

pub mod config;
pub mod error;
pub mod i18n;
pub mod service;

pub use error::I18nError;
pub use i18n::Language;
pub use service::LanguageService;
