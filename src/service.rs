//! Language service facade consumed by the chatbot layer.
//!
//! Groups the engine operations behind one handle so callers do not need to
//! know which module owns which table. The service holds no state of its own;
//! cloning or sharing it across threads is free.

use crate::i18n::{
    self, Language, LanguageRegistry, SupportedLanguage, TemplateParams,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageService;

impl LanguageService {
    pub fn new() -> Self {
        Self
    }

    /// Detect the language of a user message.
    pub fn detect_language(&self, text: &str) -> Language {
        i18n::detect_language(text)
    }

    /// Translate a semantic key. Unknown keys are echoed back.
    pub fn translate(&self, key: &str, language: Language) -> String {
        i18n::translate(key, language)
    }

    /// Translate a semantic key for a raw language code.
    ///
    /// Unsupported codes (e.g. "fr") resolve to English.
    pub fn translate_for_code(&self, key: &str, code: &str) -> String {
        i18n::translate(key, Language::from_code_or_canonical(code))
    }

    pub fn get_greeting(&self, language: Language) -> String {
        i18n::get_greeting(language)
    }

    pub fn translate_crop(&self, crop_name: &str, language: Language) -> String {
        i18n::translate_crop(crop_name, language)
    }

    pub fn translate_animal(&self, animal_name: &str, language: Language) -> String {
        i18n::translate_animal(animal_name, language)
    }

    /// Render an advice template. See [`i18n::format_response`].
    pub fn format_response(
        &self,
        template_name: &str,
        params: &TemplateParams,
        language: Language,
    ) -> String {
        i18n::format_response(template_name, params, language)
    }

    pub fn create_multilingual_response(&self, english_text: &str, language: Language) -> String {
        i18n::create_multilingual_response(english_text, language)
    }

    /// Languages offered to UI language pickers.
    pub fn get_supported_languages(&self) -> Vec<SupportedLanguage> {
        LanguageRegistry::get().supported()
    }

    /// Whether `code` names a supported language.
    pub fn is_valid_language(&self, code: &str) -> bool {
        LanguageRegistry::get().is_supported(code)
    }

    /// English display name for `code`, or the code itself when unknown.
    pub fn get_language_name(&self, code: &str) -> String {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.name)
            .unwrap_or(code)
            .to_string()
    }

    /// Native display name for `code`, or the code itself when unknown.
    pub fn get_language_native_name(&self, code: &str) -> String {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.native_name)
            .unwrap_or(code)
            .to_string()
    }

    /// Normalise a message before matching.
    ///
    /// Sinhala and Tamil text is trimmed. English text is trimmed and
    /// lower-cased.
    pub fn process_text(&self, text: &str, language: Language) -> String {
        match language {
            Language::Sinhala | Language::Tamil => text.trim().to_string(),
            Language::English => text.trim().to_lowercase(),
        }
    }
}
