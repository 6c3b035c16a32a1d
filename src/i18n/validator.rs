//! Catalog validation module.
//!
//! Checks the compiled tables for gaps that would otherwise only show up at
//! runtime as echoed keys or half-rendered templates: missing keys the
//! chatbot layer relies on, empty English entries, and localized templates
//! whose placeholders drift from the English template.

use crate::i18n::resolver::{Catalog, TranslationTable};
use crate::i18n::strings::Localized;
use crate::i18n::template::{placeholders, ADVICE_PARAM, ADVICE_START_KEY};
use crate::i18n::Language;
use serde::Serialize;
use std::collections::BTreeSet;

/// Translation keys callers depend on.
pub const REQUIRED_KEYS: &[&str] = &[
    ADVICE_START_KEY,
    "hello",
    "help",
    "not_understand",
    "technical_error",
    "welcome",
];

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make a lookup degrade to its fallback
    pub errors: Vec<String>,

    /// Suspicious entries that still resolve
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the compiled translation catalog.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every table in the global catalog.
    pub fn validate_all() -> ValidationReport {
        let catalog = Catalog::global();
        let mut report = ValidationReport::new();

        report.merge(Self::validate_required_keys(&catalog.translations, REQUIRED_KEYS));
        report.merge(Self::validate_entries("translation", &catalog.translations));
        report.merge(Self::validate_entries("crop", &catalog.crops));
        report.merge(Self::validate_entries("animal", &catalog.animals));
        report.merge(Self::validate_entries("template", &catalog.templates));
        report.merge(Self::validate_templates(&catalog.templates));
        report.merge(Self::validate_entry("greeting", &catalog.greeting));

        report
    }

    /// Check that each of `required` is present in `table`.
    pub fn validate_required_keys(table: &TranslationTable, required: &[&str]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in required {
            if !table.contains(key) {
                report
                    .errors
                    .push(format!("Required key '{}' is missing", key));
            }
        }

        report
    }

    /// Check every entry of `table`, labelling findings with `kind`.
    pub fn validate_entries(kind: &str, table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in table.keys() {
            if let Some(entry) = table.get(key) {
                report.merge(Self::validate_entry(&format!("{} '{}'", kind, key), entry));
            }
        }

        report
    }

    /// Check one localized record.
    ///
    /// An empty English string is an error because nothing is left to fall
    /// back to. An empty localized string is a warning: it resolves to English.
    pub fn validate_entry(label: &str, entry: &Localized) -> ValidationReport {
        let mut report = ValidationReport::new();

        if entry.en.is_empty() {
            report
                .errors
                .push(format!("{} has an empty English entry", label));
        }

        for (language, text) in [(Language::Sinhala, entry.si), (Language::Tamil, entry.ta)] {
            if text == Some("") {
                report.warnings.push(format!(
                    "{} has an empty {} entry",
                    label,
                    language.name()
                ));
            }
        }

        report
    }

    /// Check placeholder consistency across the languages of each template.
    pub fn validate_templates(templates: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for name in templates.keys() {
            let Some(entry) = templates.get(name) else {
                continue;
            };

            let english = placeholder_set(entry.en);
            if !english.contains(ADVICE_PARAM) {
                report.errors.push(format!(
                    "Template '{}' has no {{{}}} placeholder",
                    name, ADVICE_PARAM
                ));
            }

            for (language, text) in [(Language::Sinhala, entry.si), (Language::Tamil, entry.ta)] {
                let Some(text) = text else {
                    continue;
                };
                let localized = placeholder_set(text);
                if localized != english {
                    report.warnings.push(format!(
                        "Placeholder mismatch in template '{}' ({}): English has {:?}, {} has {:?}",
                        name,
                        language.code(),
                        english,
                        language.name(),
                        localized
                    ));
                }
            }
        }

        report
    }
}

fn placeholder_set(template: &str) -> BTreeSet<String> {
    placeholders(template).into_iter().collect()
}
