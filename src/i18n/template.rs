//! Advice templates with `{name}` placeholders.
//!
//! Substitution replaces only the first occurrence of each placeholder. A
//! template that repeats a placeholder keeps the later copies literal, and a
//! placeholder with no matching parameter is left in the output as-is.

use crate::i18n::resolver::{resolve, translate, Catalog};
use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, Level};

/// Reply used when the template is unknown and no `advice` was supplied.
pub const NO_ADVICE: &str = "No advice available";

/// Parameter consulted when the template name is unknown.
pub const ADVICE_PARAM: &str = "advice";

/// Translation key of the preamble put in front of English replies.
pub const ADVICE_START_KEY: &str = "advice_start";

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Template parameters, kept in insertion order.
///
/// Substitution runs in that order. Inserting an existing name replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    entries: Vec<(String, String)>,
}

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`TemplateParams::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Placeholder names in `template`, in order of appearance (duplicates kept).
pub fn placeholders(template: &str) -> Vec<String> {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

    regex
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Substitute `params` into `template`, first occurrence per name only.
pub fn substitute(template: &str, params: &TemplateParams) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replacen(&format!("{{{}}}", name), value, 1)
        })
}

/// Render the named template for `language`.
///
/// Unknown template names degrade to the `advice` parameter, or to
/// [`NO_ADVICE`] when that is missing or empty.
pub fn format_response(template_name: &str, params: &TemplateParams, language: Language) -> String {
    let Some(entry) = Catalog::global().templates.get(template_name) else {
        debug!("Template '{}' not found, using raw advice", template_name);
        return params
            .get(ADVICE_PARAM)
            .filter(|advice| !advice.is_empty())
            .unwrap_or(NO_ADVICE)
            .to_string();
    };

    let template = resolve(entry, language).unwrap_or(template_name);
    let rendered = substitute(template, params);

    if tracing::enabled!(Level::DEBUG) {
        let unresolved = placeholders(&rendered)
            .into_iter()
            .filter(|name| params.get(name).is_none())
            .collect::<Vec<_>>();
        if !unresolved.is_empty() {
            debug!(
                "Template '{}' rendered with unfilled placeholders: {:?}",
                template_name, unresolved
            );
        }
    }

    rendered
}

/// Wrap an English reply for `language`.
///
/// English replies are returned verbatim. Other languages get the localized
/// `advice_start` preamble, a blank line, then the untranslated English text.
pub fn create_multilingual_response(english_text: &str, language: Language) -> String {
    if language == Language::English {
        return english_text.to_string();
    }

    let prefix = translate(ADVICE_START_KEY, language);
    format!("{}\n\n{}", prefix, english_text)
}
