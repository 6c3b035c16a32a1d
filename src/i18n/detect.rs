//! Language detection for free-form user messages.
//!
//! Classification is a fixed sequence of tests, first match wins:
//!
//! 1. Sinhala lexical patterns (substring match on the lower-cased message)
//! 2. Tamil lexical patterns
//! 3. Any codepoint in the Sinhala block
//! 4. Any codepoint in the Tamil block
//! 5. English
//!
//! Lexical patterns catch short greetings cheaply; the script ranges are the
//! catch-all for any text written in the script. Sinhala is tested before
//! Tamil at every stage, so a message mixing both scripts is classified as
//! Sinhala. That tie-break is deliberate and covered by tests.

use crate::i18n::strings::{SINHALA_PATTERNS, TAMIL_PATTERNS};
use crate::i18n::Language;
use tracing::trace;

/// An inclusive Unicode codepoint interval tied to a writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    /// Lowest codepoint in the block (inclusive)
    pub start: char,

    /// Highest codepoint in the block (inclusive)
    pub end: char,

    /// Language the block is associated with
    pub language: Language,
}

impl ScriptRange {
    /// Whether `c` falls inside this block.
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }

    /// Whether any codepoint of `text` falls inside this block.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

/// Sinhala block, U+0D80..=U+0DFF.
pub const SINHALA_BLOCK: ScriptRange = ScriptRange {
    start: '\u{0D80}',
    end: '\u{0DFF}',
    language: Language::Sinhala,
};

/// Tamil block, U+0B80..=U+0BFF.
pub const TAMIL_BLOCK: ScriptRange = ScriptRange {
    start: '\u{0B80}',
    end: '\u{0BFF}',
    language: Language::Tamil,
};

/// Diagnostic words for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalPatterns {
    pub language: Language,
    pub words: &'static [&'static str],
}

impl LexicalPatterns {
    /// Whether any pattern occurs in `lowered`.
    ///
    /// `lowered` must already be lower-cased; patterns are compared lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.words
            .iter()
            .any(|word| lowered.contains(word.to_lowercase().as_str()))
    }
}

/// Lexical tests, in evaluation order.
pub const LEXICAL_PATTERNS: [LexicalPatterns; 2] = [
    LexicalPatterns {
        language: Language::Sinhala,
        words: SINHALA_PATTERNS,
    },
    LexicalPatterns {
        language: Language::Tamil,
        words: TAMIL_PATTERNS,
    },
];

/// Script tests, in evaluation order.
pub const SCRIPT_RANGES: [ScriptRange; 2] = [SINHALA_BLOCK, TAMIL_BLOCK];

/// Detect the most likely language of `text`.
///
/// Never fails: empty input and text with no recognised pattern or script
/// resolve to English.
pub fn detect_language(text: &str) -> Language {
    let lowered = text.to_lowercase();

    if let Some(patterns) = LEXICAL_PATTERNS.iter().find(|p| p.matches(&lowered)) {
        trace!("Detected {} from lexical pattern", patterns.language);
        return patterns.language;
    }

    if let Some(range) = SCRIPT_RANGES.iter().find(|r| r.matches(text)) {
        trace!("Detected {} from script range", range.language);
        return range.language;
    }

    Language::canonical()
}
