//! Integration tests for the FarmNex language engine
//!
//! These tests drive the public API the chatbot layer uses: detection,
//! translation, template rendering and the multilingual reply wrapper.

use farmnex_lingua::i18n::{
    create_multilingual_response, detect_language, format_response, translate, Catalog,
    CatalogValidator, Language, TemplateParams, SINHALA_BLOCK, TAMIL_BLOCK,
};
use farmnex_lingua::LanguageService;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

// ==================== Test Helpers ====================

/// Characters from neither script block nor any lexical pattern
fn neutral_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?'-]{0,64}"
}

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::all().to_vec())
}

fn sinhala_char() -> impl Strategy<Value = char> {
    (SINHALA_BLOCK.start as u32..=SINHALA_BLOCK.end as u32)
        .prop_filter_map("assigned scalar", char::from_u32)
}

// ==================== End-to-End Scenarios ====================

#[test]
fn test_english_weather_question() {
    assert_eq!(detect_language("Hello, how is the weather?"), Language::English);
}

#[test]
fn test_sinhala_greeting_pattern_and_script_agree() {
    let text = "ආයුබෝවන්, කොහොමද?";
    assert_eq!(detect_language(text), Language::Sinhala);
    assert!(SINHALA_BLOCK.matches(text));
    assert!(!TAMIL_BLOCK.matches(text));
}

#[test]
fn test_translate_rice() {
    let service = LanguageService::new();
    assert_eq!(translate("rice", Language::Tamil), "அரிசி");
    assert_eq!(service.translate_for_code("rice", "fr"), "rice");
}

#[test]
fn test_translate_unknown_key() {
    assert_eq!(
        translate("nonexistent_key", Language::English),
        "nonexistent_key"
    );
}

#[test]
fn test_crop_advice_in_sinhala() {
    let params = TemplateParams::new()
        .with("crop", "tea")
        .with("advice", "water daily");

    assert_eq!(
        format_response("crop_advice", &params, Language::Sinhala),
        "\u{0DC1}\u{0DCA}\u{200D}\u{0DBB}\u{0DD3} ලංකාවේ tea වගාව සඳහා: water daily"
    );
}

#[test]
fn test_crop_names_are_not_auto_translated() {
    let service = LanguageService::new();
    let language = Language::Tamil;
    let crop = service.translate_crop("Tea", language);
    let params = TemplateParams::new()
        .with("crop", crop.as_str())
        .with("advice", "prune in March");

    let rendered = service.format_response("crop_advice", &params, language);
    assert_eq!(rendered, "இலங்கையில் தேயிலை சாகுபடிக்காக: prune in March");

    let raw = TemplateParams::new()
        .with("crop", "Tea")
        .with("advice", "prune in March");
    assert!(service
        .format_response("crop_advice", &raw, language)
        .contains("Tea"));
}

#[test]
fn test_multilingual_response_in_tamil() {
    let response = create_multilingual_response("Plant rice now.", Language::Tamil);
    let expected_prefix = translate("advice_start", Language::Tamil);

    assert_eq!(response, format!("{}\n\nPlant rice now.", expected_prefix));
    assert!(response.ends_with("\n\nPlant rice now."));
}

#[test]
fn test_chat_round_trip() {
    let service = LanguageService::new();
    let message = "  வணக்கம், நெல் எப்போது நடவு செய்வது?  ";

    let language = service.detect_language(message);
    assert_eq!(language, Language::Tamil);
    assert_eq!(service.process_text(message, language), message.trim());

    let reply = service.create_multilingual_response("Plant during Maha season.", language);
    assert!(reply.starts_with("எனது ஆலோசனை இதோ:"));
    assert!(service.get_greeting(language).contains("FarmNex"));
}

// ==================== Documented Tie-Break Tests ====================

#[test]
fn test_mixed_script_prefers_sinhala() {
    assert_eq!(detect_language("மலர் මල"), Language::Sinhala);
    assert_eq!(detect_language("விவசாயம் ගොවිතැන"), Language::Sinhala);
}

#[test]
fn test_repeated_placeholder_substituted_once() {
    let rendered = farmnex_lingua::i18n::substitute(
        "{crop} after {crop}",
        &TemplateParams::new().with("crop", "rice"),
    );
    assert_eq!(rendered, "rice after {crop}");
}

// ==================== Catalog Tests ====================

#[test]
fn test_catalog_validates_clean() {
    let report = CatalogValidator::validate_all();
    assert!(!report.has_errors(), "{:?}", report.errors);
    assert!(!report.has_warnings(), "{:?}", report.warnings);
}

// ==================== Concurrency Tests ====================

#[test]
fn test_concurrent_lookups_agree() {
    let service = Arc::new(LanguageService::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..200)
                    .map(|_| {
                        (
                            service.detect_language("ආයුබෝවන්"),
                            service.translate("drought", Language::Tamil),
                        )
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (language, text) in handle.join().expect("thread panicked") {
            assert_eq!(language, Language::Sinhala);
            assert_eq!(text, "வறட்சி");
        }
    }
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_detect_is_deterministic(text in "\\PC{0,64}") {
        prop_assert_eq!(detect_language(&text), detect_language(&text));
    }

    #[test]
    fn prop_neutral_text_is_english(text in neutral_text()) {
        prop_assert_eq!(detect_language(&text), Language::English);
    }

    #[test]
    fn prop_sinhala_codepoint_wins_without_tamil(
        prefix in neutral_text(),
        c in sinhala_char(),
        suffix in neutral_text(),
    ) {
        let text = format!("{}{}{}", prefix, c, suffix);
        prop_assert_eq!(detect_language(&text), Language::Sinhala);
    }

    #[test]
    fn prop_known_keys_always_resolve(
        index in 0usize..25,
        language in any_language(),
    ) {
        let keys = Catalog::global().translations.keys();
        let key = keys[index % keys.len()];
        let text = translate(key, language);
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn prop_unknown_keys_echo(key in "zz_[a-z_]{0,20}", language in any_language()) {
        prop_assert_eq!(translate(&key, language), key);
    }

    #[test]
    fn prop_empty_params_leave_template_untouched(language in any_language()) {
        for name in Catalog::global().templates.keys() {
            let entry = Catalog::global().templates.get(name).unwrap();
            let expected = farmnex_lingua::i18n::resolve(entry, language).unwrap();
            prop_assert_eq!(
                format_response(name, &TemplateParams::new(), language),
                expected
            );
        }
    }

    #[test]
    fn prop_english_passthrough(text in "\\PC{0,128}") {
        prop_assert_eq!(create_multilingual_response(&text, Language::English), text);
    }
}
