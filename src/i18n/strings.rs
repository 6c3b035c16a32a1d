//! Static compiled data set for the language engine.
//!
//! Every record is a [`Localized`] value whose English string is mandatory by
//! construction, so English is always available as the fallback. Tables are
//! plain `const` slices; the resolver indexes them once at first use.

/// A string localized into the supported languages.
///
/// English is required. Sinhala and Tamil are optional; a missing entry falls
/// back to English when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    /// English text (canonical, always present)
    pub en: &'static str,

    /// Sinhala text, if curated
    pub si: Option<&'static str>,

    /// Tamil text, if curated
    pub ta: Option<&'static str>,
}

impl Localized {
    /// Record with all three languages present.
    pub const fn new(en: &'static str, si: &'static str, ta: &'static str) -> Self {
        Self {
            en,
            si: Some(si),
            ta: Some(ta),
        }
    }

    /// Record with only the English entry.
    pub const fn english_only(en: &'static str) -> Self {
        Self {
            en,
            si: None,
            ta: None,
        }
    }
}

// ==================== Translation Table ====================

/// Short semantic keys used by the chatbot layer.
pub const TRANSLATIONS: &[(&str, Localized)] = &[
    // Greetings and common phrases
    ("hello", Localized::new("Hello!", "ආයුබෝවන්!", "வணக்கம்!")),
    (
        "welcome",
        Localized::new(
            "Welcome to FarmNex",
            "FarmNex වෙතට සාදරයෙන් පිළිගනිමු",
            "FarmNex க்கு வரவேற்கிறோம்",
        ),
    ),
    (
        "help",
        Localized::new(
            "How can I help you?",
            "මම ඔබට කොහොමද උදව් කරන්නේ?",
            "நான் உங்களுக்கு எப்படி உதவ முடியும்?",
        ),
    ),
    // Agricultural terms
    ("farming", Localized::new("farming", "ගොවිතැන", "விவசாயம்")),
    ("crop", Localized::new("crop", "බෝගය", "பயிர்")),
    ("livestock", Localized::new("livestock", "පශු සම්පත", "கால்நடை")),
    // Crops
    ("rice", Localized::new("rice", "බත්", "அரிசி")),
    ("tea", Localized::new("tea", "තේ", "தேயிலை")),
    ("coconut", Localized::new("coconut", "පොල්", "தென்னை")),
    // Animals
    ("cattle", Localized::new("cattle", "ගවයන්", "கால்நடை")),
    ("chicken", Localized::new("chicken", "කුකුළන්", "கோழி")),
    ("goat", Localized::new("goat", "එළුවන්", "ஆடு")),
    // Seasons
    ("yala_season", Localized::new("Yala season", "යල කන්නය", "யாலா பருவம்")),
    ("maha_season", Localized::new("Maha season", "මහ කන්නය", "மகா பருவம்")),
    // Actions
    ("planting", Localized::new("planting", "වගා කිරීම", "நடவு")),
    ("harvesting", Localized::new("harvesting", "අස්වනු නෙලීම", "அறுவடை")),
    ("irrigation", Localized::new("irrigation", "වාරිමාර්ග", "நீர்ப்பாசனம்")),
    // Weather and climate
    ("weather", Localized::new("weather", "කාලගුණය", "வானிலை")),
    ("rain", Localized::new("rain", "වැස්ස", "மழை")),
    ("drought", Localized::new("drought", "නියඟය", "வறட்சி")),
    // Response phrases
    (
        "advice_start",
        Localized::new("Here is my advice:", "මගේ උපදේශය මෙන්න:", "எனது ஆலோசனை இதோ:"),
    ),
    ("season_current", Localized::new("Current season is", "වර්තමාන කන්නය", "தற்போதைய பருவம்")),
    (
        "recommended_crops",
        Localized::new("Recommended crops:", "නිර්දේශිත බෝග:", "பரிந்துரைக்கப்படும் பயிர்கள்:"),
    ),
    // Error messages
    (
        "not_understand",
        Localized::new(
            "I didn't understand that. Can you please rephrase?",
            "මට ඒක තේරුණේ නැහැ. කරුණාකර වෙනත් වචන වලින් කියන්න?",
            "எனக்கு அது புரியவில்லை. தயவுசெய்து வேறு வார்த்தைகளில் சொல்ல முடியுமா?",
        ),
    ),
    (
        "technical_error",
        Localized::new(
            "I'm experiencing technical difficulties. Please try again.",
            "මට තාක්ෂණික ගැටලුවක් තියෙනවා. කරුණාකර නැවත උත්සාහ කරන්න.",
            "எனக்கு தொழில்நுட்ப சிக்கல்கள் உள்ளன. தயவுசெய்து மீண்டும் முயற்சிக்கவும்.",
        ),
    ),
];

// ==================== Greetings ====================

/// Full-sentence assistant greeting.
///
/// Kept apart from [`TRANSLATIONS`]: greetings are curated sentences, not
/// short terms, and are looked up through their own surface.
pub const GREETING: Localized = Localized::new(
    "Hello! I'm your FarmNex assistant specializing in Sri Lankan agriculture.",
    "ආයුබෝවන්! මම ඔබේ FarmNex සහායකයා, ශ්‍රී ලාංකික ගොවිතැන ගැන විශේෂඥයෙක්.",
    "வணக்கம்! நான் உங்கள் FarmNex உதவியாளர், இலங்கை விவசாயத்தில் நிபுணர்.",
);

// ==================== Vocabularies ====================

/// Crop names keyed by lower-cased English name.
pub const CROPS: &[(&str, Localized)] = &[
    ("rice", Localized::new("rice", "බත්", "அரிசி")),
    ("tea", Localized::new("tea", "තේ", "தேயிலை")),
    ("coconut", Localized::new("coconut", "පොල්", "தென்னை")),
    ("rubber", Localized::new("rubber", "රබර්", "ரப்பர்")),
    ("banana", Localized::new("banana", "කෙසෙල්", "வாழை")),
    ("tomato", Localized::new("tomato", "තක්කාලි", "தக்காளி")),
    ("onion", Localized::new("onion", "ළූණු", "வெங்காயம்")),
    ("chili", Localized::new("chili", "මිරිස්", "மிளகாய்")),
];

/// Animal names keyed by lower-cased English name.
pub const ANIMALS: &[(&str, Localized)] = &[
    ("cattle", Localized::new("cattle", "ගවයන්", "கால்நடை")),
    ("buffalo", Localized::new("buffalo", "මී හරක්", "எருமை")),
    ("goat", Localized::new("goat", "එළුවන්", "ஆடு")),
    ("chicken", Localized::new("chicken", "කුකුළන්", "கோழி")),
    ("pig", Localized::new("pig", "ඌරන්", "பன்றி")),
    ("sheep", Localized::new("sheep", "බැටළුවන්", "செம்மறி")),
];

// ==================== Response Templates ====================

/// Advice templates. Placeholders use the `{name}` form.
pub const TEMPLATES: &[(&str, Localized)] = &[
    (
        "crop_advice",
        Localized::new(
            "For {crop} cultivation in Sri Lanka: {advice}",
            "ශ්‍රී ලංකාවේ {crop} වගාව සඳහා: {advice}",
            "இலங்கையில் {crop} சாகுபடிக்காக: {advice}",
        ),
    ),
    (
        "seasonal_advice",
        Localized::new(
            "During {season} season: {advice}",
            "{season} කාලයේදී: {advice}",
            "{season} காலத்தில்: {advice}",
        ),
    ),
    (
        "weather_advice",
        Localized::new(
            "Weather advice: {advice}",
            "කාලගුණික උපදේශය: {advice}",
            "வானிலை ஆலோசனை: {advice}",
        ),
    ),
];

// ==================== Detection Patterns ====================

/// Words that mark a message as Sinhala.
pub const SINHALA_PATTERNS: &[&str] = &[
    "ආයුබෝවන්",
    "කොහොමද",
    "ගොවිතැන",
    "බෝගය",
    "කන්නය",
    "වගා",
    "පශු",
    "ගවයන්",
    "කුකුළන්",
    "තේ",
    "පොල්",
    "බත්",
];

/// Words that mark a message as Tamil.
pub const TAMIL_PATTERNS: &[&str] = &[
    "வணக்கம்",
    "எப்படி",
    "விவசாயம்",
    "பயிர்",
    "பருவம்",
    "நடவு",
    "கால்நடை",
    "கோழி",
    "ஆடு",
    "தேயிலை",
    "தென்னை",
    "அரிசி",
];
