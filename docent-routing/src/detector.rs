//! Heuristic language detection.
//!
//! Not a statistical model: cheap, deterministic checks in strict priority
//! order. Ties resolve by priority, never by word count.

use docent_core::Language;

/// Accented vowels that essentially only occur in Italian questions.
const ITALIAN_ACCENTS: &[char] = &['à', 'è', 'é', 'ì', 'ò', 'ó', 'ù'];

/// Common Italian function words.
const ITALIAN_WORDS: &[&str] = &[
    "il", "lo", "la", "gli", "le", "per", "non", "che", "come", "quando",
];

/// Common English function words.
const ENGLISH_WORDS: &[&str] = &[
    "the", "and", "what", "who", "when", "where", "why", "how",
];

/// Detect the question language.
///
/// Priority: Italian accent > Italian function word > English function
/// word > fallback (Italian, the museum's primary language).
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();

    if lower.chars().any(|c| ITALIAN_ACCENTS.contains(&c)) {
        return Language::Italian;
    }

    let has_word = |words: &[&str]| lower.split_whitespace().any(|w| words.contains(&w));

    if has_word(ITALIAN_WORDS) {
        return Language::Italian;
    }
    if has_word(ENGLISH_WORDS) {
        return Language::English;
    }

    Language::default()
}
