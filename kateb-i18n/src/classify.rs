//! Character-class detection for per-run text direction.
//!
//! Tokens are classified with two regex checks: an Arabic-script class over
//! the Arabic Unicode blocks, and a forced-LTR class over ASCII letters,
//! digits, and a fixed punctuation set (the characters of emails, URLs, and
//! numbers). The Arabic check runs first and wins ties, so a mixed token
//! like `user@شركة.com` classifies as Arabic script. That is a deliberately
//! coarse heuristic kept for compatibility with the shipped dashboard, not a
//! per-character bidi resolution.

use crate::locales::Direction;
use once_cell::sync::Lazy;
use regex::Regex;

/// Arabic, Arabic Supplement, Arabic Extended-A, and both Presentation
/// Forms blocks.
static ARABIC_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{0600}-\u{06FF}\u{0750}-\u{077F}\u{08A0}-\u{08FF}\u{FB50}-\u{FDFF}\u{FE70}-\u{FEFF}]")
        .expect("Arabic script pattern is valid")
});

static FORCED_LTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[0-9A-Za-z@._+=%&*(){}\[\]|\\:;"'<>?,./-]"#)
        .expect("forced-LTR pattern is valid")
});

/// Direction class of a single whitespace-free token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Contains at least one Arabic-script character (wins over ForcedLtr).
    ArabicScript,
    /// Latin letters, digits, or symbol content that must stay left-to-right.
    ForcedLtr,
    /// Neither class matched; the token follows the ambient direction.
    Neutral,
}

#[must_use]
pub fn classify(token: &str) -> TokenClass {
    if ARABIC_SCRIPT.is_match(token) {
        TokenClass::ArabicScript
    } else if FORCED_LTR.is_match(token) {
        TokenClass::ForcedLtr
    } else {
        TokenClass::Neutral
    }
}

#[must_use]
pub fn contains_arabic(text: &str) -> bool {
    ARABIC_SCRIPT.is_match(text)
}

/// Whole-string direction used for element-level `dir` decisions: Arabic
/// content forces RTL, otherwise forced-LTR content forces LTR, otherwise
/// the ambient direction stands.
#[must_use]
pub fn detect_direction(text: &str, ambient: Direction) -> Direction {
    match classify(text) {
        TokenClass::ArabicScript => Direction::Rtl,
        TokenClass::ForcedLtr => Direction::Ltr,
        TokenClass::Neutral => ambient,
    }
}

/// Script composition counters for a piece of display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct TextMetrics {
    pub total: usize,
    pub arabic_chars: usize,
    pub latin_chars: usize,
    pub digits: usize,
    pub whitespace: usize,
    pub is_rtl: bool,
    pub is_mixed: bool,
}

/// Count Arabic letters (base block), Latin letters, digits, and whitespace.
/// `is_rtl` means Arabic characters outnumber Latin ones; `is_mixed` means
/// both scripts are present.
#[must_use]
pub fn text_metrics(text: &str) -> TextMetrics {
    let mut m = TextMetrics::default();
    for ch in text.chars() {
        m.total += 1;
        if ('\u{0600}'..='\u{06FF}').contains(&ch) {
            m.arabic_chars += 1;
        } else if ch.is_ascii_alphabetic() {
            m.latin_chars += 1;
        } else if ch.is_ascii_digit() {
            m.digits += 1;
        } else if ch.is_whitespace() {
            m.whitespace += 1;
        }
    }
    m.is_rtl = m.arabic_chars > m.latin_chars;
    m.is_mixed = m.arabic_chars > 0 && m.latin_chars > 0;
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_forced_ltr() {
        assert_eq!(classify("user@test.com"), TokenClass::ForcedLtr);
    }

    #[test]
    fn arabic_word_is_arabic_script() {
        assert_eq!(classify("مرحبا"), TokenClass::ArabicScript);
    }

    #[test]
    fn arabic_wins_mixed_tokens() {
        assert_eq!(classify("مرحبا2024"), TokenClass::ArabicScript);
        assert_eq!(classify("user@شركة.com"), TokenClass::ArabicScript);
    }

    #[test]
    fn presentation_forms_count_as_arabic() {
        // U+FE8D ARABIC LETTER ALEF ISOLATED FORM
        assert_eq!(classify("\u{FE8D}"), TokenClass::ArabicScript);
    }

    #[test]
    fn symbols_and_digits_force_ltr() {
        assert_eq!(classify("3.14"), TokenClass::ForcedLtr);
        assert_eq!(classify("(x)"), TokenClass::ForcedLtr);
        assert_eq!(classify("a\\b"), TokenClass::ForcedLtr);
        assert_eq!(classify("\"quote\""), TokenClass::ForcedLtr);
    }

    #[test]
    fn unclassified_content_is_neutral() {
        assert_eq!(classify(""), TokenClass::Neutral);
        assert_eq!(classify("—"), TokenClass::Neutral);
        assert_eq!(classify("£€"), TokenClass::Neutral);
    }

    #[test]
    fn detect_direction_prefers_arabic_then_ltr_then_ambient() {
        assert_eq!(detect_direction("مرحبا user", Direction::Ltr), Direction::Rtl);
        assert_eq!(detect_direction("hello", Direction::Rtl), Direction::Ltr);
        assert_eq!(detect_direction("…", Direction::Rtl), Direction::Rtl);
        assert_eq!(detect_direction("", Direction::Ltr), Direction::Ltr);
    }

    #[test]
    fn metrics_count_scripts() {
        let m = text_metrics("مرحبا abc 12");
        assert_eq!(m.arabic_chars, 5);
        assert_eq!(m.latin_chars, 3);
        assert_eq!(m.digits, 2);
        assert_eq!(m.whitespace, 2);
        assert!(m.is_rtl);
        assert!(m.is_mixed);
    }
}
