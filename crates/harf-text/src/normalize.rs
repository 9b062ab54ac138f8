//! Arabic text normalization utilities
//!
//! Character-level rewrites applied before comparison or shaping:
//! - Remove harakat (tashkeel)
//! - Unify alef variants, alef maksura and teh marbuta
//! - Trim tatweel (kashida)
//! - Convert between Western and Arabic-Indic digits

use crate::shaping::classify;

const TATWEEL: char = '\u{0640}';
const ALEF: char = '\u{0627}';
const ALEF_WASLA: char = '\u{0671}';

/// Check if a character is a haraka or Quranic annotation mark
#[inline]
pub fn is_haraka(c: char) -> bool {
    matches!(c as u32,
        0x0610..=0x061A | // Honorific marks
        0x064B..=0x065F | // Tanween, short vowels, shadda, sukun, madda, hamza marks
        0x0670 | // Superscript alef (alif khanjariyah)
        0x06D6..=0x06DC | // Small high ligatures
        0x06DF..=0x06E4 |
        0x06E7..=0x06E8 |
        0x06EA..=0x06ED
    )
}

/// Remove harakat from text
///
/// Alef wasla carries an implied mark, so it is written as plain alef.
/// Alef madda is a distinct letter and is kept.
pub fn remove_harakat(text: &str) -> String {
    text.chars().filter_map(strip_haraka).collect()
}

/// What harakat removal leaves of one character
pub(crate) fn strip_haraka(c: char) -> Option<char> {
    match c {
        ALEF_WASLA => Some(ALEF),
        c if is_haraka(c) => None,
        c => Some(c),
    }
}

/// Normalize Arabic text for comparison
///
/// Performs the following normalizations:
/// - Remove harakat
/// - Trim tatweel
/// - Replace alef variants (أ إ آ ٱ) with plain alef (ا)
/// - Replace alef maksura (ى) with yeh (ي)
/// - Replace teh marbuta (ة) with heh (ه)
///
/// Hamza on waw or yeh, punctuation and whitespace are left as is.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if is_haraka(c) || c == TATWEEL {
            continue;
        }

        result.push(match c {
            '\u{0622}' | '\u{0623}' | '\u{0625}' | ALEF_WASLA => ALEF,
            '\u{0649}' => '\u{064A}', // Alef maksura -> yeh
            '\u{0629}' => '\u{0647}', // Teh marbuta -> heh
            _ => c,
        });
    }

    result
}

/// Check if a character is an Arabic letter
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    classify(c).is_arabic
}

/// Check if text is Arabic
///
/// True when there is at least one letter and every alphabetic character
/// is an Arabic letter. Marks, digits, punctuation and spaces are ignored.
pub fn is_arabic(text: &str) -> bool {
    let mut has_letter = false;

    for c in text.chars() {
        if is_arabic_letter(c) {
            has_letter = true;
        } else if c.is_alphabetic() && !is_haraka(c) {
            return false;
        }
    }

    has_letter
}

/// Convert Western digits to Arabic-Indic digits
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => shift(c as u32 - '0' as u32, 0x0660).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Convert Arabic-Indic and Eastern Arabic-Indic digits to Western digits
pub fn to_english_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            d @ 0x0660..=0x0669 => shift(d - 0x0660, '0' as u32).unwrap_or(c),
            d @ 0x06F0..=0x06F9 => shift(d - 0x06F0, '0' as u32).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[inline]
fn shift(digit: u32, zero: u32) -> Option<char> {
    char::from_u32(zero + digit)
}
