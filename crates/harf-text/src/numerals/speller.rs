//! Number speller
//!
//! Assembles triad words and scale words into an Arabic cardinal phrase,
//! most significant triad first, with "و" between triads.

use std::fmt;
use std::num::IntErrorKind;

use super::decompose::{MAX_MAGNITUDE, Triad, decompose};
use super::words::{Agreement, CONJUNCTION, NEGATIVE, ZERO, agreement, scale_word, triad_words};
use crate::normalize::to_english_digits;
use crate::{Result, TextError};

/// A spelled number as word tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPhrase {
    negative: bool,
    tokens: Vec<&'static str>,
}

impl NumberPhrase {
    /// Word tokens without the negative marker
    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl fmt::Display for NumberPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "{} ", NEGATIVE)?;
        }
        f.write_str(&self.tokens.join(" "))
    }
}

/// Spell an integer as word tokens
pub fn number_phrase(n: impl Into<i128>) -> Result<NumberPhrase> {
    let n = n.into();
    let decomposition = decompose(n)?;

    if decomposition.is_zero() {
        return Ok(NumberPhrase {
            negative: false,
            tokens: vec![ZERO],
        });
    }

    let mut tokens = Vec::new();
    for (i, triad) in decomposition.triads.iter().enumerate() {
        if i > 0 {
            tokens.push(CONJUNCTION);
        }
        push_triad(&mut tokens, *triad).ok_or(TextError::OutOfRange {
            value: n,
            max: super::MAX_MAGNITUDE,
        })?;
    }

    tracing::debug!(
        "Spelled {} from {} triads into {} tokens",
        n,
        decomposition.triads.len(),
        tokens.len()
    );

    Ok(NumberPhrase {
        negative: decomposition.is_negative(),
        tokens,
    })
}

/// Spell an integer in Arabic words
///
/// Supports magnitudes up to [`MAX_MAGNITUDE`](super::MAX_MAGNITUDE).
pub fn spell_number(n: impl Into<i128>) -> Result<String> {
    number_phrase(n).map(|phrase| phrase.to_string())
}

/// Append the words for one triad with its scale word
///
/// `None` if the scale has no word.
fn push_triad(tokens: &mut Vec<&'static str>, triad: Triad) -> Option<()> {
    if triad.scale == 0 {
        tokens.extend(triad_words(triad.value));
        return Some(());
    }

    let scale = scale_word(triad.scale)?;
    match agreement(triad.value) {
        Agreement::Singular => tokens.push(scale.singular),
        Agreement::Dual => match scale.dual {
            Some(dual) => tokens.push(dual),
            None => {
                tokens.extend(triad_words(triad.value));
                tokens.push(scale.singular);
            }
        },
        Agreement::Plural => {
            tokens.extend(triad_words(triad.value));
            tokens.push(scale.plural);
        }
        Agreement::Counted => {
            tokens.extend(triad_words(triad.value));
            tokens.push(scale.singular);
        }
    }
    Some(())
}

/// Parse a decimal integer written with Western or Arabic-Indic digits
///
/// Accepts a leading sign and `,` / `_` / Arabic thousands separators.
pub fn parse_number(input: &str) -> Result<i128> {
    let digits: String = to_english_digits(input.trim())
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '\u{066C}'))
        .collect();

    let unsigned = digits.strip_prefix(['-', '+']).unwrap_or(digits.as_str());
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TextError::InvalidNumber(input.to_string()));
    }

    digits.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => too_long(input, i128::MAX),
        IntErrorKind::NegOverflow => too_long(input, i128::MIN),
        _ => TextError::InvalidNumber(input.to_string()),
    })
}

/// Well-formed digits too long for `i128`, saturated to `value`
fn too_long(input: &str, value: i128) -> TextError {
    tracing::debug!("Rejecting {:?}: more digits than any spellable number", input);
    TextError::OutOfRange {
        value,
        max: MAX_MAGNITUDE,
    }
}
