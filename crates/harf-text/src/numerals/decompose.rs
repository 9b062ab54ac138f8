//! Triad decomposition

use super::words::SCALES;
use crate::{Result, TextError};

/// Largest spellable magnitude: every triad up to the last scale word
pub const MAX_MAGNITUDE: u128 = max_magnitude();

const fn max_magnitude() -> u128 {
    let mut limit: u128 = 1;
    let mut i = 0;
    while i <= SCALES.len() {
        limit *= 1000;
        i += 1;
    }
    limit - 1
}

/// Sign of a decomposed number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sign {
    Positive,
    Negative,
}

/// A base-1000 digit group and its scale (0 = units, 1 = thousand, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triad {
    pub value: u16,
    pub scale: usize,
}

impl Triad {
    pub fn new(value: u16, scale: usize) -> Self {
        Self { value, scale }
    }
}

/// Sign plus non-zero triads, most significant first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Decomposition {
    pub sign: Sign,
    pub triads: Vec<Triad>,
}

impl Decomposition {
    /// Whether the magnitude is zero
    pub fn is_zero(&self) -> bool {
        self.triads.iter().all(|t| t.value == 0)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

/// Split an integer into sign and triads
///
/// Zero triads are omitted, except that zero itself yields one `(0, 0)`
/// triad. Magnitudes above [`MAX_MAGNITUDE`] are rejected.
pub fn decompose(n: impl Into<i128>) -> Result<Decomposition> {
    let n = n.into();
    let mut magnitude = n.unsigned_abs();

    if magnitude > MAX_MAGNITUDE {
        tracing::debug!("Rejecting {}: beyond {}", n, MAX_MAGNITUDE);
        return Err(TextError::OutOfRange {
            value: n,
            max: MAX_MAGNITUDE,
        });
    }

    if magnitude == 0 {
        return Ok(Decomposition {
            sign: Sign::Positive,
            triads: vec![Triad::new(0, 0)],
        });
    }

    let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
    let mut triads = Vec::new();
    let mut scale = 0;

    while magnitude > 0 {
        let value = (magnitude % 1000) as u16;
        if value != 0 {
            triads.push(Triad::new(value, scale));
        }
        magnitude /= 1000;
        scale += 1;
    }
    triads.reverse();

    Ok(Decomposition { sign, triads })
}
