//! Harf Text - Arabic Script Utilities
//!
//! This crate provides text transformations for Arabic script:
//! - Contextual shaping into presentation forms (isolated/initial/medial/final)
//! - Cardinal number spelling in Arabic words
//! - Harakat removal and letter normalization
//! - Arabic/Western digit conversion
//! - Genitive kasra insertion after prepositions
//!
//! # Example
//! ```rust
//! use harf_text::{shape, spell_number};
//!
//! assert_eq!(spell_number(1250).unwrap(), "ألف و مئتان و خمسون");
//! assert_eq!(shape("بسم"), "\u{FE91}\u{FEB4}\u{FEE2}");
//! ```

pub mod config;
pub mod normalize;
pub mod numerals;
pub mod shaping;
pub mod tashkeel;

pub use config::Config;
pub use normalize::{
    is_arabic, is_arabic_letter, normalize, remove_harakat, to_arabic_digits, to_english_digits,
};
pub use numerals::{
    Decomposition, NumberPhrase, Sign, Triad, MAX_MAGNITUDE, decompose, number_phrase,
    parse_number, spell_number,
};
pub use shaping::{
    JoiningClass, Letter, PresentationForm, ShapedGlyph, ShapedRun, Shaper, classify,
    joining_class, shape,
};
pub use tashkeel::tashkeel;

/// Text transformation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Number out of range: {value} (supported magnitude is at most {max})")]
    OutOfRange { value: i128, max: u128 },

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
