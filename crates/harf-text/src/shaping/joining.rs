//! Letter Classification
//!
//! Static joining-class lookup for the Arabic blocks. Presentation forms are
//! treated as already shaped and classify as plain non-joining text.

/// Joining behavior of a character (Unicode `Joining_Type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoiningClass {
    /// Never connects (hamza, spaces, everything non-Arabic)
    #[default]
    NonJoining,
    /// Connects to the preceding letter only (alef, dal, reh, waw)
    RightJoining,
    /// Connects on both sides (beh, seen, lam)
    DualJoining,
    /// Combining marks; ignored by joining decisions
    Transparent,
    /// Connects on both sides without being a letter itself (tatweel, ZWJ)
    JoinCausing,
}

impl JoiningClass {
    /// Whether a character of this class can connect to the letter before it
    #[inline]
    pub fn joins_backward(self) -> bool {
        matches!(
            self,
            JoiningClass::RightJoining | JoiningClass::DualJoining | JoiningClass::JoinCausing
        )
    }

    /// Whether a character of this class can connect to the letter after it
    #[inline]
    pub fn joins_forward(self) -> bool {
        matches!(self, JoiningClass::DualJoining | JoiningClass::JoinCausing)
    }
}

/// A classified logical code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    /// The code point
    pub code_point: char,
    /// Joining behavior
    pub joining_class: JoiningClass,
    /// Recognized Arabic letter (subject to shaping)
    pub is_arabic: bool,
}

/// Classify a code point
pub fn classify(c: char) -> Letter {
    let (joining_class, is_arabic) = match letter_joining_class(c) {
        Some(class) => (class, true),
        None => (non_letter_joining_class(c), false),
    };

    Letter {
        code_point: c,
        joining_class,
        is_arabic,
    }
}

/// Get the joining class for a code point
#[inline]
pub fn joining_class(c: char) -> JoiningClass {
    classify(c).joining_class
}

/// Check if a code point is in the Arabic presentation-form blocks
pub fn is_presentation_form(c: char) -> bool {
    matches!(c as u32, 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
}

/// Joining class of an Arabic letter, `None` for anything else
fn letter_joining_class(c: char) -> Option<JoiningClass> {
    use JoiningClass::*;

    let class = match c as u32 {
        0x0620 => DualJoining,  // Kashmiri yeh
        0x0621 => NonJoining,   // Hamza
        0x0622..=0x0625 => RightJoining, // Alef madda, alef/waw/alef with hamza
        0x0626 => DualJoining,  // Yeh with hamza
        0x0627 => RightJoining, // Alef
        0x0628 => DualJoining,  // Beh
        0x0629 => RightJoining, // Teh marbuta
        0x062A..=0x062E => DualJoining, // Teh, Theh, Jeem, Hah, Khah
        0x062F..=0x0632 => RightJoining, // Dal, Thal, Reh, Zain
        0x0633..=0x063F => DualJoining, // Seen through Farsi yeh variants
        0x0641..=0x0647 => DualJoining, // Feh through Heh
        0x0648 => RightJoining, // Waw
        0x0649..=0x064A => DualJoining, // Alef maksura, Yeh
        0x066E..=0x066F => DualJoining, // Dotless beh, dotless qaf
        0x0671..=0x0673 => RightJoining, // Alef wasla and variants
        0x0674 => NonJoining,   // High hamza
        0x0675..=0x0677 => RightJoining,
        0x0678..=0x0687 => DualJoining, // Includes peh and tcheh
        0x0688..=0x0699 => RightJoining, // Dal/reh family, includes jeh
        0x069A..=0x06BF => DualJoining, // Includes keheh and gaf
        0x06C0 => RightJoining, // Heh with yeh above
        0x06C1..=0x06C2 => DualJoining, // Heh goal
        0x06C3..=0x06CB => RightJoining, // Teh marbuta goal, waw variants
        0x06CC => DualJoining,  // Farsi yeh
        0x06CD => RightJoining, // Yeh with tail
        0x06CE => DualJoining,
        0x06CF => RightJoining,
        0x06D0..=0x06D1 => DualJoining,
        0x06D2..=0x06D3 => RightJoining, // Yeh barree
        0x06D5 => RightJoining, // Ae
        0x06EE..=0x06EF => RightJoining,
        0x06FA..=0x06FC => DualJoining,
        0x06FF => DualJoining,  // Knotted heh

        // Arabic Supplement
        0x0759..=0x075B | 0x076B..=0x076C | 0x0771 | 0x0773..=0x0774 | 0x0778..=0x0779 => {
            RightJoining
        }
        0x0750..=0x077F => DualJoining,

        // Arabic Extended-A
        0x08AA..=0x08AC | 0x08AE | 0x08B1..=0x08B2 | 0x08B9 => RightJoining,
        0x08AD => NonJoining,
        0x08A0..=0x08B4 | 0x08B6..=0x08C7 => DualJoining,

        _ => return None,
    };

    Some(class)
}

/// Joining class for code points that are not Arabic letters
fn non_letter_joining_class(c: char) -> JoiningClass {
    match c as u32 {
        0x0610..=0x061A | // Honorific marks
        0x064B..=0x065F | // Harakat and other combining marks
        0x0670 | // Superscript alef
        0x06D6..=0x06DC | // Small high ligatures
        0x06DF..=0x06E4 | // Quranic marks
        0x06E7..=0x06E8 |
        0x06EA..=0x06ED |
        0x08D3..=0x08E1 | // Extended marks
        0x08E3..=0x08FF |
        0xFE00..=0xFE0F => JoiningClass::Transparent, // Variation selectors

        0x0640 | // Tatweel
        0x200D => JoiningClass::JoinCausing, // Zero-width joiner

        _ => JoiningClass::NonJoining,
    }
}
