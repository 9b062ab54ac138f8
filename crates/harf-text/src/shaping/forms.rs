//! Presentation Forms
//!
//! Maps logical letters to their Arabic Presentation Forms-A/B code points.

/// Contextual form of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PresentationForm {
    /// No connections
    Isolated,
    /// Connects to the next letter only
    Initial,
    /// Connects on both sides
    Medial,
    /// Connects to the previous letter only
    Final,
}

impl PresentationForm {
    /// Select the form from the two connection flags
    pub fn from_connections(joins_previous: bool, joins_next: bool) -> Self {
        match (joins_previous, joins_next) {
            (false, false) => PresentationForm::Isolated,
            (false, true) => PresentationForm::Initial,
            (true, true) => PresentationForm::Medial,
            (true, false) => PresentationForm::Final,
        }
    }

    /// Whether this form carries a stroke towards the following letter
    pub fn connects_forward(self) -> bool {
        matches!(self, PresentationForm::Initial | PresentationForm::Medial)
    }
}

/// Presentation code points of one letter
#[derive(Debug, Clone, Copy)]
struct FormSet {
    isolated: u32,
    final_form: Option<u32>,
    initial: Option<u32>,
    medial: Option<u32>,
}

impl FormSet {
    /// Dual-joining letter laid out as isolated, final, initial, medial
    const fn four(base: u32) -> Self {
        Self {
            isolated: base,
            final_form: Some(base + 1),
            initial: Some(base + 2),
            medial: Some(base + 3),
        }
    }

    /// Right-joining letter laid out as isolated, final
    const fn two(base: u32) -> Self {
        Self {
            isolated: base,
            final_form: Some(base + 1),
            initial: None,
            medial: None,
        }
    }

    const fn one(base: u32) -> Self {
        Self {
            isolated: base,
            final_form: None,
            initial: None,
            medial: None,
        }
    }

    fn get(self, form: PresentationForm) -> Option<u32> {
        match form {
            PresentationForm::Isolated => Some(self.isolated),
            PresentationForm::Final => self.final_form,
            PresentationForm::Initial => self.initial,
            PresentationForm::Medial => self.medial,
        }
    }
}

/// Letter to presentation forms, sorted by letter
static FORMS: &[(char, FormSet)] = &[
    ('\u{0621}', FormSet::one(0xFE80)),  // Hamza
    ('\u{0622}', FormSet::two(0xFE81)),  // Alef with madda
    ('\u{0623}', FormSet::two(0xFE83)),  // Alef with hamza above
    ('\u{0624}', FormSet::two(0xFE85)),  // Waw with hamza
    ('\u{0625}', FormSet::two(0xFE87)),  // Alef with hamza below
    ('\u{0626}', FormSet::four(0xFE89)), // Yeh with hamza
    ('\u{0627}', FormSet::two(0xFE8D)),  // Alef
    ('\u{0628}', FormSet::four(0xFE8F)), // Beh
    ('\u{0629}', FormSet::two(0xFE93)),  // Teh marbuta
    ('\u{062A}', FormSet::four(0xFE95)), // Teh
    ('\u{062B}', FormSet::four(0xFE99)), // Theh
    ('\u{062C}', FormSet::four(0xFE9D)), // Jeem
    ('\u{062D}', FormSet::four(0xFEA1)), // Hah
    ('\u{062E}', FormSet::four(0xFEA5)), // Khah
    ('\u{062F}', FormSet::two(0xFEA9)),  // Dal
    ('\u{0630}', FormSet::two(0xFEAB)),  // Thal
    ('\u{0631}', FormSet::two(0xFEAD)),  // Reh
    ('\u{0632}', FormSet::two(0xFEAF)),  // Zain
    ('\u{0633}', FormSet::four(0xFEB1)), // Seen
    ('\u{0634}', FormSet::four(0xFEB5)), // Sheen
    ('\u{0635}', FormSet::four(0xFEB9)), // Sad
    ('\u{0636}', FormSet::four(0xFEBD)), // Dad
    ('\u{0637}', FormSet::four(0xFEC1)), // Tah
    ('\u{0638}', FormSet::four(0xFEC5)), // Zah
    ('\u{0639}', FormSet::four(0xFEC9)), // Ain
    ('\u{063A}', FormSet::four(0xFECD)), // Ghain
    ('\u{0641}', FormSet::four(0xFED1)), // Feh
    ('\u{0642}', FormSet::four(0xFED5)), // Qaf
    ('\u{0643}', FormSet::four(0xFED9)), // Kaf
    ('\u{0644}', FormSet::four(0xFEDD)), // Lam
    ('\u{0645}', FormSet::four(0xFEE1)), // Meem
    ('\u{0646}', FormSet::four(0xFEE5)), // Noon
    ('\u{0647}', FormSet::four(0xFEE9)), // Heh
    ('\u{0648}', FormSet::two(0xFEED)),  // Waw
    // Alef maksura; initial/medial live in Presentation Forms-A
    (
        '\u{0649}',
        FormSet {
            isolated: 0xFEEF,
            final_form: Some(0xFEF0),
            initial: Some(0xFBE8),
            medial: Some(0xFBE9),
        },
    ),
    ('\u{064A}', FormSet::four(0xFEF1)), // Yeh
    ('\u{0671}', FormSet::two(0xFB50)),  // Alef wasla
    ('\u{067E}', FormSet::four(0xFB56)), // Peh
    ('\u{0686}', FormSet::four(0xFB7A)), // Tcheh
    ('\u{0698}', FormSet::two(0xFB8A)),  // Jeh
    ('\u{06A9}', FormSet::four(0xFB8E)), // Keheh
    ('\u{06AF}', FormSet::four(0xFB92)), // Gaf
    ('\u{06CC}', FormSet::four(0xFBFC)), // Farsi yeh
];

/// Get the presentation-form code point for a letter in a given form
///
/// Returns `None` when the letter has no encoded glyph for that form.
pub fn presentation_form(c: char, form: PresentationForm) -> Option<char> {
    let index = FORMS.binary_search_by_key(&c, |&(letter, _)| letter).ok()?;
    FORMS[index].1.get(form).and_then(char::from_u32)
}

/// Check for lam followed by an alef that has a ligature
pub fn is_lam_alef_sequence(first: char, second: char) -> bool {
    first == '\u{0644}' && lam_alef_ligature(second, PresentationForm::Isolated).is_some()
}

/// Get Lam-Alef ligature presentation form
///
/// Ligatures only exist in isolated and final shapes.
pub fn lam_alef_ligature(alef: char, form: PresentationForm) -> Option<char> {
    let base = match alef {
        '\u{0622}' => 0xFEF5, // Lam-Alef with madda
        '\u{0623}' => 0xFEF7, // Lam-Alef with hamza above
        '\u{0625}' => 0xFEF9, // Lam-Alef with hamza below
        '\u{0627}' => 0xFEFB, // Lam-Alef
        _ => return None,
    };

    let offset = match form {
        PresentationForm::Isolated | PresentationForm::Initial => 0,
        PresentationForm::Final | PresentationForm::Medial => 1,
    };

    char::from_u32(base + offset)
}
