//! Shaping tests - joining classes to rendered presentation forms
//!
//! Covers word-level scenarios, boundaries, marks and configuration.

use harf_text::shaping::forms::presentation_form;
use harf_text::{Config, JoiningClass, PresentationForm, Shaper, classify, shape};

const SAMPLES: &[&str] = &[
    "بسم الله الرحمن الرحيم",
    "يَا أَيُّهَا الَّذِينَ آمَنُوا أَوْفُوا بِالْعُقُودِ",
    "عام 2021، سنة جديدة!",
    "Hello مرحبا world",
    "بريـــــد",
    "سماء",
    "",
];

// ============================================================================
// WORD SCENARIOS
// ============================================================================

#[test]
fn test_three_letter_word_medial() {
    // Beh, teh, noon: all dual-joining
    let run = Shaper::default().analyze("بتن");
    assert_eq!(run.glyphs[1].form, Some(PresentationForm::Medial));
    assert_eq!(run.glyphs[1].glyph, '\u{FE98}');
}

#[test]
fn test_bismillah() {
    assert_eq!(
        shape("بسم الله"),
        "\u{FE91}\u{FEB4}\u{FEE2} \u{FE8D}\u{FEDF}\u{FEE0}\u{FEEA}"
    );
}

#[test]
fn test_hamza_after_alef() {
    // Seen initial, meem medial, alef final, hamza isolated
    assert_eq!(shape("سماء"), "\u{FEB3}\u{FEE4}\u{FE8E}\u{FE80}");
}

#[test]
fn test_teh_marbuta_final() {
    // Kaf, teh, beh, teh marbuta
    assert_eq!(shape("كتبة"), "\u{FEDB}\u{FE98}\u{FE92}\u{FE94}");
}

#[test]
fn test_alef_maksura_initial_and_medial() {
    let run = Shaper::default().analyze("ىىى");
    assert_eq!(run.to_string(), "\u{FBE8}\u{FBE9}\u{FEF0}");
}

#[test]
fn test_persian_letters() {
    // Peh, keheh, gaf
    assert_eq!(shape("پکگ"), "\u{FB58}\u{FB91}\u{FB93}");
}

#[test]
fn test_letter_without_encoded_form_still_joins() {
    // U+0750 has no presentation form but is dual-joining
    let run = Shaper::default().analyze("ب\u{0750}ب");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Initial));
    assert_eq!(run.glyphs[1].form, Some(PresentationForm::Medial));
    assert_eq!(run.glyphs[1].glyph, '\u{0750}');
    assert_eq!(run.glyphs[2].form, Some(PresentationForm::Final));
}

// ============================================================================
// BOUNDARIES
// ============================================================================

#[test]
fn test_spaced_letter_is_isolated() {
    for c in "ابتثجحخدذرزسشصضطظعغفقكلمنهويءةى".chars() {
        let text = format!("ب {c} ب");
        let run = Shaper::default().analyze(&text);
        assert_eq!(run.glyphs[2].form, Some(PresentationForm::Isolated), "{c:?}");
        assert_eq!(
            Some(run.glyphs[2].glyph),
            presentation_form(c, PresentationForm::Isolated),
            "{c:?}"
        );
    }
}

#[test]
fn test_latin_breaks_word() {
    let run = Shaper::default().analyze("بaب");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Isolated));
    assert_eq!(run.glyphs[1].glyph, 'a');
    assert_eq!(run.glyphs[2].form, Some(PresentationForm::Isolated));
}

#[test]
fn test_digits_and_punctuation_pass_through() {
    let text = "ب1ب، ٣!";
    let run = Shaper::default().analyze(text);
    assert_eq!(run.glyphs[1].glyph, '1');
    assert_eq!(run.glyphs[3].glyph, '\u{060C}');
    assert_eq!(run.glyphs[5].glyph, '\u{0663}');
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Isolated));
    assert_eq!(run.glyphs[2].form, Some(PresentationForm::Isolated));
}

#[test]
fn test_presentation_forms_not_reshaped() {
    let shaped = "\u{FE91}\u{FEB4}\u{FEE2}";
    assert_eq!(shape(shaped), shaped);
}

#[test]
fn test_zwnj_breaks_joining() {
    let run = Shaper::default().analyze("ب\u{200C}ب");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Isolated));
    assert_eq!(run.glyphs[2].form, Some(PresentationForm::Isolated));
}

#[test]
fn test_zwj_forces_joining() {
    let run = Shaper::default().analyze("ب\u{200D}");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Initial));
}

// ============================================================================
// MARKS
// ============================================================================

#[test]
fn test_marks_between_letters() {
    // Lam, fatha, shadda, heh
    let run = Shaper::default().analyze("\u{0644}\u{064E}\u{0651}\u{0647}");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Initial));
    assert_eq!(run.glyphs[1].glyph, '\u{064E}');
    assert_eq!(run.glyphs[2].glyph, '\u{0651}');
    assert_eq!(run.glyphs[3].form, Some(PresentationForm::Final));
}

#[test]
fn test_trailing_mark_does_not_connect() {
    let run = Shaper::default().analyze("بِ");
    assert_eq!(run.glyphs[0].form, Some(PresentationForm::Isolated));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_length_preserved() {
    for text in SAMPLES {
        assert_eq!(shape(text).chars().count(), text.chars().count(), "{text:?}");
    }
}

#[test]
fn test_deterministic() {
    let shaper = Shaper::default();
    for text in SAMPLES {
        assert_eq!(shaper.shape(text), shaper.shape(text));
    }
}

#[test]
fn test_right_joining_never_initial_or_medial() {
    let right = "اأإآدذرزوؤةژ";
    let dual = "بسلم";
    for r in right.chars() {
        for d in dual.chars() {
            for text in [format!("{d}{r}{d}"), format!("{r}{d}"), format!("{d}{r}")] {
                let run = Shaper::default().analyze(&text);
                for glyph in run.glyphs.iter().filter(|g| g.source == r) {
                    assert!(
                        matches!(
                            glyph.form,
                            Some(PresentationForm::Isolated | PresentationForm::Final)
                        ),
                        "{text:?}: {:?}",
                        glyph.form
                    );
                }
            }
        }
    }
}

#[test]
fn test_clusters_follow_source() {
    let run = Shaper::default().analyze("بسم الله");
    for (i, glyph) in run.glyphs.iter().enumerate() {
        assert_eq!(glyph.cluster, i);
    }
}

#[test]
fn test_classifier_agrees_with_shaper() {
    assert_eq!(classify('د').joining_class, JoiningClass::RightJoining);
    assert_eq!(classify('س').joining_class, JoiningClass::DualJoining);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_ligatures_shorten_output() {
    let shaper = Shaper::new(Config::new().lam_alef_ligatures(true));
    let text = "السلام";
    // Alef, lam (initial), seen (medial), lam-alef (final), meem (isolated)
    assert_eq!(shaper.shape(text), "\u{FE8D}\u{FEDF}\u{FEB4}\u{FEFC}\u{FEE1}");
    assert_eq!(shaper.shape(text).chars().count(), text.chars().count() - 1);
}

#[test]
fn test_strip_harakat_before_shaping() {
    let shaper = Shaper::new(Config::new().strip_harakat(true));
    assert_eq!(shaper.shape("بِسْمِ"), shape("بسم"));
}
