//! Contextual shaper
//!
//! Rewrites logical Arabic letters into presentation forms in a single
//! left-to-right pass, with one unit of lookahead past combining marks.

use super::forms::{is_lam_alef_sequence, lam_alef_ligature, presentation_form};
use super::joining::{JoiningClass, Letter, classify};
use super::{PresentationForm, ShapedGlyph, ShapedRun};
use crate::Config;
use crate::normalize::strip_haraka;

/// Arabic contextual shaper
#[derive(Debug, Clone, Default)]
pub struct Shaper {
    config: Config,
}

impl Shaper {
    /// Create a new shaper
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get shaper configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shape text and return the rendered string
    pub fn shape(&self, text: &str) -> String {
        self.analyze(text).to_string()
    }

    /// Shape text and return per-character glyph information
    pub fn analyze(&self, text: &str) -> ShapedRun {
        // Input position of every character that takes part in shaping
        let chars: Vec<(usize, char)> = text
            .chars()
            .enumerate()
            .filter_map(|(i, c)| {
                if self.config.strip_harakat {
                    strip_haraka(c).map(|c| (i, c))
                } else {
                    Some((i, c))
                }
            })
            .collect();

        let letters: Vec<Letter> = chars.iter().map(|&(_, c)| self.classify(c)).collect();
        let following = following_classes(&letters);

        let mut glyphs = Vec::with_capacity(letters.len());
        // Whether the last rendered letter offers a stroke to the next one
        let mut joins_forward = false;
        let mut i = 0;

        while i < letters.len() {
            let letter = letters[i];
            let cluster = chars[i].0;

            if !letter.is_arabic {
                match letter.joining_class {
                    JoiningClass::Transparent => {}
                    JoiningClass::JoinCausing => joins_forward = true,
                    _ => joins_forward = false,
                }
                glyphs.push(ShapedGlyph::passthrough(letter.code_point, cluster));
                i += 1;
                continue;
            }

            let joins_previous = joins_forward && letter.joining_class.joins_backward();

            if self.config.lam_alef_ligatures {
                if let Some(glyph) = self.ligature(&letters, i, cluster, joins_previous) {
                    glyphs.push(glyph);
                    joins_forward = false;
                    i += 2;
                    continue;
                }
            }

            let joins_next = letter.joining_class.joins_forward() && following[i].joins_backward();
            let form = match letter.joining_class {
                JoiningClass::DualJoining => {
                    PresentationForm::from_connections(joins_previous, joins_next)
                }
                JoiningClass::RightJoining if joins_previous => PresentationForm::Final,
                _ => PresentationForm::Isolated,
            };

            glyphs.push(ShapedGlyph {
                source: letter.code_point,
                glyph: presentation_form(letter.code_point, form).unwrap_or(letter.code_point),
                form: Some(form),
                cluster,
            });
            joins_forward = form.connects_forward();
            i += 1;
        }

        let run = ShapedRun::new(glyphs);
        tracing::trace!(
            "Shaped {} chars into {} glyphs ({} reshaped)",
            letters.len(),
            run.len(),
            run.reshaped_count()
        );
        run
    }

    /// Classify a character, honoring the join-causing option
    fn classify(&self, c: char) -> Letter {
        let mut letter = classify(c);
        if !self.config.join_causing && letter.joining_class == JoiningClass::JoinCausing {
            letter.joining_class = JoiningClass::NonJoining;
        }
        letter
    }

    /// Lam-alef ligature glyph for a lam at `index`, if the next char is an alef
    fn ligature(
        &self,
        letters: &[Letter],
        index: usize,
        cluster: usize,
        joins_previous: bool,
    ) -> Option<ShapedGlyph> {
        let lam = letters[index].code_point;
        let alef = letters.get(index + 1)?.code_point;
        if !is_lam_alef_sequence(lam, alef) {
            return None;
        }

        let form = if joins_previous {
            PresentationForm::Final
        } else {
            PresentationForm::Isolated
        };

        Some(ShapedGlyph {
            source: lam,
            glyph: lam_alef_ligature(alef, form)?,
            form: Some(form),
            cluster,
        })
    }
}

/// For each position, the joining class of the nearest following
/// non-transparent character (`NonJoining` past the end)
fn following_classes(letters: &[Letter]) -> Vec<JoiningClass> {
    let mut following = vec![JoiningClass::NonJoining; letters.len()];
    let mut next = JoiningClass::NonJoining;

    for (i, letter) in letters.iter().enumerate().rev() {
        following[i] = next;
        if letter.joining_class != JoiningClass::Transparent {
            next = letter.joining_class;
        }
    }

    following
}

/// Shape text with the default configuration
pub fn shape(text: &str) -> String {
    Shaper::default().shape(text)
}
