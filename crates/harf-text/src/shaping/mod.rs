//! Arabic contextual shaping

pub mod forms;
pub mod joining;
mod run;
mod shaper;

pub use forms::{PresentationForm, presentation_form};
pub use joining::{JoiningClass, Letter, classify, is_presentation_form, joining_class};
pub use run::{ShapedGlyph, ShapedRun};
pub use shaper::{Shaper, shape};
