//! Cardinal number spelling
//!
//! An integer is split into base-1000 triads, each triad is spelled from
//! fixed word tables, and scale words are chosen by numeral-noun agreement.

mod decompose;
mod speller;
pub mod words;

pub use decompose::{Decomposition, MAX_MAGNITUDE, Sign, Triad, decompose};
pub use speller::{NumberPhrase, number_phrase, parse_number, spell_number};
