//! Rule-based tashkeel
//!
//! Adds the genitive kasra to the noun that follows a preposition.

use crate::normalize::{is_arabic_letter, is_haraka, normalize};

const KASRA: char = '\u{0650}';

/// Prepositions that put the following noun in the genitive, normalized
const PREPOSITIONS: [&str; 5] = ["من", "عن", "الي", "علي", "في"];

/// Add diacritics that follow from simple grammatical rules
///
/// The word after a preposition gets a kasra on its last letter unless that
/// letter already carries a haraka or is a long-vowel ending. Whitespace is
/// preserved exactly.
pub fn tashkeel(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    let mut after_preposition = false;

    for piece in text.split_inclusive(char::is_whitespace) {
        let word = piece.trim_end_matches(char::is_whitespace);
        let trailing = &piece[word.len()..];

        if word.is_empty() {
            result.push_str(trailing);
            continue;
        }

        if after_preposition {
            push_with_kasra(&mut result, word);
        } else {
            result.push_str(word);
        }
        result.push_str(trailing);

        after_preposition = is_preposition(word);
    }

    result
}

fn is_preposition(word: &str) -> bool {
    let bare = normalize(word);
    PREPOSITIONS.contains(&bare.as_str())
}

/// Push `word`, inserting a kasra after its last Arabic letter when allowed
fn push_with_kasra(out: &mut String, word: &str) {
    let Some((index, last)) = word.char_indices().rev().find(|&(_, c)| is_arabic_letter(c)) else {
        out.push_str(word);
        return;
    };

    let split = index + last.len_utf8();
    let already_marked = word[split..].starts_with(is_haraka);
    let long_vowel = matches!(last, '\u{0627}' | '\u{0649}' | '\u{0648}' | '\u{064A}');

    out.push_str(&word[..split]);
    if !already_marked && !long_vowel {
        out.push(KASRA);
    }
    out.push_str(&word[split..]);
}
