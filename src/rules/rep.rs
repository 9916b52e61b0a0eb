//! `stem_rep` — partial (CV-copy) reduplication.
//!
//! Grounded on `stemmer.py`'s `stem_rep`: at most one pattern fires per
//! token, tried from the simplest (a doubled leading vowel) through
//! progressively wider consonant onsets (one, two, then three leading
//! consonants).

use crate::candidate::Candidate;

use super::{chars, is_consonant_char, is_consonant_slice, is_vowel_char, is_vowel_slice};

pub fn stem_rep(tokens: &[Candidate]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        let t = chars(&token.text);
        let n = t.len();
        let mut result: Option<(String, String)> = None; // (stem text, rep annotation)

        if n > 2 && t[0] == t[1] && is_vowel_slice(&t[0..2]) {
            result = Some((t[1..].iter().collect(), t[0].to_string()));
        } else if n > 4 && t[0..2] == t[2..4] && is_consonant_char(t[0]) {
            result = Some((t[2..].iter().collect(), t[0..2].iter().collect()));
        } else if n > 5 {
            if t[0] == t[2] && t[1] == t[4] && is_consonant_char(t[0]) && is_vowel_char(t[1]) {
                result = Some((t[2..].iter().collect(), t[0..2].iter().collect()));
            } else if t[0..2] == t[2..4] && is_consonant_slice(&t[0..2]) && is_vowel_char(t[4]) {
                result = Some((t[2..].iter().collect(), t[0..2].iter().collect()));
            } else if t[0..2] == t[3..5] && is_consonant_slice(&t[0..2]) && is_vowel_char(t[2]) {
                result = Some((t[3..].iter().collect(), t[0..3].iter().collect()));
            }
        }

        if n > 6 {
            if t[0] == t[2] && t[1] == t[5] && is_consonant_char(t[0]) && is_vowel_char(t[1]) {
                result = Some((t[2..].iter().collect(), t[0..2].iter().collect()));
            } else if t[0..2] == t[2..4] && is_consonant_slice(&t[0..2]) && is_vowel_char(t[5]) {
                result = Some((t[2..].iter().collect(), t[0..2].iter().collect()));
            } else if t[0..2] == t[3..5] && t[2] == t[6] && is_consonant_slice(&t[0..2]) && is_vowel_char(t[6]) {
                result = Some((t[3..].iter().collect(), t[0..3].iter().collect()));
            } else if t[0..3] == t[3..6] && is_consonant_slice(&t[0..3]) && is_vowel_char(t[6]) {
                result = Some((t[3..].iter().collect(), t[0..3].iter().collect()));
            } else if n > 7 && t[0..4] == t[4..8] && is_consonant_slice(&t[0..3]) && is_vowel_char(t[3]) {
                result = Some((t[4..].iter().collect(), t[0..4].iter().collect()));
            }
        }

        if let Some((text, rep)) = result {
            out.push(token.derive(text).with_rep(rep));
        }
    }

    out
}
