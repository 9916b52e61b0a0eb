//! `stem_vowel_loss` — undo syncope.
//!
//! Grounded on `stemmer.py`'s `stem_vowel_loss`. Unlike every other rule in
//! the cascade, this one is not speculative: a reinserted vowel is only
//! ever surfaced if the resulting form is already a known word, since
//! there is no phonological cue for exactly where a deleted medial vowel
//! used to sit.

use crate::acceptability::is_valid;
use crate::candidate::Candidate;
use crate::phoneme::VOWELS;

use super::chars;

pub fn stem_vowel_loss(tokens: &[Candidate], lexicon: &[String]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        let t_chars = chars(&token.text);

        for &vowel in VOWELS {
            if t_chars.len() > 1 {
                let appended: String = t_chars.iter().collect::<String>() + &vowel.to_string();
                if is_valid(&appended, lexicon) {
                    out.push(token.derive(appended).with_vowel_loss(vowel));
                }
            }

            if t_chars.len() > 2 {
                let mut inserted = t_chars[..t_chars.len() - 1].to_vec();
                inserted.push(vowel);
                inserted.push(t_chars[t_chars.len() - 1]);
                let inserted_text: String = inserted.iter().collect();
                if is_valid(&inserted_text, lexicon) {
                    out.push(token.derive(inserted_text).with_vowel_loss(vowel));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_vowel_before_final_consonant_when_lexicon_valid() {
        let lex = vec!["bukas".to_string()];
        let out = stem_vowel_loss(&[Candidate::root("buks")], &lex);
        assert!(out.iter().any(|c| c.text == "bukas" && c.vowel_loss == Some('a')));
    }

    #[test]
    fn non_matching_lexicon_rejects_everything() {
        let lex = vec!["walangkwenta".to_string()];
        let out = stem_vowel_loss(&[Candidate::root("buks")], &lex);
        assert!(out.is_empty());
    }

    #[test]
    fn absent_lexicon_accepts_every_insertion() {
        let out = stem_vowel_loss(&[Candidate::root("buks")], &[]);
        assert!(!out.is_empty());
    }
}
