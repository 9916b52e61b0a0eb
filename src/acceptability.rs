//! Surface-form acceptability checks.
//!
//! A candidate is only ever surfaced to a caller once it clears
//! [`is_acceptable`], and a derivation is only frozen against a known word
//! once it clears [`is_valid`]. Neither check mutates a candidate; both
//! read its current text.

use crate::phoneme::{is_consonant_str, is_vowel_str};

/// True iff `token` is a member of `lexicon`.
///
/// An empty lexicon accepts everything — this mirrors treating "no
/// reference list supplied" as "don't filter", which the lexicon-assembly
/// callers rely on when they want to check shape only.
pub fn is_valid(token: &str, lexicon: &[String]) -> bool {
    if lexicon.is_empty() {
        return true;
    }
    lexicon.iter().any(|w| w == token)
}

/// True iff `token` has a plausible Tagalog surface shape.
///
/// A vowel-initial token is acceptable at exactly two letters, or at three
/// or more if it contains at least one consonant anywhere. A
/// consonant-initial token is acceptable at exactly three letters, or at
/// four or more if it contains at least one vowel anywhere. This rules out
/// both bare-vowel fragments (`"aaa"`) and bare-consonant fragments
/// (`"bbbb"`) from ever being offered as a stem.
pub fn is_acceptable(token: &str) -> bool {
    let len = token.chars().count();
    let Some(first) = token.chars().next() else {
        return false;
    };

    if is_vowel_str(&first.to_string()) {
        len == 2 || (len >= 3 && token.chars().any(|c| is_consonant_str(&c.to_string())))
    } else if is_consonant_str(&first.to_string()) {
        len == 3 || (len >= 4 && token.chars().any(|c| is_vowel_str(&c.to_string())))
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_with_empty_lexicon_accepts_anything() {
        assert!(is_valid("anything", &[]));
    }

    #[test]
    fn is_valid_membership() {
        let lex = vec!["dami".to_string(), "bigay".to_string()];
        assert!(is_valid("dami", &lex));
        assert!(!is_valid("wala", &lex));
    }

    #[test]
    fn is_acceptable_matches_reference_cases() {
        assert!(is_acceptable("word"));
        assert!(!is_acceptable("aaa"));
        assert!(!is_acceptable("bbbb"));
        assert!(!is_acceptable("c"));
    }

    #[test]
    fn is_acceptable_two_letter_vowel_initial() {
        assert!(is_acceptable("ay"));
    }

    #[test]
    fn is_acceptable_three_letter_consonant_initial() {
        assert!(is_acceptable("bat"));
    }

    #[test]
    fn is_acceptable_rejects_empty() {
        assert!(!is_acceptable(""));
    }
}
