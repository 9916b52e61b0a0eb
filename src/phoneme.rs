//! Phoneme classification for Tagalog orthography.
//!
//! Two character sets back every predicate in the stemmer: vowels and
//! consonants. Loanword digraphs (`ch`, `sh`, ...) are never treated as a
//! unit here — they fall out for free because classification is always
//! done character by character.

/// Tagalog vowels (the five base vowels of the modern Filipino alphabet).
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Tagalog consonants, including `ñ` and the digraph letter `w`/`y` glides
/// and the borrowed letters (`c`, `f`, `j`, `q`, `v`, `x`, `z`) that appear
/// in loanwords and proper nouns.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'ñ', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

/// True iff every character of the concatenation of `parts` is a vowel.
///
/// The empty string is vacuously a vowel string; callers that care about
/// length guard separately (see [`crate::acceptability::is_acceptable`]).
pub fn is_vowel(parts: &[&str]) -> bool {
    parts
        .iter()
        .flat_map(|s| s.chars())
        .all(|c| VOWELS.contains(&c.to_ascii_lowercase()))
}

/// True iff every character of the concatenation of `parts` is a consonant.
pub fn is_consonant(parts: &[&str]) -> bool {
    parts
        .iter()
        .flat_map(|s| s.chars())
        .all(|c| CONSONANTS.contains(&c.to_ascii_lowercase()))
}

/// Convenience form for a single substring.
pub fn is_vowel_str(s: &str) -> bool {
    is_vowel(&[s])
}

/// Convenience form for a single substring.
pub fn is_consonant_str(s: &str) -> bool {
    is_consonant(&[s])
}

/// Convenience form for a single character.
pub fn is_vowel_char(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Convenience form for a single character.
pub fn is_consonant_char(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_single_chars() {
        for v in VOWELS {
            assert!(is_vowel_char(*v));
            assert!(!is_consonant_char(*v));
        }
    }

    #[test]
    fn consonant_single_chars() {
        for c in CONSONANTS {
            assert!(is_consonant_char(*c));
            assert!(!is_vowel_char(*c));
        }
    }

    #[test]
    fn empty_string_is_vacuously_vowel_and_consonant() {
        assert!(is_vowel_str(""));
        assert!(is_consonant_str(""));
    }

    #[test]
    fn mixed_string_is_neither() {
        assert!(!is_vowel_str("ba"));
        assert!(!is_consonant_str("ba"));
    }

    #[test]
    fn variadic_form_concatenates_before_testing() {
        // "a" + "i" = "ai", all vowels
        assert!(is_vowel(&["a", "i"]));
        // "n" + "g" = "ng", all consonants
        assert!(is_consonant(&["n", "g"]));
        // mixed across the two substrings still fails
        assert!(!is_vowel(&["a", "n"]));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_vowel_str("A"));
        assert!(is_consonant_str("K"));
    }

    #[test]
    fn enye_is_a_consonant() {
        assert!(is_consonant_str("ñ"));
    }
}
