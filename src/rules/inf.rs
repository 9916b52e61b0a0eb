//! `stem_inf` — infix excision.
//!
//! Grounded on `stemmer.py`'s `stem_inf`: an infix can sit directly at the
//! front of the token, or after a one/two/three-consonant onset, and the
//! syllable immediately after it must start with a vowel for the excision
//! to be plausible.

use crate::candidate::Candidate;

use super::{chars, is_consonant_slice, is_vowel_char};

pub fn stem_inf(tokens: &[Candidate], infixes: &[String]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        let t = chars(&token.text);

        for infix in infixes {
            let x = chars(infix);
            if t.len() <= x.len() + 1 {
                continue;
            }

            let stem: Option<String> = if t.starts_with(&x[..]) && is_vowel_char(t[2]) {
                Some(t[2..].iter().collect())
            } else if t.len() > 3 && t[1..3] == x[..] && is_consonant_slice(&t[0..1]) && is_vowel_char(t[3]) {
                Some(std::iter::once(t[0]).chain(t[3..].iter().copied()).collect())
            } else if t.len() > 4 && t[2..4] == x[..] && is_consonant_slice(&t[0..2]) && is_vowel_char(t[4]) {
                Some(t[0..2].iter().chain(t[4..].iter()).collect())
            } else if t.len() > 5 && t[3..5] == x[..] && is_consonant_slice(&t[0..3]) && is_vowel_char(t[5]) {
                Some(t[0..3].iter().chain(t[5..].iter()).collect())
            } else {
                None
            };

            if let Some(s) = stem {
                out.push(token.derive(s).with_inf(infix.clone()));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infixes() -> Vec<String> {
        vec!["in".into(), "um".into()]
    }

    #[test]
    fn infix_at_front() {
        let out = stem_inf(&[Candidate::root("inaral")], &infixes());
        assert!(out.iter().any(|c| c.text == "aral" && c.inf.as_deref() == Some("in")));
    }

    #[test]
    fn infix_after_one_consonant() {
        let out = stem_inf(&[Candidate::root("sinulat")], &infixes());
        assert!(out.iter().any(|c| c.text == "sulat"));
    }

    #[test]
    fn infix_after_three_consonants() {
        let out = stem_inf(&[Candidate::root("splinit")], &infixes());
        assert!(out.iter().any(|c| c.text == "split"));
    }
}
