//! `stem_suf` — suffix removal, contractions, phonological reversals,
//! vowel-loss, and metathesis.
//!
//! Grounded on `stemmer.py`'s `stem_suf`, the densest rule in the cascade:
//! a matched suffix is either a genuine suffix or one of four contraction
//! markers (`ng`, `g`, `'t`, `'y`), and the resulting stem is then probed
//! for the d/r, o/u, and e/i phoneme reversals before vowel-loss and
//! metathesis are attempted on consonant-final shapes.

use crate::acceptability::is_acceptable;
use crate::candidate::{Candidate, PhonemeChange};
use crate::manipulation::{replace_at, swap};

use super::vowel_loss::stem_vowel_loss;
use super::{chars, is_consonant_slice};

pub fn stem_suf(tokens: &[Candidate], suffixes: &[String], lexicon: &[String]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        let t = &token.text;
        let t_chars = chars(t);

        for suffix in suffixes {
            let f = chars(suffix);
            if !t.ends_with(suffix.as_str()) || t_chars.len() <= f.len() {
                continue;
            }

            let cut = t_chars.len() - f.len();
            let s_chars = t_chars[..cut].to_vec();
            if s_chars.is_empty() {
                continue;
            }
            let last = *s_chars.last().unwrap();

            let is_contraction_class = matches!(suffix.as_str(), "ng" | "g" | "'t" | "'y");
            if is_contraction_class {
                if suffix == "g" && last == 'n' {
                    continue;
                }
                if (suffix == "'t" || suffix == "'y") && !super::is_vowel_char(last) {
                    continue;
                }
            }

            let s_text: String = s_chars.iter().collect();
            let mut stem = token.derive(s_text.clone());
            stem = if is_contraction_class {
                stem.with_contraction(suffix.clone())
            } else {
                stem.with_suf(suffix.clone())
            };
            out.push(stem.clone());

            // d/r (e.g. bayaran -> bayad)
            if (suffix == "in" || suffix == "an") && last == 'r' {
                let dr = replace_at(&stem, -1, 'd').with_phoneme_change(PhonemeChange::SuffixDR);
                out.push(dr);
            }

            // o/u
            if s_chars.len() > 1 && last == 'u' {
                out.push(replace_at(&stem, -1, 'o').with_phoneme_change(PhonemeChange::SuffixOU));
            } else if s_chars.len() > 2 && s_chars[s_chars.len() - 2] == 'u' {
                out.push(replace_at(&stem, -2, 'o').with_phoneme_change(PhonemeChange::SuffixOU));
            }

            // e/i
            if s_chars.len() > 1 && last == 'i' {
                out.push(replace_at(&stem, -1, 'e').with_phoneme_change(PhonemeChange::SuffixEI));
            } else if s_chars.len() > 2 && s_chars[s_chars.len() - 2] == 'i' {
                out.push(replace_at(&stem, -2, 'e').with_phoneme_change(PhonemeChange::SuffixEI));
            }

            if s_chars.len() > 2
                && is_acceptable(&s_text)
                && is_consonant_slice(&s_chars[s_chars.len() - 2..])
            {
                out.extend(stem_vowel_loss(std::slice::from_ref(&stem), lexicon));

                let metathesised = swap(&stem, -1, -2).with_metathesis();
                if crate::acceptability::is_valid(&metathesised.text, lexicon) {
                    out.push(metathesised);
                } else {
                    out.extend(stem_vowel_loss(std::slice::from_ref(&metathesised), lexicon));
                }
            }
        }
    }

    out
}
