//! `stem_pre` — prefix removal and nasal assimilation.
//!
//! Grounded on `stemmer.py`'s `stem_pre`: strip a matching prefix, then try
//! the d/r phoneme reversal and the three nasal-assimilation reversals
//! (`-ng` -> k/null, `-m` -> b/p, `-n` -> d/s/t), each with its own
//! "repeated nasal" variant for doubly-prefixed forms like
//! `pangangailangan`.

use crate::acceptability::is_acceptable;
use crate::candidate::{Assimilation, Candidate, PhonemeChange};

use super::{chars, is_vowel_char, is_vowel_slice};

pub fn stem_pre(tokens: &[Candidate], prefixes: &[String]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        for prefix in prefixes {
            let t = &token.text;
            if !t.starts_with(prefix.as_str()) {
                continue;
            }
            let t_chars = chars(t);
            let p_chars = chars(prefix);
            if t_chars.len() <= p_chars.len() {
                continue;
            }

            let mut stem_chars: Vec<char> = t_chars[p_chars.len()..].to_vec();
            let mut stem = token.derive(stem_chars.iter().collect::<String>()).with_pre(prefix.clone());

            if stem_chars.first() == Some(&'-') {
                stem_chars.remove(0);
                stem = stem.derive(stem_chars.iter().collect::<String>());
            }
            out.push(stem.clone());

            // d/r phoneme change, e.g. parami -> dami
            if stem_chars.first() == Some(&'r') && stem_chars.len() >= 2 {
                if let Some(&last_prefix) = p_chars.last() {
                    if is_vowel_slice(&[last_prefix]) && is_vowel_char(stem_chars[1]) {
                        let mut dr_chars = stem_chars.clone();
                        dr_chars[0] = 'd';
                        let dr: String = dr_chars.iter().collect();
                        out.push(stem.derive(dr).with_phoneme_change(PhonemeChange::PrefixDR));
                    }
                }
            }

            let stem_text: String = stem_chars.iter().collect();
            if !is_acceptable(&stem_text) || !stem_chars.first().is_some_and(|c| is_vowel_char(*c)) {
                continue;
            }

            if prefix.ends_with("ng") {
                let knull: String = std::iter::once('k').chain(stem_chars.iter().copied()).collect();
                out.push(stem.derive(knull).with_assimilation(Assimilation::KNull));

                if stem_chars.len() > 3
                    && stem_chars[1] == 'n'
                    && stem_chars[2] == 'g'
                    && stem_chars[0] == stem_chars[3]
                    && is_vowel_char(stem_chars[0])
                {
                    let ng_rep_chars = &stem_chars[3..];
                    let ng_rep: String = ng_rep_chars.iter().collect();
                    let rep_annotation: String = stem_chars[..3].iter().collect();
                    let ng_rep_cand = stem.derive(ng_rep.clone()).with_rep(rep_annotation);
                    out.push(ng_rep_cand.clone());

                    if is_acceptable(&ng_rep) {
                        let knull2: String = std::iter::once('k').chain(ng_rep_chars.iter().copied()).collect();
                        out.push(ng_rep_cand.derive(knull2).with_assimilation(Assimilation::KNull));
                    }
                }
            } else if prefix.ends_with('m') {
                for l in ['b', 'p'] {
                    let bp: String = std::iter::once(l).chain(stem_chars.iter().copied()).collect();
                    out.push(stem.derive(bp).with_assimilation(Assimilation::BP(l)));
                }

                if stem_chars.len() > 2
                    && stem_chars[1] == 'm'
                    && stem_chars[0] == stem_chars[2]
                    && is_vowel_char(stem_chars[0])
                {
                    let rest = &stem_chars[2..];
                    for l in ['b', 'p'] {
                        let bp: String = std::iter::once(l).chain(rest.iter().copied()).collect();
                        out.push(stem.derive(bp).with_assimilation(Assimilation::BP(l)));
                    }
                }
            } else if prefix.ends_with('n') {
                for l in ['d', 's', 't'] {
                    let dst: String = std::iter::once(l).chain(stem_chars.iter().copied()).collect();
                    out.push(stem.derive(dst).with_assimilation(Assimilation::DST(l)));
                }

                if stem_chars.len() > 2
                    && stem_chars[1] == 'n'
                    && stem_chars[0] == stem_chars[2]
                    && is_vowel_char(stem_chars[0])
                {
                    let rest = &stem_chars[2..];
                    for l in ['d', 's', 't'] {
                        let dst: String = std::iter::once(l).chain(rest.iter().copied()).collect();
                        out.push(stem.derive(dst).with_assimilation(Assimilation::DST(l)));
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        vec!["pa".into(), "pam".into(), "pan".into(), "pang".into()]
    }

    #[test]
    fn k_null_assimilation_single() {
        let seed = Candidate::root("pangailangan");
        let out = stem_pre(&[seed], &prefixes());
        assert!(out.iter().any(|c| c.text == "kailangan" && c.assimilation == Some(Assimilation::KNull)));
    }

    #[test]
    fn d_r_phoneme_change() {
        let seed = Candidate::root("parami");
        let out = stem_pre(&[seed], &prefixes());
        assert!(out.iter().any(|c| c.text == "dami" && c.phoneme_change == Some(PhonemeChange::PrefixDR)));
    }

    #[test]
    fn b_p_assimilation() {
        let seed = Candidate::root("pamigay");
        let out = stem_pre(&[seed], &prefixes());
        assert!(out.iter().any(|c| c.text == "bigay" && c.assimilation == Some(Assimilation::BP('b'))));
    }
}
