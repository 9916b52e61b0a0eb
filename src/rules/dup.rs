//! `stem_dup` — full reduplication.
//!
//! Grounded on `stemmer.py`'s `stem_dup`: only tokens with exactly one
//! internal hyphen qualify, and the two hyphen-joined halves are compared
//! under an escalating set of equivalences (exact match, stuttering
//! prefix, o/u alternation, then the `ng`/`'t`/`t` contraction markers on
//! the first half).
//!
//! The contraction markers compared here (`ng`, `'t`, `t`) are ASCII, so
//! byte slicing off the tail of `first` is safe once `ends_with` has
//! confirmed they're present.

use crate::candidate::{Candidate, PhonemeChange};

pub fn stem_dup(tokens: &[Candidate]) -> Vec<Candidate> {
    let mut out = Vec::new();

    for token in tokens {
        let t = &token.text;
        if !t.contains('-') || t.starts_with('-') || t.ends_with('-') {
            continue;
        }
        let parts: Vec<&str> = t.split('-').collect();
        if parts.len() != 2 {
            continue;
        }
        let (first, second) = (parts[0], parts[1]);
        let first_len = first.chars().count();
        let second_len = second.chars().count();
        if first_len <= 1 || second_len <= 1 {
            continue;
        }

        if first == second {
            out.push(token.derive(first).with_dup(first));
            continue;
        }

        if first_len > 2 && second_len > 4 && second.starts_with(first) {
            out.push(token.derive(second).with_dup(first));
            continue;
        }

        if first_len > 2 && replaces_to(first, 1, 'u', 'o') == second {
            out.push(
                token
                    .derive(second)
                    .with_dup(second)
                    .with_phoneme_change(PhonemeChange::DupOU),
            );
            continue;
        }
        if first_len > 1 && replaces_to(first, 2, 'u', 'o') == second {
            out.push(
                token
                    .derive(second)
                    .with_dup(second)
                    .with_phoneme_change(PhonemeChange::DupOU),
            );
            continue;
        }

        if first_len > 3 && (first.ends_with("ng") || first.ends_with("'t")) {
            let tag = &first[first.len() - 2..];
            let without_2 = &first[..first.len() - 2];

            if without_2 == second {
                out.push(token.derive(second).with_dup(second).with_contraction(tag));
                continue;
            }

            if nth_from_end_is(first, 3, 'u') && ou_drop_tail(first, 3) == second {
                out.push(token.derive(second).with_dup(second).with_contraction(tag));
                continue;
            }

            if tag == "ng" {
                let without_1 = &first[..first.len() - 1];
                if without_1 == second {
                    out.push(
                        token
                            .derive(second)
                            .with_dup(second)
                            .with_contraction(last_char(first).to_string()),
                    );
                    continue;
                }

                if nth_from_end_is(first, 3, 'u') {
                    let candidate = replaces_to(without_1, 2, 'u', 'o');
                    if candidate == second {
                        out.push(
                            token
                                .derive(second)
                                .with_dup(second)
                                .with_contraction(last_char(first).to_string())
                                .with_phoneme_change(PhonemeChange::DupOU),
                        );
                        continue;
                    }
                }
            }
        }

        if first_len > 2 && first.ends_with('t') {
            let without_1 = &first[..first.len() - 1];
            if without_1 == second {
                out.push(token.derive(second).with_dup(second).with_contraction("t"));
                continue;
            }

            if nth_from_end_is(first, 2, 'u') && ou_drop_tail(first, 2) == second {
                out.push(
                    token
                        .derive(second)
                        .with_dup(second)
                        .with_contraction("t")
                        .with_phoneme_change(PhonemeChange::DupOU),
                );
            }
        }
    }

    out
}

/// Replace the character `n` positions from the end (1-based) with `to`,
/// if the character currently there is `from`; otherwise return `s`
/// unchanged (so the equality check against `second` simply fails).
fn replaces_to(s: &str, n_from_end: usize, from: char, to: char) -> String {
    let mut cs: Vec<char> = s.chars().collect();
    if cs.len() < n_from_end {
        return s.to_string();
    }
    let idx = cs.len() - n_from_end;
    if cs[idx] != from {
        return s.to_string();
    }
    cs[idx] = to;
    cs.iter().collect()
}

fn nth_from_end_is(s: &str, n_from_end: usize, target: char) -> bool {
    let cs: Vec<char> = s.chars().collect();
    cs.len() >= n_from_end && cs[cs.len() - n_from_end] == target
}

/// Drop the trailing `n_from_end - 1` characters and append `'o'`, used for
/// the `first[0:-3] + "o"` / `first[0:-2] + "o"` alternation checks.
fn ou_drop_tail(s: &str, n_from_end: usize) -> String {
    let cs: Vec<char> = s.chars().collect();
    let keep = cs.len() - n_from_end;
    cs[..keep].iter().collect::<String>() + "o"
}

fn last_char(s: &str) -> char {
    s.chars().last().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        let out = stem_dup(&[Candidate::root("ano-ano")]);
        assert!(out.iter().any(|c| c.text == "ano" && c.dup.as_deref() == Some("ano")));
    }

    #[test]
    fn t_contraction() {
        let out = stem_dup(&[Candidate::root("iba't-iba")]);
        assert!(out.iter().any(|c| c.text == "iba" && c.contraction.as_deref() == Some("'t")));
    }

    #[test]
    fn ng_contraction_with_ou() {
        let out = stem_dup(&[Candidate::root("hapung-hapon")]);
        assert!(out.iter().any(|c| c.text == "hapon"));
    }

    #[test]
    fn stuttering_prefix() {
        let out = stem_dup(&[Candidate::root("panga-pangako")]);
        assert!(out.iter().any(|c| c.text == "pangako" && c.dup.as_deref() == Some("panga")));
    }

    #[test]
    fn ng_strip_to_g_contraction() {
        let out = stem_dup(&[Candidate::root("ating-atin")]);
        assert!(out.iter().any(|c| c.text == "atin" && c.contraction.as_deref() == Some("g")));
    }

    #[test]
    fn second_o_u_clause_accepts_two_character_first() {
        let out = stem_dup(&[Candidate::root("uy-oy")]);
        assert!(out.iter().any(|c| c.text == "oy" && c.phoneme_change == Some(PhonemeChange::DupOU)));
    }
}
