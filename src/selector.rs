//! Selecting the best candidate out of a stemmed frontier.
//!
//! Grounded on `stemmer.py`'s `get_stem`/`sort_candidates`: filter to
//! valid, acceptable candidates, prefer untransformed/uncontracted forms,
//! and within the winning preference class take the candidate that peeled
//! off the most characters.

use crate::acceptability::{is_acceptable, is_valid};
use crate::candidate::Candidate;

/// Sort `candidates` by score descending (ties broken by text, for
/// determinism — `BTreeMap` iteration already hands us candidates in text
/// order, but a stable sort on score alone would otherwise leave ties in
/// whatever order the frontier produced them).
pub fn sort_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score().cmp(&a.score()).then_with(|| a.text.cmp(&b.text)));
    candidates
}

/// Filter the full cascade output down to valid, acceptable candidates.
/// Returns the original `input` as the sole survivor if nothing passes.
pub fn filter_candidates(all: Vec<Candidate>, input: &str, lexicon: &[String]) -> Vec<Candidate> {
    let filtered: Vec<Candidate> = all
        .into_iter()
        .filter(|c| is_valid(&c.text, lexicon) && is_acceptable(&c.text))
        .collect();

    if filtered.is_empty() {
        vec![Candidate::root(input)]
    } else {
        sort_candidates(filtered)
    }
}

/// Pick the best stem from the cascade's raw output, per the §4.5
/// preference-class hierarchy: drop the input and anything that isn't a
/// valid, acceptable word, then prefer candidates with neither
/// transformations nor a contraction, then no-contraction, then
/// no-transformation, then anything left.
pub fn select_best(all: Vec<Candidate>, input: &str, lexicon: &[String]) -> Candidate {
    let candidates: Vec<Candidate> = all
        .into_iter()
        .filter(|c| c.text != input)
        .filter(|c| is_valid(&c.text, lexicon) && is_acceptable(&c.text))
        .collect();
    if candidates.is_empty() {
        return Candidate::root(input);
    }

    let no_transformations: Vec<Candidate> =
        candidates.iter().filter(|c| c.count_transformations() == 0).cloned().collect();
    let no_contractions: Vec<Candidate> = candidates.iter().filter(|c| !c.has_contraction()).cloned().collect();

    let no_tran_cont: Vec<Candidate> = no_transformations
        .iter()
        .filter(|c| no_contractions.iter().any(|k| k.text == c.text))
        .cloned()
        .collect();

    let class = if !no_tran_cont.is_empty() {
        no_tran_cont
    } else if !no_contractions.is_empty() {
        no_contractions
    } else if !no_transformations.is_empty() {
        no_transformations
    } else {
        candidates
    };

    sort_candidates(class).into_iter().next().expect("non-empty class")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Assimilation;

    #[test]
    fn prefers_untransformed_uncontracted_over_everything() {
        let input = "pangailangan";
        let plain = Candidate::root("kailangan").with_pre("pang").with_assimilation(Assimilation::KNull);
        // assimilation counts as a transformation, so this alone lands in no_contractions only
        let best = select_best(vec![Candidate::root(input), plain.clone()], input, &[]);
        assert_eq!(best.text, "kailangan");
    }

    #[test]
    fn falls_back_to_input_when_nothing_else_present() {
        let best = select_best(vec![Candidate::root("xyz")], "xyz", &[]);
        assert_eq!(best.text, "xyz");
    }

    #[test]
    fn rejects_untransformed_candidates_not_in_the_lexicon() {
        let input = "pangailangan";
        // higher score than the real stem, but not itself a lexicon word
        let junk = Candidate::root("ailang").with_pre("pang").with_suf("an");
        let real = Candidate::root("kailangan").with_pre("pang").with_assimilation(Assimilation::KNull);
        let lexicon = vec!["kailangan".to_string()];
        let best = select_best(vec![Candidate::root(input), junk, real], input, &lexicon);
        assert_eq!(best.text, "kailangan");
    }

    #[test]
    fn sort_candidates_orders_by_score_descending() {
        let a = Candidate::root("a").with_pre("pa");
        let b = Candidate::root("b").with_pre("pang");
        let sorted = sort_candidates(vec![a, b]);
        assert_eq!(sorted[0].text, "b");
    }
}
