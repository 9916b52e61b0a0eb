//! The candidate frontier and the cascade runner.
//!
//! Grounded on `stemmer.py`'s `apply_stemming`/`get_stem_candidates`: the
//! frontier is a set of candidates keyed by text, accumulated by running
//! each rule family over the current snapshot and unioning its output
//! back in. A `BTreeMap` keeps iteration order a pure function of the text
//! itself, which the determinism property in the spec requires — a
//! `HashMap`'s randomized iteration order would make tie-breaking within
//! the selector observably nondeterministic across runs.

use std::collections::BTreeMap;

use crate::affixes::AffixLists;
use crate::candidate::Candidate;
use crate::rules::{dup, inf, pre, rep, suf};

/// A deduplicated set of candidates, keyed by `text`. The first candidate
/// inserted for a given text wins ties, matching the underlying Python
/// `set`'s "first occurrence survives" membership semantics.
#[derive(Debug, Default)]
pub struct Frontier {
    by_text: BTreeMap<String, Candidate>,
}

impl Frontier {
    pub fn seeded(seed: Candidate) -> Self {
        let mut frontier = Frontier::default();
        frontier.insert(seed);
        frontier
    }

    pub fn insert(&mut self, candidate: Candidate) {
        self.by_text.entry(candidate.text.clone()).or_insert(candidate);
    }

    pub fn extend(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for c in candidates {
            self.insert(c);
        }
    }

    pub fn snapshot(&self) -> Vec<Candidate> {
        self.by_text.values().cloned().collect()
    }

    pub fn into_values(self) -> Vec<Candidate> {
        self.by_text.into_values().collect()
    }
}

/// Run the fixed seven-stage cascade against the seeded frontier and
/// return every candidate accumulated, including the original input.
pub fn run_cascade(input: &str, affixes: &AffixLists, lexicon: &[String]) -> Vec<Candidate> {
    let mut frontier = Frontier::seeded(Candidate::root(input));

    frontier.extend(dup::stem_dup(&frontier.snapshot()));
    frontier.extend(pre::stem_pre(&frontier.snapshot(), &affixes.prefixes));
    frontier.extend(rep::stem_rep(&frontier.snapshot()));
    frontier.extend(inf::stem_inf(&frontier.snapshot(), &affixes.infixes));
    frontier.extend(rep::stem_rep(&frontier.snapshot()));
    frontier.extend(suf::stem_suf(&frontier.snapshot(), &affixes.suffixes, lexicon));
    frontier.extend(dup::stem_dup(&frontier.snapshot()));

    frontier.into_values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_dedups_by_text_keeping_first() {
        let mut f = Frontier::seeded(Candidate::root("bayad").with_suf("an"));
        f.insert(Candidate::root("bayad").with_pre("pa"));
        let snap = f.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].suf.as_deref(), Some("an"));
    }

    #[test]
    fn cascade_includes_original_token() {
        let affixes = crate::affixes::default_affixes();
        let lexicon = crate::lexicon::default_lexicon();
        let out = run_cascade("bukas", affixes, lexicon);
        assert!(out.iter().any(|c| c.text == "bukas"));
    }
}
