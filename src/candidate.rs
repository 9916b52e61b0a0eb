//! The annotated candidate stem.
//!
//! The original implementation attaches transformation metadata to a
//! subclass of the string primitive so every slicing/concatenation
//! operation on the Python side propagates it automatically. Rust has no
//! such inheritance trick for `String`, so the annotation trail is modeled
//! explicitly as a record, and every rule in [`crate::rules`] threads it
//! through by hand via [`Candidate::derive`].

use std::fmt;

/// Which phonological alternation a rule reversed to produce this
/// candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeChange {
    /// `r` restored to `d` after a prefix (e.g. `parami` -> `dami`).
    PrefixDR,
    /// `r` restored to `d` after a suffix (e.g. `bayaran` -> `bayad`).
    SuffixDR,
    /// `u` restored to `o` after a suffix (e.g. `inuman` -> `inom`).
    SuffixOU,
    /// `i` restored to `e` after a suffix (e.g. `paitin` -> `paet`).
    SuffixEI,
    /// `u` restored to `o` across full reduplication.
    DupOU,
}

impl fmt::Display for PhonemeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhonemeChange::PrefixDR => "pre: d/r",
            PhonemeChange::SuffixDR => "suf: d/r",
            PhonemeChange::SuffixOU => "suf: o/u",
            PhonemeChange::SuffixEI => "suf: e/i",
            PhonemeChange::DupOU => "dup: o/u",
        };
        f.write_str(s)
    }
}

/// Which nasal-assimilation reversal a rule applied at a prefix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assimilation {
    /// `pang-` assimilated away entirely before a vowel-initial root.
    KNull,
    /// `pam-` assimilated from an underlying `b` or `p`.
    BP(char),
    /// `pan-` assimilated from an underlying `d`, `s`, or `t`.
    DST(char),
}

impl fmt::Display for Assimilation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assimilation::KNull => f.write_str("k/null"),
            Assimilation::BP(l) => write!(f, "b/p: {l}"),
            Assimilation::DST(l) => write!(f, "d/s/t: {l}"),
        }
    }
}

/// A hypothesised stem together with the annotation trail showing which
/// rules produced it.
///
/// `text` is always non-empty and lowercase; callers that build one from
/// scratch (rather than via [`Candidate::derive`]) are responsible for that
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub pre: Option<String>,
    pub inf: Option<String>,
    pub suf: Option<String>,
    pub rep: Option<String>,
    pub dup: Option<String>,
    pub contraction: Option<String>,
    pub phoneme_change: Option<PhonemeChange>,
    pub assimilation: Option<Assimilation>,
    pub vowel_loss: Option<char>,
    pub metathesis: bool,
}

impl Candidate {
    /// The initial, un-annotated candidate a `stem()` call starts from.
    pub fn root(text: impl Into<String>) -> Self {
        Candidate {
            text: text.into(),
            pre: None,
            inf: None,
            suf: None,
            rep: None,
            dup: None,
            contraction: None,
            phoneme_change: None,
            assimilation: None,
            vowel_loss: None,
            metathesis: false,
        }
    }

    /// Spawn a child candidate with new `text`, inheriting every annotation
    /// of `self`. Callers then call the `with_*` setters to overwrite only
    /// the fields the firing rule sets, per the annotation-inheritance
    /// invariant.
    pub fn derive(&self, text: impl Into<String>) -> Self {
        Candidate {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn with_inf(mut self, inf: impl Into<String>) -> Self {
        self.inf = Some(inf.into());
        self
    }

    pub fn with_suf(mut self, suf: impl Into<String>) -> Self {
        self.suf = Some(suf.into());
        self
    }

    pub fn with_rep(mut self, rep: impl Into<String>) -> Self {
        self.rep = Some(rep.into());
        self
    }

    pub fn with_dup(mut self, dup: impl Into<String>) -> Self {
        self.dup = Some(dup.into());
        self
    }

    pub fn with_contraction(mut self, contraction: impl Into<String>) -> Self {
        self.contraction = Some(contraction.into());
        self
    }

    pub fn with_phoneme_change(mut self, change: PhonemeChange) -> Self {
        self.phoneme_change = Some(change);
        self
    }

    pub fn with_assimilation(mut self, assimilation: Assimilation) -> Self {
        self.assimilation = Some(assimilation);
        self
    }

    pub fn with_vowel_loss(mut self, vowel: char) -> Self {
        self.vowel_loss = Some(vowel);
        self
    }

    pub fn with_metathesis(mut self) -> Self {
        self.metathesis = true;
        self
    }

    /// Sum of the lengths of the stripped prefix, infix, and suffix.
    pub fn count_affixes(&self) -> usize {
        self.pre.as_deref().map_or(0, str::len)
            + self.inf.as_deref().map_or(0, str::len)
            + self.suf.as_deref().map_or(0, str::len)
    }

    /// Sum of the lengths of the stripped partial and full reduplication
    /// fragments.
    pub fn count_reduplication(&self) -> usize {
        self.rep.as_deref().map_or(0, str::len) + self.dup.as_deref().map_or(0, str::len)
    }

    /// Score used to rank candidates within a preference class: total
    /// characters peeled off by affixation and reduplication.
    pub fn score(&self) -> usize {
        self.count_affixes() + self.count_reduplication()
    }

    /// Number of phonological/morphophonemic transformations applied
    /// (phoneme change, assimilation, vowel loss, metathesis). Contraction
    /// is tracked separately and does not count here.
    pub fn count_transformations(&self) -> usize {
        self.phoneme_change.is_some() as usize
            + self.assimilation.is_some() as usize
            + self.vowel_loss.is_some() as usize
            + self.metathesis as usize
    }

    pub fn has_contraction(&self) -> bool {
        self.contraction.is_some()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_candidate_has_no_annotations() {
        let c = Candidate::root("tatakbo");
        assert_eq!(c.text, "tatakbo");
        assert_eq!(c.count_affixes(), 0);
        assert_eq!(c.count_reduplication(), 0);
        assert_eq!(c.count_transformations(), 0);
        assert!(!c.has_contraction());
    }

    #[test]
    fn derive_inherits_then_overwrites_one_field() {
        let root = Candidate::root("pangailangan").with_pre("pang");
        let child = root.derive("kailangan").with_assimilation(Assimilation::KNull);

        // inherited
        assert_eq!(child.pre.as_deref(), Some("pang"));
        // newly set
        assert_eq!(child.assimilation, Some(Assimilation::KNull));
        // parent is untouched
        assert!(root.assimilation.is_none());
    }

    #[test]
    fn score_sums_affix_and_reduplication_lengths() {
        let c = Candidate::root("x").with_pre("pang").with_rep("ba");
        assert_eq!(c.score(), 4 + 2);
    }

    #[test]
    fn display_tags_match_spec_strings() {
        assert_eq!(PhonemeChange::PrefixDR.to_string(), "pre: d/r");
        assert_eq!(PhonemeChange::SuffixOU.to_string(), "suf: o/u");
        assert_eq!(Assimilation::KNull.to_string(), "k/null");
        assert_eq!(Assimilation::BP('b').to_string(), "b/p: b");
        assert_eq!(Assimilation::DST('t').to_string(), "d/s/t: t");
    }
}
