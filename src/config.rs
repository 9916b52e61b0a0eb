//! Stemmer configuration and the reusable `Stemmer` handle.
//!
//! `StemmerConfig` holds the two options the Callable Surface exposes
//! (§6); `Stemmer` bundles a config with loaded affix lists so a caller
//! with a custom lexicon or affix set pays the loading cost once, the way
//! the teacher's `OnceLock` statics are paid for once per process rather
//! than per call.

use crate::affixes::{self, AffixLists};
use crate::candidate::Candidate;
use crate::lexicon;
use crate::{frontier, selector, tokenize};

/// Runtime options for a [`Stemmer`].
#[derive(Debug, Clone)]
pub struct StemmerConfig {
    /// `None` means "accept everything" (no lexicon filtering).
    pub lexicon: Option<Vec<String>>,
    pub exclude_punctuation: bool,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig {
            lexicon: Some(lexicon::default_lexicon().to_vec()),
            exclude_punctuation: true,
        }
    }
}

/// A stemmer bound to a fixed configuration and affix set, reusable across
/// many `stem`/`candidates`/`stem_text` calls without reloading resources.
#[derive(Debug, Clone)]
pub struct Stemmer {
    config: StemmerConfig,
    affixes: AffixLists,
}

impl Default for Stemmer {
    fn default() -> Self {
        Stemmer {
            config: StemmerConfig::default(),
            affixes: affixes::default_affixes().clone(),
        }
    }
}

impl Stemmer {
    pub fn new(config: StemmerConfig, affixes: AffixLists) -> Self {
        Stemmer { config, affixes }
    }

    pub fn with_config(config: StemmerConfig) -> Self {
        Stemmer {
            config,
            affixes: affixes::default_affixes().clone(),
        }
    }

    fn lexicon_ref(&self) -> &[String] {
        self.config.lexicon.as_deref().unwrap_or(&[])
    }

    /// Every valid, acceptable candidate for `word`, best first.
    pub fn candidates(&self, word: &str) -> Vec<Candidate> {
        let token = word.trim().to_lowercase();
        let all = frontier::run_cascade(&token, &self.affixes, self.lexicon_ref());
        selector::filter_candidates(all, &token, self.lexicon_ref())
    }

    /// The single best stem for `word`.
    pub fn stem(&self, word: &str) -> Candidate {
        let token = word.trim().to_lowercase();
        let all = frontier::run_cascade(&token, &self.affixes, self.lexicon_ref());
        selector::select_best(all, &token, self.lexicon_ref())
    }

    /// Tokenise `text` and stem every token.
    pub fn stem_text(&self, text: &str) -> Vec<Candidate> {
        tokenize::tokenize_filtered(text, self.config.exclude_punctuation)
            .iter()
            .map(|token| self.stem(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stemmer_handles_known_scenario() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem("pangailangan").text, "kailangan");
    }

    #[test]
    fn custom_lexicon_must_contain_the_expected_stem() {
        let narrow = StemmerConfig {
            lexicon: Some(vec!["bayad".to_string()]),
            exclude_punctuation: true,
        };
        let stemmer = Stemmer::with_config(narrow);
        assert_eq!(stemmer.stem("tamnin").text, "tamnin", "tanim isn't in this lexicon, so no candidate survives");

        let extended = StemmerConfig {
            lexicon: Some(vec!["bayad".to_string(), "tanim".to_string()]),
            exclude_punctuation: true,
        };
        let stemmer = Stemmer::with_config(extended);
        assert_eq!(stemmer.stem("tamnin").text, "tanim");
    }

    #[test]
    fn stem_text_tokenises_and_stems_each_word() {
        let stemmer = Stemmer::default();
        let out = stemmer.stem_text("Pangailangan ba ito?");
        assert_eq!(out[0].text, "kailangan");
    }
}
