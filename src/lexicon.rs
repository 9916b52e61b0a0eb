//! Lexicon loading.
//!
//! The default Tagalog wordlist is embedded into the binary the way the
//! teacher embeds its Turkish lemma dictionary and stopword lists: a
//! `include_str!`'d resource, parsed once into a [`std::sync::OnceLock`].
//! An absent lexicon is a valid runtime state (every candidate passes
//! [`crate::acceptability::is_valid`]), so this module never panics on
//! empty input — only I/O failures when loading from an external path are
//! fallible.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::StemmerError;

static DEFAULT_LEXICON_DATA: &str = include_str!("../resources/tgl/lexicon/wordlist.txt");
static DEFAULT_LEXICON: OnceLock<Vec<String>> = OnceLock::new();

fn parse(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The lexicon embedded into the binary at compile time.
pub fn default_lexicon() -> &'static [String] {
    DEFAULT_LEXICON.get_or_init(|| parse(DEFAULT_LEXICON_DATA))
}

/// Load a lexicon from an external file: one word per line, blank lines
/// and surrounding whitespace ignored, everything lowercased.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, StemmerError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| StemmerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse(&data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_contains_scenario_words() {
        let lex = default_lexicon();
        for w in ["kailangan", "bigay", "dami", "bukas", "tanim", "bayad"] {
            assert!(lex.iter().any(|x| x == w), "missing {w}");
        }
    }

    #[test]
    fn default_lexicon_is_lowercase_and_trimmed() {
        for w in default_lexicon() {
            assert_eq!(w, &w.to_lowercase());
            assert_eq!(w, w.trim());
            assert!(!w.is_empty());
        }
    }
}
