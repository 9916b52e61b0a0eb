//! Affix list loading.
//!
//! Mirrors [`crate::lexicon`]'s embedding approach for the three affix
//! classes. Each list is sorted ascending by length at load time, the way
//! the original sorted its files with `key=len` — order only affects
//! cascade performance, never correctness, since every affix that matches
//! is tried regardless of position.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::StemmerError;

static PREFIXES_DATA: &str = include_str!("../resources/tgl/affixes/prefixes.txt");
static INFIXES_DATA: &str = include_str!("../resources/tgl/affixes/infixes.txt");
static SUFFIXES_DATA: &str = include_str!("../resources/tgl/affixes/suffixes.txt");

static DEFAULT_AFFIXES: OnceLock<AffixLists> = OnceLock::new();

/// The three ordered affix lists the cascade draws from.
#[derive(Debug, Clone, Default)]
pub struct AffixLists {
    pub prefixes: Vec<String>,
    pub infixes: Vec<String>,
    pub suffixes: Vec<String>,
}

fn parse_sorted(data: &str) -> Vec<String> {
    let mut affixes: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    affixes.sort_by_key(|a| a.chars().count());
    affixes
}

/// The affix lists embedded into the binary at compile time.
pub fn default_affixes() -> &'static AffixLists {
    DEFAULT_AFFIXES.get_or_init(|| AffixLists {
        prefixes: parse_sorted(PREFIXES_DATA),
        infixes: parse_sorted(INFIXES_DATA),
        suffixes: parse_sorted(SUFFIXES_DATA),
    })
}

/// Load the three affix lists from a directory containing
/// `prefixes.txt`, `infixes.txt`, and `suffixes.txt`.
pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<AffixLists, StemmerError> {
    let dir = dir.as_ref();
    let read = |name: &str| -> Result<String, StemmerError> {
        let path = dir.join(name);
        std::fs::read_to_string(&path).map_err(|source| StemmerError::Io {
            path: path.display().to_string(),
            source,
        })
    };

    let lists = AffixLists {
        prefixes: parse_sorted(&read("prefixes.txt")?),
        infixes: parse_sorted(&read("infixes.txt")?),
        suffixes: parse_sorted(&read("suffixes.txt")?),
    };

    for (name, list) in [
        ("prefixes", &lists.prefixes),
        ("infixes", &lists.infixes),
        ("suffixes", &lists.suffixes),
    ] {
        if list.is_empty() {
            return Err(StemmerError::EmptyAffixList(match name {
                "prefixes" => "prefixes",
                "infixes" => "infixes",
                _ => "suffixes",
            }));
        }
    }

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_affixes_sorted_ascending_by_length() {
        let affixes = default_affixes();
        for list in [&affixes.prefixes, &affixes.infixes, &affixes.suffixes] {
            let lens: Vec<usize> = list.iter().map(|a| a.chars().count()).collect();
            let mut sorted = lens.clone();
            sorted.sort_unstable();
            assert_eq!(lens, sorted);
        }
    }

    #[test]
    fn default_prefixes_cover_core_scenarios() {
        let affixes = default_affixes();
        for p in ["pa", "pam", "pan", "pang"] {
            assert!(affixes.prefixes.iter().any(|x| x == p), "missing prefix {p}");
        }
    }
}
