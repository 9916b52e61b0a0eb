//! Free-text tokenisation.
//!
//! This is the external tokeniser collaborator the stemmer core treats as
//! out of scope (see spec §1/§6): it only needs to split on whitespace and
//! punctuation boundaries the way standard word-tokenisers do. Built on
//! the teacher's `TOKEN_REGEX` pattern, trimmed to the token classes
//! Tagalog text actually needs — words (including the hyphen-joined
//! reduplicated forms `stem_dup` expects, e.g. `ano-ano`), numbers, and
//! punctuation as a class of its own so callers can drop it.

use std::sync::OnceLock;

use regex::Regex;

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        let pattern = r"(?x)
            ([A-Za-zñÑ]+(?:'[A-Za-zñÑ]+)?(?:-[A-Za-zñÑ]+)*) | # Word, incl. reduplication/linker
            (\d+(?:[.,]\d+)*)                                 | # Number
            ([^\w\s])                                           # Punctuation
        ";
        Regex::new(pattern).expect("token regex must compile")
    })
}

/// True iff `token` consists entirely of ASCII punctuation characters (the
/// standard-library punctuation set, mirroring Python's
/// `string.punctuation`).
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

/// Split `text` into word/number/punctuation tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    token_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenise `text`, optionally dropping punctuation-only tokens.
pub fn tokenize_filtered(text: &str, exclude_punctuation: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if exclude_punctuation {
        tokens.into_iter().filter(|t| !is_punctuation(t)).collect()
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let tokens = tokenize("Kumain siya, pagkatapos natulog.");
        assert_eq!(tokens, vec!["Kumain", "siya", ",", "pagkatapos", "natulog", "."]);
    }

    #[test]
    fn keeps_hyphenated_reduplication_as_one_token() {
        let tokens = tokenize("ano-ano ba iyan");
        assert_eq!(tokens[0], "ano-ano");
    }

    #[test]
    fn exclude_punctuation_drops_punctuation_tokens() {
        let tokens = tokenize_filtered("Oo, sige.", true);
        assert_eq!(tokens, vec!["Oo", "sige"]);
    }

    #[test]
    fn is_punctuation_rejects_mixed_tokens() {
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("a."));
    }
}
