//! Resource-loading errors.
//!
//! Stemming itself never fails — every input produces some stem, falling
//! back to the input token when no candidate survives filtering. The only
//! fallible operations in this crate are loading the lexicon and affix
//! lists from disk at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StemmerError {
    #[error("failed to read resource file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse resource metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("affix list '{0}' is empty")]
    EmptyAffixList(&'static str),
}

impl From<StemmerError> for pyo3::PyErr {
    fn from(err: StemmerError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
