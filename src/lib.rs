mod acceptability;
mod accuracy;
mod affixes;
mod candidate;
mod config;
mod error;
mod frontier;
mod lexicon;
mod manipulation;
mod phoneme;
mod rules;
mod selector;
mod tokenize;

use std::collections::HashMap;

use pyo3::prelude::*;
use pyo3::types::PyDict;

pub use accuracy::{evaluate, AccuracyReport, Miss};
pub use affixes::{default_affixes, load_from_dir, AffixLists};
pub use candidate::{Assimilation, Candidate, PhonemeChange};
pub use config::{Stemmer, StemmerConfig};
pub use error::StemmerError;
pub use lexicon::{default_lexicon, load_from_path};
pub use tokenize::{is_punctuation, tokenize, tokenize_filtered};

/// The best stem for `word`, using the embedded default lexicon and affix
/// lists. Lowercases and trims `word` internally.
pub fn stem(word: &str) -> Candidate {
    Stemmer::default().stem(word)
}

/// Every valid, acceptable candidate for `word`, ranked best first.
pub fn candidates(word: &str) -> Vec<Candidate> {
    Stemmer::default().candidates(word)
}

/// Tokenise `text` and stem each token, dropping punctuation-only tokens.
pub fn stem_text(text: &str) -> Vec<Candidate> {
    Stemmer::default().stem_text(text)
}

fn candidate_to_dict<'py>(py: Python<'py>, c: &Candidate) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("text", &c.text)?;
    dict.set_item("pre", &c.pre)?;
    dict.set_item("inf", &c.inf)?;
    dict.set_item("suf", &c.suf)?;
    dict.set_item("rep", &c.rep)?;
    dict.set_item("dup", &c.dup)?;
    dict.set_item("contraction", &c.contraction)?;
    dict.set_item("phoneme_change", c.phoneme_change.map(|p| p.to_string()))?;
    dict.set_item("assimilation", c.assimilation.map(|a| a.to_string()))?;
    dict.set_item("vowel_loss", c.vowel_loss.map(|v| v.to_string()))?;
    dict.set_item("metathesis", c.metathesis)?;
    Ok(dict)
}

/// Return the single best stem for `word` as a dict of its annotation
/// fields.
#[pyfunction]
fn py_stem(py: Python<'_>, word: &str) -> PyResult<Py<PyDict>> {
    Ok(candidate_to_dict(py, &stem(word))?.into())
}

/// Return the ranked, filtered candidate list for `word` as a list of
/// dicts.
#[pyfunction]
fn py_candidates(py: Python<'_>, word: &str) -> PyResult<Vec<Py<PyDict>>> {
    candidates(word)
        .iter()
        .map(|c| candidate_to_dict(py, c).map(Into::into))
        .collect()
}

/// Tokenise `text` and stem each token, returning a list of dicts.
#[pyfunction]
fn py_stem_text(py: Python<'_>, text: &str) -> PyResult<Vec<Py<PyDict>>> {
    stem_text(text)
        .iter()
        .map(|c| candidate_to_dict(py, c).map(Into::into))
        .collect()
}

fn parse_resource_metadata() -> Result<HashMap<String, serde_json::Value>, StemmerError> {
    static RESOURCE_METADATA: &str = include_str!("../resources/tgl/metadata.json");
    Ok(serde_json::from_str(RESOURCE_METADATA)?)
}

/// Parsed contents of the embedded resource ledger (`resources/tgl/metadata.json`).
#[pyfunction]
fn resource_info(py: Python<'_>) -> PyResult<Py<PyDict>> {
    let parsed = parse_resource_metadata()?;

    let dict = PyDict::new(py);
    for (key, value) in parsed {
        let json_text = serde_json::to_string(&value).expect("re-serializing parsed JSON cannot fail");
        dict.set_item(key, json_text)?;
    }
    Ok(dict.into())
}

#[pymodule]
fn _tglstem_core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_stem, m)?)?;
    m.add_function(wrap_pyfunction!(py_candidates, m)?)?;
    m.add_function(wrap_pyfunction!(py_stem_text, m)?)?;
    m.add_function(wrap_pyfunction!(resource_info, m)?)?;
    Ok(())
}
