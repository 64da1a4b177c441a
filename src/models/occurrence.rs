//! Verb occurrence rows and frequency counts produced by the extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which text field of a [`PaperRecord`](crate::models::PaperRecord) a verb
/// occurrence was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceField {
    Title,
    Abstract,
}

impl SourceField {
    /// All fields the extractor scans, in scan order
    pub fn all() -> [SourceField; 2] {
        [SourceField::Title, SourceField::Abstract]
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceField::Title => write!(f, "Title"),
            SourceField::Abstract => write!(f, "Abstract"),
        }
    }
}

/// One (disease-mention, verb) pairing extracted from a text field.
///
/// `text` always carries the paper title, regardless of which field the
/// occurrence came from, so rows stay traceable to their record without a
/// separate join. Serde renames match the output CSV header
/// ({Source, Text, Link, Verb, Original_Form, Context}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbOccurrence {
    #[serde(rename = "Source")]
    pub source: SourceField,

    #[serde(rename = "Text")]
    pub text: String,

    #[serde(rename = "Link")]
    pub link: String,

    /// Lemma of the first verb found in the forward window
    #[serde(rename = "Verb")]
    pub verb: String,

    /// Surface form as it appeared in the sentence
    #[serde(rename = "Original_Form")]
    pub original_form: String,

    /// Tokens from two before the mention through the end of the window
    #[serde(rename = "Context")]
    pub context: String,
}

/// One row of the verb frequency table ({Verb, Count}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbCount {
    #[serde(rename = "Verb")]
    pub verb: String,

    #[serde(rename = "Count")]
    pub count: u64,
}

impl VerbCount {
    pub fn new(verb: impl Into<String>, count: u64) -> Self {
        Self {
            verb: verb.into(),
            count,
        }
    }
}
