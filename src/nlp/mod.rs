//! Sentence segmentation, tokenization, and part-of-speech tagging.
//!
//! The extractor only ever talks to the [`Tagger`] trait: `segment` splits
//! text into sentences, `tag` turns one sentence into tokens carrying text,
//! lemma, and a coarse part-of-speech tag. Any engine that honors that
//! contract can drive the pipeline; [`EnglishTagger`] is the deterministic
//! rule-based default, built once at startup and passed in explicitly.

mod english;
mod lexicon;

pub use english::EnglishTagger;

/// Coarse part-of-speech tags.
///
/// Auxiliaries and modals get their own tag so that copulas ("is", "was")
/// never satisfy a verb search; only `Verb` marks a content verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Aux,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

/// One token of a tagged sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form, original casing preserved
    pub text: String,

    /// Lowercase dictionary base form
    pub lemma: String,

    pub pos: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
        }
    }

    /// Whether this token is a content verb (auxiliaries excluded)
    pub fn is_verb(&self) -> bool {
        self.pos == PosTag::Verb
    }
}

/// The narrow NLP capability the extractor depends on.
pub trait Tagger: Send + Sync + std::fmt::Debug {
    /// Split text into sentences
    fn segment(&self, text: &str) -> Vec<String>;

    /// Tokenize and tag one sentence
    fn tag(&self, sentence: &str) -> Vec<Token>;
}
