//! Verb extraction over collected papers.
//!
//! Finds mentions of the disease term in titles and abstracts, scans a
//! short window of following tokens, and records the first verb in each
//! window together with its surrounding context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{PaperRecord, SourceField, VerbCount, VerbOccurrence};
use crate::nlp::Tagger;

/// How a token has to relate to a term word to count as a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Term word contained anywhere in the token ("cancer" hits "cancers")
    #[default]
    Substring,
    /// Token equal to the term word, ignoring case
    WholeToken,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "whole-token" | "whole_token" | "token" => Ok(Self::WholeToken),
            other => Err(format!(
                "unknown match mode '{}' (expected 'substring' or 'whole-token')",
                other
            )),
        }
    }
}

/// Tuning knobs for an extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Tokens scanned after a mention when looking for a verb
    pub window: usize,
    pub match_mode: MatchMode,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            window: 5,
            match_mode: MatchMode::Substring,
        }
    }
}

/// Extraction errors
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Search term must not be empty")]
    EmptyTerm,

    #[error("Window size must be at least 1")]
    ZeroWindow,
}

/// Extract verb occurrences from every record, in input order
pub fn extract_from_papers(
    records: &[PaperRecord],
    term: &str,
    tagger: &dyn Tagger,
    options: &ExtractOptions,
) -> Result<Vec<VerbOccurrence>, ExtractError> {
    let term_words = validate(term, options)?;

    let mut occurrences = Vec::new();
    for record in records {
        scan_record(record, &term_words, tagger, options, &mut occurrences);
    }
    Ok(occurrences)
}

/// Extract verb occurrences from a single record
pub fn extract_from_record(
    record: &PaperRecord,
    term: &str,
    tagger: &dyn Tagger,
    options: &ExtractOptions,
) -> Result<Vec<VerbOccurrence>, ExtractError> {
    let term_words = validate(term, options)?;

    let mut occurrences = Vec::new();
    scan_record(record, &term_words, tagger, options, &mut occurrences);
    Ok(occurrences)
}

/// Aggregate occurrences into per-lemma counts
///
/// Sorted by descending count, ties broken alphabetically, so reruns over
/// the same input produce identical files.
pub fn frequency_table(occurrences: &[VerbOccurrence]) -> Vec<VerbCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for occurrence in occurrences {
        *counts.entry(occurrence.verb.as_str()).or_insert(0) += 1;
    }

    let mut table: Vec<VerbCount> = counts
        .into_iter()
        .map(|(verb, count)| VerbCount::new(verb, count))
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.verb.cmp(&b.verb)));
    table
}

fn validate(term: &str, options: &ExtractOptions) -> Result<Vec<String>, ExtractError> {
    if options.window == 0 {
        return Err(ExtractError::ZeroWindow);
    }

    let words: Vec<String> = term
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(ExtractError::EmptyTerm);
    }
    Ok(words)
}

fn scan_record(
    record: &PaperRecord,
    term_words: &[String],
    tagger: &dyn Tagger,
    options: &ExtractOptions,
    occurrences: &mut Vec<VerbOccurrence>,
) {
    let fields = [
        (SourceField::Title, record.title.as_str()),
        (SourceField::Abstract, record.abstract_text.as_str()),
    ];

    for (field, raw_text) in fields {
        let text = clean_field(raw_text);
        if text.is_empty() {
            continue;
        }

        for sentence in tagger.segment(text) {
            scan_sentence(
                &tagger.tag(&sentence),
                term_words,
                options,
                field,
                record,
                occurrences,
            );
        }
    }
}

/// Scan one tagged sentence for term mentions and their following verbs
fn scan_sentence(
    tokens: &[crate::nlp::Token],
    term_words: &[String],
    options: &ExtractOptions,
    field: SourceField,
    record: &PaperRecord,
    occurrences: &mut Vec<VerbOccurrence>,
) {
    if tokens.is_empty() {
        return;
    }
    let last = tokens.len() - 1;

    for start in 0..tokens.len() {
        if !mention_at(tokens, start, term_words, options.match_mode) {
            continue;
        }
        let end = start + term_words.len() - 1;

        let window_end = (end + options.window).min(last);
        let verb = tokens[end + 1..=window_end].iter().find(|t| t.is_verb());

        let verb = match verb {
            Some(v) => v,
            None => continue,
        };

        let context_start = start.saturating_sub(2);
        let context = tokens[context_start..=window_end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        occurrences.push(VerbOccurrence {
            source: field,
            text: record.title.clone(),
            link: record.link.clone(),
            verb: verb.lemma.clone(),
            original_form: verb.text.clone(),
            context,
        });
    }
}

/// Does a run of tokens starting here match the term, word for word?
fn mention_at(
    tokens: &[crate::nlp::Token],
    start: usize,
    term_words: &[String],
    mode: MatchMode,
) -> bool {
    if start + term_words.len() > tokens.len() {
        return false;
    }

    term_words.iter().enumerate().all(|(offset, word)| {
        let token = tokens[start + offset].text.to_lowercase();
        match mode {
            MatchMode::Substring => token.contains(word.as_str()),
            MatchMode::WholeToken => token == *word,
        }
    })
}

/// Drop whitespace and stray wrapping quotes picked up in CSV round trips
fn clean_field(text: &str) -> &str {
    text.trim().trim_matches('"').trim()
}
