//! Rule-based English tagger, the default [`Tagger`] implementation.
//!
//! Tagging is lexicon-first: closed-class words are looked up directly,
//! verbs are recognized either as listed base forms or as inflected forms
//! whose stripped stem is a listed base form, and everything left falls
//! back to suffix heuristics with noun as the open-class default. The
//! result is deterministic, needs no model files, and covers abstracts
//! well enough for window scanning; anything smarter can replace it behind
//! the [`Tagger`] trait.

use std::collections::{HashMap, HashSet};

use super::lexicon;
use super::{PosTag, Tagger, Token};

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "logy", "oma", "osis",
    "itis", "emia", "pathy",
];

const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ive", "ful", "less", "able", "ible", "ical", "ic", "al", "ary",
];

/// Deterministic lexicon-driven tagger for English abstracts.
#[derive(Debug)]
pub struct EnglishTagger {
    base_verbs: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
    auxiliaries: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
}

impl EnglishTagger {
    pub fn new() -> Self {
        Self {
            base_verbs: lexicon::BASE_VERBS.iter().copied().collect(),
            irregular: lexicon::IRREGULAR_VERBS.iter().copied().collect(),
            auxiliaries: lexicon::AUXILIARIES.iter().copied().collect(),
            determiners: lexicon::DETERMINERS.iter().copied().collect(),
            pronouns: lexicon::PRONOUNS.iter().copied().collect(),
            prepositions: lexicon::PREPOSITIONS.iter().copied().collect(),
            conjunctions: lexicon::CONJUNCTIONS.iter().copied().collect(),
            adverbs: lexicon::ADVERBS.iter().copied().collect(),
            adjectives: lexicon::ADJECTIVES.iter().copied().collect(),
            abbreviations: lexicon::ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Lemma for a word if it reads as a verb form, `None` otherwise.
    fn verb_lemma(&self, lw: &str) -> Option<String> {
        if let Some(lemma) = self.irregular.get(lw) {
            return Some((*lemma).to_string());
        }
        if self.base_verbs.contains(lw) {
            return Some(lw.to_string());
        }
        if !lw.is_ascii() {
            return None;
        }

        let n = lw.len();
        let known = |c: &str| self.base_verbs.contains(c);

        // third-person singular
        if n > 4 && lw.ends_with("ies") {
            let cand = format!("{}y", &lw[..n - 3]);
            if known(&cand) {
                return Some(cand);
            }
        }
        if n > 3 && lw.ends_with("es") {
            let cand = &lw[..n - 2];
            if known(cand) {
                return Some(cand.to_string());
            }
            let cand = &lw[..n - 1];
            if known(cand) {
                return Some(cand.to_string());
            }
        }
        if n > 3 && lw.ends_with('s') && !lw.ends_with("ss") {
            let cand = &lw[..n - 1];
            if known(cand) {
                return Some(cand.to_string());
            }
        }

        // past tense / past participle
        if n > 4 && lw.ends_with("ied") {
            let cand = format!("{}y", &lw[..n - 3]);
            if known(&cand) {
                return Some(cand);
            }
        }
        if n > 3 && lw.ends_with("ed") {
            let stem = &lw[..n - 2];
            if known(stem) {
                return Some(stem.to_string());
            }
            let with_e = &lw[..n - 1];
            if known(with_e) {
                return Some(with_e.to_string());
            }
            if let Some(undoubled) = undouble(stem) {
                if known(&undoubled) {
                    return Some(undoubled);
                }
            }
        }

        // gerund
        if n > 4 && lw.ends_with("ing") {
            let stem = &lw[..n - 3];
            if known(stem) {
                return Some(stem.to_string());
            }
            let with_e = format!("{}e", stem);
            if known(&with_e) {
                return Some(with_e);
            }
            if let Some(undoubled) = undouble(stem) {
                if known(&undoubled) {
                    return Some(undoubled);
                }
            }
        }

        None
    }

    fn classify(
        &self,
        word: &str,
        prev_pos: Option<PosTag>,
        next: Option<&str>,
    ) -> (PosTag, String) {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return (PosTag::Punctuation, word.to_string());
        }

        let lw = word.to_lowercase();
        if is_numeric(&lw) {
            return (PosTag::Numeral, lw);
        }

        if lw == "to" {
            let infinitive = next
                .map(|n| self.verb_lemma(&n.to_lowercase()).is_some())
                .unwrap_or(false);
            let pos = if infinitive {
                PosTag::Particle
            } else {
                PosTag::Preposition
            };
            return (pos, lw);
        }

        if self.auxiliaries.contains(lw.as_str()) {
            let lemma = self
                .irregular
                .get(lw.as_str())
                .map(|l| l.to_string())
                .unwrap_or_else(|| lw.clone());
            return (PosTag::Aux, lemma);
        }
        if self.determiners.contains(lw.as_str()) {
            return (PosTag::Determiner, lw);
        }
        if self.pronouns.contains(lw.as_str()) {
            return (PosTag::Pronoun, lw);
        }
        if self.prepositions.contains(lw.as_str()) {
            return (PosTag::Preposition, lw);
        }
        if self.conjunctions.contains(lw.as_str()) {
            return (PosTag::Conjunction, lw);
        }
        if self.adverbs.contains(lw.as_str()) {
            return (PosTag::Adverb, lw);
        }
        if self.adjectives.contains(lw.as_str()) {
            return (PosTag::Adjective, lw);
        }

        if let Some(lemma) = self.verb_lemma(&lw) {
            // A bare base form right after a determiner or modifier is a
            // plain nominal use ("the increase", "a result").
            let nominal = matches!(
                prev_pos,
                Some(PosTag::Determiner | PosTag::Adjective | PosTag::Numeral)
            );
            if nominal && lemma == lw {
                return (PosTag::Noun, lw);
            }
            return (PosTag::Verb, lemma);
        }

        if lw.len() > 3 && lw.ends_with("ly") {
            return (PosTag::Adverb, lw);
        }
        for suffix in NOUN_SUFFIXES {
            if lw.len() > suffix.len() + 1 && lw.ends_with(suffix) {
                return (PosTag::Noun, lw);
            }
        }
        for suffix in ADJ_SUFFIXES {
            if lw.len() > suffix.len() + 1 && lw.ends_with(suffix) {
                return (PosTag::Adjective, lw);
            }
        }

        (PosTag::Noun, lw)
    }

    /// True when the word ending at the period is an abbreviation that
    /// should not close the sentence.
    fn abbreviation_before(&self, chars: &[char], start: usize, period: usize) -> bool {
        let mut word = String::new();
        let mut j = period;
        while j > start {
            let c = chars[j - 1];
            if !c.is_alphabetic() {
                break;
            }
            word.push(c);
            j -= 1;
        }
        if word.is_empty() {
            return false;
        }
        // single letters cover initials and the pieces of "e.g." / "i.e."
        if word.chars().count() == 1 {
            return true;
        }
        let word: String = word.chars().rev().collect::<String>().to_lowercase();
        self.abbreviations.contains(word.as_str())
    }
}

impl Default for EnglishTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for EnglishTagger {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        for i in 0..chars.len() {
            if !matches!(chars[i], '.' | '!' | '?') {
                continue;
            }
            if chars[i] == '.' && self.abbreviation_before(&chars, start, i) {
                continue;
            }
            if !boundary_after(&chars, i) {
                continue;
            }
            let sentence: String = chars[start..=i].iter().collect();
            let trimmed = sentence.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            start = i + 1;
        }

        if start < chars.len() {
            let tail: String = chars[start..].iter().collect();
            let trimmed = tail.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
        }

        sentences
    }

    fn tag(&self, sentence: &str) -> Vec<Token> {
        let words = tokenize(sentence);
        let mut tokens: Vec<Token> = Vec::with_capacity(words.len());

        for (idx, word) in words.iter().enumerate() {
            let prev_pos = tokens.last().map(|t| t.pos);
            let next = words.get(idx + 1).map(|w| w.as_str());
            let (pos, lemma) = self.classify(word, prev_pos, next);
            tokens.push(Token::new(word.clone(), lemma, pos));
        }

        tokens
    }
}

/// Whitespace split with leading/trailing punctuation peeled into their own
/// tokens. Internal hyphens, apostrophes, and decimal points stay attached.
fn tokenize(sentence: &str) -> Vec<String> {
    let mut out = Vec::new();

    for chunk in sentence.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;
        let mut end = chars.len();

        while start < end && is_edge_punct(chars[start]) {
            out.push(chars[start].to_string());
            start += 1;
        }

        let mut trailing = Vec::new();
        while end > start && is_edge_punct(chars[end - 1]) {
            trailing.push(chars[end - 1].to_string());
            end -= 1;
        }

        if start < end {
            out.push(chars[start..end].iter().collect());
        }
        trailing.reverse();
        out.extend(trailing);
    }

    out
}

fn is_edge_punct(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '"'
            | '\''
            | '\u{201c}'
            | '\u{201d}'
            | '\u{2018}'
            | '\u{2019}'
            | '\u{2026}'
    )
}

fn is_numeric(lw: &str) -> bool {
    lw.chars().any(|c| c.is_ascii_digit())
        && lw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '-' | '/' | '+'))
}

/// Strip a doubled final consonant ("stopp" -> "stop").
fn undouble(stem: &str) -> Option<String> {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 3 {
        return None;
    }
    let last = chars[n - 1];
    if chars[n - 2] == last && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u') {
        return Some(chars[..n - 1].iter().collect());
    }
    None
}

/// A terminal mark only closes a sentence when followed by end of text or
/// whitespace and a plausible sentence opener.
fn boundary_after(chars: &[char], i: usize) -> bool {
    let mut j = i + 1;
    while j < chars.len()
        && matches!(chars[j], '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
    {
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    if !chars[j].is_whitespace() {
        return false;
    }
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if j >= chars.len() {
        return true;
    }
    let next = chars[j];
    next.is_uppercase()
        || next.is_ascii_digit()
        || matches!(next, '"' | '\'' | '(' | '[' | '\u{201c}' | '\u{2018}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> EnglishTagger {
        EnglishTagger::new()
    }

    #[test]
    fn test_segment_two_sentences() {
        let t = tagger();
        let sents = t.segment("Glioblastoma invades tissue. Treatment options remain limited.");
        assert_eq!(sents.len(), 2);
        assert_eq!(sents[0], "Glioblastoma invades tissue.");
        assert_eq!(sents[1], "Treatment options remain limited.");
    }

    #[test]
    fn test_segment_keeps_abbreviations_together() {
        let t = tagger();
        let sents = t.segment("Smith et al. Reported tumor growth. See Fig. 2 for details.");
        assert_eq!(sents.len(), 2);
        assert!(sents[0].starts_with("Smith et al."));
        assert!(sents[1].contains("Fig. 2"));
    }

    #[test]
    fn test_segment_ignores_decimals() {
        let t = tagger();
        let sents = t.segment("Survival improved by 1.5 months. Further study is needed.");
        assert_eq!(sents.len(), 2);
        assert!(sents[0].contains("1.5 months"));
    }

    #[test]
    fn test_segment_without_terminal_punctuation() {
        let t = tagger();
        let sents = t.segment("a title without a period");
        assert_eq!(sents, vec!["a title without a period".to_string()]);
    }

    #[test]
    fn test_segment_empty_input() {
        let t = tagger();
        assert!(t.segment("").is_empty());
        assert!(t.segment("   \n ").is_empty());
    }

    #[test]
    fn test_tokenize_peels_edge_punctuation() {
        let toks = tokenize("(Glioblastoma), aggressive.");
        assert_eq!(toks, vec!["(", "Glioblastoma", ")", ",", "aggressive", "."]);
    }

    #[test]
    fn test_tokenize_keeps_internal_marks() {
        let toks = tokenize("non-small cells don't shrink 1.5%");
        assert_eq!(toks, vec!["non-small", "cells", "don't", "shrink", "1.5%"]);
    }

    #[test]
    fn test_tag_abstract_sentence() {
        let t = tagger();
        let tokens =
            t.tag("Glioblastoma rapidly invades surrounding brain tissue and resists standard therapy.");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Glioblastoma",
                "rapidly",
                "invades",
                "surrounding",
                "brain",
                "tissue",
                "and",
                "resists",
                "standard",
                "therapy",
                "."
            ]
        );

        assert_eq!(tokens[0].pos, PosTag::Noun);
        assert_eq!(tokens[1].pos, PosTag::Adverb);
        assert_eq!(tokens[2].pos, PosTag::Verb);
        assert_eq!(tokens[2].lemma, "invade");
        assert_eq!(tokens[6].pos, PosTag::Conjunction);
        assert_eq!(tokens[7].pos, PosTag::Verb);
        assert_eq!(tokens[7].lemma, "resist");
        assert_eq!(tokens[8].pos, PosTag::Adjective);
        assert_eq!(tokens[10].pos, PosTag::Punctuation);
    }

    #[test]
    fn test_lemma_rules() {
        let t = tagger();
        let cases = [
            ("invades", "invade"),
            ("invaded", "invade"),
            ("invading", "invade"),
            ("carries", "carry"),
            ("carried", "carry"),
            ("stopped", "stop"),
            ("running", "run"),
            ("treated", "treat"),
            ("catches", "catch"),
            ("underwent", "undergo"),
            ("grew", "grow"),
        ];
        for (surface, lemma) in cases {
            assert_eq!(
                t.verb_lemma(surface).as_deref(),
                Some(lemma),
                "lemma of {}",
                surface
            );
        }
        assert_eq!(t.verb_lemma("therapy"), None);
        assert_eq!(t.verb_lemma("glioblastoma"), None);
    }

    #[test]
    fn test_auxiliaries_are_not_verbs() {
        let t = tagger();
        let tokens = t.tag("The tumor was aggressive and has spread.");

        let was = tokens.iter().find(|t| t.text == "was").unwrap();
        assert_eq!(was.pos, PosTag::Aux);
        assert_eq!(was.lemma, "be");

        let has = tokens.iter().find(|t| t.text == "has").unwrap();
        assert_eq!(has.pos, PosTag::Aux);

        let spread = tokens.iter().find(|t| t.text == "spread").unwrap();
        assert_eq!(spread.pos, PosTag::Verb);
    }

    #[test]
    fn test_bare_base_form_after_determiner_reads_as_noun() {
        let t = tagger();
        let tokens = t.tag("The increase was significant.");
        let increase = tokens.iter().find(|t| t.text == "increase").unwrap();
        assert_eq!(increase.pos, PosTag::Noun);

        let tokens = t.tag("Mutations increase resistance.");
        let increase = tokens.iter().find(|t| t.text == "increase").unwrap();
        assert_eq!(increase.pos, PosTag::Verb);
    }

    #[test]
    fn test_infinitive_to_is_a_particle() {
        let t = tagger();
        let tokens = t.tag("Drugs to treat glioblastoma are scarce.");

        let to = tokens.iter().find(|t| t.text == "to").unwrap();
        assert_eq!(to.pos, PosTag::Particle);

        let treat = tokens.iter().find(|t| t.text == "treat").unwrap();
        assert_eq!(treat.pos, PosTag::Verb);

        let tokens = t.tag("Resistance to therapy is common.");
        let to = tokens.iter().find(|t| t.text == "to").unwrap();
        assert_eq!(to.pos, PosTag::Preposition);
    }

    #[test]
    fn test_surface_casing_preserved_lemma_lowercased() {
        let t = tagger();
        let tokens = t.tag("Invades tissue");
        assert_eq!(tokens[0].text, "Invades");
        assert_eq!(tokens[0].lemma, "invade");
        assert_eq!(tokens[0].pos, PosTag::Verb);
    }
}
