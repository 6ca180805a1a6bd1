//! Annotated text: tokens, part-of-speech tags, lemmas and sentences.
//!
//! The checks only read an [`AnnotatedDocument`]; where it comes from is
//! decided by whoever implements [`Annotator`]. [`HeuristicAnnotator`] is the
//! built-in rule-based implementation.

mod heuristic;

pub use heuristic::HeuristicAnnotator;

use serde::Serialize;
use std::ops::Range;

/// Produces an annotated view of raw text
pub trait Annotator: Send + Sync {
    /// Tokenize, tag, lemmatize and segment `text`
    fn annotate(&self, text: &str) -> AnnotatedDocument;
}

/// Coarse part-of-speech categories (Universal Dependencies names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Noun,
    Num,
    Pron,
    Propn,
    Punct,
    Sym,
    Verb,
    X,
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
        };
        write!(f, "{}", tag)
    }
}

/// A single token of the annotated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Surface text as it appears in the document
    pub text: String,
    /// Part-of-speech tag
    pub pos: PartOfSpeech,
    /// Lowercased dictionary form
    pub lemma: String,
    /// Digits, number words, ordinals and fractions
    pub like_num: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, lemma: impl Into<String>) -> Self {
        let text = text.into();
        let like_num = is_like_num(&text);
        Self {
            text,
            pos,
            lemma: lemma.into().to_lowercase(),
            like_num,
        }
    }
}

/// A sentence as a contiguous range of token indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Tokens plus sentence boundaries over them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedDocument {
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
}

impl AnnotatedDocument {
    /// Build a document; sentence ranges outside the token list are clamped
    /// and empty ones are dropped.
    pub fn new(tokens: Vec<Token>, sentences: Vec<Sentence>) -> Self {
        let len = tokens.len();
        let sentences = sentences
            .into_iter()
            .map(|s| Sentence {
                start: s.start.min(len),
                end: s.end.min(len),
            })
            .filter(|s| s.start < s.end)
            .collect();
        Self { tokens, sentences }
    }

    /// A document with every token in one sentence
    pub fn single_sentence(tokens: Vec<Token>) -> Self {
        let end = tokens.len();
        Self::new(tokens, vec![Sentence { start: 0, end }])
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Iterate sentences as token slices
    pub fn sentences(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.sentences.iter().map(|s| &self.tokens[s.range()])
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Numeric-looking token: "42", "3.5", "1,200", "+7", "1/2", "5th", "ten", "third".
pub fn is_like_num(text: &str) -> bool {
    let trimmed = text.trim_start_matches(['+', '-', '±', '~']);
    if trimmed.is_empty() {
        return false;
    }
    let plain: String = trimmed.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !plain.is_empty() && plain.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Some((num, denom)) = trimmed.split_once('/') {
        if !num.is_empty()
            && !denom.is_empty()
            && num.chars().all(|c| c.is_ascii_digit())
            && denom.chars().all(|c| c.is_ascii_digit())
        {
            return true;
        }
    }
    let lower = trimmed.to_lowercase();
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = lower.strip_suffix(suffix) {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return true;
            }
        }
    }
    crate::lexicon::NUMBER_WORDS.contains(lower.as_str())
}
