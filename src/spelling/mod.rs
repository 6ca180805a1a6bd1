//! Dictionary-based spell checking.
//!
//! The built-in vocabulary is the embedded `data/en_words.txt` list (a full
//! English word list with US, UK, Canadian and Australian spellings and their
//! inflected forms) plus every word the crate's lexicons know (action verbs,
//! skills, number words). Lookups also accept regular inflections of a known
//! word, which covers derived forms the list is missing.

use crate::lexicon::{
    ACHIEVEMENT_TERMS, ACTION_VERBS, COMMON_VERBS, NUMBER_WORDS, TECH_SKILL_WORDS,
};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_WORDS: &str = include_str!("../../data/en_words.txt");

/// Technical terms and acronyms that a general dictionary flags but resumes use freely.
pub const ALLOWED_TERMS: &[&str] = &[
    "aws", "gcp", "api", "sdk", "cicd", "devops", "sql", "nosql", "html", "css", "json", "uiux",
    "erp", "crm", "saas", "paas", "iaas", "agile", "scrum", "kanban", "jira", "git", "github",
    "kubernetes", "k8s", "microservices", "blockchain", "fintech", "edtech", "healthtech", "iot",
    "arvr", "aiops", "mlops",
];

static BUILTIN_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut words: HashSet<&'static str> = parse_word_list(EMBEDDED_WORDS).collect();
    words.extend(ACTION_VERBS.iter().copied());
    words.extend(COMMON_VERBS.iter().copied());
    words.extend(ACHIEVEMENT_TERMS.iter().copied());
    words.extend(TECH_SKILL_WORDS.iter().copied());
    words.extend(NUMBER_WORDS.iter().copied());
    words
});

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary '{}' contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Lines starting with `#` are comments; numeric tokens are skipped so
/// frequency lists ("word 1234") load as-is.
fn parse_word_list(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

/// Set of known words: the built-in vocabulary plus any user additions
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    extra: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words from a whitespace separated list, returning how many were new
    pub fn extend_from_str(&mut self, content: &str) -> usize {
        let before = self.extra.len();
        self.extra
            .extend(parse_word_list(content).map(|w| w.to_lowercase()));
        self.extra.len() - before
    }

    /// Load an additional word list from disk
    pub fn load_file(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if parse_word_list(&content).next().is_none() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }
        let added = self.extend_from_str(&content);
        tracing::debug!(path = %path.display(), added, "loaded extra dictionary");
        Ok(added)
    }

    /// Number of words known, built-in included
    pub fn len(&self) -> usize {
        BUILTIN_WORDS.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn has_exact(&self, word: &str) -> bool {
        BUILTIN_WORDS.contains(word) || self.extra.contains(word)
    }

    /// Whether a lowercased word, or a regular inflection of a known word, is known
    pub fn contains(&self, word: &str) -> bool {
        if self.has_exact(word) {
            return true;
        }
        base_forms(word).iter().any(|base| self.has_exact(base))
    }
}

/// Possible base forms of a regularly inflected word
fn base_forms(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    let push_stem = |stem: &str, out: &mut Vec<String>| {
        if stem.chars().count() >= 2 {
            out.push(stem.to_string());
            out.push(format!("{}e", stem));
            if let Some(single) = undouble(stem) {
                out.push(single);
            }
        }
    };

    for suffix in ["ies", "ied", "ier", "iest", "ily"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            out.push(format!("{}y", stem));
        }
    }
    for suffix in ["ing", "ed", "er", "ers", "est", "es"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            push_stem(stem, &mut out);
        }
    }
    for suffix in ["ment", "ments", "ness"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ly") {
        out.push(stem.to_string());
        if let Some(stem) = stem.strip_suffix("al") {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        out.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('d') {
        out.push(stem.to_string());
    }
    out
}

fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && last.is_alphabetic() && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u') {
        let mut single = stem.to_string();
        single.pop();
        Some(single)
    } else {
        None
    }
}

/// Flags words missing from a [`Dictionary`], ignoring allow-listed terms
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    allowed: HashSet<String>,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellChecker {
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::new())
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            allowed: ALLOWED_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Extend the allow-list
    pub fn allow_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }

    /// Distinct words the dictionary does not know, before allow-list filtering
    pub fn unknown<'a, I>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter(|w| !self.dictionary.contains(w))
            .map(str::to_string)
            .collect()
    }

    /// Unknown words minus allow-listed terms and anything containing a digit
    pub fn misspelled<'a, I>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut unknown = self.unknown(words);
        unknown.retain(|w| !self.is_allowed(w) && !w.chars().any(|c| c.is_ascii_digit()));
        unknown
    }
}
