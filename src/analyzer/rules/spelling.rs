//! Possible misspellings.

use super::{examples, CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::AnnotatedDocument;
use crate::spelling::SpellChecker;
use crate::Feedback;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

const EXAMPLE_LIMIT: usize = 5;

/// Rule flagging words the spell checker does not know
pub struct SpellCheckRule {
    checker: SpellChecker,
}

impl SpellCheckRule {
    pub fn new() -> Self {
        Self::with_checker(SpellChecker::new())
    }

    pub fn with_checker(checker: SpellChecker) -> Self {
        Self { checker }
    }

    /// Lowercased words worth checking: punctuation becomes a separator,
    /// digit runs are dropped, words of two characters or fewer are skipped.
    pub fn candidate_words(text: &str) -> Vec<String> {
        let cleaned = NON_WORD_RE.replace_all(text, " ");
        let cleaned = DIGITS_RE.replace_all(&cleaned, "");
        cleaned
            .to_lowercase()
            .split_whitespace()
            // The uppercase test runs on the lowercased copy, so it never filters anything.
            .filter(|w| w.chars().count() > 2 && !is_all_uppercase(w))
            .map(str::to_string)
            .collect()
    }

    pub fn misspelled(&self, text: &str) -> BTreeSet<String> {
        let words = Self::candidate_words(text);
        self.checker.misspelled(words.iter().map(String::as_str))
    }
}

impl Default for SpellCheckRule {
    fn default() -> Self {
        Self::new()
    }
}

fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

impl ResumeCheck for SpellCheckRule {
    fn name(&self) -> &'static str {
        "spelling"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let misspelled = self.misspelled(text);
        let count = misspelled.len();
        let mut feedback = Vec::new();

        if count > 0 {
            feedback.push(
                Feedback::warning(format!(
                    "Found {} potential spelling errors. Please review. Examples: {}",
                    count,
                    examples(&misspelled, count, EXAMPLE_LIMIT)
                ))
                .with_topic("Spelling"),
            );
            feedback.push(Feedback::suggestion(
                "Proofread carefully or use a spell checker (like Grammarly or Word's built-in checker). Common errors include typos or domain-specific terms not in a standard dictionary. Ensure consistency in capitalization of proper nouns and acronyms.",
            ));
        } else {
            feedback.push(Feedback::good(
                "No obvious spelling errors detected by the basic checker. Always good to double-check manually.",
            ));
        }

        CheckOutcome::new(
            feedback,
            ScoreInput::Spelling {
                misspelled_count: count,
            },
        )
    }
}
