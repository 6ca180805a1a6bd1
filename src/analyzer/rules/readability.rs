//! Flesch Reading Ease and Flesch-Kincaid grade level.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::AnnotatedDocument;
use crate::Feedback;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[^.!?]+[.!?]*").unwrap());

/// Score recorded when readability cannot be computed
pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadabilityError {
    #[error("text contains no words")]
    NoWords,
}

/// Word, sentence and syllable counts behind the readability formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Result<Self, ReadabilityError> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(ReadabilityError::NoWords);
        }

        // Fragments of two words or fewer (headings, bullets) are not sentences
        let sentences = SENTENCE_RE
            .find_iter(text)
            .filter(|m| m.as_str().split_whitespace().count() > 2)
            .count()
            .max(1);
        let syllables = words.iter().map(|w| syllable_count(w)).sum();

        Ok(Self {
            words: words.len(),
            sentences,
            syllables,
        })
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    pub fn flesch_reading_ease(&self) -> f64 {
        round2(206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word())
    }

    pub fn flesch_kincaid_grade(&self) -> f64 {
        round2(0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Vowel groups, minus a silent trailing "e"; at least one per word
pub fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_vowel = false;
    for c in lower.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }
    if count > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        count -= 1;
    }
    count.max(1)
}

/// Rule for how easy the resume is to read
pub struct ReadabilityRule;

impl ReadabilityRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReadabilityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for ReadabilityRule {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let mut feedback = Vec::new();

        let stats = match TextStats::from_text(text) {
            Ok(stats) => stats,
            Err(e) => {
                feedback.push(Feedback::info(format!(
                    "Could not calculate readability score. Error: {}",
                    e
                )));
                return CheckOutcome::new(
                    feedback,
                    ScoreInput::Readability {
                        flesch_score: NEUTRAL_SCORE,
                    },
                );
            }
        };

        let flesch = stats.flesch_reading_ease();
        feedback.push(
            Feedback::info(format!(
                "Flesch Reading Ease score: {:.2} (Higher is better; 60-70 is generally good for wide audiences).",
                flesch
            ))
            .with_topic("Readability"),
        );
        if flesch < 30.0 {
            feedback.push(Feedback::suggestion(
                "Readability is very low (college graduate level or higher). Try to simplify complex sentences, break up long paragraphs, and use more common vocabulary unless highly technical language is standard for your target roles.",
            ));
        } else if flesch < 60.0 {
            feedback.push(Feedback::suggestion(
                "Readability is fairly difficult. Consider simplifying some sentences or jargon for broader understanding, especially if applying to roles outside of a highly specialized field.",
            ));
        } else {
            feedback.push(Feedback::good(
                "Readability score suggests the text is understandable for a general business audience.",
            ));
        }

        let grade = stats.flesch_kincaid_grade();
        feedback.push(
            Feedback::info(format!(
                "Flesch-Kincaid Grade Level: {:.1}. Aim for a grade level around 8-12 for general business communication, unless a higher level is specific to your field and target audience.",
                grade
            ))
            .with_topic("Readability"),
        );

        // An exact zero is recorded as neutral, like a failed computation
        let flesch_score = if flesch == 0.0 { NEUTRAL_SCORE } else { flesch };
        tracing::debug!(flesch, grade, words = stats.words, sentences = stats.sentences, "readability");

        CheckOutcome::new(feedback, ScoreInput::Readability { flesch_score })
    }
}
