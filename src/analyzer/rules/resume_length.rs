//! Overall length in words.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::{LengthInput, ScoreInput};
use crate::annotator::AnnotatedDocument;
use crate::Feedback;

pub const MIN_WORDS: usize = 250;
pub const MAX_WORDS: usize = 800;

/// Rule for resume length
pub struct ResumeLengthRule;

impl ResumeLengthRule {
    pub fn new() -> Self {
        Self
    }

    /// Whitespace-delimited tokens
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

impl Default for ResumeLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for ResumeLengthRule {
    fn name(&self) -> &'static str {
        "resume-length"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let word_count = Self::word_count(text);
        let mut feedback = vec![Feedback::info(format!(
            "Total word count is approximately {}.",
            word_count
        ))];
        let mut length_ok = true;

        if word_count < MIN_WORDS {
            feedback.push(Feedback::suggestion(
                "Your resume seems quite short (less than 250 words). Consider adding more detail, accomplishments, or relevant projects, especially if you have more than a year or two of experience.",
            ));
            length_ok = false;
        } else if word_count > MAX_WORDS {
            feedback.push(Feedback::suggestion(
                "Your resume might be too long (over 800 words). Aim for conciseness. For most professionals, 1-2 pages is ideal. Focus on the most relevant information for the jobs you're targeting.",
            ));
            length_ok = false;
        } else if word_count > 500 {
            feedback.push(Feedback::info(
                "Resume length seems appropriate for many roles (500-800 words). Ensure it's concise and impactful.",
            ));
        } else {
            feedback.push(Feedback::info(
                "Resume length is reasonable (250-500 words), especially for early-career professionals. Ensure you've included enough detail for your experience level.",
            ));
        }

        CheckOutcome::new(
            feedback,
            ScoreInput::Length(LengthInput {
                word_count,
                length_ok,
            }),
        )
    }
}
