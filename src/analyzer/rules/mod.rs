//! Resume checks
//!
//! Each check is stateless: it reads the raw text and/or the annotated
//! document and returns its feedback plus exactly one score input.

pub mod action_verbs;
pub mod contact_info;
pub mod dates;
pub mod first_person;
pub mod quantifiable;
pub mod readability;
pub mod resume_length;
pub mod section_headings;
pub mod skills;
pub mod spelling;

pub use action_verbs::ActionVerbsRule;
pub use contact_info::ContactInfoRule;
pub use dates::DatesFormatRule;
pub use first_person::FirstPersonRule;
pub use quantifiable::QuantifiableAchievementsRule;
pub use readability::{ReadabilityError, ReadabilityRule, TextStats};
pub use resume_length::ResumeLengthRule;
pub use section_headings::SectionHeadingsRule;
pub use skills::SkillsSectionRule;
pub use spelling::SpellCheckRule;

use super::scoring::ScoreInput;
use crate::annotator::AnnotatedDocument;
use crate::Feedback;

/// What a check produced for one resume
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub feedback: Vec<Feedback>,
    pub input: ScoreInput,
}

impl CheckOutcome {
    pub fn new(feedback: Vec<Feedback>, input: ScoreInput) -> Self {
        Self { feedback, input }
    }
}

/// Trait for resume checks
pub trait ResumeCheck: Send + Sync {
    /// Name of the check
    fn name(&self) -> &'static str;

    /// Inspect the resume and return feedback plus the score input
    fn check(&self, text: &str, doc: &AnnotatedDocument) -> CheckOutcome;
}

/// Join up to `limit` examples with ", ", adding "..." when more were found
pub(crate) fn examples<'a, I>(items: I, total: usize, limit: usize) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let shown: Vec<&str> = items.into_iter().take(limit).map(String::as_str).collect();
    let more = if total > limit { "..." } else { "" };
    format!("{}{}", shown.join(", "), more)
}

/// Uppercase the first character, lowercase the rest ("about me" -> "About me")
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
