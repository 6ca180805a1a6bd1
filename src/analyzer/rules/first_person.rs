//! First-person pronouns.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::AnnotatedDocument;
use crate::Feedback;
use once_cell::sync::Lazy;
use regex::Regex;

static I_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bI\b").unwrap());
static CONTRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:i['’]m|i['’]ve|i['’]d|i['’]ll)\b").unwrap());
static MY_ME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:my|me)\b").unwrap());

const THRESHOLD: usize = 3;

/// Rule for first-person writing ("I managed" instead of "Managed")
pub struct FirstPersonRule;

impl FirstPersonRule {
    pub fn new() -> Self {
        Self
    }

    /// Standalone "I" (case-sensitive) plus contractions plus my/me.
    /// A contraction also counts once as "I".
    pub fn count(text: &str) -> usize {
        I_RE.find_iter(text).count()
            + CONTRACTION_RE.find_iter(text).count()
            + MY_ME_RE.find_iter(text).count()
    }
}

impl Default for FirstPersonRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for FirstPersonRule {
    fn name(&self) -> &'static str {
        "first-person"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let count = Self::count(text);
        let mut feedback = Vec::new();
        if count > THRESHOLD {
            feedback.push(Feedback::suggestion(format!(
                "Found first-person pronouns (I, my, me, I'm, etc.) used approximately {} times. Resumes are typically written in an implied first-person (e.g., 'Managed a team' instead of 'I managed a team'). Consider rephrasing to be more professional and concise.",
                count
            )));
        }
        CheckOutcome::new(feedback, ScoreInput::FirstPerson { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(FirstPersonRule::count("I led the team."), 1);
        assert_eq!(FirstPersonRule::count("i led the team."), 0);
        assert_eq!(FirstPersonRule::count("My role gave me scope."), 2);
        assert_eq!(FirstPersonRule::count("I'm proud"), 2);
        assert_eq!(FirstPersonRule::count("I’ve shipped"), 2);
        assert_eq!(FirstPersonRule::count("Mentored myself and my mentees"), 1);
        assert_eq!(FirstPersonRule::count("Improved MIT metrics"), 0);
    }

    #[test]
    fn test_suggestion_only_above_three() {
        let rule = FirstPersonRule::new();
        let doc = AnnotatedDocument::default();

        let three = rule.check("I did it. My work. Me too.", &doc);
        assert_eq!(three.input, ScoreInput::FirstPerson { count: 3 });
        assert!(three.feedback.is_empty());

        let four = rule.check("I did it. I shipped it. My work. Me too.", &doc);
        assert_eq!(four.input, ScoreInput::FirstPerson { count: 4 });
        assert_eq!(four.feedback.len(), 1);
        assert!(four.feedback[0].message.contains("approximately 4 times"));
    }
}
