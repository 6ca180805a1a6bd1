//! Email, phone and LinkedIn presence.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::{ContactInput, ScoreInput};
use crate::annotator::AnnotatedDocument;
use crate::Feedback;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// US-style numbers: (555) 123-4567, 555.123.4567, 5551234567
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap());

const LINKEDIN_MARKERS: &[&str] = &["linkedin.com/in/", "linkedin.com/pub/"];

/// Rule for contact details at the top of a resume
pub struct ContactInfoRule;

impl ContactInfoRule {
    pub fn new() -> Self {
        Self
    }

    pub fn has_email(text: &str) -> bool {
        EMAIL_RE.is_match(text)
    }

    pub fn has_phone(text: &str) -> bool {
        PHONE_RE.is_match(text)
    }

    pub fn has_linkedin(text: &str) -> bool {
        let lower = text.to_lowercase();
        LINKEDIN_MARKERS.iter().any(|m| lower.contains(m))
    }
}

impl Default for ContactInfoRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for ContactInfoRule {
    fn name(&self) -> &'static str {
        "contact-info"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let mut feedback = Vec::new();
        let input = ContactInput {
            email_found: Self::has_email(text),
            phone_found: Self::has_phone(text),
            linkedin_found: Self::has_linkedin(text),
        };

        if input.email_found {
            feedback.push(Feedback::good("Email address detected."));
        } else {
            feedback.push(Feedback::high_priority(
                "Email address not found or in an unrecognized format. Ensure it's clearly visible.",
            ));
        }

        if input.phone_found {
            feedback.push(Feedback::good("Phone number detected."));
        } else {
            feedback.push(Feedback::high_priority(
                "Phone number not found or in an unrecognized format. Ensure it's clearly visible.",
            ));
        }

        if input.linkedin_found {
            feedback.push(Feedback::good("LinkedIn profile link seems to be present."));
        } else {
            feedback.push(Feedback::suggestion(
                "Consider adding a link to your LinkedIn profile for networking and professional presence.",
            ));
        }

        CheckOutcome::new(feedback, ScoreInput::Contact(input))
    }
}
