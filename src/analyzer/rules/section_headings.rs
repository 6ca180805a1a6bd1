//! Standard and optional resume sections.

use super::{capitalize, CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::{ScoreInput, SectionsInput};
use crate::annotator::AnnotatedDocument;
use crate::Feedback;

/// Required sections and the headings that count as each, in report order
pub const REQUIRED_SECTIONS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "profile", "objective", "about me"]),
    (
        "experience",
        &["experience", "work experience", "professional experience", "employment history"],
    ),
    ("education", &["education", "academic background", "qualifications"]),
    (
        "skills",
        &["skills", "technical skills", "proficiencies", "expertise", "technologies"],
    ),
];

pub const OPTIONAL_SECTIONS: &[&str] = &[
    "projects",
    "awards",
    "publications",
    "volunteer",
    "certifications",
    "portfolio",
    "references",
    "languages",
];

/// Rule for the presence of standard section headings
pub struct SectionHeadingsRule;

impl SectionHeadingsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionHeadingsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for SectionHeadingsRule {
    fn name(&self) -> &'static str {
        "section-headings"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let lower = text.to_lowercase();
        let mut feedback = Vec::new();
        let mut found = 0;

        for (key, variations) in REQUIRED_SECTIONS {
            if variations.iter().any(|v| lower.contains(v)) {
                feedback.push(Feedback::good(format!(
                    "Section '{}' seems to be present.",
                    capitalize(key)
                )));
                found += 1;
            } else {
                feedback.push(Feedback::suggestion(format!(
                    "Missing a clear '{}' section. This is a standard resume component.",
                    capitalize(key)
                )));
            }
        }

        if found < REQUIRED_SECTIONS.len() {
            feedback.push(Feedback::warning(
                "Some standard sections (Summary, Experience, Education, Skills) might be missing or not clearly labeled. Ensure these are easily identifiable.",
            ));
        }

        for section in OPTIONAL_SECTIONS {
            if lower.contains(section) {
                feedback.push(Feedback::info(format!(
                    "Optional section '{}' detected. Ensure it adds value.",
                    capitalize(section)
                )));
            }
        }

        CheckOutcome::new(
            feedback,
            ScoreInput::Sections(SectionsInput {
                required_found: found,
                total_required: REQUIRED_SECTIONS.len(),
            }),
        )
    }
}
