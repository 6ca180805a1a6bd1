//! Skills section and technical keywords.

use super::{examples, CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::{ScoreInput, SkillsInput};
use crate::annotator::AnnotatedDocument;
use crate::lexicon::{TECH_SKILL_PHRASES, TECH_SKILL_WORDS};
use crate::Feedback;
use std::collections::BTreeSet;

const SECTION_MARKERS: &[&str] = &[
    "skill",
    "proficiencies",
    "expertise",
    "technologies",
    "competencies",
];

const EXAMPLE_LIMIT: usize = 3;

/// Rule for a skills section and recognizable technical skills
pub struct SkillsSectionRule;

impl SkillsSectionRule {
    pub fn new() -> Self {
        Self
    }

    pub fn section_present(text: &str) -> bool {
        let lower = text.to_lowercase();
        SECTION_MARKERS.iter().any(|m| lower.contains(m))
    }

    /// Distinct skill keywords: single words by token lemma, phrases by substring
    pub fn find_skills(text: &str, doc: &AnnotatedDocument) -> BTreeSet<String> {
        let lower = text.to_lowercase();
        let mut found: BTreeSet<String> = doc
            .tokens()
            .iter()
            .filter(|t| TECH_SKILL_WORDS.contains(t.lemma.as_str()))
            .map(|t| t.lemma.clone())
            .collect();
        found.extend(
            TECH_SKILL_PHRASES
                .iter()
                .filter(|phrase| lower.contains(*phrase))
                .map(|phrase| phrase.to_string()),
        );
        found
    }
}

impl Default for SkillsSectionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for SkillsSectionRule {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn check(&self, text: &str, doc: &AnnotatedDocument) -> CheckOutcome {
        let present = Self::section_present(text);
        let skills = Self::find_skills(text, doc);
        let count = skills.len();
        let mut feedback = Vec::new();

        if !present {
            feedback.push(Feedback::suggestion(
                "A dedicated 'Skills' section is highly recommended for listing technical and other key competencies. This makes it easy for recruiters to spot relevant abilities.",
            ));
        }

        if count > 0 {
            feedback.push(Feedback::good(format!(
                "Identified {} potential technical skills. Example(s): {}.",
                count,
                examples(&skills, count, EXAMPLE_LIMIT)
            )));
            if count < 5 {
                feedback.push(Feedback::suggestion(
                    "If you have more technical skills, ensure they are listed clearly. Aim for 5-15 relevant technical skills depending on your field and experience.",
                ));
            }
        } else if present {
            feedback.push(Feedback::suggestion(
                "Your skills section seems to be present, but few common technical skills were detected. Ensure you list specific tools, programming languages, and technologies.",
            ));
        } else {
            feedback.push(Feedback::suggestion(
                "No common technical skills detected. If you have them, list them in your 'Skills' section or integrate them into your experience descriptions.",
            ));
        }

        feedback.push(Feedback::info(
            "Remember to also showcase soft skills (e.g., communication, teamwork, problem-solving, leadership) through your experience descriptions and summary, not just by listing them in a skills section.",
        ));

        CheckOutcome::new(
            feedback,
            ScoreInput::Skills(SkillsInput {
                section_present: present,
                tech_skill_count: count,
            }),
        )
    }
}
