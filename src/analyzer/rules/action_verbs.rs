//! Action verbs used to describe accomplishments.

use super::{examples, CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::{AnnotatedDocument, PartOfSpeech};
use crate::lexicon::ACTION_VERBS;
use crate::Feedback;
use std::collections::BTreeSet;

const EXAMPLE_LIMIT: usize = 5;

/// Rule counting verbs whose lemma is a recognized action verb
pub struct ActionVerbsRule;

impl ActionVerbsRule {
    pub fn new() -> Self {
        Self
    }

    /// Occurrence count plus the distinct lemmas found
    pub fn find(doc: &AnnotatedDocument) -> (usize, BTreeSet<String>) {
        let mut count = 0;
        let mut lemmas = BTreeSet::new();
        for token in doc.tokens() {
            if token.pos == PartOfSpeech::Verb && ACTION_VERBS.contains(token.lemma.as_str()) {
                count += 1;
                lemmas.insert(token.lemma.clone());
            }
        }
        (count, lemmas)
    }
}

impl Default for ActionVerbsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for ActionVerbsRule {
    fn name(&self) -> &'static str {
        "action-verbs"
    }

    fn check(&self, _text: &str, doc: &AnnotatedDocument) -> CheckOutcome {
        let (count, lemmas) = Self::find(doc);
        let mut feedback = Vec::new();

        if count < 10 {
            feedback.push(Feedback::suggestion(format!(
                "Found {} action verbs. Strong resumes often use many impactful action verbs (e.g., 15-25+) to start bullet points describing accomplishments.",
                count
            )));
        } else if count < 20 {
            feedback.push(Feedback::info(format!(
                "Found {} action verbs. Good start! Consider if more can be used to strengthen accomplishment statements.",
                count
            )));
        } else {
            feedback.push(Feedback::good(format!(
                "Detected {} action verbs. This helps make your accomplishments sound dynamic!",
                count
            )));
        }

        if !lemmas.is_empty() {
            feedback.push(Feedback::info(format!(
                "Some action verbs used: {}.",
                examples(&lemmas, lemmas.len(), EXAMPLE_LIMIT)
            )));
        }

        CheckOutcome::new(feedback, ScoreInput::ActionVerbs { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{Annotator, HeuristicAnnotator, Token};
    use crate::Severity;

    fn run(text: &str) -> CheckOutcome {
        let doc = HeuristicAnnotator::new().annotate(text);
        ActionVerbsRule::new().check(text, &doc)
    }

    #[test]
    fn test_counts_every_occurrence() {
        let outcome = run("Managed the budget. Managed a team. Developed tools. Led sales.");
        assert_eq!(outcome.input, ScoreInput::ActionVerbs { count: 4 });
        assert_eq!(
            outcome.feedback[1].message,
            "Some action verbs used: develop, lead, manage."
        );
    }

    #[test]
    fn test_only_verbs_count() {
        let doc = AnnotatedDocument::single_sentence(vec![
            Token::new("design", PartOfSpeech::Noun, "design"),
            Token::new("designed", PartOfSpeech::Verb, "design"),
            Token::new("walked", PartOfSpeech::Verb, "walk"),
            Token::new("pondered", PartOfSpeech::Verb, "ponder"),
        ]);
        let (count, lemmas) = ActionVerbsRule::find(&doc);
        assert_eq!(count, 2);
        assert_eq!(lemmas.into_iter().collect::<Vec<_>>(), vec!["design", "walk"]);
    }

    #[test]
    fn test_bands_and_examples_truncated() {
        let verbs = [
            "Managed", "Built", "Designed", "Led", "Created", "Launched", "Improved", "Reduced",
            "Analyzed", "Mentored",
        ];
        let text: String = verbs.iter().map(|v| format!("{} things.\n", v)).collect();
        let outcome = run(&text);
        assert_eq!(outcome.input, ScoreInput::ActionVerbs { count: 10 });
        assert_eq!(outcome.feedback[0].severity, Severity::Info);
        assert!(outcome.feedback[1].message.ends_with("...."));

        let twice = format!("{}{}", text, text);
        let outcome = run(&twice);
        assert_eq!(outcome.input, ScoreInput::ActionVerbs { count: 20 });
        assert_eq!(outcome.feedback[0].severity, Severity::Good);
    }

    #[test]
    fn test_headings_titles_and_skills_are_not_action_verbs() {
        let text = "Projects\nAwards\nTeam Lead, Marketing\nBachelor of Engineering\n\
                    Skills: Design, Research, Testing, Training, Networking";
        let (count, lemmas) = ActionVerbsRule::find(&HeuristicAnnotator::new().annotate(text));
        assert_eq!(count, 0, "{:?}", lemmas);
    }

    #[test]
    fn test_no_verbs() {
        let outcome = run("Curriculum vitae");
        assert_eq!(outcome.input, ScoreInput::ActionVerbs { count: 0 });
        assert_eq!(outcome.feedback.len(), 1);
        assert!(outcome.feedback[0].message.starts_with("Found 0 action verbs."));
    }
}
