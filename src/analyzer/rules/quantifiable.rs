//! Sentences that pair a number with an achievement.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::{AnnotatedDocument, Token};
use crate::lexicon::{ACHIEVEMENT_PHRASES, ACHIEVEMENT_TERMS, QUANTITY_MARKERS};
use crate::Feedback;

/// Rule for measurable accomplishments ("Reduced costs by 20%")
pub struct QuantifiableAchievementsRule;

impl QuantifiableAchievementsRule {
    pub fn new() -> Self {
        Self
    }

    /// Number of sentences with both a quantity and an achievement term
    pub fn count(doc: &AnnotatedDocument) -> usize {
        doc.sentences()
            .filter(|sentence| has_quantity(sentence) && has_achievement(sentence))
            .count()
    }
}

impl Default for QuantifiableAchievementsRule {
    fn default() -> Self {
        Self::new()
    }
}

fn has_quantity(sentence: &[Token]) -> bool {
    sentence.iter().any(|token| {
        token.like_num || QUANTITY_MARKERS.contains(&token.text.to_lowercase().as_str())
    })
}

fn has_achievement(sentence: &[Token]) -> bool {
    let single = sentence.iter().any(|token| {
        ACHIEVEMENT_TERMS.contains(token.lemma.as_str())
            || ACHIEVEMENT_TERMS.contains(token.text.to_lowercase().as_str())
    });
    single
        || sentence.windows(2).any(|pair| {
            let first = pair[0].text.to_lowercase();
            let second = pair[1].text.to_lowercase();
            ACHIEVEMENT_PHRASES
                .iter()
                .any(|(a, b)| first == *a && second == *b)
        })
}

impl ResumeCheck for QuantifiableAchievementsRule {
    fn name(&self) -> &'static str {
        "quantifiable-achievements"
    }

    fn check(&self, _text: &str, doc: &AnnotatedDocument) -> CheckOutcome {
        let count = Self::count(doc);
        let feedback = if count == 0 {
            Feedback::high_priority(
                "No clear quantifiable achievements found. Use numbers, percentages, or monetary values to demonstrate the impact of your work (e.g., 'Increased sales by 15%', 'Reduced costs by $10K', 'Managed a team of 5').",
            )
        } else if count < 3 {
            Feedback::suggestion(format!(
                "Found {} potential quantifiable achievement(s). Aim to include more to make your impact clear and measurable. Each key role should ideally have 1-2 quantifiable points.",
                count
            ))
        } else {
            Feedback::good(format!(
                "Detected {} potential quantifiable achievements. This significantly strengthens your resume!",
                count
            ))
        };

        CheckOutcome::new(vec![feedback], ScoreInput::Quantifiable { count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::{Annotator, HeuristicAnnotator, PartOfSpeech};
    use crate::Severity;

    fn count(text: &str) -> usize {
        QuantifiableAchievementsRule::count(&HeuristicAnnotator::new().annotate(text))
    }

    #[test]
    fn test_number_and_achievement_in_same_sentence() {
        assert_eq!(count("Increased revenue by 20% in two quarters."), 1);
        assert_eq!(count("Reduced costs by $10K."), 1);
        assert_eq!(count("Grew the user base to 1,200 accounts."), 1);
    }

    #[test]
    fn test_requires_both_signals() {
        assert_eq!(count("Increased revenue substantially."), 0);
        assert_eq!(count("Managed a team of 5."), 0);
        assert_eq!(count("Increased revenue. Managed 5 people."), 0);
    }

    #[test]
    fn test_phrase_terms() {
        assert_eq!(count("Migration led to 30% fewer outages."), 1);
        assert_eq!(count("The redesign resulted in 2x signups."), 0);
        assert_eq!(count("The redesign resulted in three new clients."), 1);
    }

    #[test]
    fn test_one_per_sentence() {
        let text = "Increased sales 10% and reduced churn 5%.\nSaved $2M annually\nDelivered 12 projects";
        assert_eq!(count(text), 3);
    }

    #[test]
    fn test_empty_document() {
        let outcome =
            QuantifiableAchievementsRule::new().check("", &AnnotatedDocument::default());
        assert_eq!(outcome.input, ScoreInput::Quantifiable { count: 0 });
        assert_eq!(outcome.feedback[0].severity, Severity::SuggestionHighPriority);
    }

    #[test]
    fn test_surface_form_matches_without_lemma() {
        let doc = AnnotatedDocument::single_sentence(vec![
            Token::new("exceeded", PartOfSpeech::Adj, "exceeded"),
            Token::new("k", PartOfSpeech::Noun, "k"),
        ]);
        assert_eq!(QuantifiableAchievementsRule::count(&doc), 1);
    }

    #[test]
    fn test_bands() {
        let outcome = QuantifiableAchievementsRule::new().check(
            "",
            &HeuristicAnnotator::new()
                .annotate("Saved 5%.\nCut costs 10%.\nImproved NPS by 7 points.\nGrew sales 3x."),
        );
        assert_eq!(outcome.input, ScoreInput::Quantifiable { count: 2 });
        assert_eq!(outcome.feedback[0].severity, Severity::Suggestion);
    }
}
