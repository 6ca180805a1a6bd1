//! Analysis engine - orchestrates all checks

use crate::annotator::{Annotator, HeuristicAnnotator};
use crate::config::Config;
use crate::extract::{self, ExtractError};
use crate::spelling::{Dictionary, DictionaryError, SpellChecker};
use crate::{AnalysisResult, Feedback, FeedbackLine, Score, ScoreTier};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::rules::{
    ActionVerbsRule, ContactInfoRule, DatesFormatRule, FirstPersonRule,
    QuantifiableAchievementsRule, ReadabilityRule, ResumeCheck, ResumeLengthRule,
    SectionHeadingsRule, SkillsSectionRule, SpellCheckRule,
};
use super::scoring::{ScoreError, ScoreSheet};
use super::ScoreCalculator;

/// Advice appended to every analyzed resume
pub const GENERAL_ADVICE: [&str; 4] = [
    "This is an automated analysis. While it provides valuable insights, also consider having your resume reviewed by a career advisor, mentor, or trusted professional in your field.",
    "Tailor your resume for each specific job application. Highlight the skills and experiences most relevant to the job description, and try to incorporate keywords from it.",
    "Ensure your resume is free of grammatical errors (this tool has basic spell check, but grammar is more complex). Use tools like Grammarly or ask someone to proofread.",
    "Keep your formatting clean, consistent, and professional. Avoid using tables, columns, or unusual fonts that might confuse Applicant Tracking Systems (ATS).",
];

const EMPTY_TEXT: &str = "The extracted text is empty. Cannot analyze.";
const EMPTY_EXTRACTION: &str = "Could not extract any text from the file, or the file is empty. Please check the file content and format. If it's a scanned PDF, text extraction might fail.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Checks that run together under one heading
struct CheckGroup {
    title: &'static str,
    checks: Vec<Box<dyn ResumeCheck>>,
}

impl CheckGroup {
    fn new(title: &'static str, checks: Vec<Box<dyn ResumeCheck>>) -> Self {
        Self { title, checks }
    }
}

fn standard_groups(spelling: SpellCheckRule) -> Vec<CheckGroup> {
    vec![
        CheckGroup::new(
            "Overall & Contact",
            vec![Box::new(ContactInfoRule::new()), Box::new(ResumeLengthRule::new())],
        ),
        CheckGroup::new(
            "Structure & Sections",
            vec![Box::new(SectionHeadingsRule::new()), Box::new(DatesFormatRule::new())],
        ),
        CheckGroup::new(
            "Content & Impact",
            vec![
                Box::new(ActionVerbsRule::new()),
                Box::new(QuantifiableAchievementsRule::new()),
                Box::new(SkillsSectionRule::new()),
            ],
        ),
        CheckGroup::new(
            "Language & Professionalism",
            vec![
                Box::new(spelling),
                Box::new(ReadabilityRule::new()),
                Box::new(FirstPersonRule::new()),
            ],
        ),
    ]
}

/// Main analysis engine that orchestrates all checks
pub struct AnalysisEngine {
    annotator: Box<dyn Annotator>,
    groups: Vec<CheckGroup>,
}

impl AnalysisEngine {
    /// Create an engine with the built-in annotator and dictionary
    pub fn new() -> Self {
        Self {
            annotator: Box::new(HeuristicAnnotator::new()),
            groups: standard_groups(SpellCheckRule::new()),
        }
    }

    /// Replace the annotator that tags and lemmatizes the text
    pub fn with_annotator(mut self, annotator: impl Annotator + 'static) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    /// Replace the spell checker used by the spelling check
    pub fn with_spell_checker(mut self, checker: SpellChecker) -> Self {
        for group in &mut self.groups {
            for check in &mut group.checks {
                if check.name() == "spelling" {
                    *check = Box::new(SpellCheckRule::with_checker(checker.clone()));
                }
            }
        }
        self
    }

    /// Engine with the config's extra dictionary and allow-list applied
    pub fn from_config(config: &Config) -> Result<Self, DictionaryError> {
        let mut dictionary = Dictionary::new();
        if let Some(path) = &config.dictionary {
            dictionary.load_file(path)?;
        }
        let checker = SpellChecker::with_dictionary(dictionary).allow_words(&config.allow_words);
        Ok(Self::new().with_spell_checker(checker))
    }

    /// Check names in execution order
    pub fn check_names(&self) -> Vec<&'static str> {
        self.groups
            .iter()
            .flat_map(|g| g.checks.iter().map(|c| c.name()))
            .collect()
    }

    #[cfg(test)]
    fn without_check(mut self, name: &str) -> Self {
        for group in &mut self.groups {
            group.checks.retain(|c| c.name() != name);
        }
        self
    }

    /// Analyze resume text and return ordered feedback with the score
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Ok(AnalysisResult::unscored(Feedback::error(EMPTY_TEXT)));
        }

        let doc = self.annotator.annotate(text);
        let mut lines = Vec::new();
        let mut sheet = ScoreSheet::new();

        for group in &self.groups {
            lines.push(FeedbackLine::heading(group.title));
            for check in &group.checks {
                let outcome = check.check(text, &doc);
                tracing::debug!(
                    check = check.name(),
                    feedback = outcome.feedback.len(),
                    input = ?outcome.input,
                    "check finished"
                );
                lines.extend(outcome.feedback.into_iter().map(FeedbackLine::from));
                sheet.record(outcome.input);
            }
        }

        let report = ScoreCalculator::calculate(&sheet)?;
        let score = Score::new(report.score);

        lines.push(FeedbackLine::heading(format!("Overall Score: {}/100", score.value)));
        lines.push(FeedbackLine::verdict(score.tier));
        lines.push(FeedbackLine::heading("General Advice"));
        lines.extend(
            GENERAL_ADVICE
                .iter()
                .map(|advice| FeedbackLine::from(Feedback::info(*advice))),
        );

        Ok(AnalysisResult {
            source: None,
            score,
            lines,
            adjustments: report.adjustments,
            word_count: ResumeLengthRule::word_count(text),
        })
    }

    /// Extract a resume file and analyze its text
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, AnalysisError> {
        let text = extract::extract_text(path)?;

        if text.trim().is_empty() {
            tracing::warn!(path = %path.display(), "no text extracted");
            return Ok(AnalysisResult::unscored(Feedback::warning(EMPTY_EXTRACTION)).with_source(path));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let extracted = Feedback::info(format!(
            "Successfully extracted text from '{}' ({} characters).",
            name,
            text.chars().count()
        ));

        let mut result = self.analyze_text(&text)?.with_source(path);
        result.lines.insert(0, FeedbackLine::from(extracted));
        tracing::info!(path = %path.display(), score = result.score.value, "analyzed resume");
        Ok(result)
    }

    /// Analyze multiple resume files sequentially
    pub fn analyze_many(&self, paths: &[&Path]) -> Vec<Result<AnalysisResult, AnalysisError>> {
        paths.iter().map(|p| self.analyze_file(p)).collect()
    }

    /// Analyze multiple resume files in parallel using rayon
    pub fn analyze_parallel(&self, paths: &[PathBuf]) -> Vec<Result<AnalysisResult, AnalysisError>> {
        use rayon::prelude::*;

        paths.par_iter().map(|p| self.analyze_file(p)).collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[AnalysisResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.score.value as u32).sum();
        let avg_score = (total_score / results.len() as u32) as u8;

        let mut tiers = BTreeMap::new();
        for result in results {
            *tiers.entry(result.score.tier).or_insert(0) += 1;
        }

        AggregateStats {
            files_analyzed: results.len(),
            average_score: Score::new(avg_score),
            lowest_score: results.iter().map(|r| r.score.value).min().unwrap_or(0),
            highest_score: results.iter().map(|r| r.score.value).max().unwrap_or(0),
            tiers,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple resume analyses
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Number of files analyzed
    pub files_analyzed: usize,
    /// Average score across all files (rounded down)
    pub average_score: Score,
    pub lowest_score: u8,
    pub highest_score: u8,
    /// Number of resumes per verdict tier
    pub tiers: BTreeMap<ScoreTier, usize>,
}

impl Default for Score {
    fn default() -> Self {
        Score::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::scoring::Category;
    use crate::annotator::AnnotatedDocument;
    use crate::Severity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WEAK: &str = "hello there this is a short note about nothing much";

    const SOLID: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe\n\
        Summary\n\
        Backend engineer who builds reliable services.\n\
        Experience\n\
        Senior Engineer, Acme Corp, Jan 2020 - Present\n\
        Led a team of 6 engineers and reduced latency by 40%.\n\
        Designed and implemented a billing platform in Python and AWS.\n\
        Education\n\
        B.S. Computer Science, State University, 2012 - 2016\n\
        Skills\n\
        Python, Java, SQL, Docker, Kubernetes, AWS\n";

    fn make_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn headings(result: &AnalysisResult) -> Vec<String> {
        result
            .lines
            .iter()
            .filter_map(|l| match l {
                FeedbackLine::Heading { title } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let engine = AnalysisEngine::new();
        for text in ["", "   \n\t  "] {
            let result = engine.analyze_text(text).unwrap();
            assert_eq!(result.score.value, 0);
            assert_eq!(result.lines.len(), 1);
            assert_eq!(
                result.lines[0].to_string(),
                "Error: The extracted text is empty. Cannot analyze."
            );
            assert!(result.adjustments.is_empty());
        }
    }

    #[test]
    fn test_section_order() {
        let result = AnalysisEngine::new().analyze_text(SOLID).unwrap();
        assert_eq!(
            headings(&result),
            vec![
                "Overall & Contact".to_string(),
                "Structure & Sections".to_string(),
                "Content & Impact".to_string(),
                "Language & Professionalism".to_string(),
                format!("Overall Score: {}/100", result.score.value),
                "General Advice".to_string(),
            ]
        );
        assert!(result.lines[0].to_string() == "--- Overall & Contact ---");
    }

    #[test]
    fn test_verdict_follows_score_and_advice_closes() {
        let result = AnalysisEngine::new().analyze_text(SOLID).unwrap();
        let n = result.lines.len();
        let advice: Vec<String> = result.lines[n - 4..].iter().map(|l| l.to_string()).collect();
        assert!(advice.iter().all(|a| a.starts_with("Info: ")));
        assert!(advice[3].contains("Applicant Tracking Systems"));
        assert_eq!(
            result.lines[n - 6],
            FeedbackLine::verdict(result.score.tier)
        );
    }

    #[test]
    fn test_check_order() {
        assert_eq!(
            AnalysisEngine::new().check_names(),
            vec![
                "contact-info",
                "resume-length",
                "section-headings",
                "dates",
                "action-verbs",
                "quantifiable-achievements",
                "skills",
                "spelling",
                "readability",
                "first-person",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let engine = AnalysisEngine::new();
        let first = engine.analyze_text(SOLID).unwrap();
        let second = engine.analyze_text(SOLID).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_weak_text_scores_low() {
        let result = AnalysisEngine::new().analyze_text(WEAK).unwrap();
        assert!(result.score.value < 50, "got {}", result.score.value);
        assert_eq!(result.score.tier, ScoreTier::SignificantImprovement);
        assert!(result.count(Severity::SuggestionHighPriority) >= 2);
        assert!(result
            .lines
            .iter()
            .any(|l| l.to_string().starts_with("Significant improvement needed.")));
    }

    #[test]
    fn test_solid_beats_weak() {
        let engine = AnalysisEngine::new();
        let solid = engine.analyze_text(SOLID).unwrap();
        let weak = engine.analyze_text(WEAK).unwrap();
        assert!(solid.score.value > weak.score.value);
        assert_eq!(solid.word_count, ResumeLengthRule::word_count(SOLID));
    }

    #[test]
    fn test_score_matches_adjustments() {
        let result = AnalysisEngine::new().analyze_text(SOLID).unwrap();
        let raw = 100 + result.adjustments.iter().map(|a| a.points).sum::<i32>();
        assert_eq!(result.score.value as i32, raw.clamp(0, 100));
    }

    #[test]
    fn test_missing_check_is_an_error() {
        let engine = AnalysisEngine::new().without_check("dates");
        let err = engine.analyze_text(SOLID).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Score(ScoreError::MissingInput(_))
        ));
    }

    #[test]
    fn test_custom_annotator_is_used() {
        struct Blank;
        impl Annotator for Blank {
            fn annotate(&self, _text: &str) -> AnnotatedDocument {
                AnnotatedDocument::default()
            }
        }

        let result = AnalysisEngine::new()
            .with_annotator(Blank)
            .analyze_text(SOLID)
            .unwrap();
        assert!(result
            .feedback()
            .any(|f| f.message.starts_with("Found 0 action verbs.")));
        assert!(!result
            .feedback()
            .any(|f| f.message.starts_with("Some action verbs used")));
    }

    fn spelling_warnings(result: &AnalysisResult) -> usize {
        result
            .feedback()
            .filter(|f| f.severity == Severity::Warning && f.topic.as_deref() == Some("Spelling"))
            .count()
    }

    fn has_spelling_adjustment(result: &AnalysisResult) -> bool {
        result
            .adjustments
            .iter()
            .any(|a| a.category == Category::Spelling)
    }

    #[test]
    fn test_spell_checker_override() {
        let text = "Grafana dashboards for everyone";
        let engine = AnalysisEngine::new();
        let before = engine.analyze_text(text).unwrap();
        assert_eq!(spelling_warnings(&before), 1);
        assert!(has_spelling_adjustment(&before));

        let engine = engine.with_spell_checker(SpellChecker::new().allow_words(["grafana"]));
        let after = engine.analyze_text(text).unwrap();
        assert_eq!(spelling_warnings(&after), 0);
        assert!(!has_spelling_adjustment(&after));
    }

    #[test]
    fn test_from_config_loads_dictionary() {
        let words = make_file(".txt", "grafana\n");
        let config = Config {
            dictionary: Some(words.path().to_path_buf()),
            ..Config::default()
        };
        let engine = AnalysisEngine::from_config(&config).unwrap();
        let result = engine.analyze_text("Grafana dashboards for everyone").unwrap();
        assert_eq!(spelling_warnings(&result), 0);
        assert!(!has_spelling_adjustment(&result));

        let missing = Config {
            dictionary: Some(PathBuf::from("/no/such/words.txt")),
            ..Config::default()
        };
        assert!(AnalysisEngine::from_config(&missing).is_err());
    }

    #[test]
    fn test_analyze_file_prefixes_extraction_note() {
        let file = make_file(".txt", SOLID);
        let result = AnalysisEngine::new().analyze_file(file.path()).unwrap();
        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(
            result.lines[0].to_string(),
            format!(
                "Info: Successfully extracted text from '{}' ({} characters).",
                name,
                SOLID.chars().count()
            )
        );
        assert_eq!(result.source.as_deref(), Some(file.path()));
        assert_eq!(result.lines[1], FeedbackLine::heading("Overall & Contact"));
    }

    #[test]
    fn test_analyze_empty_file_warns() {
        let file = make_file(".txt", "  \n ");
        let result = AnalysisEngine::new().analyze_file(file.path()).unwrap();
        assert_eq!(result.score.value, 0);
        assert_eq!(result.lines.len(), 1);
        assert!(result.lines[0]
            .to_string()
            .starts_with("Warning: Could not extract any text from the file"));
    }

    #[test]
    fn test_analyze_unsupported_file() {
        let file = make_file(".odt", SOLID);
        let err = AnalysisEngine::new().analyze_file(file.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Extract(ExtractError::Unsupported { .. })));
        assert_eq!(
            err.to_string(),
            "Unsupported file type. Please upload a PDF or DOCX file."
        );
    }

    #[test]
    fn test_analyze_many() {
        let file1 = make_file(".txt", SOLID);
        let file2 = make_file(".md", WEAK);

        let engine = AnalysisEngine::new();
        let paths: Vec<&Path> = vec![file1.path(), file2.path()];
        let results = engine.analyze_many(&paths);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn test_analyze_parallel_matches_sequential() {
        let file1 = make_file(".txt", SOLID);
        let file2 = make_file(".txt", WEAK);
        let engine = AnalysisEngine::new();

        let paths: Vec<PathBuf> = vec![file1.path().to_path_buf(), file2.path().to_path_buf()];
        let parallel: Vec<AnalysisResult> = engine
            .analyze_parallel(&paths)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        let sequential: Vec<AnalysisResult> = engine
            .analyze_many(&[file1.path(), file2.path()])
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_aggregate_stats_empty() {
        let stats = AnalysisEngine::aggregate_stats(&[]);
        assert_eq!(stats.files_analyzed, 0);
        assert_eq!(stats.average_score.value, 0);
        assert!(stats.tiers.is_empty());
    }

    #[test]
    fn test_aggregate_stats_multiple() {
        let engine = AnalysisEngine::new();
        let r1 = engine.analyze_text(SOLID).unwrap();
        let r2 = engine.analyze_text(WEAK).unwrap();

        let stats = AnalysisEngine::aggregate_stats(&[r1.clone(), r2.clone()]);
        assert_eq!(stats.files_analyzed, 2);
        let expected_avg = ((r1.score.value as u32 + r2.score.value as u32) / 2) as u8;
        assert_eq!(stats.average_score.value, expected_avg);
        assert_eq!(stats.lowest_score, r2.score.value);
        assert_eq!(stats.highest_score, r1.score.value);
        assert_eq!(stats.tiers.values().sum::<usize>(), 2);
    }

    #[test]
    fn test_default_engine() {
        let engine = AnalysisEngine::default();
        assert_eq!(engine.check_names().len(), 10);
    }
}
