//! resume-review: Rule-based Resume Quality Analyzer
//!
//! This library runs a fixed battery of heuristic checks against the plain
//! text of a resume and produces ordered, human-readable feedback plus a
//! 0-100 quality score.

pub mod analyzer;
pub mod annotator;
pub mod config;
pub mod extract;
pub mod lexicon;
pub mod reporter;
pub mod spelling;

pub use analyzer::{AnalysisEngine, AnalysisError};

use analyzer::scoring::Adjustment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The result of analyzing one resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// File the text came from (None for raw text or stdin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Overall quality score (0-100)
    pub score: Score,
    /// Ordered feedback: headings, feedback items and the verdict
    pub lines: Vec<FeedbackLine>,
    /// Score adjustments that produced the final score
    pub adjustments: Vec<Adjustment>,
    /// Whitespace-delimited word count of the text
    pub word_count: usize,
}

impl AnalysisResult {
    /// Result for input that could not be analyzed at all
    pub fn unscored(feedback: Feedback) -> Self {
        Self {
            source: None,
            score: Score::new(0),
            lines: vec![FeedbackLine::Note(feedback)],
            adjustments: Vec::new(),
            word_count: 0,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Feedback items only, without headings or verdict
    pub fn feedback(&self) -> impl Iterator<Item = &Feedback> {
        self.lines.iter().filter_map(|line| match line {
            FeedbackLine::Note(feedback) => Some(feedback),
            _ => None,
        })
    }

    /// Number of feedback items at the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.feedback().filter(|f| f.severity == severity).count()
    }

    /// Display label for the source ("<text>" when analyzed from a string)
    pub fn label(&self) -> String {
        self.source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<text>".to_string())
    }
}

/// Quality score with tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Numeric score (0-100)
    pub value: u8,
    pub tier: ScoreTier,
}

impl Score {
    pub fn new(value: u8) -> Self {
        let value = value.min(100);
        let tier = ScoreTier::from_score(value);
        Self { value, tier }
    }
}

/// Verdict band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
    SignificantImprovement,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => ScoreTier::Excellent,
            70..=84 => ScoreTier::Good,
            50..=69 => ScoreTier::NeedsImprovement,
            _ => ScoreTier::SignificantImprovement,
        }
    }

    /// Summary sentence shown under the overall score
    pub fn verdict(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent! Your resume hits most of the key marks for a strong document. It's likely to perform well with both ATS and human reviewers.",
            ScoreTier::Good => "Good foundation! Your resume has several strong points. Addressing the suggestions can elevate it further and increase its effectiveness.",
            ScoreTier::NeedsImprovement => "Needs improvement. Your resume has potential but requires attention to several key areas. Focus on the suggestions marked 'High Priority' or 'Warning'.",
            ScoreTier::SignificantImprovement => "Significant improvement needed. Your resume may be missing critical elements or have issues that could hinder your job search. Systematically address the feedback provided.",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTier::Excellent => write!(f, "Excellent"),
            ScoreTier::Good => write!(f, "Good foundation"),
            ScoreTier::NeedsImprovement => write!(f, "Needs improvement"),
            ScoreTier::SignificantImprovement => write!(f, "Significant improvement needed"),
        }
    }
}

/// Severity of a feedback item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Good,
    Info,
    Suggestion,
    SuggestionHighPriority,
    Warning,
    Error,
}

impl Severity {
    /// Rendered prefix without the trailing colon
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Info => "Info",
            Severity::Suggestion => "Suggestion",
            Severity::SuggestionHighPriority => "Suggestion (High Priority)",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One piece of feedback about the resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub severity: Severity,
    /// Optional qualifier rendered after the severity, e.g. "Spelling"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub message: String,
}

impl Feedback {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            topic: None,
            message: message.into(),
        }
    }

    pub fn good(message: impl Into<String>) -> Self {
        Self::new(Severity::Good, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, message)
    }

    pub fn high_priority(message: impl Into<String>) -> Self {
        Self::new(Severity::SuggestionHighPriority, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// "Warning (Spelling)", "Suggestion (High Priority)", "Good"
    pub fn prefix(&self) -> String {
        match &self.topic {
            Some(topic) => format!("{} ({})", self.severity, topic),
            None => self.severity.to_string(),
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.prefix(), self.message)
    }
}

/// One entry in the ordered analysis output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedbackLine {
    /// Section heading such as "Content & Impact"
    Heading { title: String },
    /// A feedback item
    Note(Feedback),
    /// Tier verdict printed under the score
    Verdict { tier: ScoreTier, message: String },
}

impl FeedbackLine {
    pub fn heading(title: impl Into<String>) -> Self {
        FeedbackLine::Heading {
            title: title.into(),
        }
    }

    pub fn verdict(tier: ScoreTier) -> Self {
        FeedbackLine::Verdict {
            tier,
            message: tier.verdict().to_string(),
        }
    }
}

impl From<Feedback> for FeedbackLine {
    fn from(feedback: Feedback) -> Self {
        FeedbackLine::Note(feedback)
    }
}

impl std::fmt::Display for FeedbackLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackLine::Heading { title } => write!(f, "--- {} ---", title),
            FeedbackLine::Note(feedback) => write!(f, "{}", feedback),
            FeedbackLine::Verdict { message, .. } => write!(f, "{}", message),
        }
    }
}

/// Analyze resume text with the default engine
pub fn analyze_text(text: &str) -> Result<AnalysisResult, AnalysisError> {
    AnalysisEngine::new().analyze_text(text)
}

/// Extract and analyze a resume file with the default engine
pub fn analyze_file(path: &Path) -> Result<AnalysisResult, AnalysisError> {
    AnalysisEngine::new().analyze_file(path)
}
