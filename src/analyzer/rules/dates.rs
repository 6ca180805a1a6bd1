//! Employment and education date formats.

use super::{CheckOutcome, ResumeCheck};
use crate::analyzer::scoring::ScoreInput;
use crate::annotator::AnnotatedDocument;
use crate::Feedback;
use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";
const RANGE_SEP: &str = r"\s*[-–—to]+\s*";
const OPEN_END: &str = r"(?:Present|Current|Ongoing|Till Date)";

/// Each pattern is counted independently, so a range such as
/// "Jan 2020 - Mar 2022" is also counted by the single month-year pattern.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"\b{MONTH}\s+\d{{4}}\b"),
        r"\b\d{1,2}/\d{4}\b".to_string(),
        r"\b\d{1,2}-\d{4}\b".to_string(),
        format!(r"\b\d{{4}}{RANGE_SEP}\d{{4}}\b"),
        format!(r"\b\d{{4}}{RANGE_SEP}{OPEN_END}\b"),
        format!(r"\b{MONTH}\s+\d{{4}}{RANGE_SEP}{MONTH}\s+\d{{4}}\b"),
        format!(r"\b{MONTH}\s+\d{{4}}{RANGE_SEP}{OPEN_END}\b"),
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect()
});

/// Rule for recognizable date ranges
pub struct DatesFormatRule;

impl DatesFormatRule {
    pub fn new() -> Self {
        Self
    }

    /// Sum of matches over all date patterns
    pub fn count(text: &str) -> usize {
        DATE_PATTERNS
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }
}

impl Default for DatesFormatRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeCheck for DatesFormatRule {
    fn name(&self) -> &'static str {
        "dates"
    }

    fn check(&self, text: &str, _doc: &AnnotatedDocument) -> CheckOutcome {
        let count = Self::count(text);
        let feedback = if count < 2 {
            Feedback::suggestion(
                "Few standard date formats found for employment or education periods. Ensure your experience and education sections have clear and consistently formatted start and end dates (e.g., 'Month YYYY – Month YYYY' or 'Month YYYY – Present').",
            )
        } else {
            Feedback::info(format!(
                "Detected {} instances of common date formats. Consistency in formatting is key for readability.",
                count
            ))
        };
        CheckOutcome::new(vec![feedback], ScoreInput::Dates { count })
    }
}
