//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::{AnalysisResult, ScoreTier};
use serde::Serialize;
use std::collections::BTreeMap;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &AnalysisResult) -> String {
        self.to_json(&JsonResult::from(result), "{}")
    }

    /// Report multiple results as JSON array
    pub fn report_many(&self, results: &[AnalysisResult]) -> String {
        let results: Vec<JsonResult> = results.iter().map(JsonResult::from).collect();
        self.to_json(&results, "[]")
    }

    /// Report with summary
    pub fn report_with_summary(&self, results: &[AnalysisResult], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: results.iter().map(JsonResult::from).collect(),
            summary: JsonSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score.value,
                average_tier: stats.average_score.tier,
                lowest_score: stats.lowest_score,
                highest_score: stats.highest_score,
                tiers: &stats.tiers,
            },
        };
        self.to_json(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// An analysis result plus its feedback rendered as display strings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    rendered: Vec<String>,
}

impl<'a> From<&'a AnalysisResult> for JsonResult<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            rendered: result.lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    summary: JsonSummary<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary<'a> {
    files_analyzed: usize,
    average_score: u8,
    average_tier: ScoreTier,
    lowest_score: u8,
    highest_score: u8,
    tiers: &'a BTreeMap<ScoreTier, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisEngine, Feedback, FeedbackLine, Score};
    use std::path::PathBuf;

    fn make_result(path: &str, score: u8) -> AnalysisResult {
        AnalysisResult {
            source: Some(PathBuf::from(path)),
            score: Score::new(score),
            lines: vec![
                FeedbackLine::heading("Overall & Contact"),
                FeedbackLine::from(Feedback::good("Email address found.")),
                FeedbackLine::verdict(Score::new(score).tier),
            ],
            adjustments: vec![],
            word_count: 320,
        }
    }

    #[test]
    fn test_json_single_result_has_expected_keys() {
        let result = make_result("cv.pdf", 90);

        let json = JsonReporter::new().report(&result);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["source"], "cv.pdf");
        assert_eq!(parsed["score"]["value"], 90);
        assert_eq!(parsed["score"]["tier"], "excellent");
        assert_eq!(parsed["wordCount"], 320);
        assert!(parsed.get("adjustments").is_some());

        let lines = parsed["lines"].as_array().unwrap();
        assert_eq!(lines[0]["kind"], "heading");
        assert_eq!(lines[1]["severity"], "good");
        assert_eq!(lines[2]["kind"], "verdict");

        let rendered = parsed["rendered"].as_array().unwrap();
        assert_eq!(rendered[0], "--- Overall & Contact ---");
        assert_eq!(rendered[1], "Good: Email address found.");
    }

    #[test]
    fn test_json_from_engine_has_adjustments() {
        let result = AnalysisEngine::new().analyze_text("Just one line of text.").unwrap();
        let json = JsonReporter::new().report(&result);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.get("source").is_none());
        let adjustments = parsed["adjustments"].as_array().unwrap();
        assert!(adjustments
            .iter()
            .any(|a| a["category"] == "contact" && a["points"] == -10));
    }

    #[test]
    fn test_json_pretty_output() {
        let result = make_result("cv.pdf", 85);
        let json = JsonReporter::new().pretty().report(&result);
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_many() {
        let r1 = make_result("a.pdf", 90);
        let r2 = make_result("b.docx", 70);

        let json = JsonReporter::new().report_many(&[r1, r2]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["source"], "a.pdf");
        assert_eq!(arr[1]["source"], "b.docx");
    }

    #[test]
    fn test_json_report_with_summary() {
        let results = vec![make_result("a.pdf", 90), make_result("b.pdf", 70)];
        let stats = AnalysisEngine::aggregate_stats(&results);

        let json = JsonReporter::new().report_with_summary(&results, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let summary = &parsed["summary"];
        assert_eq!(summary["filesAnalyzed"], 2);
        assert_eq!(summary["averageScore"], 80);
        assert_eq!(summary["averageTier"], "good");
        assert_eq!(summary["lowestScore"], 70);
        assert_eq!(summary["highestScore"], 90);
        assert_eq!(summary["tiers"]["excellent"], 1);
        assert_eq!(summary["tiers"]["good"], 1);
        assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_json_report_many_empty() {
        let json = JsonReporter::new().report_many(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.as_array().unwrap().is_empty());
    }
}
