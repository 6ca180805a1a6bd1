//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::{AnalysisResult, Feedback, FeedbackLine, ScoreTier, Severity};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the score adjustments
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, result: &AnalysisResult) {
        print!("{}", self.render(result));
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[AnalysisResult], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }
        print!("{}", self.render_summary(stats));
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &AnalysisResult) {
        println!("{}", self.render_quiet(result));
    }

    pub fn render_quiet(&self, result: &AnalysisResult) -> String {
        format!(
            "{}: {} ({})",
            result.label(),
            result.score.value,
            self.colorize_tier(result.score.tier)
        )
    }

    /// Full report for one resume
    pub fn render(&self, result: &AnalysisResult) -> String {
        let mut out = String::new();
        self.write_header(&mut out, result);
        for line in &result.lines {
            self.write_line(&mut out, line);
        }
        if self.verbose && !result.adjustments.is_empty() {
            self.write_adjustments(&mut out, result);
        }
        out.push('\n');
        out
    }

    fn write_header(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!("📄 Resume Review: {}", result.label()).bold()
        );
        let _ = writeln!(
            out,
            "   Words: {} | Suggestions: {} | Warnings: {}",
            result.word_count,
            result.count(Severity::Suggestion) + result.count(Severity::SuggestionHighPriority),
            result.count(Severity::Warning)
        );
        let _ = writeln!(
            out,
            "   Score: {} {}",
            self.create_score_bar(result.score.value),
            self.colorize_tier(result.score.tier).bold()
        );
    }

    fn write_line(&self, out: &mut String, line: &FeedbackLine) {
        match line {
            FeedbackLine::Heading { .. } => {
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", line.to_string().bold());
            }
            FeedbackLine::Note(feedback) => {
                let _ = writeln!(out, "   {} {}", self.icon(feedback.severity), self.colorize_feedback(feedback));
            }
            FeedbackLine::Verdict { tier, message } => {
                let _ = writeln!(out, "   {}", self.colorize_verdict(*tier, message));
            }
        }
    }

    fn write_adjustments(&self, out: &mut String, result: &AnalysisResult) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Score Adjustments:".bold());
        for adjustment in &result.adjustments {
            let points = format!("{:+}", adjustment.points);
            let points = if adjustment.points > 0 {
                points.green()
            } else {
                points.red()
            };
            let _ = writeln!(
                out,
                "   {:>4} {} {}",
                points,
                format!("[{}]", adjustment.category).dimmed(),
                adjustment.reason
            );
        }
    }

    /// Batch summary printed after several reports
    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(out, "{}", "Summary".bold());
        let _ = writeln!(out, "{}", "═".repeat(60));
        let _ = writeln!(
            out,
            "   Files analyzed: {}",
            stats.files_analyzed.to_string().bold()
        );
        let _ = writeln!(
            out,
            "   Average score:  {} ({})",
            stats.average_score.value.to_string().bold(),
            self.colorize_tier(stats.average_score.tier)
        );
        let _ = writeln!(
            out,
            "   Score range:    {}-{}",
            stats.lowest_score, stats.highest_score
        );
        for (tier, count) in &stats.tiers {
            let _ = writeln!(out, "   {:<31} {}", format!("{}:", tier), count);
        }
        let _ = writeln!(out);
        out
    }

    fn icon(&self, severity: Severity) -> colored::ColoredString {
        match severity {
            Severity::Good => "✓".green(),
            Severity::Info => "ℹ".blue(),
            Severity::Suggestion => "→".cyan(),
            Severity::SuggestionHighPriority => "!".yellow().bold(),
            Severity::Warning => "⚠".yellow(),
            Severity::Error => "✗".red(),
        }
    }

    fn colorize_feedback(&self, feedback: &Feedback) -> String {
        let prefix = format!("{}:", feedback.prefix());
        let prefix = match feedback.severity {
            Severity::Good => prefix.green(),
            Severity::Info => prefix.blue(),
            Severity::Suggestion => prefix.cyan(),
            Severity::SuggestionHighPriority => prefix.yellow().bold(),
            Severity::Warning => prefix.yellow(),
            Severity::Error => prefix.red().bold(),
        };
        format!("{} {}", prefix, feedback.message)
    }

    fn colorize_verdict(&self, tier: ScoreTier, message: &str) -> colored::ColoredString {
        match tier {
            ScoreTier::Excellent => message.green().italic(),
            ScoreTier::Good => message.green(),
            ScoreTier::NeedsImprovement => message.yellow(),
            ScoreTier::SignificantImprovement => message.red(),
        }
    }

    fn colorize_tier(&self, tier: ScoreTier) -> colored::ColoredString {
        let s = tier.to_string();
        match tier {
            ScoreTier::Excellent => s.green().bold(),
            ScoreTier::Good => s.green(),
            ScoreTier::NeedsImprovement => s.yellow(),
            ScoreTier::SignificantImprovement => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}/100", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 85 {
                bar.green().to_string()
            } else if score >= 50 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
