//! Analyzer module - resume analysis engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{AggregateStats, AnalysisEngine, AnalysisError, GENERAL_ADVICE};
pub use scoring::ScoreCalculator;
