//! Config schema and deserialization

use crate::extract::SUPPORTED_EXTENSIONS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root config structure for .resumerc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum score threshold (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File extensions collected when analyzing a directory
    /// (default: pdf, docx, txt, md, text)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Extra terms the spell checker should accept (product names, jargon)
    #[serde(default)]
    pub allow_words: Vec<String>,

    /// Extra word list, one word per line. Relative paths are resolved
    /// against the directory of the config file that names it.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.dictionary.is_none() {
            self.dictionary = base.dictionary;
        }
        if self.extensions.is_empty() {
            self.extensions = base.extensions;
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        let mut all_words = base.allow_words;
        for word in self.allow_words.drain(..) {
            if !all_words.contains(&word) {
                all_words.push(word);
            }
        }
        self.allow_words = all_words;
    }

    /// Resolve a relative dictionary path against `dir`
    pub(crate) fn resolve_paths(&mut self, dir: &Path) {
        if let Some(dictionary) = &self.dictionary {
            if dictionary.is_relative() {
                self.dictionary = Some(dir.join(dictionary));
            }
        }
    }

    /// Lowercased extensions without the leading dot
    pub fn get_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect()
        }
    }
}
