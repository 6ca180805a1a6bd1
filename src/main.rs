//! resume-review: Resume Quality Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use resume_review::analyzer::AnalysisEngine;
use resume_review::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use resume_review::reporter::{ConsoleReporter, JsonReporter};
use resume_review::AnalysisResult;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// resume-review: rule-based resume quality analyzer
#[derive(Parser, Debug)]
#[command(name = "resume-review")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resume file, directory of resumes, or "-" for stdin
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per resume)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (score adjustments, debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .resumerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analyze resumes in parallel (default for more than 10 files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .resumerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,resume_review=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose);

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let path = args
        .path
        .clone()
        .context("a resume path is required when not using a subcommand")?;
    let from_stdin = path.as_os_str() == "-";

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = if from_stdin {
        cwd.as_path()
    } else if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // CLI flags override config file
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);

    let engine = AnalysisEngine::from_config(&config).context("Failed to load dictionary")?;

    let (results, had_errors) = if from_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read resume text from stdin")?;
        (vec![engine.analyze_text(&text)?], false)
    } else {
        let files = collect_resume_files(&path, &config)?;
        if files.is_empty() {
            eprintln!("{}: No resume files found", "Warning".yellow());
            return Ok(ExitCode::from(2));
        }

        if let Some(jobs) = args.jobs {
            rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
                .ok();
        }

        if args.parallel || files.len() > 10 {
            analyze_files_parallel(&engine, &files, args.quiet)
        } else {
            analyze_files_sequential(&engine, &files, args.quiet)
        }
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = AnalysisEngine::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }

        if args.quiet {
            for result in &results {
                reporter.report_quiet(result);
            }
        } else if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    if let Some(threshold) = config.threshold {
        let failing: Vec<&AnalysisResult> = results
            .iter()
            .filter(|r| r.score.value < threshold)
            .collect();
        if !failing.is_empty() {
            for result in failing {
                eprintln!(
                    "{}: {} scored {} (threshold: {})",
                    "Failed".red().bold(),
                    result.label(),
                    result.score.value,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(70);

    let json = format!(
        r#"{{
  "threshold": {},
  "ignore": [
    "**/drafts/**",
    "**/archive/**"
  ],
  "extensions": ["pdf", "docx", "txt", "md"],
  "allowWords": []
}}
"#,
        threshold_value
    );

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}

fn collect_resume_files(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    // An explicitly named file is analyzed whatever its extension
    if path.is_file() {
        if let Some(set) = &ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let extensions = config.get_extensions();
    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_resume_file(file_path, &extensions) {
            continue;
        }
        if let Some(set) = &ignore_set {
            if is_ignored(file_path, set) {
                tracing::debug!(path = %file_path.display(), "ignored by config");
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_resume_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    // Office lock files and hidden files
    if name.starts_with("~$") || name.starts_with('.') {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

fn report_failure(file: &Path, error: &dyn std::fmt::Display, quiet: bool) {
    tracing::warn!(path = %file.display(), %error, "analysis failed");
    if !quiet {
        eprintln!(
            "{}: Failed to analyze {}: {}",
            "Error".red(),
            file.display(),
            error
        );
    }
}

/// Analyze files one after another
fn analyze_files_sequential(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    quiet: bool,
) -> (Vec<AnalysisResult>, bool) {
    let mut had_errors = false;
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        match engine.analyze_file(file) {
            Ok(result) => results.push(result),
            Err(e) => {
                had_errors = true;
                report_failure(file, &e, quiet);
            }
        }
    }

    (results, had_errors)
}

/// Analyze files in parallel
fn analyze_files_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    quiet: bool,
) -> (Vec<AnalysisResult>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.analyze_file(file) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                report_failure(file, &e, quiet);
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}
