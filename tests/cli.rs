//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const STRONG: &str = "test-data/strong_resume.txt";
const WEAK: &str = "test-data/weak_resume.txt";

fn review_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_resume-review"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_args_returns_error_not_panic() {
    review_cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PATH").or(predicate::str::contains("path")));
}

#[test]
fn below_threshold_exit_1() {
    review_cmd()
        .arg(WEAK)
        .arg("--threshold")
        .arg("90")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("threshold: 90"));
}

#[test]
fn above_threshold_exit_0() {
    review_cmd()
        .arg(STRONG)
        .arg("--threshold")
        .arg("30")
        .assert()
        .success();
}

#[test]
fn console_output_has_sections() {
    review_cmd()
        .arg(STRONG)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Overall & Contact ---"))
        .stdout(predicate::str::contains("--- General Advice ---"))
        .stdout(predicate::str::contains("Overall Score: "));
}

#[test]
fn json_output_valid() {
    let output = review_cmd().arg(STRONG).arg("--json").output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert!(parsed["score"]["value"].is_u64());
    assert!(parsed["lines"].as_array().unwrap().len() > 10);
    assert!(parsed["rendered"][0]
        .as_str()
        .unwrap()
        .starts_with("Info: Successfully extracted text from"));
}

#[test]
fn json_directory_has_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::copy(STRONG, dir.path().join("strong.txt")).unwrap();
    fs::copy(WEAK, dir.path().join("weak.md")).unwrap();
    fs::write(dir.path().join("photo.png"), b"not a resume").unwrap();

    let output = review_cmd().arg(dir.path()).arg("--json").output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("valid JSON");
    assert_eq!(parsed["summary"]["filesAnalyzed"], 2);
    assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
}

#[test]
fn quiet_prints_one_line_per_resume() {
    let output = review_cmd()
        .arg(STRONG)
        .arg("--quiet")
        .arg("--no-color")
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    assert_eq!(s.trim().lines().count(), 1);
    assert!(s.contains("strong_resume.txt: "));
}

#[test]
fn stdin_input() {
    review_cmd()
        .arg("-")
        .arg("--quiet")
        .write_stdin("I am a person. I want a job.")
        .assert()
        .success()
        .stdout(predicate::str::contains("<text>: "));
}

#[test]
fn parallel_flag_analyzes_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    for i in 0..3 {
        fs::copy(STRONG, dir.path().join(format!("resume{}.txt", i))).unwrap();
    }
    review_cmd()
        .arg(dir.path())
        .arg("--parallel")
        .arg("--jobs")
        .arg("2")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("resume2.txt"));
}

#[test]
fn file_not_found_exit_2() {
    review_cmd()
        .arg("nonexistent.pdf")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn unsupported_file_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("resume.odt");
    fs::write(&path, "Jane Doe").unwrap();
    review_cmd()
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "Unsupported file type. Please upload a PDF or DOCX file.",
        ));
}

#[test]
fn empty_directory_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    review_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No resume files found"));
}

#[test]
fn config_threshold_applies() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::copy(WEAK, dir.path().join("weak.txt")).unwrap();
    fs::write(dir.path().join(".resumerc.json"), r#"{ "threshold": 95 }"#).unwrap();
    review_cmd()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn config_allow_words_silence_spelling() {
    let dir = tempfile::TempDir::new().unwrap();
    let resume = dir.path().join("resume.txt");
    fs::write(&resume, "Built Zorblax dashboards for everyone.").unwrap();
    fs::write(dir.path().join(".resumerc.json"), r#"{ "allowWords": ["zorblax"] }"#).unwrap();

    let output = review_cmd().arg(&resume).arg("--json").output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    assert!(!s.contains("potential spelling errors"));
}

#[test]
fn invalid_config_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::copy(STRONG, dir.path().join("strong.txt")).unwrap();
    fs::write(dir.path().join(".resumerc.json"), "{ not json").unwrap();
    review_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON in config"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".resumerc.json");
    review_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--threshold")
        .arg("65")
        .assert()
        .success();
    assert!(config_path.exists(), ".resumerc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["threshold"], 65);
    assert!(parsed["ignore"].is_array());
}

#[test]
fn init_keeps_existing_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".resumerc.json");
    fs::write(&config_path, r#"{ "threshold": 10 }"#).unwrap();
    review_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        r#"{ "threshold": 10 }"#
    );
}
