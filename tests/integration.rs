// Integration tests for the atscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes,
// stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a Command for the atscore binary.
fn atscore() -> Command {
    Command::cargo_bin("atscore").expect("binary should exist")
}

const SAMPLE_RESUME: &str = "summary\n\
seasoned backend engineer\n\
email: jane@doe.dev | +1 555-123-4567\n\
github.com/janedoe | linkedin.com/in/janedoe | portfolio: janedoe.dev\n\
\n\
experience\n\
led a team of 8 engineers, reduced deploy time by 45%\n\
developed billing services in python and go, saved $120,000 annually\n\
\n\
projects\n\
implemented a react dashboard for 2,000 users\n\
\n\
skills\n\
python, java, sql, docker, kubernetes, aws, git, jira\n\
\n\
education\n\
bachelor of science, state university\n\
\n\
certifications\n\
certified kubernetes administrator\n\
\n\
achievements\n\
increased customer retention 12%\n";

fn write_resume(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

#[test]
fn cli_version_flag() {
    atscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("atscore"));
}

#[test]
fn cli_help_flag() {
    atscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resume ATS scoring"));
}

#[test]
fn analyze_requires_path() {
    atscore()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_missing_path_exits_with_runtime_failure() {
    atscore()
        .args(["analyze", "/nonexistent/resume.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn analyze_refuses_pdf_media_type() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.pdf", "%PDF-1.4");

    atscore()
        .args(["analyze", path.to_str().expect("utf-8 path")])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported media type"));
}

#[test]
fn analyze_strong_resume_exits_success() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", SAMPLE_RESUME);

    atscore()
        .args(["analyze", path.to_str().expect("utf-8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ATS Score: "))
        .stdout(predicate::str::contains("Detailed Feedback:"))
        .stdout(predicate::str::contains("AI-Powered Suggestions:"))
        .stdout(predicate::str::contains("Great resume!"));
}

#[test]
fn analyze_weak_resume_exits_with_low_score_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", "plain words with nothing to score\n");

    atscore()
        .args(["analyze", path.to_str().expect("utf-8 path")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("complete resume overhaul"));
}

#[test]
fn analyze_blank_resume_exits_with_blank_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", "   \n  \n");

    atscore()
        .args(["analyze", path.to_str().expect("utf-8 path")])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("❌ Error:"));
}

#[test]
fn analyze_json_format_prints_breakdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", SAMPLE_RESUME);

    atscore()
        .args([
            "analyze",
            path.to_str().expect("utf-8 path"),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Technical Skills\""))
        .stdout(predicate::str::contains("\"breakdown\""));
}

#[test]
fn analyze_picks_up_rubric_config_next_to_input() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(
        &dir,
        "resume.txt",
        "skills\nelixir, erlang and otp in production\n",
    );
    fs::write(
        dir.path().join("atscore.toml"),
        "[skills.extra]\nProgramming = [\"elixir\", \"erlang\"]\n",
    )
    .expect("config should write");

    atscore()
        .args([
            "analyze",
            path.to_str().expect("utf-8 path"),
            "--format",
            "json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("elixir"));
}

#[test]
fn analyze_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", SAMPLE_RESUME);
    fs::write(
        dir.path().join("atscore.toml"),
        "[skills.extra]\nDatabases = [\"redis\"]\n",
    )
    .expect("config should write");

    atscore()
        .args(["analyze", path.to_str().expect("utf-8 path")])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn report_writes_feedback_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", SAMPLE_RESUME);
    let output = dir.path().join("feedback.txt");

    atscore()
        .args([
            "report",
            path.to_str().expect("utf-8 path"),
            "--output",
            output.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("feedback report written to"));

    let written = fs::read_to_string(&output).expect("report should exist");
    assert!(written.starts_with("ATS Score: "));
    assert!(written.contains("Detailed Feedback:"));
    assert!(written.contains("AI-Powered Suggestions:"));
}

#[test]
fn report_defaults_to_resume_feedback_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_resume(&dir, "resume.txt", SAMPLE_RESUME);

    atscore()
        .current_dir(dir.path())
        .args(["report", path.to_str().expect("utf-8 path")])
        .assert()
        .success();

    assert!(dir.path().join("resume_feedback.txt").exists());
}
