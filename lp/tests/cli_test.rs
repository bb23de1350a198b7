//! Binary-level tests for the lessonplan CLI

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated working directory with a config that skips the template delay
struct Sandbox {
    dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new(extra_config: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = dir.path().join("lessonplan.yml");
        let yaml = format!("generator:\n  template-delay-ms: 0\n{}", extra_config);
        fs::write(&config, yaml).expect("Failed to write config");
        Self { dir, config }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("lessonplan").expect("binary should build");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env_remove("OPENAI_API_KEY")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

fn generate_args<'a>(subject: &'a str, objectives: &'a str) -> Vec<&'a str> {
    vec![
        "generate",
        "--subject",
        subject,
        "--grade",
        "9-10",
        "--duration",
        "45 minutes",
        "--objectives",
        objectives,
    ]
}

#[test]
fn test_options_lists_grades_and_durations() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("9-10 (Ages 14-15)"))
        .stdout(predicate::str::contains("multiple days"));
}

#[test]
fn test_generate_template_json() {
    let sandbox = Sandbox::new("");
    let output = sandbox
        .cmd()
        .args(generate_args("Algebra", "solve linear equations"))
        .args(["--mode", "template", "--format", "json"])
        .output()
        .expect("run lessonplan");

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(record["title"], "Exploring Algebra");
    assert!(record["procedure"]["mainActivity"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(record["objectives"][0], "solve linear equations");
}

#[test]
fn test_auto_mode_without_key_uses_templates() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(generate_args("Biology", "describe the parts of a cell"))
        .args(["--format", "document"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Exploring Biology"))
        .stdout(predicate::str::contains("## Teacher Notes"));
}

#[test]
fn test_generate_exports_document() {
    let sandbox = Sandbox::new("");
    let export_dir = sandbox.dir.path().join("exports");

    sandbox
        .cmd()
        .args(generate_args("World History", "compare two ancient empires"))
        .args(["--mode", "template", "--format", "json", "--export"])
        .arg(&export_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Lesson plan exported:"));

    let exported = export_dir.join("exploring_world_history.txt");
    let content = fs::read_to_string(exported).expect("export file should exist");
    assert!(content.starts_with("# Exploring World History\n"));
}

#[test]
fn test_invalid_input_exits_with_usage_code() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(generate_args("A", "solve linear equations"))
        .args(["--mode", "template"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input:"))
        .stderr(predicate::str::contains("Subject must be at least 2 characters."));
}

#[test]
fn test_unknown_grade_is_rejected() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args([
            "generate",
            "--subject",
            "Algebra",
            "--grade",
            "13",
            "--duration",
            "45 minutes",
            "--objectives",
            "solve linear equations",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown grade level: '13'"));
}

#[test]
fn test_remote_failure_reports_generic_error() {
    // Nothing listens on the discard port, so the request fails at connect time
    let sandbox = Sandbox::new(
        "llm:\n  api-key-env: LESSONPLAN_TEST_KEY\n  base-url: http://127.0.0.1:9\n  timeout-ms: 2000\n",
    );
    sandbox
        .cmd()
        .env("LESSONPLAN_TEST_KEY", "sk-test")
        .args(generate_args("Algebra", "solve linear equations"))
        .args(["--mode", "remote", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error generating lesson plan."));
}

#[test]
fn test_parse_saved_text_from_stdin() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(["parse", "-", "--subject", "Chemistry", "--format", "json"])
        .write_stdin("Overview: Mixing acids and bases\nMaterials:\n- Litmus paper\n- Beakers\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Chemistry Lesson Plan\""))
        .stdout(predicate::str::contains("\"Litmus paper\""));
}

#[test]
fn test_parse_missing_file_fails() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(["parse", "no-such-file.txt", "--subject", "Chemistry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read no-such-file.txt"));
}
