//! Integration tests for the `kcluster` binary.

use indoc::indoc;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary inside `dir` with a clean environment for config and logging
fn kcluster(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kcluster"))
        .args(args)
        .current_dir(dir)
        .env_remove("KCLUSTER_MAX_ITERATIONS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute kcluster")
}

fn parse_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be a JSON report")
}

#[test]
fn test_run_json_file_reports_assignments_and_log() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("points.json");
    fs::write(
        &input,
        "[[0, 0], [1, 0], [0, 1], [10, 10], [11, 10], [10, 11]]",
    )
    .unwrap();

    let output = kcluster(
        temp.path(),
        &["run", "points.json", "-k", "2", "-a", "kmedoids", "-f", "json"],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = parse_json(&output);
    assert_eq!(json["assignments"], serde_json::json!([0, 0, 0, 1, 1, 1]));
    assert_eq!(
        json["representatives"],
        serde_json::json!([[0.0, 0.0], [10.0, 10.0]])
    );
    assert_eq!(json["termination"], "converged");
    assert_eq!(json["log"].as_array().unwrap().len(), 3);
    assert_eq!(json["log"][0]["algorithm"], "kmedoids");
    assert_eq!(json["metadata"]["clusters"], 2);
}

#[test]
fn test_run_reads_json_points_from_stdin() {
    let temp = TempDir::new().unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_kcluster"))
        .args(["run", "-", "-k", "2", "-f", "json"])
        .current_dir(temp.path())
        .env_remove("KCLUSTER_MAX_ITERATIONS")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn kcluster");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"[[0, 0], [1, 0], [0, 1], [10, 10], [11, 10], [10, 11]]")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = parse_json(&output);
    assert_eq!(json["metadata"]["source"], "<stdin>");
    assert_eq!(json["assignments"], serde_json::json!([0, 0, 0, 1, 1, 1]));
    assert_eq!(json["termination"], "converged");
}

#[test]
fn test_run_toml_input_with_budget() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("points.toml"),
        indoc! {r#"
            points = [
                [0.0, 0.0],
                [1.0, 0.0],
                [0.0, 1.0],
                [10.0, 10.0],
                [11.0, 10.0],
                [10.0, 11.0],
            ]
        "#},
    )
    .unwrap();

    let output = kcluster(
        temp.path(),
        &["run", "points.toml", "-k", "2", "--max-iterations", "1", "-f", "json"],
    );
    assert!(output.status.success());

    let json = parse_json(&output);
    assert_eq!(json["termination"], "budget_exhausted");
    assert_eq!(json["log"].as_array().unwrap().len(), 1);
    assert_eq!(json["metadata"]["max_iterations"], 1);
}

#[test]
fn test_run_demo_markdown_to_file() {
    let temp = TempDir::new().unwrap();

    let output = kcluster(
        temp.path(),
        &["run", "--demo", "-a", "medoid", "-f", "markdown", "-o", "report.md"],
    );
    assert!(output.status.success());

    let report = fs::read_to_string(temp.path().join("report.md")).unwrap();
    assert!(report.contains("# KMedoids Clustering Report"));
    assert!(report.contains("## Medoids"));
    assert!(report.contains("### Iteration 1"));
    assert!(report.contains("[85.00, 80.00]"));
}

#[test]
fn test_run_terminal_output_lists_iterations() {
    let temp = TempDir::new().unwrap();

    let output = kcluster(temp.path(), &["run", "--demo", "--plain"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("KMEANS CLUSTERING REPORT"));
    assert!(stdout.contains("Iteration 1"));
    assert!(stdout.contains("Initial Centroids:"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".kcluster.toml"),
        indoc! {r#"
            [clustering]
            algorithm = "kmedoids"
            clusters = 2

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let output = kcluster(temp.path(), &["run", "--demo"]);
    assert!(output.status.success());

    let json = parse_json(&output);
    assert_eq!(json["metadata"]["algorithm"], "kmedoids");
    assert_eq!(json["metadata"]["clusters"], 2);
    assert_eq!(json["representatives"].as_array().unwrap().len(), 2);
}

#[test]
fn test_explicit_config_path_overrides_discovery() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".kcluster.toml"),
        "[clustering]\nclusters = 4\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("custom.toml"),
        indoc! {r#"
            [clustering]
            clusters = 2

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let output = kcluster(temp.path(), &["run", "--demo", "--config", "custom.toml"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = parse_json(&output);
    assert_eq!(json["metadata"]["clusters"], 2);
    assert_eq!(json["representatives"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    let output = kcluster(temp.path(), &["run", "--demo", "--config", "absent.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.toml"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_cluster_count_fails() {
    let temp = TempDir::new().unwrap();

    let output = kcluster(temp.path(), &["run", "--demo", "-k", "10", "-f", "json"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid cluster count 10"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    let output = kcluster(temp.path(), &["run", "missing.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn test_init_creates_config_and_refuses_overwrite() {
    let temp = TempDir::new().unwrap();

    let first = kcluster(temp.path(), &["init"]);
    assert!(first.status.success());
    let contents = fs::read_to_string(temp.path().join(".kcluster.toml")).unwrap();
    assert!(contents.contains("[clustering]"));

    let second = kcluster(temp.path(), &["init"]);
    assert!(!second.status.success());

    let forced = kcluster(temp.path(), &["init", "--force"]);
    assert!(forced.status.success());
}
