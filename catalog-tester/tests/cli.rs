use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "catalog-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_catalog-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("review-roundtrip"));
}

#[test]
fn cli_runs_all_scenarios_in_memory_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_catalog-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--target",
            "memory",
            "--scenarios",
            "all",
            "--kinds",
            "all",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Catalog Automated Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = results.as_array().expect("array");
    assert_eq!(runs.len(), 18);
    assert!(runs.iter().all(|run| run["passed"] == true));
}

#[test]
fn cli_rejects_unknown_kind() {
    let exe = env!("CARGO_BIN_EXE_catalog-tester");
    let output = Command::new(exe)
        .args(["--kinds", "comics"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown catalog kind: comics"));
}

#[test]
fn cli_http_target_reports_failure_when_api_is_down() {
    let exe = env!("CARGO_BIN_EXE_catalog-tester");
    let output = Command::new(exe)
        .args([
            "--target",
            "http",
            "--base-url",
            "http://127.0.0.1:9",
            "--kinds",
            "books",
            "--timeout",
            "2",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("| smoke | books | ❌ FAIL |"));
}
