use std::io::Write;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aero-cli"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_atmosphere_table() {
    let output = run_cli(&["atmosphere"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STANDARD ATMOSPHERE"), "Should contain table header");
    assert!(stdout.contains("500"), "Should report the default sample count");
}

#[test]
fn test_cli_atmosphere_csv() {
    let output = run_cli(&["atmosphere", "--samples", "5", "--output", "csv"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "Header plus one row per sample: {}", stdout);
    assert!(lines[1].starts_with("0.00,288.1500"));
    assert!(lines[5].starts_with("86000.00,"));
}

#[test]
fn test_cli_atmosphere_json() {
    let output = run_cli(&["atmosphere", "-n", "3", "-o", "json"]);

    assert!(output.status.success(), "Command should succeed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(value["points"].as_array().map(|p| p.len()), Some(3));
}

#[test]
fn test_cli_state() {
    let output = run_cli(&["state", "--altitude", "11000", "-o", "json"]);

    assert!(output.status.success(), "Command should succeed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    let temperature = value["temperature"].as_f64().unwrap();
    assert!((temperature - 216.65).abs() < 1e-9);
}

#[test]
fn test_cli_state_out_of_range() {
    let output = run_cli(&["state", "--altitude", "-500"]);
    assert!(!output.status.success(), "Negative altitude should fail");

    let output = run_cli(&["state", "--altitude", "90000"]);
    assert!(!output.status.success(), "Altitude above 86 km should fail");
}

#[test]
fn test_cli_layers() {
    let output = run_cli(&["layers"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for label in ["Troposphere", "Tropopause", "Stratopause", "Mesosphere (2)"] {
        assert!(stdout.contains(label), "Should list {}", label);
    }
}

#[test]
fn test_cli_performance_default() {
    let output = run_cli(&["performance"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STEADY LEVEL FLIGHT"));
    assert!(stdout.contains("Aspect ratio"));
}

#[test]
fn test_cli_performance_explicit_speeds_csv() {
    let output = run_cli(&[
        "performance",
        "--speeds", "30.48,45.72,76.2,91.44,106.68",
        "--output", "csv",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6, "Header plus five speeds: {}", stdout);
    assert!(stdout.lines().nth(1).unwrap().starts_with("30.4800,"));
}

#[test]
fn test_cli_performance_zero_airspeed_fails() {
    let output = run_cli(&["performance", "--speeds", "0,40"]);

    assert!(!output.status.success(), "Zero airspeed should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Airspeed"), "Should explain the failure: {}", stderr);
}

#[test]
fn test_cli_performance_zero_parasite_drag_fails() {
    let output = run_cli(&["performance", "--cd0", "0", "-o", "json"]);

    assert!(!output.status.success(), "CD0 of zero should fail");
    assert!(output.stdout.is_empty(), "No report should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("zero_lift_drag"), "Should name the parameter: {}", stderr);
}

#[test]
fn test_cli_atmosphere_plot_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("isa.svg");
    let output = run_cli(&["atmosphere", "-n", "50", "--plot", path.to_str().unwrap()]);

    assert!(output.status.success(), "Command should succeed: {}", String::from_utf8_lossy(&output.stderr));
    let svg = std::fs::read_to_string(&path).expect("Plot should be written");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Tropopause"), "Band labels should be drawn");
}

#[test]
fn test_cli_performance_plot_svg() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tr.svg");
    let output = run_cli(&["performance", "-n", "20", "--plot", path.to_str().unwrap()]);

    assert!(output.status.success(), "Command should succeed: {}", String::from_utf8_lossy(&output.stderr));
    let metadata = std::fs::metadata(&path).expect("Plot should be written");
    assert!(metadata.len() > 0);
}

#[test]
fn test_cli_performance_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    write!(
        file,
        r#"{{ "aircraft": {{ "weight": 12000.0 }}, "sweep": {{ "samples": 4 }} }}"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let output = run_cli(&["performance", "--config", &path, "--weight", "11000", "-o", "json"]);

    assert!(output.status.success(), "Command should succeed");
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(value["parameters"]["weight"], 11000.0);
    assert_eq!(value["points"].as_array().map(|p| p.len()), Some(4));
}

#[test]
fn test_cli_performance_density_conflicts_with_altitude() {
    let output = run_cli(&["performance", "--density", "1.0", "--altitude", "1000"]);
    assert!(!output.status.success(), "Conflicting density sources should fail");
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("atmosphere"), "Should list atmosphere command");
    assert!(stdout.contains("performance"), "Should list performance command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_invalid_command() {
    let output = run_cli(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_missing_required_args() {
    let output = run_cli(&["state"]);

    assert!(!output.status.success(), "Should fail with missing altitude");
}
