//! Tests for the appdocs binary: check, list, render, version

#![cfg(unix)]

use crate::support::fixtures::APPS_OUTPUT;
use crate::support::harness::TestHarness;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// CHECK COMMAND TESTS
// ============================================================================

#[test]
fn test_check_passes() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["check"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("verify installable applications: 3 applications documented"));
}

#[test]
fn test_check_quiet_prints_nothing() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["--quiet", "check"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_check_verbose_names_the_check() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["check", "--verbose"]).unwrap();

    let out = stdout(&output);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("verify installable applications"));
    assert!(out.contains("sh apps.sh"));
    assert!(out.contains("region <a type=\"apps\">"));
}

#[test]
fn test_check_mismatch_exits_with_failure() {
    let harness = TestHarness::new(
        "readme_marker",
        "actionlint https://github.com/actionlint/actionlint\ngh https://cli.github.com\n",
    );

    let output = harness.run(&["check"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("installable applications do not match"));
    assert!(err.contains("+ alphavet https://github.com/alphavet/alphavet"));
}

#[test]
fn test_check_order_mismatch_exits_with_failure() {
    let harness = TestHarness::new(
        "readme_marker",
        "alphavet https://github.com/alphavet/alphavet\nactionlint https://github.com/actionlint/actionlint\ngh https://cli.github.com\n",
    );

    let output = harness.run(&["check"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("first difference at position 1"));
}

#[test]
fn test_check_malformed_document() {
    let harness = TestHarness::new("readme_missing_link", APPS_OUTPUT);

    let output = harness.run(&["check"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("List item at README.md:6 contains no link"));
}

#[test]
fn test_check_failing_command() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["check", "--", "sh", "-c", "exit 7"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Command 'sh -c exit 7' failed"));
}

#[test]
fn test_check_heading_override() {
    let harness = TestHarness::new("readme_heading", APPS_OUTPUT);

    let output = harness
        .run(&["check", "--heading", "Installable applications"])
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_check_unknown_marker() {
    let harness = TestHarness::new("readme_heading", APPS_OUTPUT);

    let output = harness.run(&["check"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("README.md has no region <a type=\"apps\">"));
}

#[test]
fn test_check_custom_label() {
    let harness = TestHarness::with_config(
        "readme_marker",
        APPS_OUTPUT,
        "---\ncommand: [sh, apps.sh]\nlabel: options section\n---\n",
    );

    let output = harness.run(&["check"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("options section: 3 applications documented"));
}

#[test]
fn test_check_invalid_config() {
    let harness = TestHarness::with_config(
        "readme_marker",
        APPS_OUTPUT,
        "---\nregion:\n  marker: apps\n  heading: Apps\n---\n",
    );

    let output = harness.run(&["check"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("mutually exclusive"));
}

// ============================================================================
// LIST AND RENDER COMMAND TESTS
// ============================================================================

#[test]
fn test_list_installable() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["list", "installable"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "actionlint https://github.com/actionlint/actionlint\nalphavet https://github.com/alphavet/alphavet\ngh https://cli.github.com\n"
    );
}

#[test]
fn test_list_documented_json() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["list", "documented", "--json"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let apps: Vec<appdocs::App> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(apps.len(), 3);
    assert_eq!(apps[2], appdocs::App::new("gh", "https://cli.github.com"));
}

#[test]
fn test_render_markdown_list() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["render"]).unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "- [actionlint](https://github.com/actionlint/actionlint)\n- [alphavet](https://github.com/alphavet/alphavet)\n- [gh](https://cli.github.com)\n"
    );
}

#[test]
fn test_version() {
    let harness = TestHarness::new("readme_marker", APPS_OUTPUT);

    let output = harness.run(&["version"]).unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("appdocs "));
}
