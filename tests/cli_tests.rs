//! Integration tests for the tfgen CLI
//!
//! These tests verify CLI commands work correctly end-to-end. None of them
//! touch the network: the only generate path exercised is the
//! unsupported-resource-type early return.

use std::process::Command;

/// Get the path to the tfgen binary
fn tfgen_binary() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test executable name
    path.pop(); // Remove deps directory

    // In debug mode, binary is at target/debug/tfgen
    path.push("tfgen");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    path
}

/// Run tfgen and return output
fn run_tfgen(args: &[&str]) -> std::process::Output {
    Command::new(tfgen_binary())
        .args(args)
        .env_remove("CLOUDFLARE_API_TOKEN")
        .env_remove("CLOUDFLARE_API_KEY")
        .env_remove("CLOUDFLARE_EMAIL")
        .env_remove("CLOUDFLARE_ZONE_ID")
        .env_remove("CLOUDFLARE_ACCOUNT_ID")
        .output()
        .expect("Failed to execute tfgen")
}

#[test]
fn test_tfgen_version() {
    let output = run_tfgen(&["--version"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tfgen"));
}

#[test]
fn test_tfgen_help() {
    let output = run_tfgen(&["--help"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("list"));
}

#[test]
fn test_tfgen_generate_help() {
    let output = run_tfgen(&["generate", "--help"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--resource-type"));
    assert!(stdout.contains("--zone"));
    assert!(stdout.contains("--account"));
}

#[test]
fn test_tfgen_list() {
    let output = run_tfgen(&["list"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cloudflare_record"));
    assert!(stdout.contains("cloudflare_workers_kv_namespace"));
}

#[test]
fn test_tfgen_generate_unsupported_resource_type() {
    // Runs without credentials: the registry check happens first
    let output = run_tfgen(&["generate", "--resource-type", "notreal"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"notreal\" is not yet supported for automatic generation"));
}

#[test]
fn test_tfgen_generate_without_credentials_fails() {
    let output = run_tfgen(&[
        "generate",
        "--resource-type",
        "cloudflare_record",
        "--zone",
        "0da42c8d2132a9ddaf714f9e7c920711",
    ]);

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No credentials provided"));
}
