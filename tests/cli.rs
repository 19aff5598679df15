//! Tests for the `cicd-playground` binary.

use std::process::{Command, Output};

const VARS: &[&str] = &[
    "APP_VERSION",
    "ENVIRONMENT",
    "HOST",
    "PORT",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn run(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cicd-playground"));
    for var in VARS {
        cmd.env_remove(var);
    }
    cmd.envs(env.iter().copied()).args(args);
    cmd.output().unwrap()
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn invalid_port_is_logged_and_fails() {
    let output = run(&["check-config"], &[("PORT", "abc")]);
    let text = combined(&output);

    assert!(!output.status.success(), "{text}");
    assert!(text.contains("Failed to load configuration"), "{text}");
}

#[test]
fn port_flag_overrides_environment() {
    let output = run(&["--port", "5100", "check-config"], &[("PORT", "5000")]);
    let text = combined(&output);

    assert!(output.status.success(), "{text}");
    assert!(text.contains("0.0.0.0:5100"), "{text}");
}

#[test]
fn check_config_reports_environment_values() {
    let output = run(
        &["check-config"],
        &[("APP_VERSION", "9.9.9"), ("ENVIRONMENT", "production")],
    );
    let text = combined(&output);

    assert!(output.status.success(), "{text}");
    assert!(text.contains("9.9.9"), "{text}");
    assert!(text.contains("production"), "{text}");
}
