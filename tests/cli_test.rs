use std::process::{Command, Output};

fn run_cli(port: Option<&str>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_port-resolver"));
    command.args(args).env_remove("RUST_LOG");
    match port {
        Some(value) => command.env("PORT", value),
        None => command.env_remove("PORT"),
    };
    command.output().expect("failed to run port-resolver")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_prints_default_port() {
    let output = run_cli(None, &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8080\n");
}

#[test]
fn test_prints_port_from_environment() {
    let output = run_cli(Some("3000"), &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3000\n");
}

#[test]
fn test_empty_port_prints_default() {
    let output = run_cli(Some(""), &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8080\n");
}

#[test]
fn test_json_output() {
    let output = run_cli(Some("08080"), &["--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["port"], "08080");
    assert_eq!(value["source"], "environment");

    let output = run_cli(None, &["--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["port"], "8080");
    assert_eq!(value["source"], "default");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = run_cli(Some("abc"), &["--verbose"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "abc\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using port abc from PORT"));
}

#[test]
fn test_invalid_flag_fails() {
    let output = run_cli(None, &["--format", "yaml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_exits_with_error() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_port-resolver"))
        .env("PORT", "3000")
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run port-resolver");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
}
