use std::io::Write;
use std::process::Command;

fn hello_cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hello_cli"));
    command.env_remove("HELLO_STARTER_CONFIG");
    command
}

#[test]
fn prints_default_greeting_exactly_once() {
    let output = hello_cli().output().expect("hello_cli should start");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, "Hello from Default\n");
}

#[test]
fn excluding_default_is_startup_fatal() {
    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    write!(config, r#"{{"autoconfigure":{{"exclude":["hello_service"]}}}}"#)
        .expect("write config");

    let output = hello_cli()
        .env("HELLO_STARTER_CONFIG", config.path())
        .output()
        .expect("hello_cli should start");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no component registered"));
}

#[test]
fn invalid_config_exits_with_failure() {
    let mut config = tempfile::NamedTempFile::new().expect("temp config");
    write!(config, r#"{{"logging":{{"level":"shout"}}}}"#).expect("write config");

    let output = hello_cli()
        .env("HELLO_STARTER_CONFIG", config.path())
        .output()
        .expect("hello_cli should start");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("configuration error"));
}
