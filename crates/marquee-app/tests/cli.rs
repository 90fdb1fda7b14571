//! Tests for the `marquee` binary's output streams.

use std::process::Command;

fn marquee() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
    for key in ["RUST_LOG", "LOG_FORMAT", "TMDB_TIMEOUT_SECS", "MARQUEE_ORIENTATION", "MARQUEE_ALERT_USER"] {
        cmd.env_remove(key);
    }
    cmd.current_dir(std::env::temp_dir())
        .env("TMDB_API_KEY", "cli-key")
        .env("TMDB_BASE_URL", "http://127.0.0.1:1/3")
        .env("TMDB_CONNECT_TIMEOUT_SECS", "2");
    cmd
}

#[test]
fn test_json_logs_stay_off_stdout() {
    let output = marquee().env("LOG_FORMAT", "json").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty(), "stdout was {stdout}");
    assert!(stderr.contains("\"level\":\"ERROR\""), "stderr was {stderr}");
    assert!(stderr.contains("Failed getting configuration"));
}

#[test]
fn test_failure_log_carries_transport_cause() {
    let output = marquee().env("LOG_FORMAT", "json").output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    let error_line = stderr
        .lines()
        .find(|line| line.contains("\"level\":\"ERROR\""))
        .unwrap();

    assert!(error_line.contains("error sending request"), "line was {error_line}");
    assert!(error_line.to_lowercase().contains("connect"), "line was {error_line}");
    assert!(!error_line.contains("cli-key"));
}

#[test]
fn test_invalid_position_exits_with_usage_error() {
    let output = marquee().arg("not-a-number").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
