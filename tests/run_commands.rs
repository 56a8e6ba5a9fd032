//! Blocking runner behaviour against real child processes.
//!
//! These tests shell out through `sh -c`, so they are Unix-flavoured.
//! Timing assertions use generous tolerances; exact timeout precision is
//! platform-dependent.

use std::error::Error;
use std::io::Write;
use std::time::Instant;

use procrun::{run, run_collect, run_silent, run_with_interval, ProcessError, NO_TIMEOUT};

type TestResult = Result<(), Box<dyn Error>>;

fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn unbounded_run_returns_true_exit_code() -> TestResult {
    let code = run_silent(NO_TIMEOUT, &sh("exit 7")).await?;
    assert_eq!(code, 7);

    let code = run_silent(0, &sh("exit 0")).await?;
    assert_eq!(code, 0);

    Ok(())
}

#[tokio::test]
async fn collects_three_lines_in_order_with_exit_zero() -> TestResult {
    let out = run_collect(NO_TIMEOUT, &sh("echo one; echo two; echo three")).await?;

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.lines, vec!["one", "two", "three"]);
    Ok(())
}

#[tokio::test]
async fn long_output_keeps_order_and_loses_nothing() -> TestResult {
    let out = run_collect(NO_TIMEOUT, &sh("seq 1 200")).await?;

    assert_eq!(out.exit_code, 0);
    let expected: Vec<String> = (1..=200).map(|n| n.to_string()).collect();
    assert_eq!(out.lines, expected);
    Ok(())
}

#[tokio::test]
async fn stderr_lines_are_merged_into_the_output() -> TestResult {
    let out = run_collect(NO_TIMEOUT, &sh("echo to-stdout; echo to-stderr 1>&2")).await?;

    assert_eq!(out.exit_code, 0);
    assert!(out.lines.iter().any(|l| l == "to-stdout"));
    assert!(out.lines.iter().any(|l| l == "to-stderr"));
    assert_eq!(out.lines.len(), 2);
    Ok(())
}

#[tokio::test]
async fn fast_command_within_timeout_returns_exit_code() -> TestResult {
    let code = run_with_interval(5_000, 50, &sh("exit 3"), |_line: &str| {}).await?;
    assert_eq!(code, 3);
    Ok(())
}

#[tokio::test]
async fn default_check_interval_is_derived_from_timeout() -> TestResult {
    let code = run(5_000, &sh("echo hi"), |_line: &str| {}).await?;
    assert_eq!(code, 0);
    Ok(())
}

#[tokio::test]
async fn slow_command_hits_the_timeout() -> TestResult {
    let start = Instant::now();
    let err = run_with_interval(500, 50, &sh("sleep 2"), |_line: &str| {})
        .await
        .unwrap_err();
    let elapsed = start.elapsed();

    match err {
        ProcessError::Timeout {
            elapsed_ms,
            timeout_ms,
        } => {
            assert_eq!(timeout_ms, 500);
            assert!(elapsed_ms >= 500);
        }
        other => panic!("expected Timeout, got {other:?}"),
    }

    // Detected no later than timeout + a generous slack, well before the
    // child would have finished on its own.
    assert!(elapsed.as_millis() < 1_800, "took {elapsed:?}");
    Ok(())
}

#[tokio::test]
async fn timeout_error_is_identifiable_without_string_matching() -> TestResult {
    let err = run(300, &sh("sleep 2"), |_line: &str| {}).await.unwrap_err();
    assert!(err.is_timeout());
    Ok(())
}

#[tokio::test]
async fn nonexistent_program_fails_to_launch() {
    let command = vec!["/definitely/not/a/real/binary".to_string()];
    let err = run_silent(NO_TIMEOUT, &command).await.unwrap_err();

    match err {
        ProcessError::Launch { command, .. } => {
            assert!(command.contains("/definitely/not/a/real/binary"));
        }
        other => panic!("expected Launch, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_command_is_rejected() {
    let err = run_silent(NO_TIMEOUT, &[]).await.unwrap_err();
    assert!(matches!(err, ProcessError::EmptyCommand));
}

#[tokio::test]
async fn sink_can_write_lines_to_a_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("captured.txt");
    let mut file = std::fs::File::create(&path)?;

    let code = run(
        NO_TIMEOUT,
        &sh("echo alpha; echo beta"),
        move |line: &str| {
            writeln!(file, "{line}").expect("write captured line");
        },
    )
    .await?;

    assert_eq!(code, 0);
    let captured = std::fs::read_to_string(&path)?;
    assert_eq!(captured, "alpha\nbeta\n");
    Ok(())
}
