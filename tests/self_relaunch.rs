//! Relaunching the current executable as a supervised child.
//!
//! Inside `cargo test`, the current executable is this test binary, so the
//! relaunch helpers are exercised by asking the child instance to run one
//! specific marker test and checking its output from the parent.

use std::error::Error;

use procrun::{run_self, run_self_with_opts, run_self_with_sink, LineCollector, NO_TIMEOUT};

type TestResult = Result<(), Box<dyn Error>>;

const MARKER: &str = "PROCRUN_RELAUNCH_MARKER";

/// Entry point for the relaunched child instance: prints the marker the
/// parent tests look for. Harmless when run as part of the normal suite.
#[test]
fn child_prints_marker() {
    println!("{MARKER}");
}

fn child_args() -> Vec<String> {
    // Test-harness filter selecting only `child_prints_marker`, with output
    // streamed so the parent can capture the marker line.
    ["child_prints_marker", "--exact", "--nocapture"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[tokio::test]
async fn relaunched_child_reports_marker_and_exit_zero() -> TestResult {
    let out = run_self(NO_TIMEOUT, &child_args()).await?;

    assert_eq!(out.exit_code, 0);
    assert!(
        out.lines.iter().any(|l| l.contains(MARKER)),
        "marker line missing from {:?}",
        out.lines
    );
    Ok(())
}

#[tokio::test]
async fn extra_options_are_passed_through_to_the_child() -> TestResult {
    // `--test-threads=1` lands right after the executable; the harness
    // accepts it anywhere, so this just proves the opts path works.
    let opts = vec!["--test-threads=1".to_string()];
    let out = run_self_with_opts(NO_TIMEOUT, &opts, &child_args()).await?;

    assert_eq!(out.exit_code, 0);
    assert!(out.lines.iter().any(|l| l.contains(MARKER)));
    Ok(())
}

#[tokio::test]
async fn sink_variant_streams_child_lines() -> TestResult {
    let collector = LineCollector::new();
    let code = run_self_with_sink(NO_TIMEOUT, &[], &child_args(), collector.clone()).await?;

    assert_eq!(code, 0);
    assert!(collector.lines().iter().any(|l| l.contains(MARKER)));
    Ok(())
}
