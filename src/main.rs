// src/main.rs

use procrun::{cli, logging, run_with_interval, ProcessError};

/// Exit code reported on timeout, matching coreutils `timeout`.
const TIMEOUT_EXIT_CODE: i32 = 124;

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            if err.is_timeout() {
                eprintln!("procrun: {err}");
                TIMEOUT_EXIT_CODE
            } else {
                eprintln!("procrun error: {err}");
                1
            }
        }
    };
    std::process::exit(code);
}

async fn run_main() -> Result<i32, ProcessError> {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("procrun: failed to initialise logging: {err:?}");
    }

    let check_interval_ms = args.check_interval_ms.unwrap_or(args.timeout_ms / 10);
    run_with_interval(
        args.timeout_ms,
        check_interval_ms,
        &args.command,
        |line: &str| println!("{line}"),
    )
    .await
}
