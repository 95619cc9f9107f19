//! JSON driver: `u-roster <request.json>`.
//!
//! Reads a [`RosterRequest`], runs the tolerance search and prints the
//! [`ScheduleResult`](u_roster::models::ScheduleResult) as pretty JSON.
//!
//! Exit codes: 0 roster found, 2 no roster (business failure), 1 I/O or
//! contract error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use u_roster::scheduler::RosterRequest;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(path: &Path) -> Result<bool, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let request: RosterRequest =
        serde_json::from_str(&text).map_err(|e| format!("invalid request: {e}"))?;
    let result = request.solve().map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(result.success)
}

fn main() -> ExitCode {
    enable_tracing();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: u-roster <request.json>");
        return ExitCode::from(1);
    };

    match run(&path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(msg) => {
            error!("{msg}");
            ExitCode::from(1)
        }
    }
}
