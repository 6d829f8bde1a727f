//! eggshell - inventory and combination tracking for the egg assembly event

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = eggshell_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
