use std::process::ExitCode;

use simplecalc::errors::{get_exit_code, EXIT_SUCCESS};

fn main() -> ExitCode {
    match simplecalc::cli::run() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(get_exit_code(&e))
        }
    }
}
