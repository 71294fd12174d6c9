use std::process::ExitCode;

use featls::cli::ExitStatus;

fn main() -> ExitCode {
    match featls::cli::run_cli() {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
