use std::process::ExitCode;

use cash_ledger::{app, logging};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let settings = match app::settings_from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init_logging(&settings.log_level) {
        eprintln!("warning: logging not initialised: {e}");
    }

    match app::run(&args, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "cash_ledger failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
