mod app;

use app::cli::usage;
use app::error::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match app::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(CliError::HelpRequested) => {}
                Some(cli_err) => eprintln!("{}", cli_err),
                None => eprintln!("Error: {:#}", err),
            }
            if err
                .downcast_ref::<CliError>()
                .is_some_and(CliError::shows_usage)
            {
                print!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}
