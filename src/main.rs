//! Login form console - Entry Point
//!
//! Type into the email and password fields, submit, and see either the
//! first validation error or the echoed credentials.

use std::process::ExitCode;

use log::info;
use tokio::io::{BufReader, stdin, stdout};

use login_form::config::{AppConfig, DEFAULT_CONFIG_PATH};
use login_form::console::{ConsoleState, handler::HELP_TEXT, run_session};
use login_form::error::{AppError, handlers};
use login_form::utils::logging::setup_logging;
use login_form::validation::Validator;

async fn run() -> Result<(), AppError> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load(&config_path)?;

    setup_logging(&config.log_level);
    info!(
        "Starting login form console (min password length {})",
        config.min_password_length
    );

    let mut state = ConsoleState::new(Validator::from_config(&config));
    println!("{}", HELP_TEXT);

    run_session(
        BufReader::new(stdin()),
        stdout(),
        &mut state,
        config.max_line_length,
    )
    .await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Logging may not be up yet if the config failed to load
            setup_logging(login_form::config::DEFAULT_LOG_LEVEL);
            handlers::handle_error(&err);
            ExitCode::from(handlers::exit_code(&err))
        }
    }
}
