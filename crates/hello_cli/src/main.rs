//! Library-only entry point.
//!
//! # Responsibility
//! - Start an application with no component overrides.
//! - Print the starter's default greeting exactly once on stdout.

use hello_starter::{init_logging, Application, HelloRunner, StarterConfig, StarterResult};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=hello_cli status=error error={err}");
            eprintln!("hello_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> StarterResult<()> {
    let config = StarterConfig::load_from_env()?;
    init_logging(&config.logging)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    Application::new(config)
        .with_default_auto_configurations()
        .with_runner(Box::new(HelloRunner::new()))
        .run(&args)?;
    Ok(())
}
