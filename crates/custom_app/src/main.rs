//! Consumer entry point: greets once through the overriding service.

use custom_app::application;
use hello_starter::{init_logging, StarterConfig, StarterResult};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=custom_app status=error error={err}");
            eprintln!("custom_app: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> StarterResult<()> {
    let config = StarterConfig::load_from_env()?;
    init_logging(&config.logging)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    application(config).run(&args)?;
    Ok(())
}
