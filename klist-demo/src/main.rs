mod app;
mod config;
mod error;
mod paths;
mod preview;
mod sample;
mod screens;
mod theme;
mod toast;

use std::fs::{self, File};
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::{DemoConfig, USAGE};
use crate::error::Result;

fn init_logging(level: LevelFilter) -> Result<()> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    log::debug!("logging to {}", path.display());
    Ok(())
}

fn run(config: DemoConfig) -> Result<()> {
    init_logging(config.log_level)?;
    match config.preview {
        Some(size) => preview::run(config.screen, size),
        None => app::run(config.screen),
    }
}

fn main() -> ExitCode {
    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
