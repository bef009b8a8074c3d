use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod config;
mod highlight;
mod lua;
mod permissions;
mod viewer;

use cli::Cli;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Set up env_logger; `RUST_LOG` takes precedence over `-v` flags
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
