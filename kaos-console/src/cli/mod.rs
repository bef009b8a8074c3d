//! Command-line interface

pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

use crate::config::{ColorMode, Config, default_config_path};
use crate::highlight::HighlightTheme;
use crate::permissions::Role;

use commands::{CheckArgs, HighlightArgs, RolesArgs, ScriptsArgs, ViewArgs};

#[derive(Parser, Debug)]
#[command(name = "kaos-console", version, about = "KaosNet operator console tooling")]
pub struct Cli {
    /// Act as this role instead of the one in the config file
    #[arg(long, global = true, value_enum)]
    pub role: Option<Role>,

    /// Config file to use
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a Lua script with syntax highlighting
    Highlight(HighlightArgs),
    /// Check Lua scripts for syntax errors
    Check(CheckArgs),
    /// Open a Lua script in the interactive viewer
    View(ViewArgs),
    /// List Lua scripts in the scripts directory
    Scripts(ScriptsArgs),
    /// Show the role permission table
    Roles(RolesArgs),
}

/// Settings shared by every command, resolved from config and flags
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub role: Role,
    pub theme: HighlightTheme,
}

impl Context {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        let config = Config::load_from(&path)?;
        let role = cli.role.unwrap_or(config.role);
        let theme = HighlightTheme::from_config(&config.theme)?;

        let color_mode = if cli.no_color { ColorMode::Never } else { config.color };
        colored::control::set_override(color_mode.enabled(std::io::stdout().is_terminal()));

        log::debug!("Acting as role '{}'", role);
        Ok(Self { config, role, theme })
    }
}

/// Dispatch the parsed command line
pub fn run(cli: Cli) -> Result<ExitCode> {
    let ctx = Context::resolve(&cli)?;

    match cli.command {
        Commands::Highlight(args) => commands::highlight::handle(&ctx, args),
        Commands::Check(args) => commands::check::handle(&ctx, args),
        Commands::View(args) => commands::view::handle(&ctx, args),
        Commands::Scripts(args) => commands::scripts::handle(&ctx, args),
        Commands::Roles(args) => commands::roles::handle(&ctx, args),
    }
}
