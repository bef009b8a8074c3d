//! `view` command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use is_terminal::IsTerminal;

use crate::cli::Context;
use crate::lua::read_script;
use crate::permissions::{self, Permission};

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Script to open
    pub file: PathBuf,
}

/// Handle the view command
pub fn handle(ctx: &Context, args: ViewArgs) -> Result<ExitCode> {
    permissions::require(ctx.role, Permission::ViewScripts)?;

    if args.file == PathBuf::from("-") {
        anyhow::bail!("The viewer needs a file path; use 'highlight' to render stdin");
    }
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The viewer needs an interactive terminal; use 'highlight' when piping");
    }

    let source = read_script(&args.file)?;
    log::info!("Opening viewer for {}", args.file.display());
    crate::viewer::run(args.file, source, ctx.theme.clone())?;

    Ok(ExitCode::SUCCESS)
}
