//! `check` command handler

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::Context;
use crate::lua::{ValidationError, ValidationResult, check_syntax, read_script};
use crate::permissions::{self, Permission};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scripts to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Handle the check command
///
/// Exits with status 1 if any script fails to compile.
pub fn handle(ctx: &Context, args: CheckArgs) -> Result<ExitCode> {
    permissions::require(ctx.role, Permission::ViewScripts)?;

    let mut failures = 0;
    for (file, result) in args.files.iter().zip(check_files(&args.files)?) {
        println!("{}", describe(file, &result));
        if !result.is_valid {
            failures += 1;
        }
    }

    if failures > 0 {
        log::info!("{} of {} scripts failed the syntax check", failures, args.files.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Check every file, reporting unreadable ones as invalid instead of stopping
fn check_files(files: &[PathBuf]) -> Result<Vec<ValidationResult>> {
    files.iter().map(|file| check_file(file)).collect()
}

fn check_file(path: &Path) -> Result<ValidationResult> {
    let source = match read_script(path) {
        Ok(source) => source,
        Err(e) => {
            log::warn!("Skipping unreadable script {}: {:#}", path.display(), e);
            return Ok(ValidationResult::failure(ValidationError::new(format!(
                "Cannot read script: {:#}",
                e
            ))));
        }
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    check_syntax(&source, &name)
}

/// One-line report for a checked script
pub fn describe(path: &Path, result: &ValidationResult) -> String {
    if result.is_valid {
        let mut line = format!("{} {}", "✓".green(), path.display());
        for warning in &result.warnings {
            line.push_str(&format!("\n  {} {}", "warning:".yellow(), warning));
        }
        return line;
    }

    let detail = result
        .errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} {}: {}", "✗".red(), path.display(), detail.red())
}
