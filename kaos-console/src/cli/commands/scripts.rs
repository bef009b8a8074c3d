//! `scripts` command handler

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::cli::Context;
use crate::lua::{ScriptEntry, check_syntax, list_scripts, read_script};
use crate::permissions::{self, Permission};

#[derive(Args, Debug)]
pub struct ScriptsArgs {
    /// Directory to scan (defaults to `scripts_dir` from the config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Handle the scripts command
pub fn handle(ctx: &Context, args: ScriptsArgs) -> Result<ExitCode> {
    permissions::require(ctx.role, Permission::ViewScripts)?;

    let dir = match args.dir.or_else(|| ctx.config.scripts_dir.clone()) {
        Some(dir) => dir,
        None => anyhow::bail!(
            "No scripts directory configured. Pass --dir or set scripts_dir in the config file"
        ),
    };

    let scripts = list_scripts(&dir)?;
    if scripts.is_empty() {
        println!("No Lua scripts found in {}", dir.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", format!("Scripts in {}", dir.display()).bold());
    for script in &scripts {
        println!("{}", describe(&dir, script)?);
    }
    println!("{} scripts", scripts.len());

    Ok(ExitCode::SUCCESS)
}

const NAME_COLUMN: usize = 40;

fn describe(root: &Path, script: &ScriptEntry) -> Result<String> {
    let status = match read_script(&script.path) {
        Ok(source) => {
            if check_syntax(&source, &script.name())?.is_valid {
                "ok".green()
            } else {
                "syntax error".red()
            }
        }
        Err(e) => {
            log::warn!("{:#}", e);
            "unreadable".yellow()
        }
    };

    Ok(format!(
        "  {} {:>8}  {}",
        pad_name(&relative_name(root, &script.path), NAME_COLUMN),
        format_size(script.size),
        status
    ))
}

/// Pad `name` to `width` terminal columns
fn pad_name(name: &str, width: usize) -> String {
    let pad = width.saturating_sub(name.width());
    format!("{}{}", name, " ".repeat(pad))
}

fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }

    #[test]
    fn test_pad_name_counts_columns() {
        assert_eq!(pad_name("rpc.lua", 10), "rpc.lua   ");
        // two columns per CJK character
        assert_eq!(pad_name("对战.lua", 10), "对战.lua  ");
        assert_eq!(pad_name("a_very_long_name.lua", 4), "a_very_long_name.lua");
    }

    #[test]
    fn test_unreadable_script_is_listed() {
        let dir = std::env::temp_dir().join(format!("kaos-console-scripts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("latin1.lua");
        std::fs::write(&path, b"-- caf\xe9\nreturn {}").unwrap();
        let entry = ScriptEntry { path, size: 17 };

        let line = describe(&dir, &entry).unwrap();
        assert!(line.contains("latin1.lua"));
        assert!(line.contains("unreadable"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_relative_name() {
        let root = Path::new("/srv/modules");
        assert_eq!(relative_name(root, Path::new("/srv/modules/match/lobby.lua")), "match/lobby.lua");
        assert_eq!(relative_name(root, Path::new("/elsewhere/x.lua")), "/elsewhere/x.lua");
    }
}
