//! Lua script handling for server runtime modules
//!
//! Scripts are the Lua modules the game server loads to register RPCs,
//! match handlers and hooks. The console only reads them: it lists them,
//! checks that they compile, and shows them highlighted.

mod validate;

pub use validate::{ValidationError, ValidationResult, check_syntax};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A Lua script found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub path: PathBuf,
    pub size: u64,
}

impl ScriptEntry {
    /// File name for display
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Check whether a path looks like a Lua script
pub fn is_lua_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("lua"))
        .unwrap_or(false)
}

/// List Lua scripts under `dir`, recursing into subdirectories, sorted by path
pub fn list_scripts(dir: &Path) -> Result<Vec<ScriptEntry>> {
    if !dir.is_dir() {
        anyhow::bail!("Scripts directory does not exist: {}", dir.display());
    }

    let mut scripts = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current)
            .with_context(|| format!("Failed to read directory: {}", current.display()))?;

        for entry in entries {
            let entry = entry.with_context(|| format!("Failed to read entry in {}", current.display()))?;
            let path = entry.path();
            let metadata = entry
                .metadata()
                .with_context(|| format!("Failed to stat {}", path.display()))?;

            if metadata.is_dir() {
                pending.push(path);
            } else if is_lua_file(&path) {
                scripts.push(ScriptEntry {
                    path,
                    size: metadata.len(),
                });
            }
        }
    }

    scripts.sort_by(|a, b| a.path.cmp(&b.path));
    log::debug!("Found {} scripts under {}", scripts.len(), dir.display());
    Ok(scripts)
}

/// Read a script file, or stdin when `path` is `-`
pub fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)
            .context("Failed to read script from stdin")?;
        return Ok(content);
    }

    if !path.exists() {
        anyhow::bail!("Script file does not exist: {}", path.display());
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))
}
