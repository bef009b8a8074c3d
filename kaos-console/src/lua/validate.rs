//! Syntax checking for Lua scripts
//!
//! Scripts are compiled but never run, so checking a module that calls into
//! the server runtime at load time is safe.

use anyhow::{Context, Result};
use mlua::{Lua, LuaOptions, StdLib};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::highlight::{self, TokenKind};

/// Result of script validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the script compiled
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ValidationError>,
    /// Validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Create a failed validation result with a single error
    pub fn failure(error: ValidationError) -> Self {
        ValidationResult {
            is_valid: false,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// Add a warning
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// First error, if any
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Line number (if available)
    pub line: Option<usize>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Compile `script` and report whether it is syntactically valid
///
/// `chunk_name` shows up in compiler messages; pass the file name.
/// An `Err` means the interpreter itself could not be set up, not that the
/// script is broken.
pub fn check_syntax(script: &str, chunk_name: &str) -> Result<ValidationResult> {
    if script.trim().is_empty() {
        return Ok(ValidationResult::failure(ValidationError::new("Script is empty")));
    }

    // No standard libraries: nothing is executed
    let lua = Lua::new_with(StdLib::NONE, LuaOptions::default())
        .context("Failed to create Lua runtime")?;

    match lua.load(script).set_name(chunk_name).into_function() {
        Ok(_) => {
            log::debug!("{}: syntax ok", chunk_name);
            let mut result = ValidationResult::success();
            if !has_top_level_return(script) {
                result = result.with_warning(
                    "No top-level return - the server will not see anything this module defines",
                );
            }
            Ok(result)
        }
        Err(mlua::Error::SyntaxError { message, .. }) => {
            log::debug!("{}: syntax error: {}", chunk_name, message);
            Ok(ValidationResult::failure(parse_lua_error(&message)))
        }
        Err(e) => Ok(ValidationResult::failure(parse_lua_error(&e.to_string()))),
    }
}

// A `return` keyword in column 0 stands in for "returns at top level".
// Returns inside strings or comments don't count.
fn has_top_level_return(script: &str) -> bool {
    highlight::tokenize(script).iter().any(|token| {
        token.kind == TokenKind::Keyword
            && token.text == "return"
            && (token.start == 0 || script.as_bytes()[token.start - 1] == b'\n')
    })
}

// Compiler messages look like `[string "name"]:5: message` or `name:5: message`
static LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*?:(\d+):\s*(.*)$").unwrap());

/// Parse Lua error message to extract line numbers
fn parse_lua_error(error: &str) -> ValidationError {
    let first_line = error.lines().next().unwrap_or(error);

    if let Some(captures) = LOCATION.captures(first_line) {
        if let Ok(line) = captures[1].parse::<usize>() {
            return ValidationError::new(captures[2].to_string()).with_line(line);
        }
    }

    ValidationError::new(first_line.to_string())
}
