//! `highlight` command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::cli::Context;
use crate::highlight::{self, HighlightTheme, Span};
use crate::lua::read_script;
use crate::permissions::{self, Permission};

#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Script to highlight (`-` reads stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ansi)]
    pub format: OutputFormat,

    /// Prefix each line with its number
    #[arg(short = 'n', long)]
    pub line_numbers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal colors
    Ansi,
    /// Span list as JSON
    Json,
    /// Inline `<kind>...</kind>` markers
    Tags,
}

/// Handle the highlight command
pub fn handle(ctx: &Context, args: HighlightArgs) -> Result<ExitCode> {
    permissions::require(ctx.role, Permission::ViewScripts)?;

    let source = read_script(&args.file)?;
    let output = format_output(&source, args.format, args.line_numbers, &ctx.theme)?;

    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct NumberedLine<'a> {
    line: usize,
    spans: Vec<Span<'a>>,
}

/// Render `source` in the requested format
pub fn format_output(
    source: &str,
    format: OutputFormat,
    line_numbers: bool,
    theme: &HighlightTheme,
) -> Result<String> {
    let spans = highlight::highlight(source);

    if format == OutputFormat::Json {
        let json = if line_numbers {
            let lines: Vec<NumberedLine<'_>> = highlight::split_lines(&spans)
                .into_iter()
                .enumerate()
                .map(|(idx, spans)| NumberedLine { line: idx + 1, spans })
                .collect();
            serde_json::to_string_pretty(&lines)
        } else {
            serde_json::to_string_pretty(&spans)
        };
        return json.context("Failed to serialize spans");
    }

    let paint = |spans: &[Span<'_>]| match format {
        OutputFormat::Tags => highlight::to_tags(spans),
        _ => highlight::to_ansi(spans, theme),
    };

    if !line_numbers {
        return Ok(paint(spans.as_slice()));
    }

    let lines = highlight::split_lines(&spans);
    let width = lines.len().to_string().len();
    let numbered: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let gutter = format!("{:>width$} │ ", idx + 1, width = width);
            if format == OutputFormat::Ansi {
                format!("{}{}", gutter.dimmed(), paint(line.as_slice()))
            } else {
                format!("{}{}", gutter, paint(line.as_slice()))
            }
        })
        .collect();

    Ok(numbered.join("\n"))
}
