//! State and messages for the script viewer

use std::path::PathBuf;

use ratatui::text::Line;

use crate::highlight::{self, HighlightTheme};
use crate::lua::{ValidationResult, check_syntax};

/// State for the script viewer
pub struct State {
    /// Script being shown
    pub path: PathBuf,
    pub source: String,
    /// Highlighted source, one entry per source line
    pub lines: Vec<Line<'static>>,
    /// Result of the last syntax check (`None` if the check couldn't run)
    pub validation: Option<ValidationResult>,
    /// Index of the first visible line
    pub scroll: usize,
    pub viewport_height: usize,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub theme: HighlightTheme,
}

impl State {
    pub fn new(path: PathBuf, source: String, theme: HighlightTheme) -> Self {
        let mut state = Self {
            path,
            source: String::new(),
            lines: Vec::new(),
            validation: None,
            scroll: 0,
            viewport_height: 20, // Reasonable default until the first frame reports the real one
            status_message: None,
            should_quit: false,
            theme,
        };
        state.set_source(source);
        state
    }

    /// Replace the script content, re-highlighting and re-validating it
    pub fn set_source(&mut self, source: String) {
        let spans = highlight::highlight(&source);
        self.lines = highlight::to_lines(&spans, &self.theme);

        let name = self.display_name();
        self.validation = match check_syntax(&source, &name) {
            Ok(result) => Some(result),
            Err(e) => {
                log::warn!("Syntax check unavailable for {}: {:#}", name, e);
                self.status_message = Some(StatusMessage::error(format!("Syntax check failed: {}", e)));
                None
            }
        };

        self.source = source;
        self.clamp_scroll();
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Largest valid scroll offset for the current viewport
    pub fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(self.viewport_height.max(1))
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// 1-based line of the first syntax error, if any
    pub fn error_line(&self) -> Option<usize> {
        self.validation
            .as_ref()
            .and_then(|v| v.first_error())
            .and_then(|e| e.line)
    }
}

/// Status message displayed in the UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Messages for the script viewer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    // Navigation
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    Top,
    Bottom,
    JumpToError,
    SetViewportHeight(usize),

    // Script operations
    Reload,

    Quit,
}
