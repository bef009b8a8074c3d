//! Lua syntax highlighting for the script viewer
//!
//! The pipeline has three stages:
//!
//! 1. [`lexer::scan`] runs one regex per token kind over the source and
//!    collects possibly-overlapping candidates.
//! 2. [`resolve::resolve`] orders candidates by offset and drops any that
//!    start inside an already accepted token. Priority on ties is
//!    comment > string > keyword > number > call.
//! 3. [`render::render`] fills the gaps between tokens with plain spans.
//!
//! The result is a lossless partition of the input: joining every span's
//! text gives back the original source. Malformed input never fails, it
//! just produces fewer tokens.
//!
//! # Example
//!
//! ```ignore
//! let spans = highlight("-- hi\nlocal x = 5");
//! assert_eq!(spans[0].kind, Some(TokenKind::Comment));
//! ```

pub mod lexer;
pub mod render;
pub mod resolve;
pub mod theme;
pub mod token;

pub use render::{Span, render, split_lines, to_ansi, to_lines, to_tags};
pub use theme::HighlightTheme;
pub use token::{Token, TokenKind};

/// Scan and resolve `source` into ordered, non-overlapping tokens
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let candidates = lexer::scan(source);
    let candidate_count = candidates.len();
    let tokens = resolve::resolve(candidates);
    log::debug!(
        "Highlighted {} bytes: {} candidates, {} tokens",
        source.len(),
        candidate_count,
        tokens.len()
    );
    tokens
}

/// Highlight `source` into display spans
pub fn highlight(source: &str) -> Vec<Span<'_>> {
    let tokens = tokenize(source);
    render(source, &tokens)
}
