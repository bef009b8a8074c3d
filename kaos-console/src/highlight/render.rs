//! Span rendering for highlighted Lua source
//!
//! [`render`] partitions the source into plain and tagged spans. The other
//! functions turn a span list into something a particular surface can show:
//! ratatui lines for the viewer, ANSI escapes for the terminal, or inline
//! tags for debugging.

use colored::Colorize;
use ratatui::text::{Line, Span as StyledSpan};
use serde::Serialize;

use super::theme::HighlightTheme;
use super::token::{Token, TokenKind};

/// A contiguous piece of rendered output
///
/// `kind` is `None` for untagged text between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text: &'a str,
    pub kind: Option<TokenKind>,
}

impl<'a> Span<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, kind: None }
    }

    pub fn tagged(kind: TokenKind, text: &'a str) -> Self {
        Self { text, kind: Some(kind) }
    }
}

/// Interleave plain gaps with the resolved tokens
///
/// Tokens must be sorted and disjoint. Concatenating the returned span texts
/// yields `source` exactly.
pub fn render<'a>(source: &'a str, tokens: &[Token<'a>]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0;

    for token in tokens {
        if token.start > cursor {
            spans.push(Span::plain(&source[cursor..token.start]));
        }
        spans.push(Span::tagged(token.kind, token.text));
        cursor = token.end();
    }

    if cursor < source.len() {
        spans.push(Span::plain(&source[cursor..]));
    }

    spans
}

/// Split spans at every `\n` into per-line span lists
///
/// A source with N newlines produces N + 1 lines. The newline characters
/// themselves are not part of any span; a span crossing a line break (a
/// block comment, say) is cut into one piece per line.
pub fn split_lines<'a>(spans: &[Span<'a>]) -> Vec<Vec<Span<'a>>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();

    for span in spans {
        let mut pieces = span.text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                current.push(Span { text: piece, kind: span.kind });
            }
            if pieces.peek().is_some() {
                lines.push(std::mem::take(&mut current));
            }
        }
    }

    lines.push(current);
    lines
}

/// Split spans into styled ratatui lines
///
/// Trailing carriage returns are dropped so CRLF scripts display cleanly.
pub fn to_lines(spans: &[Span<'_>], theme: &HighlightTheme) -> Vec<Line<'static>> {
    split_lines(spans)
        .into_iter()
        .map(|line| {
            line.into_iter()
                .filter_map(|span| {
                    let text = span.text.trim_end_matches('\r');
                    (!text.is_empty())
                        .then(|| StyledSpan::styled(text.to_string(), theme.style(span.kind)))
                })
                .collect::<Vec<_>>()
        })
        .map(Line::from)
        .collect()
}

/// Render spans as a string with ANSI color escapes
pub fn to_ansi(spans: &[Span<'_>], theme: &HighlightTheme) -> String {
    let mut out = String::new();
    for span in spans {
        match span.kind.and_then(|kind| theme.ansi(kind).map(|color| (kind, color))) {
            Some((kind, color)) => {
                let painted = span.text.color(color);
                let painted = if kind == TokenKind::Keyword { painted.bold() } else { painted };
                out.push_str(&painted.to_string());
            }
            None => out.push_str(span.text),
        }
    }
    out
}

/// Render spans with inline `<kind>...</kind>` markers
pub fn to_tags(spans: &[Span<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        match span.kind {
            Some(kind) => {
                out.push('<');
                out.push_str(kind.display_name());
                out.push('>');
                out.push_str(span.text);
                out.push_str("</");
                out.push_str(kind.display_name());
                out.push('>');
            }
            None => out.push_str(span.text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_gaps() {
        let source = "local x = 5";
        let tokens = vec![
            Token::new(TokenKind::Keyword, "local", 0),
            Token::new(TokenKind::Number, "5", 10),
        ];
        let spans = render(source, &tokens);
        assert_eq!(
            spans,
            vec![
                Span::tagged(TokenKind::Keyword, "local"),
                Span::plain(" x = "),
                Span::tagged(TokenKind::Number, "5"),
            ]
        );
    }

    #[test]
    fn test_render_no_tokens() {
        assert_eq!(render("x = y", &[]), vec![Span::plain("x = y")]);
        assert!(render("", &[]).is_empty());
    }

    #[test]
    fn test_to_lines_splits_on_newlines() {
        let theme = HighlightTheme::default();
        let spans = vec![
            Span::tagged(TokenKind::Comment, "--[[ a\nb ]]"),
            Span::plain("\r\nx\n"),
        ];
        let lines = to_lines(&spans, &theme);
        assert_eq!(lines.len(), 4);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["--[[ a", "b ]]", "x", ""]);
        assert_eq!(lines[0].spans[0].style, theme.style(Some(TokenKind::Comment)));
    }

    #[test]
    fn test_split_lines_cuts_multiline_spans() {
        let spans = vec![
            Span::plain("a "),
            Span::tagged(TokenKind::Comment, "--[[ x\ny ]]"),
            Span::plain(" b\n"),
        ];
        let lines = split_lines(&spans);
        assert_eq!(
            lines,
            vec![
                vec![Span::plain("a "), Span::tagged(TokenKind::Comment, "--[[ x")],
                vec![Span::tagged(TokenKind::Comment, "y ]]"), Span::plain(" b")],
                vec![],
            ]
        );
    }

    #[test]
    fn test_to_lines_empty_source() {
        let lines = to_lines(&[], &HighlightTheme::default());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_to_ansi_keeps_text() {
        // Holds with or without color, whatever the global override is
        let escapes = regex::Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        let spans = vec![Span::tagged(TokenKind::Keyword, "end"), Span::plain(" -- x")];
        let out = to_ansi(&spans, &HighlightTheme::default());
        assert_eq!(escapes.replace_all(&out, ""), "end -- x");
    }

    #[test]
    fn test_to_tags() {
        let spans = vec![Span::tagged(TokenKind::Call, "print"), Span::plain("(1)")];
        assert_eq!(to_tags(&spans), "<call>print</call>(1)");
    }

    #[test]
    fn test_spans_serialize() {
        let spans = vec![Span::tagged(TokenKind::String, "'a'"), Span::plain(" ")];
        let json = serde_json::to_string(&spans).unwrap();
        assert_eq!(json, r#"[{"text":"'a'","kind":"string"},{"text":" ","kind":null}]"#);
    }
}
