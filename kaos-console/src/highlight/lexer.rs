//! Candidate scanning for the Lua highlighter
//!
//! Each token kind is matched by its own regular expression over the whole
//! source. The scans are independent, so candidates of different kinds may
//! overlap (a keyword inside a comment, a number inside a string). Sorting
//! that out is the resolver's job.

use once_cell::sync::Lazy;
use regex::Regex;

use super::token::{Token, TokenKind};

/// Lua 5.4 reserved words
pub const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Highest `=` level recognised in long-bracket comments (`--[==[ ... ]==]`)
const MAX_COMMENT_LEVEL: usize = 4;

// Block comments first so `--[[` is not cut short by the line form.
// An unterminated block comment falls through to the line form.
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    let blocks: Vec<String> = (0..=MAX_COMMENT_LEVEL)
        .map(|level| {
            let eq = "=".repeat(level);
            format!(r"--\[{eq}\[.*?\]{eq}\]", eq = eq)
        })
        .collect();
    Regex::new(&format!(r"(?s){}|--[^\n]*", blocks.join("|"))).unwrap()
});

// Short strings never span a raw newline, so a stray quote in a comment
// cannot swallow the rest of the file. An escaped newline is allowed.
static STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\(?s:.))*"|'(?:[^'\\\n]|\\(?s:.))*'"#).unwrap()
});

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", KEYWORDS.join("|"))).unwrap()
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?)\b").unwrap()
});

// Group 1 is the callee; the parenthesis is not part of the token.
static CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\(").unwrap());

/// Scan `source` for candidates of a single kind, in source order
pub fn scan_kind(source: &str, kind: TokenKind) -> Vec<Token<'_>> {
    match kind {
        TokenKind::Comment => find_all(&COMMENT, source, kind),
        TokenKind::String => find_all(&STRING, source, kind),
        TokenKind::Keyword => find_all(&KEYWORD, source, kind),
        TokenKind::Number => find_all(&NUMBER, source, kind),
        TokenKind::Call => CALL
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| Token::new(kind, m.as_str(), m.start()))
            .collect(),
    }
}

/// Scan `source` for candidates of every kind
///
/// The result is grouped by kind in priority order (all comments, then all
/// strings, ...), each group in source order. The resolver relies on this
/// grouping to break ties between candidates starting at the same offset.
pub fn scan(source: &str) -> Vec<Token<'_>> {
    if source.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for kind in TokenKind::ALL {
        let found = scan_kind(source, kind);
        log::trace!("Scanned {} {} candidates", found.len(), kind);
        candidates.extend(found);
    }
    candidates
}

fn find_all<'a>(re: &Regex, source: &'a str, kind: TokenKind) -> Vec<Token<'a>> {
    re.find_iter(source)
        .map(|m| Token::new(kind, m.as_str(), m.start()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token<'_>]) -> Vec<String> {
        tokens.iter().map(|t| t.text.to_string()).collect()
    }

    #[test]
    fn test_line_and_block_comments() {
        let src = "x = 1 -- trailing\n--[[ block\nspans ]] y = 2";
        let comments = scan_kind(src, TokenKind::Comment);
        assert_eq!(texts(&comments), vec!["-- trailing", "--[[ block\nspans ]]"]);
        assert_eq!(comments[0].start, 6);
    }

    #[test]
    fn test_unterminated_block_comment_falls_back_to_line() {
        let src = "--[[ never closed\nlocal x";
        let comments = scan_kind(src, TokenKind::Comment);
        assert_eq!(texts(&comments), vec!["--[[ never closed"]);
    }

    #[test]
    fn test_strings_with_escapes() {
        let src = r#"print("say \"hi\"", 'it\'s')"#;
        let strings = scan_kind(src, TokenKind::String);
        assert_eq!(texts(&strings), vec![r#""say \"hi\"""#, r"'it\'s'"]);
    }

    #[test]
    fn test_string_with_escaped_newline() {
        let src = "s = \"a\\\nend\" x = 'b\\\nc'";
        let strings = scan_kind(src, TokenKind::String);
        assert_eq!(texts(&strings), vec!["\"a\\\nend\"", "'b\\\nc'"]);
        assert_eq!(strings[0].start, 4);
    }

    #[test]
    fn test_leveled_block_comments() {
        let src = "--[==[ a ]] still\n]==] x --[=[ b ]=]";
        let comments = scan_kind(src, TokenKind::Comment);
        assert_eq!(texts(&comments), vec!["--[==[ a ]] still\n]==]", "--[=[ b ]=]"]);
    }

    #[test]
    fn test_unclosed_leveled_comment_falls_back_to_line() {
        let src = "--[==[ open ]]\nlocal x";
        let comments = scan_kind(src, TokenKind::Comment);
        assert_eq!(texts(&comments), vec!["--[==[ open ]]"]);
    }

    #[test]
    fn test_unterminated_string_is_dropped() {
        let src = "local s = \"open\nlocal t = 'ok'";
        let strings = scan_kind(src, TokenKind::String);
        assert_eq!(texts(&strings), vec!["'ok'"]);
    }

    #[test]
    fn test_keywords_respect_word_boundaries() {
        let src = "local endpoint = nil if _end then end";
        let keywords = scan_kind(src, TokenKind::Keyword);
        assert_eq!(texts(&keywords), vec!["local", "nil", "if", "then", "end"]);
    }

    #[test]
    fn test_numbers() {
        let src = "a = 42 + 3.14 - 0xFF + x2";
        let numbers = scan_kind(src, TokenKind::Number);
        assert_eq!(texts(&numbers), vec!["42", "3.14", "0xFF"]);
    }

    #[test]
    fn test_call_captures_identifier_only() {
        let src = "nk.logger_info(string.format(\"%d\", n)) foo (x)";
        let calls = scan_kind(src, TokenKind::Call);
        assert_eq!(texts(&calls), vec!["logger_info", "format"]);
        assert_eq!(calls[0].start, 3);
    }

    #[test]
    fn test_scan_groups_by_priority() {
        let src = "-- 1\nfoo(2)";
        let kinds: Vec<TokenKind> = scan(src).iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Comment, TokenKind::Number, TokenKind::Number, TokenKind::Call]
        );
    }

    #[test]
    fn test_scan_empty() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_offsets_are_char_boundaries() {
        let src = "-- héllo\nprint(\"ünï\")";
        for token in scan(src) {
            assert!(src.is_char_boundary(token.start));
            assert!(src.is_char_boundary(token.end()));
            assert_eq!(&src[token.start..token.end()], token.text);
        }
    }
}
