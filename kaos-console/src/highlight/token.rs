//! Token types produced by the Lua highlighter

use serde::Serialize;

/// Category of a highlighted token
///
/// Variants are declared in resolution priority order: when two candidates
/// start at the same offset, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Number,
    Call,
}

impl TokenKind {
    /// All kinds, highest priority first
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Number,
        TokenKind::Call,
    ];

    /// Get display name for the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Call => "call",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A tagged slice of the source
///
/// `start` is a byte offset into the source the token was scanned from and
/// always falls on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { text, kind, start }
    }

    /// Byte offset one past the last byte of the token
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end() {
        let token = Token::new(TokenKind::Keyword, "local", 6);
        assert_eq!(token.end(), 11);
    }

    #[test]
    fn test_priority_order_matches_declaration() {
        let mut kinds = TokenKind::ALL.to_vec();
        kinds.sort();
        assert_eq!(kinds, TokenKind::ALL.to_vec());
        assert!(TokenKind::Comment < TokenKind::Call);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TokenKind::Keyword).unwrap();
        assert_eq!(json, "\"keyword\"");
    }
}
