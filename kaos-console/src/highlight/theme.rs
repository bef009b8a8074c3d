//! Colors for highlighted token kinds

use std::str::FromStr;

use anyhow::{Context, Result};
use ratatui::style::{Color, Modifier, Style};

use super::token::TokenKind;
use crate::config::ThemeConfig;

/// Resolved colors for each token kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTheme {
    pub comment: Color,
    pub string: Color,
    pub keyword: Color,
    pub number: Color,
    pub call: Color,
    pub plain: Color,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            comment: Color::DarkGray,
            string: Color::Green,
            keyword: Color::Magenta,
            number: Color::Yellow,
            call: Color::Cyan,
            plain: Color::Reset,
        }
    }
}

impl HighlightTheme {
    /// Build a theme from config, falling back to defaults for unset colors
    ///
    /// Color names accept anything ratatui parses: named colors ("red",
    /// "lightblue"), hex ("#ff8800") or a palette index ("208").
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            comment: parse_color("comment", config.comment.as_deref(), defaults.comment)?,
            string: parse_color("string", config.string.as_deref(), defaults.string)?,
            keyword: parse_color("keyword", config.keyword.as_deref(), defaults.keyword)?,
            number: parse_color("number", config.number.as_deref(), defaults.number)?,
            call: parse_color("call", config.call.as_deref(), defaults.call)?,
            plain: parse_color("plain", config.plain.as_deref(), defaults.plain)?,
        })
    }

    pub fn color(&self, kind: Option<TokenKind>) -> Color {
        match kind {
            Some(TokenKind::Comment) => self.comment,
            Some(TokenKind::String) => self.string,
            Some(TokenKind::Keyword) => self.keyword,
            Some(TokenKind::Number) => self.number,
            Some(TokenKind::Call) => self.call,
            None => self.plain,
        }
    }

    /// Style for a span of the given kind (`None` = plain text)
    pub fn style(&self, kind: Option<TokenKind>) -> Style {
        let style = Style::default().fg(self.color(kind));
        match kind {
            Some(TokenKind::Keyword) => style.add_modifier(Modifier::BOLD),
            Some(TokenKind::Comment) => style.add_modifier(Modifier::ITALIC),
            _ => style,
        }
    }

    /// Terminal color for a token kind, if it has one
    pub fn ansi(&self, kind: TokenKind) -> Option<colored::Color> {
        to_ansi_color(self.color(Some(kind)))
    }
}

fn parse_color(name: &str, value: Option<&str>, default: Color) -> Result<Color> {
    match value {
        Some(raw) => Color::from_str(raw.trim())
            .ok()
            .with_context(|| format!("Invalid color '{}' for theme.{}", raw, name)),
        None => Ok(default),
    }
}

/// Map a ratatui color onto the terminal palette used by `colored`
///
/// Palette indices have no `colored` equivalent and render uncolored.
pub fn to_ansi_color(color: Color) -> Option<colored::Color> {
    use colored::Color as Ansi;

    let mapped = match color {
        Color::Reset | Color::Indexed(_) => return None,
        Color::Black => Ansi::Black,
        Color::Red => Ansi::Red,
        Color::Green => Ansi::Green,
        Color::Yellow => Ansi::Yellow,
        Color::Blue => Ansi::Blue,
        Color::Magenta => Ansi::Magenta,
        Color::Cyan => Ansi::Cyan,
        Color::Gray => Ansi::White,
        Color::DarkGray => Ansi::BrightBlack,
        Color::LightRed => Ansi::BrightRed,
        Color::LightGreen => Ansi::BrightGreen,
        Color::LightYellow => Ansi::BrightYellow,
        Color::LightBlue => Ansi::BrightBlue,
        Color::LightMagenta => Ansi::BrightMagenta,
        Color::LightCyan => Ansi::BrightCyan,
        Color::White => Ansi::BrightWhite,
        Color::Rgb(r, g, b) => Ansi::TrueColor { r, g, b },
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_overrides_and_defaults() {
        let config = ThemeConfig {
            keyword: Some("lightblue".to_string()),
            number: Some("#ff8800".to_string()),
            ..ThemeConfig::default()
        };
        let theme = HighlightTheme::from_config(&config).unwrap();
        assert_eq!(theme.keyword, Color::LightBlue);
        assert_eq!(theme.number, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.comment, HighlightTheme::default().comment);
    }

    #[test]
    fn test_from_config_rejects_unknown_color() {
        let config = ThemeConfig {
            call: Some("not-a-color".to_string()),
            ..ThemeConfig::default()
        };
        let err = HighlightTheme::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("theme.call"));
    }

    #[test]
    fn test_style_modifiers() {
        let theme = HighlightTheme::default();
        assert!(theme.style(Some(TokenKind::Keyword)).add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.style(None), Style::default().fg(Color::Reset));
    }

    #[test]
    fn test_ansi_mapping() {
        assert_eq!(to_ansi_color(Color::Reset), None);
        assert_eq!(to_ansi_color(Color::Cyan), Some(colored::Color::Cyan));
        assert_eq!(
            to_ansi_color(Color::Rgb(1, 2, 3)),
            Some(colored::Color::TrueColor { r: 1, g: 2, b: 3 })
        );
    }
}
