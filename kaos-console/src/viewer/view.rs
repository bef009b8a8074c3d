//! View rendering for the script viewer

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::state::State;

/// Rows available for script lines inside `area`
pub fn content_height(area: Rect) -> usize {
    // borders (2) + status bar (1)
    area.height.saturating_sub(3) as usize
}

pub fn render(frame: &mut Frame, state: &State) {
    let [main, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let title = format!(" Lua Script - {} ", state.display_name());
    let body = Paragraph::new(visible_lines(state, content_height(frame.area())))
        .block(Block::bordered().title(title));
    frame.render_widget(body, main);

    frame.render_widget(Paragraph::new(status_line(state)), status);
}

/// Script lines in the viewport, prefixed with a line-number gutter
fn visible_lines(state: &State, height: usize) -> Vec<Line<'static>> {
    let gutter_width = state.line_count().to_string().len();
    let error_line = state.error_line();

    state
        .lines
        .iter()
        .enumerate()
        .skip(state.scroll)
        .take(height)
        .map(|(idx, line)| {
            let number = idx + 1;
            let gutter_style = if Some(number) == error_line {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(Span::styled(format!("{:>width$} │ ", number, width = gutter_width), gutter_style));
            spans.extend(line.spans.iter().cloned());
            Line::from(spans)
        })
        .collect()
}

fn status_line(state: &State) -> Line<'static> {
    let mut spans = Vec::new();

    match &state.validation {
        Some(result) if result.is_valid => {
            spans.push(Span::styled("Valid", Style::default().fg(Color::Green)));
        }
        Some(result) => {
            let detail = result
                .first_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string());
            spans.push(Span::styled(
                format!("Invalid: {}", detail),
                Style::default().fg(Color::Red),
            ));
        }
        None => {
            spans.push(Span::styled("Not validated", Style::default().fg(Color::DarkGray)));
        }
    }

    if let Some(message) = &state.status_message {
        let color = if message.is_error { Color::Red } else { Color::Yellow };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.text.clone(), Style::default().fg(color)));
    }

    let last_visible = (state.scroll + state.viewport_height).min(state.line_count());
    spans.push(Span::styled(
        format!(
            "  lines {}-{}/{}  [q]uit [r]eload [e]rror [g/G] top/bottom",
            state.scroll + 1,
            last_visible,
            state.line_count()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}
