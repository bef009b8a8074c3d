//! Update logic for the script viewer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Msg, State, StatusMessage};

/// Map a key press to a viewer message
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Msg::Quit),
            KeyCode::Char('d') => Some(Msg::PageDown),
            KeyCode::Char('u') => Some(Msg::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Msg::ScrollUp(1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Msg::ScrollDown(1)),
        KeyCode::PageUp => Some(Msg::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Msg::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Msg::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Msg::Bottom),
        KeyCode::Char('e') => Some(Msg::JumpToError),
        KeyCode::Char('r') => Some(Msg::Reload),
        _ => None,
    }
}

pub fn update(state: &mut State, msg: Msg) {
    match msg {
        Msg::ScrollUp(n) => {
            state.scroll = state.scroll.saturating_sub(n);
        }

        Msg::ScrollDown(n) => {
            state.scroll = state.scroll.saturating_add(n);
            state.clamp_scroll();
        }

        Msg::PageUp => {
            let page = state.viewport_height.max(1);
            state.scroll = state.scroll.saturating_sub(page);
        }

        Msg::PageDown => {
            let page = state.viewport_height.max(1);
            state.scroll = state.scroll.saturating_add(page);
            state.clamp_scroll();
        }

        Msg::Top => {
            state.scroll = 0;
        }

        Msg::Bottom => {
            state.scroll = state.max_scroll();
        }

        Msg::JumpToError => match state.error_line() {
            Some(line) => {
                // Put the error a few lines below the top edge when possible
                state.scroll = line.saturating_sub(1).saturating_sub(2);
                state.clamp_scroll();
            }
            None => {
                state.status_message = Some(StatusMessage::info("No syntax errors"));
            }
        },

        Msg::SetViewportHeight(height) => {
            state.viewport_height = height;
            state.clamp_scroll();
        }

        Msg::Reload => match crate::lua::read_script(&state.path) {
            Ok(source) => {
                log::info!("Reloaded {}", state.path.display());
                state.status_message = None;
                state.set_source(source);
                if state.status_message.is_none() {
                    state.status_message = Some(StatusMessage::info("Reloaded"));
                }
            }
            Err(e) => {
                log::error!("Failed to reload {}: {:#}", state.path.display(), e);
                state.status_message = Some(StatusMessage::error(format!("Failed to reload: {}", e)));
            }
        },

        Msg::Quit => {
            state.should_quit = true;
        }
    }
}
