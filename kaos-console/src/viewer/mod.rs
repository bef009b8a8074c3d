//! Script viewer
//!
//! Full-screen terminal view of a single Lua script with highlighting,
//! line numbers and the result of a syntax check.

mod app;
mod state;
mod view;

use app::{key_to_msg, update};
use state::{Msg, State};

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::highlight::HighlightTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Open the viewer on `source` and block until the user quits
pub fn run(path: PathBuf, source: String, theme: HighlightTheme) -> Result<()> {
    let state = State::new(path, source, theme);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, state);
    ratatui::restore();

    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut state: State) -> Result<()> {
    while !state.should_quit {
        let mut height = state.viewport_height;
        terminal
            .draw(|frame| {
                height = view::content_height(frame.area());
                view::render(frame, &state);
            })
            .context("Failed to draw viewer")?;

        if height != state.viewport_height {
            update(&mut state, Msg::SetViewportHeight(height));
        }

        if !event::poll(POLL_INTERVAL).context("Failed to poll terminal events")? {
            continue;
        }

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(msg) = key_to_msg(key) {
                log::trace!("Viewer message: {:?}", msg);
                update(&mut state, msg);
            }
        }
    }

    Ok(())
}
