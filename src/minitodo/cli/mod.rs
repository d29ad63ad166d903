//! The interactive front end: the only code that touches the terminal.
//!
//! [`run`] is the event loop. Every iteration draws a fresh frame, blocks for
//! one key and hands the decoded command to the API. When the session asks
//! for text, the frame is redrawn with the prompt and one line is read from
//! the prompt row.

pub mod keys;
pub mod logging;
pub mod styles;
pub mod terminal;

use std::io;

use chrono::Utc;
use minitodo::api::TodoApi;
use minitodo::session::Step;
use minitodo::store::DataStore;
use minitodo::view::{self, Frame, FrameOptions};
use tracing::debug;

use terminal::Screen;

/// Runs until the user quits. Saving on quit happens inside the API, before
/// this returns; releasing the screen is left to the caller.
pub fn run<S: DataStore, T: Screen>(
    api: &mut TodoApi<S>,
    screen: &mut T,
    due_soon_days: i64,
) -> io::Result<()> {
    loop {
        draw(api, screen, due_soon_days)?;
        let key = screen.read_key()?;
        let Some(command) = keys::command_for(&key) else {
            continue;
        };

        match api.handle(command) {
            Step::Continue => {}
            Step::Capture(purpose) => {
                let frame = draw(api, screen, due_soon_days)?;
                let line = screen.read_line(frame.prompt.unwrap_or_default())?;
                let outcome = api.submit(&line);
                debug!(?purpose, ?outcome, "capture submitted");
            }
            Step::Quit => return Ok(()),
        }
    }
}

fn draw<S: DataStore, T: Screen>(
    api: &TodoApi<S>,
    screen: &mut T,
    due_soon_days: i64,
) -> io::Result<Frame> {
    let (rows, cols) = screen.size();
    let opts = FrameOptions {
        rows,
        cols,
        now: Utc::now(),
        due_soon_days,
    };
    let frame = view::frame(api.session(), &opts);
    screen.draw(&frame)?;
    Ok(frame)
}
