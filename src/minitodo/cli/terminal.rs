//! The terminal side of the UI: a [`Screen`] draws frames and reads input.
//!
//! [`ConsoleScreen`] is the real implementation on top of `console::Term`.
//! The event loop only ever talks to the trait, so tests can drive it with a
//! scripted screen.

use std::io::{self, Write};

use console::{Key, Term};
use minitodo::view::{Frame, Prompt};

use super::styles::PALETTE;

pub trait Screen {
    /// Current size as `(rows, cols)`. Queried before every draw.
    fn size(&self) -> (usize, usize);

    /// Clears the screen and paints `frame`.
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Blocks until a key is pressed.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Reads one line, echoed from `prompt`, without the line terminator.
    fn read_line(&mut self, prompt: Prompt) -> io::Result<String>;

    /// Hands the terminal back in a usable state.
    fn release(&mut self) -> io::Result<()>;
}

pub struct ConsoleScreen {
    term: Term,
}

impl ConsoleScreen {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ConsoleScreen {
    fn size(&self) -> (usize, usize) {
        let (rows, cols) = self.term.size();
        (usize::from(rows), usize::from(cols))
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.term.hide_cursor()?;
        self.term.clear_screen()?;
        for line in &frame.lines {
            for span in &line.spans {
                self.term.move_cursor_to(span.col, line.row)?;
                let style = PALETTE.style(span.paint, line.highlighted);
                write!(self.term, "{}", style.apply_to(&span.text))?;
            }
        }
        if let Some(prompt) = frame.prompt {
            self.term.move_cursor_to(prompt.col, prompt.row)?;
            self.term.show_cursor()?;
        }
        self.term.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        self.term.read_key()
    }

    fn read_line(&mut self, prompt: Prompt) -> io::Result<String> {
        self.term.move_cursor_to(prompt.col, prompt.row)?;
        self.term.show_cursor()?;
        let line = self.term.read_line();
        self.term.hide_cursor()?;
        line
    }

    fn release(&mut self) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.show_cursor()?;
        self.term.flush()
    }
}
