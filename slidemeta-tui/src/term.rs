//! Terminal lifecycle: raw mode, alternate screen, cleanup on drop.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, terminal,
};

/// Raw-mode terminal handle.
///
/// Entering raw mode and the alternate screen happens on construction;
/// both are restored in `Drop`, so the shell comes back intact even on an
/// early return.
pub struct Term {
    stdout: Stdout,
}

impl Term {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Writer for drawing commands.
    pub fn stdout(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    /// Waits up to `timeout` for the next input event.
    pub fn poll(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
