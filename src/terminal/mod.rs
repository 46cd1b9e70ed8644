//! Terminal management with RAII cleanup.
//!
//! ```no_run
//! use throwcard::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let terminal = manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{CardError, CardResult};

/// Owns the ratatui terminal; restores the terminal when dropped.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> CardResult<Self> {
        enable_raw_mode().map_err(|e| terminal_error("enable raw mode", e))?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(terminal_error("enter alternate screen", e));
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .and_then(|mut terminal| terminal.clear().map(|_| terminal));
        let terminal = match terminal {
            Ok(terminal) => terminal,
            Err(e) => {
                leave_tui_mode(&mut io::stdout());
                return Err(terminal_error("initialize terminal", e));
            }
        };

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, including the one from
    /// `Drop`, are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

fn terminal_error(action: &str, e: impl std::fmt::Display) -> CardError {
    CardError::Terminal(format!("failed to {}: {}", action, e))
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
