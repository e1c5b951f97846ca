//! Terminal mode guard.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action when dropped.
///
/// Dropping happens on every exit path, including `?` returns and panics
/// that unwind.
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Switches to raw mode and the alternate screen.
///
/// The guard is armed right after raw mode is enabled, so a failure
/// entering the alternate screen still leaves the terminal usable.
pub fn enter_terminal() -> io::Result<RestoreGuard<fn()>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore_terminal as fn());
    execute!(io::stdout(), EnterAlternateScreen)?;
    debug!("Terminal entered raw mode");
    Ok(guard)
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    debug!("Terminal restored");
}
