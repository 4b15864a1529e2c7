use std::{
    io::{self, stdout, Stdout},
    ops::{Deref, DerefMut},
    panic,
    sync::Once,
};

use crossterm as ct;
use ct::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};

/// The terminal a figure is shown on
///
/// Holds raw mode and the alternate screen for as long as it lives, and
/// restores the terminal when dropped.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Deref for Tui {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            log::error!("Failed to restore terminal: {err}");
        }
    }
}

/// Initialize the tui
pub fn init() -> io::Result<Tui> {
    init_panic_hook();
    ct::execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(Tui { terminal })
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    ct::execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Setup panic hook, once per process
fn init_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));
    });
}
