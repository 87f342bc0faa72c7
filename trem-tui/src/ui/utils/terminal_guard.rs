use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Puts the terminal into raw mode on the alternate screen and restores it
/// when dropped, including on early return or panic unwinding.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::error!("Error disabling raw mode: {}", e);
        }
        if let Err(e) = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            Clear(ClearType::All),
            Show
        ) {
            log::error!("Error cleaning up terminal: {}", e);
        }
    }
}
