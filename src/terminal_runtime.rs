use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// The game window: a ratatui terminal drawing to stdout.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The game window for one run of the loop.
///
/// Raw mode and the alternate screen are switched on in [`enter`](Self::enter)
/// and switched off when the session is dropped, so quitting, an I/O error in
/// the loop and an early return all leave the shell usable.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Opens the window and blanks it.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        // From here on the guard owns cleanup, including on a failed clear.
        let mut session = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
                let _ = leave_window();
            })?,
        };
        session.terminal.clear()?;
        Ok(session)
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = leave_window();
    }
}

/// A panic report prints before unwinding reaches the session's drop, so the
/// hook closes the window first to keep the report readable.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = leave_window();
        default_hook(panic_info);
    }));
}

fn leave_window() -> io::Result<()> {
    let _ = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}
