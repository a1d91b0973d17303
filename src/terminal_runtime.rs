use std::io;
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::{Board, Theme};
use crate::game::Snapshot;
use crate::renderer::{self, Overlay};

/// Terminal lifecycle plus frame drawing for one game run.
///
/// Entering takes the terminal into raw mode on the alternate screen and
/// arranges for it to be restored on drop and on panic, so a crash mid-game
/// never strands the shell in raw mode. Drawing goes through [`draw`], which
/// accepts the engine's snapshot directly: callers never touch the backend.
///
/// [`draw`]: TerminalSession::draw
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen. Partial setup is unwound
    /// on failure.
    pub fn enter() -> io::Result<Self> {
        install_restore_on_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame from an immutable engine snapshot.
    pub fn draw(
        &mut self,
        snapshot: &Snapshot,
        board: Board,
        theme: &Theme,
        overlay: Overlay,
    ) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, board, theme, overlay))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Chains a restore step in front of the default panic hook.
///
/// Installed at most once per process, however many sessions are entered:
/// re-wrapping the hook on every call would recurse through old wrappers.
fn install_restore_on_panic_hook() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            default_hook(panic_info);
        }));
    });
}

/// Best-effort return to cooked mode and the main screen; safe to repeat.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
