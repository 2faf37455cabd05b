use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameSession;
use crate::renderer;
use crate::ui::hud::HudInfo;

/// Terminal modes switched on so far; dropping undoes them in reverse.
#[derive(Debug, Default)]
struct Modes {
    raw: bool,
    alternate_screen: bool,
}

impl Modes {
    /// Assumes everything is on; used where no guard is reachable.
    const ALL: Self = Self {
        raw: true,
        alternate_screen: true,
    };

    fn restore(&mut self) -> io::Result<()> {
        let mut result = Ok(());

        if std::mem::take(&mut self.alternate_screen) {
            let mut stdout = io::stdout();
            result = execute!(stdout, Show, LeaveAlternateScreen);
        }
        if std::mem::take(&mut self.raw) {
            result = result.and(disable_raw_mode());
        }

        result
    }
}

impl Drop for Modes {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            error!("failed to restore terminal: {error}");
        }
    }
}

/// The game's full-screen view for one run.
///
/// Holds raw mode and the alternate screen until dropped. A failure half-way
/// through [`Screen::open`] restores whatever was already switched on.
pub struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    modes: Modes,
}

impl Screen {
    pub fn open() -> io::Result<Self> {
        let mut modes = Modes::default();

        enable_raw_mode()?;
        modes.raw = true;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        modes.alternate_screen = true;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("screen opened: raw mode, alternate screen, cursor hidden");

        Ok(Self { terminal, modes })
    }

    /// Draws one frame of `session`.
    pub fn draw(&mut self, session: &GameSession, hud_info: &HudInfo<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, session, hud_info))?;
        Ok(())
    }

    /// Restores the terminal now, reporting failure instead of only logging it.
    pub fn close(mut self) -> io::Result<()> {
        self.modes.restore()
    }
}

/// Puts the terminal back before the default hook prints the panic, so the
/// message is readable and the shell is usable afterwards.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let mut modes = Modes::ALL;
        let _ = modes.restore();
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}
