//! Terminal session management: raw mode, the alternate screen, and the
//! crossterm event queue behind the [`Frontend`] contract.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Color;
use wurm_core::command::Command;
use wurm_core::error::{WurmError, WurmResult};
use wurm_core::game::Game;
use wurm_session::frontend::Frontend;

use crate::{draw, keymap};

/// Cell-grid frontend drawing into the terminal that launched the game.
///
/// [`init`](Frontend::init) takes over the terminal (raw mode plus the
/// alternate screen) and [`release`](Frontend::release) hands it back, so a
/// session can drop this frontend mid-game and the shell stays usable.
#[derive(Debug, Default)]
pub struct TermFrontend {
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
}

impl TermFrontend {
    /// Create a frontend that has not yet touched the terminal.
    pub fn new() -> Self {
        Self { terminal: None }
    }

    fn terminal(&mut self) -> WurmResult<&mut Terminal<CrosstermBackend<Stdout>>> {
        self.terminal
            .as_mut()
            .ok_or_else(|| WurmError::Frontend("terminal frontend is not initialized".into()))
    }

    fn enter() -> WurmResult<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(term_err)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(term_err)?;
        terminal.hide_cursor().map_err(term_err)?;
        terminal.clear().map_err(term_err)?;
        Ok(terminal)
    }

    fn wait_for_key(&mut self) -> WurmResult<()> {
        loop {
            if let Event::Key(key) = event::read().map_err(term_err)? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Frontend for TermFrontend {
    fn init(&mut self, width: i32, height: i32) -> WurmResult<()> {
        // Check the window fits before touching any terminal modes.
        let (cols, rows) = crossterm::terminal::size().map_err(term_err)?;
        let need_cols = (width as u16).saturating_mul(2);
        let need_rows = (height as u16).saturating_add(2);
        if cols < need_cols || rows < need_rows {
            return Err(WurmError::Frontend(format!(
                "terminal is {cols}x{rows} cells but a {width}x{height} board needs \
                 {need_cols}x{need_rows}"
            )));
        }
        enable_raw_mode().map_err(term_err)?;
        match Self::enter() {
            Ok(terminal) => {
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(e) => {
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                disable_raw_mode().ok();
                Err(e)
            }
        }
    }

    fn render(&mut self, game: &Game) -> WurmResult<()> {
        self.terminal()?
            .draw(|frame| draw::draw(frame, game))
            .map_err(term_err)?;
        Ok(())
    }

    fn poll_input(&mut self) -> Command {
        let mut latest = Command::None;
        while event::poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(cmd) = keymap::map(key) {
                        latest = cmd;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
        latest
    }

    fn show_victory(&mut self) -> WurmResult<()> {
        self.terminal()?
            .draw(|frame| draw::banner(frame, "YOU WIN", Color::Green))
            .map_err(term_err)?;
        self.wait_for_key()
    }

    fn show_game_over(&mut self) -> WurmResult<()> {
        self.terminal()?
            .draw(|frame| draw::banner(frame, "GAME OVER", Color::Red))
            .map_err(term_err)?;
        self.wait_for_key()
    }

    fn release(&mut self) {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode().ok();
            execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
            terminal.show_cursor().ok();
        }
    }
}

fn term_err(e: io::Error) -> WurmError {
    WurmError::Frontend(format!("terminal error: {e}"))
}
