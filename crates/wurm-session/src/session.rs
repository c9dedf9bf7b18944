//! The tick loop driving one game and its active frontend.

use std::thread;
use std::time::Duration;

use wurm_core::command::{Command, FrontendId};
use wurm_core::error::WurmResult;
use wurm_core::game::Game;

use crate::chaos;
use crate::frontend::{Frontend, FrontendFactory};

/// Pause between ticks; sets the game speed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Session loop configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sleep inserted after each rendered tick.
    pub tick: Duration,
    /// Invert the four movement commands before they reach the game.
    pub chaos: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick: TICK_INTERVAL,
            chaos: false,
        }
    }
}

impl SessionConfig {
    /// Set the per-tick sleep.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Enable or disable chaos-inverted controls.
    pub fn with_chaos(mut self, chaos: bool) -> Self {
        self.chaos = chaos;
        self
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a terminal state and one end banner was shown.
    Finished,
    /// The user exited; no banner.
    Quit,
}

/// Runs the poll-simulate-render cycle over one [`Game`].
///
/// Single-threaded and lock-free: there is exactly one live frontend at any
/// instant, and the game is handed to it read-only at render time. A
/// [`Command::Switch`] releases the current frontend completely before the
/// next one initializes, on the same game.
pub struct Session {
    game: Game,
    factory: Box<dyn FrontendFactory>,
    active: Option<Box<dyn Frontend>>,
    config: SessionConfig,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("active", &self.active.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl Session {
    /// Create a session over `game`, building frontends through `factory`.
    pub fn new(game: Game, factory: Box<dyn FrontendFactory>, config: SessionConfig) -> Self {
        Self {
            game,
            factory,
            active: None,
            config,
        }
    }

    /// The game being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run to completion, starting on the `initial` frontend.
    ///
    /// Returns [`Outcome::Finished`] when the game ends (after routing to
    /// exactly one end banner: victory at the winning score, game over
    /// otherwise) or [`Outcome::Quit`] when the user exits. Frontend
    /// failures release the active frontend and propagate.
    pub fn run(&mut self, initial: FrontendId) -> WurmResult<Outcome> {
        self.activate(initial)?;
        let outcome = match self.run_loop() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.release_active();
                return Err(e);
            }
        };
        if outcome == Outcome::Finished {
            if let Err(e) = self.show_end_banner() {
                self.release_active();
                return Err(e);
            }
        }
        self.release_active();
        Ok(outcome)
    }

    fn run_loop(&mut self) -> WurmResult<Outcome> {
        loop {
            let mut cmd = self.poll_active();
            if self.config.chaos {
                cmd = chaos::invert(cmd);
            }
            match cmd {
                Command::Exit => {
                    self.render_active()?;
                    return Ok(Outcome::Quit);
                }
                Command::Help => self.game.toggle_help(),
                Command::Switch(id) => self.swap(id)?,
                Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                    self.game.set_direction(cmd);
                }
                Command::None => {}
            }
            if !self.game.help_active() {
                self.game.update();
            }
            self.render_active()?;
            if self.game.is_finished() {
                return Ok(Outcome::Finished);
            }
            thread::sleep(self.config.tick);
        }
    }

    /// Build frontend `id` and make it the active one. An init failure
    /// releases the half-open frontend before propagating.
    fn activate(&mut self, id: FrontendId) -> WurmResult<()> {
        let mut frontend = self.factory.create(id)?;
        if let Err(e) = frontend.init(self.game.width(), self.game.height()) {
            frontend.release();
            return Err(e);
        }
        self.active = Some(frontend);
        Ok(())
    }

    /// Hot-swap: release the old frontend fully, then build and initialize
    /// the new one. The game is untouched either way.
    fn swap(&mut self, id: FrontendId) -> WurmResult<()> {
        self.release_active();
        self.activate(id)
    }

    fn release_active(&mut self) {
        if let Some(mut frontend) = self.active.take() {
            frontend.release();
        }
    }

    fn poll_active(&mut self) -> Command {
        match self.active.as_mut() {
            Some(frontend) => frontend.poll_input(),
            // Without a live frontend no input can ever arrive.
            None => Command::Exit,
        }
    }

    fn render_active(&mut self) -> WurmResult<()> {
        match self.active.as_mut() {
            Some(frontend) => frontend.render(&self.game),
            None => Ok(()),
        }
    }

    fn show_end_banner(&mut self) -> WurmResult<()> {
        let Some(frontend) = self.active.as_mut() else {
            return Ok(());
        };
        if self.game.is_won() {
            frontend.show_victory()
        } else {
            frontend.show_game_over()
        }
    }
}
