//! Menu/session controller — the only stateful loop in the program.
//!
//! A small state machine: the menu dispatches to one of the three
//! simulators, each of which runs a full prompt → generate → summarize
//! → format → acknowledge cycle synchronously before control returns to
//! the menu. Nothing survives a cycle except the session RNG.

use crossterm::event::KeyCode;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::input;
use super::screen::Screen;
use crate::constants::{FIELD_COL, TITLE_ROW};
use crate::env_config;
use crate::error::SessionError;
use crate::format::{self, RenderContext};
use crate::generator;
use crate::statistics;
use crate::types::SimulatorKind;

/// Controller states; `Terminated` ends the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Menu,
    RunningDice,
    RunningCoin,
    RunningWalk,
    Terminated,
}

pub struct Session {
    screen: Screen,
    ctx: RenderContext,
    rng: SmallRng,
}

impl Session {
    /// Capture the grid size, scaling overrides, and session RNG once.
    pub fn new(screen: Screen) -> Self {
        let (height, width) = screen.size();
        let rng = match env_config::seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            screen,
            ctx: RenderContext::from_env(height, width),
            rng,
        }
    }

    /// Drive the state machine until the user quits.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = SessionState::Menu;
        loop {
            state = match state {
                SessionState::Menu => self.menu()?,
                SessionState::RunningDice => {
                    self.run_dice()?;
                    SessionState::Menu
                }
                SessionState::RunningCoin => {
                    self.run_coin()?;
                    SessionState::Menu
                }
                SessionState::RunningWalk => {
                    self.run_walk()?;
                    SessionState::Menu
                }
                SessionState::Terminated => return Ok(()),
            };
        }
    }

    /// Draw the menu and map the next key press to a state. Keys other
    /// than the selections and the quit key stay on the menu.
    fn menu(&mut self) -> Result<SessionState, SessionError> {
        self.screen.clear()?;
        self.screen.draw(&format::menu_lines(&self.ctx))?;
        self.screen.flush()?;
        Ok(match input::read_key()? {
            KeyCode::Char('1') => SessionState::RunningDice,
            KeyCode::Char('2') => SessionState::RunningCoin,
            KeyCode::Char('3') => SessionState::RunningWalk,
            KeyCode::Char('q') | KeyCode::Char('Q') => SessionState::Terminated,
            _ => SessionState::Menu,
        })
    }

    /// Draw a simulator's banner and title ahead of its prompts.
    fn prompt_screen(&mut self, kind: SimulatorKind) -> Result<(), SessionError> {
        self.screen.clear()?;
        self.screen.draw(&format::prompt_lines(kind, &self.ctx))?;
        self.screen.flush()?;
        Ok(())
    }

    /// Show a results screen and wait for the acknowledging key press.
    fn show_results(&mut self, lines: &[format::DisplayLine]) -> Result<(), SessionError> {
        self.screen.clear()?;
        self.screen.draw(lines)?;
        self.screen.flush()?;
        input::wait_for_key()
    }

    fn run_dice(&mut self) -> Result<(), SessionError> {
        self.prompt_screen(SimulatorKind::Dice)?;
        let rolls = input::prompt_positive_int(
            &mut self.screen,
            TITLE_ROW + 2,
            FIELD_COL,
            "Enter the number of rolls: ",
        )?;
        let sides = input::prompt_positive_int(
            &mut self.screen,
            TITLE_ROW + 3,
            FIELD_COL,
            "Enter the number of sides on the dice: ",
        )?;
        let values = generator::roll_dice(rolls, sides, &mut self.rng);
        let summary = statistics::summarize_dice(&values, sides);
        self.show_results(&format::format_dice(&summary, &self.ctx))
    }

    fn run_coin(&mut self) -> Result<(), SessionError> {
        self.prompt_screen(SimulatorKind::CoinFlip)?;
        let flips = input::prompt_positive_int(
            &mut self.screen,
            TITLE_ROW + 2,
            FIELD_COL,
            "Enter the number of flips: ",
        )?;
        let labels = generator::flip_coins(flips, &mut self.rng);
        let summary = statistics::summarize_coin_flips(&labels);
        self.show_results(&format::format_coin_flips(&summary, &self.ctx))
    }

    fn run_walk(&mut self) -> Result<(), SessionError> {
        self.prompt_screen(SimulatorKind::RandomWalk)?;
        let steps = input::prompt_positive_int(
            &mut self.screen,
            TITLE_ROW + 2,
            FIELD_COL,
            "Enter the number of steps: ",
        )?;
        let positions = generator::random_walk(steps, &mut self.rng);
        let summary = statistics::summarize_walk(&positions);
        self.show_results(&format::format_walk(&summary, &self.ctx))
    }
}
