//! Session state machine
//!
//! Menu -> Play -> Game over -> Menu. The host owns a `Session` and calls
//! `update` then `draw` once per frame.

use crate::draw::{Color, Surface};
use crate::input::{Key, Keyboard};
use crate::{Config, Game, GameRng, Params, SimError};
use glam::Vec2;

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Play,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    SelectOnePlayer,
    SelectTwoPlayers,
    Start,
    GameOver,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Phase,
    pub to_state: Phase,
    pub action: SessionAction,
}

enum SessionState {
    Menu,
    Play(Game),
    /// Finished game, kept but no longer updated
    GameOver(Game),
}

pub struct Session {
    state: SessionState,
    num_players: u8,
    config: Config,
    rng: GameRng,
}

impl Session {
    pub fn new(config: Config, rng: GameRng) -> Self {
        Self {
            state: SessionState::Menu,
            num_players: 1,
            config,
            rng,
        }
    }

    /// Reproducible session with the default configuration
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::default(), GameRng::new(seed))
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            SessionState::Menu => Phase::Menu,
            SessionState::Play(_) => Phase::Play,
            SessionState::GameOver(_) => Phase::GameOver,
        }
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    /// The current game, in play or finished
    pub fn game(&self) -> Option<&Game> {
        match &self.state {
            SessionState::Menu => None,
            SessionState::Play(game) | SessionState::GameOver(game) => Some(game),
        }
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        match &mut self.state {
            SessionState::Menu => None,
            SessionState::Play(game) | SessionState::GameOver(game) => Some(game),
        }
    }

    /// Advance one tick. Returns the transition taken, if any.
    pub fn update(
        &mut self,
        keyboard: &dyn Keyboard,
    ) -> Result<Option<TransitionResult>, SimError> {
        let action = match &mut self.state {
            SessionState::Menu => menu_action(keyboard),
            SessionState::Play(game) => {
                game.update(keyboard)?;
                game.is_over().then_some(SessionAction::GameOver)
            }
            SessionState::GameOver(_) => keyboard
                .is_down(Key::Space)
                .then_some(SessionAction::Restart),
        };

        Ok(action.map(|action| self.transition(action)))
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        use SessionAction::*;

        let from_state = self.phase();
        let state = std::mem::replace(&mut self.state, SessionState::Menu);

        let (next, success) = match state {
            SessionState::Menu => match action {
                Start => {
                    let game = Game::new(self.num_players, self.config.clone(), self.rng.fork());
                    (SessionState::Play(game), true)
                }
                SelectOnePlayer => {
                    self.num_players = 1;
                    (SessionState::Menu, true)
                }
                SelectTwoPlayers => {
                    self.num_players = 2;
                    (SessionState::Menu, true)
                }
                GameOver | Restart => (SessionState::Menu, false),
            },
            SessionState::Play(game) => match action {
                GameOver if !game.is_over() => (SessionState::Play(game), false),
                GameOver => {
                    log::info!(
                        "Game over after {} ticks: {:?} (winner {:?})",
                        game.tick,
                        game.scores(),
                        game.winner()
                    );
                    (SessionState::GameOver(game), true)
                }
                Start | SelectOnePlayer | SelectTwoPlayers | Restart => {
                    (SessionState::Play(game), false)
                }
            },
            SessionState::GameOver(game) => match action {
                Restart => {
                    self.num_players = 1;
                    (SessionState::Menu, true)
                }
                Start | SelectOnePlayer | SelectTwoPlayers | GameOver => {
                    (SessionState::GameOver(game), false)
                }
            },
        };

        self.state = next;
        let to_state = self.phase();
        if success {
            log::debug!("State transition: {:?} -> {:?} ({:?})", from_state, to_state, action);
        }

        TransitionResult {
            success,
            from_state,
            to_state,
            action,
        }
    }

    /// Render the current state. Never mutates.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match &self.state {
            SessionState::Menu => {
                surface.clear();
                self.draw_menu(surface);
            }
            SessionState::Play(game) => game.draw(surface),
            SessionState::GameOver(_) => {
                surface.clear();
                surface.text(
                    "Game Over",
                    Vec2::new(self.config.half_width(), self.config.half_height()),
                    Params::TITLE_FONT_SIZE,
                    Color::WHITE,
                );
            }
        }
    }

    fn draw_menu(&self, surface: &mut dyn Surface) {
        let centre = Vec2::new(self.config.half_width(), self.config.half_height());

        for (num_players, dy) in [(1, -Params::MENU_LINE_OFFSET), (2, Params::MENU_LINE_OFFSET)] {
            let marker = if self.num_players == num_players { ">" } else { "" };
            surface.text(
                &format!("{} Player {}", marker, num_players),
                centre + Vec2::new(0.0, dy),
                Params::MENU_FONT_SIZE,
                Color::WHITE,
            );
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default(), GameRng::default())
    }
}

/// Space starts; otherwise W / S pick one or two players
fn menu_action(keyboard: &dyn Keyboard) -> Option<SessionAction> {
    if keyboard.is_down(Key::Space) {
        Some(SessionAction::Start)
    } else if keyboard.is_down(Key::W) {
        Some(SessionAction::SelectOnePlayer)
    } else if keyboard.is_down(Key::S) {
        Some(SessionAction::SelectTwoPlayers)
    } else {
        None
    }
}
