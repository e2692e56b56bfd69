//! Headless host
//!
//! Runs a one-player session at a fixed tick with no window: the left paddle
//! is driven by an autopilot keyboard and frames go to a recording surface.
//! Set `RUST_LOG=debug` to see state transitions and paddle hits.

use anyhow::{bail, Result};
use game_core::{DrawList, Key, KeyState, Phase, Session};

/// Safety stop, about 30 minutes of play at 60 Hz
const MAX_TICKS: u64 = 108_000;

/// Don't chase the ball for small offsets
const DEADZONE: f32 = 10.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut session = Session::new(Default::default(), game_core::GameRng::from_entropy());
    let mut surface = DrawList::new();

    for tick in 0..MAX_TICKS {
        let keys = autopilot(&session);
        if let Some(transition) = session.update(&keys)? {
            log::info!(
                "Tick {}: {:?} -> {:?}",
                tick,
                transition.from_state,
                transition.to_state
            );
        }
        session.draw(&mut surface);

        if session.phase() == Phase::GameOver {
            let game = session.game().map(|game| (game.scores(), game.winner()));
            if let Some(([left, right], Some(winner))) = game {
                println!("Player {} wins {}-{} after {} ticks", winner, left, right, tick + 1);
            }
            return Ok(());
        }
    }

    bail!("no winner after {} ticks", MAX_TICKS)
}

/// Keys a simple player would hold this tick
fn autopilot(session: &Session) -> KeyState {
    match session.phase() {
        Phase::Menu => KeyState::new().with(Key::Space),
        Phase::Play => {
            let positions = session
                .game()
                .and_then(|game| Some((game.ball_position()?, game.paddle_position(0)?)));

            match positions {
                Some((ball, paddle)) if ball.y > paddle.y + DEADZONE => KeyState::new().with(Key::S),
                Some((ball, paddle)) if ball.y < paddle.y - DEADZONE => KeyState::new().with(Key::W),
                _ => KeyState::new(),
            }
        }
        Phase::GameOver => KeyState::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Keyboard;

    #[test]
    fn test_autopilot_starts_game_from_menu() {
        let session = Session::with_seed(1);
        assert!(autopilot(&session).is_down(Key::Space));
    }

    #[test]
    fn test_autopilot_holds_still_when_level_with_ball() {
        let mut session = Session::with_seed(1);
        session.update(&KeyState::new().with(Key::Space)).unwrap();

        // Ball and left paddle both start at mid height
        assert_eq!(autopilot(&session), KeyState::new());
    }

    #[test]
    fn test_autopilot_never_selects_two_players() {
        let mut session = Session::with_seed(1);
        for _ in 0..500 {
            let keys = autopilot(&session);
            session.update(&keys).unwrap();
        }
        assert_eq!(session.num_players(), 1);
    }
}
