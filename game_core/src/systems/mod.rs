pub mod ball;
pub mod movement;
pub mod paddle;

pub use ball::*;
pub use movement::*;
pub use paddle::*;

use crate::{SimError, TickContext};

/// The per-tick systems, run in `PIPELINE` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemKind {
    Movement,
    Ball,
    Paddle,
}

/// Movement first: ball and paddle logic read this tick's positions
pub const PIPELINE: [SystemKind; 3] = [SystemKind::Movement, SystemKind::Ball, SystemKind::Paddle];

impl SystemKind {
    pub fn name(self) -> &'static str {
        match self {
            SystemKind::Movement => "movement",
            SystemKind::Ball => "ball",
            SystemKind::Paddle => "paddle",
        }
    }

    pub fn run(self, world: &mut hecs::World, ctx: &mut TickContext<'_>) -> Result<(), SimError> {
        match self {
            SystemKind::Movement => move_entities(world),
            SystemKind::Ball => update_balls(world, ctx.config, ctx.rng, ctx.events),
            SystemKind::Paddle => update_paddles(world, ctx.config, ctx.keyboard, ctx.events)?,
        }
        Ok(())
    }
}
