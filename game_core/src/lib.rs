pub mod components;
pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use world::*;

use hecs::Entity;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, is_ai: bool, config: &Config) -> Entity {
    let position = Position::new(config.paddle_x(player_id), config.half_height());
    let renderable = Renderable::new(config.paddle_width, config.paddle_height);
    let paddle = Paddle::new(player_id, is_ai);

    if is_ai {
        world.spawn((position, renderable, paddle, Ai::new()))
    } else {
        world.spawn((position, renderable, paddle))
    }
}

/// Helper to create the ball entity, heading left from the centre
pub fn create_ball(world: &mut World, config: &Config) -> Entity {
    world.spawn((
        Position::new(config.half_width(), config.half_height()),
        Velocity::new(-1.0, 0.0),
        Renderable::new(config.ball_size, config.ball_size),
        Ball::new(config.ball_speed_initial),
    ))
}
