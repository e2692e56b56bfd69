use crate::input::{paddle_direction, Keyboard};
use crate::{Ai, Ball, Config, Events, Paddle, Position, SimError, Velocity};
use glam::Vec2;
use hecs::{Entity, World};

/// Copy of the ball's state taken before paddles are processed
#[derive(Debug, Clone, Copy)]
pub struct BallSnapshot {
    pub entity: Entity,
    pub pos: Vec2,
    pub vel: Velocity,
    pub speed: f32,
}

/// Locate the single ball, failing if there is none or more than one
pub fn find_ball(world: &World) -> Result<BallSnapshot, SimError> {
    let mut query = world.query::<(&Ball, &Position, &Velocity)>();
    let mut balls = query.iter().map(|(entity, (ball, pos, vel))| BallSnapshot {
        entity,
        pos: pos.0,
        vel: *vel,
        speed: ball.speed,
    });

    let first = balls.next().ok_or(SimError::MissingBall)?;
    let extra = balls.count();
    if extra > 0 {
        return Err(SimError::MultipleBalls(extra + 1));
    }
    Ok(first)
}

/// Move every paddle (AI or keyboard) and bounce the ball off any it touches
pub fn update_paddles(
    world: &mut World,
    config: &Config,
    keyboard: &dyn Keyboard,
    events: &mut Events,
) -> Result<(), SimError> {
    let mut ball = find_ball(world)?;
    let mut hit = false;

    let mut paddles: Vec<_> = world
        .query_mut::<(&Paddle, &mut Position, Option<&Ai>)>()
        .into_iter()
        .collect();
    paddles.sort_by_key(|(e, _)| e.id());

    for (_entity, (paddle, position, ai)) in paddles {
        if paddle.is_ai {
            let offset = ai.map_or(0.0, |ai| ai.offset);
            move_ai_paddle(position, ball.pos, offset, config);
        } else {
            let dir = paddle_direction(keyboard, paddle.player_id);
            move_player_paddle(position, dir, config);
        }

        if check_ball_collision(position.0, &mut ball, config) {
            log::debug!(
                "Ball hit paddle {} (speed {:.1})",
                paddle.player_id,
                ball.speed
            );
            events.ball_hit_paddle = true;
            hit = true;
        }
    }

    if hit {
        let (vel, state) = world
            .query_one_mut::<(&mut Velocity, &mut Ball)>(ball.entity)
            .map_err(|_| SimError::MissingBall)?;
        *vel = ball.vel;
        state.speed = ball.speed;
    }

    Ok(())
}

/// Recentre while the ball is in the far half, otherwise track it.
/// Moves at most `max_ai_speed` per tick.
pub fn move_ai_paddle(position: &mut Position, ball_pos: Vec2, offset: f32, config: &Config) {
    let target_y = if (ball_pos.x - position.x).abs() > config.half_width() {
        config.half_height()
    } else {
        ball_pos.y + offset
    };

    let step = (target_y - position.y).clamp(-config.max_ai_speed, config.max_ai_speed);
    position.y = config.clamp_paddle_y(position.y + step);
}

pub fn move_player_paddle(position: &mut Position, dir: i8, config: &Config) {
    position.y = config.clamp_paddle_y(position.y + dir as f32 * config.player_speed);
}

/// Fixed hit-box test; on contact reflect, add spin from the hit offset and
/// speed the ball up. Returns whether the ball was hit.
pub fn check_ball_collision(paddle_pos: Vec2, ball: &mut BallSnapshot, config: &Config) -> bool {
    let offset = ball.pos - paddle_pos;
    if offset.x.abs() >= config.hit_box_x || offset.y.abs() >= config.hit_box_y {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.vel.y = (ball.vel.y + offset.y / config.spin_divisor).clamp(-1.0, 1.0);
    ball.vel.normalize();
    ball.speed = config.clamp_ball_speed(ball.speed + config.paddle_speedup);
    true
}
