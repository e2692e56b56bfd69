use crate::{Ball, Config, Events, GameRng, Paddle, Position, Velocity};
use hecs::World;
use rand::Rng;

/// Bounce the ball off the top/bottom walls and score it when it leaves
/// the field horizontally
pub fn update_balls(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    let mut winners = Vec::new();

    for (_entity, (ball, position, velocity)) in
        world.query_mut::<(&mut Ball, &mut Position, &mut Velocity)>()
    {
        // Walls: one corrective step back into the field
        if (position.y - config.half_height()).abs() > config.wall_margin {
            velocity.y = -velocity.y;
            position.y += velocity.y;
            ball.speed = config.clamp_ball_speed(ball.speed + config.wall_speedup);
            events.ball_hit_wall = true;
        }

        // Exit past the left or right edge
        if position.x < 0.0 || position.x > config.width {
            let losing_player = if position.x > config.width { 1 } else { 0 };
            reset_ball(position, velocity, ball, losing_player, config, rng);
            winners.push(1 - losing_player);
        }
    }

    for player_id in winners {
        award_point(world, player_id, events);
    }
}

/// Serve from the centre towards the player who just lost the point
pub fn reset_ball(
    position: &mut Position,
    velocity: &mut Velocity,
    ball: &mut Ball,
    losing_player: u8,
    config: &Config,
    rng: &mut GameRng,
) {
    *position = Position::new(config.half_width(), config.half_height());

    let dx = if losing_player == 0 { -1.0 } else { 1.0 };
    let dy = rng.0.gen_range(-config.serve_spread..=config.serve_spread);
    *velocity = Velocity::new(dx, dy);
    velocity.normalize();

    ball.speed = config.ball_speed_initial;
}

/// Add one point to the first paddle (in creation order) owned by `player_id`.
/// Returns the new score, or `None` if that player has no paddle.
pub fn award_point(world: &mut World, player_id: u8, events: &mut Events) -> Option<u32> {
    let (_entity, paddle) = world
        .query_mut::<&mut Paddle>()
        .into_iter()
        .filter(|(_e, paddle)| paddle.player_id == player_id)
        .min_by_key(|(e, _)| e.id())?;

    paddle.score += 1;
    events.scored(player_id);
    log::info!("Player {} scores ({})", player_id, paddle.score);

    Some(paddle.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_world() -> (World, Config, Events, GameRng) {
        let mut world = World::new();
        world.spawn((Position::new(40.0, 240.0), Paddle::new(0, false)));
        world.spawn((Position::new(760.0, 240.0), Paddle::new(1, true)));
        let config = Config::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, events, rng)
    }

    fn spawn_ball(world: &mut World, pos: Position, vel: Velocity, speed: f32) -> hecs::Entity {
        world.spawn((pos, vel, Ball::new(speed)))
    }

    fn scores(world: &World) -> [u32; 2] {
        let mut scores = [0; 2];
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            scores[paddle.player_id as usize] = paddle.score;
        }
        scores
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let vel = Velocity::new(0.8, 0.6);
        let ball = spawn_ball(&mut world, Position::new(300.0, 461.0), vel, 5.0);

        update_balls(&mut world, &config, &mut rng, &mut events);

        let pos = *world.get::<&Position>(ball).unwrap();
        let new_vel = *world.get::<&Velocity>(ball).unwrap();
        assert_eq!(new_vel.y, -0.6, "Y direction should flip");
        assert_eq!(new_vel.x, 0.8, "X direction should be unchanged");
        assert!((pos.y - 460.4).abs() < 1e-4, "One corrective step back");
        let speed = world.get::<&Ball>(ball).unwrap().speed;
        assert!((speed - 5.1).abs() < 1e-5, "Wall bounce speeds the ball up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(300.0, 19.0),
            Velocity::new(0.8, -0.6),
            5.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        let vel = *world.get::<&Velocity>(ball).unwrap();
        assert!(vel.y > 0.0, "Ball should head back down");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_inside_margin() {
        let (mut world, config, mut events, mut rng) = setup_world();
        // Exactly on the margin does not bounce
        let ball = spawn_ball(
            &mut world,
            Position::new(300.0, 460.0),
            Velocity::new(0.8, 0.6),
            5.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(world.get::<&Velocity>(ball).unwrap().y, 0.6);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_wall_speedup_caps_at_max() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(300.0, 470.0),
            Velocity::new(0.8, 0.6),
            14.95,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().speed, 15.0);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(801.0, 240.0),
            Velocity::new(1.0, 0.0),
            9.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(scores(&world), [1, 0]);
        assert!(events.left_scored);
        assert!(!events.right_scored);

        let pos = *world.get::<&Position>(ball).unwrap();
        let vel = *world.get::<&Velocity>(ball).unwrap();
        assert_eq!(pos.0, glam::Vec2::new(400.0, 240.0), "Ball returns to centre");
        assert!(vel.x > 0.0, "Serve goes towards the player who lost (right)");
        assert!((vel.length() - 1.0).abs() < 1e-5);
        assert_eq!(world.get::<&Ball>(ball).unwrap().speed, 5.0);
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(-0.5, 240.0),
            Velocity::new(-1.0, 0.0),
            12.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(scores(&world), [0, 1]);
        assert!(events.right_scored);

        let vel = *world.get::<&Velocity>(ball).unwrap();
        assert!(vel.x < 0.0, "Serve goes towards the player who lost (left)");
        assert!((vel.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut events, mut rng) = setup_world();
        spawn_ball(
            &mut world,
            Position::new(0.0, 240.0),
            Velocity::new(-1.0, 0.0),
            5.0,
        );
        spawn_ball(
            &mut world,
            Position::new(800.0, 240.0),
            Velocity::new(1.0, 0.0),
            5.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(scores(&world), [0, 0], "Edges themselves are in bounds");
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_serve_direction_stays_within_spread() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut pos = Position::new(0.0, 0.0);
        let mut vel = Velocity::new(0.0, 0.0);
        let mut ball = Ball::new(15.0);

        for _ in 0..200 {
            reset_ball(&mut pos, &mut vel, &mut ball, 1, &config, &mut rng);
            assert!(vel.x > 0.0);
            // |dy| <= 0.5 before normalisation => |dy| <= 0.5 / hypot(1, 0.5) after
            assert!(vel.y.abs() <= 0.5 / 1.25f32.sqrt() + 1e-6);
            assert!((vel.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_award_point_without_paddle() {
        let mut world = World::new();
        let mut events = Events::new();
        assert_eq!(award_point(&mut world, 0, &mut events), None);
        assert!(!events.left_scored);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(801.0, 240.0),
            Velocity::new(1.0, 0.0),
            5.0,
        );
        update_balls(&mut world, &config, &mut rng, &mut events);

        world.get::<&mut Position>(ball).unwrap().x = 805.0;
        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(scores(&world), [2, 0], "Scores should accumulate");
    }

    #[test]
    fn test_wall_bounce_then_exit_in_same_tick() {
        let (mut world, config, mut events, mut rng) = setup_world();
        let ball = spawn_ball(
            &mut world,
            Position::new(801.0, 465.0),
            Velocity::new(0.8, 0.6),
            5.0,
        );

        update_balls(&mut world, &config, &mut rng, &mut events);

        assert_eq!(scores(&world), [1, 0], "Exactly one point");
        assert!(events.ball_hit_wall);
        assert!(events.left_scored);
        assert!(!events.right_scored);

        let pos = *world.get::<&Position>(ball).unwrap();
        assert_eq!(pos.0, glam::Vec2::new(400.0, 240.0));
        assert_eq!(
            world.get::<&Ball>(ball).unwrap().speed,
            5.0,
            "Serve speed replaces the wall speed-up"
        );
    }
}
