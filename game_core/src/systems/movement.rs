use crate::{Ball, Position, Velocity};
use hecs::World;

/// Advance every entity that has a velocity. Balls move `speed` units
/// along their (unit) direction; anything else moves by its raw velocity.
pub fn move_entities(world: &mut World) {
    for (_entity, (position, velocity, ball)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&Ball>)>()
    {
        let scale = ball.map_or(1.0, |ball| ball.speed);
        position.0 += velocity.0 * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Renderable;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_speed() {
        let mut world = World::new();
        let ball = world.spawn((
            Position::new(400.0, 240.0),
            Velocity::new(-1.0, 0.0),
            Ball::new(5.0),
        ));

        move_entities(&mut world);

        let pos = *world.get::<&Position>(ball).unwrap();
        assert_eq!(pos.0, Vec2::new(395.0, 240.0));
    }

    #[test]
    fn test_plain_entity_moves_by_velocity() {
        let mut world = World::new();
        let entity = world.spawn((Position::new(10.0, 10.0), Velocity::new(2.0, -3.0)));

        move_entities(&mut world);
        move_entities(&mut world);

        let pos = *world.get::<&Position>(entity).unwrap();
        assert_eq!(pos.0, Vec2::new(14.0, 4.0));
    }

    #[test]
    fn test_entity_without_velocity_is_skipped() {
        let mut world = World::new();
        let paddle = world.spawn((Position::new(40.0, 240.0), Renderable::new(20.0, 100.0)));

        move_entities(&mut world);

        let pos = *world.get::<&Position>(paddle).unwrap();
        assert_eq!(pos.0, Vec2::new(40.0, 240.0));
    }
}
