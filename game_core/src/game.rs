use crate::draw::{Color, Rect, Surface};
use crate::input::Keyboard;
use crate::{
    create_ball, create_paddle, Ball, Config, Events, GameRng, Paddle, Params, Position,
    Renderable, SimError, TickContext, World,
};
use glam::Vec2;

/// One match: the world plus the resources its systems need
pub struct Game {
    pub world: World,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub tick: u64,
}

impl Game {
    /// Two paddles and a ball. With one player the right paddle is AI.
    pub fn new(num_players: u8, config: Config, rng: GameRng) -> Self {
        let mut world = World::new();

        for player_id in 0..2 {
            let is_ai = player_id == 1 && num_players == 1;
            create_paddle(&mut world, player_id, is_ai, &config);
        }
        create_ball(&mut world, &config);

        log::info!("New game: {} player(s)", num_players);

        Self {
            world,
            config,
            events: Events::new(),
            rng,
            tick: 0,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, keyboard: &dyn Keyboard) -> Result<(), SimError> {
        self.events.clear();

        let mut ctx = TickContext {
            config: &self.config,
            keyboard,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        self.world.update(&mut ctx)?;

        self.tick += 1;
        Ok(())
    }

    /// Paddles and ball as white rectangles, then both scores
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        let ecs = self.world.ecs();
        let mut sprites: Vec<_> = ecs
            .query::<(&Position, &Renderable)>()
            .iter()
            .map(|(e, (pos, size))| (e, *pos, *size))
            .collect();
        sprites.sort_by_key(|(e, _, _)| e.id());

        for (_e, pos, size) in sprites {
            let rect = Rect::from_center_size(pos.0, Vec2::new(size.width, size.height));
            surface.filled_rect(rect, Color::WHITE);
        }

        for paddle in self.paddles() {
            let x = if paddle.player_id == 0 {
                Params::SCORE_INSET_X
            } else {
                self.config.width - Params::SCORE_INSET_X
            };
            surface.text(
                &paddle.score.to_string(),
                Vec2::new(x, Params::SCORE_Y),
                Params::SCORE_FONT_SIZE,
                Color::WHITE,
            );
        }
    }

    /// Paddle components in creation order
    pub fn paddles(&self) -> Vec<Paddle> {
        let mut paddles: Vec<_> = self
            .world
            .ecs()
            .query::<&Paddle>()
            .iter()
            .map(|(e, paddle)| (e, *paddle))
            .collect();
        paddles.sort_by_key(|(e, _)| e.id());
        paddles.into_iter().map(|(_e, paddle)| paddle).collect()
    }

    /// Scores indexed by player ID
    pub fn scores(&self) -> [u32; 2] {
        let mut scores = [0; 2];
        for paddle in self.paddles() {
            if let Some(score) = scores.get_mut(paddle.player_id as usize) {
                *score = paddle.score;
            }
        }
        scores
    }

    /// First player (in creation order) to reach the winning score
    pub fn winner(&self) -> Option<u8> {
        self.paddles()
            .into_iter()
            .find(|paddle| paddle.score >= self.config.win_score)
            .map(|paddle| paddle.player_id)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn ball_position(&self) -> Option<Vec2> {
        self.world
            .ecs()
            .query::<(&Ball, &Position)>()
            .iter()
            .next()
            .map(|(_e, (_ball, pos))| pos.0)
    }

    pub fn paddle_position(&self, player_id: u8) -> Option<Vec2> {
        self.world
            .ecs()
            .query::<(&Paddle, &Position)>()
            .iter()
            .find(|(_e, (paddle, _pos))| paddle.player_id == player_id)
            .map(|(_e, (_paddle, pos))| pos.0)
    }
}
