use rand::SeedableRng;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (non-reproducible sessions)
    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Derive an independent generator, e.g. one per game
    pub fn fork(&mut self) -> Self {
        use rand::Rng;
        Self::new(self.0.gen())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Record a point for the given player
    pub fn scored(&mut self, player_id: u8) {
        if player_id == 0 {
            self.left_scored = true;
        } else {
            self.right_scored = true;
        }
    }
}
