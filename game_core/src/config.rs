use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_min_y: f32,
    pub paddle_max_y: f32,
    pub player_speed: f32,
    pub max_ai_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub wall_speedup: f32,
    pub paddle_speedup: f32,
    pub serve_spread: f32,
    pub wall_margin: f32,
    pub hit_box_x: f32,
    pub hit_box_y: f32,
    pub spin_divisor: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_min_y: Params::PADDLE_MIN_Y,
            paddle_max_y: Params::PADDLE_MAX_Y,
            player_speed: Params::PLAYER_SPEED,
            max_ai_speed: Params::MAX_AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            wall_speedup: Params::WALL_SPEEDUP,
            paddle_speedup: Params::PADDLE_SPEEDUP,
            serve_spread: Params::SERVE_SPREAD,
            wall_margin: Params::WALL_MARGIN,
            hit_box_x: Params::HIT_BOX_X,
            hit_box_y: Params::HIT_BOX_Y,
            spin_divisor: Params::SPIN_DIVISOR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            Params::PADDLE_LEFT_X // Left paddle
        } else {
            Params::PADDLE_RIGHT_X // Right paddle
        }
    }

    /// Clamp paddle Y to the playable band
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(self.paddle_min_y, self.paddle_max_y)
    }

    pub fn clamp_ball_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.ball_speed_initial, self.ball_speed_max)
    }
}
