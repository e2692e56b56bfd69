/// Game tuning parameters for Boing
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 480.0;
    pub const HALF_WIDTH: f32 = Self::WIDTH / 2.0;
    pub const HALF_HEIGHT: f32 = Self::HEIGHT / 2.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_LEFT_X: f32 = 40.0;
    pub const PADDLE_RIGHT_X: f32 = 760.0;
    pub const PADDLE_MIN_Y: f32 = 80.0;
    pub const PADDLE_MAX_Y: f32 = 400.0;
    pub const PLAYER_SPEED: f32 = 6.0; // per tick
    pub const MAX_AI_SPEED: f32 = 6.0; // per tick

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 15.0;
    pub const WALL_SPEEDUP: f32 = 0.1;
    pub const PADDLE_SPEEDUP: f32 = 0.2;
    pub const SERVE_SPREAD: f32 = 0.5; // max |dy| before normalisation

    // Collision (literal values, smaller than the rendered sizes)
    pub const WALL_MARGIN: f32 = 220.0; // from the vertical centre
    pub const HIT_BOX_X: f32 = 20.0;
    pub const HIT_BOX_Y: f32 = 60.0;
    pub const SPIN_DIVISOR: f32 = 128.0;

    // Score
    pub const WIN_SCORE: u32 = 10; // game over once a score exceeds 9

    // Text
    pub const SCORE_INSET_X: f32 = 200.0;
    pub const SCORE_Y: f32 = 30.0;
    pub const SCORE_FONT_SIZE: f32 = 60.0;
    pub const MENU_FONT_SIZE: f32 = 50.0;
    pub const MENU_LINE_OFFSET: f32 = 20.0;
    pub const TITLE_FONT_SIZE: f32 = 60.0;
}
