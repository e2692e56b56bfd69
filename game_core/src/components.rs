use glam::Vec2;
use std::ops::{Deref, DerefMut};

/// Position component - centre of the entity on the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Deref for Position {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}

impl DerefMut for Position {
    fn deref_mut(&mut self) -> &mut Vec2 {
        &mut self.0
    }
}

/// Velocity component - a direction, kept at unit length after every change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    /// Rescale to unit length; a zero vector stays zero
    pub fn normalize(&mut self) {
        self.0 = self.0.normalize_or_zero();
    }
}

impl Deref for Velocity {
    type Target = Vec2;

    fn deref(&self) -> &Vec2 {
        &self.0
    }
}

impl DerefMut for Velocity {
    fn deref_mut(&mut self) -> &mut Vec2 {
        &mut self.0
    }
}

/// Size used for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub width: f32,
    pub height: f32,
}

impl Renderable {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub is_ai: bool,
    pub score: u32,
}

impl Paddle {
    pub fn new(player_id: u8, is_ai: bool) -> Self {
        Self {
            player_id,
            is_ai,
            score: 0,
        }
    }
}

/// Ball component - the ball's scalar speed
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub speed: f32,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Computer control for a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct Ai {
    pub offset: f32, // vertical aim bias
}

impl Ai {
    pub fn new() -> Self {
        Self::default()
    }
}
