//! Drawing surface interface
//!
//! The host owns the real renderer; the game only issues these calls.

use glam::Vec2;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = (size * 0.5).floor();
        Self {
            pos: center - half,
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Host-provided drawing primitives
pub trait Surface {
    fn clear(&mut self);
    fn filled_rect(&mut self, rect: Rect, color: Color);
    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Color);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FilledRect { rect: Rect, color: Color },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
    },
}

/// Surface that records commands instead of rasterising them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.frame().iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn filled_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FilledRect { rect, color });
    }

    fn text(&mut self, text: &str, center: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}
