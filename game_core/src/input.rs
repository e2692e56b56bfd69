//! Keyboard input handling

/// Keys the game reads from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    W,
    S,
    A,
    Z,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Space,
        Key::W,
        Key::S,
        Key::A,
        Key::Z,
        Key::Up,
        Key::Down,
    ];

    /// Map a host key name (DOM `KeyboardEvent.key` style) to a game key
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            " " | "Space" | "Spacebar" => Some(Key::Space),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "a" | "A" => Some(Key::A),
            "z" | "Z" => Some(Key::Z),
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Host-provided keyboard state: is a key currently held
pub trait Keyboard {
    fn is_down(&self, key: Key) -> bool;
}

/// Held-key set, for hosts that track key down/up events themselves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }

    /// Handle key down event by name; unknown keys are ignored
    pub fn handle_key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.press(key);
        }
    }

    /// Handle key up event by name; unknown keys are ignored
    pub fn handle_key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.release(key);
        }
    }
}

impl Keyboard for KeyState {
    fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }
}

/// Paddle direction for a human player: -1 = up, 0 = stop, 1 = down.
/// Down wins when both directions are held.
pub fn paddle_direction(keyboard: &dyn Keyboard, player_id: u8) -> i8 {
    let (down, up) = if player_id == 0 {
        (keyboard.is_down(Key::S), keyboard.is_down(Key::W))
    } else {
        (
            keyboard.is_down(Key::Z) || keyboard.is_down(Key::Down),
            keyboard.is_down(Key::A) || keyboard.is_down(Key::Up),
        )
    };

    if down {
        1
    } else if up {
        -1
    } else {
        0
    }
}
