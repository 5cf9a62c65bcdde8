//! Held-key state for the leader.
//!
//! Platform code updates this on key events; the tick pipeline only reads it.
//! A key pressed and released between two ticks is never observed.

use macroquad::input::KeyCode;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move up (negative y).
    Up,
    /// Move down (positive y).
    Down,
    /// Move left (negative x).
    Left,
    /// Move right (positive x).
    Right,
    /// Run modifier.
    Run,
}

impl Key {
    /// Every logical key, in polling order.
    pub const ALL: [Key; 5] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Run];

    /// Maps a physical key to a logical one. Unmapped keys yield `None`.
    pub fn from_keycode(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::X => Some(Key::Run),
            _ => None,
        }
    }
}

/// Set of logical keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Up arrow held.
    pub up: bool,
    /// Down arrow held.
    pub down: bool,
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
    /// Run modifier held.
    pub run: bool,
}

impl InputState {
    /// Records a key transition.
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Run => self.run = held,
        }
    }

    /// Records a physical key transition, ignoring keys with no binding.
    pub fn set_keycode(&mut self, code: KeyCode, held: bool) {
        if let Some(key) = Key::from_keycode(code) {
            self.set(key, held);
        }
    }

    /// Whether `key` is currently held.
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Run => self.run,
        }
    }
}
