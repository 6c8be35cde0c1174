//! Keyboard edge detection.
//!
//! Frontends poll the keyboard every frame and hand the held keys to an
//! `EdgeDetector`, which only reports keys that went down since the previous
//! poll. Holding a key never repeats it.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A letter key, always stored lower-case.
    Letter(char),
    Space,
    Escape,
    Enter,
    Left,
    Right,
}

impl Key {
    /// Letter key for `c`, or `None` if `c` is not an ASCII letter.
    pub fn letter(c: char) -> Option<Key> {
        c.is_ascii_alphabetic().then(|| Key::Letter(c.to_ascii_lowercase()))
    }

    /// The command issued when this key goes down.
    pub fn command(self) -> PlayerCommand {
        match self {
            Key::Letter(letter) => PlayerCommand::TypeLetter { letter },
            Key::Space => PlayerCommand::Detonate,
            Key::Escape => PlayerCommand::Back,
            Key::Enter => PlayerCommand::Confirm,
            Key::Left => PlayerCommand::SelectPrevious,
            Key::Right => PlayerCommand::SelectNext,
        }
    }
}

/// Turns successive held-key polls into rising-edge commands.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    held: Vec<Key>,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the keys held this frame, in the order the platform reports them.
    /// Returns commands for keys that were not held on the previous poll.
    pub fn poll(&mut self, held_now: &[Key]) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        let mut seen: Vec<Key> = Vec::with_capacity(held_now.len());

        for &key in held_now {
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            if !self.held.contains(&key) {
                commands.push(key.command());
            }
        }

        self.held = seen;
        commands
    }

    /// Forget all held keys, e.g. after the window loses focus.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
