//! Player commands sent from the input layer to the simulation.
//!
//! Every command is a rising-edge key event. Commands are queued and
//! folded into one `InputFrame` at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A letter key went down. Non-alphabetic characters are dropped.
    TypeLetter { letter: char },
    /// Detonate the oldest live rocket (Space).
    Detonate,
    /// Pause, leave to the main menu, or quit from it (Escape).
    Back,
    /// Advance a menu, confirm the plane selection, or resume (Enter).
    Confirm,
    /// Previous plane on the character select screen (Left).
    SelectPrevious,
    /// Next plane on the character select screen (Right).
    SelectNext,
}

/// Input edges gathered for a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Lower-case letters in the order they were pressed.
    pub letters: Vec<char>,
    pub detonate: bool,
    pub back: bool,
    pub confirm: bool,
    pub select_previous: bool,
    pub select_next: bool,
}

impl InputFrame {
    /// Fold a batch of queued commands into one frame.
    pub fn from_commands(commands: impl IntoIterator<Item = PlayerCommand>) -> Self {
        let mut frame = Self::default();
        for command in commands {
            match command {
                PlayerCommand::TypeLetter { letter } if letter.is_ascii_alphabetic() => {
                    frame.letters.push(letter.to_ascii_lowercase());
                }
                PlayerCommand::TypeLetter { .. } => {}
                PlayerCommand::Detonate => frame.detonate = true,
                PlayerCommand::Back => frame.back = true,
                PlayerCommand::Confirm => frame.confirm = true,
                PlayerCommand::SelectPrevious => frame.select_previous = true,
                PlayerCommand::SelectNext => frame.select_next = true,
            }
        }
        frame
    }
}
