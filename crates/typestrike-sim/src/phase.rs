//! Game phase machine.
//!
//! `transition` decides what a tick does from the current phase and that
//! tick's input edges. It never touches the world; the engine applies the
//! returned `Transition`.

use typestrike_core::commands::InputFrame;
use typestrike_core::constants::PLANE_OPTION_COUNT;
use typestrike_core::enums::GamePhase;

/// Character select state: highlighted plane and whether it was confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneSelection {
    pub index: usize,
    pub complete: bool,
}

impl PlaneSelection {
    /// Apply one frame of character select input. Left wins over Right when
    /// both arrive in the same frame.
    pub fn update(&mut self, input: &InputFrame) {
        if input.select_previous {
            self.index = (self.index + PLANE_OPTION_COUNT - 1) % PLANE_OPTION_COUNT;
        } else if input.select_next {
            self.index = (self.index + 1) % PLANE_OPTION_COUNT;
        }
        if input.confirm {
            self.complete = true;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the engine should do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changes.
    Stay,
    /// Run one simulation step (Playing only).
    Step,
    /// Switch phase without touching game state.
    Goto(GamePhase),
    /// Selection confirmed: initialise a new game with this plane.
    StartGame { plane: usize },
    /// Leave GameOver: reset the selection and win flag.
    ReturnToMenu,
    /// Escape on the main menu.
    Exit,
}

/// Decide the transition for one tick.
///
/// Back is handled before anything else, so Escape and Enter in the same
/// frame on the pause screen lands on the main menu, and the main menu then
/// sees the Enter.
pub fn transition(
    phase: GamePhase,
    input: &InputFrame,
    selection: &mut PlaneSelection,
) -> Transition {
    let mut current = phase;

    if input.back {
        match current {
            GamePhase::Playing => current = GamePhase::Paused,
            GamePhase::Paused => current = GamePhase::MainMenu,
            GamePhase::MainMenu => return Transition::Exit,
            GamePhase::CharacterSelect | GamePhase::GameOver => {}
        }
    }

    match current {
        GamePhase::MainMenu if input.confirm => current = GamePhase::CharacterSelect,
        GamePhase::CharacterSelect => {
            selection.update(input);
            if selection.complete {
                return Transition::StartGame {
                    plane: selection.index,
                };
            }
        }
        GamePhase::Playing => return Transition::Step,
        GamePhase::Paused if input.confirm => current = GamePhase::Playing,
        GamePhase::GameOver if input.confirm => return Transition::ReturnToMenu,
        _ => {}
    }

    if current != phase {
        Transition::Goto(current)
    } else {
        Transition::Stay
    }
}
