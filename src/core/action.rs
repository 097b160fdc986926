//! # Actions
//!
//! Everything that can happen on the converter screen becomes an `Action`.
//! User types a digit? That's `Action::EditInput(text)`.
//! User presses the arrow? That's `Action::ToggleDirection`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what to do outside the core (animate, quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::core::units::Mode;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The source field now reads `text` (unsanitized).
    EditInput(String),
    ClearInput,
    ToggleDirection,
    SelectMode(Mode),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Rotate the direction arrow; `reversed` is the orientation to end in.
    Rotate { reversed: bool },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::EditInput(text) => {
            app.set_input(&text);
            Effect::None
        }
        Action::ClearInput => {
            app.clear_input();
            Effect::None
        }
        Action::ToggleDirection => {
            app.toggle_direction();
            Effect::Rotate {
                reversed: app.is_reversed(),
            }
        }
        Action::SelectMode(mode) => {
            if app.select_mode(mode) {
                // The newly active pair may sit in a different orientation.
                Effect::Rotate {
                    reversed: app.is_reversed(),
                }
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}
