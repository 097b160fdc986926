//! # SourceInput
//!
//! Turns editing keystrokes into whole-field edits for the core.
//!
//! The field always edits at its end, like a numeric keypad. The current text
//! is a prop synced from `App` each frame; this component never sanitizes,
//! it just proposes the new raw text and `App::set_input` cleans it.

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SourceInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The field should now read this (unsanitized) text
    Edited(String),
    Cleared,
}

pub struct SourceInput {
    /// Current field content (Prop)
    pub text: String,
}

impl SourceInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }
}

impl EventHandler for SourceInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut next = self.text.clone();
                next.push(*c);
                Some(InputEvent::Edited(next))
            }
            TuiEvent::Paste(pasted) => Some(InputEvent::Edited(format!("{}{}", self.text, pasted))),
            TuiEvent::Backspace => {
                let mut next = self.text.clone();
                next.pop()?;
                Some(InputEvent::Edited(next))
            }
            TuiEvent::ClearInput => (!self.text.is_empty()).then_some(InputEvent::Cleared),
            _ => None,
        }
    }
}
