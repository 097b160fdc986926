//! # TUI Components
//!
//! This module contains all UI components for the converter screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: app name and active mode
//! - `ValueField`: heading, value and unit of one side of the conversion
//! - `SwapButton`: divider with the direction arrow
//! - `ModeSelector`: the Velocidade / Temperatura buttons
//!
//! ### Event-Driven Components
//!
//! - `SourceInput`: turns editing keystrokes into whole-field edits
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! ModeSelector::new(app.mode).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! ModeSelector::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── value_field.rs
//! ├── swap_button.rs
//! ├── mode_selector.rs
//! └── source_input.rs
//! ```

pub mod mode_selector;
pub mod source_input;
pub mod swap_button;
pub mod title_bar;
pub mod value_field;

pub use mode_selector::ModeSelector;
pub use source_input::{InputEvent, SourceInput};
pub use swap_button::SwapButton;
pub use title_bar::TitleBar;
pub use value_field::ValueField;
