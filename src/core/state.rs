//! # Application State
//!
//! Core state for the converter screen. Domain logic only; presentation
//! state (animation, cached layout) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── mode: Mode                          // which unit family is active
//! ├── speed: UnitPair<SpeedUnit>          // remembered across mode switches
//! ├── temperature: UnitPair<TempUnit>     // remembered across mode switches
//! ├── input: String                       // sanitized source value
//! └── output: String                      // derived, never set directly
//! ```
//!
//! `output` is always `recompute()`'d from the other fields. Every method
//! that touches an input of the conversion ends by calling it.

use log::{debug, info};

use crate::core::convert::format_value;
use crate::core::sanitize::sanitize;
use crate::core::units::{Conversion, Mode, SpeedUnit, TempUnit, UnitPair};

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub mode: Mode,
    pub speed: UnitPair<SpeedUnit>,
    pub temperature: UnitPair<TempUnit>,
    input: String,
    output: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl App {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            speed: UnitPair::default(),
            temperature: UnitPair::default(),
            input: String::new(),
            output: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// The conversion selected by the current mode and that mode's unit pair.
    pub fn conversion(&self) -> Conversion {
        match self.mode {
            Mode::Speed => Conversion::Speed {
                from: self.speed.from,
                to: self.speed.to,
            },
            Mode::Temperature => Conversion::Temperature {
                from: self.temperature.from,
                to: self.temperature.to,
            },
        }
    }

    /// True when the active pair is flipped from its default orientation.
    pub fn is_reversed(&self) -> bool {
        match self.mode {
            Mode::Speed => self.speed != UnitPair::default(),
            Mode::Temperature => self.temperature != UnitPair::default(),
        }
    }

    /// Replace the typed value. The raw text is sanitized first.
    pub fn set_input(&mut self, raw: &str) {
        self.input = sanitize(raw);
        self.recompute();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.recompute();
    }

    /// Swap source and target of the active pair. The typed value stays.
    pub fn toggle_direction(&mut self) {
        match self.mode {
            Mode::Speed => self.speed = self.speed.swapped(),
            Mode::Temperature => self.temperature = self.temperature.swapped(),
        }
        let conversion = self.conversion();
        info!(
            "Direction toggled: {} → {}",
            conversion.source_symbol(),
            conversion.target_symbol()
        );
        self.recompute();
    }

    /// Switch unit family. Returns `false` (and changes nothing) when `mode`
    /// is already active; otherwise the typed value is discarded.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        info!("Mode changed: {:?} → {:?}", self.mode, mode);
        self.mode = mode;
        self.input.clear();
        self.recompute();
        true
    }

    /// Derive `output` from the current input and conversion.
    pub fn recompute(&mut self) {
        self.output = self
            .conversion()
            .apply(&self.input)
            .map(format_value)
            .unwrap_or_default();
        debug!("Recomputed {:?} -> {:?}", self.input, self.output);
    }
}
