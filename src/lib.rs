//! Conversor library exports: the conversion core and the terminal adapter.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::convert::{convert_speed, convert_temp, format_value};
pub use crate::core::sanitize::sanitize;
pub use crate::core::units::{Conversion, Mode, SpeedUnit, TempUnit, Unit};
