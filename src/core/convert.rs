//! # Conversion Engine
//!
//! Pure arithmetic. Each function takes the raw text the user typed plus the
//! unit pair and yields `Some(value)`, or `None` when the text is not a number.
//! `None` is the "nothing to show" sentinel; it is never an error.
//!
//! Rounding is half toward positive infinity: speed to whole numbers,
//! temperature to two decimal places.

use crate::core::units::{Conversion, SpeedUnit, TempUnit};

/// Miles per kilometre.
pub const MPH_PER_KMH: f64 = 0.621371;

pub fn convert_speed(input: &str, from: SpeedUnit, to: SpeedUnit) -> Option<f64> {
    let value = parse_number(input)?;
    let result = match (from, to) {
        (SpeedUnit::Kmh, SpeedUnit::Mph) => value * MPH_PER_KMH,
        (SpeedUnit::Mph, SpeedUnit::Kmh) => value / MPH_PER_KMH,
        _ => value,
    };
    Some(round_half_up(result))
}

pub fn convert_temp(input: &str, from: TempUnit, to: TempUnit) -> Option<f64> {
    let value = parse_number(input)?;
    let result = match (from, to) {
        (TempUnit::Celsius, TempUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (TempUnit::Fahrenheit, TempUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    };
    Some(round_half_up(result * 100.0) / 100.0)
}

impl Conversion {
    /// Run the conversion function that belongs to this unit family.
    pub fn apply(&self, input: &str) -> Option<f64> {
        match *self {
            Conversion::Speed { from, to } => convert_speed(input, from, to),
            Conversion::Temperature { from, to } => convert_temp(input, from, to),
        }
    }
}

/// Parse a decimal number, ignoring surrounding whitespace.
/// Infinite and NaN values count as unparseable.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render a result for display: `77` rather than `77.00`, `25.56` as is, never `-0`.
pub fn format_value(value: f64) -> String {
    // Adding positive zero turns -0.0 into 0.0 and leaves everything else alone.
    format!("{}", value + 0.0)
}

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}
