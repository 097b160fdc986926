//! # Units
//!
//! The two unit families and the `Conversion` that pairs a source with a target.
//!
//! ```text
//! Mode::Speed        →  Conversion::Speed { from: SpeedUnit, to: SpeedUnit }
//! Mode::Temperature  →  Conversion::Temperature { from: TempUnit, to: TempUnit }
//! ```
//!
//! A speed unit can never end up on one side of a temperature conversion:
//! the enum makes the mix unrepresentable.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    Kmh,
    Mph,
}

impl SpeedUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Mph => "mph",
        }
    }

    pub fn other(self) -> Self {
        match self {
            SpeedUnit::Kmh => SpeedUnit::Mph,
            SpeedUnit::Mph => SpeedUnit::Kmh,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn other(self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }
}

/// Which unit family is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Speed,
    Temperature,
}

impl Mode {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Speed => "Velocidade",
            Mode::Temperature => "Temperatura",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A source/target pair inside one unit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPair<U> {
    pub from: U,
    pub to: U,
}

impl<U: Copy> UnitPair<U> {
    pub fn new(from: U, to: U) -> Self {
        Self { from, to }
    }

    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl Default for UnitPair<SpeedUnit> {
    fn default() -> Self {
        Self::new(SpeedUnit::Kmh, SpeedUnit::Mph)
    }
}

impl Default for UnitPair<TempUnit> {
    fn default() -> Self {
        Self::new(TempUnit::Celsius, TempUnit::Fahrenheit)
    }
}

/// The active conversion: a mode together with its source and target units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Speed { from: SpeedUnit, to: SpeedUnit },
    Temperature { from: TempUnit, to: TempUnit },
}

impl Conversion {
    pub fn mode(&self) -> Mode {
        match self {
            Conversion::Speed { .. } => Mode::Speed,
            Conversion::Temperature { .. } => Mode::Temperature,
        }
    }

    /// Build a conversion from two loosely-typed units.
    ///
    /// Fails when the units belong to different families.
    pub fn from_units(from: Unit, to: Unit) -> Result<Self, ConversionError> {
        match (from, to) {
            (Unit::Speed(from), Unit::Speed(to)) => Ok(Conversion::Speed { from, to }),
            (Unit::Temperature(from), Unit::Temperature(to)) => {
                Ok(Conversion::Temperature { from, to })
            }
            _ => Err(ConversionError::MixedUnits { from, to }),
        }
    }

    pub fn source_symbol(&self) -> &'static str {
        match self {
            Conversion::Speed { from, .. } => from.symbol(),
            Conversion::Temperature { from, .. } => from.symbol(),
        }
    }

    pub fn target_symbol(&self) -> &'static str {
        match self {
            Conversion::Speed { to, .. } => to.symbol(),
            Conversion::Temperature { to, .. } => to.symbol(),
        }
    }

    /// Heading shown above a field: the symbol for speed, the full name for temperature.
    pub fn source_label(&self) -> &'static str {
        match self {
            Conversion::Speed { from, .. } => from.symbol(),
            Conversion::Temperature { from, .. } => from.name(),
        }
    }

    pub fn target_label(&self) -> &'static str {
        match self {
            Conversion::Speed { to, .. } => to.symbol(),
            Conversion::Temperature { to, .. } => to.name(),
        }
    }

    pub fn source_placeholder(&self) -> &'static str {
        match self {
            Conversion::Speed { from, .. } => speed_placeholder(*from),
            Conversion::Temperature { from, .. } => temp_placeholder(*from),
        }
    }

    pub fn target_placeholder(&self) -> &'static str {
        match self {
            Conversion::Speed { to, .. } => speed_placeholder(*to),
            Conversion::Temperature { to, .. } => temp_placeholder(*to),
        }
    }
}

// 80 km/h ≈ 50 mph and 25 °C = 77 °F, so the placeholders agree with each other.
fn speed_placeholder(unit: SpeedUnit) -> &'static str {
    match unit {
        SpeedUnit::Kmh => "80",
        SpeedUnit::Mph => "50",
    }
}

fn temp_placeholder(unit: TempUnit) -> &'static str {
    match unit {
        TempUnit::Celsius => "25",
        TempUnit::Fahrenheit => "77",
    }
}

/// Any single unit, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Speed(SpeedUnit),
    Temperature(TempUnit),
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Speed(u) => u.symbol(),
            Unit::Temperature(u) => u.symbol(),
        }
    }
}

impl ValueEnum for Unit {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Unit::Speed(SpeedUnit::Kmh),
            Unit::Speed(SpeedUnit::Mph),
            Unit::Temperature(TempUnit::Celsius),
            Unit::Temperature(TempUnit::Fahrenheit),
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        use clap::builder::PossibleValue;
        Some(match self {
            Unit::Speed(SpeedUnit::Kmh) => PossibleValue::new("kmh").alias("km/h"),
            Unit::Speed(SpeedUnit::Mph) => PossibleValue::new("mph"),
            Unit::Temperature(TempUnit::Celsius) => {
                PossibleValue::new("celsius").aliases(["c", "°c"])
            }
            Unit::Temperature(TempUnit::Fahrenheit) => {
                PossibleValue::new("fahrenheit").aliases(["f", "°f"])
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    MixedUnits { from: Unit, to: Unit },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MixedUnits { from, to } => write!(
                f,
                "cannot convert {} to {}: units measure different quantities",
                from.symbol(),
                to.symbol()
            ),
        }
    }
}

impl std::error::Error for ConversionError {}
