//! Metric-prefix unit conversion for LC resonance measurements.
//!
//! Every quantity has an SI base unit: **F** for capacitance, **H** for
//! inductance, **s** for time.  Each supported unit carries a factor to
//! that base, and conversion is a single multiplication (or division on
//! the way back).
//!
//! | Quantity      | Units (smallest → largest)  | Base |
//! |---------------|-----------------------------|------|
//! | Capacitance   | pF, nF, µF                  | F    |
//! | Inductance    | pH, nH, µH, mH, H           | H    |
//! | Time          | nS, µS, mS                  | s    |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, CapacitanceUnit, TimeUnit};
//!
//! let units = UnitSystem::new()
//!     .capacitance(CapacitanceUnit::Picofarad)
//!     .time(TimeUnit::Nanosecond);
//! ```
//!
//! # Symbol-keyed conversion
//!
//! ```
//! use converter::{to_base, Quantity};
//!
//! let farads = to_base(Quantity::Capacitance, 10.0, "nF")?;
//! assert!((farads - 10e-9).abs() < 1e-20);
//! # Ok::<(), converter::UnitError>(())
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────
//  Errors
// ────────────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The symbol is not one of the quantity's supported units.
    #[error("Unknown {quantity} unit: {symbol:?}")]
    UnknownUnit { quantity: Quantity, symbol: String },
}

pub type Result<T> = std::result::Result<T, UnitError>;

// ────────────────────────────────────────────────────────────────────
//  Quantity
// ────────────────────────────────────────────────────────────────────

/// Physical quantity handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quantity {
    Capacitance,
    Inductance,
    Time,
}

impl Quantity {
    /// Symbol of the SI base unit (factor 1).
    pub fn base_symbol(self) -> &'static str {
        match self {
            Quantity::Capacitance => "F",
            Quantity::Inductance  => "H",
            Quantity::Time        => "s",
        }
    }

    /// Canonical symbols of the supported units, smallest first.
    pub fn symbols(self) -> Vec<&'static str> {
        match self {
            Quantity::Capacitance => CapacitanceUnit::ALL.iter().map(|u| u.symbol()).collect(),
            Quantity::Inductance  => InductanceUnit::ALL.iter().map(|u| u.symbol()).collect(),
            Quantity::Time        => TimeUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }

    /// Factor to the base unit for a unit symbol of this quantity.
    pub fn factor(self, symbol: &str) -> Result<f64> {
        match self {
            Quantity::Capacitance => symbol.parse::<CapacitanceUnit>().map(|u| u.factor()),
            Quantity::Inductance  => symbol.parse::<InductanceUnit>().map(|u| u.factor()),
            Quantity::Time        => symbol.parse::<TimeUnit>().map(|u| u.factor()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Capacitance => "capacitance",
            Quantity::Inductance  => "inductance",
            Quantity::Time        => "time",
        };
        f.write_str(name)
    }
}

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Capacitance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapacitanceUnit {
    /// Picofarad (1e-12 F)
    Picofarad,
    /// Nanofarad (1e-9 F)
    Nanofarad,
    /// Microfarad (1e-6 F)
    Microfarad,
}

impl CapacitanceUnit {
    pub const ALL: [CapacitanceUnit; 3] = [
        CapacitanceUnit::Picofarad,
        CapacitanceUnit::Nanofarad,
        CapacitanceUnit::Microfarad,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CapacitanceUnit::Picofarad  => "pF",
            CapacitanceUnit::Nanofarad  => "nF",
            CapacitanceUnit::Microfarad => "µF",
        }
    }

    /// Factor to farads.
    pub fn factor(self) -> f64 {
        match self {
            CapacitanceUnit::Picofarad  => 1e-12,
            CapacitanceUnit::Nanofarad  => 1e-9,
            CapacitanceUnit::Microfarad => 1e-6,
        }
    }
}

/// Inductance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InductanceUnit {
    /// Picohenry (1e-12 H)
    Picohenry,
    /// Nanohenry (1e-9 H)
    Nanohenry,
    /// Microhenry (1e-6 H)
    Microhenry,
    /// Millihenry (1e-3 H)
    Millihenry,
    /// Henry (SI base)
    Henry,
}

impl InductanceUnit {
    pub const ALL: [InductanceUnit; 5] = [
        InductanceUnit::Picohenry,
        InductanceUnit::Nanohenry,
        InductanceUnit::Microhenry,
        InductanceUnit::Millihenry,
        InductanceUnit::Henry,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            InductanceUnit::Picohenry  => "pH",
            InductanceUnit::Nanohenry  => "nH",
            InductanceUnit::Microhenry => "µH",
            InductanceUnit::Millihenry => "mH",
            InductanceUnit::Henry      => "H",
        }
    }

    /// Factor to henries.
    pub fn factor(self) -> f64 {
        match self {
            InductanceUnit::Picohenry  => 1e-12,
            InductanceUnit::Nanohenry  => 1e-9,
            InductanceUnit::Microhenry => 1e-6,
            InductanceUnit::Millihenry => 1e-3,
            InductanceUnit::Henry      => 1.0,
        }
    }

    /// Factor to picohenries.  Exact in `f64`, unlike `factor() * 1e12`.
    pub fn picohenries(self) -> f64 {
        match self {
            InductanceUnit::Picohenry  => 1.0,
            InductanceUnit::Nanohenry  => 1e3,
            InductanceUnit::Microhenry => 1e6,
            InductanceUnit::Millihenry => 1e9,
            InductanceUnit::Henry      => 1e12,
        }
    }

    /// Number of decimals a value in this unit is displayed with.
    pub fn display_decimals(self) -> usize {
        match self {
            InductanceUnit::Picohenry | InductanceUnit::Nanohenry => 0,
            _ => 2,
        }
    }
}

/// Time unit.  Symbols follow the calculator's labels (`nS`, `µS`,
/// `mS`); lower-case `s` is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    /// Nanosecond (1e-9 s)
    Nanosecond,
    /// Microsecond (1e-6 s)
    Microsecond,
    /// Millisecond (1e-3 s)
    Millisecond,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Nanosecond  => "nS",
            TimeUnit::Microsecond => "µS",
            TimeUnit::Millisecond => "mS",
        }
    }

    /// Factor to seconds.
    pub fn factor(self) -> f64 {
        match self {
            TimeUnit::Nanosecond  => 1e-9,
            TimeUnit::Microsecond => 1e-6,
            TimeUnit::Millisecond => 1e-3,
        }
    }
}

// ── Symbol parsing ──────────────────────────────────────────────────

/// Rewrites the ASCII `u` and Greek `μ` spellings of micro to `µ`.
fn normalize_micro(symbol: &str) -> String {
    let trimmed = symbol.trim();
    match trimmed.strip_prefix('u').or_else(|| trimmed.strip_prefix('μ')) {
        Some(rest) if !rest.is_empty() => format!("µ{rest}"),
        _ => trimmed.to_string(),
    }
}

fn parse_symbol<U: Copy>(
    quantity: Quantity,
    symbol: &str,
    all: &[U],
    symbol_of: impl Fn(U) -> &'static str,
    normalize: impl Fn(&str) -> String,
) -> Result<U> {
    let wanted = normalize(&normalize_micro(symbol));
    all.iter()
        .copied()
        .find(|u| normalize(symbol_of(*u)) == wanted)
        .ok_or_else(|| UnitError::UnknownUnit {
            quantity,
            symbol: symbol.to_string(),
        })
}

impl FromStr for CapacitanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_symbol(Quantity::Capacitance, s, &Self::ALL, Self::symbol, str::to_string)
    }
}

impl FromStr for InductanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_symbol(Quantity::Inductance, s, &Self::ALL, Self::symbol, str::to_string)
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self> {
        // "ms" and "mS" mean the same thing here; the prefix stays case-sensitive.
        parse_symbol(Quantity::Time, s, &Self::ALL, Self::symbol, |sym| {
            match sym.strip_suffix('s') {
                Some(prefix) => format!("{prefix}S"),
                None => sym.to_string(),
            }
        })
    }
}

impl fmt::Display for CapacitanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.symbol()) }
}

impl fmt::Display for InductanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.symbol()) }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(self.symbol()) }
}

// ── Symbol-keyed conversion ─────────────────────────────────────────

/// Convert `value` expressed in `symbol` to the quantity's base unit.
pub fn to_base(quantity: Quantity, value: f64, symbol: &str) -> Result<f64> {
    Ok(value * quantity.factor(symbol)?)
}

/// Convert a base-unit `value` to the unit named by `symbol`.
pub fn from_base(quantity: Quantity, value: f64, symbol: &str) -> Result<f64> {
    Ok(value / quantity.factor(symbol)?)
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — the user's current unit selections
// ────────────────────────────────────────────────────────────────────

/// Units the measurement inputs are entered in.
///
/// Defaults match the calculator: nF, pH, µS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitSystem {
    pub capacitance: CapacitanceUnit,
    pub parasitic:   InductanceUnit,
    pub time:        TimeUnit,
}

impl UnitSystem {
    pub fn new() -> Self {
        Self {
            capacitance: CapacitanceUnit::Nanofarad,
            parasitic:   InductanceUnit::Picohenry,
            time:        TimeUnit::Microsecond,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn capacitance(mut self, u: CapacitanceUnit) -> Self { self.capacitance = u; self }
    pub fn parasitic(mut self, u: InductanceUnit) -> Self { self.parasitic = u; self }
    pub fn time(mut self, u: TimeUnit) -> Self { self.time = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::new() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter — UnitSystem → ready to convert
// ────────────────────────────────────────────────────────────────────

/// Converts user-unit inputs to the units the inductance formula works
/// in: farads, seconds and picohenries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// User → F
    pub fn capacitance_to_farads(&self, c: f64) -> f64 {
        c * self.units.capacitance.factor()
    }

    /// User → s
    pub fn time_to_seconds(&self, t: f64) -> f64 {
        t * self.units.time.factor()
    }

    /// User → pH
    pub fn parasitic_to_picohenries(&self, l: f64) -> f64 {
        l * self.units.parasitic.picohenries()
    }

    /// pH → any inductance unit.
    pub fn inductance_from_picohenries(l_ph: f64, unit: InductanceUnit) -> f64 {
        l_ph / unit.picohenries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_increase_with_magnitude() {
        for pair in InductanceUnit::ALL.windows(2) {
            assert!(pair[0].factor() < pair[1].factor(), "{:?}", pair);
            assert!(pair[0].picohenries() < pair[1].picohenries(), "{:?}", pair);
        }
        for pair in CapacitanceUnit::ALL.windows(2) {
            assert!(pair[0].factor() < pair[1].factor(), "{:?}", pair);
        }
        for pair in TimeUnit::ALL.windows(2) {
            assert!(pair[0].factor() < pair[1].factor(), "{:?}", pair);
        }
        assert_eq!(InductanceUnit::Henry.factor(), 1.0);
    }

    #[test]
    fn roundtrip_every_supported_symbol() {
        for quantity in [Quantity::Capacitance, Quantity::Inductance, Quantity::Time] {
            for symbol in quantity.symbols() {
                for original in [42.0, -3.5, 0.001, 1e6] {
                    let base = to_base(quantity, original, symbol).unwrap();
                    let back = from_base(quantity, base, symbol).unwrap();
                    assert!(
                        ((back - original) / original).abs() < 1e-12,
                        "roundtrip failed for {quantity} {symbol}: {original} → {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn to_base_uses_table_factor() {
        assert_eq!(to_base(Quantity::Capacitance, 10.0, "nF").unwrap(), 10.0 * 1e-9);
        assert_eq!(to_base(Quantity::Time, 1.0, "µS").unwrap(), 1e-6);
        assert_eq!(to_base(Quantity::Inductance, 5.0, "H").unwrap(), 5.0);
        assert_eq!(from_base(Quantity::Inductance, 1e-3, "mH").unwrap(), 1.0);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = to_base(Quantity::Capacitance, 1.0, "mF").unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit { quantity: Quantity::Capacitance, symbol: "mF".into() }
        );
        // A valid symbol of another quantity is still unknown here.
        assert!(from_base(Quantity::Time, 1.0, "nH").is_err());
        assert!("".parse::<InductanceUnit>().is_err());
    }

    #[test]
    fn micro_spellings_are_accepted() {
        assert_eq!("uF".parse::<CapacitanceUnit>().unwrap(), CapacitanceUnit::Microfarad);
        assert_eq!("μH".parse::<InductanceUnit>().unwrap(), InductanceUnit::Microhenry);
        assert_eq!("µH".parse::<InductanceUnit>().unwrap(), InductanceUnit::Microhenry);
        assert_eq!("us".parse::<TimeUnit>().unwrap(), TimeUnit::Microsecond);
        assert_eq!(" mS ".parse::<TimeUnit>().unwrap(), TimeUnit::Millisecond);
        assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Nanosecond);
    }

    #[test]
    fn prefix_case_is_significant() {
        // "MH" would be megahenry, which is not supported.
        assert!("MH".parse::<InductanceUnit>().is_err());
        assert_eq!("mH".parse::<InductanceUnit>().unwrap(), InductanceUnit::Millihenry);
    }

    #[test]
    fn display_matches_symbol() {
        for unit in InductanceUnit::ALL {
            assert_eq!(unit.to_string(), unit.symbol());
            assert_eq!(unit.symbol().parse::<InductanceUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn converter_uses_selected_units() {
        let conv = Converter::new(
            UnitSystem::new()
                .capacitance(CapacitanceUnit::Picofarad)
                .time(TimeUnit::Millisecond)
                .parasitic(InductanceUnit::Nanohenry),
        );
        assert_eq!(conv.capacitance_to_farads(1.0), 1e-12);
        assert_eq!(conv.time_to_seconds(2.0), 2e-3);
        assert_eq!(conv.parasitic_to_picohenries(3.0), 3000.0);
        assert_eq!(Converter::inductance_from_picohenries(2e9, InductanceUnit::Millihenry), 2.0);
    }

    #[test]
    fn defaults_match_calculator() {
        let units = UnitSystem::default();
        assert_eq!(units.capacitance, CapacitanceUnit::Nanofarad);
        assert_eq!(units.parasitic, InductanceUnit::Picohenry);
        assert_eq!(units.time, TimeUnit::Microsecond);
    }
}
