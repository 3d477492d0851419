//! Display-unit selection and formatting.
//!
//! pH and nH are shown as integers, µH, mH and H with two decimals.  A
//! unit is *enabled* for a result when the value it would show is not
//! zero, and the *best* unit is the first enabled one that puts the
//! magnitude in `[1, 1000)`.

use std::fmt;

use converter::InductanceUnit;
use log::{error, trace};
use serde::{Deserialize, Serialize};

use crate::engine::Inductance;
use crate::error::*;

const SMALLEST: InductanceUnit = InductanceUnit::Picohenry;

// ── A value in one unit ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub unit:  InductanceUnit,
}

impl Reading {
    pub fn new(result: Inductance, unit: InductanceUnit) -> Self {
        Self { value: result.in_unit(unit), unit }
    }

    /// Whether the value survives rounding to the unit's display precision.
    pub fn is_visible(&self) -> bool {
        let scale = 10f64.powi(self.unit.display_decimals() as i32);
        (self.value * scale).round().abs() >= 1.0
    }

    /// `1 ≤ |value| < 1000`
    pub fn in_readable_range(&self) -> bool {
        (1.0..1000.0).contains(&self.value.abs())
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.display_decimals() {
            0 => {
                // Round the magnitude, then put the sign back; never print "-0".
                let magnitude = self.value.abs().round();
                let shown = if self.value < 0.0 && magnitude != 0.0 { -magnitude } else { magnitude };
                write!(f, "{shown:.0} {}", self.unit)
            }
            decimals => write!(f, "{:.*} {}", decimals, self.value, self.unit),
        }
    }
}

// ── Selection rules ─────────────────────────────────────────────────

/// Units whose rounded display value is non-zero, smallest unit first.
///
/// Empty when the result rounds to zero everywhere; see
/// [`DisplayState::derive`] for the fallback.
pub fn suitable_units(result: Inductance) -> Vec<Reading> {
    InductanceUnit::ALL
        .into_iter()
        .map(|unit| Reading::new(result, unit))
        .filter(Reading::is_visible)
        .collect()
}

/// Pick the unit to show by default from [`suitable_units`] output.
///
/// First unit in `[1, 1000)`; failing that the largest unit when even it
/// reads ≥ 1000, else the smallest.  Picohenry when `suitable` is empty.
pub fn best_unit(suitable: &[Reading]) -> InductanceUnit {
    if let Some(r) = suitable.iter().find(|r| r.in_readable_range()) {
        return r.unit;
    }
    match (suitable.first(), suitable.last()) {
        (_, Some(largest)) if largest.value.abs() >= 1000.0 => largest.unit,
        (Some(smallest), _) => smallest.unit,
        _ => SMALLEST,
    }
}

/// `"Calculated Inductance: {value} {unit}"`
pub fn format_display(result: Inductance, unit: InductanceUnit) -> String {
    format!("Calculated Inductance: {}", Reading::new(result, unit))
}

// ── Derived view ────────────────────────────────────────────────────

/// Everything a front end needs to render a result: which unit choices
/// to enable, which one to select, and the text to show.
///
/// Always rebuilt from an [`Inductance`]; nothing here is tracked
/// independently of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub result:   Inductance,
    /// Never empty.
    pub enabled:  Vec<Reading>,
    pub best:     InductanceUnit,
    pub selected: InductanceUnit,
}

impl DisplayState {
    pub fn derive(result: Inductance) -> Self {
        let mut enabled = suitable_units(result);
        if enabled.is_empty() {
            enabled.push(Reading::new(result, SMALLEST));
        }
        let best = best_unit(&enabled);
        trace!(
            "{result}: enabled [{}], best {best}",
            enabled.iter().map(|r| r.unit.symbol()).collect::<Vec<_>>().join(", ")
        );
        Self { result, enabled, best, selected: best }
    }

    pub fn is_enabled(&self, unit: InductanceUnit) -> bool {
        self.enabled.iter().any(|r| r.unit == unit)
    }

    pub fn enabled_units(&self) -> Vec<InductanceUnit> {
        self.enabled.iter().map(|r| r.unit).collect()
    }

    /// Switch to another enabled unit without recomputing.
    pub fn select(&mut self, unit: InductanceUnit) -> Result<()> {
        if !self.is_enabled(unit) {
            return Err(InductorError::UnitNotEnabled(unit));
        }
        self.selected = unit;
        Ok(())
    }

    pub fn reading(&self) -> Reading {
        Reading::new(self.result, self.selected)
    }

    pub fn text(&self) -> String {
        format_display(self.result, self.selected)
    }

    /// Pretty JSON object holding the full state and its display text.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::json!({
            "state": self,
            "text": self.text(),
        });
        serde_json::to_string_pretty(&json).map_err(|e| {
            error!("cannot serialize display state: {e}");
            InductorError::Output(e.to_string())
        })
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
