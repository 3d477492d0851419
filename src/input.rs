// ── Input fields and validation ─────────────────────────────────────

use std::fmt;

use converter::{CapacitanceUnit, InductanceUnit, TimeUnit, UnitSystem};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::*;

/// One of the calculator's four numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Capacitor,
    Cycles,
    Time,
    ParasiticInductance,
}

impl Field {
    /// Validation order used by [`MeasurementInput::parse`].
    pub const ALL: [Field; 4] = [
        Field::Capacitor,
        Field::Cycles,
        Field::Time,
        Field::ParasiticInductance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Capacitor           => "Capacitor",
            Field::Cycles              => "Cycles",
            Field::Time                => "Time",
            Field::ParasiticInductance => "Parasitic inductance",
        }
    }

    /// Parasitic inductance is a correction and may be zero or negative.
    pub fn allows_negative(self) -> bool {
        matches!(self, Field::ParasiticInductance)
    }

    /// [`validate`] with this field's sign rule.
    pub fn parse(self, raw: &str) -> Result<f64> {
        validate(self, raw, self.allows_negative())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a decimal number typed into `field`.
///
/// Surrounding whitespace is ignored.  `inf` and `NaN` parse as floats
/// but are rejected as not-a-number.  Unless `allow_negative` is set the
/// value must be strictly greater than zero.
pub fn validate(field: Field, raw: &str, allow_negative: bool) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InductorError::NotANumber {
            field,
            input: raw.to_string(),
        })?;

    if !allow_negative && value <= 0.0 {
        return Err(InductorError::NonPositive { field, value });
    }
    Ok(value)
}

// ── Raw text as typed by the user ───────────────────────────────────

/// The four input strings, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub capacitance: String,
    pub parasitic:   String,
    pub cycles:      String,
    pub time:        String,
}

impl RawInputs {
    pub fn new(
        capacitance: impl Into<String>,
        parasitic: impl Into<String>,
        cycles: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            capacitance: capacitance.into(),
            parasitic:   parasitic.into(),
            cycles:      cycles.into(),
            time:        time.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Capacitor           => &self.capacitance,
            Field::Cycles              => &self.cycles,
            Field::Time                => &self.time,
            Field::ParasiticInductance => &self.parasitic,
        }
    }
}

impl Default for RawInputs {
    /// The calculator's initial entries: 10 nF, no parasitic correction,
    /// cycles and time left blank.
    fn default() -> Self {
        Self::new("10", "0", "", "")
    }
}

// ── Validated measurement ───────────────────────────────────────────

/// One calculation request: parsed values together with their units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub capacitance:      f64,
    pub capacitance_unit: CapacitanceUnit,
    /// Parasitic inductance of the test fixture; may be zero or negative.
    pub parasitic:        f64,
    pub parasitic_unit:   InductanceUnit,
    /// Number of oscillation cycles counted on the scope.
    pub cycles:           f64,
    /// Total time spanned by those cycles.
    pub time:             f64,
    pub time_unit:        TimeUnit,
}

impl MeasurementInput {
    /// Validate the four strings in field order and pair them with the
    /// selected units.  The first invalid field is reported.
    pub fn parse(raw: &RawInputs, units: &UnitSystem) -> Result<Self> {
        let mut values = [0.0; 4];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            *slot = field.parse(raw.get(field))?;
        }
        let [capacitance, cycles, time, parasitic] = values;
        debug!(
            "validated input: C={capacitance} {}, cycles={cycles}, t={time} {}, Lp={parasitic} {}",
            units.capacitance, units.time, units.parasitic
        );

        Ok(Self {
            capacitance,
            capacitance_unit: units.capacitance,
            parasitic,
            parasitic_unit: units.parasitic,
            cycles,
            time,
            time_unit: units.time,
        })
    }

    /// Build from already-parsed values, applying the same sign rules
    /// as [`parse`](Self::parse).
    pub fn new(
        capacitance: f64,
        cycles: f64,
        time: f64,
        parasitic: f64,
        units: &UnitSystem,
    ) -> Result<Self> {
        for (field, value) in [
            (Field::Capacitor, capacitance),
            (Field::Cycles, cycles),
            (Field::Time, time),
            (Field::ParasiticInductance, parasitic),
        ] {
            if !value.is_finite() {
                return Err(InductorError::NotANumber { field, input: value.to_string() });
            }
            if !field.allows_negative() && value <= 0.0 {
                return Err(InductorError::NonPositive { field, value });
            }
        }

        Ok(Self {
            capacitance,
            capacitance_unit: units.capacitance,
            parasitic,
            parasitic_unit: units.parasitic,
            cycles,
            time,
            time_unit: units.time,
        })
    }

    /// Units of this measurement.
    pub fn units(&self) -> UnitSystem {
        UnitSystem::new()
            .capacitance(self.capacitance_unit)
            .parasitic(self.parasitic_unit)
            .time(self.time_unit)
    }
}
