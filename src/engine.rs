use std::f64::consts::PI;
use std::fmt;

use converter::{CapacitanceUnit, Converter, InductanceUnit, TimeUnit, UnitSystem};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::display::DisplayState;
use crate::error::*;
use crate::input::{MeasurementInput, RawInputs};

pub const STATUS_READY: &str = "Ready to calculate";
pub const STATUS_DONE: &str = "Calculation completed successfully";

// ── Result type ─────────────────────────────────────────────────────

/// A calculated inductance, held in picohenries so sub-nanohenry
/// results keep their precision.
///
/// May be negative when the parasitic correction exceeds the measured
/// value; that is reported, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inductance(f64);

impl Inductance {
    pub fn from_picohenries(l_ph: f64) -> Self {
        Self(l_ph)
    }

    pub fn from_henries(l_h: f64) -> Self {
        Self(l_h * InductanceUnit::Henry.picohenries())
    }

    pub fn picohenries(self) -> f64 {
        self.0
    }

    pub fn henries(self) -> f64 {
        self.in_unit(InductanceUnit::Henry)
    }

    /// Value expressed in `unit`.
    pub fn in_unit(self, unit: InductanceUnit) -> f64 {
        Converter::inductance_from_picohenries(self.0, unit)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl fmt::Display for Inductance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pH", self.0)
    }
}

// ── Resonance formula ───────────────────────────────────────────────

/// `cycles / time`, in Hz.
pub fn resonant_frequency(cycles: f64, time_seconds: f64) -> Result<f64> {
    if time_seconds == 0.0 {
        return Err(division_by_zero("waveform time is zero"));
    }
    Ok(cycles / time_seconds)
}

/// `L = 1 / (4 π² f² C)`, in henries.
pub fn resonant_inductance(frequency: f64, capacitance_farads: f64) -> Result<f64> {
    let denominator = 4.0 * PI.powi(2) * frequency.powi(2) * capacitance_farads;
    if denominator == 0.0 {
        return Err(division_by_zero("frequency or capacitance is zero"));
    }
    let l = 1.0 / denominator;
    if !l.is_finite() {
        return Err(division_by_zero("inductance is not finite"));
    }
    Ok(l)
}

fn division_by_zero(reason: &str) -> InductorError {
    error!("resonance formula rejected unvalidated input: {reason}");
    InductorError::DivisionByZero(reason.to_string())
}

/// Inductance of the coil under test for one measurement, after
/// subtracting the fixture's parasitic inductance.
pub fn compute(input: &MeasurementInput) -> Result<Inductance> {
    let conv = Converter::new(input.units());

    let c_farads = conv.capacitance_to_farads(input.capacitance);
    let t_seconds = conv.time_to_seconds(input.time);

    let frequency = resonant_frequency(input.cycles, t_seconds)?;
    let l_henries = resonant_inductance(frequency, c_farads)?;
    debug!("f = {frequency} Hz, C = {c_farads} F → L = {l_henries} H");

    let measured = Inductance::from_henries(l_henries);
    let parasitic_ph = conv.parasitic_to_picohenries(input.parasitic);
    let result = Inductance::from_picohenries(measured.picohenries() - parasitic_ph);
    if !result.picohenries().is_finite() {
        return Err(division_by_zero("inductance is not finite"));
    }

    if result.is_negative() {
        warn!(
            "parasitic inductance ({parasitic_ph} pH) exceeds the measured value ({} pH)",
            measured.picohenries()
        );
    }
    Ok(result)
}

/// Positional form of [`compute`] for callers holding loose values.
pub fn compute_from_parts(
    capacitance: f64,
    capacitance_unit: CapacitanceUnit,
    cycles: f64,
    time: f64,
    time_unit: TimeUnit,
    parasitic: f64,
    parasitic_unit: InductanceUnit,
) -> Result<Inductance> {
    compute(&MeasurementInput {
        capacitance,
        capacitance_unit,
        parasitic,
        parasitic_unit,
        cycles,
        time,
        time_unit,
    })
}

// ── Engine ──────────────────────────────────────────────────────────

/// Owns the most recent result.
///
/// Starts without a result; each successful calculation replaces it and
/// a failed one leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct InductanceEngine {
    result: Option<Inductance>,
}

impl InductanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute from an already validated measurement and store the result.
    pub fn compute(&mut self, input: &MeasurementInput) -> Result<Inductance> {
        let l = compute(input)?;
        self.result = Some(l);
        Ok(l)
    }

    /// Validate the raw strings, then compute.
    pub fn calculate(&mut self, raw: &RawInputs, units: &UnitSystem) -> Result<Inductance> {
        let input = MeasurementInput::parse(raw, units)?;
        self.compute(&input)
    }

    pub fn result(&self) -> Option<Inductance> {
        self.result
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Display units derived from the current result.
    pub fn display(&self) -> Result<DisplayState> {
        self.result
            .map(DisplayState::derive)
            .ok_or(InductorError::NoResult)
    }

    pub fn status(&self) -> &'static str {
        if self.has_result() { STATUS_DONE } else { STATUS_READY }
    }
}
