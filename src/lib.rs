//! # inductor
//!
//! Inductance of a coil from an LC resonance measured on an oscilloscope.
//!
//! Put the coil in parallel with a known capacitor, ring it with a
//! square wave, count `n` cycles spanning a time `t`.  Then
//! `f = n / t` and `L = 1 / (4π² f² C)`, minus the parasitic inductance
//! of the test fixture.
//!
//! ## Quick example
//!
//! ```
//! use inductor::{InductanceEngine, RawInputs, UnitSystem};
//!
//! // 10 nF, 1 cycle in 1 µS, no parasitic correction.
//! let mut engine = InductanceEngine::new();
//! engine.calculate(&RawInputs::new("10", "0", "1", "1"), &UnitSystem::new())?;
//!
//! let display = engine.display()?;
//! assert_eq!(display.text(), "Calculated Inductance: 2.53 µH");
//! # Ok::<(), inductor::InductorError>(())
//! ```
//!
//! ## Display units
//!
//! A result can be shown in pH, nH, µH, mH or H.  [`DisplayState`] lists
//! the units that would not round to zero and picks the one that puts
//! the value between 1 and 1000:
//!
//! ```
//! use inductor::{DisplayState, Inductance, InductanceUnit};
//!
//! let mut state = DisplayState::derive(Inductance::from_picohenries(25_330.3));
//! assert_eq!(state.best, InductanceUnit::Nanohenry);
//! state.select(InductanceUnit::Picohenry)?;
//! assert_eq!(state.text(), "Calculated Inductance: 25330 pH");
//! # Ok::<(), inductor::InductorError>(())
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod settings;

// ── Public re-exports ────────────────────────────────────────────────
pub use display::{best_unit, format_display, suitable_units, DisplayState, Reading};
pub use engine::{
    compute, compute_from_parts, resonant_frequency, resonant_inductance, Inductance,
    InductanceEngine, STATUS_DONE, STATUS_READY,
};
pub use error::{InductorError, Result};
pub use input::{validate, Field, MeasurementInput, RawInputs};
pub use settings::Settings;

pub use converter::{
    CapacitanceUnit, Converter, InductanceUnit, Quantity, TimeUnit, UnitError, UnitSystem,
};
