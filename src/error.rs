use converter::{InductanceUnit, UnitError};
use thiserror::Error;

use crate::input::Field;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InductorError {
    /// The field's text is not a finite decimal number.
    #[error("{field} - Please enter valid numbers")]
    NotANumber { field: Field, input: String },

    /// Zero or negative value in a field that must be strictly positive.
    #[error("{field} - Values must be greater than zero")]
    NonPositive { field: Field, value: f64 },

    /// Unit symbol outside the quantity's supported set.
    #[error(transparent)]
    UnknownUnit(#[from] UnitError),

    /// A denominator of the resonance formula was zero or the result was
    /// not finite.  Validation rules this out, so seeing it means a caller
    /// skipped validation.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// The display unit would show the result as zero.
    #[error("Display unit {0} is not enabled for this result")]
    UnitNotEnabled(InductanceUnit),

    /// Display requested before any successful calculation.
    #[error("No inductance has been calculated yet")]
    NoResult,

    /// A configuration key holds a value that cannot be used.
    #[error("Invalid setting {key}={value:?}: {reason}")]
    InvalidSetting { key: String, value: String, reason: String },

    /// A result could not be rendered for output.
    #[error("Cannot render output: {0}")]
    Output(String),
}

impl InductorError {
    /// Input field responsible for a validation error, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            InductorError::NotANumber { field, .. } | InductorError::NonPositive { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }

    /// `true` for errors caused by what the user typed.
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }

    /// Text for the calculator's status line.
    pub fn status_line(&self) -> String {
        format!("Error: {self}")
    }
}

pub type Result<T> = std::result::Result<T, InductorError>;
