//! Error types shared by the stepper, the panel and the wire protocol.

use alloc::string::String;
use core::fmt;

/// Coarse error category, stable across the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    InvalidInput,
    InvalidDirection,
    OutOfBounds,
}

/// Why a piece of text input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was left empty; carries the field name.
    MissingField(&'static str),
    /// Start text is not a column letter followed by a row number.
    InvalidCoordinate(String),
    /// Step count is not an integer.
    InvalidSteps(String),
    /// Step count is zero or negative.
    NonPositiveSteps,
}

/// Errors returned by stepper operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// Malformed coordinate or step count.
    InvalidInput(InputError),
    /// Direction token matched none of the eight directions.
    InvalidDirection(String),
    /// The candidate at `step` left the board. `column` is the zero-based
    /// column index, `row` the one-based row number.
    OutOfBounds { step: usize, column: i16, row: i16 },
}

impl StepError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StepError::InvalidInput(_) => ErrorKind::InvalidInput,
            StepError::InvalidDirection(_) => ErrorKind::InvalidDirection,
            StepError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}

impl From<InputError> for StepError {
    fn from(err: InputError) -> Self {
        StepError::InvalidInput(err)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::InvalidDirection => write!(f, "invalid direction"),
            ErrorKind::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingField(name) => write!(f, "the {} field is required", name),
            InputError::InvalidCoordinate(text) => write!(
                f,
                "'{}' is not a coordinate - expected a column letter and a row number (e.g. H3)",
                text
            ),
            InputError::InvalidSteps(text) => {
                write!(f, "'{}' is not a step count - expected a positive integer", text)
            }
            InputError::NonPositiveSteps => write!(f, "step count must be a positive integer"),
        }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            StepError::InvalidDirection(token) => write!(
                f,
                "Invalid direction '{}' - expected U, D, L, R, LU, RU, LD or RD",
                token
            ),
            StepError::OutOfBounds { step, column, row } => {
                write!(f, "Out of bounds: step {} lands on ", step)?;
                match u8::try_from(*column).ok().filter(|c| *c < 26) {
                    Some(c) => write!(f, "{}{}", (b'A' + c) as char, row)?,
                    None => write!(f, "column #{}, row {}", column, row)?,
                }
                write!(f, ", outside the board")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(feature = "std")]
impl std::error::Error for StepError {}
