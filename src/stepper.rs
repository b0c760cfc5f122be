//! Coordinate stepping: walk `steps` cells from a start along a direction.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::common::{InputError, StepError};
use crate::config::{BOARD_SIZE, SEPARATOR};
use crate::coord::Coordinate;
use crate::direction::Direction;

/// Compute the ordered cells `start + i * direction` for `i` in `0..steps`.
///
/// The start itself is element 0. Fails with `OutOfBounds` on the first
/// candidate that leaves the board; nothing partial is returned.
pub fn step_sequence(
    start: Coordinate,
    direction: Direction,
    steps: usize,
) -> Result<Vec<Coordinate>, StepError> {
    if steps == 0 {
        return Err(InputError::NonPositiveSteps.into());
    }
    let (dc, dr) = direction.unit_vector();
    // a straight line can never hold more than BOARD_SIZE cells
    let mut path = Vec::with_capacity(steps.min(BOARD_SIZE as usize));
    for step in 0..steps {
        // the walk leaves the board before `step` can grow past BOARD_SIZE
        let i = step as i16;
        let cell = start
            .offset(i * dc as i16, i * dr as i16)
            .map_err(|(column, row)| StepError::OutOfBounds { step, column, row })?;
        path.push(cell);
    }
    Ok(path)
}

/// Text-level entry point: validates all three fields, then steps.
pub fn step_sequence_str(
    start: &str,
    direction: &str,
    steps: &str,
) -> Result<Vec<Coordinate>, StepError> {
    StepRequest::from_fields(start, direction, steps)?.run()
}

/// Join coordinates as `H3, H4, H5`.
pub fn format_sequence(path: &[Coordinate]) -> String {
    let mut out = String::new();
    for (i, cell) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}", cell);
    }
    out
}

/// Parse a step count: a positive decimal integer, surrounding whitespace
/// allowed. Counts too large for `usize` saturate; they fail later as
/// `OutOfBounds`.
pub fn parse_steps(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField("steps"));
    }
    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidSteps(trimmed.to_string()));
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(InputError::NonPositiveSteps);
    }
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// A validated stepping request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRequest {
    pub start: Coordinate,
    pub direction: Direction,
    pub steps: usize,
}

impl StepRequest {
    /// Validate the three form fields.
    ///
    /// Checks run in a fixed order: empty fields, step count, start syntax,
    /// direction, then start bounds.
    pub fn from_fields(start: &str, direction: &str, steps: &str) -> Result<Self, StepError> {
        for (name, value) in [("start", start), ("direction", direction), ("steps", steps)] {
            if value.trim().is_empty() {
                return Err(InputError::MissingField(name).into());
            }
        }
        let steps = parse_steps(steps)?;
        let (letter, row) = Coordinate::parse_label(start)?;
        let direction = direction.parse::<Direction>()?;
        let start = Coordinate::from_label(letter, row)?;
        Ok(Self {
            start,
            direction,
            steps,
        })
    }

    pub fn run(&self) -> Result<Vec<Coordinate>, StepError> {
        step_sequence(self.start, self.direction, self.steps)
    }
}

impl fmt::Display for StepRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.direction, self.steps)
    }
}

/// Parses `<start> <direction> <steps>`. Words between the first and the last
/// are joined with `-`, so `H3 up left 4` reads as `up-left`.
impl FromStr for StepRequest {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(InputError::MissingField("start").into()),
            [_] => Err(InputError::MissingField("direction").into()),
            [_, _] => Err(InputError::MissingField("steps").into()),
            [start, middle @ .., steps] => {
                Self::from_fields(start, &middle.join("-"), steps)
            }
        }
    }
}
