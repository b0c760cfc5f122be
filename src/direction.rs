//! The eight compass directions a sequence can follow.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::StepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

impl Direction {
    /// `(column delta, row delta)`; rows grow upward.
    pub const fn unit_vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }

    /// Canonical long name, e.g. `up-left`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        }
    }

    /// Short code shown on the input form, e.g. `LU`.
    pub const fn code(self) -> &'static str {
        match self {
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::UpLeft => "LU",
            Direction::UpRight => "RU",
            Direction::DownLeft => "LD",
            Direction::DownRight => "RD",
        }
    }

    /// Direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

impl From<Direction> for (i8, i8) {
    fn from(direction: Direction) -> Self {
        direction.unit_vector()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = StepError;

    /// Case-insensitive; `_` and spaces count as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let dir = match token.as_str() {
            "up" | "u" => Direction::Up,
            "down" | "d" => Direction::Down,
            "left" | "l" => Direction::Left,
            "right" | "r" => Direction::Right,
            "up-left" | "left-up" | "ul" | "lu" => Direction::UpLeft,
            "up-right" | "right-up" | "ur" | "ru" => Direction::UpRight,
            "down-left" | "left-down" | "dl" | "ld" => Direction::DownLeft,
            "down-right" | "right-down" | "dr" | "rd" => Direction::DownRight,
            _ => return Err(StepError::InvalidDirection(s.trim().to_string())),
        };
        Ok(dir)
    }
}
