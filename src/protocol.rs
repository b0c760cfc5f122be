#![cfg(feature = "std")]

//! Messages exchanged between a stepping client and [`crate::StepService`].

use serde::{Deserialize, Serialize};

use crate::common::{ErrorKind, StepError};
use crate::coord::Coordinate;
use crate::stepper::format_sequence;

pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Opens a connection; the server answers with its own version.
    Hello { version: u32 },
    /// Ask for a sequence. Fields are sent as typed so the server performs all
    /// validation.
    Step {
        seq: u64,
        start: String,
        direction: String,
        steps: String,
    },
    /// Successful answer to `Step` with the same `seq`.
    Path {
        seq: u64,
        coordinates: Vec<Coordinate>,
        text: String,
    },
    /// Failed answer to `Step` with the same `seq`.
    Failure {
        seq: u64,
        kind: ErrorKind,
        message: String,
    },
    /// Either side is done with the connection.
    Bye,
}

impl Message {
    pub fn path(seq: u64, coordinates: Vec<Coordinate>) -> Self {
        let text = format_sequence(&coordinates);
        Message::Path {
            seq,
            coordinates,
            text,
        }
    }

    pub fn failure(seq: u64, err: &StepError) -> Self {
        Message::Failure {
            seq,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// A `Failure` reply surfaced on the client side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStepError {
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for RemoteStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RemoteStepError {}
