#![cfg(feature = "std")]

//! The input panel: a three-field form that is opened and closed by hotkeys
//! and sends each computed sequence to a [`ClipboardSink`].

use std::fmt;
use std::str::FromStr;

use crate::clipboard::ClipboardSink;
use crate::common::StepError;
use crate::coord::Coordinate;
use crate::stepper::{format_sequence, StepRequest};

pub const OPEN_HOTKEY: &str = "Ctrl+H";
pub const CLOSE_HOTKEY: &str = "Ctrl+B";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    Open,
    Close,
}

impl FromStr for Hotkey {
    type Err = anyhow::Error;

    /// Accepts `ctrl+h`, `Ctrl-H`, `c-h` and `^h` style chords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chord: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let key = chord
            .strip_prefix("ctrl+")
            .or_else(|| chord.strip_prefix("ctrl-"))
            .or_else(|| chord.strip_prefix("c-"))
            .or_else(|| chord.strip_prefix('^'));
        match key {
            Some("h") => Ok(Hotkey::Open),
            Some("b") => Ok(Hotkey::Close),
            _ => Err(anyhow::anyhow!("unknown hotkey '{}'", s.trim())),
        }
    }
}

/// What a hotkey did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Opened,
    Closed,
    AlreadyOpen,
    AlreadyClosed,
}

#[derive(Debug)]
pub enum PanelError {
    /// The panel must be open to accept input.
    Closed,
    Step(StepError),
    /// The sink refused the result.
    Copy(anyhow::Error),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Closed => write!(f, "Panel is closed - press {} to open it", OPEN_HOTKEY),
            PanelError::Step(e) => write!(f, "{}", e),
            PanelError::Copy(e) => write!(f, "Could not copy result: {}", e),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<StepError> for PanelError {
    fn from(err: StepError) -> Self {
        PanelError::Step(err)
    }
}

/// Raw text of the three form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub start: String,
    pub direction: String,
    pub steps: String,
}

impl FormFields {
    pub fn new(start: &str, direction: &str, steps: &str) -> Self {
        Self {
            start: start.to_string(),
            direction: direction.to_string(),
            steps: steps.to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.start.clear();
        self.direction.clear();
        self.steps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.direction.is_empty() && self.steps.is_empty()
    }
}

/// Owns the panel's visibility and form state. Starts closed.
pub struct StepperPanel<S: ClipboardSink> {
    visible: bool,
    form: FormFields,
    sink: S,
}

impl<S: ClipboardSink> StepperPanel<S> {
    pub fn new(sink: S) -> Self {
        Self {
            visible: false,
            form: FormFields::default(),
            sink,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) -> PanelEvent {
        if self.visible {
            return PanelEvent::AlreadyOpen;
        }
        self.visible = true;
        log::debug!("panel opened");
        PanelEvent::Opened
    }

    /// Close the panel, discarding whatever the form held.
    pub fn close(&mut self) -> PanelEvent {
        if !self.visible {
            return PanelEvent::AlreadyClosed;
        }
        self.visible = false;
        self.form.clear();
        log::debug!("panel closed");
        PanelEvent::Closed
    }

    pub fn handle_hotkey(&mut self, key: Hotkey) -> PanelEvent {
        match key {
            Hotkey::Open => self.open(),
            Hotkey::Close => self.close(),
        }
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Replace the form contents.
    pub fn fill(&mut self, fields: FormFields) -> Result<(), PanelError> {
        if !self.visible {
            return Err(PanelError::Closed);
        }
        self.form = fields;
        Ok(())
    }

    /// Compute the sequence for the current form and copy it to the sink.
    ///
    /// On success the fields are cleared for the next entry and the panel stays
    /// open. On failure the fields are left as typed.
    pub fn submit(&mut self) -> Result<Vec<Coordinate>, PanelError> {
        if !self.visible {
            return Err(PanelError::Closed);
        }
        let request =
            StepRequest::from_fields(&self.form.start, &self.form.direction, &self.form.steps)?;
        let path = request.run()?;
        self.sink
            .copy(&format_sequence(&path))
            .map_err(PanelError::Copy)?;
        log::info!("copied {} coordinates for {}", path.len(), request);
        self.form.clear();
        Ok(path)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
