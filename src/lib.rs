#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod direction;
mod stepper;
#[cfg(feature = "std")]
pub mod clipboard;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod panel;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod service;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use direction::{Direction, ALL_DIRECTIONS};
pub use stepper::*;
#[cfg(feature = "std")]
pub use clipboard::{ClipboardSink, MemorySink, Osc52Sink, StdoutSink};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use panel::{FormFields, Hotkey, PanelError, PanelEvent, StepperPanel};
#[cfg(feature = "std")]
pub use protocol::{Message, RemoteStepError, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use service::{StepClient, StepService};
#[cfg(feature = "std")]
pub use session::Session;
#[cfg(feature = "std")]
pub use transport::tcp::TcpTransport;
