//! Controller module for the focus bar.
//!
//! This module contains the countdown core:
//! - `timer`: the session state machine
//! - `sink`: delivery of display updates to the host
//! - `scheduler`: the one-second tick loop that drives the state machine

pub mod scheduler;
pub mod sink;
pub mod timer;

pub use scheduler::{BarCommand, TickScheduler};
pub use sink::{DisplaySink, MockDisplaySink};
pub use timer::PomodoroController;
