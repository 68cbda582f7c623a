//! Focus Bar Library
//!
//! This library provides the core of a Pomodoro-style focus bar.
//! It includes:
//! - The countdown state machine and its display-update stream
//! - A tokio-driven one-second tick scheduler
//! - Duration presets and configuration
//! - A terminal host (CLI parsing, stdin commands, line rendering)

pub mod cli;
pub mod controller;
pub mod types;

// Re-export commonly used types for convenience
pub use controller::{BarCommand, DisplaySink, MockDisplaySink, PomodoroController, TickScheduler};
pub use types::{
    BarColor, BarConfig, CompletionTally, ConfigError, DisplayUpdate, PresetTable, PrimaryLabel,
    Session, SessionState, StatusSnapshot, UpdateEvent,
};
