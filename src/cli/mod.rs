//! CLI module for the focus bar.
//!
//! This module provides the terminal host:
//! - `commands`: Command definitions using clap derive
//! - `input`: Parsing stdin lines into button presses
//! - `host`: Wiring the controller, scheduler and renderer together
//! - `display`: Output formatting and display logic
//! - `error`: Input error types

pub mod commands;
pub mod display;
pub mod error;
pub mod host;
pub mod input;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
pub use error::CommandParseError;
pub use host::run_host;
pub use input::{parse_command, spawn_input_reader};
