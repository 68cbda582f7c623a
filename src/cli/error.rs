//! Input error types.
//!
//! Errors raised while turning a line of user input into a
//! [`BarCommand`](crate::controller::BarCommand). None of them are fatal:
//! the host reports the problem and keeps reading.

use thiserror::Error;

/// Errors that can occur while parsing a command line from stdin.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The command word is not recognized.
    #[error("不明なコマンドです: '{0}'")]
    UnknownCommand(String),
}

impl CommandParseError {
    /// Returns a short hint listing the accepted commands.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => {
                "使えるコマンド: Enter(開始/一時停止/再開), start, pause, skip, d <分>, t <タスク>, quit"
            }
        }
    }
}
