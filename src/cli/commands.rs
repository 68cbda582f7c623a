//! Command definitions for the focus bar CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};
use tokio::time::Duration;

use crate::types::{BarConfig, DEFAULT_MINUTES};

// ============================================================================
// CLI Structure
// ============================================================================

/// Focus Bar - a Pomodoro countdown in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "focusbar",
    version,
    about = "ポモドーロ式フォーカスバー",
    long_about = "画面端に置くフォーカスバーのカウントダウンをターミナルで動かします。\n\
                  標準入力からボタン操作を受け付け、表示更新を1行ずつ出力します。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the focus bar interactively
    Run(RunArgs),

    /// List the duration presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Initially selected duration in minutes (5, 15, 25 are presets)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub duration: u32,

    /// Task label for the session
    #[arg(short, long, value_parser = validate_task_name)]
    pub task: Option<String>,

    /// Start the countdown immediately
    #[arg(short, long)]
    pub autostart: bool,

    /// Print display updates as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Tick interval in milliseconds
    #[arg(
        long,
        hide = true,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_ms: u64,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            duration: DEFAULT_MINUTES,
            task: None,
            autostart: false,
            json: false,
            tick_ms: 1000,
        }
    }
}

impl RunArgs {
    /// Builds the bar configuration for these arguments.
    pub fn to_config(&self) -> BarConfig {
        BarConfig::default().with_tick_period(Duration::from_millis(self.tick_ms))
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates the task name.
///
/// - Must not be empty
/// - Must not exceed 100 characters
fn validate_task_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("タスク名は空にできません".to_string());
    }
    if s.chars().count() > 100 {
        return Err("タスク名は100文字以内にしてください".to_string());
    }
    Ok(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================
