//! Core data types for the focus bar.
//!
//! This module defines the data structures used for:
//! - Session classification and display colors
//! - The countdown session itself
//! - Display-update values emitted to the host UI
//! - Serializable status snapshots

pub mod config;

use serde::{Deserialize, Serialize};

pub use config::{BarConfig, ConfigError, PresetTable, DEFAULT_MINUTES, MAX_PRESET_MINUTES};

// ============================================================================
// SessionState
// ============================================================================

/// Classification of the current (or last started) session.
///
/// `Stopped` is both the initial state and the state every run returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No session is active
    #[default]
    Stopped,
    /// A focus (work) session
    Focus,
    /// A short break
    ShortBreak,
    /// A long break
    LongBreak,
}

impl SessionState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Stopped => "stopped",
            SessionState::Focus => "focus",
            SessionState::ShortBreak => "short_break",
            SessionState::LongBreak => "long_break",
        }
    }

    /// Returns the background color the host should paint for this state.
    pub fn color(&self) -> BarColor {
        match self {
            SessionState::Stopped => BarColor::Neutral,
            SessionState::Focus => BarColor::Focus,
            SessionState::ShortBreak => BarColor::ShortBreak,
            SessionState::LongBreak => BarColor::LongBreak,
        }
    }

    /// Returns true for every state except `Stopped`.
    pub fn is_session(&self) -> bool {
        !matches!(self, SessionState::Stopped)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BarColor
// ============================================================================

/// Background color of the bar. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    /// Cleared background while stopped
    Neutral,
    /// Cornflower blue
    Focus,
    /// Medium sea green
    ShortBreak,
    /// Steel blue
    LongBreak,
}

impl BarColor {
    /// Returns the RGB hex code, or `None` for the transparent neutral color.
    pub fn hex(&self) -> Option<&'static str> {
        match self {
            BarColor::Neutral => None,
            BarColor::Focus => Some("#6495ED"),
            BarColor::ShortBreak => Some("#3CB371"),
            BarColor::LongBreak => Some("#4682B4"),
        }
    }
}

// ============================================================================
// PrimaryLabel
// ============================================================================

/// Label of the primary button, always naming the next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryLabel {
    Start,
    Pause,
    Resume,
}

impl PrimaryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryLabel::Start => "Start",
            PrimaryLabel::Pause => "Pause",
            PrimaryLabel::Resume => "Resume",
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// One countdown run. Kind and total are fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session classification (never `Stopped`)
    pub kind: SessionState,
    /// Total duration in seconds (>= 1)
    pub total_seconds: u32,
    /// Remaining seconds, in `[0, total_seconds]`
    pub remaining_seconds: u32,
}

impl Session {
    /// Creates a full-length session of `minutes` minutes.
    ///
    /// Minutes are clamped to `1..=MAX_PRESET_MINUTES` so that progress is
    /// always defined and the start text is always whole minutes.
    pub fn new(kind: SessionState, minutes: u32) -> Self {
        let total_seconds = minutes.clamp(1, MAX_PRESET_MINUTES) * 60;
        Self {
            kind,
            total_seconds,
            remaining_seconds: total_seconds,
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true once the session has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Remaining time as a percentage of the total, in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        f64::from(self.remaining_seconds) / f64::from(self.total_seconds) * 100.0
    }

    /// Remaining time formatted as `MM:SS`.
    pub fn time_text(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

/// Formats seconds as `MM:SS` (minutes are not capped at 59).
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// DisplayUpdate
// ============================================================================

/// What caused a display update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateEvent {
    /// A session began
    Started,
    /// One second elapsed
    Tick,
    /// The countdown was halted
    Paused,
    /// The countdown continued
    Resumed,
    /// The countdown reached zero
    Completed,
    /// The session was abandoned
    Skipped,
}

/// Immutable value describing everything the host should render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    pub event: UpdateEvent,
    /// State after the transition
    pub state: SessionState,
    /// `MM:SS`
    #[serde(rename = "timeText")]
    pub time_text: String,
    /// In `[0, 100]`
    #[serde(rename = "progressPercent")]
    pub progress_percent: f64,
    #[serde(rename = "backgroundColor")]
    pub color: BarColor,
    #[serde(rename = "primaryLabel")]
    pub primary_label: PrimaryLabel,
    /// True only while stopped
    #[serde(rename = "taskEditable")]
    pub task_editable: bool,
    #[serde(rename = "task", skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl DisplayUpdate {
    /// Builds an update for an active (running or paused) session.
    pub fn for_session(
        event: UpdateEvent,
        session: &Session,
        primary_label: PrimaryLabel,
        task: Option<String>,
    ) -> Self {
        Self {
            event,
            state: session.kind,
            time_text: session.time_text(),
            progress_percent: session.progress_percent(),
            color: session.kind.color(),
            primary_label,
            task_editable: false,
            task,
        }
    }

    /// Builds the terminal update shown after completion or skip.
    pub fn stopped(event: UpdateEvent, progress_percent: f64, task: Option<String>) -> Self {
        Self {
            event,
            state: SessionState::Stopped,
            time_text: format_time(0),
            progress_percent,
            color: BarColor::Neutral,
            primary_label: PrimaryLabel::Start,
            task_editable: true,
            task,
        }
    }
}

// ============================================================================
// CompletionTally
// ============================================================================

/// Count of sessions that ran to zero, per kind. In-memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionTally {
    pub focus: u32,
    #[serde(rename = "shortBreak")]
    pub short_break: u32,
    #[serde(rename = "longBreak")]
    pub long_break: u32,
}

impl CompletionTally {
    /// Records one completed session of the given kind.
    pub fn record(&mut self, kind: SessionState) {
        match kind {
            SessionState::Focus => self.focus += 1,
            SessionState::ShortBreak => self.short_break += 1,
            SessionState::LongBreak => self.long_break += 1,
            SessionState::Stopped => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.focus + self.short_break + self.long_break
    }
}

// ============================================================================
// StatusSnapshot
// ============================================================================

/// Serializable view of the controller, for status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub state: SessionState,
    pub running: bool,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    #[serde(rename = "totalSeconds")]
    pub total_seconds: u32,
    #[serde(rename = "selectedMinutes")]
    pub selected_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub completed: CompletionTally,
}

// ============================================================================
// Tests
// ============================================================================
