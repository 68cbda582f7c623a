//! Countdown state machine for the focus bar.
//!
//! This module provides the controller that:
//! - Records the selected duration preset
//! - Starts, pauses, resumes and skips sessions
//! - Advances the countdown once per tick
//! - Emits a [`DisplayUpdate`] after every visible change
//!
//! The controller is synchronous and infallible. Commands that do not apply
//! to the current phase are ignored.

use std::time::Duration;

use crate::types::{
    BarConfig, CompletionTally, DisplayUpdate, PresetTable, PrimaryLabel, Session, SessionState,
    StatusSnapshot, UpdateEvent, MAX_PRESET_MINUTES,
};

use super::sink::DisplaySink;

// ============================================================================
// Phase
// ============================================================================

/// Single source of truth for "is there a session" and "is it ticking".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Stopped,
    Running(Session),
    Paused(Session),
}

impl Phase {
    fn session(&self) -> Option<&Session> {
        match self {
            Phase::Stopped => None,
            Phase::Running(session) | Phase::Paused(session) => Some(session),
        }
    }
}

// ============================================================================
// PomodoroController
// ============================================================================

/// Countdown controller that owns the session and publishes display updates.
pub struct PomodoroController<S: DisplaySink> {
    phase: Phase,
    presets: PresetTable,
    default_minutes: u32,
    selected_minutes: u32,
    tick_period: Duration,
    task: Option<String>,
    tally: CompletionTally,
    sink: S,
}

impl<S: DisplaySink> PomodoroController<S> {
    /// Creates a stopped controller.
    pub fn new(config: BarConfig, sink: S) -> Self {
        Self {
            phase: Phase::Stopped,
            presets: config.presets,
            default_minutes: config.default_minutes,
            selected_minutes: config.default_minutes,
            tick_period: config.tick_period,
            task: None,
            tally: CompletionTally::default(),
            sink,
        }
    }

    /// Creates a stopped controller with the default presets.
    pub fn with_defaults(sink: S) -> Self {
        Self::new(BarConfig::default(), sink)
    }

    /// Records the duration to use for the next session.
    ///
    /// Ignored while a session exists. Zero falls back to the default and
    /// anything above `MAX_PRESET_MINUTES` is capped.
    pub fn select_duration(&mut self, minutes: u32) {
        if self.phase != Phase::Stopped {
            tracing::debug!(minutes, "duration selection ignored, session active");
            return;
        }

        self.selected_minutes = match minutes {
            0 => {
                tracing::debug!("zero-minute selection, using default");
                self.default_minutes
            }
            m if m > MAX_PRESET_MINUTES => {
                tracing::debug!(minutes, max = MAX_PRESET_MINUTES, "selection capped");
                MAX_PRESET_MINUTES
            }
            m => m,
        };
    }

    /// Records the duration from a textual preset tag.
    ///
    /// Missing or unparseable tags select the default duration.
    pub fn select_duration_tag(&mut self, tag: Option<&str>) {
        let minutes = tag.and_then(|t| t.trim().parse::<u32>().ok());
        if minutes.is_none() {
            tracing::debug!(?tag, "unrecognized duration tag, using default");
        }
        self.select_duration(minutes.unwrap_or(self.default_minutes));
    }

    /// Sets the task label. Only editable while stopped.
    pub fn set_task(&mut self, task: Option<String>) {
        if self.phase != Phase::Stopped {
            tracing::debug!("task label is read-only during a session");
            return;
        }
        self.task = task
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }

    /// Starts a session from the selected duration.
    ///
    /// No-op unless stopped.
    pub fn start(&mut self) {
        if self.phase != Phase::Stopped {
            tracing::debug!(state = %self.state(), "start ignored, session active");
            return;
        }

        let kind = self.presets.classify(self.selected_minutes);
        let session = Session::new(kind, self.selected_minutes);
        self.phase = Phase::Running(session);

        tracing::debug!(
            state = %kind,
            total_seconds = session.total_seconds,
            "session started"
        );
        self.emit_session(UpdateEvent::Started, session, PrimaryLabel::Pause);
    }

    /// Halts a running countdown or continues a paused one.
    ///
    /// Never changes the session kind or the remaining time.
    pub fn pause_or_resume(&mut self) {
        match self.phase {
            Phase::Stopped => {
                tracing::debug!("pause/resume ignored, no session");
            }
            Phase::Running(session) => {
                self.phase = Phase::Paused(session);
                tracing::debug!(remaining = session.remaining_seconds, "paused");
                self.emit_session(UpdateEvent::Paused, session, PrimaryLabel::Resume);
            }
            Phase::Paused(session) => {
                self.phase = Phase::Running(session);
                tracing::debug!(remaining = session.remaining_seconds, "resumed");
                self.emit_session(UpdateEvent::Resumed, session, PrimaryLabel::Pause);
            }
        }
    }

    /// The combined primary button: start when stopped, otherwise toggle.
    pub fn press_primary(&mut self) {
        if self.phase == Phase::Stopped {
            self.start();
        } else {
            self.pause_or_resume();
        }
    }

    /// Advances the countdown by one second.
    ///
    /// No-op unless running. When the countdown reaches zero the session is
    /// recorded as completed and the controller returns to stopped.
    pub fn tick(&mut self) {
        let Phase::Running(mut session) = self.phase else {
            tracing::trace!("tick ignored, not running");
            return;
        };

        let completed = session.tick();
        self.phase = Phase::Running(session);
        tracing::trace!(remaining = session.remaining_seconds, "tick");
        self.emit_session(UpdateEvent::Tick, session, PrimaryLabel::Pause);

        if completed {
            self.tally.record(session.kind);
            self.phase = Phase::Stopped;
            tracing::debug!(state = %session.kind, "session completed");
            self.emit_stopped(UpdateEvent::Completed, 0.0);
        }
    }

    /// Abandons the current session. Always succeeds, even when stopped.
    pub fn skip(&mut self) {
        if let Some(session) = self.phase.session() {
            tracing::debug!(
                state = %session.kind,
                remaining = session.remaining_seconds,
                "session skipped"
            );
        }
        self.phase = Phase::Stopped;
        self.emit_stopped(UpdateEvent::Skipped, 100.0);
    }

    // ------------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------------

    /// Kind of the active session, or `Stopped`.
    pub fn state(&self) -> SessionState {
        self.phase
            .session()
            .map_or(SessionState::Stopped, |s| s.kind)
    }

    /// Returns true while the countdown is ticking.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// Returns true while a session exists but is halted.
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused(_))
    }

    /// Remaining seconds of the active session, zero when stopped.
    pub fn remaining_seconds(&self) -> u32 {
        self.phase.session().map_or(0, |s| s.remaining_seconds)
    }

    /// Total seconds of the active session, zero when stopped.
    pub fn total_seconds(&self) -> u32 {
        self.phase.session().map_or(0, |s| s.total_seconds)
    }

    pub fn selected_minutes(&self) -> u32 {
        self.selected_minutes
    }

    /// Interval the host should tick at.
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    pub fn tally(&self) -> CompletionTally {
        self.tally
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the controller, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns a serializable view of the controller.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            state: self.state(),
            running: self.is_running(),
            remaining_seconds: self.remaining_seconds(),
            total_seconds: self.total_seconds(),
            selected_minutes: self.selected_minutes,
            task: self.task.clone(),
            completed: self.tally,
        }
    }

    fn emit_session(&mut self, event: UpdateEvent, session: Session, label: PrimaryLabel) {
        let update = DisplayUpdate::for_session(event, &session, label, self.task.clone());
        self.sink.publish(update);
    }

    fn emit_stopped(&mut self, event: UpdateEvent, progress_percent: f64) {
        let update = DisplayUpdate::stopped(event, progress_percent, self.task.clone());
        self.sink.publish(update);
    }
}

// ============================================================================
// Tests
// ============================================================================
