//! One-second tick scheduler for the controller.
//!
//! The scheduler owns the controller and serializes host commands and ticks
//! on a single task. Ticks are only armed while the countdown is running, and
//! the interval restarts whenever the countdown (re)starts.

use tokio::sync::mpsc;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use super::sink::DisplaySink;
use super::timer::PomodoroController;

// ============================================================================
// BarCommand
// ============================================================================

/// Commands the host UI sends to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarCommand {
    /// Choose the duration for the next session
    SelectDuration(u32),
    /// Choose the duration from a textual tag; unrecognized tags select the default
    SelectDurationTag(Option<String>),
    /// Set or clear the task label
    SetTask(Option<String>),
    /// Start a session
    Start,
    /// Pause a running session or resume a paused one
    PauseOrResume,
    /// The combined start/pause/resume button
    Primary,
    /// Abandon the current session
    Skip,
    /// Stop the scheduler
    Quit,
}

// ============================================================================
// TickScheduler
// ============================================================================

/// Drives a [`PomodoroController`] from a command channel and a tokio interval.
pub struct TickScheduler<S: DisplaySink> {
    controller: PomodoroController<S>,
    period: Duration,
}

impl<S: DisplaySink> TickScheduler<S> {
    /// Creates a scheduler ticking at the controller's configured period.
    pub fn new(controller: PomodoroController<S>) -> Self {
        let period = controller.tick_period();
        Self { controller, period }
    }

    /// Overrides the tick period.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Runs until `Quit` is received or every command sender is dropped.
    ///
    /// Returns the controller so the host can inspect its final state.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<BarCommand>) -> PomodoroController<S> {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let Some(command) = command else {
                        tracing::debug!("command channel closed");
                        break;
                    };
                    if command == BarCommand::Quit {
                        tracing::debug!("quit requested");
                        break;
                    }

                    let was_running = self.controller.is_running();
                    self.apply(command);
                    if !was_running && self.controller.is_running() {
                        ticker.reset();
                    }
                }
                _ = ticker.tick(), if self.controller.is_running() => {
                    self.controller.tick();
                }
            }
        }

        self.controller
    }

    fn apply(&mut self, command: BarCommand) {
        tracing::debug!(?command, "applying command");
        match command {
            BarCommand::SelectDuration(minutes) => self.controller.select_duration(minutes),
            BarCommand::SelectDurationTag(tag) => self.controller.select_duration_tag(tag.as_deref()),
            BarCommand::SetTask(task) => self.controller.set_task(task),
            BarCommand::Start => self.controller.start(),
            BarCommand::PauseOrResume => self.controller.pause_or_resume(),
            BarCommand::Primary => self.controller.press_primary(),
            BarCommand::Skip => self.controller.skip(),
            BarCommand::Quit => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
