//! Duration presets and bar configuration.
//!
//! The preset table is the only configuration surface: it classifies a
//! selected duration into a session kind. Unmapped durations count as focus.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SessionState;

/// Duration used when no valid selection was made.
pub const DEFAULT_MINUTES: u32 = 25;

/// Upper bound for any preset, in minutes.
pub const MAX_PRESET_MINUTES: u32 = 120;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while validating a [`BarConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A preset duration is outside 1-120 minutes.
    #[error("プリセット時間は1-{max}分の範囲で指定してください（指定値: {0}）", max = MAX_PRESET_MINUTES)]
    PresetOutOfRange(u32),

    /// A preset was mapped to the stopped state.
    #[error("プリセット {0}分 に停止状態は割り当てられません")]
    StoppedPreset(u32),

    /// The tick period is zero.
    #[error("ティック間隔は0より大きい値を指定してください")]
    ZeroTickPeriod,
}

// ============================================================================
// PresetTable
// ============================================================================

/// Maps preset durations (minutes) to session kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTable {
    entries: BTreeMap<u32, SessionState>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::empty()
            .with_preset(5, SessionState::ShortBreak)
            .with_preset(15, SessionState::LongBreak)
            .with_preset(DEFAULT_MINUTES, SessionState::Focus)
    }
}

impl PresetTable {
    /// Creates a table with no presets; everything classifies as focus.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces a preset.
    #[must_use]
    pub fn with_preset(mut self, minutes: u32, kind: SessionState) -> Self {
        self.entries.insert(minutes, kind);
        self
    }

    /// Classifies a duration. Durations without a preset are focus sessions.
    pub fn classify(&self, minutes: u32) -> SessionState {
        self.entries
            .get(&minutes)
            .copied()
            .unwrap_or(SessionState::Focus)
    }

    /// Returns true if `minutes` is one of the configured presets.
    pub fn contains(&self, minutes: u32) -> bool {
        self.entries.contains_key(&minutes)
    }

    /// Iterates presets in ascending order of duration.
    pub fn iter(&self) -> impl Iterator<Item = (u32, SessionState)> + '_ {
        self.entries.iter().map(|(m, k)| (*m, *k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates every preset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (minutes, kind) in self.iter() {
            if !(1..=MAX_PRESET_MINUTES).contains(&minutes) {
                return Err(ConfigError::PresetOutOfRange(minutes));
            }
            if kind == SessionState::Stopped {
                return Err(ConfigError::StoppedPreset(minutes));
            }
        }
        Ok(())
    }
}

// ============================================================================
// BarConfig
// ============================================================================

/// Configuration for the focus bar controller and its scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    /// Duration presets
    pub presets: PresetTable,
    /// Duration selected before the user picks anything
    pub default_minutes: u32,
    /// Interval between ticks (one second outside of tests)
    pub tick_period: Duration,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            presets: PresetTable::default(),
            default_minutes: DEFAULT_MINUTES,
            tick_period: Duration::from_secs(1),
        }
    }
}

impl BarConfig {
    /// Replaces the preset table.
    #[must_use]
    pub fn with_presets(mut self, presets: PresetTable) -> Self {
        self.presets = presets;
        self
    }

    /// Sets the initially selected duration.
    #[must_use]
    pub fn with_default_minutes(mut self, minutes: u32) -> Self {
        self.default_minutes = minutes;
        self
    }

    /// Sets the tick period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.presets.validate()?;
        if !(1..=MAX_PRESET_MINUTES).contains(&self.default_minutes) {
            return Err(ConfigError::PresetOutOfRange(self.default_minutes));
        }
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }
}
