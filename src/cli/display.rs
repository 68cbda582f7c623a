//! Display utilities for the focus bar CLI.
//!
//! This module renders:
//! - Display updates as one text line (or one JSON line)
//! - The preset list
//! - The end-of-run summary
//! - Error messages

use crate::types::{DisplayUpdate, PresetTable, PrimaryLabel, SessionState, StatusSnapshot};

/// Width of the text progress bar, in cells.
const BAR_WIDTH: usize = 20;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Formats a display update as a single line of text.
    ///
    /// Example: `[集中] 24:59 |###################-|  99.9% (Pause) Write docs`
    pub fn format_update(update: &DisplayUpdate) -> String {
        let label = if update.primary_label == PrimaryLabel::Resume {
            format!("{} 一時停止中", Self::state_label(update.state))
        } else {
            Self::state_label(update.state).to_string()
        };

        let mut line = format!(
            "[{}] {} |{}| {:>5.1}% ({})",
            label,
            update.time_text,
            Self::progress_bar(update.progress_percent, BAR_WIDTH),
            update.progress_percent,
            update.primary_label.as_str(),
        );

        if let Some(task) = &update.task {
            line.push(' ');
            line.push_str(task);
        }
        line
    }

    /// Renders an update as text or as a JSON line.
    pub fn render_update(update: &DisplayUpdate, json: bool) -> serde_json::Result<String> {
        if json {
            serde_json::to_string(update)
        } else {
            Ok(Self::format_update(update))
        }
    }

    /// Shows the preset table.
    pub fn show_presets(presets: &PresetTable) {
        println!("プリセット一覧");
        println!("─────────────────────────────");
        for (minutes, kind) in presets.iter() {
            println!("{:>3}分  {}", minutes, Self::state_label(kind));
        }
        println!("その他の時間は「{}」として扱います", Self::state_label(SessionState::Focus));
    }

    /// Shows the preset table as JSON.
    pub fn show_presets_json(presets: &PresetTable) -> serde_json::Result<()> {
        println!("{}", Self::presets_json(presets)?);
        Ok(())
    }

    fn presets_json(presets: &PresetTable) -> serde_json::Result<String> {
        let entries: Vec<serde_json::Value> = presets
            .iter()
            .map(|(minutes, kind)| serde_json::json!({ "minutes": minutes, "state": kind }))
            .collect();
        serde_json::to_string(&entries)
    }

    /// Shows the summary printed when the bar exits.
    pub fn show_summary(snapshot: &StatusSnapshot) {
        println!("{}", Self::format_summary(snapshot));
    }

    fn format_summary(snapshot: &StatusSnapshot) -> String {
        let completed = &snapshot.completed;
        format!(
            "完了したセッション: {} {} / {} {} / {} {}",
            Self::state_label(SessionState::Focus),
            completed.focus,
            Self::state_label(SessionState::ShortBreak),
            completed.short_break,
            Self::state_label(SessionState::LongBreak),
            completed.long_break,
        )
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Shows a hint below an error.
    pub fn show_hint(hint: &str) {
        eprintln!("  {}", hint);
    }

    fn state_label(state: SessionState) -> &'static str {
        match state {
            SessionState::Stopped => "停止中",
            SessionState::Focus => "集中",
            SessionState::ShortBreak => "休憩",
            SessionState::LongBreak => "長い休憩",
        }
    }

    /// Draws `width` cells, filled in proportion to `percent`.
    fn progress_bar(percent: f64, width: usize) -> String {
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;
        format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
    }
}

// ============================================================================
// Tests
// ============================================================================
