//! Terminal host for the focus bar.
//!
//! Wires the controller to the outside world: commands arrive on a channel,
//! the [`TickScheduler`] drives the countdown, and every display update is
//! written as one line to the output.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use super::commands::RunArgs;
use super::display::Display;
use crate::controller::{BarCommand, PomodoroController, TickScheduler};
use crate::types::config::MAX_PRESET_MINUTES;
use crate::types::{ConfigError, DisplayUpdate, StatusSnapshot};

/// Runs the bar until `Quit` arrives or the command channel closes.
///
/// Returns the final controller status.
pub async fn run_host<W: Write>(
    args: &RunArgs,
    commands: mpsc::UnboundedReceiver<BarCommand>,
    output: &mut W,
) -> Result<StatusSnapshot> {
    let config = args.to_config();
    config.validate().context("設定が不正です")?;
    anyhow::ensure!(
        (1..=MAX_PRESET_MINUTES).contains(&args.duration),
        ConfigError::PresetOutOfRange(args.duration)
    );

    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<DisplayUpdate>();
    let mut controller = PomodoroController::new(config, update_tx);
    controller.select_duration(args.duration);
    controller.set_task(args.task.clone());
    if args.autostart {
        controller.start();
    }

    tracing::info!(
        minutes = args.duration,
        autostart = args.autostart,
        "focus bar started"
    );

    // The controller owns the only sender; dropping it ends the render loop.
    let scheduler = async move {
        let controller = TickScheduler::new(controller).run(commands).await;
        controller.snapshot()
    };

    let render = async {
        while let Some(update) = update_rx.recv().await {
            let line = Display::render_update(&update, args.json)
                .context("表示更新のシリアライズに失敗しました")?;
            writeln!(output, "{}", line).context("出力に失敗しました")?;
            output.flush().context("出力に失敗しました")?;
        }
        Ok::<(), anyhow::Error>(())
    };

    tokio::pin!(scheduler, render);

    // A failed write ends the host without waiting for the scheduler.
    let first = tokio::select! {
        snapshot = &mut scheduler => Ok(snapshot),
        rendered = &mut render => Err(rendered),
    };
    let snapshot = match first {
        Ok(snapshot) => {
            render.await?;
            snapshot
        }
        Err(rendered) => {
            rendered?;
            scheduler.await
        }
    };

    tracing::info!(completed = snapshot.completed.total(), "focus bar stopped");
    Ok(snapshot)
}
