//! Focus Bar - a Pomodoro countdown for the terminal
//!
//! Pick a preset, start the countdown and watch the bar:
//! - 25 minutes of focus
//! - 5 minutes of short break
//! - 15 minutes of long break

use std::io::{self, BufReader};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::sync::mpsc;

use focusbar::cli::{run_host, spawn_input_reader, Cli, Commands, Display, RunArgs};
use focusbar::controller::BarCommand;
use focusbar::types::PresetTable;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr; stdout carries the display stream.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run(args)) => run(args).await?,
        Some(Commands::Presets { json }) => {
            let presets = PresetTable::default();
            if json {
                Display::show_presets_json(&presets)?;
            } else {
                Display::show_presets(&presets);
            }
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs the interactive bar on stdin/stdout.
async fn run(args: RunArgs) -> Result<()> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    spawn_input_reader(BufReader::new(io::stdin()), command_tx.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received");
            let _ = command_tx.send(BarCommand::Quit);
        }
    });

    let mut stdout = io::stdout();
    let snapshot = run_host(&args, command_rx, &mut stdout).await?;

    if args.json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        Display::show_summary(&snapshot);
    }
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
