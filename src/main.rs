//! VMF Spawner setup entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vmf_spawner_setup::cli::{report_error, Cli, CommandDispatcher};
use vmf_spawner_setup::process::is_ci;
use vmf_spawner_setup::ui::{create_ui, OutputMode};
use vmf_spawner_setup::SetupError;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `check --json` output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vmf_spawner_setup=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vmf_spawner_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Setup starting with args: {:?}", cli);

    let output_mode = if cli.silent {
        OutputMode::Silent
    } else if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Non-interactive runs never block on the exit pause.
    let is_interactive = !cli.no_pause && !is_ci();

    let mut ui = create_ui(is_interactive, output_mode);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            let result = report_error(ui.as_mut(), &SetupError::Io(e));
            return ExitCode::from(result.exit_code as u8);
        }
    };
    let project_root = match &cli.project {
        Some(project) => working_dir.join(project),
        None => working_dir.clone(),
    };

    let dispatcher = CommandDispatcher::new(project_root).with_working_dir(working_dir);

    let result = dispatcher
        .dispatch(&cli, ui.as_mut())
        .unwrap_or_else(|e| report_error(ui.as_mut(), &e));
    ExitCode::from(result.exit_code as u8)
}
