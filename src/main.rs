//! bundle-config CLI entry point.

use std::process::ExitCode;

use bundle_config::cli::{Cli, CommandDispatcher};
use bundle_config::config::find_project_root;
use bundle_config::environment::ENV_VAR;
use bundle_config::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pick the log filter directive.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. `--quiet` lowers the default to ERROR
/// 4. Default is INFO
fn filter_directive(debug: bool, quiet: bool, rust_log: Option<&str>) -> String {
    if debug {
        return "bundle_config=debug".to_string();
    }
    match rust_log.filter(|v| !v.is_empty()) {
        Some(directive) => directive.to_string(),
        None if quiet => "bundle_config=error".to_string(),
        None => "bundle_config=info".to_string(),
    }
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only command output.
fn init_tracing(debug: bool, quiet: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(debug, quiet, rust_log.as_deref());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("bundle_config=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    tracing::debug!("bundle-config starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Explicit --project, else the nearest directory with settings or package.json
    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    let mut ui = create_ui(output_mode);

    let dispatcher =
        CommandDispatcher::new(project_root).with_env_var(std::env::var(ENV_VAR).ok());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
