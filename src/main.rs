use std::process::ExitCode;

use clap::Parser;
use geometry_toolbox::app::{self, AppError};
use geometry_toolbox::ui_cli::{Cli, Prompter};
use geometry_toolbox::{config, logging};
use tracing::debug;

/// Parses options, loads settings, then runs a single calculation.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "run failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(cli.config.as_deref())?;
    logging::init(cli.verbose, cfg.log.level);
    app::run(cli, &cfg, &mut Prompter::stdio())?;
    Ok(())
}
