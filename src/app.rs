use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::dispatch::Measurement;
use crate::formulas::GeometryError;
use crate::shape::UsageError;
use crate::ui_cli::{Cli, Prompter};

/// Process exit status for usage errors, matching clap's own.
pub const EXIT_USAGE: u8 = 2;
/// Process exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad shape, calculation type or number
    #[error("{0}")]
    Usage(#[from] UsageError),

    /// Parsed value outside the shape's domain
    #[error("{0}")]
    Geometry(#[from] GeometryError),

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file missing, unreadable or invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) => EXIT_USAGE,
            AppError::Geometry(_) | AppError::Io(_) | AppError::Config(_) => EXIT_FAILURE,
        }
    }
}

/// Runs one calculation: shape, calculation type, parameters, result line.
///
/// Options missing from `cli` are prompted for through `prompter`. Nothing
/// is written to the output on failure apart from prompts already shown.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<Measurement, AppError> {
    let shape = match cli.shape {
        Some(shape) => shape,
        None => prompter.read_shape()?,
    };
    let kind = match cli.calculation {
        Some(kind) => kind,
        None => prompter.read_calculation()?,
    };
    debug!(%shape, %kind, "dispatching");

    let params = prompter.read_parameters(shape, kind)?;
    let measurement = params.evaluate()?;
    prompter.print_result(&measurement.render(config.display.fixed_decimals))?;
    info!(value = measurement.value, "done");
    Ok(measurement)
}
