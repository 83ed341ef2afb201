use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::app::AppError;
use crate::dispatch::{Parameter, ShapeParameters};
use crate::shape::{choices, CalculationKind, Shape, UsageError};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "geometry_toolbox", version)]
#[command(about = "Calculate the area or perimeter of a plane shape")]
pub struct Cli {
    /// Name of the shape; prompted for when omitted
    #[arg(short, long, value_enum, ignore_case = true)]
    pub shape: Option<Shape>,

    /// Type of calculation to perform; prompted for when omitted
    #[arg(short, long, value_enum, ignore_case = true)]
    pub calculation: Option<CalculationKind>,

    /// Read settings from this TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on stdout and reads answers from stdin.
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompts on `output` and reads answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hands back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt: ` and returns the trimmed answer.
    ///
    /// End of input before any answer, or an answer that is not UTF-8, is a
    /// usage error naming `what`.
    fn read_line(&mut self, prompt: &str, what: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(UsageError::MissingInput {
                what: what.to_string(),
            }
            .into());
        }
        match String::from_utf8(raw) {
            Ok(line) => Ok(line.trim().to_string()),
            Err(err) => {
                let lossy = String::from_utf8_lossy(err.as_bytes());
                debug!(what, "answer is not valid UTF-8");
                Err(UsageError::NotANumber {
                    parameter: what.to_string(),
                    input: lossy.trim().to_string(),
                }
                .into())
            }
        }
    }

    /// Reads one finite number for `param`.
    pub fn read_f64(&mut self, param: &Parameter) -> Result<f64, AppError> {
        let answer = self.read_line(param.prompt, param.name)?;
        match answer.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => {
                debug!(parameter = param.name, input = %answer, "rejected numeric input");
                Err(UsageError::NotANumber {
                    parameter: param.name.to_string(),
                    input: answer,
                }
                .into())
            }
        }
    }

    /// Asks for the shape name.
    pub fn read_shape(&mut self) -> Result<Shape, AppError> {
        let prompt = format!("Enter the shape name ({})", choices(&Shape::ALL));
        let answer = self.read_line(&prompt, "shape")?;
        Ok(answer.parse::<Shape>()?)
    }

    /// Asks for the calculation type.
    pub fn read_calculation(&mut self) -> Result<CalculationKind, AppError> {
        let prompt = format!(
            "Enter the calculation type ({})",
            choices(&CalculationKind::ALL)
        );
        let answer = self.read_line(&prompt, "calculation type")?;
        Ok(answer.parse::<CalculationKind>()?)
    }

    /// Prompts for every input of `shape`/`kind` in order.
    pub fn read_parameters(
        &mut self,
        shape: Shape,
        kind: CalculationKind,
    ) -> Result<ShapeParameters, AppError> {
        ShapeParameters::collect(shape, kind, |param| self.read_f64(param))
    }

    /// Writes the final result line.
    pub fn print_result(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }
}
