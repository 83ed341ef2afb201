//! Area and perimeter calculations for five plane shapes, kept apart from
//! the CLI so the formulas can be used and tested on their own.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod formulas;
pub mod logging;
pub mod shape;
pub mod ui_cli;

pub use dispatch::{Measurement, ShapeParameters};
pub use formulas::GeometryError;
pub use shape::{CalculationKind, Shape, UsageError};
