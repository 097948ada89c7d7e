pub mod batch;
pub mod cancellation;
pub mod elimination;
pub mod engine;
pub mod runner;

pub use crate::domain::model::{CancellationResult, FlamesLabel, FlamesReport, Outcome};
pub use crate::domain::ports::{OutputSettings, ReportRenderer};
pub use crate::utils::error::Result;
