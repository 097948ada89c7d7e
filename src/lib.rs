pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{JsonRenderer, TextRenderer};
pub use core::{batch::BatchScorer, engine::FlamesEngine, runner::FlamesRunner};
pub use domain::model::{AnnotatedName, FlamesLabel, FlamesReport, GlyphMark, Outcome};
pub use utils::error::{FlamesError, Result};
