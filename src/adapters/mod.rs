// Adapters layer: concrete presentation collaborators for the engine.

pub mod json_renderer;
pub mod text_renderer;

use crate::domain::ports::{OutputSettings, ReportRenderer};
use crate::utils::error::Result;
use crate::utils::validation::validate_one_of;

pub use json_renderer::JsonRenderer;
pub use text_renderer::TextRenderer;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Picks the renderer named by the settings.
pub fn renderer_for<S: OutputSettings>(settings: &S) -> Result<Box<dyn ReportRenderer>> {
    validate_one_of("output.format", settings.output_format(), &OUTPUT_FORMATS)?;

    let renderer: Box<dyn ReportRenderer> = match settings.output_format() {
        "json" => Box::new(JsonRenderer::new(settings.pretty_json())),
        _ => Box::new(TextRenderer::new(settings.strike_cancelled())),
    };
    Ok(renderer)
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for Box<R> {
    fn render(&self, report: &crate::domain::model::FlamesReport) -> Result<String> {
        (**self).render(report)
    }
}
