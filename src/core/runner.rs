use crate::core::engine::FlamesEngine;
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;

/// Single synchronous entry point for one user action: read two names,
/// compute, and hand the report to the renderer.
pub struct FlamesRunner<R: ReportRenderer> {
    engine: FlamesEngine,
    renderer: R,
}

impl<R: ReportRenderer> FlamesRunner<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            engine: FlamesEngine::new(),
            renderer,
        }
    }

    pub fn run(&self, name1: &str, name2: &str) -> Result<String> {
        tracing::debug!("Validating names");
        let report = self.engine.evaluate(name1, name2).inspect_err(|e| {
            tracing::warn!("Input rejected: {}", e);
        })?;

        tracing::info!(
            "Remaining letters: {}, outcome: {}",
            report.remaining_count,
            report.outcome
        );

        tracing::debug!("Rendering report");
        self.renderer.render(&report)
    }
}
