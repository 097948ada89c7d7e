use crate::domain::model::FlamesReport;
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &FlamesReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
