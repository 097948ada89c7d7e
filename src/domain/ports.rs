use crate::domain::model::FlamesReport;
use crate::utils::error::Result;

/// Display collaborator: turns a finished report into text for the user.
pub trait ReportRenderer {
    fn render(&self, report: &FlamesReport) -> Result<String>;
}

/// Settings the presentation layer reads, whatever their source.
pub trait OutputSettings {
    fn output_format(&self) -> &str;
    fn strike_cancelled(&self) -> bool;
    fn pretty_json(&self) -> bool;
}
