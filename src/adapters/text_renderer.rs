use crate::domain::model::{AnnotatedName, FlamesReport, GlyphMark, Outcome};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::Result;

const STRIKE: char = '\u{0336}';

/// Plain-text rendering for terminals.
///
/// Cancelled letters get a combining long stroke overlay, or square brackets
/// when `strike` is off (for terminals that draw combining marks badly).
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    strike: bool,
}

impl TextRenderer {
    pub fn new(strike: bool) -> Self {
        Self { strike }
    }

    fn render_name(&self, name: &AnnotatedName) -> String {
        let mut out = String::with_capacity(name.text.len() * 2);
        for glyph in &name.glyphs {
            match glyph.mark {
                GlyphMark::Cancelled if self.strike => {
                    out.push(glyph.ch);
                    out.push(STRIKE);
                }
                GlyphMark::Cancelled => {
                    out.push('[');
                    out.push(glyph.ch);
                    out.push(']');
                }
                GlyphMark::Kept | GlyphMark::Separator => out.push(glyph.ch),
            }
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &FlamesReport) -> Result<String> {
        let heading = match report.outcome {
            Outcome::Label(label) => format!("{} - {}", label.code(), report.display_text),
            Outcome::NoScore => report.display_text.clone(),
        };

        Ok(format!(
            "{}\n{}\nRemaining letters: {}\n\n{}\n{}",
            self.render_name(&report.first),
            self.render_name(&report.second),
            report.remaining_count,
            heading,
            report.advice
        ))
    }
}
