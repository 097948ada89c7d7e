use crate::core::cancellation::cancel_common_letters;
use crate::core::elimination::eliminate;
use crate::domain::model::{
    AnnotatedName, CancellationResult, FlamesLabel, FlamesReport, LabelDescription, Outcome,
};
use crate::utils::error::{FlamesError, Result};
use crate::utils::validation::{normalize_name, validate_name_characters};

/// Pure FLAMES computation. Holds no state; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlamesEngine;

impl FlamesEngine {
    pub fn new() -> Self {
        Self
    }

    /// Both names are checked for emptiness before either is checked for
    /// characters, so a blank name always reports `EmptyNameError`.
    pub fn validate(&self, name1: &str, name2: &str) -> Result<()> {
        let first = normalize_name(name1);
        let second = normalize_name(name2);

        if first.is_empty() || second.is_empty() {
            return Err(FlamesError::EmptyNameError);
        }

        validate_name_characters(&first)?;
        validate_name_characters(&second)?;
        Ok(())
    }

    pub fn cancel_common_letters(&self, name1: &str, name2: &str) -> CancellationResult {
        cancel_common_letters(name1, name2)
    }

    pub fn eliminate(&self, remaining_count: usize) -> FlamesLabel {
        eliminate(remaining_count)
    }

    pub fn describe_label(&self, label: FlamesLabel) -> LabelDescription {
        label.description()
    }

    /// Looks up a label from its code as typed by a user.
    pub fn describe_code(&self, code: &str) -> Result<(FlamesLabel, LabelDescription)> {
        let label = FlamesLabel::from_code(code)?;
        Ok((label, label.description()))
    }

    /// Validates both names and runs the full computation.
    pub fn evaluate(&self, name1: &str, name2: &str) -> Result<FlamesReport> {
        self.validate(name1, name2)?;

        let first = normalize_name(name1);
        let second = normalize_name(name2);

        let cancellation = self.cancel_common_letters(&first, &second);
        tracing::debug!(
            remaining = cancellation.remaining_count,
            common = ?cancellation.common_letters,
            "Cancelled common letters"
        );

        let outcome = if cancellation.remaining_count == 0 {
            Outcome::NoScore
        } else {
            Outcome::Label(self.eliminate(cancellation.remaining_count))
        };
        let description = outcome.description();

        Ok(FlamesReport {
            first: AnnotatedName::annotate(&first, &cancellation.common_letters),
            second: AnnotatedName::annotate(&second, &cancellation.common_letters),
            remaining_count: cancellation.remaining_count,
            outcome,
            display_text: description.display.to_string(),
            advice: description.advice.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_names() {
        let engine = FlamesEngine::new();
        assert!(matches!(engine.validate("", "bob"), Err(FlamesError::EmptyNameError)));
        assert!(matches!(engine.validate("bob", "   "), Err(FlamesError::EmptyNameError)));
        // Emptiness wins over bad characters in the other name.
        assert!(matches!(engine.validate("bob1", ""), Err(FlamesError::EmptyNameError)));
    }

    #[test]
    fn test_validate_rejects_bad_characters() {
        let engine = FlamesEngine::new();
        assert!(matches!(
            engine.validate("bob1", "sue"),
            Err(FlamesError::InvalidCharacterError { .. })
        ));
        assert!(matches!(
            engine.validate("bob", "sue!"),
            Err(FlamesError::InvalidCharacterError { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_mixed_case_and_multi_word() {
        let engine = FlamesEngine::new();
        assert!(engine.validate("  Mary Jane ", "JOHN").is_ok());
    }

    #[test]
    fn test_evaluate_produces_label() {
        let report = FlamesEngine::new().evaluate("bob", "alice").unwrap();
        assert_eq!(report.remaining_count, 8);
        assert_eq!(report.outcome, Outcome::Label(FlamesLabel::Affectionate));
        assert_eq!(report.display_text, "Affectionate");
        assert!(report.advice.starts_with("Sweet vibes!"));
    }

    #[test]
    fn test_evaluate_no_score() {
        let report = FlamesEngine::new().evaluate("Anna", "anna").unwrap();
        assert_eq!(report.remaining_count, 0);
        assert_eq!(report.outcome, Outcome::NoScore);
        assert_eq!(report.display_text, "No Compatibility Score");
    }

    #[test]
    fn test_describe_code() {
        let engine = FlamesEngine::new();
        let (label, description) = engine.describe_code("l").unwrap();
        assert_eq!(label, FlamesLabel::Love);
        assert_eq!(description.display, "Love");
        assert!(matches!(
            engine.describe_code("Z"),
            Err(FlamesError::UnknownLabelError { .. })
        ));
    }
}
