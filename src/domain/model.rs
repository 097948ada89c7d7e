use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use crate::utils::error::{FlamesError, Result};

/// The six FLAMES categories, in elimination order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlamesLabel {
    #[serde(rename = "F")]
    Friends,
    #[serde(rename = "L")]
    Love,
    #[serde(rename = "A")]
    Affectionate,
    #[serde(rename = "M")]
    Marriage,
    #[serde(rename = "E")]
    Enemies,
    #[serde(rename = "S")]
    Siblings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDescription {
    pub display: &'static str,
    pub advice: &'static str,
}

const LABEL_TABLE: [LabelDescription; 6] = [
    LabelDescription {
        display: "Friends",
        advice: "A solid foundation! You share a friendly bond. Great relationships often start here, cherish the connection!",
    },
    LabelDescription {
        display: "Love",
        advice: "Sparks are flying! Looks like genuine love is in the air. Nurture this special connection with care and affection.",
    },
    LabelDescription {
        display: "Affectionate",
        advice: "Sweet vibes! There's a definite fondness and warmth between you. Keep building on that affection.",
    },
    LabelDescription {
        display: "Marriage",
        advice: "Wedding bells? This suggests a strong, potentially lifelong connection. Looks like you might be heading down the aisle!",
    },
    LabelDescription {
        display: "Enemies",
        advice: "Uh oh! Looks like there might be some friction. Remember, this is just a game! Maybe focus on communication?",
    },
    LabelDescription {
        display: "Siblings",
        advice: "A sibling-like bond! You might annoy each other sometimes, but there's an underlying connection. More platonic than romantic.",
    },
];

const NO_SCORE: LabelDescription = LabelDescription {
    display: "No Compatibility Score",
    advice: "Hmm, identical names or all letters cancelled out! Maybe try nicknames or full names?",
};

impl FlamesLabel {
    pub const SEQUENCE: [FlamesLabel; 6] = [
        FlamesLabel::Friends,
        FlamesLabel::Love,
        FlamesLabel::Affectionate,
        FlamesLabel::Marriage,
        FlamesLabel::Enemies,
        FlamesLabel::Siblings,
    ];

    pub fn code(self) -> char {
        match self {
            FlamesLabel::Friends => 'F',
            FlamesLabel::Love => 'L',
            FlamesLabel::Affectionate => 'A',
            FlamesLabel::Marriage => 'M',
            FlamesLabel::Enemies => 'E',
            FlamesLabel::Siblings => 'S',
        }
    }

    /// Parses a one-letter code, case insensitive.
    pub fn from_code(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let mut chars = trimmed.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::SEQUENCE
                .into_iter()
                .find(|label| label.code() == c.to_ascii_uppercase()),
            _ => None,
        };

        label.ok_or_else(|| FlamesError::UnknownLabelError {
            code: trimmed.to_string(),
        })
    }

    pub fn description(self) -> LabelDescription {
        LABEL_TABLE[self as usize]
    }
}

impl fmt::Display for FlamesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Final result of a computation: a FLAMES label, or no score when every
/// letter cancelled out. Serialized as its one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Label(FlamesLabel),
    NoScore,
}

impl Outcome {
    pub const NO_SCORE_CODE: char = 'N';

    pub fn code(self) -> char {
        match self {
            Outcome::Label(label) => label.code(),
            Outcome::NoScore => Self::NO_SCORE_CODE,
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        if code.trim().eq_ignore_ascii_case("n") {
            return Ok(Outcome::NoScore);
        }
        FlamesLabel::from_code(code).map(Outcome::Label)
    }

    pub fn description(self) -> LabelDescription {
        match self {
            Outcome::Label(label) => label.description(),
            Outcome::NoScore => NO_SCORE,
        }
    }

    pub fn label(self) -> Option<FlamesLabel> {
        match self {
            Outcome::Label(label) => Some(label),
            Outcome::NoScore => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Outcome::from_code(&code).map_err(de::Error::custom)
    }
}

/// Letters left after pairing off the two names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationResult {
    pub remaining_count: usize,
    pub common_letters: BTreeSet<char>,
    pub leftover_first: Vec<char>,
    pub leftover_second: Vec<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphMark {
    Cancelled,
    Kept,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub ch: char,
    pub mark: GlyphMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedName {
    pub text: String,
    pub glyphs: Vec<Glyph>,
}

impl AnnotatedName {
    /// Tags every character of a normalized name. Any occurrence of a letter
    /// value in `common` counts as cancelled, whitespace is a separator.
    pub fn annotate(text: &str, common: &BTreeSet<char>) -> Self {
        let glyphs = text
            .chars()
            .map(|ch| {
                let mark = if ch.is_whitespace() {
                    GlyphMark::Separator
                } else if common.contains(&ch) {
                    GlyphMark::Cancelled
                } else {
                    GlyphMark::Kept
                };
                Glyph { ch, mark }
            })
            .collect();

        Self {
            text: text.to_string(),
            glyphs,
        }
    }
}

/// Everything the presentation layer needs to show one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlamesReport {
    pub first: AnnotatedName,
    pub second: AnnotatedName,
    pub remaining_count: usize,
    pub outcome: Outcome,
    pub display_text: String,
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table_is_indexed_by_label() {
        assert_eq!(FlamesLabel::Friends.description().display, "Friends");
        assert_eq!(FlamesLabel::Love.description().display, "Love");
        assert_eq!(FlamesLabel::Affectionate.description().display, "Affectionate");
        assert_eq!(FlamesLabel::Marriage.description().display, "Marriage");
        assert_eq!(FlamesLabel::Enemies.description().display, "Enemies");
        assert_eq!(FlamesLabel::Siblings.description().display, "Siblings");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(FlamesLabel::from_code("m").unwrap(), FlamesLabel::Marriage);
        assert_eq!(FlamesLabel::from_code(" S ").unwrap(), FlamesLabel::Siblings);
        assert!(matches!(
            FlamesLabel::from_code("X"),
            Err(FlamesError::UnknownLabelError { .. })
        ));
        assert!(FlamesLabel::from_code("FL").is_err());
        assert!(FlamesLabel::from_code("").is_err());
    }

    #[test]
    fn test_outcome_serializes_as_code() {
        let label = serde_json::to_string(&Outcome::Label(FlamesLabel::Enemies)).unwrap();
        assert_eq!(label, "\"E\"");
        let none = serde_json::to_string(&Outcome::NoScore).unwrap();
        assert_eq!(none, "\"N\"");

        let parsed: Outcome = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(parsed, Outcome::NoScore);
        let parsed: Outcome = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, Outcome::Label(FlamesLabel::Love));
    }

    #[test]
    fn test_annotate_marks_separators() {
        let common: BTreeSet<char> = ['j', 'n'].into_iter().collect();
        let name = AnnotatedName::annotate("mary jane", &common);
        let marks: Vec<GlyphMark> = name.glyphs.iter().map(|g| g.mark).collect();
        assert_eq!(marks[4], GlyphMark::Separator);
        assert_eq!(marks[5], GlyphMark::Cancelled);
        assert_eq!(marks[7], GlyphMark::Cancelled);
        assert_eq!(marks[0], GlyphMark::Kept);
        assert_eq!(name.glyphs.len(), 9);
    }
}
