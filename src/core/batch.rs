use crate::core::engine::FlamesEngine;
use crate::domain::model::Outcome;
use crate::utils::error::{FlamesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamePair {
    pub name1: String,
    pub name2: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Csv,
    Tsv,
    Json,
}

impl BatchFormat {
    pub const NAMES: [&'static str; 3] = ["csv", "tsv", "json"];
}

impl FromStr for BatchFormat {
    type Err = FlamesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(BatchFormat::Csv),
            "tsv" => Ok(BatchFormat::Tsv),
            "json" => Ok(BatchFormat::Json),
            other => Err(FlamesError::InvalidConfigValueError {
                field: "batch.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// One scored (or rejected) input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub row: usize,
    pub name1: String,
    pub name2: String,
    pub remaining_count: Option<usize>,
    pub outcome: Option<Outcome>,
    pub label: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub scored: usize,
    pub no_score: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub rows: Vec<BatchRow>,
}

/// Scores a file of name pairs: read, evaluate each row, write.
pub struct BatchScorer {
    engine: FlamesEngine,
    continue_on_error: bool,
}

impl BatchScorer {
    pub fn new(continue_on_error: bool) -> Self {
        Self {
            engine: FlamesEngine::new(),
            continue_on_error,
        }
    }

    pub fn read_pairs<R: Read>(&self, reader: R, delimiter: u8) -> Result<Vec<NamePair>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(reader);

        let mut pairs = Vec::new();
        for record in csv_reader.deserialize() {
            pairs.push(record?);
        }

        tracing::debug!("Read {} name pairs", pairs.len());
        Ok(pairs)
    }

    /// Row-level validation failures are recorded on the row. With
    /// `continue_on_error` off, the first one aborts the batch instead.
    pub fn score(&self, pairs: Vec<NamePair>) -> Result<BatchReport> {
        let mut summary = BatchSummary::default();
        let mut rows = Vec::with_capacity(pairs.len());

        for (index, pair) in pairs.into_iter().enumerate() {
            let row = index + 1;
            match self.engine.evaluate(&pair.name1, &pair.name2) {
                Ok(report) => {
                    match report.outcome {
                        Outcome::NoScore => summary.no_score += 1,
                        Outcome::Label(_) => summary.scored += 1,
                    }
                    rows.push(BatchRow {
                        row,
                        name1: pair.name1,
                        name2: pair.name2,
                        remaining_count: Some(report.remaining_count),
                        outcome: Some(report.outcome),
                        label: Some(report.display_text),
                        error: None,
                    });
                }
                Err(e) if e.is_validation() && self.continue_on_error => {
                    tracing::warn!("Row {} skipped: {}", row, e);
                    summary.invalid += 1;
                    rows.push(BatchRow {
                        row,
                        name1: pair.name1,
                        name2: pair.name2,
                        remaining_count: None,
                        outcome: None,
                        label: None,
                        error: Some(e.to_string()),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Scored {} rows ({} no score, {} invalid)",
            summary.scored,
            summary.no_score,
            summary.invalid
        );

        Ok(BatchReport {
            generated_at: Utc::now(),
            summary,
            rows,
        })
    }

    pub fn write<W: Write>(&self, report: &BatchReport, format: BatchFormat, mut writer: W) -> Result<()> {
        match format {
            BatchFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, report)?;
                writeln!(writer)?;
            }
            BatchFormat::Csv | BatchFormat::Tsv => {
                let delimiter = if format == BatchFormat::Tsv { b'\t' } else { b',' };
                let mut csv_writer = csv::WriterBuilder::new()
                    .delimiter(delimiter)
                    .from_writer(writer);
                for row in &report.rows {
                    csv_writer.serialize(row)?;
                }
                csv_writer.flush()?;
            }
        }
        Ok(())
    }

    /// Reads `input` (tab separated when it ends in `.tsv`) and writes the
    /// scored rows to `output`.
    pub fn run_file<P: AsRef<Path>, W: Write>(
        &self,
        input: P,
        format: BatchFormat,
        output: W,
    ) -> Result<BatchSummary> {
        let input = input.as_ref();
        let delimiter = match input.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        };

        tracing::info!("Reading name pairs from {}", input.display());
        let file = std::fs::File::open(input)?;
        let pairs = self.read_pairs(file, delimiter)?;
        let report = self.score(pairs)?;
        self.write(&report, format, output)?;
        Ok(report.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[(&str, &str)]) -> Vec<NamePair> {
        rows.iter()
            .map(|(a, b)| NamePair {
                name1: a.to_string(),
                name2: b.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_read_pairs_with_headers() {
        let data = "name1,name2\nbob,alice\nMary Jane,John\n";
        let scorer = BatchScorer::new(true);
        let read = scorer.read_pairs(data.as_bytes(), b',').unwrap();
        assert_eq!(read, pairs(&[("bob", "alice"), ("Mary Jane", "John")]));
    }

    #[test]
    fn test_score_counts_outcomes() {
        let scorer = BatchScorer::new(true);
        let report = scorer
            .score(pairs(&[("bob", "alice"), ("anna", "anna"), ("bob1", "sue")]))
            .unwrap();

        assert_eq!(
            report.summary,
            BatchSummary {
                scored: 1,
                no_score: 1,
                invalid: 1
            }
        );
        assert_eq!(report.rows[0].outcome, Some(Outcome::Label(crate::FlamesLabel::Affectionate)));
        assert_eq!(report.rows[1].outcome, Some(Outcome::NoScore));
        assert_eq!(report.rows[2].outcome, None);
        assert!(report.rows[2]
            .error
            .as_deref()
            .unwrap()
            .starts_with("letters and spaces only"));
    }

    #[test]
    fn test_score_aborts_when_not_continuing() {
        let scorer = BatchScorer::new(false);
        let result = scorer.score(pairs(&[("bob", "alice"), ("", "sue")]));
        assert!(matches!(result, Err(FlamesError::EmptyNameError)));
    }

    #[test]
    fn test_write_csv() {
        let scorer = BatchScorer::new(true);
        let report = scorer.score(pairs(&[("bob", "alice"), ("", "x")])).unwrap();
        let mut out = Vec::new();
        scorer.write(&report, BatchFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "row,name1,name2,remaining_count,outcome,label,error");
        assert_eq!(lines[1], "1,bob,alice,8,A,Affectionate,");
        assert_eq!(lines[2], "2,,x,,,,both names required");
    }

    #[test]
    fn test_write_tsv_uses_tabs() {
        let scorer = BatchScorer::new(true);
        let report = scorer.score(pairs(&[("harry", "sally")])).unwrap();
        let mut out = Vec::new();
        scorer.write(&report, BatchFormat::Tsv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("1\tharry\tsally\t6\tM\tMarriage"));
    }

    #[test]
    fn test_batch_format_from_str() {
        assert_eq!("JSON".parse::<BatchFormat>().unwrap(), BatchFormat::Json);
        assert!("xml".parse::<BatchFormat>().is_err());
    }
}
