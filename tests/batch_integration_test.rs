use anyhow::Result;
use flames::core::batch::{BatchFormat, BatchSummary};
use flames::BatchScorer;
use std::io::Write;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

#[test]
fn test_csv_file_to_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        "pairs.csv",
        "name1,name2\nbob,alice\nanna,anna\nbob1,sue\n",
    )?;

    let scorer = BatchScorer::new(true);
    let mut out = Vec::new();
    let summary = scorer.run_file(&input, BatchFormat::Json, &mut out)?;

    assert_eq!(
        summary,
        BatchSummary {
            scored: 1,
            no_score: 1,
            invalid: 1
        }
    );

    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert!(value["generated_at"].is_string());
    assert_eq!(value["summary"]["scored"], 1);
    assert_eq!(value["rows"][0]["outcome"], "A");
    assert_eq!(value["rows"][1]["outcome"], "N");
    assert!(value["rows"][2]["outcome"].is_null());
    assert_eq!(value["rows"][2]["row"], 3);
    Ok(())
}

#[test]
fn test_tsv_input_is_read_with_tabs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        "pairs.tsv",
        "name1\tname2\nMary Jane\tJohn\n",
    )?;

    let scorer = BatchScorer::new(true);
    let mut out = Vec::new();
    scorer.run_file(&input, BatchFormat::Csv, &mut out)?;

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "1,Mary Jane,John,8,A,Affectionate,");
    Ok(())
}

#[test]
fn test_fail_fast_stops_on_invalid_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, "pairs.csv", "name1,name2\nbob,alice\n,sue\n")?;

    let scorer = BatchScorer::new(false);
    let result = scorer.run_file(&input, BatchFormat::Csv, Vec::new());
    assert!(matches!(result, Err(flames::FlamesError::EmptyNameError)));
    Ok(())
}

#[test]
fn test_missing_input_file_is_io_error() {
    let scorer = BatchScorer::new(true);
    let result = scorer.run_file("does/not/exist.csv", BatchFormat::Csv, Vec::new());
    assert!(matches!(result, Err(flames::FlamesError::IoError(_))));
}
