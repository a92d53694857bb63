//! Score sheet input parsing.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct ScoreRow {
    code: String,
    #[serde(default)]
    score: Option<String>,
}

/// Reads a `code,score` CSV into a code to raw-score map.
///
/// Blank scores are kept as empty strings. When a code repeats, the last row wins.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or lacks a `code` column.
pub fn parse_scores_csv(bytes: &[u8]) -> Result<HashMap<String, String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut scores = HashMap::new();
    for (line, result) in rdr.deserialize::<ScoreRow>().enumerate() {
        let row: ScoreRow = result.with_context(|| format!("invalid score row {}", line + 1))?;
        if row.code.is_empty() {
            continue;
        }
        scores.insert(row.code, row.score.unwrap_or_default());
    }

    Ok(scores)
}

/// Splits a `CODE=SCORE` command-line assignment. The score may be empty.
///
/// # Errors
///
/// Returns an error if there is no `=` or the code is empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    let Some((code, score)) = arg.split_once('=') else {
        bail!("expected CODE=SCORE, got '{arg}'");
    };

    let code = code.trim();
    if code.is_empty() {
        bail!("missing course code in '{arg}'");
    }

    Ok((code.to_string(), score.trim().to_string()))
}
