//! Output formatting and persistence for GPA summaries.
//!
//! Supports pretty-printing, JSON serialization, a plain-text table,
//! CSV history append and blank score-sheet templates.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::{GpaSummary, ReportRecord};
use crate::catalog::Course;
use csv::WriterBuilder;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::path::Path;

/// Formats a GPA or points total to two decimals; NaN shows as `0.00`.
pub fn format_gpa(value: f64) -> String {
    if value.is_nan() {
        "0.00".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &GpaSummary) {
    debug!("{:#?}", summary);
}

/// Logs a summary as pretty-printed JSON.
pub fn print_json(summary: &GpaSummary) -> Result<()> {
    info!("{}", to_json(summary)?);
    Ok(())
}

pub fn to_json(summary: &GpaSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Renders the course table followed by the totals block.
pub fn render_text(summary: &GpaSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<8} {:<44} {:>7} {:>7}  {}",
        "Code", "Course", "Credits", "Score", "Grade"
    );
    for row in &summary.courses {
        let _ = writeln!(
            out,
            "{:<8} {:<44} {:>7} {:>7}  {}",
            row.code,
            row.name,
            row.credit_hours,
            row.score.as_deref().unwrap_or(""),
            row.grade.letter
        );
    }

    let report = &summary.report;
    let _ = writeln!(out);
    let _ = writeln!(out, "Total credits:  {}", report.total_credits);
    let _ = writeln!(
        out,
        "Semester GPA:   {} ({})",
        format_gpa(report.gpa),
        summary.interpretation.label
    );
    let _ = writeln!(out, "Quality points: {}", format_gpa(report.total_points));

    out
}

/// Appends a [`ReportRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &ReportRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Writes a blank `code,score` sheet covering every course in `catalog`,
/// replacing any existing file.
pub fn write_template(path: &str, catalog: &[Course]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["code", "score"])?;
    for course in catalog {
        writer.write_record([course.code, ""])?;
    }
    writer.flush()?;

    debug!(path, courses = catalog.len(), "Wrote score template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::aggregate::summarize;
    use crate::analyzers::types::ParseMode;
    use crate::catalog::COURSES;
    use crate::parser::parse_scores_csv;
    use std::collections::HashMap;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_summary() -> GpaSummary {
        let scores = HashMap::from([
            ("PHY113".to_string(), "90".to_string()),
            ("BMS112".to_string(), "80".to_string()),
            ("BMS132".to_string(), "70".to_string()),
        ]);
        summarize(COURSES, &scores, ParseMode::Lenient)
    }

    #[test]
    fn test_format_gpa() {
        assert_eq!(format_gpa(3.08), "3.08");
        assert_eq!(format_gpa(0.0), "0.00");
        assert_eq!(format_gpa(f64::NAN), "0.00");
        assert_eq!(format_gpa(15.4), "15.40");
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_summary());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_summary()).unwrap();
    }

    #[test]
    fn test_to_json_fields() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&sample_summary()).unwrap()).unwrap();

        assert_eq!(json["report"]["total_credits"], 5);
        assert_eq!(json["interpretation"]["label"], "Very Good");
        assert_eq!(json["interpretation"]["tier"], "very_good");
        assert_eq!(json["courses"][0]["grade"]["letter"], "A-");
        assert_eq!(json["courses"][3]["grade"]["letter"], "—");
        assert_eq!(json["courses"][3]["grade"]["points"], -1.0);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_summary());

        assert!(text.contains("Biophysics for Dentistry"));
        assert!(text.contains("Total credits:  5"));
        assert!(text.contains("Semester GPA:   3.08 (Very Good)"));
        assert!(text.contains("Quality points: 15.40"));
        assert_eq!(text.lines().filter(|l| l.ends_with('—')).count(), 5);
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let path = temp_path("gpa_calc_test_header.csv");
        let _ = fs::remove_file(&path);

        let record = ReportRecord::from(&sample_summary());
        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("timestamp")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_record_reads_back() {
        let path = temp_path("gpa_calc_test_readback.csv");
        let _ = fs::remove_file(&path);

        let record = ReportRecord::from(&sample_summary());
        append_record(&path, &record).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ReportRecord> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gpa, 3.08);
        assert_eq!(rows[0].total_credits, 5);
        assert_eq!(rows[0].standing, "Very Good");
        assert_eq!(rows[0].graded_courses, 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_template_is_blank_sheet() {
        let path = temp_path("gpa_calc_test_template.csv");
        let _ = fs::remove_file(&path);

        write_template(&path, COURSES).unwrap();

        let scores = parse_scores_csv(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(scores.len(), COURSES.len());
        assert!(scores.values().all(String::is_empty));

        fs::remove_file(&path).unwrap();
    }
}
