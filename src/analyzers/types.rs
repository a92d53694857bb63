//! Data types used by the grading pipeline.

use crate::analyzers::utility::round2;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points value marking a course that does not count toward the GPA.
pub const EXCLUDED_POINTS: f64 = -1.0;

/// Letter grade on the university scale, plus the unset marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
    /// Blank, unparseable or out-of-range score.
    #[serde(rename = "—")]
    Unset,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
            LetterGrade::Unset => "—",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter and point value for one score.
///
/// `points` is either in `[0.0, 4.0]` or exactly [`EXCLUDED_POINTS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grade {
    pub letter: LetterGrade,
    pub points: f64,
}

impl Grade {
    pub const fn new(letter: LetterGrade, points: f64) -> Self {
        Self { letter, points }
    }

    /// The `{—, -1}` grade given to any score that cannot be counted.
    pub const fn excluded() -> Self {
        Self::new(LetterGrade::Unset, EXCLUDED_POINTS)
    }

    pub fn is_excluded(&self) -> bool {
        self.points < 0.0
    }
}

/// How raw score text is turned into a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Use the longest numeric prefix and ignore trailing text (`"12abc"` is 12).
    #[default]
    Lenient,
    /// The whole trimmed input must be a number.
    Strict,
}

/// One row of the per-course breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGrade {
    pub code: &'static str,
    pub name: &'static str,
    pub credit_hours: u32,
    pub score: Option<String>,
    pub grade: Grade,
}

impl CourseGrade {
    /// Credit-weighted points, or 0 for excluded courses.
    pub fn quality_points(&self) -> f64 {
        if self.grade.is_excluded() {
            0.0
        } else {
            self.grade.points * self.credit_hours as f64
        }
    }
}

/// Credit-weighted GPA over the courses with a valid score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GpaReport {
    pub gpa: f64,
    pub total_credits: u32,
    pub total_points: f64,
}

/// Coarse standing bucket for a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Excellent,
    VeryGood,
    Good,
    Pass,
    NotApplicable,
}

impl Standing {
    pub fn label(&self) -> &'static str {
        match self {
            Standing::Excellent => "Excellent",
            Standing::VeryGood => "Very Good",
            Standing::Good => "Good",
            Standing::Pass => "Pass",
            Standing::NotApplicable => "N/A",
        }
    }
}

/// Display label and tier for a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub label: &'static str,
    pub tier: Standing,
}

/// Everything a front end needs to render one recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct GpaSummary {
    pub generated_at: DateTime<Utc>,
    pub courses: Vec<CourseGrade>,
    pub report: GpaReport,
    pub interpretation: Interpretation,
}

/// A single row appended to a GPA history CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub timestamp: DateTime<Utc>,
    pub gpa: f64,
    pub total_credits: u32,
    pub total_points: f64,
    pub standing: String,
    pub graded_courses: usize,
}

impl From<&GpaSummary> for ReportRecord {
    fn from(summary: &GpaSummary) -> Self {
        ReportRecord {
            timestamp: summary.generated_at,
            gpa: round2(summary.report.gpa),
            total_credits: summary.report.total_credits,
            total_points: round2(summary.report.total_points),
            standing: summary.interpretation.label.to_string(),
            graded_courses: summary
                .courses
                .iter()
                .filter(|c| !c.grade.is_excluded())
                .count(),
        }
    }
}
