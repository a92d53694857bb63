use crate::analyzers::grade::map_score_with;
use crate::analyzers::interpret::interpret;
use crate::analyzers::types::{CourseGrade, GpaReport, GpaSummary, ParseMode};
use crate::analyzers::utility::safe_ratio;
use crate::catalog::Course;
use chrono::Utc;
use std::collections::HashMap;

/// Grades every catalog course against `scores`, in catalog order.
///
/// A code missing from `scores` is treated as unset.
pub fn grade_courses(
    catalog: &[Course],
    scores: &HashMap<String, String>,
    mode: ParseMode,
) -> Vec<CourseGrade> {
    catalog
        .iter()
        .map(|course| {
            let raw = scores.get(course.code).map(String::as_str);
            CourseGrade {
                code: course.code,
                name: course.name,
                credit_hours: course.credit_hours,
                score: raw.filter(|r| !r.is_empty()).map(str::to_string),
                grade: map_score_with(raw, mode),
            }
        })
        .collect()
}

/// Credit-weighted GPA over the courses with a valid score, using lenient parsing.
pub fn compute_gpa(catalog: &[Course], scores: &HashMap<String, String>) -> GpaReport {
    compute_gpa_with(catalog, scores, ParseMode::Lenient)
}

/// Same as [`compute_gpa`], with an explicit parse mode.
pub fn compute_gpa_with(
    catalog: &[Course],
    scores: &HashMap<String, String>,
    mode: ParseMode,
) -> GpaReport {
    report_from(&grade_courses(catalog, scores, mode))
}

/// Folds graded rows into totals. Excluded rows count toward neither
/// the numerator nor the denominator.
pub fn report_from(courses: &[CourseGrade]) -> GpaReport {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for row in courses {
        if row.grade.is_excluded() {
            continue;
        }
        total_points += row.quality_points();
        total_credits += row.credit_hours;
    }

    GpaReport {
        gpa: safe_ratio(total_points, total_credits as f64),
        total_credits,
        total_points,
    }
}

/// Builds the full breakdown, totals and standing for one snapshot of scores.
pub fn summarize(
    catalog: &[Course],
    scores: &HashMap<String, String>,
    mode: ParseMode,
) -> GpaSummary {
    let courses = grade_courses(catalog, scores, mode);
    let report = report_from(&courses);
    let interpretation = interpret(report.gpa, report.total_credits);

    GpaSummary {
        generated_at: Utc::now(),
        courses,
        report,
        interpretation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::{LetterGrade, Standing};
    use crate::catalog::COURSES;

    fn scores(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(code, score)| (code.to_string(), score.to_string()))
            .collect()
    }

    #[test]
    fn test_first_three_courses() {
        let s = scores(&[("PHY113", "90"), ("BMS112", "80"), ("BMS132", "70")]);
        let report = compute_gpa(COURSES, &s);

        assert_eq!(report.total_credits, 5);
        assert!((report.total_points - 15.4).abs() < 1e-9);
        assert!((report.gpa - 3.08).abs() < 1e-9);
    }

    #[test]
    fn test_empty_state() {
        let report = compute_gpa(COURSES, &HashMap::new());
        assert_eq!(report, GpaReport::default());
        assert_eq!(report.gpa, 0.0);
    }

    #[test]
    fn test_all_excluded_matches_empty() {
        let s = scores(&[
            ("PHY113", "abc"),
            ("BMS112", "-1"),
            ("BMS132", "101"),
            ("BMS122", ""),
            ("BDS011", "x"),
            ("BDS021", "200"),
            ("UC1", "."),
            ("UC2", "-5"),
        ]);
        assert_eq!(compute_gpa(COURSES, &s), compute_gpa(COURSES, &HashMap::new()));
    }

    #[test]
    fn test_all_courses_full_marks() {
        let s: HashMap<String, String> = COURSES
            .iter()
            .map(|c| (c.code.to_string(), "100".to_string()))
            .collect();
        let report = compute_gpa(COURSES, &s);

        assert_eq!(report.total_credits, 18);
        assert!((report.total_points - 72.0).abs() < 1e-9);
        assert!((report.gpa - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_failing_course_still_counts() {
        let s = scores(&[("BDS011", "40"), ("BDS021", "95")]);
        let report = compute_gpa(COURSES, &s);

        assert_eq!(report.total_credits, 7);
        assert!((report.total_points - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_codes_are_ignored() {
        let s = scores(&[("PHY113", "90"), ("CHEM101", "100")]);
        let report = compute_gpa(COURSES, &s);

        assert_eq!(report.total_credits, 2);
        assert!((report.gpa - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let s = scores(&[("UC1", "77"), ("UC2", "12abc"), ("BDS021", "88.5")]);
        assert_eq!(compute_gpa(COURSES, &s), compute_gpa(COURSES, &s));
    }

    #[test]
    fn test_strict_mode_drops_malformed() {
        let s = scores(&[("PHY113", "90"), ("BMS112", "80pts")]);

        assert_eq!(compute_gpa_with(COURSES, &s, ParseMode::Lenient).total_credits, 4);
        assert_eq!(compute_gpa_with(COURSES, &s, ParseMode::Strict).total_credits, 2);
    }

    #[test]
    fn test_grade_courses_keeps_catalog_order() {
        let s = scores(&[("UC2", "61"), ("PHY113", "")]);
        let rows = grade_courses(COURSES, &s, ParseMode::Lenient);

        let codes: Vec<_> = rows.iter().map(|r| r.code).collect();
        let expected: Vec<_> = COURSES.iter().map(|c| c.code).collect();
        assert_eq!(codes, expected);

        assert_eq!(rows[0].score, None);
        assert_eq!(rows[0].grade.letter, LetterGrade::Unset);
        assert_eq!(rows[7].score.as_deref(), Some("61"));
        assert_eq!(rows[7].grade.letter, LetterGrade::D);
    }

    #[test]
    fn test_summarize() {
        let s = scores(&[("BDS011", "98"), ("BDS021", "94")]);
        let summary = summarize(COURSES, &s, ParseMode::Lenient);

        assert_eq!(summary.courses.len(), COURSES.len());
        assert_eq!(summary.report.total_credits, 7);
        assert_eq!(summary.interpretation.tier, Standing::Excellent);
    }
}
