//! Score to letter-grade mapping.

use crate::analyzers::types::{Grade, LetterGrade, ParseMode};

/// Lower edge of a grade band.
#[derive(Debug, Clone, Copy)]
enum Threshold {
    /// Strictly greater than the value.
    Above(f64),
    /// Greater than or equal to the value.
    AtLeast(f64),
}

impl Threshold {
    fn admits(self, score: f64) -> bool {
        match self {
            Threshold::Above(t) => score > t,
            Threshold::AtLeast(t) => score >= t,
        }
    }
}

/// Grade bands, scanned top-down; the first band that admits the score wins.
///
/// | Score      | Grade | Points |
/// |------------|-------|--------|
/// | > 97       | A+    | 4.0    |
/// | >= 93      | A     | 4.0    |
/// | >= 89      | A-    | 3.7    |
/// | >= 84      | B+    | 3.3    |
/// | >= 80      | B     | 3.0    |
/// | >= 76      | B-    | 2.7    |
/// | >= 73      | C+    | 2.3    |
/// | >= 70      | C     | 2.0    |
/// | >= 67      | C-    | 1.7    |
/// | >= 64      | D+    | 1.3    |
/// | >= 60      | D     | 1.0    |
/// | < 60       | F     | 0.0    |
static GRADE_SCALE: &[(Threshold, LetterGrade, f64)] = &[
    (Threshold::Above(97.0), LetterGrade::APlus, 4.0),
    (Threshold::AtLeast(93.0), LetterGrade::A, 4.0),
    (Threshold::AtLeast(89.0), LetterGrade::AMinus, 3.7),
    (Threshold::AtLeast(84.0), LetterGrade::BPlus, 3.3),
    (Threshold::AtLeast(80.0), LetterGrade::B, 3.0),
    (Threshold::AtLeast(76.0), LetterGrade::BMinus, 2.7),
    (Threshold::AtLeast(73.0), LetterGrade::CPlus, 2.3),
    (Threshold::AtLeast(70.0), LetterGrade::C, 2.0),
    (Threshold::AtLeast(67.0), LetterGrade::CMinus, 1.7),
    (Threshold::AtLeast(64.0), LetterGrade::DPlus, 1.3),
    (Threshold::AtLeast(60.0), LetterGrade::D, 1.0),
];

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Maps a raw score to its grade using lenient numeric parsing.
///
/// Blank, unparseable and out-of-range input all yield [`Grade::excluded`];
/// this never fails.
pub fn map_score(raw: Option<&str>) -> Grade {
    map_score_with(raw, ParseMode::Lenient)
}

/// Same as [`map_score`], with an explicit parse mode.
pub fn map_score_with(raw: Option<&str>, mode: ParseMode) -> Grade {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Grade::excluded();
    };

    let parsed = match mode {
        ParseMode::Lenient => parse_leading_number(raw),
        ParseMode::Strict => parse_whole_number(raw),
    };

    match parsed {
        Some(s) if (MIN_SCORE..=MAX_SCORE).contains(&s) => grade_for(s),
        _ => Grade::excluded(),
    }
}

/// Grade for a score already known to be within `[0, 100]`.
pub fn grade_for(score: f64) -> Grade {
    GRADE_SCALE
        .iter()
        .find(|(threshold, _, _)| threshold.admits(score))
        .map(|&(_, letter, points)| Grade::new(letter, points))
        .unwrap_or(Grade::new(LetterGrade::F, 0.0))
}

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace
/// and any trailing text. `"12abc"` gives 12, `"abc"` gives `None`.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    numeric_prefix(raw.trim_start()).map(|(value, _)| value)
}

/// Parses `raw` only if the whole trimmed string is a number.
pub fn parse_whole_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    match numeric_prefix(trimmed) {
        Some((value, len)) if len == trimmed.len() => Some(value),
        _ => None,
    }
}

/// Scans `[sign] digits [. digits] [e [sign] digits]` or `[sign] Infinity`
/// from the start of `s`. Returns the value and the number of bytes consumed.
fn numeric_prefix(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        let value = if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, end + "Infinity".len()));
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits == 0 {
            return None;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().map(|value| (value, end))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
