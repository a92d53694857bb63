//! Score grading and GPA aggregation.
//!
//! Maps raw score text to letter grades on the university scale, folds the
//! catalog and a snapshot of scores into credit-weighted totals, and buckets
//! the resulting GPA into a standing.

pub mod aggregate;
pub mod grade;
pub mod interpret;
pub mod types;
pub mod utility;
