//! Caller-owned score entry state.

use crate::catalog::Course;
use std::collections::HashMap;

/// Raw score text per course code, as typed by the user.
///
/// Values are kept verbatim; grading decides what counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    scores: HashMap<String, String>,
}

impl ScoreSheet {
    /// One empty entry per catalog course.
    pub fn for_catalog(catalog: &[Course]) -> Self {
        Self {
            scores: catalog
                .iter()
                .map(|c| (c.code.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, code: impl Into<String>, score: impl Into<String>) {
        self.scores.insert(code.into(), score.into());
    }

    /// Raw score for `code`; `None` when no entry exists.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.scores.get(code).map(String::as_str)
    }

    /// Copies every entry from `other`, overwriting existing codes.
    pub fn merge(&mut self, other: HashMap<String, String>) {
        self.scores.extend(other);
    }

    /// Clears every score back to empty, keeping the codes.
    pub fn reset(&mut self) {
        for score in self.scores.values_mut() {
            score.clear();
        }
    }

    pub fn scores(&self) -> &HashMap<String, String> {
        &self.scores
    }

    /// Codes present in the sheet that `catalog` does not know about.
    pub fn unknown_codes<'a>(&'a self, catalog: &[Course]) -> Vec<&'a str> {
        let mut unknown: Vec<&str> = self
            .scores
            .keys()
            .map(String::as_str)
            .filter(|code| !catalog.iter().any(|c| c.code == *code))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
