//! The fixed semester course catalog.

use serde::Serialize;

/// A single course in the semester plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub credit_hours: u32,
}

/// Field of Dentistry, Year 1, Semester 1. Order is display order only.
pub static COURSES: &[Course] = &[
    Course {
        code: "PHY113",
        name: "Biophysics for Dentistry",
        credit_hours: 2,
    },
    Course {
        code: "BMS112",
        name: "General Anatomy for Dental Students",
        credit_hours: 2,
    },
    Course {
        code: "BMS132",
        name: "General Physiology (1) for Dental Students",
        credit_hours: 1,
    },
    Course {
        code: "BMS122",
        name: "General Histology for Dental Students",
        credit_hours: 2,
    },
    Course {
        code: "BDS011",
        name: "Dental Biomaterials I",
        credit_hours: 4,
    },
    Course {
        code: "BDS021",
        name: "Dental Anatomy I",
        credit_hours: 3,
    },
    Course {
        code: "UC1",
        name: "University Requirement 1",
        credit_hours: 2,
    },
    Course {
        code: "UC2",
        name: "University Requirement 2",
        credit_hours: 2,
    },
];

/// Looks up a catalog course by its exact code.
pub fn find_course(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.code == code)
}

/// Sum of credit hours over every course in `catalog`.
pub fn total_credit_hours(catalog: &[Course]) -> u32 {
    catalog.iter().map(|c| c.credit_hours).sum()
}
