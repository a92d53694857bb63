use crate::analyzers::types::{Interpretation, Standing};

/// Buckets a GPA into a standing. First match wins:
///
/// | Condition          | Standing  |
/// |--------------------|-----------|
/// | gpa >= 3.7         | Excellent |
/// | gpa >= 3.0         | Very Good |
/// | gpa >= 2.0         | Good      |
/// | total_credits > 0  | Pass      |
/// | otherwise          | N/A       |
pub fn interpret(gpa: f64, total_credits: u32) -> Interpretation {
    let tier = match gpa {
        g if g >= 3.7 => Standing::Excellent,
        g if g >= 3.0 => Standing::VeryGood,
        g if g >= 2.0 => Standing::Good,
        _ if total_credits > 0 => Standing::Pass,
        _ => Standing::NotApplicable,
    };

    Interpretation {
        label: tier.label(),
        tier,
    }
}
