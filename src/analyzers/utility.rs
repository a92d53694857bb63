/// Divides `numerator` by `denominator`, returning 0.0 when the denominator is zero.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Rounds to two decimal places, the precision GPAs are reported at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
