// src/utils/format.rs

/// Round to one decimal place, the precision every average in the reports
/// uses.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a final score the way the reports print it.
pub fn format_score(home_score: i32, away_score: i32) -> String {
    format!("{} x {}", home_score, away_score)
}
