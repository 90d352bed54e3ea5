/// The structural target: a poem is expected to have exactly three lines.
pub const TARGET_LINES: usize = 3;

/// Scores a poem against the three-line target. The grade is the fraction of
/// positions 0..3 at which the input has a line; extra lines beyond the third
/// neither raise nor lower the score. A trailing line break with no content
/// after it does not occupy a position. Empty input scores 0.0.
pub fn compute_grade(text: &str) -> f64 {
    let line_count = text.lines().count();
    let occupied = (0..TARGET_LINES).filter(|&i| i < line_count).count();
    occupied as f64 / TARGET_LINES as f64
}
