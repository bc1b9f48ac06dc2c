//! Formatting utilities for terminal output

/// Format a word length as a circled-number badge
///
/// Lengths 1-20 map to the circled digit glyphs; anything longer falls
/// back to a plain parenthesized number.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => {
            // '①' is U+2460; the sequence runs contiguously through '⑳'
            let badge = char::from_u32(0x2460 + (length as u32 - 1));
            badge.map_or_else(|| format!("({length})"), |c| c.to_string())
        }
        _ => format!("({length})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a round score as a bar against a nominal target
#[must_use]
pub fn score_bar(score: u32, width: usize) -> String {
    let target = 100.0; // A strong round lands around 100 points
    create_progress_bar(f64::from(score), target, width)
}
