/// Trims user-entered text, returning `None` when nothing is left.
///
/// Titles and card contents are never stored empty, so every commit path
/// goes through this first.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
