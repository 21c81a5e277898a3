/// Moves one element within a sequence
///
/// Removes the element at `from`, then inserts it at `to` in the
/// *shortened* sequence, so `to` is read relative to the sequence after
/// removal. A `to` past the end appends. Returns `None` when `from` is out
/// of range.
///
/// # Examples
/// ```
/// use tabula_core::domain::reorder::move_within;
///
/// let moved = move_within(&["a", "b", "c"], 0, 2).unwrap();
/// assert_eq!(moved, vec!["b", "c", "a"]);
/// ```
pub fn move_within<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() {
        return None;
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    Some(moved)
}

/// Moves one element from one sequence into another
///
/// The element at `from` is removed from `source` and inserted at `to` in
/// `destination`. The destination was never shortened, so `to` is read
/// against its original contents (clamped to its length). Returns `None`
/// when `from` is out of range.
///
/// # Examples
/// ```
/// use tabula_core::domain::reorder::move_between;
///
/// let (x, y) = move_between(&["c1", "c2"], 0, &["c3"], 1).unwrap();
/// assert_eq!(x, vec!["c2"]);
/// assert_eq!(y, vec!["c3", "c1"]);
/// ```
pub fn move_between<T: Clone>(
    source: &[T],
    from: usize,
    destination: &[T],
    to: usize,
) -> Option<(Vec<T>, Vec<T>)> {
    if from >= source.len() {
        return None;
    }

    let mut remaining = source.to_vec();
    let item = remaining.remove(from);

    let mut received = destination.to_vec();
    let to = to.min(received.len());
    received.insert(to, item);

    Some((remaining, received))
}
