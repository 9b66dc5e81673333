/// Indices of the names containing `query`, case-insensitively, in original order.
/// An empty query matches everything.
pub fn visible_indices<'a, I>(names: I, query: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_lowercase();
    names
        .into_iter()
        .enumerate()
        .filter(|(_, name)| query.is_empty() || name.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect()
}

/// Clamp a cursor into `[0, len - 1]`, or 0 when there is nothing to point at.
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}
