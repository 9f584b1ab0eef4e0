/// Number of records returned per page, for both sources
pub const PAGE_SIZE: usize = 15;

/// Offset of the page after the one starting at `offset`, if any remains
pub fn next_cursor(total: usize, offset: usize, page_size: usize) -> Option<usize> {
    let end = offset.saturating_add(page_size);
    (end < total).then_some(end)
}

/// Slice one page out of a full match set
pub fn page<T>(items: &[T], offset: usize, page_size: usize) -> &[T] {
    let start = offset.min(items.len());
    let end = offset.saturating_add(page_size).min(items.len());
    &items[start..end]
}
