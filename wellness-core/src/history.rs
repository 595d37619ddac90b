/// Number of entries shown in weight and food history
pub const RECENT_LIMIT: usize = 5;

/// Keep the first [`RECENT_LIMIT`] entries of a newest-first list
pub fn most_recent<T>(mut entries: Vec<T>) -> Vec<T> {
    entries.truncate(RECENT_LIMIT);
    entries
}
