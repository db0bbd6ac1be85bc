//! Defines structures and types for progress reporting.

/// Represents a snapshot of the progress of a deck-building run.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Number of entries finished so far.
    pub current_item: u64,
    /// Total number of entries in the word list.
    pub total_items: u64,
    /// The headword about to be looked up, or `None` on the final
    /// update after the last entry.
    pub message: Option<String>,
}

/// Type alias for the progress callback function.
///
/// The callback is invoked before each entry is looked up and once more
/// after the last entry completes. `FnMut` allows it to modify captured
/// state (e.g. update a progress bar), and `Send` lets it cross task
/// boundaries.
pub type ProgressCallback = Box<dyn FnMut(ProgressUpdate) + Send>;
