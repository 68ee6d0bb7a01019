//! Error type for the segment layer.

/// Errors that can occur while tokenizing wire text.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// An action segment (hover, click, or insertion) arrived before any
    /// plain-text segment, so there is no part to attach it to.
    ///
    /// This is always rejected rather than dropped: a silently discarded
    /// hover or click is invisible data loss.
    #[error("`{tag}` segment with no preceding text part")]
    DanglingAction {
        /// The tag of the orphaned segment, e.g. `ttp:`.
        tag: &'static str,
    },
}
