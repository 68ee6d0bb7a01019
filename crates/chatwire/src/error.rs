//! Unified error type for the chatwire meta-crate.

use chatwire_segment::SegmentError;

/// Errors that can occur while decoding wire text into a message.
///
/// When using the `chatwire` meta-crate, this is the single error type you
/// deal with; the `#[from]` attribute converts sub-crate errors
/// automatically under `?`. Encoding cannot fail — every message has a wire
/// representation — so there is no encode counterpart.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A segment-level error (orphaned action segment).
    #[error(transparent)]
    Segment(#[from] SegmentError),
}
