//! Error types for WKB decoding.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WkbError>;

/// Errors produced while interpreting a WKB buffer.
///
/// Decode errors are returned to the immediate caller; there are no
/// partial results and no silent truncation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WkbError {
    /// A read would cross the end of the supplied buffer.
    #[error("read of {len} bytes at offset {offset} crosses the end of a {buffer_len}-byte buffer")]
    TruncatedBuffer {
        /// Offset the read started at.
        offset: usize,
        /// Number of bytes the read needed.
        len: usize,
        /// Total length of the buffer.
        buffer_len: usize,
    },

    /// Indexed ring or part access with an index at or past `size()`.
    #[error("index {index} out of range for geometry with {len} parts")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of rings or parts the geometry actually has.
        len: usize,
    },

    /// The geometry's type tag has no traversal support. Carries the raw
    /// tag value; `MultiPoint` (4), `GeometryCollection` (7) and any tag
    /// outside the base 2D range land here.
    #[error("geometry tag {0} has no traversal support")]
    UnsupportedGeometry(u32),

    /// The order byte declares an encoding other than little-endian and
    /// the decode options forbid it.
    #[error("buffer declares a non-little-endian byte order; only little-endian WKB is supported")]
    BigEndianUnsupported,
}
