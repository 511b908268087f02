//! Decode configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how a [`Wkb`](crate::Wkb) cursor treats the
/// buffer header.
///
/// # Examples
///
/// ```
/// use wkbview::{DecodeOptions, Wkb};
///
/// // A big-endian order byte is rejected by default
/// let buf = [0u8, 0, 0, 0, 1, 0, 0, 0, 0];
/// assert!(Wkb::new(&buf).is_err());
/// assert!(Wkb::with_options(&buf, DecodeOptions::lenient()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Reject buffers whose order byte declares anything other than
    /// little-endian encoding. When false the order byte is read but
    /// ignored and counts and coordinates are decoded little-endian
    /// regardless, so a genuinely big-endian buffer will misdecode.
    pub require_little_endian: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl DecodeOptions {
    /// Little-endian input only. This is the default.
    pub fn strict() -> Self {
        Self {
            require_little_endian: true,
        }
    }

    /// Read the order byte but never branch on it.
    pub fn lenient() -> Self {
        Self {
            require_little_endian: false,
        }
    }
}
