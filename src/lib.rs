//! Zero-copy reader for Well-Known Binary (WKB) geometries.
//!
//! A [`Wkb`] cursor interprets a caller-owned byte buffer in place,
//! without ever allocating an intermediate geometry tree, and answers
//! two questions about the encoded geometry: its axis-aligned bounding
//! rectangle and its GeoJSON rendering. Both are built on one traversal
//! protocol ([`Wkb::apply`]) that hands each logical vertex run to a
//! [`RunVisitor`], so further consumers can be added without re-deriving
//! the binary layout. A minimal encoder for the single-point case is
//! the one construction path.
//!
//! ```rust
//! use wkbview::{Wkb, point_wkb};
//! use wkbview_types::Point;
//!
//! let buf = point_wkb(&Point::new(12.5, -7.25));
//! let wkb = Wkb::new(&buf)?;
//!
//! let rect = wkb.bounds()?;
//! assert_eq!(rect.min, Point::new(12.5, -7.25));
//! assert_eq!(
//!     wkb.to_geo_json()?,
//!     "{\"type\":\"Point\",\"coordinates\":[12.500000,-7.250000]}"
//! );
//! # Ok::<(), wkbview::WkbError>(())
//! ```
//!
//! Buffers come from wherever the caller got them: a database column,
//! a file, a network message. The cursor never validates that a buffer
//! is meaningful WKB beyond what safety demands: every read is bounds
//! checked and a truncated or lying buffer yields
//! [`WkbError::TruncatedBuffer`] instead of undefined behavior.

pub mod bounds;
pub mod cursor;
pub mod encode;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod options;
pub mod visit;

pub use bounds::BoundsReducer;
pub use cursor::{LITTLE_ENDIAN_ORDER, VertexRun, Wkb};
pub use encode::{POINT_WKB_LEN, point_wkb, write_point_wkb};
pub use error::{Result, WkbError};
pub use geojson::GeoJsonFormatter;
pub use geometry::GeometryType;
pub use options::DecodeOptions;
pub use visit::RunVisitor;

pub use wkbview_types::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Result, WkbError};

    pub use crate::{DecodeOptions, GeometryType, VertexRun, Wkb};

    pub use crate::{BoundsReducer, GeoJsonFormatter, RunVisitor};

    pub use crate::{point_wkb, write_point_wkb};

    pub use wkbview_types::{Point, Rect};
}
