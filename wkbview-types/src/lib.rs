//! # wkbview-types
//!
//! Geometry value types for the `wkbview` WKB codec.
//!
//! This crate provides the plain value types the codec produces:
//!
//! - **`Point`**: an immutable 2D coordinate pair
//! - **`Rect`**: an axis-aligned bounding rectangle with a void sentinel
//!   that acts as the identity of the union operation
//!
//! All types are serializable with Serde and built on top of the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use wkbview_types::{Point, Rect};
//!
//! let bounds = Rect::bounds_of([Point::new(0.0, 0.0), Point::new(4.0, 3.0)]);
//! assert_eq!(bounds.width(), 4.0);
//! assert_eq!(bounds.height(), 3.0);
//! ```

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rect;
