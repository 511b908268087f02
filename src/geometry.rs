//! The WKB geometry type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven base 2D geometry types of the OGC WKB encoding.
///
/// The discriminants are the wire-format tag values. Only five of the
/// seven are handled by traversal, bounds and formatting; `MultiPoint`
/// and `GeometryCollection` are recognized but produce empty results
/// (see [`Wkb::apply`](crate::Wkb::apply)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum GeometryType {
    /// A single coordinate pair.
    Point = 1,
    /// A run of coordinate pairs.
    LineString = 2,
    /// One or more closed rings.
    Polygon = 3,
    /// A collection of points (not traversed).
    MultiPoint = 4,
    /// A collection of nested LineString records.
    MultiLineString = 5,
    /// A collection of nested Polygon records.
    MultiPolygon = 6,
    /// A heterogeneous collection (not traversed).
    GeometryCollection = 7,
}

impl GeometryType {
    /// Decode a wire tag. Returns `None` for anything outside the base
    /// 2D range, including Z/M and SRID-flagged variants.
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(Self::Point),
            2 => Some(Self::LineString),
            3 => Some(Self::Polygon),
            4 => Some(Self::MultiPoint),
            5 => Some(Self::MultiLineString),
            6 => Some(Self::MultiPolygon),
            7 => Some(Self::GeometryCollection),
            _ => None,
        }
    }

    /// The wire tag value.
    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Canonical lowercase name of the type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "wkb_point",
            Self::LineString => "wkb_line_string",
            Self::Polygon => "wkb_polygon",
            Self::MultiPoint => "wkb_multi_point",
            Self::MultiLineString => "wkb_multi_line_string",
            Self::MultiPolygon => "wkb_multi_polygon",
            Self::GeometryCollection => "wkb_geometry_collection",
        }
    }

    /// Whether traversal, bounds and formatting handle this type.
    /// `MultiPoint` and `GeometryCollection` are a deliberate gap: they
    /// are recognized but yield empty results.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::MultiPoint | Self::GeometryCollection)
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
