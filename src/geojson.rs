//! GeoJSON rendering of WKB geometries.
//!
//! Output is an RFC 7946 geometry object (never a Feature wrapper) with
//! coordinates in `[x, y]` order and fixed six-decimal formatting:
//! trailing zeros are kept and scientific notation never appears.

use crate::cursor::{VertexRun, Wkb};
use crate::error::Result;
use crate::geometry::GeometryType;
use crate::visit::RunVisitor;
use std::fmt::Write;

/// Renders traversal runs as GeoJSON coordinate arrays.
///
/// In flat mode (Point, LineString) runs are comma-joined coordinate
/// pairs; in parts mode (Polygon rings, MultiLineString parts) each run
/// gets its own bracket pair, with a run counter deciding whether a
/// separating comma is needed. MultiPolygon needs one more nesting
/// level than parts mode can express, so [`to_geo_json`] walks its
/// members through indexed access and formats each with a fresh
/// parts-mode formatter.
#[derive(Debug)]
pub struct GeoJsonFormatter {
    out: String,
    counter: u32,
    parts: bool,
}

impl GeoJsonFormatter {
    /// Flat mode: runs are comma-joined coordinate pairs.
    pub fn new() -> Self {
        Self {
            out: String::new(),
            counter: 0,
            parts: false,
        }
    }

    /// Parts mode: each run is wrapped in its own bracket pair.
    pub fn nested() -> Self {
        Self {
            out: String::new(),
            counter: 0,
            parts: true,
        }
    }

    /// The rendered coordinate text.
    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for GeoJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunVisitor for GeoJsonFormatter {
    fn run(&mut self, run: &VertexRun<'_>) -> Result<()> {
        if self.parts {
            self.out.push_str(if self.counter > 0 { ",[" } else { "[" });
        } else if self.counter > 0 {
            self.out.push(',');
        }
        for (i, point) in run.points().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            // writing into a String cannot fail
            let _ = write!(self.out, "[{:.6},{:.6}]", point.x(), point.y());
        }
        if self.parts {
            self.out.push(']');
        }
        self.counter += 1;
        Ok(())
    }
}

/// Render `wkb` as a GeoJSON geometry object.
///
/// Bracket depth follows the geometry type: flat coordinates for Point,
/// one array level for LineString, one bracket pair per run for Polygon
/// and MultiLineString, and one further level for MultiPolygon.
/// `MultiPoint`, `GeometryCollection` and unrecognized tags render as
/// the empty object `{}`.
pub(crate) fn to_geo_json(wkb: &Wkb<'_>) -> Result<String> {
    let mut out = String::from("{");
    match wkb.geometry_type() {
        Some(GeometryType::Point) => {
            out.push_str("\"type\":\"Point\",\"coordinates\":");
            let mut fmt = GeoJsonFormatter::new();
            wkb.apply(&mut fmt)?;
            out.push_str(&fmt.finish());
        }
        Some(GeometryType::LineString) => {
            out.push_str("\"type\":\"LineString\",\"coordinates\":[");
            let mut fmt = GeoJsonFormatter::new();
            wkb.apply(&mut fmt)?;
            out.push_str(&fmt.finish());
            out.push(']');
        }
        Some(GeometryType::Polygon) => {
            out.push_str("\"type\":\"Polygon\",\"coordinates\":[");
            let mut fmt = GeoJsonFormatter::nested();
            wkb.apply(&mut fmt)?;
            out.push_str(&fmt.finish());
            out.push(']');
        }
        Some(GeometryType::MultiLineString) => {
            out.push_str("\"type\":\"MultiLineString\",\"coordinates\":[");
            let mut fmt = GeoJsonFormatter::nested();
            wkb.apply(&mut fmt)?;
            out.push_str(&fmt.finish());
            out.push(']');
        }
        Some(GeometryType::MultiPolygon) => {
            // Indexed member access rather than the flat traversal:
            // ring-to-polygon grouping must survive into the output.
            out.push_str("\"type\":\"MultiPolygon\",\"coordinates\":[");
            for i in 0..wkb.size() as usize {
                out.push_str(if i > 0 { ",[" } else { "[" });
                let member = wkb.polygon(i)?;
                let mut fmt = GeoJsonFormatter::nested();
                member.apply(&mut fmt)?;
                out.push_str(&fmt.finish());
                out.push(']');
            }
            out.push(']');
        }
        // Deliberate gap, mirrored from traversal: no coordinates, no
        // type key, just an empty object.
        Some(GeometryType::MultiPoint) | Some(GeometryType::GeometryCollection) | None => {}
    }
    out.push('}');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::point_wkb;
    use wkbview_types::Point;

    #[test]
    fn point_rendering() {
        let buf = point_wkb(&Point::new(12.5, -7.25));
        let wkb = Wkb::new(&buf).unwrap();
        assert_eq!(
            wkb.to_geo_json().unwrap(),
            "{\"type\":\"Point\",\"coordinates\":[12.500000,-7.250000]}"
        );
    }

    #[test]
    fn fixed_decimals_never_go_scientific() {
        let buf = point_wkb(&Point::new(0.0000001, 1e7));
        let wkb = Wkb::new(&buf).unwrap();
        assert_eq!(
            wkb.to_geo_json().unwrap(),
            "{\"type\":\"Point\",\"coordinates\":[0.000000,10000000.000000]}"
        );
    }
}
