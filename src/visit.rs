//! The traversal consumer interface.

use crate::cursor::VertexRun;
use crate::error::Result;

/// A traversal consumer.
///
/// [`Wkb::apply`](crate::Wkb::apply) calls [`run`](RunVisitor::run)
/// exactly once per logical vertex run: once for a Point, once for a
/// LineString, once per ring for a Polygon, once per part for a
/// MultiLineString, and once per ring across all members for a
/// MultiPolygon. Ring boundaries are visible to the visitor; polygon
/// boundaries are not, so a visitor that needs polygon grouping must
/// count invocations itself or walk members through indexed access.
///
/// Accumulator state lives in the implementing type and is read back
/// after traversal, typically through a `finish()` method.
pub trait RunVisitor {
    /// Accept one vertex run.
    fn run(&mut self, run: &VertexRun<'_>) -> Result<()>;
}
