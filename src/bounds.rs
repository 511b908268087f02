//! Bounding-rectangle reduction over traversal runs.

use crate::cursor::VertexRun;
use crate::error::Result;
use crate::visit::RunVisitor;
use wkbview_types::Rect;

/// Folds every traversal run into one bounding rectangle.
///
/// The accumulator starts at the void rectangle and each run's points
/// enter a per-axis min/max fold. Ring and part boundaries do not
/// affect the result, and the fold is commutative: run order never
/// changes the final rectangle.
///
/// # Examples
///
/// ```
/// use wkbview::{BoundsReducer, Wkb, point_wkb};
/// use wkbview_types::Point;
///
/// let buf = point_wkb(&Point::new(2.0, 3.0));
/// let mut reducer = BoundsReducer::new();
/// Wkb::new(&buf)?.apply(&mut reducer)?;
/// assert_eq!(reducer.finish().min, Point::new(2.0, 3.0));
/// # Ok::<(), wkbview::WkbError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundsReducer {
    rect: Rect,
}

impl BoundsReducer {
    /// A reducer seeded with the void rectangle.
    pub fn new() -> Self {
        Self { rect: Rect::void() }
    }

    /// The accumulated rectangle. The void rectangle if no run ever
    /// arrived.
    pub fn finish(self) -> Rect {
        self.rect
    }
}

impl Default for BoundsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl RunVisitor for BoundsReducer {
    fn run(&mut self, run: &VertexRun<'_>) -> Result<()> {
        self.rect.extend_points(run.points());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_reducer_is_void() {
        assert!(BoundsReducer::new().finish().is_void());
    }
}
