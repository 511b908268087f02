use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned bounding rectangle defined by two corner points.
///
/// Under normal use `min.x <= max.x` and `min.y <= max.y`. The one
/// exception is the [void rectangle](Rect::void), whose corners are
/// inverted (`min = (f64::MAX, f64::MAX)`, `max = (-f64::MAX,
/// -f64::MAX)`). The void rectangle is the identity of
/// [`extend`](Rect::extend): accumulating bounds always starts from it.
///
/// # Examples
///
/// ```
/// use wkbview_types::{Point, Rect};
///
/// let mut acc = Rect::void();
/// acc.extend(&Rect::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0)));
/// acc.extend(&Rect::new(Point::new(-1.0, 1.0), Point::new(1.0, 3.0)));
/// assert_eq!(acc.min, Point::new(-1.0, 0.0));
/// assert_eq!(acc.max, Point::new(2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its corner points.
    ///
    /// Corners are stored as given; they are not reordered. This is what
    /// lets the void sentinel exist at all (`geo::Rect` would normalize
    /// the corners away).
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The void rectangle: the "no geometry yet" sentinel and the
    /// identity element of [`extend`](Rect::extend).
    pub fn void() -> Self {
        Self {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(-f64::MAX, -f64::MAX),
        }
    }

    /// True only for the void sentinel itself.
    pub fn is_void(&self) -> bool {
        *self == Self::void()
    }

    /// Width of the rectangle as an absolute difference.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.max.x() - self.min.x()).abs()
    }

    /// Height of the rectangle as an absolute difference.
    #[inline]
    pub fn height(&self) -> f64 {
        (self.max.y() - self.min.y()).abs()
    }

    /// True for the void rectangle, and also for a degenerate rectangle
    /// with zero width and zero height.
    ///
    /// Note the asymmetry with [`extend`](Rect::extend): a degenerate
    /// point bound reports `empty()` but still participates in a union,
    /// while the void rectangle is skipped entirely.
    pub fn empty(&self) -> bool {
        self.is_void() || (self.width() == 0.0 && self.height() == 0.0)
    }

    /// Grow this rectangle to cover `other`.
    ///
    /// Extending by the void rectangle is a no-op, which makes it the
    /// identity of the operation. Both of `other`'s corners enter the
    /// min/max fold, so a denormalized rectangle still unions correctly.
    pub fn extend(&mut self, other: &Rect) {
        if other.is_void() {
            return;
        }
        let lo_x = other.min.x().min(other.max.x());
        let lo_y = other.min.y().min(other.max.y());
        let hi_x = other.min.x().max(other.max.x());
        let hi_y = other.min.y().max(other.max.y());

        self.min = Point::new(self.min.x().min(lo_x), self.min.y().min(lo_y));
        self.max = Point::new(self.max.x().max(hi_x), self.max.y().max(hi_y));
    }

    /// Grow this rectangle to cover a single point.
    pub fn extend_point(&mut self, point: &Point) {
        self.min = Point::new(self.min.x().min(point.x()), self.min.y().min(point.y()));
        self.max = Point::new(self.max.x().max(point.x()), self.max.y().max(point.y()));
    }

    /// Grow this rectangle to cover every point in the iterator.
    pub fn extend_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            self.extend_point(&point);
        }
    }

    /// The union of two rectangles. Commutative and associative, with
    /// the void rectangle as identity.
    pub fn union(a: &Rect, b: &Rect) -> Rect {
        let mut out = *a;
        out.extend(b);
        out
    }

    /// Bounding rectangle of a sequence of points, folded from the void
    /// rectangle. Returns the void rectangle for an empty sequence.
    pub fn bounds_of<I>(points: I) -> Rect
    where
        I: IntoIterator<Item = Point>,
    {
        let mut out = Rect::void();
        out.extend_points(points);
        out
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
        )
    }

    /// Check if a point lies within this rectangle (borders included).
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.min.x()
            && point.x() <= self.max.x()
            && point.y() >= self.min.y()
            && point.y() <= self.max.y()
    }

    /// Convert to a `geo::Rect`. Returns `None` for the void rectangle,
    /// whose inverted corners `geo::Rect` cannot represent.
    pub fn to_geo_rect(&self) -> Option<geo::Rect<f64>> {
        if self.is_void() {
            return None;
        }
        Some(geo::Rect::new(
            geo::coord! { x: self.min.x(), y: self.min.y() },
            geo::coord! { x: self.max.x(), y: self.max.y() },
        ))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}
