use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable 2D coordinate pair.
///
/// This wraps `geo::Point<f64>` and has no identity beyond its
/// coordinates. Axis order is (x, y); for geographic data that means
/// longitude before latitude.
///
/// # Examples
///
/// ```
/// use wkbview_types::Point;
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// assert_eq!(nyc.x(), -74.0060);
/// assert_eq!(nyc.y(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x and y coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Euclidean distance to another point.
    ///
    /// Coordinates are treated as Cartesian; there is no geodesic
    /// correction.
    ///
    /// # Examples
    ///
    /// ```
    /// use wkbview_types::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }

    /// Get the underlying `geo::Point`.
    #[inline]
    pub fn to_geo(&self) -> geo::Point<f64> {
        self.inner
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(inner: geo::Point<f64>) -> Self {
        Self { inner }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Point::new(12.5, -7.25);
        assert_eq!(p.x(), 12.5);
        assert_eq!(p.y(), -7.25);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn geo_round_trip() {
        let p = Point::new(-74.0060, 40.7128);
        let geo_point: geo::Point<f64> = p.into();
        assert_eq!(Point::from(geo_point), p);
    }

    #[test]
    fn display() {
        let p = Point::new(1.5, -2.0);
        assert_eq!(p.to_string(), "1.5, -2");
    }
}
