//! Geometry adapter over the external path library.
//!
//! Pure, stateless queries on [`LaserPath`]s: length, bounding box, raster
//! dimensions and point distances. None of these fail; empty or degenerate
//! geometry yields zero.

use kurbo::{ParamCurveExtrema, Point, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::path::{LaserPath, Segment};

/// Default bound on curve discretization error, in path units.
pub const DEFAULT_ERROR_LIMIT: f64 = 0.1;

/// Axis-aligned bounding box `(min_x, min_y, max_x, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox {
    /// The all-zero box returned for empty geometry.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new bounding box.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Corner where a raster scan starts (`min_x`, `min_y`; SVG Y points down).
    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Corner where a raster scan ends.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Returns the box as a `(min_x, min_y, max_x, max_y)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }

    fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        // Rect does not guarantee x0 <= x1
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

/// Total burned length of a path.
///
/// Travel moves contribute nothing. `error_limit` bounds the curve
/// discretization error and is delegated to the geometry library.
pub fn path_length(path: &LaserPath, error_limit: f64) -> f64 {
    path.segments()
        .iter()
        .map(|seg| seg.length(error_limit))
        .sum()
}

/// Tight bounding box of the drawable segments of a path.
///
/// Returns [`BoundingBox::ZERO`] when the path has nothing to draw.
pub fn bounding_box(path: &LaserPath) -> BoundingBox {
    let rect = path
        .segments()
        .iter()
        .filter_map(|seg| match seg {
            Segment::Draw(curve) => Some(curve.bounding_box()),
            Segment::Move { .. } => None,
        })
        .reduce(|acc, r| acc.union(r));

    match rect.map(BoundingBox::from) {
        Some(bbox) if bbox.is_finite() => bbox,
        _ => BoundingBox::ZERO,
    }
}

/// Width and height of the path's bounding box, as used by the raster model.
pub fn raster_dimensions(path: &LaserPath) -> (f64, f64) {
    let bbox = bounding_box(path);
    (bbox.width(), bbox.height())
}

/// Euclidean distance between two points.
#[inline]
pub fn point_distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Euclidean distance between two optional points; zero if either is absent.
#[inline]
pub fn distance(a: Option<Point>, b: Option<Point>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => point_distance(a, b),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_square() {
        let path = LaserPath::from_svg("M 0 0 L 100 0 L 100 100 L 0 100 Z").unwrap();
        assert_relative_eq!(path_length(&path, DEFAULT_ERROR_LIMIT), 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_length_ignores_moves() {
        let path = LaserPath::from_svg("M 0 0 L 10 0 M 50 50 L 50 60").unwrap();
        assert_relative_eq!(path_length(&path, DEFAULT_ERROR_LIMIT), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_length_empty() {
        assert_eq!(path_length(&LaserPath::default(), DEFAULT_ERROR_LIMIT), 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let path = LaserPath::from_svg("M 0 0 L 100 0 L 100 50 L 0 50 Z").unwrap();
        assert_eq!(bounding_box(&path).as_tuple(), (0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(bounding_box(&LaserPath::default()), BoundingBox::ZERO);

        // A lone move has nothing to draw
        let path = LaserPath::from_svg("M 40 40").unwrap();
        assert_eq!(bounding_box(&path), BoundingBox::ZERO);
    }

    #[test]
    fn test_bounding_box_of_curve_is_tight() {
        // Control points stick out further than the curve itself
        let path = LaserPath::from_svg("M 0 0 Q 50 100 100 0").unwrap();
        let bbox = bounding_box(&path);
        assert_relative_eq!(bbox.max_y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.width(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_raster_dimensions() {
        let path = LaserPath::from_svg("M 10 20 L 110 20 L 110 70 L 10 70 Z").unwrap();
        let (w, h) = raster_dimensions(&path);
        assert_relative_eq!(w, 100.0);
        assert_relative_eq!(h, 50.0);
    }

    #[test]
    fn test_raster_dimensions_flat() {
        let path = LaserPath::polyline(&[(0.0, 5.0), (30.0, 5.0)], false);
        let (w, h) = raster_dimensions(&path);
        assert_relative_eq!(w, 30.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_distance() {
        assert_relative_eq!(
            point_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            5.0
        );
        assert_eq!(distance(None, Some(Point::new(3.0, 4.0))), 0.0);
        assert_eq!(distance(Some(Point::new(3.0, 4.0)), None), 0.0);
    }

    #[test]
    fn test_corners() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bbox.top_left(), Point::new(1.0, 2.0));
        assert_eq!(bbox.bottom_right(), Point::new(3.0, 4.0));
    }
}
