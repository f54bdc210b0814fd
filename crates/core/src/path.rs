//! Laser paths and their segment decomposition.
//!
//! A [`LaserPath`] wraps a [`kurbo::BezPath`] and exposes it as an ordered
//! list of [`Segment`]s: pure travel moves and drawable curves. The
//! decomposition is computed once at construction since paths are
//! immutable for the lifetime of a job.

use kurbo::{
    Affine, BezPath, CubicBez, Line, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point, QuadBez,
};

use crate::error::{Error, Result};

/// A single piece of a laser path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Pure travel to `end` with the beam off.
    Move {
        /// Where the head was before the move, if the path had a current point.
        start: Option<Point>,
        /// Target of the move.
        end: Point,
    },
    /// A burned curve (line, quadratic or cubic).
    Draw(PathSeg),
}

impl Segment {
    /// Start point of the segment, if known.
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Move { start, .. } => *start,
            Self::Draw(seg) => Some(seg.start()),
        }
    }

    /// End point of the segment.
    pub fn end(&self) -> Point {
        match self {
            Self::Move { end, .. } => *end,
            Self::Draw(seg) => seg.end(),
        }
    }

    /// Burned length of the segment. Moves have none.
    ///
    /// `accuracy` bounds the curve discretization error and is handed to
    /// the geometry library unchanged.
    pub fn length(&self, accuracy: f64) -> f64 {
        match self {
            Self::Move { .. } => 0.0,
            Self::Draw(seg) => seg.arclen(accuracy),
        }
    }

    /// Returns true for travel moves.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }
}

/// An immutable geometric path supplied by the parsing collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaserPath {
    bez: BezPath,
    segments: Vec<Segment>,
}

impl LaserPath {
    /// Wraps a Bézier path and decomposes it into segments.
    pub fn new(bez: BezPath) -> Self {
        let segments = decompose(&bez);
        Self { bez, segments }
    }

    /// Parses SVG path data (the `d` attribute of a `<path>` element).
    pub fn from_svg(data: &str) -> Result<Self> {
        BezPath::from_svg(data)
            .map(Self::new)
            .map_err(|e| Error::InvalidPath(format!("{data:?}: {e}")))
    }

    /// Builds a polyline through `points`, optionally closed.
    pub fn polyline(points: &[(f64, f64)], closed: bool) -> Self {
        let mut bez = BezPath::new();
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            bez.move_to((x, y));
            for &(x, y) in iter {
                bez.line_to((x, y));
            }
            if closed {
                bez.close_path();
            }
        }
        Self::new(bez)
    }

    /// Builds a closed axis-aligned rectangle with its first corner at `(x, y)`.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::polyline(
            &[(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
            true,
        )
    }

    /// The underlying Bézier path.
    pub fn bez_path(&self) -> &BezPath {
        &self.bez
    }

    /// Ordered segments of the path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if at least one segment burns.
    pub fn has_drawable(&self) -> bool {
        self.segments.iter().any(|seg| !seg.is_move())
    }

    /// First point the head must reach to process this path.
    ///
    /// This is the target of a leading move, or the start of a leading
    /// drawable segment. `None` for an empty path.
    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(|seg| match seg {
            Segment::Move { end, .. } => *end,
            Segment::Draw(curve) => curve.start(),
        })
    }

    /// End point of the last segment. `None` for an empty path.
    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(Segment::end)
    }

    /// Returns a copy of this path uniformly scaled about the origin.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut bez = self.bez.clone();
        bez.apply_affine(Affine::scale(factor));
        Self::new(bez)
    }
}

impl From<BezPath> for LaserPath {
    fn from(bez: BezPath) -> Self {
        Self::new(bez)
    }
}

/// Walks the path elements, tracking the current point and subpath start.
///
/// Drawing elements without a current point cannot be placed and are
/// dropped. A close always yields a line back to the subpath start, even
/// when it has zero length, so that it still counts as a vertex.
fn decompose(bez: &BezPath) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(bez.elements().len());
    let mut current: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                segments.push(Segment::Move {
                    start: current,
                    end: p,
                });
                current = Some(p);
                subpath_start = Some(p);
            }
            PathEl::LineTo(p) => {
                if let Some(c) = current {
                    segments.push(Segment::Draw(PathSeg::Line(Line::new(c, p))));
                }
                current = Some(p);
            }
            PathEl::QuadTo(p1, p2) => {
                if let Some(c) = current {
                    segments.push(Segment::Draw(PathSeg::Quad(QuadBez::new(c, p1, p2))));
                }
                current = Some(p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                if let Some(c) = current {
                    segments.push(Segment::Draw(PathSeg::Cubic(CubicBez::new(c, p1, p2, p3))));
                }
                current = Some(p3);
            }
            PathEl::ClosePath => {
                if let (Some(c), Some(s)) = (current, subpath_start) {
                    segments.push(Segment::Draw(PathSeg::Line(Line::new(c, s))));
                }
                current = subpath_start;
            }
        }
    }

    segments
}
