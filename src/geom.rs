//! Geometric primitives: points, segments, and the crossing predicate.

use std::cmp::Ordering;

/// Absolute tolerance for point comparisons.
///
/// Two coordinates closer than this are treated as equal, both when ordering
/// points in the sweep status structure and when deciding whether two
/// segments share a start point.
pub const POINT_EPS: f64 = 1e-9;

/// Absolute tolerance for the line/line determinant.
///
/// Determinants smaller than this are treated as parallel (or coincident)
/// lines, so near-parallel crossings are reported as no crossing at all.
pub const DET_EPS: f64 = 1e-13;

/// A two-dimensional point.
///
/// Points are compared by `y` and then by `x`, with an absolute tolerance of
/// [`POINT_EPS`], for the convenience of our sweep-line algorithm. Because a
/// tolerance relation is not a total order, the comparisons are explicit
/// methods ([`Point::sweep_cmp`], [`Point::approx_eq`]) rather than `Ord` and
/// `Eq` impls; the derived `PartialEq` is exact.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Compare two points in sweep order: `y` first, then `x`, with
    /// [`POINT_EPS`] slack on both coordinates.
    ///
    /// Coordinates within the tolerance band compare as `Equal`, so distinct
    /// points can tie. Ties are resolved by whoever holds the points (the
    /// status structure keeps same-key entries in insertion order).
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        if self.y < other.y - POINT_EPS {
            Ordering::Less
        } else if self.y > other.y + POINT_EPS {
            Ordering::Greater
        } else if self.x < other.x - POINT_EPS {
            Ordering::Less
        } else if self.x > other.x + POINT_EPS {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Are the two points within [`POINT_EPS`] of each other on both axes?
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.y - other.y).abs() < POINT_EPS && (self.x - other.x).abs() < POINT_EPS
    }

    /// Convert to a [`kurbo::Point`].
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point { x: p.x, y: p.y }
    }
}

/// A line segment between two endpoints.
///
/// Segments stored in the arena are normalized so that `beg.x <= end.x`; see
/// [`Segments::insert`](crate::Segments::insert). A segment's `end` is
/// mutated in place when the segment is split at an interior crossing.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// The endpoint with the smaller `x` coordinate (after normalization).
    pub beg: Point,
    /// The endpoint with the larger `x` coordinate (after normalization).
    pub end: Point,
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.beg, self.end)
    }
}

impl Segment {
    /// Create a new segment. No normalization or validation is performed.
    pub fn new(beg: Point, end: Point) -> Self {
        Segment { beg, end }
    }

    /// Convert to a [`kurbo::Line`].
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.beg.to_kurbo(), self.end.to_kurbo())
    }

    /// The crossing point of `self` and `other`, if they cross at a point
    /// strictly inside both segments.
    ///
    /// The candidate point is the intersection of the two *infinite* lines,
    /// computed with the standard 2x2 determinant formula. A determinant
    /// smaller than [`DET_EPS`] means parallel or coincident lines and
    /// reports no crossing; that also swallows near-parallel crossings, which
    /// is a deliberate approximation rather than a robust predicate.
    ///
    /// The candidate is then required to sit in the open parameter interval
    /// `(POINT_EPS, 1 - POINT_EPS)` along both segments, checked through the
    /// x- and y-projections independently. Crossings at or within
    /// [`POINT_EPS`] of any endpoint are therefore never reported. A
    /// degenerate projection (0/0 on an axis-aligned segment) yields NaN,
    /// which fails both bounds checks and so does not reject.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let (a, b) = (self, other);
        let det = (a.beg.x - a.end.x) * (b.beg.y - b.end.y)
            - (a.beg.y - a.end.y) * (b.beg.x - b.end.x);
        if det.abs() < DET_EPS {
            return None;
        }
        let ca = a.beg.x * a.end.y - a.beg.y * a.end.x;
        let cb = b.beg.x * b.end.y - b.beg.y * b.end.x;
        let p = Point::new(
            (ca * (b.beg.x - b.end.x) - (a.beg.x - a.end.x) * cb) / det,
            (ca * (b.beg.y - b.end.y) - (a.beg.y - a.end.y) * cb) / det,
        );

        let outside = |t: f64| t < POINT_EPS || t > 1.0 - POINT_EPS;
        if outside((p.x - a.beg.x) / (a.end.x - a.beg.x)) {
            return None;
        }
        if outside((p.y - a.beg.y) / (a.end.y - a.beg.y)) {
            return None;
        }
        if outside((p.x - b.beg.x) / (b.end.x - b.beg.x)) {
            return None;
        }
        if outside((p.y - b.beg.y) / (b.end.y - b.beg.y)) {
            return None;
        }
        Some(p)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((beg, end): (Point, Point)) -> Self {
        Segment { beg, end }
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from((beg, end): ((f64, f64), (f64, f64))) -> Self {
        Segment {
            beg: beg.into(),
            end: end.into(),
        }
    }
}

impl From<kurbo::Line> for Segment {
    fn from(line: kurbo::Line) -> Self {
        Segment {
            beg: line.p0.into(),
            end: line.p1.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(beg: (f64, f64), end: (f64, f64)) -> Segment {
        Segment::new(beg.into(), end.into())
    }

    #[test]
    fn sweep_cmp_orders_by_y_then_x() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(p.sweep_cmp(&Point::new(5.0, 2.0)), Ordering::Less);
        assert_eq!(p.sweep_cmp(&Point::new(-5.0, 0.0)), Ordering::Greater);
        assert_eq!(p.sweep_cmp(&Point::new(2.0, 1.0)), Ordering::Less);
        assert_eq!(p.sweep_cmp(&Point::new(0.0, 1.0)), Ordering::Greater);
        assert_eq!(p.sweep_cmp(&p), Ordering::Equal);
    }

    #[test]
    fn sweep_cmp_tolerates_tiny_differences() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(p.sweep_cmp(&Point::new(1.0, 1.0 + 1e-10)), Ordering::Equal);
        assert_eq!(p.sweep_cmp(&Point::new(1.0 + 1e-10, 1.0)), Ordering::Equal);
        assert_eq!(p.sweep_cmp(&Point::new(1.0, 1.0 + 1e-8)), Ordering::Less);
        assert_eq!(p.sweep_cmp(&Point::new(1.0 + 1e-8, 1.0)), Ordering::Less);
    }

    #[test]
    fn approx_eq_band() {
        let p = Point::new(3.0, -2.0);
        assert!(p.approx_eq(&Point::new(3.0 + 1e-10, -2.0 - 1e-10)));
        assert!(!p.approx_eq(&Point::new(3.0 + 1e-8, -2.0)));
        assert!(!p.approx_eq(&Point::new(3.0, -2.0 - 1e-8)));
    }

    #[test]
    fn crossing_in_the_middle() {
        let p = seg((0.0, 0.0), (2.0, 2.0))
            .intersection(&seg((0.0, 2.0), (2.0, 0.0)))
            .unwrap();
        assert!(p.approx_eq(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        assert!(seg((0.0, 0.0), (1.0, 1.0))
            .intersection(&seg((0.0, 1.0), (1.0, 2.0)))
            .is_none());
    }

    #[test]
    fn near_parallel_is_treated_as_parallel() {
        // Determinant below DET_EPS even though the infinite lines do cross.
        assert!(seg((0.0, 0.0), (1.0, 1.0))
            .intersection(&seg((0.0, 1e-3), (1.0, 1.0 + 1e-3 + 1e-14)))
            .is_none());
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        assert!(seg((0.0, 0.0), (1.0, 1.0))
            .intersection(&seg((0.0, 0.0), (1.0, -1.0)))
            .is_none());
    }

    #[test]
    fn endpoint_touching_interior_is_not_a_crossing() {
        // One segment's endpoint lies on the other's interior.
        assert!(seg((-1.0, 0.0), (1.0, 0.0))
            .intersection(&seg((0.0, -1.0), (0.3, 0.0)))
            .is_none());
    }

    #[test]
    fn axis_aligned_crossing() {
        // Both degenerate projections go through the NaN path and must not
        // reject the genuine crossing.
        let p = seg((-1.0, 0.0), (1.0, 0.0))
            .intersection(&seg((0.0, -1.0), (0.0, 1.0)))
            .unwrap();
        assert!(p.approx_eq(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn kurbo_round_trip() {
        let line = kurbo::Line::new((0.5, -1.5), (2.0, 3.0));
        let s = Segment::from(line);
        assert_eq!(s.beg, Point::new(0.5, -1.5));
        assert_eq!(s.to_kurbo().p1, line.p1);
    }
}
