#![deny(missing_docs)]
//! Pairwise line-segment intersections, computed with a sweep line.
//!
//! Given a set of 2D line segments, this crate finds every strictly-interior
//! pairwise crossing point and splits each segment at every crossing it
//! participates in, producing the induced arrangement of pieces. Comparisons
//! use fixed absolute tolerances ([`POINT_EPS`], [`DET_EPS`]) rather than
//! exact arithmetic, so the results are fast and predictable but not robust
//! against degenerate input; see the caveats on
//! [`Segment::intersection`] and [`Arrangement`].
//!
//! ```
//! let result = segsweep::arrangement([
//!     ((0.0, 0.0), (2.0, 2.0)),
//!     ((0.0, 2.0), (2.0, 0.0)),
//! ]);
//! assert_eq!(result.intersections.len(), 1);
//! assert_eq!(result.segments.len(), 4);
//! ```
//!
//! What this crate does *not* do: it builds no planar topology (no faces or
//! adjacency), does not merge collinear overlaps, and makes no promises for
//! zero-length or exactly-overlapping segments beyond whatever the tolerance
//! comparisons happen to produce.

mod geom;
mod segments;
pub mod sweep;

pub use geom::{Point, Segment, DET_EPS, POINT_EPS};
pub use segments::{SegIdx, Segments};
pub use sweep::{Arrangement, Diagnostic, Sweeper};

/// Compute the arrangement of the given segments.
///
/// This is shorthand for [`Sweeper::new`] followed by [`Sweeper::run`].
/// Anything convertible into a [`Segment`] is accepted, including coordinate
/// tuples and [`kurbo::Line`]s; endpoint order does not matter.
pub fn arrangement<I, S>(segments: I) -> Arrangement
where
    I: IntoIterator<Item = S>,
    S: Into<Segment>,
{
    Sweeper::new(segments).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kurbo_lines() {
        let result = arrangement([
            kurbo::Line::new((0.0, 0.0), (2.0, 2.0)),
            kurbo::Line::new((0.0, 2.0), (2.0, 0.0)),
        ]);
        assert_eq!(result.intersections.len(), 1);
        assert_eq!(result.intersections[0].to_kurbo(), kurbo::Point::new(1.0, 1.0));
    }
}
