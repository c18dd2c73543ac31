use crate::geom::{Point, Segment};

/// An index into our segment arena.
///
/// Segments have identities: two segments with the same endpoints are still
/// different segments. The index is the identity; segment data is retrieved
/// by indexing into [`Segments`]. Indices are never invalidated or reused,
/// because the arena only ever grows.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SegIdx(pub usize);

impl std::fmt::Debug for SegIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s_{}", self.0)
    }
}

/// An append-only arena of line segments.
///
/// Segments are indexed by [`SegIdx`] and retrieved by indexing (i.e. with
/// square brackets). The arena starts out holding the input segments, in
/// input order; splitting appends continuation pieces at the back, so after a
/// sweep the indices `0..n` still name the (possibly truncated) inputs and
/// indices `n..` name the pieces split off from them.
#[derive(Debug, Clone, Default)]
pub struct Segments {
    segs: Vec<Segment>,
}

impl Segments {
    /// The number of segments in this arena.
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Is the arena empty?
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Iterate over all indices that can be used to index into this arena.
    pub fn indices(&self) -> impl Iterator<Item = SegIdx> {
        (0..self.segs.len()).map(SegIdx)
    }

    /// Iterate over all segments in this arena.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter()
    }

    /// Add a segment to the arena, normalizing it so that `beg.x <= end.x`,
    /// and return its index.
    ///
    /// Callers need not (and should not) pre-normalize; reversed input is
    /// expected. Zero-length segments are accepted as-is.
    pub fn insert(&mut self, mut seg: Segment) -> SegIdx {
        if seg.beg.x > seg.end.x {
            std::mem::swap(&mut seg.beg, &mut seg.end);
        }
        self.segs.push(seg);
        SegIdx(self.segs.len() - 1)
    }

    /// Shorten the segment at `idx` so that it ends at `at`.
    ///
    /// This is the one in-place mutation of segment data; it goes through the
    /// index on purpose, so that no segment reference is held across an
    /// operation that may grow the arena.
    pub fn truncate(&mut self, idx: SegIdx, at: Point) {
        self.segs[idx.0].end = at;
    }
}

impl std::ops::Index<SegIdx> for Segments {
    type Output = Segment;

    fn index(&self, index: SegIdx) -> &Self::Output {
        &self.segs[index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_normalizes_endpoint_order() {
        let mut segs = Segments::default();
        let a = segs.insert(Segment::new(Point::new(2.0, 1.0), Point::new(-1.0, 0.0)));
        let b = segs.insert(Segment::new(Point::new(-1.0, 0.0), Point::new(2.0, 1.0)));
        assert_eq!(segs[a], segs[b]);
        assert_eq!(segs[a].beg, Point::new(-1.0, 0.0));
    }

    #[test]
    fn truncate_mutates_through_the_index() {
        let mut segs = Segments::default();
        let a = segs.insert(Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0)));
        let mid = Point::new(2.0, 2.0);
        segs.truncate(a, mid);
        assert_eq!(segs[a].end, mid);
        assert_eq!(segs[a].beg, Point::new(0.0, 0.0));
    }

    #[test]
    fn indices_stay_valid_as_the_arena_grows() {
        let mut segs = Segments::default();
        let first = segs.insert(Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
        for k in 0..100 {
            segs.insert(Segment::new(Point::new(k as f64, 1.0), Point::new(k as f64, 2.0)));
        }
        assert_eq!(segs[first].end, Point::new(1.0, 0.0));
        assert_eq!(segs.indices().count(), 101);
    }
}
