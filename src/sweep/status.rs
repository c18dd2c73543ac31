//! The sweep status structure: segments currently crossing the sweep line.

use std::cmp::Ordering;

use crate::geom::Point;
use crate::segments::SegIdx;

/// The neighbors of a status entry, observed at the moment it was removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovedEntry {
    /// The entry just below (smaller key) the removed one, if any.
    pub below: Option<SegIdx>,
    /// The entry just above (larger key) the removed one, if any.
    pub above: Option<SegIdx>,
}

/// The set of segments currently crossing the sweep line, ordered by their
/// key point under [`Point::sweep_cmp`] (y first, then x, with tolerance).
///
/// Like the event queue, this is a thin ordered multimap: several segments
/// can share a key (within tolerance), so removal matches a specific
/// `(key, segment)` pair rather than just a key. The positions returned by
/// [`insert`](SweepStatus::insert) support the neighbor walks of the sweep
/// driver; they stay valid until the next insert or remove.
#[derive(Clone, Debug, Default)]
pub struct SweepStatus {
    entries: Vec<(Point, SegIdx)>,
}

impl SweepStatus {
    /// Insert `seg` keyed by `key`, after any entries with an equal key, and
    /// return its position.
    pub fn insert(&mut self, key: Point, seg: SegIdx) -> usize {
        let idx = self
            .entries
            .partition_point(|(k, _)| k.sweep_cmp(&key) != Ordering::Greater);
        self.entries.insert(idx, (key, seg));
        idx
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the structure empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The key of the entry at `idx`.
    pub fn key(&self, idx: usize) -> &Point {
        &self.entries[idx].0
    }

    /// The segment of the entry at `idx`.
    pub fn seg(&self, idx: usize) -> SegIdx {
        self.entries[idx].1
    }

    /// Remove the entry for `seg` among the entries whose key ties with
    /// `key`, reporting its immediate neighbors at the moment of removal.
    ///
    /// Returns `None`, leaving the structure untouched, if no entry in the
    /// key's tolerance range carries `seg`.
    pub fn remove(&mut self, key: &Point, seg: SegIdx) -> Option<RemovedEntry> {
        let lo = self
            .entries
            .partition_point(|(k, _)| k.sweep_cmp(key) == Ordering::Less);
        let hi = self
            .entries
            .partition_point(|(k, _)| k.sweep_cmp(key) != Ordering::Greater);
        let idx = (lo..hi).find(|&i| self.entries[i].1 == seg)?;
        let below = idx.checked_sub(1).map(|i| self.entries[i].1);
        let above = self.entries.get(idx + 1).map(|&(_, s)| s);
        self.entries.remove(idx);
        Some(RemovedEntry { below, above })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn insert_orders_by_y_then_x() {
        let mut status = SweepStatus::default();
        assert_eq!(status.insert(p(0.0, 1.0), SegIdx(0)), 0);
        assert_eq!(status.insert(p(0.0, -1.0), SegIdx(1)), 0);
        assert_eq!(status.insert(p(5.0, 1.0), SegIdx(2)), 2);
        assert_eq!(status.insert(p(0.0, 0.0), SegIdx(3)), 1);
        let order: Vec<_> = (0..status.len()).map(|i| status.seg(i)).collect();
        assert_eq!(order, vec![SegIdx(1), SegIdx(3), SegIdx(0), SegIdx(2)]);
    }

    #[test]
    fn tied_keys_keep_insertion_order() {
        let mut status = SweepStatus::default();
        status.insert(p(1.0, 1.0), SegIdx(0));
        assert_eq!(status.insert(p(1.0 + 1e-10, 1.0 - 1e-10), SegIdx(1)), 1);
        assert_eq!(status.insert(p(1.0, 1.0), SegIdx(2)), 2);
        let order: Vec<_> = (0..status.len()).map(|i| status.seg(i)).collect();
        assert_eq!(order, vec![SegIdx(0), SegIdx(1), SegIdx(2)]);
    }

    #[test]
    fn remove_picks_the_matching_segment_among_ties() {
        let mut status = SweepStatus::default();
        status.insert(p(0.0, -1.0), SegIdx(10));
        status.insert(p(1.0, 1.0), SegIdx(0));
        status.insert(p(1.0, 1.0), SegIdx(1));
        status.insert(p(1.0, 1.0), SegIdx(2));
        status.insert(p(0.0, 2.0), SegIdx(11));

        let removed = status.remove(&p(1.0, 1.0), SegIdx(1)).unwrap();
        assert_eq!(removed.below, Some(SegIdx(0)));
        assert_eq!(removed.above, Some(SegIdx(2)));
        assert_eq!(status.len(), 4);
    }

    #[test]
    fn remove_reports_missing_neighbors() {
        let mut status = SweepStatus::default();
        status.insert(p(0.0, 0.0), SegIdx(0));
        let removed = status.remove(&p(0.0, 0.0), SegIdx(0)).unwrap();
        assert_eq!(
            removed,
            RemovedEntry {
                below: None,
                above: None
            }
        );
        assert!(status.is_empty());
    }

    #[test]
    fn remove_of_an_absent_entry_is_a_no_op() {
        let mut status = SweepStatus::default();
        status.insert(p(0.0, 0.0), SegIdx(0));
        assert!(status.remove(&p(0.0, 0.0), SegIdx(1)).is_none());
        assert!(status.remove(&p(3.0, 3.0), SegIdx(0)).is_none());
        assert_eq!(status.len(), 1);
    }
}
