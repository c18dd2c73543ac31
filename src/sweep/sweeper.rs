//! The sweep driver and the segment-split operator.

use crate::geom::{Point, Segment};
use crate::segments::{SegIdx, Segments};

use super::events::{Event, EventKind, EventQueue};
use super::status::SweepStatus;

/// A recoverable bookkeeping failure noticed during the sweep.
///
/// Both cases mean "an entry that should have been there was not found",
/// which can happen when the tolerance-based orderings disagree near their
/// boundaries. The sweep logs the condition and continues; already-computed
/// output is unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// While splitting, the segment's pending end event was not found in the
    /// queue. The stale event stays behind and will eventually fire as an
    /// ordinary end event against the truncated segment.
    MissingEndEvent(SegIdx),
    /// An end event fired for a segment with no entry in the status
    /// structure. The neighbor probe for that event is skipped.
    MissingStatusEntry(SegIdx),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingEndEvent(seg) => {
                write!(f, "cannot find the pending end event for segment {seg:?}")
            }
            Diagnostic::MissingStatusEntry(seg) => {
                write!(f, "cannot find segment {seg:?} in the sweep status")
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

/// The output of a sweep: the split segments, the crossing points, and any
/// diagnostics raised along the way.
#[derive(Clone, Debug)]
pub struct Arrangement {
    /// The final segment arena. Indices `0..n` are the `n` inputs, possibly
    /// truncated; indices `n..` are the pieces split off from them.
    pub segments: Segments,
    /// The crossing points, in discovery order.
    ///
    /// When three or more segments meet near one location this can contain
    /// duplicates, and successive nearby splits can produce near-duplicates
    /// closer than [`POINT_EPS`](crate::POINT_EPS); callers that need a
    /// deduplicated set must cluster the points themselves.
    pub intersections: Vec<Point>,
    /// Recoverable conditions noticed during the sweep, in the order they
    /// were noticed. Empty on well-behaved input.
    pub diagnostics: Vec<Diagnostic>,
}

/// Computes all pairwise interior crossings among a set of segments and
/// splits every segment at each crossing it participates in.
///
/// The sweep line moves in increasing `x`. There is no state beyond the three
/// structures below: the loop pops the earliest event until the queue is
/// drained, and every split retires exactly as many end events as it adds, so
/// termination is guaranteed.
///
/// ```
/// use segsweep::Sweeper;
///
/// let result = Sweeper::new([
///     ((0.0, 0.0), (2.0, 2.0)),
///     ((0.0, 2.0), (2.0, 0.0)),
/// ])
/// .run();
/// assert_eq!(result.intersections.len(), 1);
/// assert_eq!(result.segments.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Sweeper {
    segments: Segments,
    queue: EventQueue,
    status: SweepStatus,
    intersections: Vec<Point>,
    diagnostics: Vec<Diagnostic>,
}

impl Sweeper {
    /// Set up a sweep over the given segments.
    ///
    /// Each input is normalized (endpoints swapped so that `beg.x <= end.x`)
    /// and scheduled with one start and one end event. No validation happens
    /// here: zero-length or non-finite segments are taken as they come.
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let mut segments = Segments::default();
        let mut queue = EventQueue::default();
        for seg in input {
            let idx = segments.insert(seg.into());
            let seg = &segments[idx];
            queue.push(
                seg.beg.x,
                Event {
                    kind: EventKind::Start,
                    seg: idx,
                },
            );
            queue.push(
                seg.end.x,
                Event {
                    kind: EventKind::End,
                    seg: idx,
                },
            );
        }
        Sweeper {
            segments,
            queue,
            status: SweepStatus::default(),
            intersections: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the sweep to completion and return the arrangement.
    pub fn run(mut self) -> Arrangement {
        while let Some(ev) = self.queue.pop() {
            match ev.kind {
                EventKind::Start => self.handle_start(ev.seg),
                EventKind::End => self.handle_end(ev.seg),
            }
        }
        debug_assert!(self.status.is_empty() || !self.diagnostics.is_empty());
        Arrangement {
            segments: self.segments,
            intersections: self.intersections,
            diagnostics: self.diagnostics,
        }
    }

    /// A segment starts crossing the sweep line: insert it into the status
    /// structure and probe its neighbors above and below for crossings.
    fn handle_start(&mut self, s: SegIdx) {
        let key = self.segments[s].beg;
        let ins = self.status.insert(key, s);
        let ins_y = self.status.key(ins).y;

        // Walk downward, then upward, from the inserted entry. Neighbors
        // whose segment starts at the same point (within tolerance) are never
        // tested, so segments fanning out of one point don't report their
        // shared start as a crossing. A direction's walk stops after the
        // first neighbor whose key y lies strictly beyond the inserted key's:
        // the status ordering puts any farther candidate behind the line
        // we've already probed. Note that splitting does not touch the status
        // structure, so positions stay valid for the rest of the walk even
        // when a crossing is found.
        for upward in [false, true] {
            let mut i = ins;
            loop {
                i = if upward {
                    i + 1
                } else {
                    match i.checked_sub(1) {
                        Some(prev) => prev,
                        None => break,
                    }
                };
                if i >= self.status.len() {
                    break;
                }
                let nb = self.status.seg(i);
                if !self.segments[s].beg.approx_eq(&self.segments[nb].beg) {
                    if let Some(at) = self.segments[s].intersection(&self.segments[nb]) {
                        self.intersections.push(at);
                        self.split_at(s, nb, at);
                    }
                }
                // The stop test compares key y exactly (no tolerance), and
                // runs after the probe: the first strictly-beyond neighbor is
                // still tested before the walk ends.
                let dy = self.status.key(i).y - ins_y;
                if (upward && dy > 0.0) || (!upward && dy < 0.0) {
                    break;
                }
            }
        }
    }

    /// A segment stops crossing the sweep line: remove it from the status
    /// structure, then probe the pair of entries that just became adjacent.
    fn handle_end(&mut self, s: SegIdx) {
        let key = self.segments[s].beg;
        let Some(removed) = self.status.remove(&key, s) else {
            self.diagnostics.push(Diagnostic::MissingStatusEntry(s));
            return;
        };
        let (Some(below), Some(above)) = (removed.below, removed.above) else {
            return;
        };
        if self.segments[below].beg.approx_eq(&self.segments[above].beg) {
            return;
        }
        if let Some(at) = self.segments[below].intersection(&self.segments[above]) {
            self.intersections.push(at);
            self.split_at(below, above, at);
        }
    }

    /// Split segments `a` and `b` at their crossing point `at`.
    ///
    /// `at` must lie strictly inside both segments, which the crossing
    /// predicate guarantees. Both stale end events are retired first, keyed
    /// by each segment's pre-truncation `end.x`; only then is either segment
    /// touched. Per segment, the continuation `at -> old end` is appended
    /// with fresh start and end events, the original is truncated to end at
    /// `at`, and its shortened end event is scheduled. The status structure
    /// is deliberately left alone: the two entries keep their old keys until
    /// their (new) end events remove them.
    fn split_at(&mut self, a: SegIdx, b: SegIdx, at: Point) {
        for s in [a, b] {
            if !self.queue.remove_end(self.segments[s].end.x, s) {
                self.diagnostics.push(Diagnostic::MissingEndEvent(s));
            }
        }
        for s in [a, b] {
            let old_end = self.segments[s].end;
            let tail = self.segments.insert(Segment::new(at, old_end));
            self.queue.push(
                at.x,
                Event {
                    kind: EventKind::Start,
                    seg: tail,
                },
            );
            self.queue.push(
                old_end.x,
                Event {
                    kind: EventKind::End,
                    seg: tail,
                },
            );
            self.segments.truncate(s, at);
            self.queue.push(
                at.x,
                Event {
                    kind: EventKind::End,
                    seg: s,
                },
            );
        }
    }
}
