//! The event queue driving the sweep.

use std::collections::VecDeque;

use crate::segments::SegIdx;

/// Whether an event marks a segment entering or leaving the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    /// The sweep line has reached the segment's `beg.x`.
    Start,
    /// The sweep line has reached the segment's `end.x`.
    End,
}

/// A scheduled change in the set of segments crossing the sweep line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    /// What happens to the segment.
    pub kind: EventKind,
    /// Which segment it happens to.
    pub seg: SegIdx,
}

/// The pending events, ordered by the x position at which they fire.
///
/// This is a thin ordered multimap: x keys are compared exactly (no
/// tolerance), many events may share one key, and events with equal keys fire
/// in insertion order. Besides popping the minimum, the queue supports
/// removing one specific `(x, End, seg)` entry, which the split operator uses
/// to retire a stale end event.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    entries: VecDeque<(f64, Event)>,
}

impl EventQueue {
    /// Schedule `ev` to fire at `x`.
    ///
    /// Inserts after any events already scheduled at exactly `x`.
    pub fn push(&mut self, x: f64, ev: Event) {
        let idx = self.entries.partition_point(|&(ex, _)| ex <= x);
        self.entries.insert(idx, (x, ev));
    }

    /// Remove and return the earliest event, if any.
    pub fn pop(&mut self) -> Option<Event> {
        self.entries.pop_front().map(|(_, ev)| ev)
    }

    /// Remove the end event for `seg` scheduled at exactly `x`.
    ///
    /// Returns false if no such event exists, in which case the queue is left
    /// untouched.
    pub fn remove_end(&mut self, x: f64, seg: SegIdx) -> bool {
        let lo = self.entries.partition_point(|&(ex, _)| ex < x);
        let hi = self.entries.partition_point(|&(ex, _)| ex <= x);
        for i in lo..hi {
            let ev = self.entries[i].1;
            if ev.kind == EventKind::End && ev.seg == seg {
                let _ = self.entries.remove(i);
                return true;
            }
        }
        false
    }

    /// Is the queue empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of pending events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
