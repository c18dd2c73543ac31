//! The sweep-line implementation.
//!
//! The sweep line moves in increasing `x`. [`Sweeper`] owns the three pieces
//! of state: the segment arena, the event queue and the status structure.
//! Crossings are discovered by probing the status
//! neighbors of each segment as it enters, and the newly adjacent pair each
//! time a segment leaves; every discovered crossing splits both segments and
//! feeds fresh events back into the queue.

pub mod events;
pub mod status;
mod sweeper;

pub use events::{Event, EventKind, EventQueue};
pub use status::{RemovedEntry, SweepStatus};
pub use sweeper::{Arrangement, Diagnostic, Sweeper};
