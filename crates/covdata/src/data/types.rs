//! Line and Arc Types
//!
//! Executed lines are plain line numbers. Arcs are ordered
//! `(from, to)` pairs of line numbers and cannot be confused with a
//! line number at the type level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A source line number
pub type LineNo = u32;

/// Set of executed line numbers for one file
pub type LineSet = BTreeSet<LineNo>;

/// Set of observed arcs for one file
pub type ArcSet = BTreeSet<ArcPair>;

/// An observed control-flow transition between two lines
///
/// Ordering is lexicographic on `(from, to)`, which is the order arcs are
/// written to disk. Serializes as a two-element array `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArcPair(LineNo, LineNo);

impl ArcPair {
    /// Create an arc from `from` to `to`
    #[inline]
    #[must_use]
    pub const fn new(from: LineNo, to: LineNo) -> Self {
        Self(from, to)
    }

    /// Line the transition leaves
    #[inline]
    #[must_use]
    pub const fn from_line(self) -> LineNo {
        self.0
    }

    /// Line the transition enters
    #[inline]
    #[must_use]
    pub const fn to_line(self) -> LineNo {
        self.1
    }
}

impl From<(LineNo, LineNo)> for ArcPair {
    fn from((from, to): (LineNo, LineNo)) -> Self {
        Self(from, to)
    }
}

impl From<ArcPair> for (LineNo, LineNo) {
    fn from(arc: ArcPair) -> Self {
        (arc.0, arc.1)
    }
}
