//! Derived trajectory histories.
//!
//! Velocities and positions are pure functions of the heading/speed
//! histories and the start position:
//!
//! ```text
//! velocity[i] = speed[i] · (cos heading[i], sin heading[i])
//! position[0] = start
//! position[i] = position[i-1] + velocity[i]
//! ```
//!
//! [`HistoryCache`] evaluates the same recurrence incrementally.  Both paths
//! accumulate strictly left to right with the same operations, so a cached
//! history is bit-identical to one derived from scratch.

use rat_core::Point;

#[inline]
pub(crate) fn velocity(heading: f64, speed: f64) -> Point {
    Point::from_angle(heading) * speed
}

/// From-scratch velocities for a heading/speed history.
///
/// # Panics
///
/// Panics in debug builds if the slices differ in length.
pub fn derive_velocities(headings: &[f64], speeds: &[f64]) -> Vec<Point> {
    debug_assert_eq!(headings.len(), speeds.len());
    headings.iter().zip(speeds).map(|(&h, &s)| velocity(h, s)).collect()
}

/// From-scratch positions.  `velocities[0]` is ignored: the first position is
/// the start position.
pub fn derive_positions(start: Point, velocities: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(velocities.len());
    let mut pos = start;
    for (i, &v) in velocities.iter().enumerate() {
        if i > 0 {
            pos = pos + v;
        }
        out.push(pos);
    }
    out
}

// ── HistoryCache ──────────────────────────────────────────────────────────────

/// Append-only cache of a derived per-step quantity.
///
/// Entries are never rewritten; the cache grows to match the canonical
/// history on demand and is cleared only when the agent resets.
#[derive(Clone, Debug)]
pub struct HistoryCache<T> {
    values: Vec<T>,
}

impl<T> Default for HistoryCache<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: Copy> HistoryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn last(&self) -> Option<T> {
        self.values.last().copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Grow to `len` entries, computing each missing entry `i` as
    /// `next(i, previous_entry)`.  Does nothing if already long enough.
    pub fn extend_to(&mut self, len: usize, mut next: impl FnMut(usize, Option<T>) -> T) -> &[T] {
        self.values.reserve(len.saturating_sub(self.values.len()));
        while self.values.len() < len {
            let i = self.values.len();
            let prev = self.values.last().copied();
            self.values.push(next(i, prev));
        }
        &self.values
    }
}
