//! Interval algebra over minutes of the day.
//!
//! Busy intervals are merged into a minimal sorted list, then
//! subtracted from the availability window to produce the free windows
//! the placers consume. Everything here is half-open: an interval
//! `[start, end)` occupies `start` but not `end`.

use crate::time::TimeOfDay;

/// Windows shorter than this many minutes are unusable and discarded.
pub const MIN_WINDOW_MIN: u16 = 10;

/// Half-open interval in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u16,
    pub end: u16,
}

impl Interval {
    /// Creates an interval from its bounds. Callers are expected to
    /// uphold `start < end`; validation happens at the engine boundary.
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Creates an interval from a pair of wall-clock times.
    pub fn from_times(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self::new(start.minutes(), end.minutes())
    }

    /// Length of the interval in minutes.
    pub const fn len(self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the interval covers no time at all.
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Whether `other` lies entirely within this interval.
    pub const fn contains(self, other: Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two half-open intervals share any minute.
    pub const fn intersects(self, other: Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Merges a list of intervals into the minimal sorted, non-overlapping
/// equivalent.
///
/// Intervals are sorted by start; an interval whose start does not
/// exceed the previous merged end is folded in, extending the end to
/// the maximum of the two. Merging an already-merged list returns it
/// unchanged.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(prev) if iv.start <= prev.end => prev.end = prev.end.max(iv.end),
            _ => merged.push(iv),
        }
    }
    merged
}

/// Computes the free windows of an availability span.
///
/// Each merged busy interval is subtracted from the current window set:
/// a window untouched by the busy interval is kept whole, otherwise it
/// is replaced by its left and/or right remainders. Windows shorter
/// than `min_window` are dropped from the result.
pub fn free_windows(avail: Interval, busy: &[Interval], min_window: u16) -> Vec<Interval> {
    let merged = merge_intervals(busy.to_vec());

    let mut windows = vec![avail];
    for b in merged {
        let mut next = Vec::with_capacity(windows.len() + 1);
        for w in windows {
            if b.end <= w.start || b.start >= w.end {
                next.push(w);
                continue;
            }
            if w.start < b.start {
                next.push(Interval::new(w.start, b.start));
            }
            if b.end < w.end {
                next.push(Interval::new(b.end, w.end));
            }
        }
        windows = next;
    }

    windows.retain(|w| w.len() >= min_window);
    windows
}
