//! Placement of tasks into free windows.
//!
//! [`WindowSet`] owns the free-window list for one generation run and
//! is mutated after every successful placement, so later placements
//! always see the up-to-date state. [`ProbeCursor`] implements the
//! alternative stepped-probe policy that checks candidate slots
//! against an occupied-interval list instead of carved windows.

use super::intervals::Interval;

/// Probe step for the cursor placement policy, in minutes.
pub const PROBE_QUANTUM_MIN: u16 = 5;

/// Owned list of free windows, kept sorted by start time.
#[derive(Debug, Clone)]
pub struct WindowSet {
    windows: Vec<Interval>,
    min_window: u16,
}

impl WindowSet {
    /// Wraps a sorted free-window list produced by
    /// [`free_windows`](super::intervals::free_windows).
    pub fn new(windows: Vec<Interval>, min_window: u16) -> Self {
        Self { windows, min_window }
    }

    /// Current free windows, sorted by start.
    pub fn as_slice(&self) -> &[Interval] {
        &self.windows
    }

    /// Places a task at its requested start time.
    ///
    /// Scans windows in order for the first one fully containing
    /// `[start, start + duration)`, cuts the placement out and returns
    /// it. Returns `None` when no window contains the requested slot;
    /// no alternate time is ever tried.
    pub fn place_fixed(&mut self, start: u16, duration: u16) -> Option<Interval> {
        let slot = Interval::new(start, start.checked_add(duration)?);
        let idx = self.windows.iter().position(|w| w.contains(slot))?;
        self.cut(idx, slot);
        Some(slot)
    }

    /// Places a task into the earliest window long enough to hold it.
    ///
    /// The task starts at that window's start. Returns `None` when no
    /// window has sufficient length.
    pub fn place_first_fit(&mut self, duration: u16) -> Option<Interval> {
        let idx = self.windows.iter().position(|w| w.len() >= duration)?;
        let start = self.windows[idx].start;
        let slot = Interval::new(start, start + duration);
        self.cut(idx, slot);
        Some(slot)
    }

    /// Replaces window `idx` with the remainders left of and right of
    /// `cut`, each kept only if it passes the minimum-window filter.
    /// Insertion at the vacated index preserves sort order.
    fn cut(&mut self, idx: usize, cut: Interval) {
        let w = self.windows.remove(idx);

        let mut parts = [None, None];
        if w.start < cut.start {
            parts[0] = Some(Interval::new(w.start, cut.start));
        }
        if cut.end < w.end {
            parts[1] = Some(Interval::new(cut.end, w.end));
        }

        for part in parts.into_iter().rev().flatten() {
            if part.len() >= self.min_window {
                self.windows.insert(idx, part);
            }
        }
    }
}

/// Moving-cursor placer probing slots in fixed quantum steps.
#[derive(Debug)]
pub struct ProbeCursor {
    avail: Interval,
    cursor: u16,
}

impl ProbeCursor {
    /// Creates a cursor positioned at the availability start.
    pub fn new(avail: Interval) -> Self {
        Self {
            avail,
            cursor: avail.start,
        }
    }

    /// Checks whether a fixed slot is feasible. Fixed placements never
    /// move the cursor.
    pub fn check_fixed(&self, start: u16, duration: u16, occupied: &[Interval]) -> Option<Interval> {
        let end = start.checked_add(duration)?;
        let slot = Interval::new(start, end);
        slot_is_free(slot, self.avail, occupied).then_some(slot)
    }

    /// Probes candidate starts from the cursor in
    /// [`PROBE_QUANTUM_MIN`] steps up to `avail.end - duration`.
    ///
    /// On success the cursor advances to the placed slot's end; on
    /// failure it stays where it was for the next task.
    pub fn place(&mut self, duration: u16, occupied: &[Interval]) -> Option<Interval> {
        if duration == 0 || duration > self.avail.len() {
            return None;
        }

        let last_start = self.avail.end - duration;
        let mut probe = self.cursor.max(self.avail.start);
        while probe <= last_start {
            let slot = Interval::new(probe, probe + duration);
            if slot_is_free(slot, self.avail, occupied) {
                self.cursor = slot.end;
                return Some(slot);
            }
            probe = probe.checked_add(PROBE_QUANTUM_MIN)?;
        }
        None
    }
}

/// A slot is free iff it lies within the availability window and
/// intersects no occupied interval. The occupied list is sorted by
/// start but deliberately unmerged.
fn slot_is_free(slot: Interval, avail: Interval, occupied: &[Interval]) -> bool {
    if !avail.contains(slot) {
        return false;
    }
    // Sorted by start, so occupation past the slot end cannot intersect.
    occupied
        .iter()
        .take_while(|iv| iv.start < slot.end)
        .all(|iv| !iv.intersects(slot))
}

/// Inserts an interval into a start-sorted list, keeping it sorted.
pub(super) fn insert_sorted(occupied: &mut Vec<Interval>, slot: Interval) {
    let idx = occupied.partition_point(|iv| iv.start <= slot.start);
    occupied.insert(idx, slot);
}
