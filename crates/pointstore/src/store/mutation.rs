//! Mutation operations for the point store.
//!
//! ## Purpose
//!
//! This module implements every operation that changes the live sequence:
//! bulk replace, bulk add, single add, the removal variants, clearing, and
//! the explicit re-sort. Each operation restores the sort invariant before
//! returning, choosing the cheapest path that does so.
//!
//! ## Key concepts
//!
//! * **Prepend classification**: A sorted batch whose largest key does not
//!   exceed the current smallest key lands in the front slack with one
//!   block copy.
//! * **Append and merge**: Any other batch is appended, its suffix sorted
//!   if needed, and merged with the existing run only when the two ranges
//!   actually interleave. Total work stays O(n) instead of a full re-sort.
//! * **Lazy front removal**: Leading removals only advance the slack
//!   boundary; trailing removals truncate into back capacity.
//!
//! ## Invariants
//!
//! * On return from every public operation the live range is
//!   non-decreasing under `sort_key()`.
//! * Removals run the auto-squeeze check when the policy is enabled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::point::{less_by_sort_key, sort_key_order, PlotPoint};
use crate::store::PointStore;

// ============================================================================
// Bulk Mutation
// ============================================================================

impl<P: PlotPoint> PointStore<P> {
    /// Replace the current contents with `points`.
    ///
    /// Sorts by sort key unless `already_sorted` asserts the slice is in
    /// ascending order. The assertion is the caller's responsibility; a
    /// wrong assertion silently breaks every later binary search.
    pub fn replace_all(&mut self, points: &[P], already_sorted: bool) {
        self.data.clear();
        self.data.extend_from_slice(points);
        self.front_slack = 0;
        self.growth_iteration = 0;
        if !already_sorted {
            self.resort();
        }
    }

    /// Replace the current contents with another store's live range.
    pub fn replace_with_store(&mut self, other: &PointStore<P>) {
        self.clear();
        self.add_store(other);
    }

    /// Add `points` to the current data.
    ///
    /// An empty slice is a no-op. A sorted batch that entirely precedes
    /// the current data is prepended into the front slack in O(1)
    /// amortized; anything else is appended, sorted if necessary, and
    /// merged with the existing run only when the key ranges interleave.
    pub fn add_range(&mut self, points: &[P], already_sorted: bool) {
        if points.is_empty() {
            return;
        }
        if self.is_empty() {
            self.replace_all(points, already_sorted);
            return;
        }

        let n = points.len();
        if already_sorted && !less_by_sort_key(&self.as_slice()[0], &points[n - 1]) {
            // Prepend: all new keys are <= the current minimum.
            if self.front_slack < n {
                self.grow_front_slack(n);
            }
            self.front_slack -= n;
            let front = self.front_slack;
            self.data[front..front + n].copy_from_slice(points);
        } else {
            self.data.extend_from_slice(points);
            let mid = self.data.len() - n;
            if !already_sorted {
                self.data[mid..].sort_unstable_by(sort_key_order);
            }
            if !less_by_sort_key(&self.data[mid - 1], &self.data[mid]) {
                // Appended keys reach below the existing maximum; merge
                // the two adjacent sorted runs.
                self.merge_appended_run(mid);
            }
        }
    }

    /// Add another store's live range to the current data.
    ///
    /// Same classification as [`add_range`](Self::add_range) with the
    /// source always treated as sorted, which its own invariant
    /// guarantees.
    pub fn add_store(&mut self, other: &PointStore<P>) {
        if other.is_empty() {
            return;
        }

        let src = other.as_slice();
        let n = src.len();
        if !self.is_empty() && !less_by_sort_key(&self.as_slice()[0], &src[n - 1]) {
            if self.front_slack < n {
                self.grow_front_slack(n);
            }
            self.front_slack -= n;
            let front = self.front_slack;
            self.data[front..front + n].copy_from_slice(src);
        } else {
            let was_empty = self.is_empty();
            self.data.extend_from_slice(src);
            let mid = self.data.len() - n;
            if !was_empty && !less_by_sort_key(&self.data[mid - 1], &self.data[mid]) {
                self.merge_appended_run(mid);
            }
        }
    }

    /// Add a single point.
    ///
    /// Fast paths ordered by expected frequency: O(1) append for a key at
    /// or past the current maximum, O(1) amortized prepend into front
    /// slack for a key below the current minimum, and a binary-searched
    /// splice for the rare out-of-order insert.
    pub fn add_one(&mut self, point: P) {
        if self.is_empty() || !less_by_sort_key(&point, &self.as_slice()[self.size() - 1]) {
            self.data.push(point);
        } else if less_by_sort_key(&point, &self.as_slice()[0]) {
            if self.front_slack < 1 {
                self.grow_front_slack(1);
            }
            self.front_slack -= 1;
            self.data[self.front_slack] = point;
        } else {
            let index = self.lower_bound_by_key(point.sort_key());
            self.data.insert(self.front_slack + index, point);
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove all points with sort keys smaller than `sort_key`.
    ///
    /// Nothing is physically erased; the removed prefix is folded into the
    /// front slack, turning the trim into O(1) bookkeeping. Oversized
    /// slack is left to the auto-squeeze check.
    pub fn remove_before(&mut self, sort_key: P::Coord) {
        let cut = self.lower_bound_by_key(sort_key);
        self.front_slack += cut;
        if self.auto_squeeze {
            self.auto_squeeze_check();
        }
    }

    /// Remove all points with sort keys greater than or equal to
    /// `sort_key`.
    ///
    /// The trailing sub-range is erased into the unused back capacity.
    pub fn remove_after(&mut self, sort_key: P::Coord) {
        let cut = self.lower_bound_by_key(sort_key);
        let front = self.front_slack;
        self.data.truncate(front + cut);
        if self.auto_squeeze {
            self.auto_squeeze_check();
        }
    }

    /// Remove all points with sort keys between `from_key` and `to_key`.
    ///
    /// Does nothing unless `from_key < to_key`. To remove a single point
    /// with a precisely known key, use [`remove_key`](Self::remove_key);
    /// for a key only known approximately, call this with a small
    /// fuzziness interval around the suspected position.
    pub fn remove_range(&mut self, from_key: P::Coord, to_key: P::Coord) {
        if !(from_key < to_key) || self.is_empty() {
            return;
        }

        let begin = self.lower_bound_by_key(from_key);
        let probe = P::from_sort_key(to_key);
        let end = begin
            + self.as_slice()[begin..].partition_point(|p| !less_by_sort_key(&probe, p));
        let front = self.front_slack;
        self.data.drain(front + begin..front + end);
        if self.auto_squeeze {
            self.auto_squeeze_check();
        }
    }

    /// Remove the single point whose sort key equals `sort_key` exactly.
    ///
    /// A match at the front boundary folds into the slack in O(1); an
    /// interior match is physically erased. A near-miss removes nothing.
    pub fn remove_key(&mut self, sort_key: P::Coord) {
        let index = self.lower_bound_by_key(sort_key);
        if index < self.size() && self.as_slice()[index].sort_key() == sort_key {
            if index == 0 {
                self.front_slack += 1;
            } else {
                self.data.remove(self.front_slack + index);
            }
        }
        if self.auto_squeeze {
            self.auto_squeeze_check();
        }
    }

    /// Remove all points and forget the growth schedule.
    pub fn clear(&mut self) {
        self.data.clear();
        self.front_slack = 0;
        self.growth_iteration = 0;
    }

    // ========================================================================
    // Re-sort
    // ========================================================================

    /// Sort the live range by sort key.
    ///
    /// The incremental mutation paths never need this; it exists as the
    /// remedy after direct sort-key edits, and is what the `RawEdit`
    /// guard runs on drop.
    pub fn resort(&mut self) {
        self.live_mut().sort_unstable_by(sort_key_order);
    }

    // ========================================================================
    // Merge Helper
    // ========================================================================

    /// Stable in-place merge of the two adjacent sorted runs split at
    /// absolute buffer index `mid`.
    ///
    /// Copies the appended right run aside and merges backward, so the
    /// scratch allocation is proportional to the batch being added rather
    /// than the whole store.
    fn merge_appended_run(&mut self, mid: usize) {
        debug_assert!(
            mid > self.front_slack && mid < self.data.len(),
            "merge split must fall inside the live range"
        );

        let right: Vec<P> = self.data[mid..].to_vec();
        let mut write = self.data.len();
        let mut left = mid;
        let mut r = right.len();
        while r > 0 {
            // On equal keys take from the right run first (it lands at the
            // higher position), which keeps the merge stable.
            if left > self.front_slack && less_by_sort_key(&right[r - 1], &self.data[left - 1]) {
                let taken = self.data[left - 1];
                self.data[write - 1] = taken;
                left -= 1;
            } else {
                self.data[write - 1] = right[r - 1];
                r -= 1;
            }
            write -= 1;
        }
    }
}
