//! Range and search queries over the point store.
//!
//! ## Purpose
//!
//! This module answers the read-side questions rendering and selection
//! code asks of a series: where a key falls in the live range, which index
//! window covers a key interval, and what coordinate ranges the data
//! spans.
//!
//! ## Key concepts
//!
//! * **Probe searches**: Binary searches compare against a probe point
//!   built with `from_sort_key`, so only the ordering key participates.
//! * **Expanded bounds**: Line drawing needs the point just outside the
//!   visible window to clip edges correctly; the `expanded` flag widens a
//!   bound outward by one element for that purpose.
//! * **Sorted-by-main-key fast paths**: When the ordering key is the
//!   display key, key ranges come from scanning inward to the nearest
//!   valid point, and value range queries narrow their scan window by
//!   binary search first. Parametric data falls back to full scans.
//!
//! ## Invariants
//!
//! * Queries never expose slack slots; all returned indices are live
//!   indices in `[0, size()]`, with `size()` as the end sentinel.
//! * Points with NaN in the relevant coordinate never contribute to a
//!   range result.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::{less_by_sort_key, PlotPoint};
use crate::primitives::range::{CoordRange, SignDomain};
use crate::primitives::span::DataSpan;
use crate::store::PointStore;

// ============================================================================
// Binary Search
// ============================================================================

impl<P: PlotPoint> PointStore<P> {
    /// Index of the first live point whose sort key is not less than
    /// `sort_key`, or `size()` if there is none.
    pub fn lower_bound_by_key(&self, sort_key: P::Coord) -> usize {
        let probe = P::from_sort_key(sort_key);
        self.as_slice()
            .partition_point(|p| less_by_sort_key(p, &probe))
    }

    /// Index of the first live point whose sort key is greater than
    /// `sort_key`, or `size()` if there is none.
    pub fn upper_bound_by_key(&self, sort_key: P::Coord) -> usize {
        let probe = P::from_sort_key(sort_key);
        self.as_slice()
            .partition_point(|p| !less_by_sort_key(&probe, p))
    }

    /// Index of the point opening a key interval at `sort_key`.
    ///
    /// Without expansion this is the lower bound. With `expanded` the
    /// bound widens one element outward when possible, so a consumer
    /// iterating `[find_begin, find_end)` also sees the point just below
    /// the interval. An empty store returns the end sentinel.
    pub fn find_begin(&self, sort_key: P::Coord, expanded: bool) -> usize {
        if self.is_empty() {
            return self.size();
        }

        let mut index = self.lower_bound_by_key(sort_key);
        if expanded && index != 0 {
            index -= 1;
        }
        index
    }

    /// Index one past the point closing a key interval at `sort_key`.
    ///
    /// Without expansion this is the upper bound. With `expanded` the
    /// bound widens one element outward when possible. An empty store
    /// returns the end sentinel.
    pub fn find_end(&self, sort_key: P::Coord, expanded: bool) -> usize {
        if self.is_empty() {
            return self.size();
        }

        let mut index = self.upper_bound_by_key(sort_key);
        if expanded && index != self.size() {
            index += 1;
        }
        index
    }

    // ========================================================================
    // Coordinate Ranges
    // ========================================================================

    /// The range spanned by the main-key coordinate of all points with a
    /// non-NaN main value, optionally restricted to one sign domain.
    ///
    /// Returns `None` when no point qualifies. When the ordering key is
    /// the display key and no sign restriction applies, the bounds come
    /// from scanning inward from each end to the nearest valid point
    /// instead of visiting every point.
    pub fn key_range(&self, sign_domain: SignDomain) -> Option<CoordRange<P::Coord>> {
        if self.is_empty() {
            return None;
        }

        let live = self.as_slice();
        let mut lower: Option<P::Coord> = None;
        let mut upper: Option<P::Coord> = None;

        if sign_domain == SignDomain::Both && P::SORT_KEY_IS_MAIN_KEY {
            // Sorted by main key: the extremes are the outermost points
            // with a valid value.
            for p in live.iter() {
                if !p.main_value().is_nan() {
                    lower = Some(p.main_key());
                    break;
                }
            }
            for p in live.iter().rev() {
                if !p.main_value().is_nan() {
                    upper = Some(p.main_key());
                    break;
                }
            }
        } else {
            for p in live.iter() {
                if p.main_value().is_nan() {
                    continue;
                }
                let key = p.main_key();
                if !sign_domain.accepts(key) {
                    continue;
                }
                if lower.map_or(true, |lo| key < lo) {
                    lower = Some(key);
                }
                if upper.map_or(true, |hi| key > hi) {
                    upper = Some(key);
                }
            }
        }

        match (lower, upper) {
            (Some(lower), Some(upper)) => Some(CoordRange::new(lower, upper)),
            _ => None,
        }
    }

    /// The range spanned by the value coordinates of the points,
    /// optionally restricted to a key window and a sign domain.
    ///
    /// Each point contributes its full `value_range()` span; NaN bounds
    /// reported by individual points are skipped, not propagated. Returns
    /// `None` when no bound qualifies. When the ordering key is the
    /// display key, a key window narrows the scan by binary search first.
    pub fn value_range(
        &self,
        sign_domain: SignDomain,
        in_key_range: Option<CoordRange<P::Coord>>,
    ) -> Option<CoordRange<P::Coord>> {
        if self.is_empty() {
            return None;
        }

        let mut begin = 0;
        let mut end = self.size();
        if let Some(window) = in_key_range {
            if P::SORT_KEY_IS_MAIN_KEY {
                begin = self.find_begin(window.lower, false);
                end = self.find_end(window.upper, false);
            }
        }

        let mut lower: Option<P::Coord> = None;
        let mut upper: Option<P::Coord> = None;
        for p in &self.as_slice()[begin..end] {
            if let Some(window) = in_key_range {
                if !window.contains(p.main_key()) {
                    continue;
                }
            }
            let current = p.value_range();
            if !current.lower.is_nan()
                && sign_domain.accepts(current.lower)
                && lower.map_or(true, |lo| current.lower < lo)
            {
                lower = Some(current.lower);
            }
            if !current.upper.is_nan()
                && sign_domain.accepts(current.upper)
                && upper.map_or(true, |hi| current.upper > hi)
            {
                upper = Some(current.upper);
            }
        }

        match (lower, upper) {
            (Some(lower), Some(upper)) => Some(CoordRange::new(lower, upper)),
            _ => None,
        }
    }

    // ========================================================================
    // Span Clamping
    // ========================================================================

    /// Clamp a caller-supplied span to lie within both this store's live
    /// index bounds and the given `window`, never expanding it.
    ///
    /// The `window` itself need not lie within the store's valid range.
    pub fn bound_span(&self, span: DataSpan, window: DataSpan) -> DataSpan {
        span.bounded(&window.bounded(&self.data_span()))
    }
}
