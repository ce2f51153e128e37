//! Layer 3: Series
//!
//! ## Purpose
//!
//! This layer provides [`Series1D`], the thin per-series facade consumed
//! by rendering and hit-testing code. It forwards by-index accessors and
//! key searches to the owned point store, translating the store's
//! `Option`-based sentinels into the defaults such callers expect.
//!
//! ## Design notes
//!
//! * **Resilient by contract**: Out-of-bounds index access is a caller
//!   error, reported as a diagnostic and answered with a zero or default
//!   value. Rendering code must survive transient index mismatches during
//!   UI updates, so the facade never panics on an index.
//! * **Thin**: The facade holds no state beyond the store and a name for
//!   diagnostics; everything of substance lives in the store.
//!
//! ## Non-goals
//!
//! * No pixel-space mapping, hit testing, or selection bookkeeping; those
//!   consumers sit on top of this facade.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Zero;
use tracing::warn;

// Internal dependencies
use crate::primitives::point::PlotPoint;
use crate::primitives::range::CoordRange;
use crate::store::PointStore;

// ============================================================================
// Series Facade
// ============================================================================

/// A named series backed by a [`PointStore`].
///
/// By-index accessors answer out-of-range indices with a logged
/// diagnostic and a default value instead of failing.
#[derive(Debug, Clone)]
pub struct Series1D<P: PlotPoint> {
    /// Series name, used in diagnostics.
    name: String,

    /// The backing sorted store.
    store: PointStore<P>,
}

impl<P: PlotPoint> Series1D<P> {
    /// Create an empty series with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: PointStore::new(),
        }
    }

    /// Series name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared access to the backing store.
    #[inline]
    pub fn data(&self) -> &PointStore<P> {
        &self.store
    }

    /// Mutable access to the backing store.
    #[inline]
    pub fn data_mut(&mut self) -> &mut PointStore<P> {
        &mut self.store
    }

    // ========================================================================
    // By-Index Accessors
    // ========================================================================

    /// Number of points in the series.
    #[inline]
    pub fn data_count(&self) -> usize {
        self.store.size()
    }

    /// Whether this series is ordered by its display key.
    #[inline]
    pub fn sort_key_is_main_key(&self) -> bool {
        P::SORT_KEY_IS_MAIN_KEY
    }

    /// Ordering key of the point at `index`, or zero if out of bounds.
    pub fn sort_key_at(&self, index: usize) -> P::Coord {
        match self.store.point_at(index) {
            Some(p) => p.sort_key(),
            None => self.out_of_bounds(index),
        }
    }

    /// Display key of the point at `index`, or zero if out of bounds.
    pub fn main_key_at(&self, index: usize) -> P::Coord {
        match self.store.point_at(index) {
            Some(p) => p.main_key(),
            None => self.out_of_bounds(index),
        }
    }

    /// Display value of the point at `index`, or zero if out of bounds.
    pub fn main_value_at(&self, index: usize) -> P::Coord {
        match self.store.point_at(index) {
            Some(p) => p.main_value(),
            None => self.out_of_bounds(index),
        }
    }

    /// Value span of the point at `index`, or a zero range if out of
    /// bounds.
    pub fn value_range_at(&self, index: usize) -> CoordRange<P::Coord> {
        match self.store.point_at(index) {
            Some(p) => p.value_range(),
            None => {
                let zero = self.out_of_bounds(index);
                CoordRange::new(zero, zero)
            }
        }
    }

    // ========================================================================
    // Key Searches
    // ========================================================================

    /// Index of the point opening a key interval; see
    /// `PointStore::find_begin`.
    #[inline]
    pub fn find_begin_index(&self, sort_key: P::Coord, expanded: bool) -> usize {
        self.store.find_begin(sort_key, expanded)
    }

    /// Index one past the point closing a key interval; see
    /// `PointStore::find_end`.
    #[inline]
    pub fn find_end_index(&self, sort_key: P::Coord, expanded: bool) -> usize {
        self.store.find_end(sort_key, expanded)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Report an out-of-bounds index access and produce the zero default.
    fn out_of_bounds(&self, index: usize) -> P::Coord {
        warn!(
            series = %self.name,
            index,
            size = self.store.size(),
            "series index access out of bounds"
        );
        <P::Coord>::zero()
    }
}

impl<P: PlotPoint> Default for Series1D<P> {
    fn default() -> Self {
        Self::new("")
    }
}
