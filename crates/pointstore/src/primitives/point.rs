//! Point abstraction and standard point types.
//!
//! ## Purpose
//!
//! This module defines the [`PlotPoint`] trait the store is generic over,
//! the sort-key comparison helpers used by every search and sort in the
//! crate, and the standard point types for the common series shapes.
//!
//! ## Design notes
//!
//! * **Cheap copies**: Points are `Copy` records a couple of floats wide;
//!   the store moves them with block copies, never through indirection.
//! * **Probe construction**: `from_sort_key` builds a point with only the
//!   sort key populated, used as the probe value for binary searches and as
//!   the filler for uninitialized slack slots.
//! * **Sort key vs main key**: For simple series the ordering key is the
//!   display key. Parametric series order by a parameter instead, which
//!   disables the sorted-by-display-key fast paths in range queries.
//!
//! ## Invariants
//!
//! * `from_sort_key(k).sort_key() == k` for finite `k`.
//! * `SORT_KEY_IS_MAIN_KEY` implies `sort_key() == main_key()` for every
//!   value of the type.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::range::CoordRange;

// ============================================================================
// PlotPoint Trait
// ============================================================================

/// A single sample of a key-ordered series.
///
/// Implementors supply the coordinate accessors the store needs to keep
/// itself sorted and to answer key and value range queries. All methods are
/// expected to be trivially cheap.
pub trait PlotPoint: Copy {
    /// Coordinate scalar type.
    type Coord: Float;

    /// Whether the ordering key equals the display key.
    ///
    /// True for simple series; false for parametric curves, where sort
    /// order and display order differ.
    const SORT_KEY_IS_MAIN_KEY: bool;

    /// The key this point is ordered by.
    fn sort_key(&self) -> Self::Coord;

    /// Construct a probe point with only the sort key populated.
    fn from_sort_key(sort_key: Self::Coord) -> Self;

    /// The display-space key coordinate.
    fn main_key(&self) -> Self::Coord;

    /// The display-space value coordinate.
    fn main_value(&self) -> Self::Coord;

    /// The value-axis span this point covers.
    ///
    /// A degenerate single-value range for plain samples, a multi-field
    /// span for OHLC-style data.
    fn value_range(&self) -> CoordRange<Self::Coord>;
}

// ============================================================================
// Sort-Key Comparison
// ============================================================================

/// Returns whether the sort key of `a` is less than the sort key of `b`.
#[inline]
pub fn less_by_sort_key<P: PlotPoint>(a: &P, b: &P) -> bool {
    a.sort_key() < b.sort_key()
}

/// Total ordering over sort keys for use with slice sorts.
///
/// NaN keys compare as equal to everything, mirroring the partial order
/// `less_by_sort_key` induces on searches.
#[inline]
pub fn sort_key_order<P: PlotPoint>(a: &P, b: &P) -> Ordering {
    a.sort_key()
        .partial_cmp(&b.sort_key())
        .unwrap_or(Ordering::Equal)
}

// ============================================================================
// Standard Point Types
// ============================================================================

/// A plain `(key, value)` sample of a simple series.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GraphPoint<T> {
    /// Key coordinate, also the ordering key.
    pub key: T,

    /// Value coordinate.
    pub value: T,
}

impl<T: Float> GraphPoint<T> {
    /// Create a sample from its two coordinates.
    #[inline]
    pub fn new(key: T, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Float> PlotPoint for GraphPoint<T> {
    type Coord = T;

    const SORT_KEY_IS_MAIN_KEY: bool = true;

    #[inline]
    fn sort_key(&self) -> T {
        self.key
    }

    #[inline]
    fn from_sort_key(sort_key: T) -> Self {
        Self {
            key: sort_key,
            value: T::zero(),
        }
    }

    #[inline]
    fn main_key(&self) -> T {
        self.key
    }

    #[inline]
    fn main_value(&self) -> T {
        self.value
    }

    #[inline]
    fn value_range(&self) -> CoordRange<T> {
        CoordRange::new(self.value, self.value)
    }
}

/// A parametric curve sample, ordered by the curve parameter `t`.
///
/// The display coordinates `(key, value)` may run in any direction while
/// `t` advances, so the ordering key and the display key differ.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CurvePoint<T> {
    /// Curve parameter, the ordering key.
    pub t: T,

    /// Display-space key coordinate.
    pub key: T,

    /// Display-space value coordinate.
    pub value: T,
}

impl<T: Float> CurvePoint<T> {
    /// Create a sample from its parameter and display coordinates.
    #[inline]
    pub fn new(t: T, key: T, value: T) -> Self {
        Self { t, key, value }
    }
}

impl<T: Float> PlotPoint for CurvePoint<T> {
    type Coord = T;

    const SORT_KEY_IS_MAIN_KEY: bool = false;

    #[inline]
    fn sort_key(&self) -> T {
        self.t
    }

    #[inline]
    fn from_sort_key(sort_key: T) -> Self {
        Self {
            t: sort_key,
            key: T::zero(),
            value: T::zero(),
        }
    }

    #[inline]
    fn main_key(&self) -> T {
        self.key
    }

    #[inline]
    fn main_value(&self) -> T {
        self.value
    }

    #[inline]
    fn value_range(&self) -> CoordRange<T> {
        CoordRange::new(self.value, self.value)
    }
}

/// An OHLC sample for financial series.
///
/// The value span covers the whole low-to-high wick, so value range
/// queries account for the full extent of the candle rather than a single
/// representative value.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CandlePoint<T> {
    /// Key coordinate, also the ordering key.
    pub key: T,

    /// Opening value.
    pub open: T,

    /// Highest value in the interval.
    pub high: T,

    /// Lowest value in the interval.
    pub low: T,

    /// Closing value.
    pub close: T,
}

impl<T: Float> CandlePoint<T> {
    /// Create a sample from its key and OHLC values.
    #[inline]
    pub fn new(key: T, open: T, high: T, low: T, close: T) -> Self {
        Self {
            key,
            open,
            high,
            low,
            close,
        }
    }
}

impl<T: Float> PlotPoint for CandlePoint<T> {
    type Coord = T;

    const SORT_KEY_IS_MAIN_KEY: bool = true;

    #[inline]
    fn sort_key(&self) -> T {
        self.key
    }

    #[inline]
    fn from_sort_key(sort_key: T) -> Self {
        Self {
            key: sort_key,
            open: T::zero(),
            high: T::zero(),
            low: T::zero(),
            close: T::zero(),
        }
    }

    #[inline]
    fn main_key(&self) -> T {
        self.key
    }

    #[inline]
    fn main_value(&self) -> T {
        self.open
    }

    #[inline]
    fn value_range(&self) -> CoordRange<T> {
        CoordRange::new(self.low, self.high)
    }
}
