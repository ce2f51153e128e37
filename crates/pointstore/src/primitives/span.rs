//! Index spans over the live data range.
//!
//! Rendering-side consumers track sub-ranges of a series as index pairs
//! rather than holding references across mutations. [`DataSpan`] is that
//! index pair, with the clamping operations the store and its callers use
//! to keep spans inside valid bounds.

// ============================================================================
// Data Span
// ============================================================================

/// A half-open index interval `[begin, end)` into a series.
///
/// A span with `end <= begin` is empty. Spans are plain data; nothing ties
/// them to a particular store, so callers must clamp before indexing,
/// typically via [`DataSpan::bounded`] or `PointStore::bound_span`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct DataSpan {
    /// First index of the interval.
    pub begin: usize,

    /// One past the last index of the interval.
    pub end: usize,
}

impl DataSpan {
    /// Create a span from its bounds.
    #[inline]
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of indices in the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Whether the span contains no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// Whether `index` lies within the half-open interval.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.begin && index < self.end
    }

    /// The overlap of two spans.
    ///
    /// Returns the default empty span when the spans are disjoint.
    pub fn intersection(&self, other: &DataSpan) -> DataSpan {
        let begin = self.begin.max(other.begin);
        let end = self.end.min(other.end);
        if end >= begin {
            DataSpan::new(begin, end)
        } else {
            DataSpan::default()
        }
    }

    /// This span clamped to lie within `other`, never expanded.
    ///
    /// When the spans don't overlap, the result collapses onto whichever
    /// bound of `other` this span falls beyond, so the position information
    /// survives even though the result is empty.
    pub fn bounded(&self, other: &DataSpan) -> DataSpan {
        let result = self.intersection(other);
        if result.is_empty() {
            if self.end <= other.begin {
                DataSpan::new(other.begin, other.begin)
            } else {
                DataSpan::new(other.end, other.end)
            }
        } else {
            result
        }
    }
}
