//! # pointstore - sorted point storage for streaming plot data
//!
//! A sorted, randomly-accessible sequence container optimized for the access
//! pattern of streaming, key-ordered samples: frequent prepend and append
//! relative to existing order, occasional bulk replace, occasional
//! out-of-order insert, and frequent range queries by key via binary search.
//!
//! ## How it works
//!
//! The store keeps all points in one contiguous buffer with three zones:
//!
//! ```text
//! [ front slack (unused) | live sorted data | back slack (unused capacity) ]
//! ```
//!
//! Front slack is reserved capacity at the start of the buffer. Prepending a
//! batch of earlier samples writes into that slack instead of shifting the
//! whole buffer, so a feed scrolling in from the left costs amortized O(1)
//! per point. Removing leading points folds them back into the slack without
//! moving any data. A hysteresis-controlled auto-squeeze policy releases
//! slack again once it clearly outweighs the live data, with thresholds far
//! enough apart from the growth schedule that the two never oscillate.
//!
//! ## Quick Start
//!
//! ```rust
//! use pointstore::prelude::*;
//!
//! let mut store = PointStore::new();
//!
//! // Bulk load, asserting the slice is already key-sorted.
//! store.add_range(
//!     &[
//!         GraphPoint::new(5.0, 50.0),
//!         GraphPoint::new(6.0, 60.0),
//!         GraphPoint::new(7.0, 70.0),
//!     ],
//!     true,
//! );
//!
//! // Single inserts pick the cheapest path automatically.
//! store.add_one(GraphPoint::new(3.0, 30.0)); // prepend
//! store.add_one(GraphPoint::new(9.0, 90.0)); // append
//! assert_eq!(store.size(), 5);
//!
//! // Trim the visible window and query what remains.
//! store.remove_before(5.0);
//! let keys = store.key_range(SignDomain::Both).unwrap();
//! assert_eq!((keys.lower, keys.upper), (5.0, 9.0));
//!
//! // Binary-searched index window for a key interval.
//! let begin = store.find_begin(5.5, false);
//! let end = store.find_end(6.5, false);
//! assert_eq!(store.as_slice()[begin..end].len(), 1);
//! ```
//!
//! ## Caller contract
//!
//! The store is single-writer and not internally synchronized. Read access
//! goes through `&self`, structural mutation through `&mut self`, so the
//! borrow checker already rules out iterating across a mutation. Direct
//! sort-key edits go through the scoped [`RawEdit`](prelude::RawEdit) guard
//! returned by `raw_edit()`, which restores the sort invariant when dropped.
//!
//! ## no_std
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! pointstore = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - point abstraction, coordinate ranges, index spans.
mod primitives;

// Layer 2: Store - the sorted point store and its capacity management.
mod store;

// Layer 3: Series - by-index facade for rendering-side consumers.
mod series;

// Standard pointstore prelude.
pub mod prelude {
    pub use crate::primitives::point::{
        less_by_sort_key, sort_key_order, CandlePoint, CurvePoint, GraphPoint, PlotPoint,
    };
    pub use crate::primitives::range::{CoordRange, SignDomain};
    pub use crate::primitives::span::DataSpan;
    pub use crate::series::Series1D;
    pub use crate::store::{PointStore, RawEdit};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod store {
        pub use crate::store::*;
    }
    pub mod series {
        pub use crate::series::*;
    }
}
