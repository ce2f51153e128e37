//! Capacity and slack management for the point store.
//!
//! ## Purpose
//!
//! This module grows the front preallocation pool on demand and releases
//! oversized pools again once data has been removed. Growth and shrink
//! share one buffer and are tuned against each other: the shrink
//! thresholds sit far enough from the growth schedule that repeated
//! add/remove traffic never flips between reallocation and release.
//!
//! ## Key concepts
//!
//! * **Growth schedule**: Each front-slack growth reserves the requested
//!   minimum plus a bonus that doubles with every growth event, from 16
//!   slots up to a 32768-slot ceiling (both less a small constant bias).
//!   Consecutive prepends therefore amortize to O(1) per point.
//! * **Hysteresis bands**: Shrink thresholds depend on the total
//!   allocation. Small buffers are never shrunk, mid-sized buffers keep
//!   generous slack, large buffers release earlier. The front threshold is
//!   tighter than the back one: paused growth leaves front slack as pure
//!   overhead, while back slack is what the allocator over-provisions
//!   anyway.
//!
//! ## Invariants
//!
//! * `squeeze` never changes the live sequence, only where it sits in the
//!   buffer and how much spare capacity surrounds it.

// Internal dependencies
use crate::primitives::point::PlotPoint;
use crate::store::PointStore;
use num_traits::Zero;

// ============================================================================
// Tuning Constants
// ============================================================================

// Exponent bounds and bias of the doubling growth schedule.
const GROWTH_EXPONENT_MIN: usize = 4;
const GROWTH_EXPONENT_MAX: usize = 15;
const GROWTH_RESERVE_BIAS: usize = 12;

// Hysteresis thresholds for the automatic shrink check. Empirically tuned
// against the doubling growth of both the buffer and the front pool; see
// `auto_squeeze_check` before changing any of them.
const SHRINK_TOTAL_LARGE: usize = 650_000;
const SHRINK_TOTAL_SMALL: usize = 1_000;
const SHRINK_BACK_RATIO_LARGE: f64 = 1.5;
const SHRINK_FRONT_MULTIPLIER_LARGE: usize = 10;
const SHRINK_BACK_MULTIPLIER_SMALL: usize = 5;
const SHRINK_FRONT_RATIO_SMALL: f64 = 1.5;

/// Bonus slots reserved on top of the requested minimum at the given
/// position in the growth schedule.
#[inline]
fn growth_schedule(iteration: usize) -> usize {
    let exponent = iteration
        .saturating_add(GROWTH_EXPONENT_MIN)
        .clamp(GROWTH_EXPONENT_MIN, GROWTH_EXPONENT_MAX);
    (1usize << exponent) - GROWTH_RESERVE_BIAS
}

// ============================================================================
// Capacity Management
// ============================================================================

impl<P: PlotPoint> PointStore<P> {
    /// Ensure the front preallocation pool holds at least `minimum` slots.
    ///
    /// Grows by more than requested according to the growth schedule, so
    /// consecutive prepends reallocate geometrically less often. No-op if
    /// the pool is already large enough.
    pub(crate) fn grow_front_slack(&mut self, minimum: usize) {
        if minimum <= self.front_slack {
            return;
        }

        let new_front_slack = minimum + growth_schedule(self.growth_iteration);
        self.growth_iteration += 1;

        // Extend the buffer, then shift the live range up into the new
        // tail. The backward copy handles the overlap.
        let shift = new_front_slack - self.front_slack;
        let old_len = self.data.len();
        let filler = P::from_sort_key(<P::Coord>::zero());
        self.data.resize(old_len + shift, filler);
        self.data.copy_within(self.front_slack..old_len, new_front_slack);
        self.front_slack = new_front_slack;
    }

    /// Release unused slack capacity.
    ///
    /// With `release_front`, the live range is compacted down to offset
    /// zero and the growth schedule restarts from its cheapest step, so a
    /// quiescent store returns to the smallest allocation regime. With
    /// `release_back`, trailing capacity shrinks to the live size.
    ///
    /// The live sequence is never changed by this call.
    pub fn squeeze(&mut self, release_front: bool, release_back: bool) {
        if release_front {
            if self.front_slack > 0 {
                let size = self.size();
                self.data.copy_within(self.front_slack.., 0);
                self.data.truncate(size);
                self.front_slack = 0;
            }
            self.growth_iteration = 0;
        }
        if release_back {
            self.data.shrink_to_fit();
        }
    }

    /// Release slack if it clearly outweighs the live data.
    ///
    /// Called after every removal while auto squeeze is enabled. The
    /// thresholds form hysteresis bands around the growth strategy;
    /// keeping them far apart is what prevents remove/add traffic from
    /// oscillating between squeezing and reallocating.
    pub(crate) fn auto_squeeze_check(&mut self) {
        let total_alloc = self.data.capacity();
        let back_slack = total_alloc - self.data.len();
        let used = self.size();

        let mut shrink_back = false;
        let mut shrink_front = false;
        if total_alloc > SHRINK_TOTAL_LARGE {
            shrink_back = back_slack as f64 > used as f64 * SHRINK_BACK_RATIO_LARGE;
            shrink_front = self.front_slack * SHRINK_FRONT_MULTIPLIER_LARGE > used;
        } else if total_alloc > SHRINK_TOTAL_SMALL {
            // Below roughly 10 MiB of raw data, be generous with slack;
            // below a thousand slots, don't even bother.
            shrink_back = back_slack > used * SHRINK_BACK_MULTIPLIER_SMALL;
            shrink_front = self.front_slack as f64 > used as f64 * SHRINK_FRONT_RATIO_SMALL;
        }

        if shrink_front || shrink_back {
            self.squeeze(shrink_front, shrink_back);
        }
    }
}
