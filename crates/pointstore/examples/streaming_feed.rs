//! Streaming Feed Example
//!
//! This example walks a point store through the life of a real-time
//! chart series:
//! - Bulk loading an initial history
//! - Appending live ticks as they arrive
//! - Backfilling older history in front of the data
//! - Trimming the store to a scrolling visible window
//! - Querying the ranges a renderer needs for axis scaling

use pointstore::prelude::*;

fn main() {
    println!("{}", "=".repeat(72));
    println!("pointstore - Streaming Feed Walkthrough");
    println!("{}", "=".repeat(72));
    println!();

    let mut series: Series1D<GraphPoint<f64>> = Series1D::new("sensor-a");

    // 1. Bulk load an initial history, already key-sorted.
    let history: Vec<GraphPoint<f64>> = (100..200)
        .map(|t| GraphPoint::new(t as f64, (t as f64 * 0.1).sin()))
        .collect();
    series.data_mut().replace_all(&history, true);
    println!("Loaded history:        {:>6} points", series.data_count());

    // 2. Live ticks arrive with ascending timestamps; each lands on the
    //    O(1) append path.
    for t in 200..260 {
        series
            .data_mut()
            .add_one(GraphPoint::new(t as f64, (t as f64 * 0.1).sin()));
    }
    println!("After live ticks:      {:>6} points", series.data_count());

    // 3. The user scrolls left; backfill older data in one batch. The
    //    whole batch precedes the stored range, so it lands in front
    //    slack without moving the existing points.
    let backfill: Vec<GraphPoint<f64>> = (0..100)
        .map(|t| GraphPoint::new(t as f64, (t as f64 * 0.1).sin()))
        .collect();
    series.data_mut().add_range(&backfill, true);
    println!("After backfill:        {:>6} points", series.data_count());

    // 4. Keep a scrolling window: drop everything before t = 60. The
    //    removed prefix folds into the preallocation pool in O(1).
    series.data_mut().remove_before(60.0);
    println!("After window trim:     {:>6} points", series.data_count());

    // 5. Ranges for axis scaling.
    let keys = series.data().key_range(SignDomain::Both).unwrap();
    println!();
    println!("Key range:             [{:.1}, {:.1}]", keys.lower, keys.upper);

    let visible = CoordRange::new(80.0, 120.0);
    let values = series
        .data()
        .value_range(SignDomain::Both, Some(visible))
        .unwrap();
    println!(
        "Values in [80, 120]:   [{:+.3}, {:+.3}]",
        values.lower, values.upper
    );

    // 6. The index window a renderer would iterate for the visible key
    //    range, expanded by one point on each side so connecting line
    //    segments clip correctly at the plot edges.
    let begin = series.find_begin_index(visible.lower, true);
    let end = series.find_end_index(visible.upper, true);
    println!(
        "Render window:         indices [{begin}, {end}) of {}",
        series.data_count()
    );

    println!();
    println!("Done.");
}
