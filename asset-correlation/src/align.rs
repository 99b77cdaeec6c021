//! Timestamp-bucket alignment of two price series
//!
//! Each symbol is fetched independently, so samples for the "same" instant
//! jitter by a few seconds. Timestamps are truncated to a bucket boundary
//! (one minute by default) and only buckets present in both series are paired.

use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{AlignedPair, Series};

/// Default bucket width (one minute)
pub const DEFAULT_BUCKET_WIDTH: TimeDelta = TimeDelta::minutes(1);

/// Start of a time bucket, in epoch milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
pub struct TimeBucket(i64);

impl TimeBucket {
    /// Truncate a timestamp to the start of its bucket
    ///
    /// Floors toward negative infinity, so pre-epoch instants land in the
    /// bucket that contains them. Widths under one millisecond are treated as
    /// one millisecond; [`EngineConfig`](crate::config::EngineConfig) rejects them.
    pub fn truncate(timestamp: DateTime<Utc>, width: TimeDelta) -> Self {
        let width_ms = width.num_milliseconds().max(1);
        Self(timestamp.timestamp_millis().div_euclid(width_ms) * width_ms)
    }

    /// Truncate to whole minutes (seconds and sub-seconds zeroed)
    pub fn minute(timestamp: DateTime<Utc>) -> Self {
        Self::truncate(timestamp, DEFAULT_BUCKET_WIDTH)
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }
}

/// Map bucket -> price, ordered by first occurrence
///
/// A later sample in an already seen bucket overwrites the price but keeps the
/// bucket's original position.
fn bucket_prices(series: &Series, width: TimeDelta) -> IndexMap<TimeBucket, f64> {
    let mut buckets = IndexMap::with_capacity(series.len());
    for sample in series {
        buckets.insert(TimeBucket::truncate(sample.timestamp, width), sample.price);
    }
    buckets
}

/// Pair prices sharing a one-minute bucket
pub fn align(series_a: &Series, series_b: &Series) -> Vec<AlignedPair> {
    align_with(series_a, series_b, DEFAULT_BUCKET_WIDTH)
}

/// Pair prices sharing a bucket of the given width
///
/// Output order follows `series_a`'s bucket order. Empty input or no shared
/// bucket yields an empty Vec. A width under one millisecond is clamped to one
/// millisecond (see [`TimeBucket::truncate`]).
pub fn align_with(series_a: &Series, series_b: &Series, width: TimeDelta) -> Vec<AlignedPair> {
    if series_a.is_empty() || series_b.is_empty() {
        return vec![];
    }

    let buckets_a = bucket_prices(series_a, width);
    let buckets_b = bucket_prices(series_b, width);

    buckets_a
        .iter()
        .filter_map(|(bucket, &value1)| {
            buckets_b
                .get(bucket)
                .map(|&value2| AlignedPair::new(value1, value2))
        })
        .collect()
}
