//! Per-day request counts for the trend line.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::{DailyCount, Turno};

/// Requests per calendar day, oldest first.
///
/// The bucket is the date part of `fecha_solicitud_iso`. Records without that
/// field, or whose date part is not a real calendar day, contribute to no
/// bucket. Days are compared as dates, so `2024-3-5` and `2024-03-05` share a
/// bucket.
pub fn group_by_day(records: &[Turno]) -> Vec<DailyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for day in records.iter().filter_map(Turno::request_date) {
        *buckets.entry(day).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, value)| DailyCount { date, value })
        .collect()
}
