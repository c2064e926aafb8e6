//! Priority ordering for tasks.
//!
//! Every task gets an integer bucket from its status name; lower buckets
//! sort first. Untriaged tasks lead the list so they get a real status.
//! `IN PROGRESS` work follows, then `READY` work to pick up next, then
//! the tracking statuses (`REVIEW`, `WAITING`, `RESPONDED`, `STALE`)
//! which cannot be worked on but must not be forgotten, then `HOLD`
//! (deliberately parked until a future date), and finally `DONE`, kept
//! at the bottom as a record until cleared.
//!
//! Statuses that are merely being tracked *resurface*: once their
//! status-specific age threshold passes they drop to bucket 0 and jump
//! to the top for re-triage.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::Status;

/// Bucket assignment for status names, passed into sorting so tests can
/// pin both the table and the clock.
///
/// The default table keeps the historical numbering, including the
/// unused bucket 3; renumbering would reorder statuses that only appear
/// in old files.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    buckets: HashMap<String, u8>,
    /// Bucket for names missing from the table.
    other: u8,
}

impl Default for PriorityTable {
    fn default() -> Self {
        let buckets = [
            ("", 0),
            ("?", 0),
            ("IN PROGRESS", 1),
            ("IN-PROGRESS", 1),
            ("INPROGRESS", 1),
            ("READY", 2),
            ("REVIEW", 4),
            ("WAITING", 5),
            ("RESPONDED", 5),
            ("STALE", 6),
            ("HOLD", 7),
            ("DONE", 8),
        ]
        .into_iter()
        .map(|(name, bucket)| (name.to_string(), bucket))
        .collect();
        PriorityTable { buckets, other: 0 }
    }
}

impl PriorityTable {
    /// Priority bucket for `status` as of `now`. Lower sorts first.
    pub fn bucket(&self, status: &Status, now: NaiveDateTime) -> u8 {
        // A HOLD task is parked until its date arrives.
        if status.name == "HOLD" && now > due(status, Duration::zero()) {
            return 0;
        }

        // Tasks waiting or in review get checked again after a day.
        if matches!(status.name.as_str(), "WAITING" | "REVIEW" | "RESPONDED")
            && now > due(status, Duration::hours(24))
        {
            return 0;
        }

        // Stale tasks get checked once a week.
        if status.name == "STALE" && now > due(status, Duration::days(7)) {
            return 0;
        }

        self.buckets
            .get(status.name.as_str())
            .copied()
            .unwrap_or(self.other)
    }

    /// Sort key comparison: bucket first, then status date with earlier
    /// (and absent) dates leading.
    pub fn compare(&self, a: &Status, b: &Status, now: NaiveDateTime) -> Ordering {
        self.bucket(a, now)
            .cmp(&self.bucket(b, now))
            .then_with(|| a.date.cmp(&b.date))
    }
}

/// Moment after which a status is considered due for re-triage. A status
/// without a date is always due.
fn due(status: &Status, grace: Duration) -> NaiveDateTime {
    match status.date {
        Some(date) => date.and_time(NaiveTime::MIN) + grace,
        None => NaiveDateTime::MIN,
    }
}
