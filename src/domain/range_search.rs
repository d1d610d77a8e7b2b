use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::availability::AvailabilityEngine;
use super::day::{format_day, nth_day};

/// A maximal run of consecutive days with the same positive availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub available: i64,
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}-{}, {})", self.start, self.end, self.available)
    }
}

/// Renders ranges the way the console prints them: `(a-b, n), (c-d, m)`.
pub fn format_ranges(ranges: &[DateRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scans `window_days` days starting at `today` and merges days with equal
/// positive single-day availability into ranges.
///
/// Days with zero or negative availability close the open range and are
/// never reported.
pub fn search(
    engine: &AvailabilityEngine<'_>,
    hotel_id: &str,
    window_days: u32,
    room_type: &str,
    today: NaiveDate,
) -> Vec<DateRange> {
    let mut merger = RangeMerger::default();

    for offset in 0..window_days {
        let Some(date) = nth_day(today, offset) else {
            break;
        };
        let day = format_day(date);
        let count = engine.availability(hotel_id, &day, &day, room_type);
        merger.push(day, count);
    }

    let ranges = merger.finish();
    debug!(
        hotel_id,
        room_type,
        window_days,
        ranges = ranges.len(),
        "search"
    );
    ranges
}

/// Folds a day-ordered stream of `(day, count)` into ranges.
#[derive(Debug, Default)]
struct RangeMerger {
    open: Option<DateRange>,
    closed: Vec<DateRange>,
}

impl RangeMerger {
    fn push(&mut self, day: String, count: i64) {
        if count <= 0 {
            self.close();
            return;
        }
        if let Some(range) = self.open.as_mut()
            && range.available == count
        {
            range.end = day;
            return;
        }
        self.close();
        self.open = Some(DateRange {
            start: day.clone(),
            end: day,
            available: count,
        });
    }

    fn close(&mut self) {
        if let Some(range) = self.open.take() {
            self.closed.push(range);
        }
    }

    fn finish(mut self) -> Vec<DateRange> {
        self.close();
        self.closed
    }
}
