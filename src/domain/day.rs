use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format of a day identifier, e.g. `20250110`.
pub const DAY_FORMAT: &str = "%Y%m%d";

/// How the days occupied by a booking are enumerated.
///
/// Day identifiers are opaque `YYYYMMDD` tokens. With [`DayIteration::Integer`]
/// a stay is walked as a plain integer range, so a stay crossing a month end
/// also visits tokens such as `20250132` that name no calendar day.
/// [`DayIteration::Calendar`] walks real calendar days instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayIteration {
    #[default]
    Integer,
    Calendar,
}

impl DayIteration {
    /// Keys of the days in `[arrival, departure)`.
    ///
    /// Returns `None` when either endpoint cannot be read under this mode.
    /// An empty or inverted stay yields an empty list.
    pub fn occupied_days(self, arrival: &str, departure: &str) -> Option<Vec<i64>> {
        match self {
            Self::Integer => {
                let from: i64 = arrival.trim().parse().ok()?;
                let to: i64 = departure.trim().parse().ok()?;
                Some((from..to).collect())
            }
            Self::Calendar => {
                let from = parse_day(arrival)?;
                let to = parse_day(departure)?;
                Some(
                    from.iter_days()
                        .take_while(|day| *day < to)
                        .map(day_key)
                        .collect(),
                )
            }
        }
    }
}

impl std::fmt::Display for DayIteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

pub fn parse_day(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token.trim(), DAY_FORMAT).ok()
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Integer form of a calendar date, `20250110` for 10 Jan 2025.
pub fn day_key(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// The day `offset` days after `start`, or `None` past the end of the calendar.
pub fn nth_day(start: NaiveDate, offset: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn integer_mode_within_month() {
        let days = DayIteration::Integer
            .occupied_days("20250110", "20250113")
            .unwrap();
        assert_eq!(days, vec![20_250_110, 20_250_111, 20_250_112]);
    }

    #[test]
    fn integer_mode_crosses_month_end_literally() {
        let days = DayIteration::Integer
            .occupied_days("20250130", "20250201")
            .unwrap();
        // 20250130 ..= 20250200, including tokens like 20250132
        assert_eq!(days.len(), 71);
        assert!(days.contains(&20_250_132));
        assert!(!days.contains(&20_250_201));
    }

    #[test]
    fn calendar_mode_crosses_month_end() {
        let days = DayIteration::Calendar
            .occupied_days("20250130", "20250202")
            .unwrap();
        assert_eq!(days, vec![20_250_130, 20_250_131, 20_250_201]);
    }

    #[test]
    fn departure_day_is_excluded() {
        for mode in [DayIteration::Integer, DayIteration::Calendar] {
            let days = mode.occupied_days("20250110", "20250111").unwrap();
            assert_eq!(days, vec![20_250_110], "mode {mode}");
        }
    }

    #[test]
    fn inverted_stay_is_empty() {
        for mode in [DayIteration::Integer, DayIteration::Calendar] {
            let days = mode.occupied_days("20250112", "20250110").unwrap();
            assert!(days.is_empty(), "mode {mode}");
        }
    }

    #[test]
    fn unreadable_endpoints() {
        assert!(DayIteration::Integer.occupied_days("abc", "20250110").is_none());
        assert!(DayIteration::Calendar.occupied_days("20250132", "20250201").is_none());
        // Integer mode accepts any integer, calendar mode does not
        assert!(DayIteration::Integer.occupied_days("20250132", "20250201").is_some());
    }

    #[test]
    fn format_and_key_agree() {
        let d = date(2025, 1, 10);
        assert_eq!(format_day(d), "20250110");
        assert_eq!(day_key(d), 20_250_110);
        assert_eq!(parse_day("20250110"), Some(d));
    }

    #[test]
    fn nth_day_uses_calendar_arithmetic() {
        assert_eq!(nth_day(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
        assert_eq!(nth_day(date(2024, 12, 31), 1), Some(date(2025, 1, 1)));
        assert_eq!(nth_day(date(2024, 12, 31), 0), Some(date(2024, 12, 31)));
    }

    #[test]
    fn day_iteration_serde_lowercase() {
        let mode: DayIteration = serde_yml::from_str("calendar").unwrap();
        assert_eq!(mode, DayIteration::Calendar);
        assert_eq!(DayIteration::default(), DayIteration::Integer);
    }
}
