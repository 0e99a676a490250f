use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::debug;

use crate::payload::ResolvedHour;

/// A resolved hour together with its parsed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct StampedHour {
    pub at: DateTime<Utc>,
    pub reading: ResolvedHour,
}

/// All hours that fall on one UTC calendar day, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub hours: Vec<StampedHour>,
}

impl DayBucket {
    /// Instant of the first hour in the bucket.
    pub fn first_instant(&self) -> Option<DateTime<Utc>> {
        self.hours.first().map(|h| h.at)
    }
}

/// Groups hours by UTC date, oldest day first, keeping at most `max_days`.
///
/// Hours whose timestamp did not parse are dropped. Every returned bucket is
/// non-empty.
pub fn bucket_by_day<I>(hours: I, max_days: usize) -> Vec<DayBucket>
where
    I: IntoIterator<Item = ResolvedHour>,
{
    let mut days: BTreeMap<NaiveDate, Vec<StampedHour>> = BTreeMap::new();
    let mut dropped = 0usize;

    for reading in hours {
        let Some(at) = reading.instant else {
            debug!(time = %reading.time, "dropping hour with unparseable timestamp");
            dropped += 1;
            continue;
        };
        days.entry(at.date_naive()).or_default().push(StampedHour { at, reading });
    }

    let total_days = days.len();
    let buckets: Vec<DayBucket> = days
        .into_iter()
        .take(max_days)
        .map(|(date, hours)| DayBucket { date, hours })
        .collect();

    debug!(total_days, kept = buckets.len(), dropped, max_days, "bucketed hours by day");
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn hour_at(at: DateTime<Utc>, temp: f64) -> ResolvedHour {
        ResolvedHour {
            time: at.to_rfc3339(),
            instant: Some(at),
            air_temperature: Some(temp),
            ..Default::default()
        }
    }

    fn hourly_series(start: DateTime<Utc>, count: i64) -> Vec<ResolvedHour> {
        (0..count).map(|i| hour_at(start + Duration::hours(i), i as f64)).collect()
    }

    #[test]
    fn two_days_of_hours_make_two_buckets() {
        let start = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let buckets = bucket_by_day(hourly_series(start, 48), 5);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(buckets[1].date, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert!(buckets.iter().all(|b| b.hours.len() == 24));
    }

    #[test]
    fn caps_to_earliest_days() {
        let start = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        let buckets = bucket_by_day(hourly_series(start, 24 * 10), 3);

        let dates: Vec<String> = buckets.iter().map(|b| b.date.to_string()).collect();
        assert_eq!(dates, ["2024-05-10", "2024-05-11", "2024-05-12"]);
    }

    #[test]
    fn days_sorted_but_hours_keep_input_order() {
        let day2_late = Utc.with_ymd_and_hms(2024, 5, 11, 18, 0, 0).unwrap();
        let day1 = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();
        let day2_early = Utc.with_ymd_and_hms(2024, 5, 11, 3, 0, 0).unwrap();

        let buckets = bucket_by_day(
            vec![hour_at(day2_late, 1.0), hour_at(day1, 2.0), hour_at(day2_early, 3.0)],
            5,
        );

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].first_instant(), Some(day1));
        let order: Vec<_> = buckets[1].hours.iter().map(|h| h.at).collect();
        assert_eq!(order, [day2_late, day2_early]);
    }

    #[test]
    fn unparseable_hours_are_dropped() {
        let at = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let broken = ResolvedHour { time: "not a time".into(), ..Default::default() };

        let buckets = bucket_by_day(vec![broken, hour_at(at, 60.0)], 5);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].hours.len(), 1);
    }

    #[test]
    fn zero_cap_and_empty_input() {
        let start = Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap();
        assert!(bucket_by_day(hourly_series(start, 5), 0).is_empty());
        assert!(bucket_by_day(Vec::new(), 5).is_empty());
    }
}
