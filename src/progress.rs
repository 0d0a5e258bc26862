use crate::models::TrackedItem;
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_TARGET_DAYS: u32 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub elapsed_days: i64,
    pub percentage: u32,
}

pub fn compute_progress(
    start_date: DateTime<Utc>,
    now: DateTime<Utc>,
    target_days: Option<u32>,
) -> Progress {
    // Floor, not round: a partial day never counts as a full day.
    let elapsed_days = (now - start_date).num_milliseconds().div_euclid(MILLIS_PER_DAY);
    let denominator = target_days.filter(|days| *days > 0).unwrap_or(DEFAULT_TARGET_DAYS);
    let raw = (elapsed_days as f64 / f64::from(denominator) * 100.0).round();
    let percentage = raw.clamp(0.0, 100.0) as u32;

    Progress {
        elapsed_days,
        percentage,
    }
}

impl TrackedItem {
    pub fn progress_at(&self, now: DateTime<Utc>) -> Progress {
        compute_progress(self.start_date, now, self.target_days)
    }

    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.start_date = now;
    }

    pub fn increment_days(&mut self) {
        self.start_date -= Duration::days(1);
    }

    /// Shifts the start a day later unless that would put it past `now`.
    /// Returns whether the shift was applied.
    pub fn decrement_days(&mut self, now: DateTime<Utc>) -> bool {
        let shifted = self.start_date + Duration::days(1);
        if shifted > now {
            return false;
        }
        self.start_date = shifted;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item_started_at(start_date: DateTime<Utc>) -> TrackedItem {
        TrackedItem {
            id: "item".to_string(),
            name: "Test".to_string(),
            start_date,
            description: None,
            color: None,
            target_days: None,
        }
    }

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn zero_elapsed_at_start() {
        let now = instant(2026, 3, 1);
        let progress = compute_progress(now, now, None);
        assert_eq!(progress.elapsed_days, 0);
        assert_eq!(progress.percentage, 0);
    }

    #[test]
    fn partial_day_does_not_count() {
        let start = instant(2026, 3, 1);
        let almost_a_day = start + Duration::milliseconds(MILLIS_PER_DAY - 1);
        assert_eq!(compute_progress(start, almost_a_day, None).elapsed_days, 0);

        let exactly_a_day = start + Duration::milliseconds(MILLIS_PER_DAY);
        assert_eq!(compute_progress(start, exactly_a_day, None).elapsed_days, 1);
    }

    #[test]
    fn half_of_target_is_fifty_percent() {
        let start = instant(2026, 3, 1);
        let now = start + Duration::days(15);
        let progress = compute_progress(start, now, Some(30));
        assert_eq!(progress.elapsed_days, 15);
        assert_eq!(progress.percentage, 50);
    }

    #[test]
    fn percentage_clamps_at_one_hundred() {
        let start = instant(2026, 3, 1);
        let now = start + Duration::days(20);
        assert_eq!(compute_progress(start, now, Some(10)).percentage, 100);

        let far_future = start + Duration::days(100_000);
        assert_eq!(compute_progress(start, far_future, Some(10)).percentage, 100);
    }

    #[test]
    fn missing_target_defaults_to_thirty_days() {
        let start = instant(2026, 3, 1);
        let now = start + Duration::days(30);
        assert_eq!(compute_progress(start, now, None).percentage, 100);

        let now = start + Duration::days(3);
        assert_eq!(compute_progress(start, now, None).percentage, 10);
    }

    #[test]
    fn zero_target_falls_back_to_default() {
        let start = instant(2026, 3, 1);
        let now = start + Duration::days(15);
        assert_eq!(compute_progress(start, now, Some(0)).percentage, 50);
    }

    #[test]
    fn future_start_floors_negative_and_clamps_percentage() {
        let now = instant(2026, 3, 1);
        let start = now + Duration::hours(12);
        let progress = compute_progress(start, now, None);
        assert_eq!(progress.elapsed_days, -1);
        assert_eq!(progress.percentage, 0);
    }

    #[test]
    fn elapsed_never_negative_for_past_starts() {
        let now = instant(2026, 3, 1);
        for days in 0..60 {
            let start = now - Duration::days(days);
            assert!(compute_progress(start, now, None).elapsed_days >= 0);
        }
    }

    #[test]
    fn decrement_at_now_is_a_noop() {
        let now = instant(2026, 3, 1);
        let mut item = item_started_at(now);
        assert!(!item.decrement_days(now));
        assert_eq!(item.start_date, now);
    }

    #[test]
    fn increment_then_decrement_round_trips() {
        let now = instant(2026, 3, 1);
        let start = now - Duration::days(4);
        let mut item = item_started_at(start);

        item.increment_days();
        assert_eq!(item.progress_at(now).elapsed_days, 5);

        assert!(item.decrement_days(now));
        assert_eq!(item.start_date, start);
    }

    #[test]
    fn reset_yields_zero_elapsed() {
        let now = instant(2026, 3, 1);
        let mut item = item_started_at(now - Duration::days(12));
        item.reset(now);
        assert_eq!(item.progress_at(now).elapsed_days, 0);
        assert_eq!(item.progress_at(now).percentage, 0);
    }
}
