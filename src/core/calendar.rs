//! Calendar arithmetic helpers.
//!
//! Everything here is pure and works on naive calendar dates. Functions
//! return `None` instead of panicking when a result would leave chrono's
//! supported date range.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Number of business days in any seven consecutive calendar days.
const BUSINESS_DAYS_PER_WEEK: u64 = 5;

/// Add a signed number of days.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Add a signed number of weeks.
#[must_use]
pub fn add_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    add_days(date, weeks.checked_mul(7)?)
}

/// Add a signed number of months, clamping the day to the target month.
///
/// Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year).
#[must_use]
pub fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Add a signed number of years.
///
/// Feb 29 landing in a non-leap year clamps to Feb 28, the same way
/// month addition clamps.
#[must_use]
pub fn add_years(date: NaiveDate, years: i64) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Next occurrence of `weekday` strictly after `date` (1 to 7 days later).
#[must_use]
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    add_days(date, (target - current - 1).rem_euclid(7) + 1)
}

/// Most recent occurrence of `weekday` strictly before `date` (1 to 7 days earlier).
#[must_use]
pub fn previous_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = i64::from(date.weekday().num_days_from_monday());
    let target = i64::from(weekday.num_days_from_monday());
    add_days(date, -((current - target - 1).rem_euclid(7) + 1))
}

/// The `n`-th future occurrence of `weekday` after `date`; `n = 1` is the next one.
#[must_use]
pub fn nth_weekday_after(date: NaiveDate, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    let extra_weeks = i64::from(n.checked_sub(1)?);
    add_weeks(next_weekday(date, weekday)?, extra_weeks)
}

/// Monday of the week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    add_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// Last calendar day of the given month.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Number of days in the given month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    last_day_of_month(year, month).map(|d| d.day())
}

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First Monday-Friday strictly after `date`.
#[must_use]
pub fn next_business_day(date: NaiveDate) -> Option<NaiveDate> {
    let mut day = date.succ_opt()?;
    while is_weekend(day) {
        day = day.succ_opt()?;
    }
    Some(day)
}

/// Step forward until `count` business days have been counted.
///
/// The starting day is never counted. Whole blocks of five business days
/// are skipped as seven calendar days, which lands on the same result as
/// stepping one day at a time.
#[must_use]
pub fn add_business_days(date: NaiveDate, count: u64) -> Option<NaiveDate> {
    if count == 0 {
        return Some(date);
    }
    let full_weeks = (count - 1) / BUSINESS_DAYS_PER_WEEK;
    let remaining = count - full_weeks * BUSINESS_DAYS_PER_WEEK;

    let mut day = add_weeks(date, i64::try_from(full_weeks).ok()?)?;
    for _ in 0..remaining {
        day = next_business_day(day)?;
    }
    Some(day)
}

/// Count Monday-Friday days in the half-open range from the earlier date
/// (inclusive) to the later date (exclusive). Always non-negative.
#[must_use]
pub fn business_days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let total = (end - start).num_days();
    let full_weeks = total / 7;

    let mut count = full_weeks * 5;
    let mut day = start + Duration::days(full_weeks * 7);
    while day < end {
        if !is_weekend(day) {
            count += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn weekday_from_index(i: usize) -> Weekday {
        ALL_WEEKDAYS[i]
    }

    // ==================
    // Weekday cycle
    // ==================

    #[test]
    fn test_next_weekday_from_sunday() {
        // 2026-02-08 is a Sunday
        assert_eq!(next_weekday(date(2026, 2, 8), Weekday::Wed), Some(date(2026, 2, 11)));
        assert_eq!(next_weekday(date(2026, 2, 8), Weekday::Mon), Some(date(2026, 2, 9)));
    }

    #[test]
    fn test_next_weekday_same_day_is_a_week_out() {
        assert_eq!(next_weekday(date(2026, 2, 8), Weekday::Sun), Some(date(2026, 2, 15)));
    }

    #[test]
    fn test_previous_weekday() {
        assert_eq!(previous_weekday(date(2026, 2, 8), Weekday::Fri), Some(date(2026, 2, 6)));
        assert_eq!(previous_weekday(date(2026, 2, 8), Weekday::Sun), Some(date(2026, 2, 1)));
        assert_eq!(previous_weekday(date(2026, 2, 8), Weekday::Sat), Some(date(2026, 2, 7)));
    }

    #[test]
    fn test_nth_weekday_after() {
        let sunday = date(2026, 2, 8);
        assert_eq!(nth_weekday_after(sunday, Weekday::Fri, 1), Some(date(2026, 2, 13)));
        assert_eq!(nth_weekday_after(sunday, Weekday::Fri, 2), Some(date(2026, 2, 20)));
        assert_eq!(nth_weekday_after(sunday, Weekday::Fri, 0), None);
    }

    #[test]
    fn test_start_of_week() {
        assert_eq!(start_of_week(date(2026, 2, 8)), Some(date(2026, 2, 2)));
        assert_eq!(start_of_week(date(2026, 2, 9)), Some(date(2026, 2, 9)));
    }

    // ==================
    // Month / year math
    // ==================

    #[test]
    fn test_add_months_clamps_to_february() {
        assert_eq!(add_months(date(2026, 1, 31), 1), Some(date(2026, 2, 28)));
        assert_eq!(add_months(date(2028, 1, 31), 1), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_add_months_rolls_year() {
        assert_eq!(add_months(date(2026, 11, 15), 3), Some(date(2027, 2, 15)));
        assert_eq!(add_months(date(2026, 2, 1), -3), Some(date(2025, 11, 1)));
    }

    #[test]
    fn test_add_months_negative_clamps() {
        assert_eq!(add_months(date(2026, 3, 31), -1), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        assert_eq!(add_years(date(2028, 2, 29), 1), Some(date(2029, 2, 28)));
        assert_eq!(add_years(date(2028, 2, 29), -1), Some(date(2027, 2, 28)));
        assert_eq!(add_years(date(2028, 2, 29), 4), Some(date(2032, 2, 29)));
    }

    #[test]
    fn test_add_days_overflow_is_none() {
        assert_eq!(add_days(date(2026, 1, 1), i64::MAX), None);
        assert_eq!(add_months(date(2026, 1, 1), i64::MAX), None);
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2026, 2), Some(date(2026, 2, 28)));
        assert_eq!(last_day_of_month(2028, 2), Some(date(2028, 2, 29)));
        assert_eq!(last_day_of_month(2026, 12), Some(date(2026, 12, 31)));
        assert_eq!(last_day_of_month(2026, 13), None);
        assert_eq!(days_in_month(2026, 4), Some(30));
    }

    // ==================
    // Business days
    // ==================

    #[test]
    fn test_next_business_day_skips_weekend() {
        assert_eq!(next_business_day(date(2026, 2, 6)), Some(date(2026, 2, 9)));
        assert_eq!(next_business_day(date(2026, 2, 7)), Some(date(2026, 2, 9)));
        assert_eq!(next_business_day(date(2026, 2, 9)), Some(date(2026, 2, 10)));
    }

    #[test]
    fn test_add_business_days_from_friday() {
        // Friday + 5 business days = following Friday
        assert_eq!(add_business_days(date(2026, 2, 6), 5), Some(date(2026, 2, 13)));
    }

    #[test]
    fn test_add_business_days_from_sunday() {
        assert_eq!(add_business_days(date(2026, 2, 8), 3), Some(date(2026, 2, 11)));
    }

    #[test]
    fn test_add_business_days_from_saturday() {
        assert_eq!(add_business_days(date(2026, 2, 7), 5), Some(date(2026, 2, 13)));
        assert_eq!(add_business_days(date(2026, 2, 7), 6), Some(date(2026, 2, 16)));
    }

    #[test]
    fn test_add_zero_business_days() {
        assert_eq!(add_business_days(date(2026, 2, 7), 0), Some(date(2026, 2, 7)));
    }

    #[test]
    fn test_business_days_between() {
        // Sun Feb 8 .. Sun Feb 15: Mon-Fri counted
        assert_eq!(business_days_between(date(2026, 2, 8), date(2026, 2, 15)), 5);
        // Order does not matter
        assert_eq!(business_days_between(date(2026, 2, 15), date(2026, 2, 8)), 5);
        // Mon Feb 9 .. Wed Feb 11 counts Mon and Tue
        assert_eq!(business_days_between(date(2026, 2, 9), date(2026, 2, 11)), 2);
        assert_eq!(business_days_between(date(2026, 2, 9), date(2026, 2, 9)), 0);
    }

    fn step_business_days(start: NaiveDate, count: u64) -> NaiveDate {
        let mut day = start;
        let mut counted = 0;
        while counted < count {
            day = day.succ_opt().unwrap();
            if !is_weekend(day) {
                counted += 1;
            }
        }
        day
    }

    fn count_business_days(a: NaiveDate, b: NaiveDate) -> i64 {
        let (mut day, end) = if a <= b { (a, b) } else { (b, a) };
        let mut count = 0;
        while day < end {
            if !is_weekend(day) {
                count += 1;
            }
            day = day.succ_opt().unwrap();
        }
        count
    }

    proptest! {
        #[test]
        fn prop_next_weekday_within_a_week(offset in 0i64..20_000, wd in 0usize..7) {
            let start = date(2000, 1, 1) + Duration::days(offset);
            let weekday = weekday_from_index(wd);
            let next = next_weekday(start, weekday).unwrap();
            let gap = (next - start).num_days();
            prop_assert!((1..=7).contains(&gap));
            prop_assert_eq!(next.weekday(), weekday);
        }

        #[test]
        fn prop_previous_weekday_within_a_week(offset in 0i64..20_000, wd in 0usize..7) {
            let start = date(2000, 1, 1) + Duration::days(offset);
            let weekday = weekday_from_index(wd);
            let prev = previous_weekday(start, weekday).unwrap();
            let gap = (start - prev).num_days();
            prop_assert!((1..=7).contains(&gap));
            prop_assert_eq!(prev.weekday(), weekday);
        }

        #[test]
        fn prop_add_business_days_matches_stepping(offset in 0i64..5_000, count in 0u64..60) {
            let start = date(2000, 1, 1) + Duration::days(offset);
            prop_assert_eq!(add_business_days(start, count).unwrap(), step_business_days(start, count));
        }

        #[test]
        fn prop_business_days_between_matches_counting(a in 0i64..3_000, b in 0i64..3_000) {
            let base = date(2010, 1, 1);
            let (x, y) = (base + Duration::days(a), base + Duration::days(b));
            prop_assert_eq!(business_days_between(x, y), count_business_days(x, y));
        }

        #[test]
        fn prop_add_one_month_stays_in_next_month(offset in 0i64..20_000) {
            let start = date(2000, 1, 1) + Duration::days(offset);
            let later = add_months(start, 1).unwrap();
            let expected_month = start.month() % 12 + 1;
            prop_assert_eq!(later.month(), expected_month);
            prop_assert!(later.day() <= start.day());
        }
    }
}
