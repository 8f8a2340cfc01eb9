//! Moveable feast calculation.
//!
//! Every moveable date except Advent Sunday is Easter Day plus a fixed number
//! of days. Advent Sunday is the Sunday nearest St Andrew's Day (30 November)
//! and does not depend on Easter.
//!
//! ```text
//! Septuagesima  E-63    Easter Monday   E+1
//! Sexagesima    E-56    Ascension Day   E+39
//! Quinquagesima E-49    Whitsunday      E+49
//! Ash Wednesday E-46    Whit Monday     E+50
//! Palm Sunday   E-7     Trinity Sunday  E+56
//! Good Friday   E-2
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Offsets from Easter Day, in days.
pub mod offsets {
    pub const SEPTUAGESIMA: i64 = -63;
    pub const SEXAGESIMA: i64 = -56;
    pub const QUINQUAGESIMA: i64 = -49;
    pub const ASH_WEDNESDAY: i64 = -46;
    pub const PALM_SUNDAY: i64 = -7;
    pub const GOOD_FRIDAY: i64 = -2;
    pub const EASTER_MONDAY: i64 = 1;
    pub const ASCENSION_DAY: i64 = 39;
    pub const WHITSUNDAY: i64 = 49;
    pub const WHIT_MONDAY: i64 = 50;
    pub const TRINITY_SUNDAY: i64 = 56;
}

/// The moveable (and year-anchoring fixed) feasts of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveableFeasts {
    pub year: i32,
    pub septuagesima: NaiveDate,
    pub sexagesima: NaiveDate,
    pub quinquagesima: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub good_friday: NaiveDate,
    pub easter_day: NaiveDate,
    pub easter_monday: NaiveDate,
    pub ascension_day: NaiveDate,
    pub whitsunday: NaiveDate,
    pub whit_monday: NaiveDate,
    pub trinity_sunday: NaiveDate,
    pub advent_sunday: NaiveDate,
    pub christmas_day: NaiveDate,
    pub epiphany: NaiveDate,
}

impl MoveableFeasts {
    /// Compute the feasts for `year`. Alias for [`compute_moveable_feasts`].
    pub fn for_year(year: i32) -> CalendarResult<Self> {
        compute_moveable_feasts(year)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> CalendarResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CalendarError::DateOutOfRange(format!("{year:04}-{month:02}-{day:02}"))
    })
}

fn shift(date: NaiveDate, days: i64) -> CalendarResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| CalendarError::DateOutOfRange(format!("{date} {days:+} days")))
}

/// Easter Day for a Gregorian year (Anonymous Gregorian algorithm).
///
/// The calendar is treated as proleptic, so years before 1583 and after 9999
/// resolve like any other. Only a year at the edge of `NaiveDate` can fail.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use daily_office_core::calendar::compute_easter;
///
/// assert_eq!(compute_easter(2025).unwrap(), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// assert_eq!(compute_easter(1500).unwrap(), NaiveDate::from_ymd_opt(1500, 4, 1).unwrap());
/// ```
pub fn compute_easter(year: i32) -> CalendarResult<NaiveDate> {
    // Floor division keeps the cycle intact for negative years.
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    ymd(year, month as u32, day as u32)
}

/// Advent Sunday: the Sunday nearest 30 November.
///
/// Always falls between 27 November and 3 December inclusive.
pub fn compute_advent_sunday(year: i32) -> CalendarResult<NaiveDate> {
    let st_andrew = ymd(year, 11, 30)?;
    let from_sunday = i64::from(st_andrew.weekday().num_days_from_sunday());
    // Mon..Wed step back to the previous Sunday, Thu..Sat forward to the next.
    let delta = if from_sunday <= 3 {
        -from_sunday
    } else {
        7 - from_sunday
    };
    shift(st_andrew, delta)
}

/// Compute every moveable feast of `year`.
pub fn compute_moveable_feasts(year: i32) -> CalendarResult<MoveableFeasts> {
    let easter = compute_easter(year)?;
    let at = |offset: i64| shift(easter, offset);

    Ok(MoveableFeasts {
        year,
        septuagesima: at(offsets::SEPTUAGESIMA)?,
        sexagesima: at(offsets::SEXAGESIMA)?,
        quinquagesima: at(offsets::QUINQUAGESIMA)?,
        ash_wednesday: at(offsets::ASH_WEDNESDAY)?,
        palm_sunday: at(offsets::PALM_SUNDAY)?,
        good_friday: at(offsets::GOOD_FRIDAY)?,
        easter_day: easter,
        easter_monday: at(offsets::EASTER_MONDAY)?,
        ascension_day: at(offsets::ASCENSION_DAY)?,
        whitsunday: at(offsets::WHITSUNDAY)?,
        whit_monday: at(offsets::WHIT_MONDAY)?,
        trinity_sunday: at(offsets::TRINITY_SUNDAY)?,
        advent_sunday: compute_advent_sunday(year)?,
        christmas_day: ymd(year, 12, 25)?,
        epiphany: ymd(year, 1, 6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_reference_table() {
        let known = [
            (2000, 4, 23),
            (2001, 4, 15),
            (2004, 4, 11),
            (2008, 3, 23),
            (2011, 4, 24),
            (2013, 3, 31),
            (2016, 3, 27),
            (2019, 4, 21),
            (2020, 4, 12),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2027, 3, 28),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (y, m, d) in known {
            assert_eq!(compute_easter(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn test_easter_always_sunday_2000_2050() {
        for year in 2000..=2050 {
            let easter = compute_easter(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "Easter {year}");
            assert!(easter >= date(year, 3, 22) && easter <= date(year, 4, 25));
        }
    }

    #[test]
    fn test_advent_sunday_window_2000_2050() {
        for year in 2000..=2050 {
            let advent = compute_advent_sunday(year).unwrap();
            assert_eq!(advent.weekday(), Weekday::Sun, "Advent {year}");
            assert!(
                advent >= date(year, 11, 27) && advent <= date(year, 12, 3),
                "Advent {year} = {advent}"
            );
        }
    }

    #[test]
    fn test_advent_sunday_nearest_not_next() {
        // 30 Nov 2022 was a Wednesday: nearest Sunday is 27 Nov, not 4 Dec.
        assert_eq!(compute_advent_sunday(2022).unwrap(), date(2022, 11, 27));
        // 30 Nov 2023 was a Thursday: forward to 3 Dec.
        assert_eq!(compute_advent_sunday(2023).unwrap(), date(2023, 12, 3));
        // 30 Nov 2025 is itself a Sunday.
        assert_eq!(compute_advent_sunday(2025).unwrap(), date(2025, 11, 30));
    }

    #[test]
    fn test_moveable_feasts_2025() {
        let f = compute_moveable_feasts(2025).unwrap();
        assert_eq!(f.septuagesima, date(2025, 2, 16));
        assert_eq!(f.sexagesima, date(2025, 2, 23));
        assert_eq!(f.quinquagesima, date(2025, 3, 2));
        assert_eq!(f.ash_wednesday, date(2025, 3, 5));
        assert_eq!(f.palm_sunday, date(2025, 4, 13));
        assert_eq!(f.good_friday, date(2025, 4, 18));
        assert_eq!(f.easter_monday, date(2025, 4, 21));
        assert_eq!(f.ascension_day, date(2025, 5, 29));
        assert_eq!(f.whitsunday, date(2025, 6, 8));
        assert_eq!(f.whit_monday, date(2025, 6, 9));
        assert_eq!(f.trinity_sunday, date(2025, 6, 15));
        assert_eq!(f.advent_sunday, date(2025, 11, 30));
        assert_eq!(f.christmas_day, date(2025, 12, 25));
        assert_eq!(f.epiphany, date(2025, 1, 6));
    }

    #[test]
    fn test_feast_weekdays() {
        for year in 2000..=2050 {
            let f = MoveableFeasts::for_year(year).unwrap();
            assert_eq!(f.ash_wednesday.weekday(), Weekday::Wed);
            assert_eq!(f.good_friday.weekday(), Weekday::Fri);
            assert_eq!(f.ascension_day.weekday(), Weekday::Thu);
            for sunday in [
                f.septuagesima,
                f.sexagesima,
                f.quinquagesima,
                f.palm_sunday,
                f.whitsunday,
                f.trinity_sunday,
            ] {
                assert_eq!(sunday.weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn test_proleptic_years() {
        assert_eq!(compute_easter(1500).unwrap(), date(1500, 4, 1));
        assert_eq!(compute_easter(1582).unwrap(), date(1582, 4, 18));
        assert_eq!(compute_easter(10_000).unwrap(), date(10_000, 4, 16));

        for year in (-2000..=1583).chain(9990..=10_100) {
            let f = compute_moveable_feasts(year).unwrap();
            assert_eq!(f.easter_day.weekday(), Weekday::Sun, "Easter {year}");
            assert_eq!(f.advent_sunday.weekday(), Weekday::Sun, "Advent {year}");
            assert!(f.easter_day >= date(year, 3, 22) && f.easter_day <= date(year, 4, 25));
        }
    }

    #[test]
    fn test_edge_of_date_type() {
        let last = NaiveDate::MAX.year();
        assert!(compute_moveable_feasts(last).is_ok());
        assert!(compute_moveable_feasts(NaiveDate::MIN.year()).is_ok());
        assert!(matches!(
            compute_easter(last + 1),
            Err(CalendarError::DateOutOfRange(_))
        ));
    }
}
