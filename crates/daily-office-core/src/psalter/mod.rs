//! Thirty-day psalter cycle.
//!
//! The psalms are read through once a month. The cycle day is the day of the
//! month, with two clamps:
//!
//! - the 31st of any month reads day 30;
//! - the last day of February (28th, or 29th in a leap year) reads day 30.
//!
//! Psalm 119 is too long for one office and is split into five portions over
//! days 24 (evening), 25 and 26; see [`psalm_119_division`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_office_core::psalter::{psalms_for_day, psalter_day_number};
//! use daily_office_core::Session;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
//! assert_eq!(psalter_day_number(date), 30);
//! assert_eq!(psalms_for_day(date, Session::Evening), &[147, 148, 149, 150]);
//! ```

mod table;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub use table::{PsalterDay, VerseRange, PSALM_119_DIVISION, PSALM_119_VERSES, PSALTER};

use crate::calendar::is_leap_year;
use crate::session::Session;

/// The cycle day whose morning psalms include Psalm 95 (the Venite).
pub const VENITE_DAY: u8 = 19;

/// Cycle position (1–30) for a civil date.
pub fn psalter_day_number(date: NaiveDate) -> u8 {
    let day = date.day() as u8;
    let last_of_february =
        date.month() == 2 && (day == 29 || (day == 28 && !is_leap_year(date.year())));

    if day == 31 || last_of_february {
        30
    } else {
        day
    }
}

/// Table entry for a cycle day. Out-of-range days are clamped into 1–30.
pub fn psalter_day(day: u8) -> &'static PsalterDay {
    let index = usize::from(day.clamp(1, 30)) - 1;
    &PSALTER[index]
}

/// Psalm numbers appointed for `date` and `session`, in reading order.
///
/// Psalm 119 appears as `119`; its verse portion comes from
/// [`psalm_119_division`].
pub fn psalms_for_day(date: NaiveDate, session: Session) -> &'static [u16] {
    let entry = psalter_day(psalter_day_number(date));
    match session {
        Session::Morning => entry.morning,
        Session::Evening => entry.evening,
    }
}

/// True when the Venite is dropped because Psalm 95 is already appointed.
pub fn should_omit_venite(date: NaiveDate) -> bool {
    psalter_day_number(date) == VENITE_DAY
}

/// Psalm 119 portion for a `"{cycleDay}-{session}"` key, e.g. `"25-morning"`.
pub fn psalm_119_division(key: &str) -> Option<VerseRange> {
    PSALM_119_DIVISION
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, range)| *range)
}

/// Psalm 119 portion for a cycle day and session, if that slot reads it.
pub fn psalm_119_portion(day: u8, session: Session) -> Option<VerseRange> {
    psalm_119_division(&format!("{day}-{session}"))
}

/// A psalm to be read, whole or as a verse range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PsalmPortion {
    pub psalm: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verses: Option<VerseRange>,
}

/// Appointed psalms with Psalm 119 already resolved to its portion.
pub fn appointed_psalms(date: NaiveDate, session: Session) -> Vec<PsalmPortion> {
    let day = psalter_day_number(date);
    psalms_for_day(date, session)
        .iter()
        .map(|&psalm| {
            let verses = if psalm == 119 {
                psalm_119_portion(day, session)
            } else {
                None
            };
            PsalmPortion { psalm, verses }
        })
        .collect()
}
