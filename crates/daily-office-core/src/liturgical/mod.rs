//! Liturgical day resolution.
//!
//! [`resolve_liturgical_day`] turns a civil date into its full Prayer Book
//! identity: season, week, title, holy-day status, collect key and psalter
//! day.
//!
//! # Resolution order
//!
//! 1. Moveable feasts for the date's year
//! 2. Season
//! 3. Week of season
//! 4. Psalter cycle day
//! 5. Fixed holy day for the month and day
//! 6. Moveable holy day falling on the date
//! 7. Precedence (see [`precedence::PRECEDENCE_RULES`])
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_office_core::liturgical::{resolve_liturgical_day, HolyDayRank};
//!
//! let day = resolve_liturgical_day(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()).unwrap();
//! assert!(day.is_holy_day);
//! assert_eq!(day.name, "Christmas Day");
//! assert_eq!(day.holy_day.unwrap().rank, HolyDayRank::Principal);
//! ```

pub mod holy_days;
pub mod naming;
pub mod precedence;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{compute_moveable_feasts, determine_season, LiturgicalSeason};
use crate::error::CalendarResult;
use crate::psalter::psalter_day_number;

pub use holy_days::{
    fixed_holy_day, moveable_holy_day, FixedHolyDay, HolyDayRank, MoveableHolyDay,
    FIXED_HOLY_DAYS, MOVEABLE_HOLY_DAYS,
};
pub use naming::{ordinary_collect_key, week_of_season, weekday_name};
pub use precedence::{observance, Candidates, Observance, PrecedenceRule, PRECEDENCE_RULES};

/// The holy day that won precedence on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolyDay {
    pub name: String,
    pub rank: HolyDayRank,
}

/// Resolved liturgical identity of one civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalDay {
    pub date: NaiveDate,
    pub season: LiturgicalSeason,
    pub week_of_season: u32,
    pub weekday: Weekday,
    pub name: String,
    pub is_holy_day: bool,
    pub holy_day: Option<HolyDay>,
    /// Collect appointed for the day.
    ///
    /// A holy day's own key, otherwise `<season>-<week>`, except in late
    /// Trinity: the Sunday next before Advent always reads `trinity-25`, and
    /// weeks 25 and later before it read `epiphany-N` (the omitted Epiphany
    /// collects). So `collect_key` can differ from `season` and
    /// `week_of_season`; see [`ordinary_collect_key`].
    pub collect_key: String,
    pub is_sunday: bool,
    pub psalter_day: u8,
}

impl LiturgicalDay {
    /// `YYYY-MM-DD`, the key callers cache resolved days under.
    pub fn cache_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Rank of the holy day, if any.
    pub fn rank(&self) -> Option<HolyDayRank> {
        self.holy_day.as_ref().map(|h| h.rank)
    }
}

/// Resolve the liturgical identity of `date`.
///
/// Total over the proleptic Gregorian calendar. Fails only when the feasts of
/// the date's year cannot be represented, which needs a year at the edge of
/// `NaiveDate`.
pub fn resolve_liturgical_day(date: NaiveDate) -> CalendarResult<LiturgicalDay> {
    let feasts = compute_moveable_feasts(date.year())?;
    let season = determine_season(date, &feasts);
    let week = week_of_season(date, season, &feasts);
    let psalter_day = psalter_day_number(date);
    let weekday = date.weekday();
    let is_sunday = weekday == Weekday::Sun;

    let candidates = Candidates {
        is_sunday,
        moveable: moveable_holy_day(date, &feasts),
        fixed: fixed_holy_day(date.year(), date.month(), date.day()),
    };

    let (name, holy_day, collect_key) = match observance(&candidates) {
        Observance::HolyDay { name, rank, collect_key } => (
            name.to_string(),
            Some(HolyDay { name: name.to_string(), rank }),
            collect_key.to_string(),
        ),
        Observance::Ordinary => {
            let is_last_trinity = season == LiturgicalSeason::Trinity
                && week == naming::last_trinity_week(&feasts);
            (
                naming::day_title(season, week, weekday, is_last_trinity),
                None,
                ordinary_collect_key(season, week, &feasts),
            )
        }
    };

    tracing::trace!(%date, %season, week, %collect_key, "Resolved liturgical day");

    Ok(LiturgicalDay {
        date,
        season,
        week_of_season: week,
        weekday,
        name,
        is_holy_day: holy_day.is_some(),
        holy_day,
        collect_key,
        is_sunday,
        psalter_day,
    })
}
