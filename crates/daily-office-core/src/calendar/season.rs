//! Liturgical seasons and the ordered rules that assign them.
//!
//! ```text
//! Advent     Advent Sunday .. 24 Dec
//! Christmas  25 Dec .. 31 Dec, and 1 Jan .. 5 Jan
//! Epiphany   6 Jan .. day before Septuagesima
//! Pre-Lent   Septuagesima .. day before Ash Wednesday
//! Lent       Ash Wednesday .. day before Palm Sunday
//! Holy Week  Palm Sunday .. Easter Even
//! Easter     Easter Day .. day before Ascension Day
//! Ascension  Ascension Day .. day before Whitsunday
//! Whitsun    Whitsunday .. day before Trinity Sunday
//! Trinity    Trinity Sunday .. day before Advent Sunday
//! ```
//!
//! A date is always judged against the feasts of its own civil year.
//! Septuagesima never falls before 18 January, so every January date from the
//! 6th onward sits in the same year's Epiphany season.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::MoveableFeasts;

/// One of the ten seasons of the Prayer Book year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiturgicalSeason {
    Advent,
    Christmas,
    Epiphany,
    PreLent,
    Lent,
    HolyWeek,
    Easter,
    Ascension,
    Whitsun,
    Trinity,
}

impl LiturgicalSeason {
    /// All seasons in calendar order starting from Advent.
    pub const ALL: [LiturgicalSeason; 10] = [
        LiturgicalSeason::Advent,
        LiturgicalSeason::Christmas,
        LiturgicalSeason::Epiphany,
        LiturgicalSeason::PreLent,
        LiturgicalSeason::Lent,
        LiturgicalSeason::HolyWeek,
        LiturgicalSeason::Easter,
        LiturgicalSeason::Ascension,
        LiturgicalSeason::Whitsun,
        LiturgicalSeason::Trinity,
    ];

    /// Stable kebab-case tag, used in collect and lectionary keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "advent",
            LiturgicalSeason::Christmas => "christmas",
            LiturgicalSeason::Epiphany => "epiphany",
            LiturgicalSeason::PreLent => "pre-lent",
            LiturgicalSeason::Lent => "lent",
            LiturgicalSeason::HolyWeek => "holy-week",
            LiturgicalSeason::Easter => "easter",
            LiturgicalSeason::Ascension => "ascension",
            LiturgicalSeason::Whitsun => "whitsun",
            LiturgicalSeason::Trinity => "trinity",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            LiturgicalSeason::Advent => "Advent",
            LiturgicalSeason::Christmas => "Christmas",
            LiturgicalSeason::Epiphany => "Epiphany",
            LiturgicalSeason::PreLent => "Pre-Lent",
            LiturgicalSeason::Lent => "Lent",
            LiturgicalSeason::HolyWeek => "Holy Week",
            LiturgicalSeason::Easter => "Easter",
            LiturgicalSeason::Ascension => "Ascension",
            LiturgicalSeason::Whitsun => "Whitsun",
            LiturgicalSeason::Trinity => "Trinity",
        }
    }
}

impl fmt::Display for LiturgicalSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive date range, bounded by feasts, that maps to a season.
#[derive(Clone, Copy)]
pub struct SeasonRule {
    pub season: LiturgicalSeason,
    pub start: fn(&MoveableFeasts) -> NaiveDate,
    pub end: fn(&MoveableFeasts) -> NaiveDate,
}

impl SeasonRule {
    /// Whether `date` falls inside this rule's range for the given year.
    pub fn contains(&self, date: NaiveDate, feasts: &MoveableFeasts) -> bool {
        (self.start)(feasts) <= date && date <= (self.end)(feasts)
    }
}

impl fmt::Debug for SeasonRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeasonRule")
            .field("season", &self.season)
            .finish_non_exhaustive()
    }
}

fn day_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

fn advent_sunday(f: &MoveableFeasts) -> NaiveDate {
    f.advent_sunday
}
fn christmas_eve(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.christmas_day)
}
fn christmas_day(f: &MoveableFeasts) -> NaiveDate {
    f.christmas_day
}
fn new_years_eve(f: &MoveableFeasts) -> NaiveDate {
    f.christmas_day + Duration::days(6)
}
fn new_years_day(f: &MoveableFeasts) -> NaiveDate {
    f.epiphany - Duration::days(5)
}
fn twelfth_night(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.epiphany)
}
fn epiphany(f: &MoveableFeasts) -> NaiveDate {
    f.epiphany
}
fn septuagesima(f: &MoveableFeasts) -> NaiveDate {
    f.septuagesima
}
fn before_septuagesima(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.septuagesima)
}
fn ash_wednesday(f: &MoveableFeasts) -> NaiveDate {
    f.ash_wednesday
}
fn before_ash_wednesday(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.ash_wednesday)
}
fn palm_sunday(f: &MoveableFeasts) -> NaiveDate {
    f.palm_sunday
}
fn before_palm_sunday(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.palm_sunday)
}
fn easter_day(f: &MoveableFeasts) -> NaiveDate {
    f.easter_day
}
fn easter_even(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.easter_day)
}
fn ascension_day(f: &MoveableFeasts) -> NaiveDate {
    f.ascension_day
}
fn before_ascension(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.ascension_day)
}
fn whitsunday(f: &MoveableFeasts) -> NaiveDate {
    f.whitsunday
}
fn before_whitsunday(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.whitsunday)
}
fn trinity_sunday(f: &MoveableFeasts) -> NaiveDate {
    f.trinity_sunday
}
fn before_trinity(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.trinity_sunday)
}
fn before_advent(f: &MoveableFeasts) -> NaiveDate {
    day_before(f.advent_sunday)
}

/// Season rules in evaluation order. First match wins.
pub const SEASON_RULES: [SeasonRule; 11] = [
    SeasonRule {
        season: LiturgicalSeason::Advent,
        start: advent_sunday,
        end: christmas_eve,
    },
    SeasonRule {
        season: LiturgicalSeason::Christmas,
        start: christmas_day,
        end: new_years_eve,
    },
    SeasonRule {
        season: LiturgicalSeason::Christmas,
        start: new_years_day,
        end: twelfth_night,
    },
    SeasonRule {
        season: LiturgicalSeason::Epiphany,
        start: epiphany,
        end: before_septuagesima,
    },
    SeasonRule {
        season: LiturgicalSeason::PreLent,
        start: septuagesima,
        end: before_ash_wednesday,
    },
    SeasonRule {
        season: LiturgicalSeason::Lent,
        start: ash_wednesday,
        end: before_palm_sunday,
    },
    SeasonRule {
        season: LiturgicalSeason::HolyWeek,
        start: palm_sunday,
        end: easter_even,
    },
    SeasonRule {
        season: LiturgicalSeason::Easter,
        start: easter_day,
        end: before_ascension,
    },
    SeasonRule {
        season: LiturgicalSeason::Ascension,
        start: ascension_day,
        end: before_whitsunday,
    },
    SeasonRule {
        season: LiturgicalSeason::Whitsun,
        start: whitsunday,
        end: before_trinity,
    },
    SeasonRule {
        season: LiturgicalSeason::Trinity,
        start: trinity_sunday,
        end: before_advent,
    },
];

/// Season of `date`, judged against `feasts` (the feasts of `date`'s year).
///
/// Falls back to Trinity if no rule matches; that only happens when `feasts`
/// belongs to a different year than `date`.
pub fn determine_season(date: NaiveDate, feasts: &MoveableFeasts) -> LiturgicalSeason {
    if let Some(rule) = SEASON_RULES.iter().find(|rule| rule.contains(date, feasts)) {
        return rule.season;
    }

    tracing::error!(
        %date,
        feast_year = feasts.year,
        "No season rule matched; falling back to Trinity"
    );
    debug_assert!(
        false,
        "no season rule matched {date} for feasts of {}",
        feasts.year
    );
    LiturgicalSeason::Trinity
}
