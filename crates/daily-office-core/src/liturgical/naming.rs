//! Week-of-season arithmetic, ordinary-day titles and collect keys.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::calendar::{LiturgicalSeason, MoveableFeasts};

/// Collect of the Sunday next before Advent, used whatever that Sunday's number.
pub const SUNDAY_NEXT_BEFORE_ADVENT_KEY: &str = "trinity-25";

/// Sundays in the half-open range `(anchor, date]`.
pub(crate) fn sundays_since(anchor: NaiveDate, date: NaiveDate) -> u32 {
    let to_sunday = 7 - i64::from(anchor.weekday().num_days_from_sunday());
    match anchor.checked_add_signed(Duration::days(to_sunday)) {
        Some(first_sunday) if date >= first_sunday => {
            ((date - first_sunday).num_days() / 7 + 1) as u32
        }
        _ => 0,
    }
}

fn whole_weeks(from: NaiveDate, date: NaiveDate) -> u32 {
    ((date - from).num_days().max(0) / 7) as u32
}

/// Christmas Day that opened the Christmas season containing `date`.
fn season_christmas(date: NaiveDate) -> NaiveDate {
    let year = if date.month() == 12 {
        date.year()
    } else {
        date.year() - 1
    };
    // Only missing before the first year chrono can represent.
    NaiveDate::from_ymd_opt(year, 12, 25).unwrap_or(date)
}

/// Week number of `date` within `season`.
///
/// Advent counts from 1; every other season counts from 0, where 0 is the
/// stretch before the season's first ordinary Sunday (or the feast week that
/// opens it).
pub fn week_of_season(date: NaiveDate, season: LiturgicalSeason, feasts: &MoveableFeasts) -> u32 {
    match season {
        LiturgicalSeason::Advent => whole_weeks(feasts.advent_sunday, date) + 1,
        LiturgicalSeason::Christmas => sundays_since(season_christmas(date), date),
        LiturgicalSeason::Epiphany => sundays_since(feasts.epiphany, date),
        LiturgicalSeason::PreLent => whole_weeks(feasts.septuagesima, date),
        LiturgicalSeason::Lent => sundays_since(feasts.ash_wednesday, date),
        LiturgicalSeason::HolyWeek | LiturgicalSeason::Whitsun => 0,
        LiturgicalSeason::Easter => whole_weeks(feasts.easter_day, date),
        LiturgicalSeason::Ascension => sundays_since(feasts.ascension_day, date),
        LiturgicalSeason::Trinity => whole_weeks(feasts.trinity_sunday, date),
    }
}

/// Number of the last Sunday after Trinity (the Sunday next before Advent).
pub fn last_trinity_week(feasts: &MoveableFeasts) -> u32 {
    whole_weeks(feasts.trinity_sunday, feasts.advent_sunday - Duration::days(7))
}

/// Collect key for a day that is not a holy day.
///
/// The Sunday next before Advent always takes [`SUNDAY_NEXT_BEFORE_ADVENT_KEY`].
/// When Trinity runs past 25 Sundays, the extra Sundays borrow the collects of
/// the Sundays after the Epiphany that were omitted earlier in the year,
/// counted back from the sixth.
pub fn ordinary_collect_key(
    season: LiturgicalSeason,
    week: u32,
    feasts: &MoveableFeasts,
) -> String {
    if season == LiturgicalSeason::Trinity {
        let last = last_trinity_week(feasts);
        if week == last {
            return SUNDAY_NEXT_BEFORE_ADVENT_KEY.to_string();
        }
        if week >= 25 && week < last {
            return format!("epiphany-{}", 6 - (last - 1 - week));
        }
    }
    format!("{}-{}", season.as_str(), week)
}

const ORDINALS: [&str; 27] = [
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
    "Twentieth",
    "Twenty-first",
    "Twenty-second",
    "Twenty-third",
    "Twenty-fourth",
    "Twenty-fifth",
    "Twenty-sixth",
    "Twenty-seventh",
];

fn ordinal(n: u32) -> String {
    match n.checked_sub(1).and_then(|i| ORDINALS.get(i as usize)) {
        Some(word) => (*word).to_string(),
        None => format!("{n}th"),
    }
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Prayer Book title of the Sunday that opens `week` of `season`.
pub fn sunday_title(season: LiturgicalSeason, week: u32, is_last_trinity: bool) -> String {
    use LiturgicalSeason::*;

    match (season, week) {
        (Advent, w) => format!("{} Sunday in Advent", ordinal(w)),
        (Christmas, 0) => "Christmas Day".to_string(),
        (Christmas, 1) => "Sunday after Christmas Day".to_string(),
        (Christmas, w) => format!("{} Sunday after Christmas Day", ordinal(w)),
        (Epiphany, 0) => "The Epiphany".to_string(),
        (Epiphany, w) => format!("{} Sunday after the Epiphany", ordinal(w)),
        (PreLent, 0) => "Septuagesima Sunday".to_string(),
        (PreLent, 1) => "Sexagesima Sunday".to_string(),
        (PreLent, _) => "Quinquagesima Sunday".to_string(),
        (Lent, 0) => "Ash Wednesday".to_string(),
        (Lent, w) => format!("{} Sunday in Lent", ordinal(w)),
        (HolyWeek, _) => "Palm Sunday".to_string(),
        (Easter, 0) => "Easter Day".to_string(),
        (Easter, w) => format!("{} Sunday after Easter", ordinal(w)),
        (Ascension, 0) => "Ascension Day".to_string(),
        (Ascension, _) => "Sunday after Ascension Day".to_string(),
        (Whitsun, _) => "Whitsunday".to_string(),
        (Trinity, 0) => "Trinity Sunday".to_string(),
        (Trinity, _) if is_last_trinity => "Sunday next before Advent".to_string(),
        (Trinity, w) => format!("{} Sunday after Trinity", ordinal(w)),
    }
}

/// Title of an ordinary day: the Sunday title, or a weekday named from it.
pub fn day_title(
    season: LiturgicalSeason,
    week: u32,
    weekday: Weekday,
    is_last_trinity: bool,
) -> String {
    use LiturgicalSeason::*;

    if weekday == Weekday::Sun {
        return sunday_title(season, week, is_last_trinity);
    }

    let day = weekday_name(weekday);
    match (season, week) {
        (HolyWeek, _) if weekday == Weekday::Sat => "Easter Even".to_string(),
        (HolyWeek, _) => format!("{day} before Easter"),
        (Easter, 0) => format!("{day} in Easter Week"),
        (Whitsun, _) => format!("{day} in Whitsun Week"),
        (Epiphany, 0) => format!("{day} after the Epiphany"),
        // Feast-opened weeks and the pre-Lent Sundays are proper names.
        (Christmas, 0) | (Lent, 0) | (Ascension, 0) | (Trinity, 0) | (PreLent, _) => {
            format!("{day} after {}", sunday_title(season, week, false))
        }
        _ => format!("{day} after the {}", sunday_title(season, week, is_last_trinity)),
    }
}
