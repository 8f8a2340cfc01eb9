//! Lookup keys for the three addressing schemes.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{is_leap_year, LiturgicalSeason};
use crate::liturgical::LiturgicalDay;

/// Holy days whose lessons are filed under their own name rather than under
/// the season and week.
const NAMED_FEASTS: [&str; 10] = [
    "christmas-day",
    "circumcision",
    "epiphany",
    "ash-wednesday",
    "palm-sunday",
    "good-friday",
    "easter-day",
    "ascension-day",
    "whitsunday",
    "trinity-sunday",
];

/// Weekdays of feast weeks with their own proper lessons.
const NAMED_WEEKDAYS: [(LiturgicalSeason, Weekday, &str); 6] = [
    (LiturgicalSeason::HolyWeek, Weekday::Thu, "maundy-thursday"),
    (LiturgicalSeason::HolyWeek, Weekday::Sat, "easter-even"),
    (LiturgicalSeason::Easter, Weekday::Mon, "easter-monday"),
    (LiturgicalSeason::Easter, Weekday::Tue, "easter-tuesday"),
    (LiturgicalSeason::Whitsun, Weekday::Mon, "whit-monday"),
    (LiturgicalSeason::Whitsun, Weekday::Tue, "whit-tuesday"),
];

/// `"MM-DD"` key for the civil-calendar plan.
pub fn civil_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// Key into the liturgical plan's `regular` table.
///
/// Named feasts and feast-week weekdays use their own names. Otherwise
/// `"{season}-{week}"` on Sundays and `"{season}-{week}-{weekday}"` on other
/// days, e.g. `"trinity-4"` and `"trinity-4-wednesday"`.
pub fn liturgical_key(day: &LiturgicalDay) -> String {
    if day.is_holy_day && NAMED_FEASTS.contains(&day.collect_key.as_str()) {
        return day.collect_key.clone();
    }

    let feast_week = day.week_of_season == 0 || day.season == LiturgicalSeason::HolyWeek;
    if feast_week {
        if let Some((_, _, key)) = NAMED_WEEKDAYS
            .iter()
            .find(|(season, weekday, _)| *season == day.season && *weekday == day.weekday)
        {
            return (*key).to_string();
        }
    }

    let base = format!("{}-{}", day.season.as_str(), day.week_of_season);
    if day.is_sunday {
        base
    } else {
        let weekday = crate::liturgical::weekday_name(day.weekday).to_ascii_lowercase();
        format!("{base}-{weekday}")
    }
}

/// Day number for a sequential plan read without a start anchor: the day of
/// the year, with 29 February sharing 28 February's entry and the rest of a
/// leap year shifted back by one, clamped into `1..=max_day`.
pub fn sequential_day_for_date(date: NaiveDate, max_day: u32) -> u32 {
    let ordinal = date.ordinal();
    let day = if is_leap_year(date.year()) && ordinal >= 60 {
        // Ordinal 60 is 29 February itself.
        ordinal - 1
    } else {
        ordinal
    };
    day.clamp(1, max_day.max(1))
}
