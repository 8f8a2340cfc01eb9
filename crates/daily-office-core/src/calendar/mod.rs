//! The 1662 calendar: moveable feasts and liturgical seasons.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_office_core::calendar::{compute_moveable_feasts, determine_season, LiturgicalSeason};
//!
//! let feasts = compute_moveable_feasts(2025).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
//! assert_eq!(determine_season(date, &feasts), LiturgicalSeason::Lent);
//! ```

mod feasts;
mod season;

pub use feasts::{
    compute_advent_sunday, compute_easter, compute_moveable_feasts, offsets, MoveableFeasts,
};
pub use season::{determine_season, LiturgicalSeason, SeasonRule, SEASON_RULES};

/// Gregorian leap year rule, applied proleptically to every year.
pub fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}
