//! Static holy-day tables.
//!
//! Fixed holy days keep the same month and day every year. Moveable holy days
//! are read off the year's [`MoveableFeasts`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{is_leap_year, MoveableFeasts};

/// Precedence rank of a holy day. Ordered so that `Principal > Major > Minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolyDayRank {
    Minor,
    Major,
    Principal,
}

/// A holy day with a constant month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHolyDay {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
    pub rank: HolyDayRank,
    pub collect_key: &'static str,
}

const fn fixed(
    month: u32,
    day: u32,
    name: &'static str,
    rank: HolyDayRank,
    collect_key: &'static str,
) -> FixedHolyDay {
    FixedHolyDay { month, day, name, rank, collect_key }
}

use HolyDayRank::{Major, Minor, Principal};

/// The red-letter days of the Prayer Book calendar.
pub const FIXED_HOLY_DAYS: [FixedHolyDay; 24] = [
    fixed(1, 1, "The Circumcision of Christ", Major, "circumcision"),
    fixed(1, 6, "The Epiphany", Principal, "epiphany"),
    fixed(1, 25, "The Conversion of Saint Paul", Minor, "conversion-of-st-paul"),
    fixed(2, 2, "The Purification of Saint Mary the Virgin", Major, "purification"),
    fixed(2, 24, "Saint Matthias the Apostle", Minor, "st-matthias"),
    fixed(3, 25, "The Annunciation of the Blessed Virgin Mary", Major, "annunciation"),
    fixed(4, 25, "Saint Mark the Evangelist", Minor, "st-mark"),
    fixed(5, 1, "Saint Philip and Saint James, Apostles", Minor, "st-philip-and-st-james"),
    fixed(6, 11, "Saint Barnabas the Apostle", Minor, "st-barnabas"),
    fixed(6, 24, "The Nativity of Saint John Baptist", Major, "nativity-of-st-john-baptist"),
    fixed(6, 29, "Saint Peter the Apostle", Minor, "st-peter"),
    fixed(7, 25, "Saint James the Apostle", Minor, "st-james"),
    fixed(8, 24, "Saint Bartholomew the Apostle", Minor, "st-bartholomew"),
    fixed(9, 21, "Saint Matthew the Apostle", Minor, "st-matthew"),
    fixed(9, 29, "Saint Michael and All Angels", Major, "st-michael-and-all-angels"),
    fixed(10, 18, "Saint Luke the Evangelist", Minor, "st-luke"),
    fixed(10, 28, "Saint Simon and Saint Jude, Apostles", Minor, "st-simon-and-st-jude"),
    fixed(11, 1, "All Saints' Day", Major, "all-saints"),
    fixed(11, 30, "Saint Andrew the Apostle", Minor, "st-andrew"),
    fixed(12, 21, "Saint Thomas the Apostle", Minor, "st-thomas"),
    fixed(12, 25, "Christmas Day", Principal, "christmas-day"),
    fixed(12, 26, "Saint Stephen the First Martyr", Minor, "st-stephen"),
    fixed(12, 27, "Saint John the Evangelist", Minor, "st-john-evangelist"),
    fixed(12, 28, "The Holy Innocents", Minor, "holy-innocents"),
];

/// Fixed holy day observed on `(year, month, day)`.
///
/// In a leap year Saint Matthias moves from 24 to 25 February.
pub fn fixed_holy_day(year: i32, month: u32, day: u32) -> Option<&'static FixedHolyDay> {
    let (month, day) = if month == 2 && is_leap_year(year) {
        match day {
            24 => return None,
            25 => (2, 24),
            other => (2, other),
        }
    } else {
        (month, day)
    };

    FIXED_HOLY_DAYS
        .iter()
        .find(|h| h.month == month && h.day == day)
}

/// A holy day whose date is read from the year's moveable feasts.
#[derive(Clone, Copy)]
pub struct MoveableHolyDay {
    pub name: &'static str,
    pub rank: HolyDayRank,
    pub collect_key: &'static str,
    pub date: fn(&MoveableFeasts) -> NaiveDate,
}

impl std::fmt::Debug for MoveableHolyDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveableHolyDay")
            .field("name", &self.name)
            .field("rank", &self.rank)
            .field("collect_key", &self.collect_key)
            .finish()
    }
}

/// Moveable holy days that displace the ordinary day.
pub const MOVEABLE_HOLY_DAYS: [MoveableHolyDay; 7] = [
    MoveableHolyDay {
        name: "Ash Wednesday",
        rank: Principal,
        collect_key: "ash-wednesday",
        date: |f| f.ash_wednesday,
    },
    MoveableHolyDay {
        name: "Palm Sunday",
        rank: Major,
        collect_key: "palm-sunday",
        date: |f| f.palm_sunday,
    },
    MoveableHolyDay {
        name: "Good Friday",
        rank: Principal,
        collect_key: "good-friday",
        date: |f| f.good_friday,
    },
    MoveableHolyDay {
        name: "Easter Day",
        rank: Principal,
        collect_key: "easter-day",
        date: |f| f.easter_day,
    },
    MoveableHolyDay {
        name: "Ascension Day",
        rank: Principal,
        collect_key: "ascension-day",
        date: |f| f.ascension_day,
    },
    MoveableHolyDay {
        name: "Whitsunday",
        rank: Principal,
        collect_key: "whitsunday",
        date: |f| f.whitsunday,
    },
    MoveableHolyDay {
        name: "Trinity Sunday",
        rank: Principal,
        collect_key: "trinity-sunday",
        date: |f| f.trinity_sunday,
    },
];

/// Moveable holy day falling exactly on `date`.
pub fn moveable_holy_day(
    date: NaiveDate,
    feasts: &MoveableFeasts,
) -> Option<&'static MoveableHolyDay> {
    MOVEABLE_HOLY_DAYS.iter().find(|h| (h.date)(feasts) == date)
}
