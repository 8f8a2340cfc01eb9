//! Calendar and lectionary engine for the 1662 Book of Common Prayer daily
//! office.
//!
//! Given a civil date, the engine works out its liturgical identity (season,
//! week, title, holy day, collect) and the psalms and lessons appointed for
//! morning and evening prayer.
//!
//! # Modules
//!
//! - [`calendar`]: Easter, Advent Sunday, the moveable feasts and seasons
//! - [`psalter`]: the thirty-day psalter cycle and the division of Psalm 119
//! - [`liturgical`]: holy days, precedence and day names
//! - [`lectionary`]: plan tables and reading resolution
//! - [`config`]: layered configuration
//! - [`error`]: error types and result aliases
//!
//! Data flows one way:
//! date → moveable feasts → season → liturgical day → lectionary key → readings.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_office_core::{psalms_for_day, resolve_liturgical_day, LiturgicalSeason, Session};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 12, 9).unwrap();
//! let day = resolve_liturgical_day(date).unwrap();
//! assert_eq!(day.season, LiturgicalSeason::Advent);
//! assert_eq!(day.name, "Tuesday after the Second Sunday in Advent");
//! assert_eq!(psalms_for_day(date, Session::Morning), &[44, 45, 46]);
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod lectionary;
pub mod liturgical;
pub mod psalter;
mod session;

pub use calendar::{
    compute_advent_sunday, compute_easter, compute_moveable_feasts, determine_season,
    LiturgicalSeason, MoveableFeasts,
};
pub use config::{LectionaryConfig, LogFormat, LoggingConfig, OfficeConfig};
pub use error::{
    CalendarError, CalendarResult, ConfigError, ConfigResult, LectionaryError, LectionaryResult,
};
pub use lectionary::{
    DailyReadings, JsonDirSource, LectionaryResolver, MemorySource, PlanAnchor, PlanId,
    PlanProgress, ReadingRef, TableSource,
};
pub use liturgical::{resolve_liturgical_day, HolyDay, HolyDayRank, LiturgicalDay};
pub use psalter::{
    appointed_psalms, psalm_119_division, psalms_for_day, should_omit_venite, PsalmPortion,
    VerseRange,
};
pub use session::Session;
