//! Lectionary resolution: which scripture passages are read at a session.
//!
//! Three plans are shipped, each addressed differently:
//!
//! | plan | scheme | key |
//! |------|--------|-----|
//! | `bcp-civil` | civil calendar | `"MM-DD"` |
//! | `bcp-liturgical` | liturgical calendar | `"advent-2"`, `"trinity-4-wednesday"`, ... |
//! | `whole-bible` | sequential | plan day number |
//!
//! Liturgical keys fall back to the holy-day table when the regular table has
//! no entry.
//!
//! Plan tables are external JSON prepared ahead of time. They are loaded
//! through a [`TableSource`] at most once per [`LectionaryResolver`] and
//! kept in its [`TableCache`].
//!
//! # Failure policy
//!
//! A date the table has nothing for resolves to empty readings. A table that
//! cannot be read or whose top level has the wrong shape is a
//! [`LectionaryError`](crate::error::LectionaryError), and that same error is
//! returned to every caller of the plan from then on.

mod cache;
mod keys;
mod plan;
mod resolver;
mod source;
mod tables;
mod types;

pub use cache::TableCache;
pub use keys::{civil_key, liturgical_key, sequential_day_for_date};
pub use plan::{AddressingScheme, PlanAnchor, PlanId, PlanProgress};
pub use resolver::LectionaryResolver;
pub use source::{JsonDirSource, MemorySource, TableSource};
pub use tables::{
    CivilDay, CivilTable, FixedEntry, LessonPair, LiturgicalTable, PlanTable, RegularEntry,
    SequentialDay, SequentialTable,
};
pub use types::{DailyReadings, ReadingChoice, ReadingRef};
