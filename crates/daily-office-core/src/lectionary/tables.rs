//! In-memory shapes of the externally prepared plan tables.
//!
//! Tables are parsed once at load. A table whose top level has the wrong shape
//! fails the load; an individual entry that does not parse is skipped with a
//! warning so that the day it belongs to resolves to empty readings.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::plan::{AddressingScheme, PlanId};
use super::types::{one_or_many, DailyReadings, ReadingChoice, ReadingRef};
use crate::error::{LectionaryError, LectionaryResult};
use crate::session::Session;

// =============================================================================
// Civil calendar
// =============================================================================

/// Morning and evening lessons for one civil date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDay {
    #[serde(default)]
    pub morning: DailyReadings,
    #[serde(default)]
    pub evening: DailyReadings,
}

impl CivilDay {
    pub fn session(&self, session: Session) -> &DailyReadings {
        match session {
            Session::Morning => &self.morning,
            Session::Evening => &self.evening,
        }
    }
}

/// `"MM-DD"` → lessons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CivilTable {
    pub days: HashMap<String, CivilDay>,
}

// =============================================================================
// Liturgical calendar
// =============================================================================

/// First and second lessons, each with a primary and optional alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPair {
    #[serde(default)]
    pub first: Option<ReadingChoice>,
    #[serde(default)]
    pub second: Option<ReadingChoice>,
}

impl LessonPair {
    /// The primary readings only.
    pub fn primary(&self) -> DailyReadings {
        let primary = |choice: &Option<ReadingChoice>| {
            choice.as_ref().map(|c| c.primary.clone()).unwrap_or_default()
        };
        DailyReadings {
            first: primary(&self.first),
            second: primary(&self.second),
        }
    }
}

/// Lessons for an ordinary liturgical key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularEntry {
    #[serde(default)]
    pub morning: Option<LessonPair>,
    #[serde(default)]
    pub evening: Option<LessonPair>,
}

impl RegularEntry {
    pub fn session(&self, session: Session) -> Option<&LessonPair> {
        match session {
            Session::Morning => self.morning.as_ref(),
            Session::Evening => self.evening.as_ref(),
        }
    }
}

/// Proper lessons for a holy day, keyed by its collect key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedEntry {
    #[serde(default)]
    pub first_evensong: Option<LessonPair>,
    #[serde(default)]
    pub morning: Option<LessonPair>,
    #[serde(default)]
    pub second_evensong: Option<LessonPair>,
}

impl FixedEntry {
    /// Morning lessons in the morning; the feast's own (second) evensong in
    /// the evening.
    pub fn session(&self, session: Session) -> Option<&LessonPair> {
        match session {
            Session::Morning => self.morning.as_ref(),
            Session::Evening => self.second_evensong.as_ref(),
        }
    }
}

/// `regular` and `fixed` sub-tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiturgicalTable {
    pub regular: HashMap<String, RegularEntry>,
    pub fixed: HashMap<String, FixedEntry>,
}

// =============================================================================
// Sequential
// =============================================================================

/// One entry of a sequential plan.
///
/// `first` and `second` are shared by both sessions; a `morning` or `evening`
/// block replaces them for that session alone, so an entry may split one
/// session and share nothing. Unrecognised keys reject the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequentialDay {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<DailyReadings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<DailyReadings>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub first: Vec<ReadingRef>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub second: Vec<ReadingRef>,
}

impl SequentialDay {
    pub fn session(&self, session: Session) -> DailyReadings {
        let split = match session {
            Session::Morning => self.morning.as_ref(),
            Session::Evening => self.evening.as_ref(),
        };
        match split {
            Some(readings) => readings.clone(),
            None => DailyReadings {
                first: self.first.clone(),
                second: self.second.clone(),
            },
        }
    }
}

/// Plan days in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequentialTable {
    pub days: Vec<SequentialDay>,
}

impl SequentialTable {
    /// Number of days in the plan (the highest day number).
    pub fn len(&self) -> u32 {
        self.days.iter().map(|d| d.day).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entry for `day`, indexing directly when the table is dense.
    pub fn day(&self, day: u32) -> Option<&SequentialDay> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        match self.days.get(index) {
            Some(entry) if entry.day == day => Some(entry),
            _ => self.days.iter().find(|entry| entry.day == day),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// A parsed plan table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanTable {
    Civil(CivilTable),
    Liturgical(LiturgicalTable),
    Sequential(SequentialTable),
}

impl PlanTable {
    /// Parse a table from JSON text, in the shape `plan` expects.
    pub fn parse(plan: PlanId, json: &str) -> LectionaryResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| parse_error(plan, e))?;
        Self::from_value(plan, value)
    }

    /// Build a table from an already-decoded JSON value.
    pub fn from_value(plan: PlanId, value: Value) -> LectionaryResult<Self> {
        match plan.scheme() {
            AddressingScheme::CivilCalendar => {
                let map = expect_object(plan, "root", value)?;
                Ok(PlanTable::Civil(CivilTable {
                    days: parse_entries(plan, "days", map),
                }))
            }
            AddressingScheme::LiturgicalCalendar => {
                let mut root = expect_object(plan, "root", value)?;
                let mut section = |name: &str| -> LectionaryResult<Map<String, Value>> {
                    match root.remove(name) {
                        Some(v) => expect_object(plan, name, v),
                        None => Ok(Map::new()),
                    }
                };
                let regular = section("regular")?;
                let fixed = section("fixed")?;
                Ok(PlanTable::Liturgical(LiturgicalTable {
                    regular: parse_entries(plan, "regular", regular),
                    fixed: parse_entries(plan, "fixed", fixed),
                }))
            }
            AddressingScheme::Sequential => {
                let Value::Array(items) = value else {
                    return Err(LectionaryError::TableParse {
                        plan: plan.to_string(),
                        message: "expected a JSON array of plan days".into(),
                    });
                };
                let mut days: Vec<SequentialDay> = items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        parse_entry(plan, "days", &index.to_string(), item)
                    })
                    .collect();
                days.sort_by_key(|d| d.day);
                Ok(PlanTable::Sequential(SequentialTable { days }))
            }
        }
    }

    /// Number of entries, for logging.
    pub fn entry_count(&self) -> usize {
        match self {
            PlanTable::Civil(t) => t.days.len(),
            PlanTable::Liturgical(t) => t.regular.len() + t.fixed.len(),
            PlanTable::Sequential(t) => t.days.len(),
        }
    }
}

fn parse_error(plan: PlanId, err: impl std::fmt::Display) -> LectionaryError {
    LectionaryError::TableParse {
        plan: plan.to_string(),
        message: err.to_string(),
    }
}

fn expect_object(
    plan: PlanId,
    section: &str,
    value: Value,
) -> LectionaryResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(parse_error(
            plan,
            format!("expected '{section}' to be an object, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_entry<T: DeserializeOwned>(
    plan: PlanId,
    section: &str,
    key: &str,
    value: Value,
) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(error) => {
            tracing::warn!(%plan, section, key, %error, "Skipping malformed lectionary entry");
            None
        }
    }
}

fn parse_entries<T: DeserializeOwned>(
    plan: PlanId,
    section: &str,
    map: Map<String, Value>,
) -> HashMap<String, T> {
    map.into_iter()
        .filter_map(|(key, value)| {
            let entry = parse_entry(plan, section, &key, value)?;
            Some((key, entry))
        })
        .collect()
}
