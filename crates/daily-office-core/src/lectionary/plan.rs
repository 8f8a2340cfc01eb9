//! Reading plans and plan-day arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LectionaryError;

/// How a plan addresses its readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingScheme {
    /// Keyed by civil month and day (`"MM-DD"`).
    CivilCalendar,
    /// Keyed by the liturgical day, with a holy-day fallback table.
    LiturgicalCalendar,
    /// Keyed by a sequential day number from the plan's start.
    Sequential,
}

/// The shipped reading plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    /// The 1662 calendar of lessons, fixed to the civil date.
    BcpCivil,
    /// Proper lessons for Sundays, seasons and holy days.
    BcpLiturgical,
    /// The whole Bible read through in sequence.
    WholeBible,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::BcpCivil, PlanId::BcpLiturgical, PlanId::WholeBible];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::BcpCivil => "bcp-civil",
            PlanId::BcpLiturgical => "bcp-liturgical",
            PlanId::WholeBible => "whole-bible",
        }
    }

    pub fn scheme(&self) -> AddressingScheme {
        match self {
            PlanId::BcpCivil => AddressingScheme::CivilCalendar,
            PlanId::BcpLiturgical => AddressingScheme::LiturgicalCalendar,
            PlanId::WholeBible => AddressingScheme::Sequential,
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = LectionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanId::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| LectionaryError::UnknownPlan(s.to_string()))
    }
}

/// Where a reader is in a sequential plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum PlanProgress {
    NotStarted { starts_in_days: i64 },
    Active { day: u32 },
    Complete,
}

/// The date a reader began a sequential plan.
///
/// Day 1 is the start date itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAnchor {
    pub start: NaiveDate,
}

impl PlanAnchor {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Plan day for `date`; zero or negative before the start.
    pub fn plan_day(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days() + 1
    }

    /// Date on which `plan_day` falls. Inverse of [`PlanAnchor::plan_day`].
    ///
    /// `None` when the date is not representable.
    pub fn date_for_plan_day(&self, plan_day: i64) -> Option<NaiveDate> {
        let offset = plan_day.checked_sub(1).and_then(Duration::try_days)?;
        self.start.checked_add_signed(offset)
    }

    /// Progress on `date` through a plan of `total_days` days.
    pub fn progress(&self, date: NaiveDate, total_days: u32) -> PlanProgress {
        let day = self.plan_day(date);
        if day < 1 {
            PlanProgress::NotStarted { starts_in_days: 1 - day }
        } else if day > i64::from(total_days) {
            PlanProgress::Complete
        } else {
            PlanProgress::Active { day: day as u32 }
        }
    }
}
