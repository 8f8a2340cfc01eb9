//! CLI command handlers
//!
//! # Modules
//!
//! - `day`: liturgical identity of a date
//! - `psalms`: psalms appointed for a session
//! - `readings`: lessons appointed for a session under a plan
//!
//! Each handler builds a serialisable report and prints it as JSON on
//! stdout. Logs go to stderr.

pub mod day;
pub mod psalms;
pub mod readings;

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use crate::error::CliResult;

/// Date selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct DateArgs {
    /// Date to resolve (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

impl DateArgs {
    /// The requested date, or today's local date.
    pub fn resolve(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Print `report` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(report)?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_date_wins() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let args = DateArgs { date: Some(date) };
        assert_eq!(args.resolve(), date);
    }

    #[test]
    fn test_default_is_today() {
        let today = Local::now().date_naive();
        let resolved = DateArgs::default().resolve();
        // Allow for the clock crossing midnight between the two reads.
        assert!(resolved == today || resolved == today.succ_opt().unwrap());
    }
}
