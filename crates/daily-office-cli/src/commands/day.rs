//! `day`: the liturgical identity of a date.

use clap::Args;
use tracing::{debug, error};

use daily_office_core::{resolve_liturgical_day, LiturgicalDay};

use super::{print_json, DateArgs};
use crate::error::{exit_code_for_error, CliResult};

#[derive(Args, Debug)]
pub struct DayArgs {
    #[command(flatten)]
    pub date: DateArgs,
}

pub fn build_report(args: &DayArgs) -> CliResult<LiturgicalDay> {
    let date = args.date.resolve();
    let day = resolve_liturgical_day(date)?;
    debug!(%date, name = %day.name, collect = %day.collect_key, "Resolved liturgical day");
    Ok(day)
}

pub fn handle_day(args: DayArgs) -> i32 {
    match build_report(&args).and_then(|day| print_json(&day)) {
        Ok(()) => 0,
        Err(e) => {
            error!("day failed: {}", e);
            exit_code_for_error(&e).into()
        }
    }
}
