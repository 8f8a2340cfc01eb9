//! `psalms`: the psalter appointed for a session.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tracing::error;

use daily_office_core::psalter::psalter_day_number;
use daily_office_core::{appointed_psalms, should_omit_venite, PsalmPortion, Session};

use super::{print_json, DateArgs};
use crate::error::{exit_code_for_error, CliResult};

#[derive(Args, Debug)]
pub struct PsalmsArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// morning or evening
    #[arg(short, long)]
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct PsalmsReport {
    pub date: NaiveDate,
    pub session: Session,
    pub psalter_day: u8,
    /// Venite is said only when it is not already among the psalms
    pub omit_venite: bool,
    pub psalms: Vec<PsalmPortion>,
}

pub fn build_report(args: &PsalmsArgs) -> PsalmsReport {
    let date = args.date.resolve();
    PsalmsReport {
        date,
        session: args.session,
        psalter_day: psalter_day_number(date),
        omit_venite: args.session == Session::Morning && should_omit_venite(date),
        psalms: appointed_psalms(date, args.session),
    }
}

pub fn handle_psalms(args: PsalmsArgs) -> i32 {
    let result: CliResult<()> = print_json(&build_report(&args));
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("psalms failed: {}", e);
            exit_code_for_error(&e).into()
        }
    }
}
