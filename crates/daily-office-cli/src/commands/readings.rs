//! `readings`: lessons appointed for a session under a reading plan.
//!
//! For the sequential plan the day can be given directly (`--plan-day`) or
//! derived from the date the reader started (`--start`). With neither, the
//! day of the year is used.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tracing::{error, info};

use daily_office_core::lectionary::PlanTable;
use daily_office_core::{
    DailyReadings, LectionaryResolver, OfficeConfig, PlanAnchor, PlanId, PlanProgress, Session,
    TableSource,
};

use super::{print_json, DateArgs};
use crate::error::{exit_code_for_error, CliError, CliResult};

#[derive(Args, Debug)]
pub struct ReadingsArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// morning or evening
    #[arg(short, long)]
    pub session: Session,

    /// bcp-civil, bcp-liturgical or whole-bible; defaults to the configured plan
    #[arg(short, long)]
    pub plan: Option<PlanId>,

    /// Day of a sequential plan to read
    #[arg(long, conflicts_with = "start")]
    pub plan_day: Option<u32>,

    /// Date a sequential plan was started (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ReadingsReport {
    pub date: NaiveDate,
    pub session: Session,
    pub plan: PlanId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<PlanProgress>,
    pub readings: DailyReadings,
}

pub async fn build_report<S: TableSource>(
    args: &ReadingsArgs,
    default_plan: PlanId,
    resolver: &LectionaryResolver<S>,
) -> CliResult<ReadingsReport> {
    let date = args.date.resolve();
    let plan = args.plan.unwrap_or(default_plan);

    if args.plan_day == Some(0) {
        return Err(CliError::InvalidArgument("--plan-day starts at 1".into()));
    }

    let (plan_day, progress) = match args.start {
        Some(start) => {
            let table = resolver.table(plan).await?;
            let PlanTable::Sequential(sequential) = table.as_ref() else {
                return Err(CliError::InvalidArgument(format!(
                    "--start only applies to a sequential plan, not {plan}"
                )));
            };
            let progress = PlanAnchor::new(start).progress(date, sequential.len());
            let plan_day = match progress {
                PlanProgress::Active { day } => Some(day),
                _ => None,
            };
            (plan_day, Some(progress))
        }
        None => (args.plan_day, None),
    };

    let readings = match progress {
        Some(PlanProgress::NotStarted { .. }) | Some(PlanProgress::Complete) => {
            info!(%plan, ?progress, "Plan not active on this date");
            DailyReadings::empty()
        }
        _ => {
            resolver
                .resolve_readings(date, args.session, plan, None, plan_day)
                .await?
        }
    };

    Ok(ReadingsReport {
        date,
        session: args.session,
        plan,
        plan_day,
        progress,
        readings,
    })
}

pub async fn handle_readings(args: ReadingsArgs, config: &OfficeConfig) -> i32 {
    let resolver = LectionaryResolver::new(config.lectionary.table_source());
    let result = build_report(&args, config.lectionary.default_plan, &resolver).await;

    match result.and_then(|report| print_json(&report)) {
        Ok(()) => 0,
        Err(e) => {
            error!("readings failed: {}", e);
            exit_code_for_error(&e).into()
        }
    }
}
