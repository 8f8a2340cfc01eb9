//! Readings for a date, session and plan.

use std::sync::Arc;

use chrono::NaiveDate;

use super::cache::TableCache;
use super::keys::{civil_key, liturgical_key, sequential_day_for_date};
use super::plan::PlanId;
use super::source::TableSource;
use super::tables::{CivilTable, LiturgicalTable, PlanTable, SequentialTable};
use super::types::DailyReadings;
use crate::error::LectionaryResult;
use crate::liturgical::{resolve_liturgical_day, LiturgicalDay};
use crate::session::Session;

/// Resolves appointed readings against plan tables loaded from `S`.
///
/// Each resolver owns its own [`TableCache`]; two resolvers never share
/// loaded tables.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use daily_office_core::lectionary::{LectionaryResolver, MemorySource, PlanId};
/// use daily_office_core::Session;
/// use serde_json::json;
///
/// # tokio_test_block(async {
/// let source = MemorySource::new().with_table(
///     PlanId::BcpCivil,
///     json!({"01-01": {"morning": {"first": {
///         "book": "Genesis", "startChapter": 1, "endChapter": 1
///     }}}}),
/// );
/// let resolver = LectionaryResolver::new(source);
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let readings = resolver
///     .resolve_readings(date, Session::Morning, PlanId::BcpCivil, None, None)
///     .await
///     .unwrap();
/// assert_eq!(readings.first[0].to_string(), "Genesis 1");
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub struct LectionaryResolver<S: TableSource> {
    source: S,
    cache: TableCache,
}

impl<S: TableSource> LectionaryResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: TableCache::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// Table for `plan`, loading it on first use.
    pub async fn table(&self, plan: PlanId) -> LectionaryResult<Arc<PlanTable>> {
        self.cache
            .get_or_load(plan, || self.source.load(plan))
            .await
    }

    /// Readings appointed for `date` and `session` under `plan`.
    ///
    /// `liturgical_day` is used by the liturgical plan when supplied and
    /// resolved from `date` otherwise. `plan_day` selects the entry of a
    /// sequential plan directly; without it the day of the year is used.
    ///
    /// A date, key or plan day the table has no entry for yields empty
    /// readings. Only a failed table load (or an unsupported year) is an
    /// error.
    pub async fn resolve_readings(
        &self,
        date: NaiveDate,
        session: Session,
        plan: PlanId,
        liturgical_day: Option<&LiturgicalDay>,
        plan_day: Option<u32>,
    ) -> LectionaryResult<DailyReadings> {
        let table = self.table(plan).await?;

        let readings = match table.as_ref() {
            PlanTable::Civil(civil) => civil_readings(civil, date, session),
            PlanTable::Liturgical(liturgical) => {
                let resolved;
                let day = match liturgical_day {
                    Some(day) => day,
                    None => {
                        resolved = resolve_liturgical_day(date)?;
                        &resolved
                    }
                };
                liturgical_readings(liturgical, day, session)
            }
            PlanTable::Sequential(sequential) => {
                let day = plan_day
                    .unwrap_or_else(|| sequential_day_for_date(date, sequential.len()));
                sequential_readings(sequential, day, session)
            }
        };

        if readings.is_empty() {
            tracing::debug!(%plan, %date, %session, ?plan_day, "No readings appointed");
        }
        Ok(readings)
    }
}

fn civil_readings(table: &CivilTable, date: NaiveDate, session: Session) -> DailyReadings {
    let key = civil_key(date);
    match table.days.get(&key) {
        Some(day) => day.session(session).clone(),
        None => {
            tracing::debug!(key = %key, "Civil lectionary has no entry");
            DailyReadings::empty()
        }
    }
}

fn liturgical_readings(
    table: &LiturgicalTable,
    day: &LiturgicalDay,
    session: Session,
) -> DailyReadings {
    let key = liturgical_key(day);
    if let Some(pair) = table.regular.get(&key).and_then(|entry| entry.session(session)) {
        return pair.primary();
    }

    if day.is_holy_day {
        if let Some(pair) = table
            .fixed
            .get(&day.collect_key)
            .and_then(|entry| entry.session(session))
        {
            tracing::debug!(key = %key, collect_key = %day.collect_key, "Using holy-day lessons");
            return pair.primary();
        }
    }

    tracing::debug!(
        key = %key,
        collect_key = %day.collect_key,
        "Liturgical lectionary has no entry"
    );
    DailyReadings::empty()
}

fn sequential_readings(table: &SequentialTable, day: u32, session: Session) -> DailyReadings {
    match table.day(day) {
        Some(entry) => entry.session(session),
        None => {
            tracing::debug!(day, len = table.len(), "Plan day outside the sequential table");
            DailyReadings::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lectionary::MemorySource;
    use serde_json::{json, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chapter(book: &str, ch: u32) -> Value {
        json!({"book": book, "startChapter": ch, "endChapter": ch})
    }

    fn pair(book: &str, ch: u32) -> Value {
        json!({
            "first": {"primary": chapter(book, ch)},
            "second": {"primary": chapter("Matthew", ch)}
        })
    }

    fn liturgical_resolver() -> LectionaryResolver<MemorySource> {
        let table = json!({
            "regular": {
                "advent-2": {"morning": pair("Isaiah", 5)},
                "advent-2-tuesday": {"evening": pair("Isaiah", 6)},
                "christmas-day": {"morning": pair("Isaiah", 9)}
            },
            "fixed": {
                "st-andrew": {
                    "morning": pair("Isaiah", 54),
                    "secondEvensong": pair("Isaiah", 65)
                }
            }
        });
        LectionaryResolver::new(MemorySource::new().with_table(PlanId::BcpLiturgical, table))
    }

    #[tokio::test]
    async fn test_civil_lookup() {
        let source = MemorySource::new().with_table(
            PlanId::BcpCivil,
            json!({"12-09": {
                "morning": {"first": chapter("Isaiah", 26)},
                "evening": {"first": chapter("Isaiah", 27)}
            }}),
        );
        let resolver = LectionaryResolver::new(source);

        let evening = resolver
            .resolve_readings(date(2025, 12, 9), Session::Evening, PlanId::BcpCivil, None, None)
            .await
            .unwrap();
        assert_eq!(evening.first[0].start_chapter, 27);

        let missing = resolver
            .resolve_readings(date(2025, 12, 10), Session::Morning, PlanId::BcpCivil, None, None)
            .await
            .unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_liturgical_regular_lookup() {
        let resolver = liturgical_resolver();

        let sunday = resolver
            .resolve_readings(
                date(2025, 12, 7),
                Session::Morning,
                PlanId::BcpLiturgical,
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(sunday.first[0].start_chapter, 5);
        assert_eq!(sunday.second[0].book, "Matthew");

        let tuesday = resolver
            .resolve_readings(
                date(2025, 12, 9),
                Session::Evening,
                PlanId::BcpLiturgical,
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(tuesday.first[0].start_chapter, 6);

        let christmas = resolver
            .resolve_readings(
                date(2025, 12, 25),
                Session::Morning,
                PlanId::BcpLiturgical,
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(christmas.first[0].start_chapter, 9);
    }

    #[tokio::test]
    async fn test_liturgical_falls_back_to_holy_day_table() {
        let resolver = liturgical_resolver();
        // St Andrew 2026 falls on a Monday with no regular entry.
        let morning = resolver
            .resolve_readings(
                date(2026, 11, 30),
                Session::Morning,
                PlanId::BcpLiturgical,
                None,
                None,
            )
            .await
            .unwrap();
        let evening = resolver
            .resolve_readings(
                date(2026, 11, 30),
                Session::Evening,
                PlanId::BcpLiturgical,
                None,
                None,
            )
            .await
            .unwrap();
        assert_eq!(morning.first[0].start_chapter, 54);
        assert_eq!(evening.first[0].start_chapter, 65);
    }

    #[tokio::test]
    async fn test_liturgical_uses_supplied_day() {
        let resolver = liturgical_resolver();
        let advent_sunday = resolve_liturgical_day(date(2025, 12, 7)).unwrap();
        // The supplied day wins over the date argument.
        let readings = resolver
            .resolve_readings(
                date(2025, 6, 1),
                Session::Morning,
                PlanId::BcpLiturgical,
                Some(&advent_sunday),
                None,
            )
            .await
            .unwrap();
        assert_eq!(readings.first[0].start_chapter, 5);
    }

    #[tokio::test]
    async fn test_liturgical_missing_key_is_empty() {
        let resolver = liturgical_resolver();
        let readings = resolver
            .resolve_readings(date(2025, 7, 9), Session::Morning, PlanId::BcpLiturgical, None, None)
            .await
            .unwrap();
        assert!(readings.is_empty());
    }

    #[tokio::test]
    async fn test_sequential_lookup() {
        let source = MemorySource::new().with_table(
            PlanId::WholeBible,
            json!([
                {"day": 1, "first": chapter("Genesis", 1), "second": chapter("Matthew", 1)},
                {
                    "day": 2,
                    "morning": {"first": chapter("Genesis", 2)},
                    "evening": {"first": chapter("Genesis", 3)}
                }
            ]),
        );
        let resolver = LectionaryResolver::new(source);

        let day_two = resolver
            .resolve_readings(date(2025, 1, 1), Session::Evening, PlanId::WholeBible, None, Some(2))
            .await
            .unwrap();
        assert_eq!(day_two.first[0].start_chapter, 3);

        let past_end = resolver
            .resolve_readings(
                date(2025, 1, 1),
                Session::Morning,
                PlanId::WholeBible,
                None,
                Some(400),
            )
            .await
            .unwrap();
        assert!(past_end.is_empty());

        // Without a plan day, late dates clamp to the last entry.
        let clamped = resolver
            .resolve_readings(date(2025, 12, 31), Session::Morning, PlanId::WholeBible, None, None)
            .await
            .unwrap();
        assert_eq!(clamped.first[0].start_chapter, 2);
    }

    #[tokio::test]
    async fn test_liturgical_plan_outside_modern_years() {
        let resolver = liturgical_resolver();
        for year in [1500, 10_000] {
            let christmas = resolver
                .resolve_readings(
                    date(year, 12, 25),
                    Session::Morning,
                    PlanId::BcpLiturgical,
                    None,
                    None,
                )
                .await
                .unwrap();
            assert_eq!(christmas.first[0].start_chapter, 9, "Christmas {year}");
        }
    }
}
