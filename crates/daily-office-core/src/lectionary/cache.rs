//! Load-once cache of plan tables.
//!
//! # Design
//!
//! Each plan gets one `tokio::sync::OnceCell` holding the *outcome* of its
//! load. The first caller runs the load; callers that arrive while it is in
//! flight await the same cell instead of starting a second load.
//!
//! A failed load is stored like a successful one: every waiter, and every
//! later caller, receives the same error. Nothing is retried.
//!
//! The map of cells sits behind a `parking_lot::Mutex` that is only held to
//! fetch or insert a cell, never across an await.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use super::plan::PlanId;
use super::tables::PlanTable;
use crate::error::LectionaryResult;

type LoadOutcome = LectionaryResult<Arc<PlanTable>>;
type Slot = Arc<OnceCell<LoadOutcome>>;

/// Plan tables, populated on first use and kept for the life of the cache.
#[derive(Debug, Default)]
pub struct TableCache {
    slots: Mutex<HashMap<PlanId, Slot>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, plan: PlanId) -> Slot {
        let mut slots = self.slots.lock();
        Arc::clone(slots.entry(plan).or_insert_with(|| Arc::new(OnceCell::new())))
    }

    /// Table for `plan`, running `load` only if no load has started yet.
    pub async fn get_or_load<F, Fut>(&self, plan: PlanId, load: F) -> LoadOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LectionaryResult<PlanTable>>,
    {
        let slot = self.slot(plan);
        if let Some(outcome) = slot.get() {
            tracing::trace!(%plan, "Lectionary table cache hit");
            return outcome.clone();
        }

        slot.get_or_init(|| async move {
            tracing::info!(%plan, "Loading lectionary table");
            match load().await {
                Ok(table) => {
                    tracing::info!(%plan, entries = table.entry_count(), "Lectionary table loaded");
                    Ok(Arc::new(table))
                }
                Err(e) => {
                    tracing::error!(%plan, error = %e, "Lectionary table load failed");
                    Err(e)
                }
            }
        })
        .await
        .clone()
    }

    /// Whether `plan` has been loaded successfully.
    pub fn is_loaded(&self, plan: PlanId) -> bool {
        self.slots
            .lock()
            .get(&plan)
            .and_then(|slot| slot.get())
            .is_some_and(|outcome| outcome.is_ok())
    }

    /// Plans with a finished load, successful or not.
    pub fn settled_plans(&self) -> Vec<PlanId> {
        self.slots
            .lock()
            .iter()
            .filter(|(_, slot)| slot.initialized())
            .map(|(plan, _)| *plan)
            .collect()
    }
}
