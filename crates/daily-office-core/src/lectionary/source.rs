//! Where plan tables come from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::plan::PlanId;
use super::tables::PlanTable;
use crate::error::{LectionaryError, LectionaryResult};

/// Fetches the raw table for a plan.
///
/// Implementations are called at most once per plan per [`super::TableCache`].
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn load(&self, plan: PlanId) -> LectionaryResult<PlanTable>;
}

/// Reads `<dir>/<plan-id>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, plan: PlanId) -> PathBuf {
        self.dir.join(format!("{}.json", plan.as_str()))
    }
}

#[async_trait]
impl TableSource for JsonDirSource {
    async fn load(&self, plan: PlanId) -> LectionaryResult<PlanTable> {
        let path = self.path_for(plan);
        tracing::debug!(%plan, path = %path.display(), "Reading lectionary table");

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LectionaryError::TableLoad {
                plan: plan.to_string(),
                message: format!("{}: {}", path.display(), e),
            })?;

        PlanTable::parse(plan, &text)
    }
}

/// Serves tables already held in memory as JSON values.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<PlanId, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the table for `plan`.
    pub fn with_table(mut self, plan: PlanId, table: Value) -> Self {
        self.tables.insert(plan, table);
        self
    }
}

#[async_trait]
impl TableSource for MemorySource {
    async fn load(&self, plan: PlanId) -> LectionaryResult<PlanTable> {
        let value = self
            .tables
            .get(&plan)
            .cloned()
            .ok_or_else(|| LectionaryError::TableLoad {
                plan: plan.to_string(),
                message: "no table registered for this plan".into(),
            })?;
        PlanTable::from_value(plan, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_json_dir_source_reads_plan_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonDirSource::new(dir.path());
        std::fs::write(
            source.path_for(PlanId::WholeBible),
            r#"[{"day": 1, "first": {"book": "Genesis", "startChapter": 1, "endChapter": 2}}]"#,
        )
        .unwrap();

        let table = source.load(PlanId::WholeBible).await.unwrap();
        assert_eq!(table.entry_count(), 1);
        assert!(source.path_for(PlanId::BcpCivil).ends_with("bcp-civil.json"));
    }

    #[tokio::test]
    async fn test_json_dir_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonDirSource::new(dir.path());
        let err = source.load(PlanId::BcpCivil).await.unwrap_err();
        assert!(matches!(err, LectionaryError::TableLoad { .. }));
    }

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemorySource::new().with_table(PlanId::BcpCivil, json!({}));
        assert!(source.load(PlanId::BcpCivil).await.is_ok());
        assert!(matches!(
            source.load(PlanId::WholeBible).await,
            Err(LectionaryError::TableLoad { .. })
        ));
    }
}
