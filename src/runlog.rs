//! Run-logging store.
//!
//! Persists the cost outcome of each optimization run so savings can be
//! tracked over time. Append-only JSON lines; one record per run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comparison::CostComparison;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub baseline_cost: f64,
    pub optimized_cost: f64,
    pub savings: f64,
}

impl RunRecord {
    pub fn from_comparison(comparison: &CostComparison) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            baseline_cost: comparison.naive_cost,
            optimized_cost: comparison.optimized_cost,
            savings: comparison.savings,
        }
    }
}

pub trait RunStore {
    fn append(&self, record: &RunRecord) -> Result<()>;
    fn list(&self) -> Result<Vec<RunRecord>>;
}

/// File-backed store, one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonlRunStore {
    path: PathBuf,
}

impl JsonlRunStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunStore for JsonlRunStore {
    fn append(&self, record: &RunRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating run log dir {}", parent.display()))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening run log {}", self.path.display()))?;
        let line = serde_json::to_string(record).context("serializing run record")?;
        writeln!(file, "{line}").context("writing run record")?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<RunRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading run log {}", self.path.display()))?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).context("parsing run record"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> JsonlRunStore {
        let path = std::env::temp_dir().join(format!("tou-runlog-{}.jsonl", Uuid::new_v4()));
        JsonlRunStore::new(path)
    }

    fn record(savings: f64) -> RunRecord {
        RunRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            baseline_cost: 3.0,
            optimized_cost: 3.0 - savings,
            savings,
        }
    }

    #[test]
    fn append_then_list_round_trips() {
        let store = temp_store();
        store.append(&record(0.5)).unwrap();
        store.append(&record(0.7)).unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        assert!((records[0].savings - 0.5).abs() < 1e-12);
        assert!((records[1].savings - 0.7).abs() < 1e-12);

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn listing_a_missing_file_is_empty() {
        let store = temp_store();
        assert!(store.list().unwrap().is_empty());
    }
}
