//! In-memory storage backend using DashMap.
//!
//! Each table gets its own `DashMap<Uuid, Row>`. Rows are stored as raw
//! JSON objects, as PostgREST would return them, plus an insertion
//! sequence number used to break `created_at` ties.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::{json, Value};
use uuid::Uuid;

/// The three tables the ward uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Doctors,
    Patients,
    Orders,
}

impl Table {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "doctors" => Some(Self::Doctors),
            "patients" => Some(Self::Patients),
            "orders" => Some(Self::Orders),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctors => "doctors",
            Self::Patients => "patients",
            Self::Orders => "orders",
        }
    }

    /// Every column of the table, in declaration order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Doctors => &["id", "ad_soyad", "created_at"],
            Self::Patients => &["id", "ad_soyad", "oda_no", "doktor_id", "created_at"],
            Self::Orders => &[
                "id",
                "hasta_id",
                "doktor_id",
                "ilaclar",
                "serum",
                "kontroller",
                "notlar",
                "tamamlanan_gorevler",
                "created_at",
            ],
        }
    }
}

/// One stored row.
#[derive(Debug, Clone)]
pub struct Row {
    pub seq: u64,
    pub value: Value,
}

struct Inner {
    doctors: DashMap<Uuid, Row>,
    patients: DashMap<Uuid, Row>,
    orders: DashMap<Uuid, Row>,
    seq: AtomicU64,
}

/// Shared application state holding all in-memory tables.
///
/// Cheaply cloneable via `Arc`: all clones share the same data.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                doctors: DashMap::new(),
                patients: DashMap::new(),
                orders: DashMap::new(),
                seq: AtomicU64::new(0),
            }),
        }
    }

    pub fn table(&self, table: Table) -> &DashMap<Uuid, Row> {
        match table {
            Table::Doctors => &self.inner.doctors,
            Table::Patients => &self.inner.patients,
            Table::Orders => &self.inner.orders,
        }
    }

    /// Snapshot of every row in `table`, in insertion order.
    pub fn rows(&self, table: Table) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .table(table)
            .iter()
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|r| r.seq);
        rows
    }

    pub fn contains(&self, table: Table, id: &Uuid) -> bool {
        self.table(table).contains_key(id)
    }

    /// Store a fully formed row object under its `id`.
    pub fn insert(&self, table: Table, id: Uuid, value: Value) {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst);
        self.table(table).insert(id, Row { seq, value });
    }

    /// Register a doctor directly, bypassing HTTP. Used for seeding.
    pub fn seed_doctor(&self, full_name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.insert(
            Table::Doctors,
            id,
            json!({
                "id": id.to_string(),
                "ad_soyad": full_name,
                "created_at": now(),
            }),
        );
        id
    }
}

/// Current time in the fixed-width form used for `created_at`, so that
/// lexical order equals chronological order.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_come_back_in_insertion_order() {
        let state = AppState::new();
        let a = state.seed_doctor("B");
        let b = state.seed_doctor("A");
        let ids: Vec<String> = state
            .rows(Table::Doctors)
            .into_iter()
            .map(|r| r.value["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec![a.to_string(), b.to_string()]);
    }

    #[test]
    fn clones_share_tables() {
        let state = AppState::new();
        let clone = state.clone();
        let id = clone.seed_doctor("Elif Şahin");
        assert!(state.contains(Table::Doctors, &id));
    }

    #[test]
    fn table_names_round_trip() {
        for table in [Table::Doctors, Table::Patients, Table::Orders] {
            assert_eq!(Table::from_name(table.as_str()), Some(table));
        }
        assert_eq!(Table::from_name("nurses"), None);
    }
}
