//! services/api/src/adapters/memory.rs
//!
//! An in-process `DatabaseService` used by the handler tests. Vectors keep
//! insertion order so "store order" is deterministic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dfi_checker_core::domain::{CatalogEntry, Medication, NewMedication};
use dfi_checker_core::ports::{DatabaseService, PortError, PortResult};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct InteractionRow {
    pub user_id: String,
    pub trade_name: String,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct Collections {
    catalog: Vec<CatalogEntry>,
    medications: Vec<Medication>,
    interactions: Vec<InteractionRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising the error path.
    pub fn offline() -> Self {
        Self {
            inner: Mutex::default(),
            offline: true,
        }
    }

    pub fn with_catalog(self, entries: Vec<CatalogEntry>) -> Self {
        self.inner.lock().unwrap().catalog = entries;
        self
    }

    pub fn add_medication(&self, medication: Medication) {
        self.inner.lock().unwrap().medications.push(medication);
    }

    pub fn add_interaction(&self, user_id: &str, trade_name: &str, end_date: Option<DateTime<Utc>>) {
        self.inner.lock().unwrap().interactions.push(InteractionRow {
            user_id: user_id.to_string(),
            trade_name: trade_name.to_string(),
            end_date,
        });
    }

    pub fn medications(&self) -> Vec<Medication> {
        self.inner.lock().unwrap().medications.clone()
    }

    pub fn interactions(&self) -> Vec<InteractionRow> {
        self.inner.lock().unwrap().interactions.clone()
    }

    fn check_online(&self) -> PortResult<()> {
        if self.offline {
            return Err(PortError::Unexpected("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseService for MemoryStore {
    async fn search_catalog(&self, query: &str, limit: usize) -> PortResult<Vec<CatalogEntry>> {
        self.check_online()?;
        let needle = query.to_lowercase();
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .catalog
            .iter()
            .filter(|e| {
                e.trade_name.to_lowercase().contains(&needle)
                    || e.scientific_name.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_catalog_entry_by_name(&self, name: &str) -> PortResult<CatalogEntry> {
        self.check_online()?;
        let needle = name.to_lowercase();
        let inner = self.inner.lock().unwrap();
        inner
            .catalog
            .iter()
            .find(|e| e.trade_name.to_lowercase() == needle || e.scientific_name.to_lowercase() == needle)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Catalog entry '{}' not found", name)))
    }

    async fn insert_medication(&self, medication: NewMedication) -> PortResult<Uuid> {
        self.check_online()?;
        let id = Uuid::new_v4();
        self.inner.lock().unwrap().medications.push(Medication {
            id,
            user_id: medication.user_id,
            sfda_drug_id: medication.sfda_drug_id,
            trade_name: medication.trade_name,
            scientific_name: medication.scientific_name,
            start_date: medication.start_date,
            end_date: medication.end_date,
            processed: 0,
        });
        Ok(id)
    }

    async fn get_medications_for_user(&self, user_id: &str) -> PortResult<Vec<Medication>> {
        self.check_online()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .medications
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_medication_by_id(&self, medication_id: Uuid) -> PortResult<Medication> {
        self.check_online()?;
        let inner = self.inner.lock().unwrap();
        inner
            .medications
            .iter()
            .find(|m| m.id == medication_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Medication {} not found", medication_id)))
    }

    async fn delete_medication(&self, medication_id: Uuid) -> PortResult<u64> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.medications.len();
        inner.medications.retain(|m| m.id != medication_id);
        Ok((before - inner.medications.len()) as u64)
    }

    async fn delete_interactions_for(&self, user_id: &str, trade_name: &str) -> PortResult<u64> {
        self.check_online()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.interactions.len();
        inner
            .interactions
            .retain(|i| !(i.user_id == user_id && i.trade_name == trade_name));
        Ok((before - inner.interactions.len()) as u64)
    }

    async fn count_active_interactions(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> PortResult<i64> {
        self.check_online()?;
        let inner = self.inner.lock().unwrap();
        let count = inner
            .interactions
            .iter()
            .filter(|i| i.user_id == user_id && i.end_date.map_or(true, |end| end >= now))
            .count();
        Ok(count as i64)
    }
}
