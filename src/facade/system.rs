use crate::config::SystemConfig;
use crate::core::{Container, MedError, MedicationRecord, MedicationUpdate, Result};
use crate::query::{
    SortAlgorithm, SortField, SortedRecords, linear_search, sort_records, sort_with_selectors,
};
use crate::storage::{AlertQueue, HistoryStack, MedicationRegistry, read_seed_file};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::Path;

/// What happened to the history log when a medication was added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The new medication was pushed onto the history stack
    Logged,
    /// The medication was added but the history stack was already full
    HistoryFull,
}

/// Session object owning every container of the medication tracker.
///
/// Each shell interaction maps to exactly one method call. Methods never
/// print; they return records or a [`MedError`], and a failed call leaves all
/// containers as they were.
///
/// # Examples
///
/// ```
/// use medtrack::{MedicationRecord, MedicationSystem, SortAlgorithm, SortField};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut system = MedicationSystem::new();
/// system.add_medication(MedicationRecord::new(1, "Aspirin").price(5.0))?;
/// system.add_medication(MedicationRecord::new(2, "Zinc").price(2.0))?;
///
/// let by_price = system.sort(SortField::Price, SortAlgorithm::Bubble);
/// assert_eq!(by_price[0].name, "Zinc");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MedicationSystem {
    config: SystemConfig,
    registry: MedicationRegistry,
    history: HistoryStack,
    alerts: AlertQueue,
}

impl MedicationSystem {
    /// Empty system with the default capacities
    pub fn new() -> Self {
        let config = SystemConfig::default();
        Self {
            registry: MedicationRegistry::new(),
            history: HistoryStack::new(config.history_capacity),
            alerts: AlertQueue::new(config.alert_capacity),
            config,
        }
    }

    pub fn with_config(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: MedicationRegistry::new(),
            history: HistoryStack::new(config.history_capacity),
            alerts: AlertQueue::new(config.alert_capacity),
            config,
        })
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn registry(&self) -> &MedicationRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Create a medication: reject duplicate ids, insert, then log to history
    pub fn add_medication(&mut self, record: MedicationRecord) -> Result<AddOutcome> {
        if self.registry.is_duplicate_id(record.id) {
            return Err(MedError::Duplicate(record.id));
        }

        let logged = record.clone();
        self.registry.insert(record)?;

        match self.history.push(logged) {
            Ok(()) => Ok(AddOutcome::Logged),
            Err(MedError::Full { .. }) => Ok(AddOutcome::HistoryFull),
            Err(err) => Err(err),
        }
    }

    pub fn delete_medication(&mut self, id: i32) -> Result<MedicationRecord> {
        self.registry.delete(id)
    }

    /// Replace every field but the id; returns the record as it was before
    pub fn update_medication(
        &mut self,
        id: i32,
        update: MedicationUpdate,
    ) -> Result<MedicationRecord> {
        self.registry.update(id, update)
    }

    /// Every medication, most recently added first
    pub fn medications(&self) -> Vec<MedicationRecord> {
        self.registry.list()
    }

    pub fn medication_count(&self) -> usize {
        self.registry.count()
    }

    pub fn find_medication(&self, id: i32) -> Option<&MedicationRecord> {
        self.registry.find(id)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn recent_history(&self) -> Option<&MedicationRecord> {
        self.history.peek()
    }

    pub fn pop_history(&mut self) -> Result<MedicationRecord> {
        self.history.pop()
    }

    /// History entries, most recent first
    pub fn history_entries(&self) -> Vec<MedicationRecord> {
        self.history.iter().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Refill alerts
    // ------------------------------------------------------------------

    /// Queue a copy of the registry record with this id
    pub fn queue_refill_alert(&mut self, id: i32) -> Result<MedicationRecord> {
        let record = self
            .registry
            .find(id)
            .cloned()
            .ok_or(MedError::NotFound(id))?;

        self.alerts.enqueue(record.clone())?;
        Ok(record)
    }

    pub fn process_next_alert(&mut self) -> Result<MedicationRecord> {
        self.alerts.dequeue()
    }

    /// Pending alerts in processing order
    pub fn pending_alerts(&self) -> Vec<MedicationRecord> {
        self.alerts.iter().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Search & sort
    // ------------------------------------------------------------------

    pub fn search(&self, query: &str) -> Result<Vec<MedicationRecord>> {
        if query.trim().is_empty() {
            return Err(MedError::InvalidSelector("empty search query".to_string()));
        }
        Ok(linear_search(query, &self.registry))
    }

    /// Sorted snapshot of the registry; the registry itself keeps its order
    pub fn sort(&self, field: SortField, algorithm: SortAlgorithm) -> Vec<MedicationRecord> {
        sort_records(&self.registry.list(), field, algorithm)
    }

    /// Sort from raw selectors (menu codes or names)
    pub fn sort_by_selectors(&self, field: &str, algorithm: &str) -> Result<SortedRecords> {
        sort_with_selectors(&self.registry.list(), field, algorithm)
    }

    // ------------------------------------------------------------------
    // Seeding & teardown
    // ------------------------------------------------------------------

    /// Add a batch of records through the regular creation path.
    ///
    /// Every id is checked (against the registry and within the batch) before
    /// anything is inserted, so a rejected batch changes nothing.
    pub fn seed(&mut self, records: Vec<MedicationRecord>) -> Result<usize> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) || self.registry.is_duplicate_id(record.id) {
                return Err(MedError::Duplicate(record.id));
            }
        }

        let total = records.len();
        let mut unlogged = 0;
        for record in records {
            if self.add_medication(record)? == AddOutcome::HistoryFull {
                unlogged += 1;
            }
        }

        if unlogged > 0 {
            warn!(
                "{} seeded medication(s) not logged: {} reached capacity",
                unlogged,
                Container::History
            );
        }
        debug!("Seeded {} medication(s)", total);
        Ok(total)
    }

    pub fn load_seed(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let records = read_seed_file(path)?;
        let added = self.seed(records)?;
        info!("Loaded {} medication(s) from {}", added, path.display());
        Ok(added)
    }

    /// Release every record held by the registry, history and alerts
    pub fn clear(&mut self) {
        self.registry.clear();
        self.history = HistoryStack::new(self.config.history_capacity);
        self.alerts = AlertQueue::new(self.config.alert_capacity);
    }
}

impl Default for MedicationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_logs_to_history() {
        let mut system = MedicationSystem::new();
        let outcome = system.add_medication(MedicationRecord::new(1, "Aspirin")).unwrap();
        assert_eq!(outcome, AddOutcome::Logged);
        assert_eq!(system.recent_history().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_add_when_history_full_still_inserts() {
        let config = SystemConfig::new().history_capacity(1);
        let mut system = MedicationSystem::with_config(config).unwrap();

        system.add_medication(MedicationRecord::new(1, "Aspirin")).unwrap();
        let outcome = system.add_medication(MedicationRecord::new(2, "Zinc")).unwrap();

        assert_eq!(outcome, AddOutcome::HistoryFull);
        assert_eq!(system.medication_count(), 2);
        assert_eq!(system.history().len(), 1);
    }

    #[test]
    fn test_duplicate_is_rejected_without_logging() {
        let mut system = MedicationSystem::new();
        system.add_medication(MedicationRecord::new(1, "Aspirin")).unwrap();

        let err = system.add_medication(MedicationRecord::new(1, "Other")).unwrap_err();
        assert_eq!(err, MedError::Duplicate(1));
        assert_eq!(system.medication_count(), 1);
        assert_eq!(system.history().len(), 1);
    }

    #[test]
    fn test_with_invalid_config() {
        let config = SystemConfig::new().alert_capacity(0);
        assert!(matches!(
            MedicationSystem::with_config(config),
            Err(MedError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_search_query() {
        let system = MedicationSystem::new();
        assert!(matches!(system.search("  "), Err(MedError::InvalidSelector(_))));
    }

    #[test]
    fn test_clear() {
        let mut system = MedicationSystem::new();
        system.add_medication(MedicationRecord::new(1, "Aspirin")).unwrap();
        system.queue_refill_alert(1).unwrap();

        system.clear();

        assert_eq!(system.medication_count(), 0);
        assert!(system.history().is_empty());
        assert!(system.alerts().is_empty());
        assert_eq!(system.history().capacity(), 20);
    }
}
