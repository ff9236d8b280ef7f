// ============================================================================
// medtrack Library
// ============================================================================
//
// In-memory medication tracker:
// - MedicationRegistry: singly linked list of every known medication
// - HistoryStack: bounded LIFO log of medications as they were added
// - AlertQueue: bounded circular FIFO of pending refill alerts
// - query: linear substring search and bubble/selection sorting of snapshots
//
// MedicationSystem ties the three containers together as one session object.
// Nothing in the library prints; rendering belongs to the `medtrack` binary.
//
// ============================================================================

pub mod config;
pub mod core;
pub mod facade;
pub mod query;
pub mod storage;

// Re-export main types for convenience
pub use crate::config::{DEFAULT_ALERT_CAPACITY, DEFAULT_HISTORY_CAPACITY, SystemConfig};
pub use crate::core::{
    Container, MedError, MedicationRecord, MedicationUpdate, RefillInfo, Result,
};
pub use crate::facade::{AddOutcome, MedicationSystem};
pub use crate::query::{RecordSorter, SortAlgorithm, SortField, SortedRecords};
pub use crate::storage::{AlertQueue, HistoryStack, MedicationRegistry};
