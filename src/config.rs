use crate::core::{MedError, Result};

/// Default number of entries the medication history can hold
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Default number of pending refill alerts
pub const DEFAULT_ALERT_CAPACITY: usize = 20;

/// Medication system configuration
///
/// Capacities are fixed for the lifetime of a [`MedicationSystem`](crate::MedicationSystem);
/// the bounded containers never grow past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Maximum entries kept in the history stack
    pub history_capacity: usize,

    /// Maximum refill alerts waiting in the queue
    pub alert_capacity: usize,
}

impl SystemConfig {
    /// Create a configuration with the default capacities
    pub fn new() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            alert_capacity: DEFAULT_ALERT_CAPACITY,
        }
    }

    /// Set the history stack capacity
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the alert queue capacity
    pub fn alert_capacity(mut self, capacity: usize) -> Self {
        self.alert_capacity = capacity;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(MedError::InvalidConfig(
                "history_capacity must be > 0".to_string(),
            ));
        }

        if self.alert_capacity == 0 {
            return Err(MedError::InvalidConfig(
                "alert_capacity must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::new()
    }
}
