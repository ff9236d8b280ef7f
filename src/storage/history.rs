use crate::core::{Container, MedError, MedicationRecord, Result};
use log::{debug, warn};

/// Bounded LIFO log of medications as they were added.
///
/// The buffer is allocated once with `capacity` slots and never grows; a push
/// onto a full stack is rejected and leaves the stored entries untouched.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    items: Box<[Option<MedicationRecord>]>,
    len: usize,
}

impl HistoryStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: vec![None; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn push(&mut self, record: MedicationRecord) -> Result<()> {
        if self.is_full() {
            warn!(
                "History push rejected for id={}: stack is full ({})",
                record.id,
                self.capacity()
            );
            return Err(MedError::Full {
                container: Container::History,
                capacity: self.capacity(),
            });
        }

        let slot = self.len;
        debug!("History push: id={} slot={}", record.id, slot);
        self.items[slot] = Some(record);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<MedicationRecord> {
        let slot = self.top().ok_or(MedError::Empty(Container::History))?;
        let record = self.items[slot]
            .take()
            .ok_or(MedError::Empty(Container::History))?;
        self.len = slot;

        debug!("History pop: id={} slot={}", record.id, slot);
        Ok(record)
    }

    /// Most recent entry, without removing it
    pub fn peek(&self) -> Option<&MedicationRecord> {
        self.items.get(self.top()?)?.as_ref()
    }

    /// Index of the top slot; `None` when the stack is empty
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Entries from the top down to the bottom
    pub fn iter(&self) -> impl Iterator<Item = &MedicationRecord> + '_ {
        self.items[..self.len].iter().rev().flatten()
    }
}
