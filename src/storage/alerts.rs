use crate::core::{Container, MedError, MedicationRecord, Result};
use log::{debug, warn};

/// Bounded FIFO queue of medications awaiting refill processing.
///
/// Backed by a circular buffer of `capacity` slots. `rear` is `None` until the
/// first enqueue and afterwards always names the slot written last; it is not
/// reset when the queue drains.
#[derive(Debug, Clone)]
pub struct AlertQueue {
    items: Box<[Option<MedicationRecord>]>,
    front: usize,
    rear: Option<usize>,
    count: usize,
}

impl AlertQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: vec![None; capacity].into_boxed_slice(),
            front: 0,
            rear: None,
            count: 0,
        }
    }

    pub fn enqueue(&mut self, record: MedicationRecord) -> Result<()> {
        if self.is_full() {
            warn!(
                "Refill alert rejected for id={}: queue is full ({})",
                record.id,
                self.capacity()
            );
            return Err(MedError::Full {
                container: Container::Alerts,
                capacity: self.capacity(),
            });
        }

        let slot = self.rear.map_or(0, |rear| (rear + 1) % self.capacity());
        debug!("Alert enqueue: id={} slot={}", record.id, slot);
        self.items[slot] = Some(record);
        self.rear = Some(slot);
        self.count += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<MedicationRecord> {
        if self.is_empty() {
            return Err(MedError::Empty(Container::Alerts));
        }

        let slot = self.front;
        let record = self.items[slot]
            .take()
            .ok_or(MedError::Empty(Container::Alerts))?;
        self.front = (slot + 1) % self.capacity();
        self.count -= 1;

        debug!("Alert dequeue: id={} slot={}", record.id, slot);
        Ok(record)
    }

    /// Next alert to be processed, without removing it
    pub fn peek(&self) -> Option<&MedicationRecord> {
        if self.is_empty() {
            return None;
        }
        self.items[self.front].as_ref()
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn rear(&self) -> Option<usize> {
        self.rear
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Pending alerts in the order they will be processed
    pub fn iter(&self) -> impl Iterator<Item = &MedicationRecord> + '_ {
        let capacity = self.capacity();
        (0..self.count)
            .filter_map(move |offset| self.items[(self.front + offset) % capacity].as_ref())
    }
}
