use crate::core::{MedError, MedicationRecord, MedicationUpdate, Result};
use log::debug;

/// One link of the chain: a record plus the slot index of the next node
#[derive(Debug, Clone)]
struct Node {
    record: MedicationRecord,
    next: Option<usize>,
}

/// Singly linked list of every known medication.
///
/// Nodes live in an arena (`slots`) and link to each other by slot index.
/// Released slots go on a free list and are reused by later inserts.
/// New records are prepended, so traversal from `head` yields the most
/// recently inserted medication first.
#[derive(Debug, Clone, Default)]
pub struct MedicationRegistry {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
}

impl MedicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record to the chain.
    ///
    /// Id uniqueness is the caller's job (see [`is_duplicate_id`](Self::is_duplicate_id)).
    pub fn insert(&mut self, record: MedicationRecord) -> Result<()> {
        let id = record.id;
        let node = Node {
            record,
            next: self.head,
        };

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.head = Some(slot);
        debug!("Registry insert: id={} slot={}", id, slot);
        Ok(())
    }

    /// True iff a record with this id is currently in the chain
    pub fn is_duplicate_id(&self, id: i32) -> bool {
        self.iter().any(|record| record.id == id)
    }

    pub fn find(&self, id: i32) -> Option<&MedicationRecord> {
        self.iter().find(|record| record.id == id)
    }

    /// Unlink the node holding `id` and return its record
    pub fn delete(&mut self, id: i32) -> Result<MedicationRecord> {
        let (previous, target) = self.locate(id).ok_or(MedError::NotFound(id))?;

        // The free list must be able to take the slot before anything is unlinked
        self.free.try_reserve(1)?;

        let node = self.slots[target].take().ok_or(MedError::NotFound(id))?;
        match previous {
            None => self.head = node.next,
            Some(prev) => {
                if let Some(prev_node) = self.slots[prev].as_mut() {
                    prev_node.next = node.next;
                }
            }
        }
        self.free.push(target);

        debug!("Registry delete: id={} slot={}", id, target);
        Ok(node.record)
    }

    /// Replace every field except the id; returns the record as it was before.
    ///
    /// Other records are not checked for id collisions.
    pub fn update(&mut self, id: i32, update: MedicationUpdate) -> Result<MedicationRecord> {
        let (_, target) = self.locate(id).ok_or(MedError::NotFound(id))?;
        let node = self.slots[target]
            .as_mut()
            .ok_or(MedError::NotFound(id))?;

        let previous = node.record.clone();
        update.apply_to(&mut node.record);

        debug!("Registry update: id={} slot={}", id, target);
        Ok(previous)
    }

    /// Copy of the chain contents, head to tail
    pub fn list(&self) -> Vec<MedicationRecord> {
        self.iter().cloned().collect()
    }

    /// Number of records, counted by walking the chain
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
        }
    }

    /// Release every node
    pub fn clear(&mut self) {
        let released = self.slots.len() - self.free.len();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        debug!("Registry cleared: {} node(s) released", released);
    }

    /// Slot of the node holding `id`, together with its predecessor's slot
    fn locate(&self, id: i32) -> Option<(Option<usize>, usize)> {
        let mut previous = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            let node = self.slots.get(slot)?.as_ref()?;
            if node.record.id == id {
                return Some((previous, slot));
            }
            previous = Some(slot);
            cursor = node.next;
        }

        None
    }
}

/// Head-to-tail iterator over the registry
pub struct Iter<'a> {
    slots: &'a [Option<Node>],
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MedicationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.cursor?)?.as_ref()?;
        self.cursor = node.next;
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a MedicationRegistry {
    type Item = &'a MedicationRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
