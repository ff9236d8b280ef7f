// ============================================================================
// src/query/sort.rs - Snapshot sorting with pluggable algorithms
// ============================================================================
//
// Sorting never touches the registry: callers hand in a snapshot and get back
// an ordered copy. Both algorithms are O(n²) and produce the same ascending
// key order. Neither promises stability.
//
// ============================================================================

use crate::core::{MedError, MedicationRecord, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// SORT FIELD
// ============================================================================

/// Record field used as the sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Byte-wise lexicographic order of the name
    Name,
    /// IEEE 754 total order of the price
    Price,
    /// Numeric order of the quantity
    Quantity,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Price, SortField::Quantity];

    /// Menu code: 1 = Name, 2 = Price, 3 = Quantity
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(SortField::Name),
            2 => Ok(SortField::Price),
            3 => Ok(SortField::Quantity),
            other => Err(MedError::InvalidSelector(format!(
                "unknown sort field {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Quantity => "quantity",
        }
    }

    /// Compare two records by this field.
    ///
    /// Prices use the IEEE 754 total order, so NaN sorts after every finite
    /// price (before them when negative) and the comparison stays transitive.
    pub fn compare(&self, a: &MedicationRecord, b: &MedicationRecord) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = MedError;

    fn from_str(s: &str) -> Result<Self> {
        let selector = s.trim();
        if let Ok(code) = selector.parse::<i32>() {
            return Self::from_code(code);
        }

        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(selector))
            .ok_or_else(|| MedError::InvalidSelector(format!("unknown sort field '{}'", selector)))
    }
}

// ============================================================================
// SORT ALGORITHM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Bubble, SortAlgorithm::Selection];

    /// Menu code: 1 = Bubble, 2 = Selection
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(SortAlgorithm::Bubble),
            2 => Ok(SortAlgorithm::Selection),
            other => Err(MedError::InvalidSelector(format!(
                "unknown sort algorithm {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
        }
    }

    pub fn sorter(&self) -> &'static dyn RecordSorter {
        match self {
            SortAlgorithm::Bubble => &BubbleSorter,
            SortAlgorithm::Selection => &SelectionSorter,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = MedError;

    fn from_str(s: &str) -> Result<Self> {
        let selector = s.trim();
        if let Ok(code) = selector.parse::<i32>() {
            return Self::from_code(code);
        }

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(selector))
            .ok_or_else(|| {
                MedError::InvalidSelector(format!("unknown sort algorithm '{}'", selector))
            })
    }
}

// ============================================================================
// SORTER PLUGINS
// ============================================================================

/// In-place sorting strategy over a record slice
pub trait RecordSorter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Sort `records` ascending by `field`
    fn sort(&self, records: &mut [MedicationRecord], field: SortField);
}

/// Adjacent-pair exchange; each pass settles the largest remaining key at the end
pub struct BubbleSorter;

impl RecordSorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, records: &mut [MedicationRecord], field: SortField) {
        let n = records.len();
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - pass - 1 {
                if field.compare(&records[j], &records[j + 1]) == Ordering::Greater {
                    records.swap(j, j + 1);
                }
            }
        }
    }
}

/// Picks the minimum of the unsorted suffix and swaps it into place
pub struct SelectionSorter;

impl RecordSorter for SelectionSorter {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn sort(&self, records: &mut [MedicationRecord], field: SortField) {
        let n = records.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_index = i;
            for j in i + 1..n {
                if field.compare(&records[j], &records[min_index]) == Ordering::Less {
                    min_index = j;
                }
            }

            if min_index != i {
                records.swap(i, min_index);
            }
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Ordered copy of `records`
pub fn sort_records(
    records: &[MedicationRecord],
    field: SortField,
    algorithm: SortAlgorithm,
) -> Vec<MedicationRecord> {
    let mut snapshot = records.to_vec();
    algorithm.sorter().sort(&mut snapshot, field);
    snapshot
}

/// Ordered snapshot plus the selectors that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SortedRecords {
    pub field: SortField,
    pub algorithm: SortAlgorithm,
    pub records: Vec<MedicationRecord>,
}

/// Parse raw selectors, then sort; nothing is sorted if either selector is unknown
pub fn sort_with_selectors(
    records: &[MedicationRecord],
    field: &str,
    algorithm: &str,
) -> Result<SortedRecords> {
    let field: SortField = field.parse()?;
    let algorithm: SortAlgorithm = algorithm.parse()?;
    Ok(SortedRecords {
        field,
        algorithm,
        records: sort_records(records, field, algorithm),
    })
}

// ============================================================================
// TESTS
// ============================================================================
