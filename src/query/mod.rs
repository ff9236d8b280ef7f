pub mod search;
pub mod sort;

pub use search::{linear_search, name_matches};
pub use sort::{
    BubbleSorter, RecordSorter, SelectionSorter, SortAlgorithm, SortField, SortedRecords,
    sort_records, sort_with_selectors,
};
