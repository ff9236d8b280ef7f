use crate::core::MedicationRecord;

/// Bidirectional containment: the name contains the query, or the query
/// contains the name. Case-sensitive.
pub fn name_matches(name: &str, query: &str) -> bool {
    name.contains(query) || query.contains(name)
}

/// Linear scan returning copies of every matching record, in traversal order
pub fn linear_search<'a, I>(query: &str, records: I) -> Vec<MedicationRecord>
where
    I: IntoIterator<Item = &'a MedicationRecord>,
{
    records
        .into_iter()
        .filter(|record| name_matches(&record.name, query))
        .cloned()
        .collect()
}
