use medtrack::{MedicationSystem, SortAlgorithm, SortField};
use std::collections::BTreeSet;

pub struct Autocompleter {
    keywords: BTreeSet<String>,
}

impl Autocompleter {
    pub fn new() -> Self {
        let commands = [
            "add", "update", "delete", "list", "count", "history", "alert", "search", "sort",
            "help", "exit", "quit",
        ];
        let actions = ["peek", "pop", "next"];

        let keywords = commands
            .into_iter()
            .chain(actions)
            .map(str::to_string)
            .chain(SortField::ALL.iter().map(|field| field.as_str().to_string()))
            .chain(SortAlgorithm::ALL.iter().map(|algorithm| algorithm.as_str().to_string()))
            .collect();

        Self { keywords }
    }

    /// Keywords and medication names starting with `input` (case-insensitive)
    pub fn get_suggestions(&self, input: &str, system: &MedicationSystem) -> Vec<String> {
        let prefix = input.to_lowercase();
        let mut suggestions = BTreeSet::new();

        for kw in &self.keywords {
            if kw.starts_with(&prefix) && kw != &prefix {
                suggestions.insert(kw.clone());
            }
        }

        for record in system.registry() {
            if record.name.to_lowercase().starts_with(&prefix) && record.name != input {
                suggestions.insert(record.name.clone());
            }
        }

        suggestions.into_iter().collect()
    }
}
