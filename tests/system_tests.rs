// ============================================================================
// Integration Tests for MedicationSystem (session facade)
// ============================================================================
//
// These tests drive the system the way the shell does: one operation per
// interaction, results checked through the public views.
//
// ============================================================================

use medtrack::{
    AddOutcome, MedError, MedicationRecord, MedicationSystem, SortAlgorithm, SortField,
    SystemConfig,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn setup_scenario() -> MedicationSystem {
    let mut system = MedicationSystem::new();
    system
        .add_medication(MedicationRecord::new(1, "Aspirin").price(5.0).quantity(10))
        .unwrap();
    system
        .add_medication(MedicationRecord::new(2, "Zinc").price(2.0).quantity(30))
        .unwrap();
    system
        .add_medication(MedicationRecord::new(3, "Metformin").price(8.5).quantity(5))
        .unwrap();
    system
}

fn names(records: &[MedicationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_list_sort_search_scenario() {
    let system = setup_scenario();

    assert_eq!(names(&system.medications()), vec!["Metformin", "Zinc", "Aspirin"]);

    let by_price = system.sort(SortField::Price, SortAlgorithm::Bubble);
    assert_eq!(names(&by_price), vec!["Zinc", "Aspirin", "Metformin"]);
    assert_eq!(
        by_price.iter().map(|r| r.price).collect::<Vec<_>>(),
        vec![2.0, 5.0, 8.5]
    );

    // Sorting is non-destructive
    assert_eq!(names(&system.medications()), vec!["Metformin", "Zinc", "Aspirin"]);

    assert_eq!(names(&system.search("in").unwrap()), vec!["Metformin", "Aspirin"]);
}

#[test]
fn test_sort_with_nan_price_in_registry() {
    let mut system = MedicationSystem::new();
    system.add_medication(MedicationRecord::new(1, "A").price(3.0)).unwrap();
    system
        .add_medication(MedicationRecord::new(2, "N").price(f64::NAN))
        .unwrap();
    system.add_medication(MedicationRecord::new(3, "Z").price(1.0)).unwrap();

    let bubble = system.sort(SortField::Price, SortAlgorithm::Bubble);
    let selection = system.sort(SortField::Price, SortAlgorithm::Selection);

    assert_eq!(names(&bubble), names(&selection));
    assert_eq!(names(&bubble), vec!["Z", "A", "N"]);
}

#[test]
fn test_delete_scenario() {
    let mut system = setup_scenario();

    system.delete_medication(2).unwrap();
    assert_eq!(names(&system.medications()), vec!["Metformin", "Aspirin"]);
    assert_eq!(system.delete_medication(2), Err(MedError::NotFound(2)));
}

#[test]
fn test_history_records_every_creation() {
    let mut system = setup_scenario();

    assert_eq!(
        names(&system.history_entries()),
        vec!["Metformin", "Zinc", "Aspirin"]
    );
    assert_eq!(system.pop_history().unwrap().name, "Metformin");
    assert_eq!(system.recent_history().unwrap().name, "Zinc");

    // Popping history does not touch the registry
    assert_eq!(system.medication_count(), 3);
}

#[test]
fn test_copies_are_independent_of_registry() {
    let mut system = setup_scenario();
    system.queue_refill_alert(2).unwrap();

    system.delete_medication(2).unwrap();
    system
        .add_medication(MedicationRecord::new(4, "Lisinopril"))
        .unwrap();

    assert_eq!(names(&system.pending_alerts()), vec!["Zinc"]);
    assert!(system.history_entries().iter().any(|r| r.name == "Zinc"));

    assert_eq!(system.process_next_alert().unwrap().id, 2);
    assert_eq!(
        system.process_next_alert(),
        Err(MedError::Empty(medtrack::Container::Alerts))
    );
}

#[test]
fn test_alert_for_unknown_id() {
    let mut system = setup_scenario();
    assert_eq!(system.queue_refill_alert(99), Err(MedError::NotFound(99)));
    assert!(system.alerts().is_empty());
}

#[test]
fn test_alert_snapshot_taken_at_enqueue() {
    let mut system = setup_scenario();
    system.queue_refill_alert(1).unwrap();

    let mut update = system.find_medication(1).unwrap().to_update();
    update.quantity = 0;
    system.update_medication(1, update).unwrap();

    assert_eq!(system.pending_alerts()[0].quantity, 10);
    assert_eq!(system.find_medication(1).unwrap().quantity, 0);
}

#[test]
fn test_update_does_not_recheck_ids() {
    let mut system = setup_scenario();
    let previous = system
        .update_medication(3, MedicationRecord::new(0, "Metformin XR").to_update())
        .unwrap();

    assert_eq!(previous.name, "Metformin");
    assert_eq!(system.find_medication(3).unwrap().name, "Metformin XR");
    assert_eq!(
        system.update_medication(8, MedicationRecord::new(0, "X").to_update()),
        Err(MedError::NotFound(8))
    );
}

#[test]
fn test_history_capacity_is_respected() {
    let mut system = MedicationSystem::new();
    for id in 1..=20 {
        assert_eq!(
            system
                .add_medication(MedicationRecord::new(id, format!("Med{}", id)))
                .unwrap(),
            AddOutcome::Logged
        );
    }

    assert_eq!(
        system
            .add_medication(MedicationRecord::new(21, "Med21"))
            .unwrap(),
        AddOutcome::HistoryFull
    );
    assert_eq!(system.medication_count(), 21);
    assert_eq!(system.history().len(), 20);
    assert_eq!(system.recent_history().unwrap().id, 20);
}

#[test]
fn test_sort_by_selectors() {
    let system = setup_scenario();
    let by_quantity = system.sort_by_selectors("3", "2").unwrap();
    assert_eq!(by_quantity.field, SortField::Quantity);
    assert_eq!(by_quantity.algorithm, SortAlgorithm::Selection);
    assert_eq!(names(&by_quantity.records), vec!["Metformin", "Aspirin", "Zinc"]);

    assert!(matches!(
        system.sort_by_selectors("4", "1"),
        Err(MedError::InvalidSelector(_))
    ));
}

#[test]
fn test_custom_capacities() {
    let config = SystemConfig::new().history_capacity(2).alert_capacity(1);
    let mut system = MedicationSystem::with_config(config).unwrap();
    system.add_medication(MedicationRecord::new(1, "A")).unwrap();

    system.queue_refill_alert(1).unwrap();
    assert!(matches!(
        system.queue_refill_alert(1),
        Err(MedError::Full { capacity: 1, .. })
    ));
    assert_eq!(system.alerts().len(), 1);
}

// ============================================================================
// SEEDING
// ============================================================================

#[test]
fn test_load_seed_file() {
    let file = seed_file(
        r#"[
            {"id": 1, "name": "Aspirin", "dosage": "500mg", "quantity": 10, "price": 5.0,
             "refill": {"refills_remaining": 2, "next_refill_date": "01/02/2026"}},
            {"id": 2, "name": "Zinc", "dosage": "25mg", "quantity": 30, "price": 2.0,
             "refill": {"refills_remaining": 1, "next_refill_date": "15/02/2026"}}
        ]"#,
    );

    let mut system = MedicationSystem::new();
    assert_eq!(system.load_seed(file.path()).unwrap(), 2);
    assert_eq!(names(&system.medications()), vec!["Zinc", "Aspirin"]);
    assert_eq!(system.history().len(), 2);
    assert_eq!(
        system.find_medication(1).unwrap().refill.next_refill_date,
        "01/02/2026"
    );
}

#[test]
fn test_seed_with_duplicates_changes_nothing() {
    let file = seed_file(
        r#"[
            {"id": 5, "name": "A", "dosage": "", "quantity": 1, "price": 1.0},
            {"id": 5, "name": "B", "dosage": "", "quantity": 1, "price": 1.0}
        ]"#,
    );

    let mut system = MedicationSystem::new();
    assert_eq!(system.load_seed(file.path()), Err(MedError::Duplicate(5)));
    assert_eq!(system.medication_count(), 0);
    assert!(system.history().is_empty());
}

#[test]
fn test_seed_colliding_with_registry() {
    let mut system = setup_scenario();
    let result = system.seed(vec![
        MedicationRecord::new(10, "New"),
        MedicationRecord::new(3, "Clash"),
    ]);

    assert_eq!(result, Err(MedError::Duplicate(3)));
    assert_eq!(system.medication_count(), 3);
}

#[test]
fn test_malformed_seed_file() {
    let file = seed_file("[{\"id\": \"one\"}]");
    let mut system = MedicationSystem::new();
    assert!(matches!(
        system.load_seed(file.path()),
        Err(MedError::ParseError(_))
    ));
}
