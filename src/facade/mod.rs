pub mod system;

pub use system::{AddOutcome, MedicationSystem};
