pub mod error;
pub mod types;

pub use error::{Container, MedError, Result};
pub use types::{
    MAX_DATE_LEN, MAX_DOSAGE_LEN, MAX_NAME_LEN, MedicationRecord, MedicationUpdate, RefillInfo,
};
