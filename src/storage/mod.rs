pub mod alerts;
pub mod history;
pub mod registry;
pub mod seed;

pub use alerts::AlertQueue;
pub use history::HistoryStack;
pub use registry::MedicationRegistry;
pub use seed::{parse_seed, read_seed_file};
