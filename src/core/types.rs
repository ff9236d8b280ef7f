use serde::Deserialize;

/// Longest medication name the shell accepts, in characters
pub const MAX_NAME_LEN: usize = 49;

/// Longest dosage label the shell accepts, in characters
pub const MAX_DOSAGE_LEN: usize = 19;

/// Longest refill date string the shell accepts, in characters
pub const MAX_DATE_LEN: usize = 11;

/// Prescription refill state of a medication.
///
/// `next_refill_date` is an opaque display string; it is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RefillInfo {
    pub refills_remaining: i32,
    pub next_refill_date: String,
}

impl RefillInfo {
    pub fn new(refills_remaining: i32, next_refill_date: impl Into<String>) -> Self {
        Self {
            refills_remaining,
            next_refill_date: next_refill_date.into(),
        }
    }
}

/// One medication's full data.
///
/// Records are plain values: every container stores its own copy, so removing
/// a medication from the registry never touches the copies held by the
/// history stack or the alert queue. `MedicationRecord::default()` is the
/// zero-valued record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MedicationRecord {
    pub id: i32,
    pub name: String,
    pub dosage: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(default)]
    pub refill: RefillInfo,
}

impl MedicationRecord {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn dosage(mut self, dosage: impl Into<String>) -> Self {
        self.dosage = dosage.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn refill(mut self, refills_remaining: i32, next_refill_date: impl Into<String>) -> Self {
        self.refill = RefillInfo::new(refills_remaining, next_refill_date);
        self
    }

    /// Fields other than `id`, as an update payload
    pub fn to_update(&self) -> MedicationUpdate {
        MedicationUpdate {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            quantity: self.quantity,
            price: self.price,
            refill: self.refill.clone(),
        }
    }
}

/// Replacement values for every field of a record except its id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationUpdate {
    pub name: String,
    pub dosage: String,
    pub quantity: i32,
    pub price: f64,
    pub refill: RefillInfo,
}

impl MedicationUpdate {
    /// Overwrite everything but the id of `record`
    pub fn apply_to(self, record: &mut MedicationRecord) {
        record.name = self.name;
        record.dosage = self.dosage;
        record.quantity = self.quantity;
        record.price = self.price;
        record.refill = self.refill;
    }

    pub fn into_record(self, id: i32) -> MedicationRecord {
        let mut record = MedicationRecord {
            id,
            ..MedicationRecord::default()
        };
        self.apply_to(&mut record);
        record
    }
}
