use medtrack::MedicationRecord;

/// How a line of output should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub tone: Tone,
    pub text: String,
}

impl OutputLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tone::Heading, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Tone::Error, text)
    }
}

/// Detail card for one medication
pub fn record_lines(record: &MedicationRecord) -> Vec<OutputLine> {
    vec![
        OutputLine::plain("--- Medication Details ---"),
        OutputLine::plain(format!(
            "ID: {} | Name: {} | Dosage: {} per tablet",
            record.id, record.name, record.dosage
        )),
        OutputLine::plain(format!(
            "Tablets Available: {} | Price per pack: ${:.2}",
            record.quantity, record.price
        )),
        OutputLine::plain(format!(
            "Prescription Refills Left: {} | Next Refill Due: {}",
            record.refill.refills_remaining, record.refill.next_refill_date
        )),
        OutputLine::plain("---------------------------"),
    ]
}

/// `label` numbered from 1, each followed by its detail card
pub fn numbered_records<'a, I>(label: &str, records: I) -> Vec<OutputLine>
where
    I: IntoIterator<Item = &'a MedicationRecord>,
{
    let mut lines = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        lines.push(OutputLine::plain(format!("--- {} {} ---", label, index + 1)));
        lines.extend(record_lines(record));
    }
    lines
}

/// One-line summary used when picking an id
pub fn summary_line(position: usize, record: &MedicationRecord) -> OutputLine {
    OutputLine::plain(format!(
        "{}. ID: {} - {} ({})",
        position, record.id, record.name, record.dosage
    ))
}
