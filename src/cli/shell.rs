use super::command::{AlertAction, Command, HistoryAction, parse_line};
use super::render::{OutputLine, numbered_records, record_lines, summary_line};
use medtrack::{AddOutcome, MedError, MedicationRecord, MedicationSystem};

/// Lines produced by one command, plus whether the session should end
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<OutputLine>,
    pub exit: bool,
}

impl Reply {
    fn line(line: OutputLine) -> Self {
        Self {
            lines: vec![line],
            exit: false,
        }
    }

    fn lines(lines: Vec<OutputLine>) -> Self {
        Self { lines, exit: false }
    }
}

/// Interprets commands against one [`MedicationSystem`] and turns the
/// results into display lines.
pub struct Shell {
    system: MedicationSystem,
}

impl Shell {
    pub fn new(system: MedicationSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> &MedicationSystem {
        &self.system
    }

    pub fn welcome() -> Vec<OutputLine> {
        vec![
            OutputLine::heading("=== MEDICATION REMINDER SYSTEM WITH REFILL ALERTS ==="),
            OutputLine::plain("Welcome to the Medication Management System!"),
            OutputLine::plain("Type 'help' to see the available commands."),
        ]
    }

    pub fn execute_line(&mut self, line: &str) -> Reply {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::default(),
            Err(err) => Reply::line(OutputLine::error(err.to_string())),
        }
    }

    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Add(record) => {
                let name = record.name.clone();
                match self.system.add_medication(record) {
                    Ok(AddOutcome::Logged) => Reply::line(OutputLine::success(format!(
                        "Medication '{}' added successfully!",
                        name
                    ))),
                    Ok(AddOutcome::HistoryFull) => Reply::lines(vec![
                        OutputLine::success(format!("Medication '{}' added successfully!", name)),
                        OutputLine::warning("Medication history is full!"),
                    ]),
                    Err(err) => error_reply(err),
                }
            }
            Command::Delete(id) => self.delete(id),
            Command::Update { id, update } => {
                if self.system.medication_count() == 0 {
                    return Reply::line(OutputLine::warning("No medications to update!"));
                }
                match self.system.update_medication(id, update) {
                    Ok(previous) => {
                        let mut lines = vec![OutputLine::plain("Previous medication details:")];
                        lines.extend(record_lines(&previous));
                        lines.push(OutputLine::success("Medication updated successfully!"));
                        Reply::lines(lines)
                    }
                    Err(err) => error_reply(err),
                }
            }
            Command::List => self.list(),
            Command::Count => Reply::line(OutputLine::plain(format!(
                "{} medication(s) in the system",
                self.system.medication_count()
            ))),
            Command::History(action) => self.history(action),
            Command::Alert(action) => self.alert(action),
            Command::Search(query) => self.search(&query),
            Command::Sort { field, algorithm } => self.sort(&field, &algorithm),
            Command::Help => Reply::lines(help_lines()),
            Command::Exit => Reply {
                lines: vec![OutputLine::heading(
                    "Thank you for using the Medication Reminder System!",
                )],
                exit: true,
            },
        }
    }

    fn delete(&mut self, id: i32) -> Reply {
        let current = self.system.medications();
        if current.is_empty() {
            return Reply::line(OutputLine::warning("No medications to delete!"));
        }

        let mut lines = current_listing(&current);
        match self.system.delete_medication(id) {
            Ok(removed) => lines.push(OutputLine::success(format!(
                "Medication '{}' deleted successfully!",
                removed.name
            ))),
            Err(err) => lines.push(error_line(err)),
        }
        Reply::lines(lines)
    }

    fn list(&self) -> Reply {
        let medications = self.system.medications();
        if medications.is_empty() {
            return Reply::line(OutputLine::warning("No medications in the system!"));
        }

        let mut lines = vec![OutputLine::heading("=== ALL MEDICATIONS ===")];
        lines.extend(numbered_records("Medication", &medications));
        Reply::lines(lines)
    }

    fn history(&mut self, action: HistoryAction) -> Reply {
        if self.system.medication_count() == 0 {
            return Reply::line(OutputLine::warning("No medications in the system!"));
        }

        match action {
            HistoryAction::Peek => match self.system.recent_history() {
                Some(record) => {
                    let mut lines = vec![OutputLine::plain("Most recent medication added:")];
                    lines.extend(record_lines(record));
                    Reply::lines(lines)
                }
                None => Reply::line(OutputLine::warning("No medication history available!")),
            },
            HistoryAction::Pop => match self.system.pop_history() {
                Ok(removed) => Reply::line(OutputLine::success(format!(
                    "Removed from history: {}",
                    removed.name
                ))),
                Err(MedError::Empty(_)) => {
                    Reply::line(OutputLine::warning("No medication history to remove!"))
                }
                Err(err) => error_reply(err),
            },
            HistoryAction::List => {
                let entries = self.system.history_entries();
                if entries.is_empty() {
                    return Reply::line(OutputLine::warning("No medication history available!"));
                }
                let mut lines = vec![OutputLine::heading(
                    "=== MEDICATION HISTORY (Most Recent First) ===",
                )];
                lines.extend(numbered_records("History Entry", &entries));
                Reply::lines(lines)
            }
        }
    }

    fn alert(&mut self, action: AlertAction) -> Reply {
        if self.system.medication_count() == 0 {
            return Reply::line(OutputLine::warning("No medications in the system!"));
        }

        match action {
            AlertAction::Add(id) => {
                let mut lines = current_listing(&self.system.medications());
                match self.system.queue_refill_alert(id) {
                    Ok(record) => lines.push(OutputLine::success(format!(
                        "Refill alert added for {}",
                        record.name
                    ))),
                    Err(err) => lines.push(error_line(err)),
                }
                Reply::lines(lines)
            }
            AlertAction::Next => match self.system.process_next_alert() {
                Ok(record) => Reply::line(OutputLine::success(format!(
                    "Processed refill alert for: {}",
                    record.name
                ))),
                Err(MedError::Empty(_)) => {
                    Reply::line(OutputLine::warning("No refill alerts to process!"))
                }
                Err(err) => error_reply(err),
            },
            AlertAction::List => {
                let pending = self.system.pending_alerts();
                if pending.is_empty() {
                    return Reply::line(OutputLine::warning("No refill alerts in queue!"));
                }
                let mut lines = vec![OutputLine::heading("=== REFILL ALERTS QUEUE ===")];
                lines.extend(numbered_records("Alert", &pending));
                Reply::lines(lines)
            }
        }
    }

    fn search(&self, query: &str) -> Reply {
        match self.system.search(query) {
            Ok(matches) if matches.is_empty() => Reply::lines(vec![
                OutputLine::heading("=== SEARCH RESULTS ==="),
                OutputLine::warning(format!("No medications found matching '{}'", query)),
            ]),
            Ok(matches) => {
                let mut lines = vec![OutputLine::heading("=== SEARCH RESULTS ===")];
                for record in &matches {
                    lines.extend(record_lines(record));
                }
                Reply::lines(lines)
            }
            Err(err) => error_reply(err),
        }
    }

    fn sort(&self, field: &str, algorithm: &str) -> Reply {
        if self.system.medication_count() == 0 {
            return Reply::line(OutputLine::warning("No medications to sort!"));
        }

        let sorted = match self.system.sort_by_selectors(field, algorithm) {
            Ok(sorted) => sorted,
            Err(err) => return error_reply(err),
        };

        let mut lines = vec![OutputLine::heading(format!(
            "Medications sorted by {} using {}:",
            sorted.field,
            sorted.algorithm.sorter().name()
        ))];
        lines.extend(numbered_records("Sorted Entry", &sorted.records));
        Reply::lines(lines)
    }
}

/// Numbered one-line summaries shown before picking an id
fn current_listing(records: &[MedicationRecord]) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::heading("=== CURRENT MEDICATIONS ===")];
    lines.extend(
        records
            .iter()
            .enumerate()
            .map(|(index, record)| summary_line(index + 1, record)),
    );
    lines
}

fn error_line(err: MedError) -> OutputLine {
    let text = match err {
        MedError::Full {
            container,
            capacity,
        } => format!("{} is full! ({} entries)", container, capacity),
        other => other.to_string(),
    };
    OutputLine::error(text)
}

fn error_reply(err: MedError) -> Reply {
    Reply::line(error_line(err))
}

fn help_lines() -> Vec<OutputLine> {
    use super::command::{
        ADD_USAGE, ALERT_USAGE, DELETE_USAGE, HISTORY_USAGE, SEARCH_USAGE, SORT_USAGE,
        UPDATE_USAGE,
    };

    vec![
        OutputLine::heading("=== COMMANDS ==="),
        OutputLine::plain(ADD_USAGE),
        OutputLine::plain(UPDATE_USAGE),
        OutputLine::plain(DELETE_USAGE),
        OutputLine::plain("list | count"),
        OutputLine::plain(HISTORY_USAGE),
        OutputLine::plain(ALERT_USAGE),
        OutputLine::plain(SEARCH_USAGE),
        OutputLine::plain(SORT_USAGE),
        OutputLine::plain("help | exit"),
        OutputLine::plain("Wrap values containing spaces in double quotes: \"Vitamin D\""),
    ]
}
