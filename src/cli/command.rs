use medtrack::core::{
    MAX_DATE_LEN, MAX_DOSAGE_LEN, MAX_NAME_LEN, MedicationRecord, MedicationUpdate, RefillInfo,
};
use thiserror::Error;

pub const ADD_USAGE: &str =
    "add <id> <name> <dosage> <quantity> <price> <refills> <next-refill-date>";
pub const UPDATE_USAGE: &str =
    "update <id> <name> <dosage> <quantity> <price> <refills> <next-refill-date>";
pub const DELETE_USAGE: &str = "delete <id>";
pub const HISTORY_USAGE: &str = "history [peek|pop|list]";
pub const ALERT_USAGE: &str = "alert add <id> | alert next | alert list";
pub const SEARCH_USAGE: &str = "search <name>";
pub const SORT_USAGE: &str = "sort <name|price|quantity> <bubble|selection>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Peek,
    Pop,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Add(i32),
    Next,
    List,
}

/// One parsed line of shell input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(MedicationRecord),
    Update { id: i32, update: MedicationUpdate },
    Delete(i32),
    List,
    Count,
    History(HistoryAction),
    Alert(AlertAction),
    Search(String),
    /// Raw selectors; the library decides whether they are valid
    Sort { field: String, algorithm: String },
    Help,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' to see the available commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid {field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} is too long ({len} characters, at most {max} allowed)")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Unterminated quote")]
    UnterminatedQuote,
}

/// Split a line on whitespace; double quotes group words into one token
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if pending {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Parse one line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let keyword = keyword.to_ascii_lowercase();

    // search takes the rest of the line verbatim so names may contain spaces
    if keyword == "search" {
        let query = strip_quotes(rest.trim());
        if query.is_empty() {
            return Err(CommandError::Usage(SEARCH_USAGE));
        }
        return Ok(Some(Command::Search(query.to_string())));
    }

    let tokens = tokenize(rest)?;
    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let command = match (keyword.as_str(), args.as_slice()) {
        ("add", [id, details @ ..]) if details.len() == 6 => {
            let id = parse_int("id", id)?;
            Command::Add(parse_details(details)?.into_record(id))
        }
        ("add", _) => return Err(CommandError::Usage(ADD_USAGE)),

        ("update", [id, details @ ..]) if details.len() == 6 => Command::Update {
            id: parse_int("id", id)?,
            update: parse_details(details)?,
        },
        ("update", _) => return Err(CommandError::Usage(UPDATE_USAGE)),

        ("delete", [id]) => Command::Delete(parse_int("id", id)?),
        ("delete", _) => return Err(CommandError::Usage(DELETE_USAGE)),

        ("list", []) => Command::List,
        ("list", _) => return Err(CommandError::Usage("list")),
        ("count", []) => Command::Count,
        ("count", _) => return Err(CommandError::Usage("count")),

        ("history", []) => Command::History(HistoryAction::List),
        ("history", [action]) => match action.to_ascii_lowercase().as_str() {
            "peek" => Command::History(HistoryAction::Peek),
            "pop" => Command::History(HistoryAction::Pop),
            "list" => Command::History(HistoryAction::List),
            _ => return Err(CommandError::Usage(HISTORY_USAGE)),
        },
        ("history", _) => return Err(CommandError::Usage(HISTORY_USAGE)),

        ("alert", []) => Command::Alert(AlertAction::List),
        ("alert", [action]) => match action.to_ascii_lowercase().as_str() {
            "next" => Command::Alert(AlertAction::Next),
            "list" => Command::Alert(AlertAction::List),
            _ => return Err(CommandError::Usage(ALERT_USAGE)),
        },
        ("alert", [action, id]) if action.eq_ignore_ascii_case("add") => {
            Command::Alert(AlertAction::Add(parse_int("id", id)?))
        }
        ("alert", _) => return Err(CommandError::Usage(ALERT_USAGE)),

        ("sort", [field, algorithm]) => Command::Sort {
            field: field.to_string(),
            algorithm: algorithm.to_string(),
        },
        ("sort", _) => return Err(CommandError::Usage(SORT_USAGE)),

        ("help", _) => Command::Help,
        ("exit" | "quit", _) => Command::Exit,

        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// name, dosage, quantity, price, refills, next refill date
fn parse_details(args: &[&str]) -> Result<MedicationUpdate, CommandError> {
    let [name, dosage, quantity, price, refills, date] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };

    Ok(MedicationUpdate {
        name: bounded("name", name, MAX_NAME_LEN)?,
        dosage: bounded("dosage", dosage, MAX_DOSAGE_LEN)?,
        quantity: parse_int("quantity", quantity)?,
        price: parse_price(price)?,
        refill: RefillInfo::new(
            parse_int("refills", refills)?,
            bounded("next refill date", date, MAX_DATE_LEN)?,
        ),
    })
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, CommandError> {
    value.parse::<i32>().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Finite decimal, optionally prefixed with `$`
fn parse_price(value: &str) -> Result<f64, CommandError> {
    value
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber {
            field: "price",
            value: value.to_string(),
        })
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<String, CommandError> {
    let len = value.chars().count();
    if len > max {
        return Err(CommandError::TooLong { field, len, max });
    }
    Ok(value.to_string())
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}
