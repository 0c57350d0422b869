use crate::error::{BoardResult, DuelboardError};
use crate::events::BoardEvent;
use crate::store::Side;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// One scripted button press, offset in milliseconds from script start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: BoardEvent,
}

/// Loads an event script from a CSV file.
///
/// Columns: `at_ms,action,side,amount`. Actions are the snake_case event
/// names (`increment`, `decrement`, `use_coin`, `reset_coin`, `reset_all`);
/// `side` is `top` or `bottom` (blank for `reset_all`), `amount` is only
/// read for the score actions. Timestamps must be non-decreasing.
pub fn load_script<P: AsRef<Path>>(path: P) -> BoardResult<Vec<TimedEvent>> {
    let file = File::open(path)?;
    read_script(file)
}

pub fn read_script<R: Read>(reader: R) -> BoardResult<Vec<TimedEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut events = Vec::new();
    let mut last_at_ms = 0u64;

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is row 0 for the reader, so humans count from 2.
        let row = i + 2;
        if record.len() < 2 {
            return Err(DuelboardError::Validation(format!(
                "row {}: expected at_ms,action,side,amount",
                row
            )));
        }

        let at_ms: u64 = record[0].trim().parse().map_err(|_| {
            DuelboardError::Validation(format!("row {}: bad timestamp '{}'", row, &record[0]))
        })?;
        if at_ms < last_at_ms {
            return Err(DuelboardError::Validation(format!(
                "row {}: timestamp {} goes backwards (previous was {})",
                row, at_ms, last_at_ms
            )));
        }
        last_at_ms = at_ms;

        let action = record[1].trim().to_lowercase();
        let event = match action.as_str() {
            "increment" => BoardEvent::Increment {
                side: parse_side(&record, row)?,
                amount: parse_amount(&record, row)?,
            },
            "decrement" => BoardEvent::Decrement {
                side: parse_side(&record, row)?,
                amount: parse_amount(&record, row)?,
            },
            "use_coin" => BoardEvent::UseCoin {
                side: parse_side(&record, row)?,
            },
            "reset_coin" => BoardEvent::ResetCoin {
                side: parse_side(&record, row)?,
            },
            "reset_all" => BoardEvent::ResetAll,
            other => {
                return Err(DuelboardError::Validation(format!(
                    "row {}: unknown action '{}'",
                    row, other
                )))
            }
        };

        debug!(at_ms, ?event, "script row");
        events.push(TimedEvent { at_ms, event });
    }

    info!("Loaded {} scripted events", events.len());
    Ok(events)
}

fn parse_side(record: &csv::StringRecord, row: usize) -> BoardResult<Side> {
    let raw = record.get(2).map(str::trim).unwrap_or("");
    Side::from_str(raw)
        .map_err(|_| DuelboardError::Validation(format!("row {}: bad side '{}'", row, raw)))
}

fn parse_amount(record: &csv::StringRecord, row: usize) -> BoardResult<u32> {
    let raw = record.get(3).map(str::trim).unwrap_or("");
    raw.parse()
        .map_err(|_| DuelboardError::Validation(format!("row {}: bad amount '{}'", row, raw)))
}
