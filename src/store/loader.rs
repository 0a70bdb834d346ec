//! CSV loader for the headerless five-column event log

use super::event::{Action, Event, EventTable};
use super::COLUMN_COUNT;
use crate::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the event log at `path`
///
/// Columns are bound by position: `user_id, game, action, value, unused`.
/// The first malformed record aborts the load.
pub fn load_events(path: impl AsRef<Path>) -> Result<EventTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let events = parse_events(file)?;
    if events.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let other_count = events
        .iter()
        .filter(|e| matches!(e.action, Action::Other(_)))
        .count();
    if other_count > 0 {
        log::warn!(
            "{} rows in {} have an action other than purchase/play and will be ignored",
            other_count,
            path.display()
        );
    }

    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(EventTable::new(path, events))
}

/// Parse raw CSV records into events
pub fn parse_events<R: Read>(reader: R) -> Result<Vec<Event>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut events = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let record_no = idx as u64 + 1;

        if record.len() != COLUMN_COUNT {
            return Err(LoadError::ColumnCount {
                record: record_no,
                found: record.len(),
            });
        }

        let raw_value = &record[3];
        let value = match raw_value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            Ok(_) => {
                return Err(LoadError::NonFiniteValue {
                    record: record_no,
                    raw: raw_value.to_string(),
                })
            }
            Err(_) => {
                return Err(LoadError::InvalidValue {
                    record: record_no,
                    raw: raw_value.to_string(),
                })
            }
        };

        events.push(Event {
            user_id: record[0].to_string(),
            game: record[1].to_string(),
            action: Action::parse(&record[2]),
            value,
        });
    }

    Ok(events)
}
