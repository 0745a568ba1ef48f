//! Projection of events to `(name, time)` rows and the CSV file writer.

use std::fmt;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone, Utc};
use csv::{Terminator, WriterBuilder};
use meetup_types::MeetupEvent;
use serde::Serialize;

use crate::config::TimeBasis;
use crate::error::{ExportError, ExportResult};

/// `YYYY-MM-DD HH:MM`, 24-hour, no seconds, no zone suffix
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const HEADER: [&str; 2] = ["name", "time"];

/// One CSV data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub name: String,
    pub time: String,
}

impl EventRow {
    pub fn from_event(event: MeetupEvent, basis: TimeBasis) -> Self {
        let time = format_event_time(&event, basis);
        EventRow {
            name: event.name,
            time,
        }
    }
}

/// Render an event's start time in the requested basis.
pub fn format_event_time(event: &MeetupEvent, basis: TimeBasis) -> String {
    let seconds = event.start_seconds();
    match basis {
        TimeBasis::Local => format_epoch_seconds(seconds, &Local),
        TimeBasis::Utc => format_epoch_seconds(seconds, &Utc),
        TimeBasis::EventOffset => match event.venue_offset() {
            Some(offset) => format_epoch_seconds(seconds, &offset),
            None => {
                tracing::debug!(
                    "Event {} has unusable utc_offset {}, using UTC",
                    event.id,
                    event.utc_offset
                );
                format_epoch_seconds(seconds, &Utc)
            }
        },
    }
}

/// Format whole epoch seconds as wall-clock time in `tz`.
///
/// Seconds outside chrono's range produce an empty string.
pub fn format_epoch_seconds<Tz>(seconds: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp(seconds, 0) {
        Some(instant) => instant.with_timezone(tz).format(TIME_FORMAT).to_string(),
        None => {
            tracing::warn!("Timestamp {} is out of range, leaving time empty", seconds);
            String::new()
        }
    }
}

/// Create or truncate `path` and write the header plus one row per event.
///
/// Returns the number of data rows written. A failure after the header may
/// leave a partial file behind; nothing is rolled back.
pub fn write_events_csv(
    path: &Path,
    events: Vec<MeetupEvent>,
    basis: TimeBasis,
) -> ExportResult<usize> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|source| ExportError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    let rows = write_rows(&mut writer, events, basis)?;
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    events: Vec<MeetupEvent>,
    basis: TimeBasis,
) -> Result<usize, csv::Error> {
    writer.write_record(HEADER)?;

    let mut rows = 0;
    for event in events {
        writer.serialize(EventRow::from_event(event, basis))?;
        rows += 1;
    }
    Ok(rows)
}
