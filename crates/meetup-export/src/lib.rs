//! Export a Meetup group's past events to a `name,time` CSV file.

pub mod config;
pub mod csv_writer;
pub mod error;
pub mod meetup_client;

pub use config::{ExportConfig, TimeBasis};
pub use error::{ExportError, ExportResult};
pub use meetup_client::MeetupClient;

/// Fetch, decode and write once. Returns the number of data rows written.
///
/// Transport errors return before the output file is opened, so an existing
/// file is left untouched. Decode errors are logged and produce a
/// header-only file.
pub async fn run_export(client: &MeetupClient, config: &ExportConfig) -> ExportResult<usize> {
    let response = client.fetch_events(&config.group, &config.status).await?;
    let events = meetup_client::read_events(response).await;
    csv_writer::write_events_csv(&config.output_path, events, config.time_basis)
}
