//! Meetup events API client: one GET, then a best-effort decode.

use meetup_types::MeetupEvent;
use reqwest::{Client, Response};

use crate::error::{ExportError, ExportResult};

/// Client for the Meetup events endpoint
pub struct MeetupClient {
    http: Client,
    base_url: String,
}

impl MeetupClient {
    /// Uses reqwest's default client, which has no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `{base_url}/{group}/events?status={status}`
    pub fn events_url(&self, group: &str, status: &str) -> String {
        format!(
            "{}/{}/events?status={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(group),
            urlencoding::encode(status)
        )
    }

    /// Issue a single GET for a group's events and hand back the response
    /// with its body unread.
    ///
    /// The status code is not checked; a non-success response is only
    /// logged, and its body still goes through the decoder.
    pub async fn fetch_events(&self, group: &str, status: &str) -> ExportResult<Response> {
        let url = self.events_url(group, status);
        let request = self
            .http
            .get(&url)
            .build()
            .map_err(ExportError::BuildRequest)?;

        tracing::info!("Requesting {}", url);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(ExportError::Request)?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Meetup API responded {}", status);
        } else {
            tracing::warn!("Meetup API responded {}, decoding body anyway", status);
        }

        Ok(response)
    }
}

/// Read the response body and decode it. Never fails: a body that cannot be
/// read or parsed yields an empty list.
pub async fn read_events(response: Response) -> Vec<MeetupEvent> {
    match response.bytes().await {
        Ok(body) => decode_events(&body),
        Err(e) => {
            tracing::warn!("Failed to read response body: {}", e);
            Vec::new()
        }
    }
}

/// Decode a JSON array of events, logging and swallowing any error.
pub fn decode_events(body: &[u8]) -> Vec<MeetupEvent> {
    match try_decode_events(body) {
        Ok(events) => {
            tracing::info!("Decoded {} events", events.len());
            events
        }
        Err(e) => {
            tracing::warn!("Failed to decode events: {}", e);
            Vec::new()
        }
    }
}

/// Decode the first JSON value of the body as an array of events.
///
/// Anything after that first value is ignored. Errors only when the first
/// value is malformed or not an array; an empty body gives an empty list.
/// `null` elements become default records, other non-object elements are
/// skipped, and mistyped fields inside an object fall back to their
/// defaults.
pub fn try_decode_events(body: &[u8]) -> Result<Vec<MeetupEvent>, serde_json::Error> {
    let items = match serde_json::Deserializer::from_slice(body)
        .into_iter::<Vec<serde_json::Value>>()
        .next()
    {
        Some(items) => items?,
        None => return Ok(Vec::new()),
    };

    let events = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.is_null() {
                return Some(MeetupEvent::default());
            }
            if !item.is_object() {
                tracing::warn!("Skipping event #{}: not a JSON object", index);
                return None;
            }
            serde_json::from_value::<MeetupEvent>(item)
                .map_err(|e| tracing::warn!("Skipping event #{}: {}", index, e))
                .ok()
        })
        .collect();

    Ok(events)
}
