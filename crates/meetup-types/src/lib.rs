use chrono::FixedOffset;
use serde::Deserialize;

pub mod lenient;

/// A past event as returned by `GET /{urlname}/events`.
///
/// Only `name` and `time` reach the CSV; the rest is decoded so the record
/// mirrors the API payload. Every field tolerates a missing or mistyped value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeetupEvent {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Start instant, milliseconds since the Unix epoch
    #[serde(deserialize_with = "lenient::or_default")]
    pub time: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub created: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub updated: i64,
    /// Milliseconds east of UTC at the venue
    #[serde(alias = "utcOffset", deserialize_with = "lenient::or_default")]
    pub utc_offset: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(alias = "waitlistCount", deserialize_with = "lenient::or_default")]
    pub waitlist_count: i64,
    #[serde(alias = "yesRsvpCount", deserialize_with = "lenient::or_default")]
    pub yes_rsvp_count: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub venue: Option<Venue>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub group: Option<Group>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub link: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub visibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Venue {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub repinned: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub address_1: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub city: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub country: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub localized_country_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub created: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub join_mode: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub lon: f64,
    /// URL slug, e.g. `SciFiMuc`
    #[serde(deserialize_with = "lenient::or_default")]
    pub urlname: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub who: String,
}

impl MeetupEvent {
    /// Start instant in whole epoch seconds. Sub-second precision is dropped.
    pub fn start_seconds(&self) -> i64 {
        self.time / 1000
    }

    /// The venue's offset from UTC, if it is a valid whole-second offset.
    pub fn venue_offset(&self) -> Option<FixedOffset> {
        let seconds = i32::try_from(self.utc_offset / 1000).ok()?;
        FixedOffset::east_opt(seconds)
    }
}
