//! Data model shared by the ticketing API client, the store, and the CLI.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

pub type MovieId = u64;
pub type ShowtimeId = u64;
pub type TicketId = u64;
pub type TheaterId = u64;

/// A movie in the theater's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub rating: String,
    /// Running time in minutes
    pub length: u32,
    pub release_date: Date,
}

/// A scheduled screening with its (cached) seat pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    pub id: ShowtimeId,
    pub movie_id: MovieId,
    pub theater_id: TheaterId,
    pub date: Date,
    /// Start time as served by the API (`HH:MM`)
    pub time: String,
    pub available_seats: u32,
}

impl Showtime {
    /// Apply a signed seat adjustment, never going below zero.
    pub fn adjust_seats(&mut self, delta: i64) {
        let adjusted = i64::from(self.available_seats).saturating_add(delta);
        self.available_seats = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
    }
}

impl fmt::Display for Showtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

/// A purchased ticket as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub holder_name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub holder_age: u32,
    pub ticket_price: f64,
    pub theater_id: TheaterId,
    // The service stores this column as text
    #[serde(deserialize_with = "lenient_number")]
    pub showtime_id: ShowtimeId,
}

/// A movie joined with its showtimes: the combined listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieWithShowtimes {
    #[serde(flatten)]
    pub movie: Movie,
    pub showtimes: Vec<Showtime>,
}

/// Body of a ticket purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTicket {
    pub holder_name: String,
    pub holder_age: u32,
    pub theater_id: TheaterId,
    pub showtime_id: ShowtimeId,
}

/// Response to a successful purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTicket {
    pub ticket_id: TicketId,
    #[serde(default)]
    pub message: Option<String>,
}

/// Fields to change on an existing ticket; absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_age: Option<u32>,
}

impl TicketUpdate {
    pub fn is_empty(&self) -> bool {
        self.holder_name.is_none() && self.holder_age.is_none()
    }
}

/// Generic `{message}` body returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Accept a number encoded either as a JSON number or as a numeric string.
fn lenient_number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<T> {
        Number(T),
        String(String),
    }

    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
