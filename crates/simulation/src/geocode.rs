//! Place-name lookup against a Nominatim-compatible search endpoint.
//!
//! The simulation owns the request/response handling; the binary owns the
//! transport. A [`TwinAction::SearchLocation`](crate::game_actions::TwinAction)
//! parks a validated query in [`LocationSearch`]; the transport bridge takes
//! it, performs the fetch, and hands `(status, body)` back through
//! [`parse_search_response`] and [`LocationSearch::finish`]. Failures leave
//! the selected location untouched.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GEOCODE_ENDPOINT;
use crate::notices::Notices;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    EmptyQuery,
    /// Non-success HTTP status.
    Http(u16),
    /// Body was not the expected JSON array.
    Malformed(String),
    NoResults,
    InvalidCoordinates,
    /// The request could not be performed at all.
    Transport(String),
}

impl GeocodeError {
    /// Message shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeocodeError::EmptyQuery => "Please enter a location to search",
            GeocodeError::NoResults => "Location not found. Please try a different search term.",
            _ => "Failed to search location. Please try again.",
        }
    }
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::EmptyQuery => write!(f, "search query is empty"),
            GeocodeError::Http(status) => write!(f, "HTTP error, status {status}"),
            GeocodeError::Malformed(detail) => write!(f, "malformed search response: {detail}"),
            GeocodeError::NoResults => write!(f, "no results"),
            GeocodeError::InvalidCoordinates => {
                write!(f, "invalid coordinates received from search service")
            }
            GeocodeError::Transport(detail) => write!(f, "search request failed: {detail}"),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Trim `query`, rejecting it when nothing is left.
pub fn validate_query(query: &str) -> Result<&str, GeocodeError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(GeocodeError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// Full request URL for `query`, asking for at most one JSON result.
pub fn search_url(query: &str) -> String {
    format!(
        "{GEOCODE_ENDPOINT}?q={}&format=json&limit=1",
        urlencoding::encode(query)
    )
}

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(GeocodeError::InvalidCoordinates)
}

/// Interpret a search response. `query` names the location when the result
/// carries no display name.
pub fn parse_search_response(
    status: u16,
    body: &str,
    query: &str,
) -> Result<GeoLocation, GeocodeError> {
    if !(200..300).contains(&status) {
        return Err(GeocodeError::Http(status));
    }
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed(e.to_string()))?;
    let hit = hits.into_iter().next().ok_or(GeocodeError::NoResults)?;

    let lat = parse_coordinate(&hit.lat)?;
    let lon = parse_coordinate(&hit.lon)?;
    let name = hit
        .display_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| query.to_string());

    Ok(GeoLocation { lat, lon, name })
}

/// Location lookup state. At most one query is queued or in flight.
#[derive(Resource, Debug, Clone, Default)]
pub struct LocationSearch {
    queued: Option<String>,
    in_flight: Option<String>,
    pub selected: Option<GeoLocation>,
}

impl LocationSearch {
    pub fn is_busy(&self) -> bool {
        self.queued.is_some() || self.in_flight.is_some()
    }

    /// Queue an already validated query. Returns `false` while busy.
    pub fn enqueue(&mut self, query: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.queued = Some(query.to_string());
        true
    }

    /// Hand the queued query to the transport, marking it in flight.
    pub fn take_queued(&mut self) -> Option<String> {
        let query = self.queued.take()?;
        self.in_flight = Some(query.clone());
        Some(query)
    }

    pub fn queued(&self) -> Option<&str> {
        self.queued.as_deref()
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    /// Record the outcome of the in-flight lookup.
    pub fn finish(&mut self, outcome: Result<GeoLocation, GeocodeError>, notices: &mut Notices) {
        let query = self.in_flight.take().unwrap_or_default();
        match outcome {
            Ok(location) => {
                info!(
                    "Location selected for '{}': {} ({:.4}, {:.4})",
                    query, location.name, location.lat, location.lon
                );
                notices.success(format!("Location selected: {}", location.name));
                self.selected = Some(location);
            }
            Err(err) => {
                warn!("Location search for '{}' failed: {}", query, err);
                notices.error(err.user_message());
            }
        }
    }
}
