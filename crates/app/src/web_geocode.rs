//! Browser transport for location search.
//!
//! Takes the query parked in `LocationSearch`, fetches it with the browser's
//! `fetch`, and hands `(status, body)` back to the simulation on a later
//! frame through a shared slot.

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use simulation::config::GEOCODE_USER_AGENT;
use simulation::geocode::{parse_search_response, search_url, GeocodeError, LocationSearch};
use simulation::notices::Notices;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Shared slot used to bridge async fetch -> ECS world.
#[derive(Resource, Default, Clone)]
pub struct GeocodeResponseBuffer(pub Arc<Mutex<Option<Result<(u16, String), String>>>>);

/// Start a fetch for the queued query, if there is one.
pub fn begin_location_lookup(
    mut search: ResMut<LocationSearch>,
    buffer: Res<GeocodeResponseBuffer>,
) {
    let Some(query) = search.take_queued() else {
        return;
    };
    let url = search_url(&query);
    let slot = buffer.0.clone();
    info!("Searching location '{}'", query);

    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_search(&url).await;
        if let Ok(mut guard) = slot.lock() {
            *guard = Some(result);
        }
    });
}

/// Poll the fetch result and finish the in-flight lookup.
pub fn poll_location_lookup(
    buffer: Res<GeocodeResponseBuffer>,
    mut search: ResMut<LocationSearch>,
    mut notices: ResMut<Notices>,
) {
    let Ok(mut slot) = buffer.0.lock() else {
        return;
    };
    let Some(result) = slot.take() else {
        return;
    };

    let query = search.in_flight().unwrap_or_default().to_string();
    let outcome = match result {
        Ok((status, body)) => parse_search_response(status, &body, &query),
        Err(e) => {
            error!("Failed to fetch location '{}': {}", query, e);
            Err(GeocodeError::Transport(e))
        }
    };
    search.finish(outcome, &mut notices);
}

async fn fetch_search(url: &str) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;

    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    let request = web_sys::Request::new_with_str_and_init(url, &init)
        .map_err(|e| format!("failed to build request: {:?}", e))?;
    // Some browsers refuse to override the user agent; the lookup still works.
    if let Err(e) = request.headers().set("User-Agent", GEOCODE_USER_AGENT) {
        warn!("Could not set User-Agent header: {:?}", e);
    }

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| "failed to cast fetch response".to_string())?;

    let status = response.status();
    let text_promise = response
        .text()
        .map_err(|e| format!("response.text() failed: {:?}", e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("await response text failed: {:?}", e))?;
    let body = text_value
        .as_string()
        .ok_or_else(|| "response text was not a string".to_string())?;
    Ok((status, body))
}
