//! WASM bindings for mutual-availability.
//!
//! Exposes two-party free window search to JavaScript via `wasm-bindgen`.
//! All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p mutual-availability-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/mutual-availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/mutual_availability_wasm.wasm
//! ```

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use mutual_availability::{Block, Party, Window};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

type Interval = (DateTime<Utc>, DateTime<Utc>);

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct WindowDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&Window<DateTime<Utc>>> for WindowDto {
    fn from(w: &Window<DateTime<Utc>>) -> Self {
        Self {
            start: w.start.to_rfc3339(),
            end: w.end.to_rfc3339(),
            duration_minutes: (w.end - w.start).num_minutes(),
        }
    }
}

/// A merged busy interval. The origin label is deliberately not exposed.
#[derive(Serialize)]
struct BusyDto {
    start: String,
    end: String,
}

impl From<&Block<DateTime<Utc>>> for BusyDto {
    fn from(b: &Block<DateTime<Utc>>) -> Self {
        Self {
            start: b.start.to_rfc3339(),
            end: b.end.to_rfc3339(),
        }
    }
}

/// Input format for blockers passed from JavaScript.
#[derive(Deserialize)]
struct BlockerInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (e.g., "2018-07-20T12:00:00+00:00") and naive local time
/// (e.g., "2018-07-20T12:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

/// Convert a JSON array of `{start, end}` objects into `(start, end)` pairs.
fn parse_blockers_json(json: &str) -> Result<Vec<Interval>, String> {
    let inputs: Vec<BlockerInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid blockers JSON: {}", e))?;

    inputs
        .into_iter()
        .map(|input| Ok((parse_datetime(&input.start)?, parse_datetime(&input.end)?)))
        .collect()
}

fn compute(
    party_a_json: &str,
    party_b_json: &str,
    search_start: &str,
    search_end: &str,
    duration_minutes: i64,
) -> Result<Vec<Window<DateTime<Utc>>>, String> {
    let party_a = parse_blockers_json(party_a_json)?;
    let party_b = parse_blockers_json(party_b_json)?;
    let start = parse_datetime(search_start)?;
    let end = parse_datetime(search_end)?;
    let duration = Duration::try_minutes(duration_minutes)
        .ok_or_else(|| format!("Invalid duration: {} minutes", duration_minutes))?;

    mutual_availability::compute_available_windows(&party_a, &party_b, start, end, duration)
        .map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window in which both parties are free for `duration_minutes`.
///
/// `party_a_json` and `party_b_json` must be JSON arrays of `{start, end}`
/// objects with ISO 8601 datetime strings. Returns a JSON string containing an
/// array of `{start, end, duration_minutes}` objects in chronological order.
#[wasm_bindgen(js_name = "computeAvailableWindows")]
pub fn compute_available_windows(
    party_a_json: &str,
    party_b_json: &str,
    search_start: &str,
    search_end: &str,
    duration_minutes: i64,
) -> Result<String, JsValue> {
    let windows = compute(party_a_json, party_b_json, search_start, search_end, duration_minutes)
        .map_err(|e| JsValue::from_str(&e))?;
    let dtos: Vec<WindowDto> = windows.iter().map(WindowDto::from).collect();
    to_json(&dtos).map_err(|e| JsValue::from_str(&e))
}

/// Find the earliest window in which both parties are free for
/// `duration_minutes`.
///
/// Same inputs as `computeAvailableWindows`. Returns a JSON object
/// `{start, end, duration_minutes}`, or `null` when no window fits.
#[wasm_bindgen(js_name = "findFirstAvailableWindow")]
pub fn find_first_available_window(
    party_a_json: &str,
    party_b_json: &str,
    search_start: &str,
    search_end: &str,
    duration_minutes: i64,
) -> Result<String, JsValue> {
    let windows = compute(party_a_json, party_b_json, search_start, search_end, duration_minutes)
        .map_err(|e| JsValue::from_str(&e))?;
    let first = windows.first().map(WindowDto::from);
    to_json(&first).map_err(|e| JsValue::from_str(&e))
}

/// Merge both parties' blockers into one busy timeline.
///
/// Returns a JSON array of `{start, end}` objects, sorted and non-overlapping.
#[wasm_bindgen(js_name = "mergeBlockers")]
pub fn merge_blockers(party_a_json: &str, party_b_json: &str) -> Result<String, JsValue> {
    let merged = merged_timeline(party_a_json, party_b_json).map_err(|e| JsValue::from_str(&e))?;
    let dtos: Vec<BusyDto> = merged.iter().map(BusyDto::from).collect();
    to_json(&dtos).map_err(|e| JsValue::from_str(&e))
}

fn merged_timeline(
    party_a_json: &str,
    party_b_json: &str,
) -> Result<Vec<Block<DateTime<Utc>>>, String> {
    let party_a = parse_blockers_json(party_a_json)?;
    let party_b = parse_blockers_json(party_b_json)?;
    mutual_availability::validate_blockers(Party::A, &party_a).map_err(|e| e.to_string())?;
    mutual_availability::validate_blockers(Party::B, &party_b).map_err(|e| e.to_string())?;
    Ok(mutual_availability::merge_blocks(
        mutual_availability::combine_blockers(&party_a, &party_b),
    ))
}
