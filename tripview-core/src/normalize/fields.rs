//! Field extraction for loosely-typed payload records
//!
//! Hotels and activities arrive as arbitrary JSON objects. Fields are read one
//! by one so that a single mistyped field never discards the whole record.

use crate::types::{ActivityDetails, Hotel};
use serde_json::{Map, Number, Value};

/// Text form of a JSON number, without a trailing `.0` for whole floats.
pub fn number_text(n: &Number) -> String {
    if n.is_f64() {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    } else {
        n.to_string()
    }
}

/// Text form of any JSON value for summary display.
///
/// Strings are used verbatim; containers fall back to compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Displayable text of a field, or `None` when it would not show.
///
/// Empty strings, `false`, `null` and containers count as absent.
fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Non-empty string field; other types count as absent.
fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn number_field(record: &Map<String, Value>, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// Build a hotel card record. Missing text fields become empty strings.
pub fn hotel_from_record(record: &Map<String, Value>) -> Hotel {
    Hotel {
        hotel_name: display_text(record.get("hotelName")).unwrap_or_default(),
        hotel_address: display_text(record.get("hotelAddress")).unwrap_or_default(),
        price: display_text(record.get("price")).unwrap_or_default(),
        reviews: number_field(record, "reviews"),
    }
}

/// Build structured activity details from a slot object.
pub fn activity_from_record(record: &Map<String, Value>) -> ActivityDetails {
    ActivityDetails {
        place_name: display_text(record.get("placeName")),
        place_detail: display_text(record.get("placeDetail")),
        rating: number_field(record, "rating"),
        ticket_pricing: display_text(record.get("ticketPricing")),
        time_travel: display_text(record.get("timeTravel")),
        place_img_url: string_field(record, "placeImgUrl"),
    }
}
