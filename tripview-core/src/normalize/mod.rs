//! Payload normalization
//!
//! Turns the untrusted navigation-state snapshot into a [`NormalizedTrip`].
//!
//! ## Design Principles
//!
//! 1. **Never fails**: every malformed input degrades to the safest render
//!    state (no data, absent or empty itinerary) plus a [`Warning`]
//! 2. **Order preserving**: days and time slots keep the key order of the source
//!    object; nothing is sorted, filtered or deduplicated
//! 3. **Decide once**: the itinerary shape is classified here into an
//!    [`ItineraryState`] so render code never re-checks JSON types
//!
//! ## Flow
//!
//! 1. Summary fields (`location`, `days`, `budget`) gate availability
//! 2. `tripDetails.tripDetails` is decoded as JSON; failures yield `{}`
//! 3. `itinerary` must be a plain object, else it is [`ItineraryState::Absent`]
//! 4. `{}` is [`ItineraryState::Empty`], distinct from absent
//! 5. `hotels` must be a list, else it is empty

mod fields;

pub use fields::scalar_text;

use crate::rating::MAX_RATING;
use crate::types::{
    Activity, ActivityDetails, DaySchedule, Hotel, Itinerary, ItineraryState, JsonKind, NormalizedTrip,
    TripSummary, Warning,
};
use serde_json::{Map, Value};

/// Fields that must all be present for the trip to be available.
pub const CORE_FIELDS: [&str; 3] = ["location", "days", "budget"];

/// Warnings collected during one normalization pass.
///
/// Every recorded warning is also logged, which is the only place these
/// diagnostics surface outside the returned trip.
#[derive(Default)]
struct WarningSink {
    warnings: Vec<Warning>,
}

impl WarningSink {
    fn record(&mut self, warning: Warning) {
        tracing::warn!(warning = %warning, "Trip payload anomaly");
        self.warnings.push(warning);
    }
}

/// Normalize a navigation-state snapshot.
///
/// `raw` may be absent entirely; a non-object snapshot is treated the same way.
pub fn normalize(raw: Option<&Value>) -> NormalizedTrip {
    let mut sink = WarningSink::default();
    let root = raw.and_then(Value::as_object);

    let summary = summarize(root, &mut sink);
    let details = decode_details(root, &mut sink);

    let hotels = normalize_hotels(details.get("hotels"), &mut sink);
    let itinerary = normalize_itinerary(details.get("itinerary"), &mut sink);

    tracing::debug!(
        available = summary.is_some(),
        hotels = hotels.len(),
        itinerary = itinerary.kind(),
        warnings = sink.warnings.len(),
        "Normalized trip payload"
    );

    NormalizedTrip {
        summary,
        hotels,
        itinerary,
        warnings: sink.warnings,
    }
}

/// Normalize a snapshot given as a JSON document.
///
/// A document that does not decode behaves like a missing snapshot, with a
/// [`Warning::JsonDecodeFailure`] recorded first.
pub fn normalize_str(input: &str) -> NormalizedTrip {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => normalize(Some(&value)),
        Err(e) => {
            let warning = Warning::JsonDecodeFailure {
                message: e.to_string(),
            };
            tracing::warn!(warning = %warning, "Navigation state is not valid JSON");

            let mut trip = normalize(None);
            trip.warnings.insert(0, warning);
            trip
        }
    }
}

fn summarize(root: Option<&Map<String, Value>>, sink: &mut WarningSink) -> Option<TripSummary> {
    let present = |key: &str| {
        root.and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    };

    let missing: Vec<&'static str> = CORE_FIELDS
        .iter()
        .copied()
        .filter(|key| present(*key).is_none())
        .collect();

    if !missing.is_empty() {
        sink.record(Warning::MissingCoreFields { missing });
        return None;
    }

    let text = |key: &str| present(key).map(scalar_text).unwrap_or_default();
    let companion = root
        .and_then(|map| map.get("tripDetails"))
        .and_then(|details| details.get("companion"))
        .filter(|value| !value.is_null())
        .map(scalar_text);

    Some(TripSummary {
        location: text("location"),
        days: text("days"),
        budget: text("budget"),
        companion,
    })
}

/// Decode the JSON string at `tripDetails.tripDetails` into an object.
///
/// Any failure yields an empty object so the summary still renders.
fn decode_details(root: Option<&Map<String, Value>>, sink: &mut WarningSink) -> Map<String, Value> {
    let payload = root
        .and_then(|map| map.get("tripDetails"))
        .and_then(|details| details.get("tripDetails"))
        .filter(|value| !value.is_null());

    let text = match payload {
        None => {
            sink.record(Warning::DetailsPayloadMissing);
            return Map::new();
        }
        Some(Value::String(text)) => text,
        Some(other) => {
            sink.record(Warning::DetailsPayloadNotText {
                found: JsonKind::of(other),
            });
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            sink.record(Warning::DetailsNotObject {
                found: JsonKind::of(&other),
            });
            Map::new()
        }
        Err(e) => {
            sink.record(Warning::JsonDecodeFailure {
                message: e.to_string(),
            });
            Map::new()
        }
    }
}

fn normalize_hotels(value: Option<&Value>, sink: &mut WarningSink) -> Vec<Hotel> {
    let entries = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            sink.record(Warning::MalformedHotels {
                found: JsonKind::of(other),
            });
            return Vec::new();
        }
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(record) => Some(fields::hotel_from_record(record)),
            other => {
                sink.record(Warning::MalformedHotelEntry {
                    index,
                    found: JsonKind::of(other),
                });
                None
            }
        })
        .collect()
}

fn normalize_itinerary(value: Option<&Value>, sink: &mut WarningSink) -> ItineraryState {
    let days = match value {
        Some(Value::Object(days)) => days,
        other => {
            sink.record(Warning::MalformedItinerary {
                found: JsonKind::of_opt(other),
            });
            return ItineraryState::Absent;
        }
    };

    if days.is_empty() {
        tracing::info!("Itinerary exists but is empty");
        return ItineraryState::Empty;
    }

    let mut itinerary = Itinerary::new();
    for (index, (day_key, day_value)) in days.iter().enumerate() {
        tracing::debug!(entry = index + 1, day = %day_key, "Itinerary entry");
        itinerary.push(day_key.clone(), normalize_day(day_key, day_value, sink));
    }

    ItineraryState::Days { days: itinerary }
}

fn normalize_day(day_key: &str, value: &Value, sink: &mut WarningSink) -> DaySchedule {
    let slots = match value {
        Value::Object(slots) => slots,
        other => {
            sink.record(Warning::MalformedDay {
                day: day_key.to_string(),
                found: JsonKind::of(other),
            });
            return DaySchedule::new();
        }
    };

    slots
        .iter()
        .map(|(time_key, slot)| {
            let activity = match slot {
                Value::Object(record) => {
                    let mut details = fields::activity_from_record(record);
                    if let Some(value) = details.rating.filter(|r| !is_plausible_rating(*r)) {
                        sink.record(Warning::RatingOutOfRange {
                            day: day_key.to_string(),
                            slot: time_key.clone(),
                            value,
                        });
                        details.rating = None;
                    }
                    Activity::Details(details)
                }
                Value::String(text) => Activity::Text { text: text.clone() },
                other => {
                    sink.record(Warning::MalformedActivity {
                        day: day_key.to_string(),
                        slot: time_key.clone(),
                        found: JsonKind::of(other),
                    });
                    match other {
                        // Object-like values show as a slot with no details
                        Value::Array(_) | Value::Null => {
                            Activity::Details(ActivityDetails::default())
                        }
                        _ => Activity::Text {
                            text: other.to_string(),
                        },
                    }
                }
            };
            (time_key.clone(), activity)
        })
        .collect()
}

/// Ratings beyond [`MAX_RATING`] would expand into unbounded star strings.
fn is_plausible_rating(rating: f64) -> bool {
    rating.is_finite() && rating <= MAX_RATING
}
