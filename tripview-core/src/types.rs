//! Core domain types for tripview
//!
//! These types represent the render-ready data model produced by
//! [`crate::normalize`] from an untrusted travel-plan payload.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Raw input** | The navigation-state snapshot handed over by the host (untrusted JSON) |
//! | **Trip details** | The JSON *string* embedded at `tripDetails.tripDetails`, holding hotels and the itinerary |
//! | **Day key** | Label of one itinerary day (`day1`, `day2`, ...) |
//! | **Time key** | Label of a time slot inside a day (`morning`, `afternoon`, ...) |
//! | **Activity** | What happens in one time slot; usually an object, sometimes a bare string |
//! | **Warning** | Non-fatal note about a payload that did not have the expected shape |
//!
//! ### Ordering
//!
//! Days and time slots carry no ordering signal other than the key order of the
//! source object. [`OrderedMap`] keeps that order explicitly; nothing in the
//! crate sorts, filters or deduplicates days or slots.

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

// ============================================
// Ordered map
// ============================================

/// Order-preserving sequence of key/value entries.
///
/// Entries iterate in the order they were pushed. Serializes as a JSON object
/// whose keys appear in that same order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry at the end.
    pub fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// First value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as std::borrow::Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ============================================
// JSON shape
// ============================================

/// Coarse JSON type of a payload value, used in warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonKind {
    /// Key not present at all
    Missing,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Kind of an optional lookup result; `None` is [`JsonKind::Missing`].
    pub fn of_opt(value: Option<&Value>) -> Self {
        value.map(Self::of).unwrap_or(JsonKind::Missing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Missing => "missing",
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================
// Raw input
// ============================================

/// Typed view of the navigation-state snapshot.
///
/// Every field is an arbitrary JSON value because the snapshot is untrusted;
/// [`crate::normalize::normalize`] works on the resulting [`Value`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTripInput {
    pub location: Option<Value>,
    pub days: Option<Value>,
    pub budget: Option<Value>,
    pub trip_details: Option<RawTripDetails>,
}

/// The `tripDetails` wrapper inside the snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTripDetails {
    pub companion: Option<Value>,
    /// JSON-encoded string holding hotels and itinerary
    pub trip_details: Option<Value>,
}

impl From<RawTripDetails> for Value {
    fn from(raw: RawTripDetails) -> Self {
        let mut map = Map::new();
        if let Some(companion) = raw.companion {
            map.insert("companion".to_string(), companion);
        }
        if let Some(details) = raw.trip_details {
            map.insert("tripDetails".to_string(), details);
        }
        Value::Object(map)
    }
}

impl From<RawTripInput> for Value {
    fn from(raw: RawTripInput) -> Self {
        let mut map = Map::new();
        if let Some(location) = raw.location {
            map.insert("location".to_string(), location);
        }
        if let Some(days) = raw.days {
            map.insert("days".to_string(), days);
        }
        if let Some(budget) = raw.budget {
            map.insert("budget".to_string(), budget);
        }
        if let Some(details) = raw.trip_details {
            map.insert("tripDetails".to_string(), details.into());
        }
        Value::Object(map)
    }
}

// ============================================
// Normalized trip
// ============================================

pub type DayKey = String;
pub type TimeKey = String;

/// Time slots of one day, in source order.
pub type DaySchedule = OrderedMap<TimeKey, Activity>;

/// Days of the itinerary, in source order.
pub type Itinerary = OrderedMap<DayKey, DaySchedule>;

/// Header fields, present only when location, days and budget all are.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TripSummary {
    pub location: String,
    pub days: String,
    pub budget: String,
    pub companion: Option<String>,
}

/// A recommended hotel. Rendered in input order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub hotel_name: String,
    pub hotel_address: String,
    pub price: String,
    pub reviews: Option<f64>,
}

/// Structured activity. Fields of the wrong JSON type, and empty strings,
/// are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
    pub place_name: Option<String>,
    pub place_detail: Option<String>,
    pub rating: Option<f64>,
    pub ticket_pricing: Option<String>,
    pub time_travel: Option<String>,
    pub place_img_url: Option<String>,
}

/// Content of one time slot.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Details(ActivityDetails),
    /// Degenerate form: the slot holds a plain description
    Text { text: String },
}

impl Activity {
    pub fn details(&self) -> Option<&ActivityDetails> {
        match self {
            Activity::Details(details) => Some(details),
            Activity::Text { .. } => None,
        }
    }
}

/// Itinerary shape after validation, computed once during normalization.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItineraryState {
    /// Missing, or not a plain object
    Absent,
    /// A plain object with no keys
    Empty,
    Days { days: Itinerary },
}

impl ItineraryState {
    pub fn kind(&self) -> &'static str {
        match self {
            ItineraryState::Absent => "absent",
            ItineraryState::Empty => "empty",
            ItineraryState::Days { .. } => "days",
        }
    }

    pub fn days(&self) -> Option<&Itinerary> {
        match self {
            ItineraryState::Days { days } => Some(days),
            _ => None,
        }
    }
}

/// Non-fatal deviation from the expected payload shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    MissingCoreFields { missing: Vec<&'static str> },
    DetailsPayloadMissing,
    DetailsPayloadNotText { found: JsonKind },
    JsonDecodeFailure { message: String },
    DetailsNotObject { found: JsonKind },
    MalformedItinerary { found: JsonKind },
    MalformedHotels { found: JsonKind },
    MalformedHotelEntry { index: usize, found: JsonKind },
    MalformedDay { day: DayKey, found: JsonKind },
    MalformedActivity { day: DayKey, slot: TimeKey, found: JsonKind },
    RatingOutOfRange { day: DayKey, slot: TimeKey, value: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingCoreFields { missing } => {
                write!(f, "missing core trip fields: {}", missing.join(", "))
            }
            Warning::DetailsPayloadMissing => write!(f, "no trip details payload"),
            Warning::DetailsPayloadNotText { found } => {
                write!(f, "trip details payload is a {} instead of a JSON string", found)
            }
            Warning::JsonDecodeFailure { message } => {
                write!(f, "failed to decode trip details: {}", message)
            }
            Warning::DetailsNotObject { found } => {
                write!(f, "trip details decoded to a {} instead of an object", found)
            }
            Warning::MalformedItinerary { found } => {
                write!(f, "no usable itinerary (found {})", found)
            }
            Warning::MalformedHotels { found } => {
                write!(f, "hotels is a {} instead of a list", found)
            }
            Warning::MalformedHotelEntry { index, found } => {
                write!(f, "hotel #{} is a {} instead of an object", index, found)
            }
            Warning::MalformedDay { day, found } => {
                write!(f, "day {:?} is a {} instead of an object", day, found)
            }
            Warning::MalformedActivity { day, slot, found } => {
                write!(f, "slot {:?} of day {:?} holds a {}", slot, day, found)
            }
            Warning::RatingOutOfRange { day, slot, value } => {
                write!(f, "rating {} in slot {:?} of day {:?} is out of range", value, slot, day)
            }
        }
    }
}

/// Validated, render-ready travel plan.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NormalizedTrip {
    /// `None` when location, days or budget is missing
    pub summary: Option<TripSummary>,
    pub hotels: Vec<Hotel>,
    pub itinerary: ItineraryState,
    pub warnings: Vec<Warning>,
}

impl NormalizedTrip {
    /// Whether the trip has enough data to render beyond the fallback message.
    pub fn is_available(&self) -> bool {
        self.summary.is_some()
    }
}
