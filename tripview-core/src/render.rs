//! Presentation mapping
//!
//! Pure function from a [`NormalizedTrip`] to a [`RenderTree`]: a header, one
//! card per hotel, and one section per itinerary day with one row per time
//! slot. No validation happens here; the normalizer already decided every
//! shape question.
//!
//! The tree serializes to JSON for machine consumers and implements
//! [`fmt::Display`] for a plain-text rendering.

use crate::config::{DEFAULT_ACTIVITY_IMAGE_URL, DEFAULT_HOTEL_IMAGE_URL};
use crate::error::Result;
use crate::format::{capitalize_first, day_label};
use crate::rating::display_rating;
use crate::types::{
    Activity, DaySchedule, Hotel, ItineraryState, NormalizedTrip, TripSummary,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

pub const NO_DATA_MESSAGE: &str = "No trip details available. Please try again.";
pub const HOTELS_TITLE: &str = "Hotel Recommendations";
pub const ITINERARY_TITLE: &str = "🌍 Itinerary Overview";
pub const EMPTY_ITINERARY_MESSAGE: &str = "⚠️ Itinerary object exists but is empty";
pub const EMPTY_DAY_MESSAGE: &str = "No activities planned for this day.";
pub const NO_DETAILS_MESSAGE: &str = "No details available.";
pub const DEFAULT_ACTIVITY_ALT: &str = "Beautiful travel destination";

/// Placeholder assets used while mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub hotel_image_url: String,
    pub activity_image_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hotel_image_url: DEFAULT_HOTEL_IMAGE_URL.to_string(),
            activity_image_url: DEFAULT_ACTIVITY_IMAGE_URL.to_string(),
        }
    }
}

// ============================================
// Render tree
// ============================================

/// Displayable tree for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderTree {
    /// Fallback when location, days or budget is missing
    NoData { message: String },
    Trip(TripView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripView {
    pub header: Header,
    pub hotels: HotelSection,
    /// Omitted entirely when the itinerary is absent
    pub itinerary: Option<ItinerarySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub title: String,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelSection {
    pub title: String,
    pub cards: Vec<HotelCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelCard {
    pub image: Image,
    pub name: String,
    pub address: String,
    pub price: String,
    pub reviews: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItinerarySection {
    pub title: String,
    pub body: ItineraryBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItineraryBody {
    Empty { message: String },
    Days { days: Vec<DayCard> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCard {
    pub key: String,
    pub heading: String,
    pub slots: Vec<SlotRow>,
    /// Set when the day has no slots
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    pub key: String,
    pub heading: String,
    pub image: Image,
    pub lines: Vec<Line>,
}

/// One line of a time-slot row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Field { label: String, value: String },
    Rating { label: String, stars: String, score: String },
    /// Muted hint, e.g. when a slot has no place name or detail
    Note { text: String },
    /// A slot given as a bare string
    Text { text: String },
}

impl Line {
    fn field(label: &str, value: &str) -> Self {
        Line::Field {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

// ============================================
// Mapping
// ============================================

/// Map a normalized trip onto its render tree.
pub fn render(trip: &NormalizedTrip, options: &RenderOptions) -> RenderTree {
    let Some(summary) = &trip.summary else {
        return RenderTree::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        };
    };

    RenderTree::Trip(TripView {
        header: header(summary),
        hotels: HotelSection {
            title: HOTELS_TITLE.to_string(),
            cards: trip
                .hotels
                .iter()
                .map(|hotel| hotel_card(hotel, options))
                .collect(),
        },
        itinerary: itinerary_section(&trip.itinerary, options),
    })
}

fn header(summary: &TripSummary) -> Header {
    let mut badges = vec![
        format!("📅 {} Day", summary.days),
        format!("💰 {}", summary.budget),
    ];
    if let Some(companion) = &summary.companion {
        badges.push(format!("🍻 {}", companion));
    }
    Header {
        title: summary.location.clone(),
        badges,
    }
}

fn hotel_card(hotel: &Hotel, options: &RenderOptions) -> HotelCard {
    HotelCard {
        image: Image {
            url: options.hotel_image_url.clone(),
            alt: hotel.hotel_name.clone(),
        },
        name: hotel.hotel_name.clone(),
        address: hotel.hotel_address.clone(),
        price: format!("Price: {} per night", hotel.price),
        reviews: hotel.reviews.map(|n| format!("{} Reviews", n)),
    }
}

fn itinerary_section(state: &ItineraryState, options: &RenderOptions) -> Option<ItinerarySection> {
    let body = match state {
        ItineraryState::Absent => return None,
        ItineraryState::Empty => ItineraryBody::Empty {
            message: EMPTY_ITINERARY_MESSAGE.to_string(),
        },
        ItineraryState::Days { days } => ItineraryBody::Days {
            days: days
                .iter()
                .map(|(key, schedule)| day_card(key, schedule, options))
                .collect(),
        },
    };
    Some(ItinerarySection {
        title: ITINERARY_TITLE.to_string(),
        body,
    })
}

fn day_card(key: &str, schedule: &DaySchedule, options: &RenderOptions) -> DayCard {
    let slots: Vec<SlotRow> = schedule
        .iter()
        .map(|(slot_key, activity)| slot_row(slot_key, activity, options))
        .collect();
    let message = slots
        .is_empty()
        .then(|| EMPTY_DAY_MESSAGE.to_string());

    DayCard {
        key: key.to_string(),
        // Label alone, capitalized: `day1` reads "Day 1" rather than a
        // second "Day" prefix in front of the label.
        heading: capitalize_first(&day_label(key)),
        slots,
        message,
    }
}

fn slot_row(key: &str, activity: &Activity, options: &RenderOptions) -> SlotRow {
    let placeholder = || Image {
        url: options.activity_image_url.clone(),
        alt: DEFAULT_ACTIVITY_ALT.to_string(),
    };

    let (image, lines) = match activity {
        Activity::Text { text } => (placeholder(), vec![Line::Text { text: text.clone() }]),
        Activity::Details(details) => {
            let image = Image {
                url: details
                    .place_img_url
                    .clone()
                    .unwrap_or_else(|| options.activity_image_url.clone()),
                alt: details
                    .place_name
                    .as_ref()
                    .map(|name| format!("Image of {}", name))
                    .unwrap_or_else(|| DEFAULT_ACTIVITY_ALT.to_string()),
            };

            let mut lines = Vec::new();
            if let Some(name) = &details.place_name {
                lines.push(Line::field("📍 Place:", name));
            }
            if let Some(detail) = &details.place_detail {
                lines.push(Line::field("📝 Details:", detail));
            }
            if let Some(stars) = display_rating(details.rating) {
                lines.push(Line::Rating {
                    label: "⭐ Rating:".to_string(),
                    stars: stars.symbols(),
                    score: stars.label(),
                });
            }
            if let Some(pricing) = &details.ticket_pricing {
                lines.push(Line::field("🎟️ Ticket Price:", pricing));
            }
            if let Some(travel) = &details.time_travel {
                lines.push(Line::field("⏳ Travel Time:", travel));
            }
            if details.place_name.is_none() && details.place_detail.is_none() {
                lines.push(Line::Note {
                    text: NO_DETAILS_MESSAGE.to_string(),
                });
            }
            (image, lines)
        }
    };

    SlotRow {
        key: key.to_string(),
        heading: capitalize_first(key),
        image,
        lines,
    }
}

// ============================================
// Output
// ============================================

impl RenderTree {
    pub fn is_no_data(&self) -> bool {
        matches!(self, RenderTree::NoData { .. })
    }

    /// Plain-text rendering.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 hex digest of the tree's compact JSON.
    ///
    /// Identical input yields an identical fingerprint.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

impl fmt::Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTree::NoData { message } => writeln!(f, "{}", message),
            RenderTree::Trip(view) => write!(f, "{}", view),
        }
    }
}

impl fmt::Display for TripView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f, "  {}", self.header.badges.join("  |  "))?;
        writeln!(f)?;

        writeln!(f, "{}", self.hotels.title)?;
        for card in &self.hotels.cards {
            writeln!(f, "  - {}", card.name)?;
            writeln!(f, "    {}", card.address)?;
            writeln!(f, "    {}", card.price)?;
            if let Some(reviews) = &card.reviews {
                writeln!(f, "    {}", reviews)?;
            }
            writeln!(f, "    [{}]", card.image.url)?;
        }

        let Some(itinerary) = &self.itinerary else {
            return Ok(());
        };
        writeln!(f)?;
        writeln!(f, "{}", itinerary.title)?;
        match &itinerary.body {
            ItineraryBody::Empty { message } => writeln!(f, "  {}", message)?,
            ItineraryBody::Days { days } => {
                for day in days {
                    write!(f, "{}", day)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DayCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  📅 {}", self.heading)?;
        if let Some(message) = &self.message {
            writeln!(f, "    {}", message)?;
        }
        for slot in &self.slots {
            writeln!(f, "    {}", slot.heading)?;
            for line in &slot.lines {
                match line {
                    Line::Field { label, value } => writeln!(f, "      {} {}", label, value)?,
                    Line::Rating {
                        label,
                        stars,
                        score,
                    } => writeln!(f, "      {} {} {}", label, stars, score)?,
                    Line::Note { text } | Line::Text { text } => writeln!(f, "      {}", text)?,
                }
            }
            writeln!(f, "      [{}]", slot.image.url)?;
        }
        Ok(())
    }
}
