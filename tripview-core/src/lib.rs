//! # tripview-core
//!
//! Core library for tripview - a viewer for generated travel plans.
//!
//! This library provides:
//! - Domain types for trips, hotels, days and activities
//! - Payload normalization with non-fatal warnings
//! - Star rating formatting
//! - Presentation mapping to a render tree
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three stages:
//! - **Raw:** the navigation-state snapshot (untrusted JSON, with the trip
//!   details embedded as a JSON string)
//! - **Normalized:** a [`NormalizedTrip`] with an explicit [`ItineraryState`]
//!   and order-preserving days and slots
//! - **Rendered:** a [`RenderTree`], pure and idempotent
//!
//! ## Example
//!
//! ```rust
//! use tripview_core::{normalize_str, render, RenderOptions};
//!
//! let snapshot = r#"{
//!     "location": "Kyoto", "days": 2, "budget": "Moderate",
//!     "tripDetails": { "companion": "Couple", "tripDetails": "{\"itinerary\": {}}" }
//! }"#;
//!
//! let trip = normalize_str(snapshot);
//! assert!(trip.is_available());
//!
//! let tree = render(&trip, &RenderOptions::default());
//! assert!(tree.to_text().contains("Itinerary object exists but is empty"));
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use format::day_label;
pub use normalize::{normalize, normalize_str};
pub use rating::{display_rating, StarRating};
pub use render::{render, RenderOptions, RenderTree};
pub use types::*;

// Public modules
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod normalize;
pub mod rating;
pub mod render;
pub mod types;
