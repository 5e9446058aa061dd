//! Star rating formatting
//!
//! A rating in principle lies in `[0, 5]` but is passed through unclamped:
//! `full = floor(r)`, one half symbol iff `r` has a fractional part, and
//! `empty = 5 - ceil(r)`. A rating above 5 yields a negative `empty`, which
//! renders as zero empty symbols.

use serde::Serialize;

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⭑';
pub const EMPTY_STAR: char = '☆';

/// Largest rating that is expanded into stars. The normalizer drops anything
/// above it, or non-finite, with a warning.
pub const MAX_RATING: f64 = 100.0;

/// Star breakdown of a single rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarRating {
    pub value: f64,
    pub full: u32,
    pub half: bool,
    /// Signed; negative for ratings above 5
    pub empty: i64,
}

impl StarRating {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            full: value.floor() as u32,
            half: value % 1.0 != 0.0,
            empty: 5 - value.ceil() as i64,
        }
    }

    /// Full symbols, then the half symbol, then empty symbols.
    pub fn symbols(&self) -> String {
        let mut out = String::new();
        out.extend(std::iter::repeat(FULL_STAR).take(self.full as usize));
        if self.half {
            out.push(HALF_STAR);
        }
        out.extend(std::iter::repeat(EMPTY_STAR).take(self.empty.max(0) as usize));
        out
    }

    /// Value rounded to one decimal, e.g. `(4.5)`.
    pub fn label(&self) -> String {
        format!("({})", one_decimal(self.value))
    }
}

/// One-decimal text, rounding the exact binary value.
///
/// Only multiples of 0.25 with an odd count of quarters sit exactly halfway
/// between two tenths; those round away from zero.
fn one_decimal(value: f64) -> String {
    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (magnitude * 10.0 + 0.5).floor();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.1}", sign, tenths / 10.0);
    }
    format!("{:.1}", value)
}

/// Rating to display, if any. Only numbers strictly greater than zero show;
/// values above [`MAX_RATING`] never expand into stars.
pub fn display_rating(rating: Option<f64>) -> Option<StarRating> {
    rating
        .filter(|r| *r > 0.0 && *r <= MAX_RATING)
        .map(StarRating::new)
}
