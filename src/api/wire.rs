//! Content API Wire Format
//!
//! Strapi v4 response envelopes: `{ "data": ... }` at the top, entries as
//! `{ "id", "attributes" }`, relations as `{ "data": entry | [entries] | null }`.

use serde::{Deserialize, Serialize};

use crate::models::{Car, CarDetails, MediaItem, Review, RichTextBlock};

// ========================
// Envelopes
// ========================

/// Top-level response body
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Single collection entry
#[derive(Debug, Deserialize)]
pub struct Entry<A> {
    pub id: u32,
    pub attributes: A,
}

/// Relation field; `data` is `null` for an empty single or multiple relation
#[derive(Debug, Deserialize)]
pub struct Relation<T> {
    pub data: Option<T>,
}

impl<T> Relation<T> {
    fn into_inner(self) -> Option<T> {
        self.data
    }
}

// ========================
// Attributes
// ========================

#[derive(Debug, Deserialize)]
pub struct CarAttributes {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Descriptions", default)]
    pub descriptions: Option<Vec<RichTextBlock>>,
    #[serde(default)]
    pub image: Option<Relation<Entry<MediaAttributes>>>,
    #[serde(default)]
    pub reviews: Option<Relation<Vec<Entry<ReviewAttributes>>>>,
    #[serde(default)]
    pub media: Option<Relation<Vec<Entry<MediaAttributes>>>>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewAttributes {
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaAttributes {
    pub url: String,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
}

/// Body of `POST /api/rentals`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub car: u32,
    pub rental_time: String,
    pub rental_days: u32,
}

/// Strapi error body: `{ "error": { "status", "name", "message" } }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Human-readable message for a failed response body
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}

// ========================
// Conversions
// ========================

impl From<Entry<MediaAttributes>> for MediaItem {
    fn from(entry: Entry<MediaAttributes>) -> Self {
        MediaItem {
            id: entry.id,
            url: entry.attributes.url,
            alternative_text: entry.attributes.alternative_text,
        }
    }
}

impl From<Entry<ReviewAttributes>> for Review {
    fn from(entry: Entry<ReviewAttributes>) -> Self {
        Review {
            id: entry.id,
            rating: entry.attributes.rating.unwrap_or_default(),
            comment: entry.attributes.comment.unwrap_or_default(),
        }
    }
}

/// Summary only: relations that came along with the list are dropped
impl From<Entry<CarAttributes>> for Car {
    fn from(entry: Entry<CarAttributes>) -> Self {
        let attrs = entry.attributes;
        Car {
            id: entry.id,
            name: attrs.name,
            description: attrs.descriptions.unwrap_or_default(),
            image: attrs.image.and_then(Relation::into_inner).map(MediaItem::from),
        }
    }
}

impl From<Entry<CarAttributes>> for CarDetails {
    fn from(mut entry: Entry<CarAttributes>) -> Self {
        let reviews = entry
            .attributes
            .reviews
            .take()
            .and_then(Relation::into_inner)
            .unwrap_or_default()
            .into_iter()
            .map(Review::from)
            .collect();
        let media = entry
            .attributes
            .media
            .take()
            .and_then(Relation::into_inner)
            .unwrap_or_default()
            .into_iter()
            .map(MediaItem::from)
            .collect();
        CarDetails { car: Car::from(entry), reviews, media }
    }
}
