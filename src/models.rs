//! Frontend Models
//!
//! Domain records built from content API responses.

use serde::Deserialize;

/// Car as shown in the list view (summary attributes only)
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: u32,
    pub name: String,
    pub description: Vec<RichTextBlock>,
    pub image: Option<MediaItem>,
}

impl Car {
    /// Non-blank plain-text paragraphs of the description
    pub fn description_paragraphs(&self) -> Vec<String> {
        self.description
            .iter()
            .map(RichTextBlock::plain_text)
            .filter(|text| !text.trim().is_empty())
            .collect()
    }

    /// Case-insensitive substring match on the car name
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Car with the sub-resources loaded by a detail fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CarDetails {
    pub car: Car,
    pub reviews: Vec<Review>,
    pub media: Vec<MediaItem>,
}

/// Customer review of a car (read-only)
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u32,
    pub rating: f32,
    pub comment: String,
}

impl Review {
    pub const MAX_RATING: f32 = 5.0;

    /// Rating as displayed, e.g. `4/5`
    pub fn rating_label(&self) -> String {
        format!("{}/{}", self.rating.clamp(0.0, Self::MAX_RATING), Self::MAX_RATING)
    }
}

/// Image asset owned by a car
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: u32,
    /// Usually relative to the API's asset base
    pub url: String,
    pub alternative_text: Option<String>,
}

/// One block of a rich-text ("blocks") field, e.g. a paragraph
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<RichTextBlock>,
}

impl RichTextBlock {
    /// In-order concatenation of every text node below this block
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
