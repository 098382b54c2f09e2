use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Kind of asset stored on the media host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Raw,
    Auto,
}

/// Picture attached to a tour route, as described by the media host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Picture {
    pub public_id: String,
    pub version: u64,
    #[serde(default)]
    pub signature: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub resource_type: ResourceType,
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pages: u32,
    pub bytes: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub etag: String,
    #[serde(default)]
    pub placeholder: bool,
    pub url: String,
    pub secure_url: String,
    #[serde(default)]
    pub access_mode: String,
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub moderation: Vec<String>,
    #[serde(default)]
    pub access_control: Vec<String>,
    #[serde(default)]
    pub context: Value,
    #[serde(default)]
    pub metadata: Value,
    /// Dominant colors with their share in percent.
    pub colors: Option<Vec<(String, f64)>>,
}

/// A bookable tour route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRoute {
    pub id: u64,
    pub title: String,
    /// Duration in minutes.
    pub duration: u32,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(rename = "available_times", default)]
    pub available_times: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TourRoute {
    /// Returns the duration of the tour.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.duration))
    }

    /// Returns the secure URL of the first picture, if any.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        self.pictures.first().map(|p| p.secure_url.as_str())
    }
}

/// One page of the tour-route listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRoutesPage {
    pub total_count: u64,
    pub data: Vec<TourRoute>,
}
