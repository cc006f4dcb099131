use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod gallery;

pub use gallery::Gallery;

/// Kind of home a listing describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
}

impl PropertyType {
    /// Wire name, e.g. `single-family`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFamily => "single-family",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
        }
    }

    /// Title-cased label, e.g. `Single Family`
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Whether a tradeoff counts for or against a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeoffKind {
    Positive,
    Negative,
    Neutral,
}

impl TradeoffKind {
    /// Badge tone used when rendering the tradeoff
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Positive => "success",
            Self::Negative => "warning",
            Self::Neutral => "outline",
        }
    }
}

/// Labeled pro/con/neutral note attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tradeoff {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: TradeoffKind,
    pub description: String,
}

/// Core property data model
///
/// `lot_size` of zero means "no lot" (condos). The optional facts stay
/// `None` when unknown so they never collide with that sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price: u64,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    pub year_built: u32,
    pub lot_size: u32,
    pub property_type: PropertyType,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub tradeoffs: Vec<Tradeoff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commute_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_score: Option<u32>,
}

impl Property {
    /// `address, city` line shown under a card title
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }

    /// First image, if the listing has any
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message identifier
pub type MessageId = String;

/// A single chat message. Properties are shared with the catalog, not copied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Arc<Property>>,
}

impl Message {
    /// Build a message stamped now. `seq` keeps ids apart within one millisecond.
    pub fn new(role: Role, content: impl Into<String>, seq: u64) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("{}-{}-{}", timestamp.timestamp_millis(), role, seq),
            role,
            content: content.into(),
            timestamp,
            properties: Vec::new(),
        }
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Clock time shown under the bubble, e.g. `09:41`
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn property_type_labels() {
        assert_eq!(PropertyType::SingleFamily.label(), "Single Family");
        assert_eq!(PropertyType::Condo.label(), "Condo");
        assert_eq!(PropertyType::Townhouse.label(), "Townhouse");
    }

    #[test]
    fn property_type_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&PropertyType::SingleFamily).unwrap();
        assert_eq!(json, "\"single-family\"");
    }

    #[test]
    fn message_ids_differ_within_same_millisecond() {
        let a = Message::new(Role::User, "hi", 1);
        let b = Message::new(Role::Assistant, "hello", 2);
        assert_ne!(a.id, b.id);
        assert!(a.id.contains("user"));
        assert!(b.id.contains("assistant"));
    }

    #[test]
    fn display_time_is_hours_and_minutes() {
        let mut msg = Message::new(Role::User, "hi", 0);
        msg.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 9, 41, 12).unwrap();
        assert_eq!(msg.display_time(), "09:41");
    }

    #[test]
    fn cover_image_is_first_image_or_none() {
        let mut property = (*crate::catalog::fixtures::mock_properties()[0]).clone();
        assert_eq!(property.cover_image(), property.images.first().map(String::as_str));

        property.images.clear();
        assert_eq!(property.cover_image(), None);
    }

    #[test]
    fn tradeoff_tones() {
        assert_eq!(TradeoffKind::Positive.tone(), "success");
        assert_eq!(TradeoffKind::Negative.tone(), "warning");
        assert_eq!(TradeoffKind::Neutral.tone(), "outline");
    }
}
