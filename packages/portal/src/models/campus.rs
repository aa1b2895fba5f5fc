//! Display-only campus records: map locations, clubs, FAQs and notifications.

use serde::{Deserialize, Serialize};

/// Map pin category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Building,
    Lab,
    Cafeteria,
    Department,
    Staff,
    Other,
}

impl LocationType {
    pub const ALL: [LocationType; 6] = [
        LocationType::Building,
        LocationType::Lab,
        LocationType::Cafeteria,
        LocationType::Department,
        LocationType::Staff,
        LocationType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::Building => "building",
            LocationType::Lab => "lab",
            LocationType::Cafeteria => "cafeteria",
            LocationType::Department => "department",
            LocationType::Staff => "staff",
            LocationType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<LocationType> {
        LocationType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Position on the campus map, in percent of width/height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
    pub description: String,
    pub coordinates: Point,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub member_count: u32,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Account,
    Academic,
    Campus,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 3] = [
        FaqCategory::Account,
        FaqCategory::Academic,
        FaqCategory::Campus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FaqCategory::Account => "account",
            FaqCategory::Academic => "academic",
            FaqCategory::Campus => "campus",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Academic,
    Event,
    Club,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub date: String,
    pub read: bool,
}

/// A course listed on the subjects page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: String,
    pub name: String,
    pub description: String,
}
