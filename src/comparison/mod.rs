//! Side-by-side attribute table for the selected properties.
//!
//! Rows only flag that values differ; no value is ranked as better.

mod format;

pub use format::{format_price, format_sqft, group_digits};

use crate::models::Property;
use serde::Serialize;
use std::sync::Arc;

/// Tracked attributes, in table order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Price,
    Beds,
    Baths,
    Sqft,
    YearBuilt,
    LotSize,
    CommuteTime,
    SchoolRating,
    WalkScore,
    PropertyType,
}

const NOT_AVAILABLE: &str = "N/A";

impl Attribute {
    pub const ALL: [Attribute; 10] = [
        Self::Price,
        Self::Beds,
        Self::Baths,
        Self::Sqft,
        Self::YearBuilt,
        Self::LotSize,
        Self::CommuteTime,
        Self::SchoolRating,
        Self::WalkScore,
        Self::PropertyType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Beds => "Bedrooms",
            Self::Baths => "Bathrooms",
            Self::Sqft => "Square Footage",
            Self::YearBuilt => "Year Built",
            Self::LotSize => "Lot Size",
            Self::CommuteTime => "Commute Time",
            Self::SchoolRating => "School Rating",
            Self::WalkScore => "Walk Score",
            Self::PropertyType => "Property Type",
        }
    }

    /// Whether differing values get flagged
    pub fn highlightable(&self) -> bool {
        !matches!(self, Self::PropertyType)
    }

    /// Display string for one property
    pub fn render(&self, property: &Property) -> String {
        match self {
            Self::Price => format_price(property.price),
            Self::Beds => format!("{} beds", property.beds),
            Self::Baths => format!("{} baths", property.baths),
            Self::Sqft => format_sqft(u64::from(property.sqft)),
            Self::YearBuilt => property.year_built.to_string(),
            Self::LotSize if property.lot_size > 0 => format_sqft(u64::from(property.lot_size)),
            Self::LotSize => NOT_AVAILABLE.to_string(),
            Self::CommuteTime => optional(property.commute_time, |m| format!("{} min", m)),
            Self::SchoolRating => optional(property.school_rating, |r| format!("{}/10", r)),
            Self::WalkScore => optional(property.walk_score, |s| s.to_string()),
            Self::PropertyType => property.property_type.label(),
        }
    }
}

fn optional(value: Option<u32>, render: impl Fn(u32) -> String) -> String {
    value.map(render).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One property's value in a row
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCell {
    pub property_id: String,
    pub value: String,
    pub distinguished: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComparisonRow {
    pub attribute: Attribute,
    pub label: &'static str,
    pub highlightable: bool,
    pub cells: Vec<ComparisonCell>,
}

impl ComparisonRow {
    pub fn all_same(&self) -> bool {
        match self.cells.split_first() {
            Some((first, rest)) => rest.iter().all(|c| c.value == first.value),
            None => true,
        }
    }
}

/// Renderable state of the comparison view
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Comparison {
    Empty,
    Comparing {
        header: String,
        rows: Vec<ComparisonRow>,
    },
}

impl Comparison {
    pub fn rows(&self) -> &[ComparisonRow] {
        match self {
            Self::Empty => &[],
            Self::Comparing { rows, .. } => rows,
        }
    }

    pub fn row(&self, attribute: Attribute) -> Option<&ComparisonRow> {
        self.rows().iter().find(|r| r.attribute == attribute)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Build the comparison table.
///
/// A highlightable row marks every cell as distinguished when the formatted
/// values are not all equal, for any number of properties. A single
/// property is never distinguished.
pub fn build_rows(properties: &[Arc<Property>]) -> Comparison {
    if properties.is_empty() {
        return Comparison::Empty;
    }

    let rows = Attribute::ALL
        .iter()
        .map(|&attribute| {
            let mut row = ComparisonRow {
                attribute,
                label: attribute.label(),
                highlightable: attribute.highlightable(),
                cells: properties
                    .iter()
                    .map(|p| ComparisonCell {
                        property_id: p.id.clone(),
                        value: attribute.render(p),
                        distinguished: false,
                    })
                    .collect(),
            };

            if row.highlightable && !row.all_same() {
                for cell in &mut row.cells {
                    cell.distinguished = true;
                }
            }
            row
        })
        .collect();

    let noun = if properties.len() == 1 {
        "property"
    } else {
        "properties"
    };

    Comparison::Comparing {
        header: format!("Comparing {} {}", properties.len(), noun),
        rows,
    }
}
