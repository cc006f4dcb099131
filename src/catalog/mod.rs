pub mod fixtures;
pub mod traits;

pub use fixtures::FixtureListings;
pub use traits::ListingSource;

use crate::models::{Message, Property};
use anyhow::{bail, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable ordered listings plus the seeded conversation
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Arc<Property>>,
    seed_messages: Vec<Message>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate property ids
    pub fn new(properties: Vec<Arc<Property>>, seed_messages: Vec<Message>) -> Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                bail!("Duplicate property id in catalog: {}", property.id);
            }
        }

        Ok(Self {
            properties,
            seed_messages,
        })
    }

    pub fn properties(&self) -> &[Arc<Property>] {
        &self.properties
    }

    pub fn seed_messages(&self) -> &[Message] {
        &self.seed_messages
    }

    /// Look up a listing by id
    pub fn get(&self, id: &str) -> Option<&Arc<Property>> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
