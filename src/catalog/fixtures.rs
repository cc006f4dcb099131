use crate::catalog::{Catalog, ListingSource};
use crate::models::{Message, Property, PropertyType, Role, Tradeoff, TradeoffKind};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

/// Embedded San Francisco listings and the opening conversation
pub struct FixtureListings;

#[async_trait]
impl ListingSource for FixtureListings {
    async fn load(&self) -> Result<Catalog> {
        let properties = mock_properties();
        let messages = mock_messages(&properties)?;

        let catalog =
            Catalog::new(properties, messages).context("Failed to build fixture catalog")?;
        info!(
            "📋 Loaded {} properties and {} seed messages",
            catalog.len(),
            catalog.seed_messages().len()
        );

        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "Fixture"
    }
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tradeoff(label: &str, kind: TradeoffKind, description: &str) -> Tradeoff {
    Tradeoff {
        label: label.to_string(),
        kind,
        description: description.to_string(),
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=800&h=600&fit=crop", photo)
}

/// The four listings, in display order
pub fn mock_properties() -> Vec<Arc<Property>> {
    vec![
        Arc::new(Property {
            id: "1".to_string(),
            title: "Modern Craftsman Home".to_string(),
            address: "1234 Oak Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94102".to_string(),
            price: 1_250_000,
            beds: 4,
            baths: 3.0,
            sqft: 2400,
            year_built: 2019,
            lot_size: 4500,
            property_type: PropertyType::SingleFamily,
            images: vec![
                unsplash("photo-1564013799919-ab600027ffc6"),
                unsplash("photo-1600596542815-ffad4c1539a9"),
                unsplash("photo-1600585154340-be6161a56a0c"),
            ],
            description: "Stunning modern craftsman home with open floor plan, gourmet kitchen, and beautiful backyard. Recently renovated with high-end finishes throughout.".to_string(),
            features: list(&[
                "Open floor plan",
                "Gourmet kitchen with island",
                "Hardwood floors",
                "Smart home technology",
                "Energy efficient",
                "2-car garage",
                "Landscaped backyard",
                "Home office",
            ]),
            pros: list(&[
                "Excellent location near downtown",
                "Modern amenities and finishes",
                "Energy efficient design",
                "Spacious backyard",
                "Low maintenance landscaping",
            ]),
            cons: list(&["Higher price point", "Smaller lot size", "HOA fees apply"]),
            tradeoffs: vec![
                tradeoff(
                    "Higher Price",
                    TradeoffKind::Negative,
                    "Premium location and modern features come at a higher cost",
                ),
                tradeoff(
                    "Modern Design",
                    TradeoffKind::Positive,
                    "Contemporary layout with high-end finishes",
                ),
                tradeoff(
                    "Smaller Lot",
                    TradeoffKind::Neutral,
                    "Less outdoor space but easier maintenance",
                ),
            ],
            commute_time: Some(25),
            school_rating: Some(9),
            walk_score: Some(85),
        }),
        Arc::new(Property {
            id: "2".to_string(),
            title: "Charming Victorian".to_string(),
            address: "567 Pine Avenue".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94103".to_string(),
            price: 980_000,
            beds: 3,
            baths: 2.0,
            sqft: 1850,
            year_built: 1905,
            lot_size: 3200,
            property_type: PropertyType::SingleFamily,
            images: vec![
                unsplash("photo-1518780664697-55e3ad937233"),
                unsplash("photo-1600585154526-990dced4db0d"),
                unsplash("photo-1600607687939-ce8a6c25118c"),
            ],
            description: "Beautifully restored Victorian home with original details, updated systems, and charming period features. Perfect blend of historic character and modern comfort.".to_string(),
            features: list(&[
                "Original hardwood floors",
                "Crown molding",
                "Updated kitchen",
                "Central heating/AC",
                "Basement",
                "Front porch",
                "Detached garage",
                "Garden",
            ]),
            pros: list(&[
                "Historic charm and character",
                "Larger lot size",
                "No HOA fees",
                "Great neighborhood",
                "Potential for appreciation",
            ]),
            cons: list(&[
                "Older home maintenance",
                "Higher utility costs",
                "Limited parking",
            ]),
            tradeoffs: vec![
                tradeoff(
                    "Historic Charm",
                    TradeoffKind::Positive,
                    "Unique architectural details and character",
                ),
                tradeoff(
                    "Maintenance Required",
                    TradeoffKind::Negative,
                    "Older home may need more upkeep",
                ),
                tradeoff(
                    "Longer Commute",
                    TradeoffKind::Negative,
                    "Further from downtown and major employment centers",
                ),
            ],
            commute_time: Some(35),
            school_rating: Some(7),
            walk_score: Some(72),
        }),
        Arc::new(Property {
            id: "3".to_string(),
            title: "Luxury Penthouse Condo".to_string(),
            address: "890 Market Street #PH".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94102".to_string(),
            price: 1_450_000,
            beds: 2,
            baths: 2.0,
            sqft: 1600,
            year_built: 2021,
            lot_size: 0,
            property_type: PropertyType::Condo,
            images: vec![
                unsplash("photo-1600607687644-c7171b42498f"),
                unsplash("photo-1600566753190-17f0baa2a6c3"),
                unsplash("photo-1600573472550-8090b5e0745e"),
            ],
            description: "Spectacular penthouse condo with panoramic city views, floor-to-ceiling windows, and premium finishes. Full-service building with amenities.".to_string(),
            features: list(&[
                "Panoramic city views",
                "Floor-to-ceiling windows",
                "Chef's kitchen",
                "In-unit laundry",
                "Concierge service",
                "Fitness center",
                "Rooftop terrace",
                "Parking included",
            ]),
            pros: list(&[
                "Prime downtown location",
                "No maintenance required",
                "Building amenities",
                "Modern construction",
                "Excellent security",
            ]),
            cons: list(&[
                "Higher HOA fees",
                "No outdoor space",
                "Smaller square footage",
                "Shared walls",
            ]),
            tradeoffs: vec![
                tradeoff(
                    "Prime Location",
                    TradeoffKind::Positive,
                    "Walk to everything downtown has to offer",
                ),
                tradeoff(
                    "Higher HOA",
                    TradeoffKind::Negative,
                    "Monthly fees cover amenities but add to cost",
                ),
                tradeoff(
                    "No Yard",
                    TradeoffKind::Neutral,
                    "Convenience of no maintenance but no private outdoor space",
                ),
            ],
            commute_time: Some(10),
            school_rating: Some(8),
            walk_score: Some(98),
        }),
        Arc::new(Property {
            id: "4".to_string(),
            title: "Spacious Family Home".to_string(),
            address: "234 Elm Drive".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94112".to_string(),
            price: 1_100_000,
            beds: 5,
            baths: 3.0,
            sqft: 2800,
            year_built: 1995,
            lot_size: 6000,
            property_type: PropertyType::SingleFamily,
            images: vec![
                unsplash("photo-1600047509807-ba8f99d2cdde"),
                unsplash("photo-1600566753086-00f18fb6b3ea"),
                unsplash("photo-1600585154363-67eb9e2e2099"),
            ],
            description: "Perfect family home with plenty of space, large backyard, and excellent school district. Move-in ready with recent updates.".to_string(),
            features: list(&[
                "Large backyard",
                "Updated kitchen",
                "Master suite",
                "Home theater",
                "3-car garage",
                "Playroom",
                "Updated bathrooms",
                "New roof",
            ]),
            pros: list(&[
                "Great for families",
                "Excellent schools",
                "Large lot size",
                "Plenty of storage",
                "Quiet neighborhood",
            ]),
            cons: list(&[
                "Further from downtown",
                "Older systems",
                "Longer commute",
            ]),
            tradeoffs: vec![
                tradeoff(
                    "Family Friendly",
                    TradeoffKind::Positive,
                    "Great schools and neighborhood for kids",
                ),
                tradeoff(
                    "Longer Commute",
                    TradeoffKind::Negative,
                    "30+ minutes to downtown and tech hubs",
                ),
                tradeoff(
                    "More Space",
                    TradeoffKind::Positive,
                    "Largest home with room to grow",
                ),
            ],
            commute_time: Some(40),
            school_rating: Some(10),
            walk_score: Some(65),
        }),
    ]
}

/// Opening conversation. Message 3 recommends all four listings, message 5 narrows to two.
pub fn mock_messages(properties: &[Arc<Property>]) -> Result<Vec<Message>> {
    let now = Utc::now();
    let seed = |id: &str, role: Role, content: &str, secs_ago: i64| Message {
        id: id.to_string(),
        role,
        content: content.to_string(),
        timestamp: now - Duration::seconds(secs_ago),
        properties: Vec::new(),
    };

    let mut messages = vec![
        seed(
            "1",
            Role::Assistant,
            "Welcome to Corethink Real Estate! I'm your AI home buying assistant. I can help you find and compare properties that match your needs. What are you looking for in your next home?",
            300,
        ),
        seed(
            "2",
            Role::User,
            "I'm looking for a 3-4 bedroom home in San Francisco with good schools. My budget is around $1-1.5M.",
            240,
        ),
        seed(
            "3",
            Role::Assistant,
            "Great! Based on your criteria, I found several excellent options. Here are 4 properties that match your requirements. Let me highlight the key differences:\n\n1. **Modern Craftsman** ($1.25M) - Best for modern amenities and downtown access\n2. **Charming Victorian** ($980K) - Best value with historic character\n3. **Luxury Penthouse** ($1.45M) - Best for low-maintenance urban living\n4. **Spacious Family Home** ($1.1M) - Best for families with excellent schools\n\nWould you like me to compare any of these in detail?",
            180,
        ),
        seed(
            "4",
            Role::User,
            "Can you compare the Modern Craftsman and the Spacious Family Home? I'm trying to decide between location and space.",
            120,
        ),
        seed(
            "5",
            Role::Assistant,
            "Excellent question! Here's a detailed comparison:\n\n**Location Advantage - Modern Craftsman:**\n• 25 min commute vs 40 min (15 min savings daily)\n• Walk Score 85 vs 65 (much more walkable)\n• Downtown access for dining and entertainment\n\n**Space Advantage - Family Home:**\n• 2,800 sqft vs 2,400 sqft (400 sqft more)\n• 5 bedrooms vs 4 (extra room for office/guests)\n• 6,000 sqft lot vs 4,500 sqft (larger backyard)\n• School rating 10 vs 9 (top-rated district)\n\n**Tradeoff Analysis:**\nIf you work downtown and value walkability, the Craftsman saves you 2.5 hours weekly in commute. However, the Family Home offers significantly more space for the same price per square foot.\n\nWhat's more important to you: daily convenience or long-term space for your family?",
            60,
        ),
    ];

    messages[2].properties = pick(properties, &["1", "2", "3", "4"])
        .context("Seed message 3 references a missing property")?;
    messages[4].properties = pick(properties, &["1", "4"])
        .context("Seed message 5 references a missing property")?;

    Ok(messages)
}

fn pick(properties: &[Arc<Property>], ids: &[&str]) -> Result<Vec<Arc<Property>>> {
    ids.iter()
        .map(|id| {
            properties
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .ok_or_else(|| anyhow!("Unknown property id: {}", id))
        })
        .collect()
}
