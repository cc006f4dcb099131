//! Property browsing session: a simulated assistant chat, a two-slot
//! comparison selection, and the comparison table projected from it.

pub mod catalog;
pub mod chat;
pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod selection;

pub use catalog::{Catalog, FixtureListings, ListingSource};
pub use chat::ChatSession;
pub use comparison::{build_rows, Attribute, Comparison, ComparisonCell, ComparisonRow};
pub use config::SessionConfig;
pub use dashboard::{Dashboard, Tab};
pub use models::{Gallery, Message, MessageId, Property, PropertyType, Role, Tradeoff, TradeoffKind};
pub use selection::{latest_recommendations, Selection, Toggle, MAX_SELECTION};
