use crate::catalog::Catalog;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can produce the listing catalog
/// The embedded fixture is the only source today; a live feed would plug in here
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the properties and seed conversation
    async fn load(&self) -> Result<Catalog>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
