use property_scout::{Dashboard, FixtureListings, Gallery, ListingSource, SessionConfig, Tab};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Property Scout - Browsing Session");
    info!("=====================================");

    let source = FixtureListings;
    let catalog = source.load().await?;
    info!("Loaded listings from {} source", source.source_name());

    let mut dashboard = Dashboard::new(catalog, SessionConfig::default());

    // Latest recommendations from the seeded conversation
    let latest = dashboard.latest_recommendations();
    info!("\n✨ {} latest recommendations\n", latest.len());
    for (i, property) in latest.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, property.location_line());
        println!("   {} beds, {} baths, {} sqft", property.beds, property.baths, property.sqft);
        let tradeoffs: Vec<_> = property
            .tradeoffs
            .iter()
            .map(|t| format!("{} [{}]", t.label, t.kind.tone()))
            .collect();
        println!("   Tradeoffs: {}", tradeoffs.join(", "));
        if let Some(cover) = property.cover_image() {
            println!("   Cover: {}", cover);
        }
        let mut gallery = Gallery::new(property.images.len());
        gallery.next();
        if let Some(image) = gallery.current(&property.images) {
            println!("   Photo {}/{}: {}", gallery.index() + 1, property.images.len(), image);
        }
        println!();
    }

    // One round trip with the assistant
    dashboard.submit_user_message("Which of these has the shortest commute?");
    info!("Waiting for assistant...");
    dashboard.wait_for_reply().await;

    if let Some(reply) = dashboard.message_log().last() {
        println!("[{}] {}: {}", reply.display_time(), reply.role, reply.content);
        println!();
    }

    // Pick three in a row; the first is evicted
    for id in ["2", "1", "4"] {
        dashboard.toggle_property_selection(id)?;
    }
    let selected: Vec<_> = dashboard.selection().iter().map(|p| p.title.clone()).collect();
    info!("Selected: {}", selected.join(" vs "));

    dashboard.select_tab(Tab::Compare);
    let comparison = dashboard.comparison_rows();
    println!("{}", serde_json::to_string_pretty(&comparison)?);

    dashboard.shutdown();

    Ok(())
}
