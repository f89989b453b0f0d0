//! Simple CLI demo for the item list client.
//!
//! Walks through the two operations against a running collection
//! service: load the list, type a couple of names, add them, and print
//! the result.
//!
//! # Configuration
//!
//! - `ITEMLIST_URL` - base URL of the service (default
//!   `http://localhost:3000`)

use itemlist_client::{ApiClient, ItemListView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemlist_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let base_url =
        std::env::var("ITEMLIST_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    println!("=== Item List Demo ({base_url}) ===\n");

    let mut view = ItemListView::new(ApiClient::new(base_url));

    // Initial load
    view.load().await;
    println!("Items on load: {}", view.items().len());
    for item in view.items() {
        println!("  [{}] {}", item.id, item.name);
    }

    // Type and add two items
    for name in ["milk", "eggs"] {
        println!("\nAdding '{name}'...");
        view.input_changed(name);
        view.add().await;
    }

    println!("\nCurrent list:");
    for item in view.items() {
        println!("  [{}] {}", item.id, item.name);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
