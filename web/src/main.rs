//! Collection service binary.
//!
//! Connects to `PostgreSQL`, runs migrations, and serves the item
//! collection API.
//!
//! # Configuration
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string (required)
//! - `BIND_ADDR` - listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG` - tracing filter (default `itemlist_web=info`)

use anyhow::Context;
use itemlist_store::PostgresItemStore;
use itemlist_web::app;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    // Explicitly constructed and owned store, passed into the router.
    let store = PostgresItemStore::connect(&database_url)
        .await
        .context("failed to connect to database")?;
    store.migrate().await.context("failed to run migrations")?;

    let router = app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "collection service listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemlist_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
