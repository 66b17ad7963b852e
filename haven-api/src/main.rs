use std::sync::Arc;
use anyhow::Context;
use haven_api::{app, AppState};
use haven_core::{BookingService, ListingRepository};
use haven_store::{app_config::Config, InMemoryListingRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haven_api=debug,haven_core=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Haven API on port {}", config.server.port);

    let listings: Arc<dyn ListingRepository> = match &config.store.seed_file {
        Some(path) => Arc::new(
            InMemoryListingRepository::from_json_file(path)
                .await
                .with_context(|| format!("Failed to load seed file {}", path))?,
        ),
        None => Arc::new(InMemoryListingRepository::with_sample_data()),
    };

    tracing::info!("Booking ids use the {:?} strategy", config.booking.id_strategy);
    let bookings = BookingService::from_strategy(config.booking.id_strategy);

    let app = app(AppState::new(listings, bookings));

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .context("Failed to bind listener")?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
