use eventmaster::config::Config;
use eventmaster::repositories::{PgEventRepository, PgImageRepository, PgParticipantRepository, PgUserRepository};
use eventmaster::services::{ensure_system_user, ImageService, ParticipantService};
use eventmaster::ticketmaster::{Importer, TicketmasterClient};

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventmaster=info,fetch_events=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let system_user_id = ensure_system_user(&PgUserRepository::new(pool.clone())).await?;

    let importer = Importer::new(
        Arc::new(TicketmasterClient::new(&config.ticketmaster)?),
        Arc::new(PgEventRepository::new(pool.clone())),
        ImageService::new(Arc::new(PgImageRepository::new(pool.clone()))),
        ParticipantService::new(Arc::new(PgParticipantRepository::new(pool.clone()))),
        system_user_id,
    )
    .with_participants_per_event(config.ticketmaster.participants_per_event);

    info!("Fetching events from Ticketmaster...");
    let summary = importer.fetch_and_save_events().await?;
    info!(
        "Fetched {} events: {} new, {} already stored, {} failed",
        summary.total, summary.created, summary.skipped, summary.failed
    );

    Ok(())
}
