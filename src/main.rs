use eventmaster::api;
use eventmaster::config::Config;
use eventmaster::repositories::{
    EventRepository, PgEventRepository, PgImageRepository, PgParticipantRepository, PgUserRepository,
};
use eventmaster::services::{ensure_system_user, ImageService, ParticipantService};
use eventmaster::ticketmaster::{scheduler, Importer, TicketmasterClient};

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventmaster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Eventmaster v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database connected and migrated");

    let events: Arc<dyn EventRepository> = Arc::new(PgEventRepository::new(pool.clone()));
    let image_service = ImageService::new(Arc::new(PgImageRepository::new(pool.clone())));
    let participant_service = ParticipantService::new(Arc::new(PgParticipantRepository::new(pool.clone())));
    let system_user_id = ensure_system_user(&PgUserRepository::new(pool.clone())).await?;

    let feed = Arc::new(TicketmasterClient::new(&config.ticketmaster)?);
    let importer = Arc::new(
        Importer::new(
            feed,
            events.clone(),
            image_service,
            participant_service.clone(),
            system_user_id,
        )
        .with_participants_per_event(config.ticketmaster.participants_per_event),
    );

    let shutdown = CancellationToken::new();
    let scheduler_handle = scheduler::start(
        importer.clone(),
        config.ticketmaster.fetch_interval,
        shutdown.clone(),
    );
    scheduler::spawn_delayed_fetch(importer, config.ticketmaster.initial_delay, shutdown.clone());

    let app = api::build_router(events, participant_service)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let server_shutdown = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
                _ = server_shutdown.cancelled() => {}
            }
        })
        .await?;

    shutdown.cancel();
    scheduler_handle.await?;

    Ok(())
}
