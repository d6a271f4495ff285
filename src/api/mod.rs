pub mod events;
pub mod health;
pub mod response;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::repositories::EventRepository;
use crate::services::ParticipantService;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub participant_service: ParticipantService,
}

pub fn build_router(events: Arc<dyn EventRepository>, participant_service: ParticipantService) -> Router {
    let state = AppState {
        events,
        participant_service,
    };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/events", get(events::list_events))
        .route("/events/{id}", get(events::get_event))
        .route("/events/{id}/participants", get(events::list_event_participants))
        .with_state(state)
}
