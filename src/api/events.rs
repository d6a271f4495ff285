use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::api::response::{ApiError, ApiResult};
use crate::api::AppState;
use crate::models::event::ListEventsQuery;
use crate::models::Event;

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult {
    let page = query.page();
    let limit = query.limit();

    let events = state.events.list_paginated(page, limit).await.map_err(|err| {
        error!("Failed to list events: {}", err);
        ApiError::internal("Failed to list events")
    })?;

    let total = state.events.count().await.map_err(|err| {
        error!("Failed to count events: {}", err);
        ApiError::internal("Failed to count events")
    })?;

    Ok(Json(json!({
        "data": events,
        "total": total,
        "page": page,
        "limit": limit,
    })))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult<Event> {
    load_event(&state, event_id).await.map(Json)
}

pub async fn list_event_participants(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> ApiResult {
    load_event(&state, event_id).await?;

    let participants = state
        .participant_service
        .event_participants(event_id)
        .await
        .map_err(|err| {
            error!("Failed to load participants for {}: {}", event_id, err);
            ApiError::internal("Failed to load participants")
        })?;

    Ok(Json(json!(participants)))
}

async fn load_event(state: &AppState, event_id: Uuid) -> Result<Event, ApiError> {
    match state.events.find_by_id(event_id).await {
        Ok(Some(event)) => Ok(event),
        Ok(None) => Err(ApiError::not_found("Event not found")),
        Err(err) => {
            error!("Failed to fetch event {}: {}", event_id, err);
            Err(ApiError::internal("Failed to fetch event"))
        }
    }
}

