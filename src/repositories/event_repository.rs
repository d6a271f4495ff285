use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, Image};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<()>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// `None` when no event carries this provider id.
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Event>>;

    async fn list_paginated(&self, page: i64, limit: i64) -> Result<Vec<Event>>;

    async fn count(&self) -> Result<i64>;
}

#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(&self, event_id: Uuid) -> Result<Vec<Image>> {
        let images = sqlx::query_as::<_, Image>(
            "SELECT i.* FROM images i
             JOIN event_images ei ON ei.image_id = i.id
             WHERE ei.event_id = $1
             ORDER BY i.created_at",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: &Event) -> Result<()> {
        sqlx::query(
            "INSERT INTO events (id, title, description, organizer, event_date, latitude, longitude, user_id, location, external_id, external_url, event_type, is_external, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.organizer)
        .bind(event.event_date)
        .bind(event.latitude)
        .bind(event.longitude)
        .bind(event.user_id)
        .bind(&event.location)
        .bind(&event.external_id)
        .bind(&event.external_url)
        .bind(&event.event_type)
        .bind(event.is_external)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match event {
            Some(mut event) => {
                event.images = self.load_images(event.id).await?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE external_id = $1 AND is_external = true LIMIT 1",
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn list_paginated(&self, page: i64, limit: i64) -> Result<Vec<Event>> {
        let offset = (page.max(1) - 1) * limit;
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events ORDER BY event_date DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
