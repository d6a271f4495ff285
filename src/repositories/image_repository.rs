use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Image;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn create(&self, image: &Image) -> Result<()>;

    async fn find_by_link(&self, link: &str) -> Result<Option<Image>>;

    async fn attach_to_event(&self, event_id: Uuid, images: &[Image]) -> Result<()>;
}

#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    async fn create(&self, image: &Image) -> Result<()> {
        sqlx::query(
            "INSERT INTO images (id, link, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(image.id)
        .bind(&image.link)
        .bind(image.created_at)
        .bind(image.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_link(&self, link: &str) -> Result<Option<Image>> {
        let image = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE link = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(link)
        .fetch_optional(&self.pool)
        .await?;

        Ok(image)
    }

    async fn attach_to_event(&self, event_id: Uuid, images: &[Image]) -> Result<()> {
        if images.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for image in images {
            sqlx::query(
                "INSERT INTO event_images (event_id, image_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(event_id)
            .bind(image.id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(())
    }
}
