use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::Participant;

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Inserts `participants` in chunks of `batch_size`; zero means a single batch.
    async fn create_in_batches(&self, participants: &[Participant], batch_size: usize) -> Result<()>;

    async fn find_by_event_id(&self, event_id: Uuid) -> Result<Vec<Participant>>;
}

#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    async fn create_in_batches(&self, participants: &[Participant], batch_size: usize) -> Result<()> {
        if participants.is_empty() {
            return Ok(());
        }
        let batch_size = if batch_size == 0 { participants.len() } else { batch_size };

        let mut tx = self.pool.begin().await?;
        for chunk in participants.chunks(batch_size) {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO participants (id, full_name, email, date_of_birth, source_of_discovery, event_id, created_at, updated_at) ",
            );
            builder.push_values(chunk, |mut row, p| {
                row.push_bind(p.id)
                    .push_bind(&p.full_name)
                    .push_bind(&p.email)
                    .push_bind(p.date_of_birth)
                    .push_bind(p.source_of_discovery)
                    .push_bind(p.event_id)
                    .push_bind(p.created_at)
                    .push_bind(p.updated_at);
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;

        Ok(())
    }

    async fn find_by_event_id(&self, event_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE event_id = $1 ORDER BY created_at",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(participants)
    }
}
