use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "source_of_discovery", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SourceOfDiscovery {
    SocialMedia,
    Friends,
    FoundMyself,
}

impl SourceOfDiscovery {
    pub const ALL: [SourceOfDiscovery; 3] = [
        SourceOfDiscovery::SocialMedia,
        SourceOfDiscovery::Friends,
        SourceOfDiscovery::FoundMyself,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Uuid,

    pub full_name: String,

    pub email: String,

    pub date_of_birth: NaiveDate,

    pub source_of_discovery: SourceOfDiscovery,

    pub event_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(
        event_id: Uuid,
        full_name: String,
        email: String,
        date_of_birth: NaiveDate,
        source_of_discovery: SourceOfDiscovery,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            date_of_birth,
            source_of_discovery,
            event_id,
            created_at: now,
            updated_at: now,
        }
    }
}
