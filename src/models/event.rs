use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Image;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub organizer: String,

    pub event_date: DateTime<Utc>,

    pub latitude: f64,
    pub longitude: f64,

    pub user_id: Uuid,

    pub location: String,

    /// Provider identifier; empty for locally created events.
    pub external_id: String,

    pub external_url: String,

    pub event_type: String,

    pub is_external: bool,

    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// A blank externally sourced event. The owner is filled in by the importer.
    pub fn external(external_id: impl Into<String>, event_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            organizer: String::new(),
            event_date,
            latitude: 0.0,
            longitude: 0.0,
            user_id: Uuid::nil(),
            location: String::new(),
            external_id: external_id.into(),
            external_url: String::new(),
            event_type: String::new(),
            is_external: true,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// First eight characters of the id, used to tag synthetic participant emails.
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListEventsQuery {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit
            .filter(|l| *l >= 1)
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT)
    }
}
