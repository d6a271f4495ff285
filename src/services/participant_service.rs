use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Event, Participant, SourceOfDiscovery};
use crate::repositories::ParticipantRepository;

pub const PARTICIPANT_BATCH_SIZE: usize = 50;

const FIRST_NAMES: [&str; 10] = [
    "Alex", "Taylor", "Jordan", "Morgan", "Casey", "Riley", "Quinn", "Jamie", "Avery", "Parker",
];

const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Rodriguez",
    "Wilson",
];

#[derive(Clone)]
pub struct ParticipantService {
    participants: Arc<dyn ParticipantRepository>,
}

impl ParticipantService {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// Seeds `count` synthetic registrations for a freshly imported event.
    pub async fn generate_fake_participants<R: Rng + Send>(
        &self,
        event: &Event,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Participant>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let participants = build_fake_participants(event, count, rng);
        self.participants
            .create_in_batches(&participants, PARTICIPANT_BATCH_SIZE)
            .await?;

        Ok(participants)
    }

    pub async fn event_participants(&self, event_id: uuid::Uuid) -> Result<Vec<Participant>> {
        self.participants.find_by_event_id(event_id).await
    }
}

pub fn build_fake_participants<R: Rng + ?Sized>(
    event: &Event,
    count: usize,
    rng: &mut R,
) -> Vec<Participant> {
    let short_id = event.short_id();

    (0..count)
        .map(|index| {
            Participant::new(
                event.id,
                random_full_name(rng),
                random_email(&short_id, index, rng),
                random_date_of_birth(rng),
                random_source(rng),
            )
        })
        .collect()
}

fn random_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
    format!("{} {}", first, last)
}

fn random_email<R: Rng + ?Sized>(short_id: &str, index: usize, rng: &mut R) -> String {
    let local = random_full_name(rng).to_lowercase().replace(' ', ".");
    format!("{}+{}-{}@example.com", local, short_id, index)
}

fn random_date_of_birth<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let year = rng.gen_range(1975..2005);
    let month = rng.gen_range(1..=12);
    // Capped at 28 so every month is valid.
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn random_source<R: Rng + ?Sized>(rng: &mut R) -> SourceOfDiscovery {
    SourceOfDiscovery::ALL
        .choose(rng)
        .copied()
        .unwrap_or(SourceOfDiscovery::FoundMyself)
}
