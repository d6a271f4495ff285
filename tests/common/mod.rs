#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use uuid::Uuid;

use eventmaster::error::{FeedError, FeedResult};
use eventmaster::models::{Event, Image, Participant, User};
use eventmaster::repositories::{EventRepository, ImageRepository, ParticipantRepository, UserRepository};
use eventmaster::services::{ImageService, ParticipantService};
use eventmaster::ticketmaster::payload::{Attraction, ProviderImage, Venue};
use eventmaster::ticketmaster::{EventFeed, Importer, ProviderEvent};

#[derive(Default)]
pub struct MemoryEvents {
    pub rows: Mutex<Vec<Event>>,
    pub failing_external_ids: Mutex<HashSet<String>>,
    pub lookup_fails: Mutex<bool>,
}

impl MemoryEvents {
    pub fn fail_create_for(&self, external_id: &str) {
        self.failing_external_ids
            .lock()
            .unwrap()
            .insert(external_id.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn external_ids(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.external_id.clone())
            .collect()
    }
}

#[async_trait]
impl EventRepository for MemoryEvents {
    async fn create(&self, event: &Event) -> Result<()> {
        if self.failing_external_ids.lock().unwrap().contains(&event.external_id) {
            return Err(anyhow!("simulated insert failure"));
        }
        self.rows.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Event>> {
        if *self.lookup_fails.lock().unwrap() {
            return Err(anyhow!("simulated lookup failure"));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.is_external && e.external_id == external_id)
            .cloned())
    }

    async fn list_paginated(&self, page: i64, limit: i64) -> Result<Vec<Event>> {
        let offset = ((page.max(1) - 1) * limit) as usize;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct MemoryImages {
    pub rows: Mutex<Vec<Image>>,
    pub attachments: Mutex<Vec<(Uuid, Uuid)>>,
    pub attach_fails: Mutex<bool>,
}

#[async_trait]
impl ImageRepository for MemoryImages {
    async fn create(&self, image: &Image) -> Result<()> {
        self.rows.lock().unwrap().push(image.clone());
        Ok(())
    }

    async fn find_by_link(&self, link: &str) -> Result<Option<Image>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.link == link).cloned())
    }

    async fn attach_to_event(&self, event_id: Uuid, images: &[Image]) -> Result<()> {
        if *self.attach_fails.lock().unwrap() {
            return Err(anyhow!("simulated attach failure"));
        }
        let mut attachments = self.attachments.lock().unwrap();
        for image in images {
            attachments.push((event_id, image.id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryParticipants {
    pub rows: Mutex<Vec<Participant>>,
    pub batch_sizes: Mutex<Vec<usize>>,
    pub fails: Mutex<bool>,
}

#[async_trait]
impl ParticipantRepository for MemoryParticipants {
    async fn create_in_batches(&self, participants: &[Participant], batch_size: usize) -> Result<()> {
        if *self.fails.lock().unwrap() {
            return Err(anyhow!("simulated batch insert failure"));
        }
        self.batch_sizes.lock().unwrap().push(batch_size);
        self.rows.lock().unwrap().extend_from_slice(participants);
        Ok(())
    }

    async fn find_by_event_id(&self, event_id: Uuid) -> Result<Vec<Participant>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.event_id == event_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    pub rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> Result<()> {
        self.rows.lock().unwrap().push(user.clone());
        Ok(())
    }
}

/// Replays a fixed provider response, or a fixed failure.
pub struct StaticFeed {
    pub events: Vec<ProviderEvent>,
    pub status_error: Option<u16>,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
}

impl StaticFeed {
    pub fn new(events: Vec<ProviderEvent>) -> Self {
        Self {
            events,
            status_error: None,
            delay: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    /// Makes every fetch take `delay` before answering.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(status: u16) -> Self {
        Self {
            events: Vec::new(),
            status_error: Some(status),
            delay: None,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventFeed for StaticFeed {
    async fn fetch(&self) -> FeedResult<Vec<ProviderEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        match self.status_error {
            Some(status) => Err(FeedError::Upstream { status }),
            None => Ok(self.events.clone()),
        }
    }
}

pub struct Harness {
    pub feed: Arc<StaticFeed>,
    pub events: Arc<MemoryEvents>,
    pub images: Arc<MemoryImages>,
    pub participants: Arc<MemoryParticipants>,
    pub system_user_id: Uuid,
}

impl Harness {
    pub fn new(feed: StaticFeed) -> Self {
        Self {
            feed: Arc::new(feed),
            events: Arc::new(MemoryEvents::default()),
            images: Arc::new(MemoryImages::default()),
            participants: Arc::new(MemoryParticipants::default()),
            system_user_id: Uuid::new_v4(),
        }
    }

    pub fn importer(&self) -> Importer {
        Importer::new(
            self.feed.clone(),
            self.events.clone(),
            ImageService::new(self.images.clone()),
            ParticipantService::new(self.participants.clone()),
            self.system_user_id,
        )
        .with_seed(42)
    }
}

pub fn image(url: &str, height: u32) -> ProviderImage {
    ProviderImage {
        url: url.to_string(),
        width: height,
        height,
    }
}

pub fn provider_event(id: &str, name: &str) -> ProviderEvent {
    let mut event = ProviderEvent {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://www.ticketmaster.com/event/{}", id),
        kind: "event".to_string(),
        ..ProviderEvent::default()
    };
    event.dates.start.date_time = "2024-06-02T01:00:00Z".to_string();
    event.dates.start.local_date = "2024-06-01".to_string();
    event.dates.start.local_time = "20:00:00".to_string();

    let mut venue = Venue::default();
    venue.name = "The Fillmore".to_string();
    venue.city.name = "San Francisco".to_string();
    venue.country.name = "United States Of America".to_string();
    venue.location.latitude = "37.7840".to_string();
    venue.location.longitude = "-122.4330".to_string();
    event.embedded.venues.push(venue);

    event.embedded.attractions.push(Attraction {
        images: vec![
            image(&format!("https://img/{}/small.jpg", id), 100),
            image(&format!("https://img/{}/large.jpg", id), 300),
        ],
    });

    event
}
