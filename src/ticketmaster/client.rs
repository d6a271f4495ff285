use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::TicketmasterConfig;
use crate::error::{FeedError, FeedResult};

use super::payload::{DiscoveryResponse, ProviderEvent};

pub const PROVIDER_NAME: &str = "Ticketmaster";

const EVENTS_PATH: &str = "/discovery/v2/events.json";

/// Source of provider events for one import run.
#[async_trait]
pub trait EventFeed: Send + Sync {
    async fn fetch(&self) -> FeedResult<Vec<ProviderEvent>>;
}

#[derive(Clone)]
pub struct TicketmasterClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    country_code: String,
    page_size: u32,
}

impl TicketmasterClient {
    pub fn new(config: &TicketmasterConfig) -> anyhow::Result<Self> {
        let http_client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code.clone(),
            page_size: config.page_size,
        })
    }

    fn events_url(&self) -> String {
        format!("{}{}", self.base_url, EVENTS_PATH)
    }

    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("countryCode", self.country_code.clone()),
            ("size", self.page_size.to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }
}

#[async_trait]
impl EventFeed for TicketmasterClient {
    async fn fetch(&self) -> FeedResult<Vec<ProviderEvent>> {
        if self.api_key.is_empty() {
            return Err(FeedError::Configuration);
        }

        let url = self.events_url();
        info!(
            "{} fetch started: url={} country={} size={}",
            PROVIDER_NAME, url, self.country_code, self.page_size
        );

        let response = self
            .http_client
            .get(&url)
            .query(&self.query())
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", PROVIDER_NAME, status);
            return Err(FeedError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FeedError::Transport(e.without_url()))?;
        debug!("{} response: {} bytes", PROVIDER_NAME, body.len());

        let data: DiscoveryResponse = serde_json::from_slice(&body)?;
        Ok(data.embedded.events)
    }
}
