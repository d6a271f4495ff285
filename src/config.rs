use std::env;
use std::time::Duration;

use tracing::debug;

pub const DEFAULT_TICKETMASTER_BASE_URL: &str = "https://app.ticketmaster.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub ticketmaster: TicketmasterConfig,
}

#[derive(Debug, Clone)]
pub struct TicketmasterConfig {
    pub api_key: String,
    pub base_url: String,
    pub country_code: String,
    pub page_size: u32,
    pub fetch_interval: Duration,
    pub initial_delay: Duration,
    pub http_timeout: Duration,
    pub participants_per_event: usize,
}

impl Default for TicketmasterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_TICKETMASTER_BASE_URL.to_string(),
            country_code: "US".to_string(),
            page_size: 100,
            fetch_interval: Duration::from_secs(6 * 60 * 60),
            initial_delay: Duration::from_secs(5),
            http_timeout: Duration::from_secs(30),
            participants_per_event: 2,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        Ok(Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 3000),
            ticketmaster: TicketmasterConfig::from_env(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TicketmasterConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("TICKETMASTER_API_KEY")
            .or_else(|_| env::var("TICKETMASTER_KEY"))
            .unwrap_or_default()
            .trim()
            .to_string();

        let config = Self {
            api_key,
            base_url: env::var("TICKETMASTER_BASE_URL").unwrap_or(defaults.base_url),
            country_code: env::var("TICKETMASTER_COUNTRY_CODE").unwrap_or(defaults.country_code),
            page_size: parse_or("TICKETMASTER_PAGE_SIZE", defaults.page_size),
            fetch_interval: Duration::from_secs(parse_or(
                "TICKETMASTER_FETCH_INTERVAL_SECS",
                defaults.fetch_interval.as_secs(),
            )),
            initial_delay: Duration::from_secs(parse_or(
                "TICKETMASTER_INITIAL_DELAY_SECS",
                defaults.initial_delay.as_secs(),
            )),
            http_timeout: Duration::from_secs(parse_or(
                "TICKETMASTER_HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )),
            participants_per_event: parse_or(
                "TICKETMASTER_PARTICIPANTS_PER_EVENT",
                defaults.participants_per_event,
            ),
        };

        debug!("Ticketmaster key configured: {}", !config.api_key.is_empty());
        debug!("Ticketmaster fetch interval: {:?}", config.fetch_interval);

        config
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_value(env::var(key).ok().as_deref(), default)
}

fn parse_value<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
