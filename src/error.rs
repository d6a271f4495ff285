use thiserror::Error;

/// Failures that abort a whole feed run. Anything that goes wrong with a
/// single provider event is logged by the importer and never surfaces here.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed API key not configured")]
    Configuration,

    /// Built from a `reqwest::Error` stripped of its URL, which carries the API key.
    #[error("feed request failed: {0}")]
    Transport(reqwest::Error),

    #[error("feed returned unexpected status {status}")]
    Upstream { status: u16 },

    #[error("feed response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
