use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::client::PROVIDER_NAME;
use super::importer::Importer;

/// Runs the importer every `period` until `token` is cancelled. The first
/// run happens one period after start. A run already in progress finishes
/// before cancellation is noticed.
pub fn start(importer: Arc<Importer>, period: Duration, token: CancellationToken) -> JoinHandle<()> {
    let period = period.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval() fires immediately once
        ticker.tick().await;

        info!("{} scheduler started (every {:?})", PROVIDER_NAME, period);

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("{} scheduler stopped", PROVIDER_NAME);
                    return;
                }
                _ = ticker.tick() => {
                    if let Err(err) = importer.fetch_and_save_events().await {
                        error!("{} scheduled fetch error: {}", PROVIDER_NAME, err);
                    }
                }
            }
        }
    })
}

/// One-shot fetch after `delay`, used at process start.
pub fn spawn_delayed_fetch(importer: Arc<Importer>, delay: Duration, token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Delaying {} fetch for {:?} after start", PROVIDER_NAME, delay);

        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }

        match importer.fetch_and_save_events().await {
            Ok(summary) => info!(created = summary.created, "{} initial fetch completed", PROVIDER_NAME),
            Err(err) => error!("{} initial fetch failed: {}", PROVIDER_NAME, err),
        }
    })
}
