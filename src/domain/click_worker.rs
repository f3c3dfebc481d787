//! Background worker persisting click events.
//!
//! Runs for the lifetime of the process on its own repository handle,
//! independent of any request. Insert failures are logged and dropped:
//! analytics must never cost a visitor their redirect.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::AnalyticsRepository;

/// Consumes click events from the channel until all senders are dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn AnalyticsRepository>,
) {
    while let Some(event) = rx.recv().await {
        let link_id = event.link_id;
        match repository.record_click(event.into()).await {
            Ok(()) => debug!(link_id, "Recorded click"),
            Err(e) => warn!(link_id, error = ?e, "Failed to record click, dropping event"),
        }
    }

    debug!("Click worker channel closed, shutting down");
}
