//! Per-device refresh coordination
//!
//! The coordinator is the notification hub between the polling side (which
//! stores fresh snapshots) and entities (which want to know when cached
//! state changed or should be re-fetched).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, Notify};
use tracing::trace;

const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Refresh/update signalling for one device
pub struct DeviceCoordinator {
    updates: broadcast::Sender<()>,
    refresh_wanted: Notify,
    refresh_requests: AtomicU64,
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl DeviceCoordinator {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            updates,
            refresh_wanted: Notify::new(),
            refresh_requests: AtomicU64::new(0),
            last_refresh: RwLock::new(None),
        }
    }

    /// Subscribe to "cached state changed" notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.updates.subscribe()
    }

    /// Notify listeners that cached state changed
    pub fn notify_listeners(&self) {
        // send errors just mean nobody is listening
        let _ = self.updates.send(());
    }

    /// Ask the polling side for an early refresh
    pub fn request_refresh(&self) {
        trace!("refresh requested");
        self.refresh_requests.fetch_add(1, Ordering::SeqCst);
        self.refresh_wanted.notify_one();
    }

    /// Wait until someone requests a refresh
    pub async fn refresh_wanted(&self) {
        self.refresh_wanted.notified().await;
    }

    /// Number of refresh requests seen so far
    pub fn refresh_requests(&self) -> u64 {
        self.refresh_requests.load(Ordering::SeqCst)
    }

    /// Record a completed refresh
    pub fn mark_refreshed(&self) {
        *self.last_refresh.write().expect("coordinator lock poisoned") = Some(Utc::now());
    }

    /// When the last successful refresh completed
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read().expect("coordinator lock poisoned")
    }
}

impl Default for DeviceCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
