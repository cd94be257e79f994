//! Named-signal dispatcher for discovery notifications

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use thinq_device::{DeviceType, LgeDevice};
use tokio::sync::broadcast;
use tracing::{debug, trace};

const SIGNAL_CHANNEL_CAPACITY: usize = 64;

/// Devices reported by one discovery pass, grouped by category
pub type DiscoveredDevices = HashMap<DeviceType, Vec<Arc<LgeDevice>>>;

/// Broadcast channel per signal name
///
/// Send errors are ignored; they only mean no receiver is currently
/// connected to that signal.
pub struct Dispatcher<T: Clone> {
    signals: DashMap<String, broadcast::Sender<T>>,
}

impl<T: Clone> Dispatcher<T> {
    pub fn new() -> Self {
        Self {
            signals: DashMap::new(),
        }
    }

    /// Connect to a signal, receiving every payload sent after this call
    pub fn connect(&self, signal: &str) -> broadcast::Receiver<T> {
        trace!(signal, "connecting dispatcher receiver");
        self.signals
            .entry(signal.to_string())
            .or_insert_with(|| {
                let (tx, _) = broadcast::channel(SIGNAL_CHANNEL_CAPACITY);
                tx
            })
            .subscribe()
    }

    /// Send a payload to every receiver connected to `signal`
    pub fn send(&self, signal: &str, payload: T) {
        debug!(signal, "dispatching signal");
        if let Some(sender) = self.signals.get(signal) {
            let _ = sender.send(payload);
        }
    }
}

impl<T: Clone> Default for Dispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
