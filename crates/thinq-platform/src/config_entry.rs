//! Config entry and per-domain integration data

use std::sync::Mutex;

use dashmap::DashMap;
use tracing::debug;

use crate::dispatcher::DiscoveredDevices;

type UnloadCallback = Box<dyn FnOnce() + Send>;

/// One configured instance of an integration
///
/// Holds the cleanup callbacks registered during setup; unloading the entry
/// runs them in reverse registration order.
pub struct ConfigEntry {
    pub entry_id: String,
    pub domain: String,
    pub title: String,
    on_unload: Mutex<Vec<UnloadCallback>>,
}

impl ConfigEntry {
    pub fn new(
        entry_id: impl Into<String>,
        domain: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            domain: domain.into(),
            title: title.into(),
            on_unload: Mutex::new(Vec::new()),
        }
    }

    /// Register a callback to run when this entry is unloaded
    pub fn async_on_unload(&self, callback: impl FnOnce() + Send + 'static) {
        self.on_unload
            .lock()
            .expect("unload callback lock poisoned")
            .push(Box::new(callback));
    }

    /// Run all unload callbacks, most recent first
    pub async fn async_unload(&self) {
        let callbacks = std::mem::take(
            &mut *self
                .on_unload
                .lock()
                .expect("unload callback lock poisoned"),
        );
        debug!(entry = %self.entry_id, callbacks = callbacks.len(), "unloading config entry");
        for callback in callbacks.into_iter().rev() {
            callback();
        }
    }
}

/// Per-domain integration data, seeded during integration setup
///
/// The select platform reads the discovered-devices map stored here under
/// the integration's domain.
pub struct HassData {
    domains: DashMap<String, DiscoveredDevices>,
}

impl HassData {
    pub fn new() -> Self {
        Self {
            domains: DashMap::new(),
        }
    }

    pub fn insert(&self, domain: &str, devices: DiscoveredDevices) {
        self.domains.insert(domain.to_string(), devices);
    }

    pub fn get(&self, domain: &str) -> Option<DiscoveredDevices> {
        self.domains.get(domain).map(|d| d.clone())
    }
}

impl Default for HassData {
    fn default() -> Self {
        Self::new()
    }
}
