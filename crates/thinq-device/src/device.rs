//! Per-device wrapper shared between the integration's platforms

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{ApplianceApi, DeviceError};
use crate::coordinator::DeviceCoordinator;
use crate::snapshot::DeviceSnapshot;
use crate::DeviceType;

/// Static descriptive metadata for the device registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// (domain, device unique id) pairs identifying the device
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One appliance as seen by the entity platforms
///
/// Wraps the remote client together with the cached state snapshot, the
/// availability flag and the refresh coordinator. Entities read the cached
/// snapshot and signal the coordinator; they never write device state
/// directly.
pub struct LgeDevice {
    device: Arc<dyn ApplianceApi>,
    unique_id: String,
    name: String,
    device_info: DeviceInfo,
    available: AtomicBool,
    state: RwLock<Option<DeviceSnapshot>>,
    coordinator: DeviceCoordinator,
}

impl LgeDevice {
    pub fn new(
        device: Arc<dyn ApplianceApi>,
        unique_id: impl Into<String>,
        name: impl Into<String>,
        device_info: DeviceInfo,
    ) -> Self {
        Self {
            device,
            unique_id: unique_id.into(),
            name: name.into(),
            device_info,
            available: AtomicBool::new(false),
            state: RwLock::new(None),
            coordinator: DeviceCoordinator::new(),
        }
    }

    /// The remote client for this appliance
    pub fn api(&self) -> &Arc<dyn ApplianceApi> {
        &self.device
    }

    pub fn device_type(&self) -> DeviceType {
        self.device.device_type()
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Device-level availability, set by the last poll outcome
    pub fn available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Clone of the cached state snapshot, `None` before the first poll
    pub fn state(&self) -> Option<DeviceSnapshot> {
        self.state.read().expect("device state lock poisoned").clone()
    }

    pub fn coordinator(&self) -> &DeviceCoordinator {
        &self.coordinator
    }

    /// Poll the remote client and update the cached snapshot
    ///
    /// A failed poll marks the device unavailable but keeps the previous
    /// snapshot; a poll returning no state keeps both snapshot and
    /// availability as they were.
    pub async fn coordinator_refresh(&self) -> Result<(), DeviceError> {
        match self.device.poll().await {
            Ok(Some(snapshot)) => {
                debug!(device = %self.unique_id, "refreshed device state");
                *self.state.write().expect("device state lock poisoned") = Some(snapshot);
                self.available.store(true, Ordering::SeqCst);
                self.coordinator.mark_refreshed();
                self.coordinator.notify_listeners();
                Ok(())
            }
            Ok(None) => {
                debug!(device = %self.unique_id, "poll returned no state");
                self.coordinator.mark_refreshed();
                Ok(())
            }
            Err(err) => {
                warn!(device = %self.unique_id, error = %err, "device poll failed");
                self.available.store(false, Ordering::SeqCst);
                self.coordinator.notify_listeners();
                Err(err)
            }
        }
    }

    /// Mark cached state stale after a successful write and ask for a refresh
    pub fn async_set_updated(&self) {
        self.coordinator.request_refresh();
        self.coordinator.notify_listeners();
    }
}

impl std::fmt::Debug for LgeDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LgeDevice")
            .field("unique_id", &self.unique_id)
            .field("name", &self.name)
            .field("device_type", &self.device_type())
            .field("available", &self.available())
            .finish()
    }
}
