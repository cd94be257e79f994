//! Cached device state snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One poll's worth of decoded device state
///
/// `device_features` is the generic key/value surface: every feature the
/// telemetry layer decoded for this device, keyed by feature name. Selects
/// without a dedicated value reader fall back to this map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    /// Generic feature key → decoded value
    #[serde(default)]
    pub device_features: HashMap<String, String>,

    /// Whether the appliance reports itself as powered on
    #[serde(default)]
    pub is_on: bool,
}

impl DeviceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a generic feature value by key
    pub fn feature(&self, key: &str) -> Option<&str> {
        self.device_features.get(key).map(String::as_str)
    }

    /// Builder-style feature insertion
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.device_features.insert(key.into(), value.into());
        self
    }
}
