//! Host-platform surface for the SmartThinQ integration
//!
//! A compact stand-in for the pieces of the home-automation platform this
//! integration consumes: the select-entity boundary trait, the entity
//! platform with unique-id deduplication, the named-signal dispatcher used
//! for discovery notifications, and the config-entry object with its
//! per-domain data store.

mod config_entry;
mod dispatcher;
mod entity;
mod platform;

pub use config_entry::{ConfigEntry, HassData};
pub use dispatcher::{DiscoveredDevices, Dispatcher};
pub use entity::{EntityCategory, SelectEntity};
pub use platform::EntityPlatform;

/// Integration domain identifier
pub const DOMAIN: &str = "smartthinq_sensors";

/// Dispatcher signal fired when new devices were discovered
pub const LGE_DISCOVERY_NEW: &str = "smartthinq_sensors_discovery_new";
