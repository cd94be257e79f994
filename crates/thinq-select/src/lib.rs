//! Select platform for SmartThinQ appliances
//!
//! Exposes appliance configuration choices (wash course, microwave display
//! scroll speed and weight unit, air-conditioner vertical wind step and
//! auto-dry mode) as select entities. Static description tables map each
//! appliance category to its selects; discovery crosses those tables with
//! the devices reported for the category and registers an entity for every
//! pair that passes the existence check.

mod description;
mod entities;
mod select;

use std::sync::Arc;

use thinq_platform::{
    ConfigEntry, DiscoveredDevices, Dispatcher, EntityPlatform, HassData, SelectEntity, DOMAIN,
    LGE_DISCOVERY_NEW,
};
use tracing::debug;

pub use description::{
    select_exists, InvalidDescription, SelectOptionFuture, ThinqSelectDescription,
};
pub use entities::{all_descriptions, descriptions_for, validate_registry};
pub use select::LgeSelect;

/// One discovery pass: cross devices with the registry, filter through the
/// existence check, and submit the survivors. Deduplication of repeated
/// submissions is the platform's job.
fn discover_devices(platform: &EntityPlatform, devices: &DiscoveredDevices) {
    if devices.is_empty() {
        return;
    }

    let mut lge_selects: Vec<Arc<dyn SelectEntity>> = Vec::new();
    for (device_type, lge_devices) in devices {
        for description in descriptions_for(*device_type) {
            for lge_device in lge_devices {
                if select_exists(lge_device, description) {
                    lge_selects.push(Arc::new(LgeSelect::new(lge_device.clone(), description)));
                } else {
                    debug!(
                        device = %lge_device.unique_id(),
                        key = description.key,
                        "select not present on device, skipping"
                    );
                }
            }
        }
    }

    platform.add_entities(lge_selects);
}

/// Set up the LGE selects for a config entry
///
/// Runs one eager discovery pass over the devices already known, then keeps
/// listening for discovery notifications until the entry is unloaded.
pub async fn async_setup_entry(
    hass_data: &HassData,
    entry: &ConfigEntry,
    dispatcher: &Dispatcher<DiscoveredDevices>,
    platform: Arc<EntityPlatform>,
) -> Result<(), InvalidDescription> {
    validate_registry()?;
    debug!("starting LGE ThinQ select setup");

    if let Some(lge_cfg_devices) = hass_data.get(DOMAIN) {
        discover_devices(&platform, &lge_cfg_devices);
    }

    let mut rx = dispatcher.connect(LGE_DISCOVERY_NEW);
    let handle = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(lge_devices) => discover_devices(&platform, &lge_devices),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "discovery receiver lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
    entry.async_on_unload(move || handle.abort());

    Ok(())
}
