//! Select entity descriptions
//!
//! A description is the static record of one selectable feature: metadata
//! plus the behavior functions that list options, apply a choice against the
//! remote client, and optionally read the current value or gate
//! availability. Descriptions live in `static` tables, so the behavior
//! slots are plain function pointers to named per-feature functions.

use futures::future::BoxFuture;
use thinq_device::{DeviceError, LgeDevice};
use thinq_platform::EntityCategory;
use thiserror::Error;

/// Future returned by a description's apply function
pub type SelectOptionFuture<'a> = BoxFuture<'a, Result<(), DeviceError>>;

/// A malformed select description, rejected before any entity is built
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidDescription {
    #[error("select description for {name:?} has an empty key")]
    EmptyKey { name: &'static str },
}

/// Describes one select entity of an appliance category
pub struct ThinqSelectDescription {
    /// Stable identifier within the category; doubles as the generic
    /// feature-map key when no value reader is set
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub entity_category: EntityCategory,

    /// List the selectable options from cached capability data
    pub options_fn: fn(&LgeDevice) -> Vec<String>,

    /// Apply a chosen option against the remote client
    pub select_option_fn: for<'a> fn(&'a LgeDevice, &'a str) -> SelectOptionFuture<'a>,

    /// Read the current option; `None` here means "fall back to the
    /// generic feature map under `key`"
    pub value_fn: Option<fn(&LgeDevice) -> Option<String>>,

    /// Extra availability gate on top of device-level availability
    pub available_fn: Option<fn(&LgeDevice) -> bool>,
}

impl ThinqSelectDescription {
    /// Reject configuration mistakes before any entity is materialized
    pub fn validate(&self) -> Result<(), InvalidDescription> {
        if self.key.is_empty() {
            return Err(InvalidDescription::EmptyKey { name: self.name });
        }
        Ok(())
    }
}

impl std::fmt::Debug for ThinqSelectDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThinqSelectDescription")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("has_value_fn", &self.value_fn.is_some())
            .field("has_available_fn", &self.available_fn.is_some())
            .finish()
    }
}

/// Decide whether a select entity should exist for a device
///
/// A description carrying its own value reader applies to every device of
/// its category; otherwise the device must already report the description's
/// key in its generic feature map. Evaluated once, at discovery time.
pub fn select_exists(device: &LgeDevice, description: &ThinqSelectDescription) -> bool {
    if description.value_fn.is_some() {
        return true;
    }
    device
        .state()
        .map(|state| state.feature(description.key).is_some())
        .unwrap_or(false)
}
