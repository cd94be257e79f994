//! Device-side types for SmartThinQ appliances
//!
//! This crate models the collaborator the select platform talks to: the
//! appliance category table, capability enums, the cached state snapshot,
//! the remote-client trait ([`ApplianceApi`]) and the per-device wrapper
//! ([`LgeDevice`]) with its refresh coordinator. Transport and session
//! handling live behind [`ApplianceApi`] and are out of scope here.

mod client;
mod coordinator;
mod device;
mod device_type;
mod modes;
mod snapshot;

pub use client::{ApplianceApi, DeviceError};
pub use coordinator::DeviceCoordinator;
pub use device::{DeviceInfo, LgeDevice};
pub use device_type::{DeviceType, FEAT_DISPLAY_SCROLL_SPEED, FEAT_WEIGHT_UNIT};
pub use modes::{is_valid_vertical_step, AcAutoDryMode, VERTICAL_STEP_MAX, VERTICAL_STEP_MIN};
pub use snapshot::DeviceSnapshot;
