//! Remote-control client trait for ThinQ appliances
//!
//! Each physical appliance is driven through one [`ApplianceApi`]
//! implementation. The trait carries one accessor group per selectable
//! feature; defaults return "not supported" so an implementation only
//! overrides the groups its appliance actually has. Capability reads are
//! synchronous (they read session-cached data); only writes go to the
//! network.

use async_trait::async_trait;
use thiserror::Error;

use crate::modes::AcAutoDryMode;
use crate::snapshot::DeviceSnapshot;
use crate::DeviceType;

/// Errors surfaced by the remote client
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceError {
    /// The appliance does not implement this feature group
    #[error("device does not support {0}")]
    NotSupported(&'static str),

    /// The requested option cannot be encoded for the device
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The remote call itself failed (transport, session, device NAK)
    #[error("remote call failed: {0}")]
    Remote(String),
}

/// Remote-control client for one appliance
///
/// Transport, authentication and session renewal all live behind this trait.
#[async_trait]
pub trait ApplianceApi: Send + Sync {
    /// Appliance category
    fn device_type(&self) -> DeviceType;

    /// Fetch a fresh state snapshot; `None` when the device reported nothing
    async fn poll(&self) -> Result<Option<DeviceSnapshot>, DeviceError>;

    // --- washer family ---

    /// Courses selectable on this washer
    fn course_list(&self) -> Vec<String> {
        Vec::new()
    }

    /// Currently selected course, if any
    fn selected_course(&self) -> Option<String> {
        None
    }

    /// Whether course selection is currently permitted (remote-start armed)
    fn select_course_enabled(&self) -> bool {
        false
    }

    /// Select and start a wash course
    async fn select_start_course(&self, _course: &str) -> Result<(), DeviceError> {
        Err(DeviceError::NotSupported("course selection"))
    }

    // --- microwave ---

    /// Supported display scroll speeds
    fn display_scroll_speeds(&self) -> Vec<String> {
        Vec::new()
    }

    async fn set_display_scroll_speed(&self, _speed: &str) -> Result<(), DeviceError> {
        Err(DeviceError::NotSupported("display scroll speed"))
    }

    /// Supported defrost weight units
    fn defrost_weight_units(&self) -> Vec<String> {
        Vec::new()
    }

    async fn set_defrost_weight_unit(&self, _unit: &str) -> Result<(), DeviceError> {
        Err(DeviceError::NotSupported("weight unit"))
    }

    // --- air conditioner ---

    /// Vertical wind steps the unit exposes (1..=6)
    fn vertical_step_modes(&self) -> Vec<i32> {
        Vec::new()
    }

    /// Current vertical wind step
    fn vertical_step_mode(&self) -> Option<i32> {
        None
    }

    async fn set_vertical_step_mode(&self, _step: i32) -> Result<(), DeviceError> {
        Err(DeviceError::NotSupported("vertical wind step"))
    }

    /// Auto-dry modes the unit exposes
    fn auto_dry_modes(&self) -> Vec<AcAutoDryMode> {
        Vec::new()
    }

    /// Current auto-dry mode
    fn auto_dry_mode(&self) -> Option<AcAutoDryMode> {
        None
    }

    async fn set_auto_dry_mode(&self, _mode: AcAutoDryMode) -> Result<(), DeviceError> {
        Err(DeviceError::NotSupported("auto dry"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareAppliance;

    #[async_trait]
    impl ApplianceApi for BareAppliance {
        fn device_type(&self) -> DeviceType {
            DeviceType::Unknown
        }

        async fn poll(&self) -> Result<Option<DeviceSnapshot>, DeviceError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_defaults_report_not_supported() {
        let api = BareAppliance;
        assert!(api.course_list().is_empty());
        assert!(api.vertical_step_modes().is_empty());
        assert_eq!(api.auto_dry_mode(), None);
        assert_eq!(
            api.select_start_course("Cotton").await,
            Err(DeviceError::NotSupported("course selection"))
        );
        assert_eq!(
            api.set_vertical_step_mode(3).await,
            Err(DeviceError::NotSupported("vertical wind step"))
        );
    }
}
