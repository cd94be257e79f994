//! Entity boundary types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thinq_device::DeviceInfo;

/// Classification of a non-primary entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// Primary, uncategorized entity
    #[default]
    None,
    /// Changes the configuration of a device
    Config,
    /// Exposes diagnostics of a device
    Diagnostic,
}

/// What a select entity exposes to the host platform
///
/// Reads are synchronous views of already-cached state; only
/// [`async_select_option`](Self::async_select_option) suspends.
#[async_trait]
pub trait SelectEntity: Send + Sync {
    /// Stable identifier the platform deduplicates on
    fn unique_id(&self) -> &str;

    /// Entity display name (combined with the device name by the platform)
    fn name(&self) -> &str;

    fn icon(&self) -> Option<&str>;

    fn entity_category(&self) -> EntityCategory;

    /// Descriptive metadata of the owning device
    fn device_info(&self) -> &DeviceInfo;

    /// The selectable options
    fn options(&self) -> &[String];

    /// Currently selected option, `None` when unknown/unset
    fn current_option(&self) -> Option<String>;

    fn available(&self) -> bool;

    /// Apply a new option; errors surface through the platform's standard
    /// error-reporting path
    async fn async_select_option(&self, option: &str) -> anyhow::Result<()>;
}
