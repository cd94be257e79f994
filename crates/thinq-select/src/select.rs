//! The select entity bound to one device and one description

use std::sync::Arc;

use async_trait::async_trait;
use thinq_device::{DeviceInfo, LgeDevice};
use thinq_platform::{EntityCategory, SelectEntity};
use tracing::debug;

use crate::description::ThinqSelectDescription;

/// A select entity for one LGE device feature
///
/// The option list is captured once at construction from the description's
/// options function; capability lists refreshed after that point are not
/// picked up until the entity is rebuilt.
pub struct LgeSelect {
    api: Arc<LgeDevice>,
    description: &'static ThinqSelectDescription,
    unique_id: String,
    options: Vec<String>,
}

impl LgeSelect {
    pub fn new(api: Arc<LgeDevice>, description: &'static ThinqSelectDescription) -> Self {
        let unique_id = format!("{}-{}-select", api.unique_id(), description.key);
        let options = (description.options_fn)(&api);
        debug!(
            unique_id = %unique_id,
            options = options.len(),
            "creating select entity"
        );
        Self {
            api,
            description,
            unique_id,
            options,
        }
    }

    pub fn description(&self) -> &'static ThinqSelectDescription {
        self.description
    }
}

#[async_trait]
impl SelectEntity for LgeSelect {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        self.description.name
    }

    fn icon(&self) -> Option<&str> {
        Some(self.description.icon)
    }

    fn entity_category(&self) -> EntityCategory {
        self.description.entity_category
    }

    fn device_info(&self) -> &DeviceInfo {
        self.api.device_info()
    }

    fn options(&self) -> &[String] {
        &self.options
    }

    fn current_option(&self) -> Option<String> {
        if let Some(value_fn) = self.description.value_fn {
            return value_fn(&self.api);
        }
        self.api
            .state()
            .and_then(|state| state.feature(self.description.key).map(str::to_string))
    }

    fn available(&self) -> bool {
        let descriptor_available = self
            .description
            .available_fn
            .map_or(true, |available_fn| available_fn(&self.api));
        self.api.available() && descriptor_available
    }

    async fn async_select_option(&self, option: &str) -> anyhow::Result<()> {
        (self.description.select_option_fn)(&self.api, option).await?;
        self.api.async_set_updated();
        Ok(())
    }
}
