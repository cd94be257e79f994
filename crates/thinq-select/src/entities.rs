//! Static select registry per appliance category
//!
//! One named behavior function per feature, wired into `static` description
//! tables. The registry is read-only process-wide configuration; no lazy
//! state, no runtime mutation.

use thinq_device::{
    is_valid_vertical_step, AcAutoDryMode, DeviceError, DeviceType, LgeDevice,
    FEAT_DISPLAY_SCROLL_SPEED, FEAT_WEIGHT_UNIT,
};
use thinq_platform::EntityCategory;

use crate::description::{InvalidDescription, SelectOptionFuture, ThinqSelectDescription};

// --- washer family ---

fn washer_course_options(device: &LgeDevice) -> Vec<String> {
    device.api().course_list()
}

fn washer_select_course<'a>(device: &'a LgeDevice, option: &'a str) -> SelectOptionFuture<'a> {
    Box::pin(async move { device.api().select_start_course(option).await })
}

fn washer_selected_course(device: &LgeDevice) -> Option<String> {
    device.api().selected_course()
}

fn washer_course_enabled(device: &LgeDevice) -> bool {
    device.api().select_course_enabled()
}

// --- microwave ---

fn microwave_scroll_speed_options(device: &LgeDevice) -> Vec<String> {
    device.api().display_scroll_speeds()
}

fn microwave_set_scroll_speed<'a>(
    device: &'a LgeDevice,
    option: &'a str,
) -> SelectOptionFuture<'a> {
    Box::pin(async move { device.api().set_display_scroll_speed(option).await })
}

fn microwave_weight_unit_options(device: &LgeDevice) -> Vec<String> {
    device.api().defrost_weight_units()
}

fn microwave_set_weight_unit<'a>(
    device: &'a LgeDevice,
    option: &'a str,
) -> SelectOptionFuture<'a> {
    Box::pin(async move { device.api().set_defrost_weight_unit(option).await })
}

// --- air conditioner ---

fn ac_vertical_step_options(device: &LgeDevice) -> Vec<String> {
    device
        .api()
        .vertical_step_modes()
        .into_iter()
        .map(|step| step.to_string())
        .collect()
}

fn ac_set_vertical_step<'a>(device: &'a LgeDevice, option: &'a str) -> SelectOptionFuture<'a> {
    Box::pin(async move {
        let step: i32 = option
            .parse()
            .map_err(|_| DeviceError::InvalidOption(option.to_string()))?;
        device.api().set_vertical_step_mode(step).await
    })
}

fn ac_vertical_step_value(device: &LgeDevice) -> Option<String> {
    device
        .api()
        .vertical_step_mode()
        .filter(|step| is_valid_vertical_step(*step))
        .map(|step| step.to_string())
}

fn ac_vertical_step_available(device: &LgeDevice) -> bool {
    !device.api().vertical_step_modes().is_empty()
}

fn ac_auto_dry_options(device: &LgeDevice) -> Vec<String> {
    device
        .api()
        .auto_dry_modes()
        .into_iter()
        .map(|mode| mode.label().to_string())
        .collect()
}

fn ac_set_auto_dry<'a>(device: &'a LgeDevice, option: &'a str) -> SelectOptionFuture<'a> {
    Box::pin(async move {
        let mode = AcAutoDryMode::from_label(option)
            .ok_or_else(|| DeviceError::InvalidOption(option.to_string()))?;
        device.api().set_auto_dry_mode(mode).await
    })
}

fn ac_auto_dry_value(device: &LgeDevice) -> Option<String> {
    device
        .api()
        .auto_dry_mode()
        .map(|mode| mode.label().to_string())
}

fn ac_auto_dry_available(device: &LgeDevice) -> bool {
    !device.api().auto_dry_modes().is_empty()
}

static WASH_DEV_SELECT: &[ThinqSelectDescription] = &[ThinqSelectDescription {
    key: "course_selection",
    name: "Course selection",
    icon: "mdi:tune-vertical-variant",
    entity_category: EntityCategory::None,
    options_fn: washer_course_options,
    select_option_fn: washer_select_course,
    value_fn: Some(washer_selected_course),
    available_fn: Some(washer_course_enabled),
}];

static MICROWAVE_SELECT: &[ThinqSelectDescription] = &[
    ThinqSelectDescription {
        key: FEAT_DISPLAY_SCROLL_SPEED,
        name: "Display scroll speed",
        icon: "mdi:format-pilcrow-arrow-right",
        entity_category: EntityCategory::Config,
        options_fn: microwave_scroll_speed_options,
        select_option_fn: microwave_set_scroll_speed,
        value_fn: None,
        available_fn: None,
    },
    ThinqSelectDescription {
        key: FEAT_WEIGHT_UNIT,
        name: "Weight unit",
        icon: "mdi:weight",
        entity_category: EntityCategory::Config,
        options_fn: microwave_weight_unit_options,
        select_option_fn: microwave_set_weight_unit,
        value_fn: None,
        available_fn: None,
    },
];

static AC_SELECT: &[ThinqSelectDescription] = &[
    ThinqSelectDescription {
        key: "ac_vertical_wind_step",
        name: "Vertical wind step",
        icon: "mdi:unfold-more-vertical",
        entity_category: EntityCategory::None,
        options_fn: ac_vertical_step_options,
        select_option_fn: ac_set_vertical_step,
        value_fn: Some(ac_vertical_step_value),
        available_fn: Some(ac_vertical_step_available),
    },
    ThinqSelectDescription {
        key: "ac_autodry_mode",
        name: "Auto dry",
        icon: "mdi:hair-dryer",
        entity_category: EntityCategory::None,
        options_fn: ac_auto_dry_options,
        select_option_fn: ac_set_auto_dry,
        value_fn: Some(ac_auto_dry_value),
        available_fn: Some(ac_auto_dry_available),
    },
];

/// Select descriptions registered for an appliance category
pub fn descriptions_for(device_type: DeviceType) -> &'static [ThinqSelectDescription] {
    match device_type {
        DeviceType::Microwave => MICROWAVE_SELECT,
        DeviceType::Ac => AC_SELECT,
        t if t.is_washer_like() => WASH_DEV_SELECT,
        _ => &[],
    }
}

/// Every registered description, across all categories
pub fn all_descriptions() -> impl Iterator<Item = &'static ThinqSelectDescription> {
    WASH_DEV_SELECT
        .iter()
        .chain(MICROWAVE_SELECT.iter())
        .chain(AC_SELECT.iter())
}

/// Validate the whole registry; run once at setup before any discovery
pub fn validate_registry() -> Result<(), InvalidDescription> {
    for description in all_descriptions() {
        description.validate()?;
    }
    Ok(())
}
