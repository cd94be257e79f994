//! Test doubles for the select platform
//!
//! `MockAppliance` is a builder-style fake remote client: capability lists
//! are fixed up front, writes are recorded and immediately reflected in the
//! fake's own state so the next poll sees them.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thinq_device::{
    AcAutoDryMode, ApplianceApi, DeviceError, DeviceInfo, DeviceSnapshot, DeviceType, LgeDevice,
    FEAT_DISPLAY_SCROLL_SPEED, FEAT_WEIGHT_UNIT,
};

/// A remote write captured by the mock
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedWrite {
    Course(String),
    ScrollSpeed(String),
    WeightUnit(String),
    VerticalStep(i32),
    AutoDry(AcAutoDryMode),
}

pub struct MockAppliance {
    device_type: DeviceType,
    course_list: Vec<String>,
    selected_course: Mutex<Option<String>>,
    course_enabled: bool,
    scroll_speeds: Vec<String>,
    weight_units: Vec<String>,
    vertical_steps: Vec<i32>,
    vertical_step: Mutex<Option<i32>>,
    auto_dry_modes: Vec<AcAutoDryMode>,
    auto_dry: Mutex<Option<AcAutoDryMode>>,
    features: Mutex<HashMap<String, String>>,
    poll_fails: AtomicBool,
    write_fails: AtomicBool,
    writes: Mutex<Vec<RecordedWrite>>,
}

impl MockAppliance {
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            device_type,
            course_list: Vec::new(),
            selected_course: Mutex::new(None),
            course_enabled: false,
            scroll_speeds: Vec::new(),
            weight_units: Vec::new(),
            vertical_steps: Vec::new(),
            vertical_step: Mutex::new(None),
            auto_dry_modes: Vec::new(),
            auto_dry: Mutex::new(None),
            features: Mutex::new(HashMap::new()),
            poll_fails: AtomicBool::new(false),
            write_fails: AtomicBool::new(false),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_courses(mut self, courses: &[&str], enabled: bool) -> Self {
        self.course_list = courses.iter().map(|c| c.to_string()).collect();
        self.course_enabled = enabled;
        self
    }

    pub fn with_selected_course(self, course: &str) -> Self {
        *self.selected_course.lock().unwrap() = Some(course.to_string());
        self
    }

    pub fn with_scroll_speeds(mut self, speeds: &[&str]) -> Self {
        self.scroll_speeds = speeds.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_weight_units(mut self, units: &[&str]) -> Self {
        self.weight_units = units.iter().map(|u| u.to_string()).collect();
        self
    }

    pub fn with_vertical_steps(mut self, steps: &[i32], current: Option<i32>) -> Self {
        self.vertical_steps = steps.to_vec();
        *self.vertical_step.lock().unwrap() = current;
        self
    }

    pub fn with_auto_dry(mut self, modes: &[AcAutoDryMode], current: Option<AcAutoDryMode>) -> Self {
        self.auto_dry_modes = modes.to_vec();
        *self.auto_dry.lock().unwrap() = current;
        self
    }

    pub fn with_feature(self, key: &str, value: &str) -> Self {
        self.features
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_polls(&self, fail: bool) {
        self.poll_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.write_fails.store(fail, Ordering::SeqCst);
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, write: RecordedWrite) -> Result<(), DeviceError> {
        if self.write_fails.load(Ordering::SeqCst) {
            return Err(DeviceError::Remote("device rejected command".to_string()));
        }
        self.writes.lock().unwrap().push(write);
        Ok(())
    }
}

#[async_trait]
impl ApplianceApi for MockAppliance {
    fn device_type(&self) -> DeviceType {
        self.device_type
    }

    async fn poll(&self) -> Result<Option<DeviceSnapshot>, DeviceError> {
        if self.poll_fails.load(Ordering::SeqCst) {
            return Err(DeviceError::Remote("session expired".to_string()));
        }
        Ok(Some(DeviceSnapshot {
            device_features: self.features.lock().unwrap().clone(),
            is_on: true,
        }))
    }

    fn course_list(&self) -> Vec<String> {
        self.course_list.clone()
    }

    fn selected_course(&self) -> Option<String> {
        self.selected_course.lock().unwrap().clone()
    }

    fn select_course_enabled(&self) -> bool {
        self.course_enabled
    }

    async fn select_start_course(&self, course: &str) -> Result<(), DeviceError> {
        self.record(RecordedWrite::Course(course.to_string()))?;
        *self.selected_course.lock().unwrap() = Some(course.to_string());
        Ok(())
    }

    fn display_scroll_speeds(&self) -> Vec<String> {
        self.scroll_speeds.clone()
    }

    async fn set_display_scroll_speed(&self, speed: &str) -> Result<(), DeviceError> {
        self.record(RecordedWrite::ScrollSpeed(speed.to_string()))?;
        self.features
            .lock()
            .unwrap()
            .insert(FEAT_DISPLAY_SCROLL_SPEED.to_string(), speed.to_string());
        Ok(())
    }

    fn defrost_weight_units(&self) -> Vec<String> {
        self.weight_units.clone()
    }

    async fn set_defrost_weight_unit(&self, unit: &str) -> Result<(), DeviceError> {
        self.record(RecordedWrite::WeightUnit(unit.to_string()))?;
        self.features
            .lock()
            .unwrap()
            .insert(FEAT_WEIGHT_UNIT.to_string(), unit.to_string());
        Ok(())
    }

    fn vertical_step_modes(&self) -> Vec<i32> {
        self.vertical_steps.clone()
    }

    fn vertical_step_mode(&self) -> Option<i32> {
        *self.vertical_step.lock().unwrap()
    }

    async fn set_vertical_step_mode(&self, step: i32) -> Result<(), DeviceError> {
        self.record(RecordedWrite::VerticalStep(step))?;
        *self.vertical_step.lock().unwrap() = Some(step);
        Ok(())
    }

    fn auto_dry_modes(&self) -> Vec<AcAutoDryMode> {
        self.auto_dry_modes.clone()
    }

    fn auto_dry_mode(&self) -> Option<AcAutoDryMode> {
        *self.auto_dry.lock().unwrap()
    }

    async fn set_auto_dry_mode(&self, mode: AcAutoDryMode) -> Result<(), DeviceError> {
        self.record(RecordedWrite::AutoDry(mode))?;
        *self.auto_dry.lock().unwrap() = Some(mode);
        Ok(())
    }
}

/// Wrap a mock client in a device with registry metadata
pub fn lge_device(unique_id: &str, api: Arc<MockAppliance>) -> Arc<LgeDevice> {
    let device_info = DeviceInfo {
        identifiers: vec![("smartthinq_sensors".to_string(), unique_id.to_string())],
        name: format!("LG {}", api.device_type()),
        manufacturer: "LG".to_string(),
        model: None,
    };
    Arc::new(LgeDevice::new(api, unique_id, "LG appliance", device_info))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
