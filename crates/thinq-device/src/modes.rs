//! Capability enums for air-conditioner selects

use serde::{Deserialize, Serialize};

/// Lowest valid vertical wind step
pub const VERTICAL_STEP_MIN: i32 = 1;
/// Highest valid vertical wind step
pub const VERTICAL_STEP_MAX: i32 = 6;

/// Whether a reported vertical wind step is inside the controllable range
pub fn is_valid_vertical_step(step: i32) -> bool {
    (VERTICAL_STEP_MIN..=VERTICAL_STEP_MAX).contains(&step)
}

/// Air-conditioner auto-dry mode
///
/// The device reports one of these after the telemetry layer has decoded the
/// raw API tag; the select platform only deals in the decoded values and
/// their display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcAutoDryMode {
    Off,
    Min10,
    Min30,
    Min60,
    Ai,
}

impl AcAutoDryMode {
    /// Display label shown as the select option
    pub fn label(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Min10 => "10 min",
            Self::Min30 => "30 min",
            Self::Min60 => "60 min",
            Self::Ai => "AI dry",
        }
    }

    /// Reverse lookup from a display label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Off" => Some(Self::Off),
            "10 min" => Some(Self::Min10),
            "30 min" => Some(Self::Min30),
            "60 min" => Some(Self::Min60),
            "AI dry" => Some(Self::Ai),
            _ => None,
        }
    }
}
