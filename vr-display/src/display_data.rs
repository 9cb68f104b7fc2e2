use crate::VrDisplayCapabilities;
use crate::VrEyeParameters;
use crate::VrStageParameters;

/// Static and semi-static information about a stereo display device.
/// Capabilities never change for the lifetime of the device; stage
/// parameters may change when the user recalibrates the play area.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrDisplayData {
    /// Unique identifier of the display.
    pub display_id: u32,

    /// Human readable name of the display.
    pub display_name: String,

    pub connected: bool,

    pub capabilities: VrDisplayCapabilities,

    /// Room-scale calibration, if the device reports any.
    pub stage_parameters: Option<VrStageParameters>,

    pub left_eye_parameters: VrEyeParameters,
    pub right_eye_parameters: VrEyeParameters,
}
