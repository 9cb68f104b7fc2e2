/// Describes what a stereo display device is and is not able to do.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrDisplayCapabilities {
    /// true if the display is capable of tracking its position.
    pub has_position: bool,

    /// true if the display is capable of tracking its orientation.
    pub has_orientation: bool,

    /// true if the display is separate from the device's primary display.
    /// When presenting to a display with an integrated surface, mirroring
    /// to a window is not possible.
    pub has_external_display: bool,

    /// true if the display is capable of presenting content to a headset.
    pub can_present: bool,
}

impl Default for VrDisplayCapabilities {
    fn default() -> VrDisplayCapabilities {
        VrDisplayCapabilities {
            has_position: false,
            has_orientation: false,
            has_external_display: false,
            can_present: false,
        }
    }
}
