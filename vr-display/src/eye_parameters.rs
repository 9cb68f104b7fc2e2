use crate::VrFieldOfView;

// Per-eye rendering information of a stereo display.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrEyeParameters {
    // Offset from the center point between the eyes, in meters.
    pub offset: [f32; 3],

    // Recommended render target size for this eye, in pixels.
    pub render_width: u32,
    pub render_height: u32,

    pub field_of_view: VrFieldOfView,
}
