// Room-scale calibration reported by a stereo display.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrStageParameters {
    /// Transform from sitting space to standing space, column-major.
    /// Translates to the center of the play area and rotates so that
    /// standing space axes align with the play area bounds.
    pub sitting_to_standing_transform: [f32; 16],

    /// Width of the play area, in meters.
    pub size_x: f32,

    /// Depth of the play area, in meters.
    pub size_z: f32,
}

impl Default for VrStageParameters {
    fn default() -> VrStageParameters {
        VrStageParameters {
            sitting_to_standing_transform: identity_matrix!(),
            size_x: 0.0,
            size_z: 0.0,
        }
    }
}
