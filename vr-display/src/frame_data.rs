use crate::VrPose;

/// All the information needed to render a single frame of a stereo scene.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrFrameData {
    /// Monotonically increasing timestamp of the frame, in milliseconds.
    pub timestamp: f64,

    // Projection and view matrices for each eye, column-major.
    pub left_projection_matrix: [f32; 16],
    pub left_view_matrix: [f32; 16],
    pub right_projection_matrix: [f32; 16],
    pub right_view_matrix: [f32; 16],

    /// The tracked pose the matrices were derived from.
    pub pose: VrPose,
}

impl Default for VrFrameData {
    fn default() -> VrFrameData {
        VrFrameData {
            timestamp: 0.0,
            left_projection_matrix: identity_matrix!(),
            left_view_matrix: identity_matrix!(),
            right_projection_matrix: identity_matrix!(),
            right_view_matrix: identity_matrix!(),
            pose: VrPose::default(),
        }
    }
}
