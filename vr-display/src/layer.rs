/// Describes the drawing surface a display presents from.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrLayer {
    /// Handle of the surface whose contents are presented.
    pub source_id: u32,

    /// UVs of the surface region presented to the left eye: [x, y, w, h].
    pub left_bounds: [f32; 4],

    /// UVs of the surface region presented to the right eye: [x, y, w, h].
    pub right_bounds: [f32; 4],
}

impl Default for VrLayer {
    fn default() -> VrLayer {
        VrLayer {
            source_id: 0,
            left_bounds: [0.0, 0.0, 0.5, 1.0],
            right_bounds: [0.5, 0.0, 0.5, 1.0],
        }
    }
}
