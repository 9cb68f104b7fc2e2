// The tracked pose of the viewer. Fields a device cannot track are None.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrPose {
    /// Position of the viewer in meters, sitting space.
    pub position: Option<[f32; 3]>,

    /// Orientation of the viewer as a quaternion.
    pub orientation: Option<[f32; 4]>,
}
