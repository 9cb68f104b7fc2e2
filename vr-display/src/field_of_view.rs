// The field of view of an eye, in degrees, as four half-angles
// measured from the view axis.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct VrFieldOfView {
    pub up_degrees: f64,
    pub right_degrees: f64,
    pub down_degrees: f64,
    pub left_degrees: f64,
}
