//! Sitting space to standing space conversion for room scale scenes.

use vr_display::utils;
use vr_display::VrStageParameters;

/// Assumed height of the viewer when the device reports no stage
/// calibration, in meters.
pub const PLAYER_HEIGHT: f32 = 1.65;

/// Converts a sitting space view matrix to standing space.
///
/// With stage calibration the standing origin is the center of the play
/// area floor. Without it, or when the calibration transform cannot be
/// inverted, the viewer is assumed to stand `PLAYER_HEIGHT` above the
/// sitting origin. Identical inputs always produce identical output.
pub fn standing_view(stage: Option<&VrStageParameters>, view: &[f32; 16]) -> [f32; 16] {
    let mut inverse = [0.0; 16];
    if let Some(stage) = stage {
        if utils::inverse_matrix(&stage.sitting_to_standing_transform, &mut inverse) {
            let mut out = [0.0; 16];
            utils::multiply_matrix(view, &inverse, &mut out);
            return out;
        }
        warn!("stage calibration transform is singular, assuming player height");
    }
    let standing = utils::translation_matrix(0.0, PLAYER_HEIGHT, 0.0);
    utils::inverse_matrix(&standing, &mut inverse);
    let mut out = [0.0; 16];
    utils::multiply_matrix(view, &inverse, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_eq(a: &[f32; 16], b: &[f32; 16]) {
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < 1e-5, "index {}: {} != {}", i, a[i], b[i]);
        }
    }

    fn stage(transform: [f32; 16]) -> VrStageParameters {
        VrStageParameters {
            sitting_to_standing_transform: transform,
            size_x: 2.0,
            size_z: 2.0,
        }
    }

    #[test]
    fn no_stage_offsets_by_player_height() {
        let view = utils::identity();
        let standing = standing_view(None, &view);
        assert_matrix_eq(
            &standing,
            &utils::translation_matrix(0.0, -PLAYER_HEIGHT, 0.0),
        );
    }

    #[test]
    fn stage_transform_is_inverted_and_applied() {
        let stage = stage(utils::translation_matrix(0.5, 1.6, -0.25));
        let view = utils::identity();
        let standing = standing_view(Some(&stage), &view);
        assert_matrix_eq(
            &standing,
            &utils::translation_matrix(-0.5, -1.6, 0.25),
        );
    }

    #[test]
    fn view_is_composed_with_the_inverted_transform() {
        let stage = stage(utils::translation_matrix(0.0, 1.6, 0.0));
        let view = utils::translation_matrix(1.0, 0.0, 0.0);
        let standing = standing_view(Some(&stage), &view);
        // view * inverse(transform): both translations compose.
        assert_matrix_eq(
            &standing,
            &utils::translation_matrix(1.0, -1.6, 0.0),
        );
    }

    #[test]
    fn singular_stage_transform_falls_back_to_player_height() {
        let stage = stage([0.0; 16]);
        let view = utils::identity();
        let standing = standing_view(Some(&stage), &view);
        assert_matrix_eq(
            &standing,
            &standing_view(None, &view),
        );
    }

    #[test]
    fn conversion_is_deterministic() {
        let stage = stage([
            -0.9317312,
            0.0,
            0.36314875,
            0.0,
            0.0,
            0.99999994,
            0.0,
            0.0,
            -0.36314875,
            0.0,
            -0.9317312,
            0.0,
            0.23767996,
            1.6813644,
            0.45370483,
            1.0,
        ]);
        let view = utils::translation_matrix(0.1, -0.2, 0.3);
        let first = standing_view(Some(&stage), &view);
        let second = standing_view(Some(&stage), &view);
        assert_eq!(first, second);
    }
}
