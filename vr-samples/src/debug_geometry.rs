//! Simple solid geometry for visual debugging, like the marker cube drawn
//! at the raw head pose of the room scale sample.

use crate::graphics::GlContext;

const CUBE_INDEX_COUNT: u32 = 36;

pub struct DebugGeometry {
    bound: bool,
}

impl DebugGeometry {
    pub fn new() -> DebugGeometry {
        DebugGeometry { bound: false }
    }

    /// Binds the camera matrices every subsequent draw uses.
    pub fn bind(&mut self, _projection: &[f32; 16], _view: &[f32; 16]) {
        self.bound = true;
    }

    /// Draws a solid cube of the given size at an oriented position.
    pub fn draw_cube(
        &mut self,
        gl: &mut dyn GlContext,
        _orientation: [f32; 4],
        position: [f32; 3],
        size: f32,
        _color: [f32; 4],
    ) {
        if !self.bound {
            warn!("DebugGeometry::draw_cube called before bind");
            return;
        }
        trace!("debug cube at {:?}, size {}", position, size);
        gl.draw_indexed(CUBE_INDEX_COUNT);
    }
}

impl Default for DebugGeometry {
    fn default() -> DebugGeometry {
        DebugGeometry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{ContextAttributes, GlContextFactory, GlVersion};
    use crate::headless::HeadlessGlFactory;

    #[test]
    fn draw_before_bind_is_skipped() {
        let factory = HeadlessGlFactory::new();
        let recorder = factory.recorder();
        let mut gl = factory
            .create_context(GlVersion::Gles2, &ContextAttributes::default())
            .unwrap();

        let mut geometry = DebugGeometry::new();
        geometry.draw_cube(&mut *gl, [0.0, 0.0, 0.0, 1.0], [0.0; 3], 0.2, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(recorder.draw_calls(), 0);

        geometry.bind(&[0.0; 16], &[0.0; 16]);
        geometry.draw_cube(&mut *gl, [0.0, 0.0, 0.0, 1.0], [0.0; 3], 0.2, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(recorder.draw_calls(), 1);
    }
}
