//! The procedural scenes the samples draw.

use crate::graphics::GlContext;
use crate::stats::FrameStats;

const CUBE_INDEX_COUNT: u32 = 36;

/// A scene rendered once per eye per frame. The stats panel is drawn as
/// part of the scene so it shows up inside the headset too.
pub trait Scene {
    fn render(
        &mut self,
        gl: &mut dyn GlContext,
        stats: &mut FrameStats,
        projection: &[f32; 16],
        view: &[f32; 16],
        timestamp: f64,
    );

    /// Resizes the scene to the play area bounds, in meters. Scenes that
    /// are not room scale ignore this.
    fn resize(&mut self, _width: f32, _depth: f32) {}

    /// Play area footprint of the scene, if it has one.
    fn bounds(&self) -> Option<(f32, f32)> {
        None
    }
}

/// An endless grid of small textured cubes surrounding the viewer.
/// All cubes share one buffer, so the whole sea is a single draw call.
pub struct CubeSea {
    texture: u32,
    grid_size: u32,
}

impl CubeSea {
    pub fn new(texture: u32) -> CubeSea {
        CubeSea::with_grid_size(texture, 10)
    }

    pub fn with_grid_size(texture: u32, grid_size: u32) -> CubeSea {
        debug!("cube sea of {} cubes", grid_size * grid_size * grid_size);
        CubeSea { texture, grid_size }
    }
}

impl Scene for CubeSea {
    fn render(
        &mut self,
        gl: &mut dyn GlContext,
        stats: &mut FrameStats,
        projection: &[f32; 16],
        view: &[f32; 16],
        _timestamp: f64,
    ) {
        gl.bind_texture(self.texture);
        let cube_count = self.grid_size * self.grid_size * self.grid_size;
        gl.draw_indexed(cube_count * CUBE_INDEX_COUNT);
        stats.render(gl, projection, view);
    }
}

/// A flat textured island sized to the play area, its edges marking where
/// the room ends.
pub struct CubeIsland {
    texture: u32,
    width: f32,
    depth: f32,
}

impl CubeIsland {
    pub fn new(texture: u32, width: f32, depth: f32) -> CubeIsland {
        CubeIsland {
            texture,
            width,
            depth,
        }
    }
}

impl Scene for CubeIsland {
    fn render(
        &mut self,
        gl: &mut dyn GlContext,
        stats: &mut FrameStats,
        projection: &[f32; 16],
        view: &[f32; 16],
        _timestamp: f64,
    ) {
        gl.bind_texture(self.texture);
        gl.draw_indexed(CUBE_INDEX_COUNT);
        stats.render(gl, projection, view);
    }

    fn resize(&mut self, width: f32, depth: f32) {
        self.width = width;
        self.depth = depth;
        debug!("cube island resized to {}x{} meters", width, depth);
    }

    fn bounds(&self) -> Option<(f32, f32)> {
        Some((self.width, self.depth))
    }
}
