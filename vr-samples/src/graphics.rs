use std::fmt;

// GL buffer bits accepted by `GlContext::clear`.
pub const COLOR_BUFFER_BIT: u32 = 0x0000_4000;
pub const DEPTH_BUFFER_BIT: u32 = 0x0000_0100;

/// Flavor of drawing context to create. GLES 3 is opt-in via launch
/// parameter; everything the samples draw works on GLES 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlVersion {
    Gles2,
    Gles3,
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GlVersion::Gles2 => write!(f, "GLES 2"),
            GlVersion::Gles3 => write!(f, "GLES 3"),
        }
    }
}

/// Context creation attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextAttributes {
    pub alpha: bool,

    /// Keep the drawing buffer contents after presentation reads them.
    /// Needed to mirror to a window while presenting to an external
    /// display, at a performance cost.
    pub preserve_drawing_buffer: bool,
}

impl Default for ContextAttributes {
    fn default() -> ContextAttributes {
        ContextAttributes {
            alpha: false,
            preserve_drawing_buffer: false,
        }
    }
}

/// The drawing interface the samples render through. An implementation
/// owns every GPU resource it hands out; dropping it releases them all.
pub trait GlContext {
    fn version(&self) -> GlVersion;

    fn attributes(&self) -> ContextAttributes;

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);

    fn clear(&mut self, mask: u32);

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn enable_depth_test(&mut self);

    fn enable_cull_face(&mut self);

    /// Loads a texture asset and returns its handle.
    fn load_texture(&mut self, path: &str) -> u32;

    /// Binds a texture for the following draws.
    fn bind_texture(&mut self, texture: u32);

    /// Issues one indexed triangle list draw call.
    fn draw_indexed(&mut self, index_count: u32);
}

/// Creates drawing contexts. Returning None means the requested version
/// is not supported; callers walk their fallback list in order.
pub trait GlContextFactory {
    fn create_context(
        &self,
        version: GlVersion,
        attributes: &ContextAttributes,
    ) -> Option<Box<dyn GlContext>>;
}
