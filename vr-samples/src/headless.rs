//! Headless drawing context that records calls instead of touching a GPU.
//! Keeps the samples runnable on any machine and lets the tests assert on
//! the exact call stream.

use crate::graphics::{ContextAttributes, GlContext, GlContextFactory, GlVersion};
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    ClearColor(f32, f32, f32, f32),
    Clear(u32),
    Viewport(i32, i32, i32, i32),
    EnableDepthTest,
    EnableCullFace,
    LoadTexture(String),
    BindTexture(u32),
    DrawIndexed(u32),
}

/// Shared view of everything recorded through a factory's contexts.
/// Clones observe the same recording, so a test can keep one after
/// handing the factory to the app.
#[derive(Clone, Default)]
pub struct GlRecorder {
    calls: Rc<RefCell<Vec<GlCall>>>,
    contexts: Rc<RefCell<Vec<(GlVersion, ContextAttributes)>>>,
}

impl GlRecorder {
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Drains the recording, for per-phase assertions.
    pub fn take_calls(&self) -> Vec<GlCall> {
        self.calls.borrow_mut().drain(..).collect()
    }

    pub fn draw_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, GlCall::DrawIndexed(_)))
            .count()
    }

    pub fn viewports(&self) -> Vec<(i32, i32, i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::Viewport(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_colors(&self) -> Vec<[f32; 4]> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::ClearColor(r, g, b, a) => Some([*r, *g, *b, *a]),
                _ => None,
            })
            .collect()
    }

    /// Version and attributes of every context created so far.
    pub fn created_contexts(&self) -> Vec<(GlVersion, ContextAttributes)> {
        self.contexts.borrow().clone()
    }
}

/// Factory for headless contexts. `supported` models what the platform
/// offers; requesting anything else fails like a missing driver would.
pub struct HeadlessGlFactory {
    supported: Vec<GlVersion>,
    recorder: GlRecorder,
}

impl HeadlessGlFactory {
    pub fn new() -> HeadlessGlFactory {
        HeadlessGlFactory::with_supported(vec![GlVersion::Gles2, GlVersion::Gles3])
    }

    pub fn with_supported(supported: Vec<GlVersion>) -> HeadlessGlFactory {
        HeadlessGlFactory {
            supported,
            recorder: GlRecorder::default(),
        }
    }

    pub fn recorder(&self) -> GlRecorder {
        self.recorder.clone()
    }
}

impl GlContextFactory for HeadlessGlFactory {
    fn create_context(
        &self,
        version: GlVersion,
        attributes: &ContextAttributes,
    ) -> Option<Box<dyn GlContext>> {
        if !self.supported.contains(&version) {
            return None;
        }
        self.recorder.contexts.borrow_mut().push((version, *attributes));
        debug!("Created headless {} context: {:?}", version, attributes);
        Some(Box::new(HeadlessGlContext {
            version,
            attributes: *attributes,
            calls: Rc::clone(&self.recorder.calls),
            next_texture: 1,
        }))
    }
}

pub struct HeadlessGlContext {
    version: GlVersion,
    attributes: ContextAttributes,
    calls: Rc<RefCell<Vec<GlCall>>>,
    next_texture: u32,
}

impl HeadlessGlContext {
    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlContext for HeadlessGlContext {
    fn version(&self) -> GlVersion {
        self.version
    }

    fn attributes(&self) -> ContextAttributes {
        self.attributes
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor(r, g, b, a));
    }

    fn clear(&mut self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn enable_depth_test(&mut self) {
        self.record(GlCall::EnableDepthTest);
    }

    fn enable_cull_face(&mut self) {
        self.record(GlCall::EnableCullFace);
    }

    fn load_texture(&mut self, path: &str) -> u32 {
        let id = self.next_texture;
        self.next_texture += 1;
        self.record(GlCall::LoadTexture(path.into()));
        id
    }

    fn bind_texture(&mut self, texture: u32) {
        self.record(GlCall::BindTexture(texture));
    }

    fn draw_indexed(&mut self, index_count: u32) {
        self.record(GlCall::DrawIndexed(index_count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_rejects_unsupported_versions() {
        let factory = HeadlessGlFactory::with_supported(vec![GlVersion::Gles2]);
        let attributes = ContextAttributes::default();
        assert!(factory.create_context(GlVersion::Gles3, &attributes).is_none());
        assert!(factory.create_context(GlVersion::Gles2, &attributes).is_some());
        assert_eq!(factory.recorder().created_contexts().len(), 1);
    }

    #[test]
    fn recorder_observes_calls_after_factory_moves() {
        let factory = HeadlessGlFactory::new();
        let recorder = factory.recorder();
        let mut gl = factory
            .create_context(GlVersion::Gles2, &ContextAttributes::default())
            .unwrap();
        drop(factory);

        gl.clear_color(0.1, 0.2, 0.3, 1.0);
        gl.viewport(0, 0, 640, 480);
        gl.draw_indexed(36);

        assert_eq!(recorder.draw_calls(), 1);
        assert_eq!(recorder.viewports(), vec![(0, 0, 640, 480)]);
        assert_eq!(recorder.clear_colors(), vec![[0.1, 0.2, 0.3, 1.0]]);
    }

    #[test]
    fn texture_handles_are_distinct() {
        let factory = HeadlessGlFactory::new();
        let mut gl = factory
            .create_context(GlVersion::Gles2, &ContextAttributes::default())
            .unwrap();
        let first = gl.load_texture("media/textures/cube-sea.png");
        let second = gl.load_texture("media/textures/cube-island.png");
        assert_ne!(first, second);
    }
}
