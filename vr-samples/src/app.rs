//! The root controller of a sample: owns the session, the surface, the
//! scheduler and all graphics collaborators, and runs the frame loop.

use crate::config::SampleConfig;
use crate::debug_geometry::DebugGeometry;
use crate::error::SampleError;
use crate::graphics::{
    ContextAttributes, GlContext, GlContextFactory, GlVersion, COLOR_BUFFER_BIT, DEPTH_BUFFER_BIT,
};
use crate::scene::{CubeIsland, CubeSea, Scene};
use crate::scheduler::{FrameScheduler, LoopMode, WindowRefreshSource};
use crate::session::DisplaySession;
use crate::standing::{standing_view, PLAYER_HEIGHT};
use crate::stats::FrameStats;
use crate::surface::RenderSurface;
use crate::ui::SampleUi;
use rand::Rng;
use std::time::Duration;
use vr_display::utils;
use vr_display::{
    VrDisplayData, VrDisplayEvent, VrFrameData, VrLayer, VrPose, VrServiceManager,
    VrStageParameters,
};

/// Vertical field of view of the windowed fallback projection.
const WINDOWED_FOV: f32 = std::f32::consts::PI * 0.4;

/// Timeout of transient failure messages, in frame clock milliseconds.
const FAILURE_MESSAGE_TIMEOUT_MS: f64 = 2000.0;

/// Timeout of discovery info messages.
const DISCOVERY_MESSAGE_TIMEOUT_MS: f64 = 3000.0;

/// Which sample is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Stereo presentation demo: a cube sea with an enter/exit VR flow.
    CubeSea,

    /// Room scale demo: an island sized to the play area, rendered in
    /// standing space.
    RoomScale,
}

pub struct SampleApp {
    mode: SampleMode,
    config: SampleConfig,
    factory: Box<dyn GlContextFactory>,
    session: DisplaySession,
    surface: RenderSurface,
    scheduler: FrameScheduler,
    ui: SampleUi,
    gl: Option<Box<dyn GlContext>>,
    scene: Option<Box<dyn Scene>>,
    stats: Option<FrameStats>,
    debug_geometry: Option<DebugGeometry>,
}

impl SampleApp {
    pub fn new(
        mode: SampleMode,
        config: SampleConfig,
        factory: Box<dyn GlContextFactory>,
        manager: VrServiceManager,
    ) -> SampleApp {
        SampleApp {
            mode,
            config,
            factory,
            session: DisplaySession::new(manager),
            surface: RenderSurface::new(1280, 720, 1.0),
            scheduler: FrameScheduler::new(),
            ui: SampleUi::new(),
            gl: None,
            scene: None,
            stats: None,
            debug_geometry: None,
        }
    }

    /// Initializes graphics and discovers a display.
    ///
    /// The cube sea sample creates its context up front and discovers
    /// afterwards. The room scale sample discovers first: its context
    /// attributes depend on whether the device has an external display.
    pub fn init(&mut self) {
        match self.mode {
            SampleMode::CubeSea => {
                self.init_graphics();
                self.discover_display();
            }
            SampleMode::RoomScale => {
                self.discover_display();
                self.init_graphics();
                self.apply_stage_parameters();
            }
        }
    }

    fn discover_display(&mut self) {
        match self.session.discover() {
            Ok(data) => {
                if let Some(display) = self.session.display() {
                    self.scheduler.set_display(display);
                }
                if data.capabilities.can_present {
                    self.ui.add_button("Enter VR");
                }
            }
            Err(err @ SampleError::NoDeviceFound) => {
                self.ui
                    .add_info(&err.to_string(), Some(DISCOVERY_MESSAGE_TIMEOUT_MS));
            }
            Err(err) => {
                self.ui.add_error(&err.to_string(), None);
            }
        }
    }

    /// (Re)creates the drawing context and every graphics owned
    /// collaborator: scene, stats and debug geometry.
    fn init_graphics(&mut self) {
        let preserve_drawing_buffer = match self.mode {
            SampleMode::CubeSea => false,
            SampleMode::RoomScale => self
                .session
                .data()
                .map_or(false, |data| data.capabilities.has_external_display),
        };
        let attributes = ContextAttributes {
            alpha: false,
            preserve_drawing_buffer,
        };
        let requested = if self.config.use_gles3 {
            GlVersion::Gles3
        } else {
            GlVersion::Gles2
        };
        let mut gl = match self.factory.create_context(requested, &attributes) {
            Some(gl) => gl,
            None => {
                let err = SampleError::GraphicsApiUnavailable(requested.to_string());
                self.ui.add_error(&err.to_string(), None);
                return;
            }
        };

        gl.clear_color(0.1, 0.2, 0.3, 1.0);
        gl.enable_depth_test();
        gl.enable_cull_face();
        let texture = gl.load_texture("media/textures/cube-sea.png");

        self.scene = Some(match self.mode {
            SampleMode::CubeSea => Box::new(CubeSea::new(texture)) as Box<dyn Scene>,
            SampleMode::RoomScale => Box::new(CubeIsland::new(texture, 2.0, 2.0)),
        });
        self.stats = Some(FrameStats::new(self.config.enable_performance_monitoring));
        self.debug_geometry = match self.mode {
            SampleMode::RoomScale => Some(DebugGeometry::new()),
            SampleMode::CubeSea => None,
        };
        self.gl = Some(gl);

        // Start rendering at the right size without waiting for a resize
        // notification.
        self.resize();
    }

    /// Sizes the room scale scene to the reported play area.
    fn apply_stage_parameters(&mut self) {
        if !self.session.has_display() {
            return;
        }
        match self.session.stage_parameters() {
            Some(stage) if stage.size_x > 0.0 && stage.size_z > 0.0 => {
                if let Some(scene) = &mut self.scene {
                    scene.resize(stage.size_x, stage.size_z);
                }
            }
            Some(_) => {
                self.ui.add_info(
                    "Display reported stage parameters, but stage size was 0. Using default size.",
                    Some(DISCOVERY_MESSAGE_TIMEOUT_MS),
                );
            }
            None => {
                self.ui.add_info(
                    "Display did not report stage parameters",
                    Some(DISCOVERY_MESSAGE_TIMEOUT_MS),
                );
            }
        }
    }

    /// Drains device notifications and dispatches them.
    pub fn poll_display_events(&mut self) {
        for event in self.session.poll_events() {
            match event {
                VrDisplayEvent::PresentChange(data, presenting) => {
                    self.on_present_change(&data, presenting);
                }
                VrDisplayEvent::Activate(..) => self.on_request_present(),
                VrDisplayEvent::Deactivate(..) => self.on_exit_present(),
                VrDisplayEvent::Connect(_) | VrDisplayEvent::Disconnect(_) => {}
            }
        }
    }

    fn on_present_change(&mut self, data: &VrDisplayData, presenting: bool) {
        debug!("present change: presenting={}", presenting);
        self.session.set_presenting(presenting);
        self.resize();
        if data.capabilities.has_external_display {
            self.ui.set_presenting_message(presenting);
            self.ui.remove_button();
            if presenting {
                self.ui.add_button("Exit VR");
            } else {
                self.ui.add_button("Enter VR");
            }
        }
        // The newly active source must be armed; the display source
        // delivers nothing until it is.
        self.scheduler.request_frame(self.loop_mode());
    }

    /// Requests presentation from the current surface. Must be driven by
    /// a user initiated action or an Activate notification.
    pub fn on_request_present(&mut self) {
        let layer = VrLayer {
            source_id: self.surface.source_id(),
            ..Default::default()
        };
        if let Err(err) = self.session.request_present(&layer) {
            self.ui
                .add_error(&err.to_string(), Some(FAILURE_MESSAGE_TIMEOUT_MS));
        }
        // On success the device announces the transition and
        // `on_present_change` finishes the switch.
    }

    pub fn on_exit_present(&mut self) {
        if let Err(err) = self.session.exit_present() {
            self.ui
                .add_error(&err.to_string(), Some(FAILURE_MESSAGE_TIMEOUT_MS));
        }
    }

    /// The presentation toggle button.
    pub fn on_button_pressed(&mut self) {
        if self.session.presenting() {
            self.on_exit_present();
        } else {
            self.on_request_present();
        }
    }

    /// Plain click on the drawing surface: shifts the clear color so
    /// interaction is visible without a headset, and doubles as a
    /// presentation trigger when `click_presents` is set and the display
    /// is able to present.
    pub fn on_surface_click(&mut self) {
        let mut rng = rand::rng();
        let r = rng.random::<f32>() * 0.5;
        let g = rng.random::<f32>() * 0.5;
        let b = rng.random::<f32>() * 0.5;
        if let Some(gl) = &mut self.gl {
            gl.clear_color(r, g, b, 1.0);
        }
        let can_present = self
            .session
            .data()
            .map_or(false, |data| data.capabilities.can_present);
        if self.config.click_presents && can_present && !self.session.presenting() {
            self.on_request_present();
        }
    }

    /// Window resize notification. Only matters while windowed; the
    /// presenting surface size tracks the device instead.
    pub fn window_resized(&mut self, layout_width: u32, layout_height: u32) {
        self.surface.set_layout_size(layout_width, layout_height);
        self.resize();
    }

    /// Applies the sizing rule for the current presentation state.
    pub fn resize(&mut self) {
        let data = if self.session.presenting() {
            self.session.data()
        } else {
            None
        };
        match data {
            Some(data) => self.surface.resize(Some((
                &data.left_eye_parameters,
                &data.right_eye_parameters,
            ))),
            None => self.surface.resize(None),
        }
        debug!(
            "surface sized to {}x{}",
            self.surface.width(),
            self.surface.height()
        );
    }

    /// Drops every graphics owned object. The loop idles (but keeps
    /// running) until the context is restored. The session survives.
    pub fn on_context_lost(&mut self) {
        warn!("drawing context lost");
        self.gl = None;
        self.scene = None;
        self.stats = None;
        self.debug_geometry = None;
    }

    /// Rebuilds the context and everything it owns from scratch.
    pub fn on_context_restored(&mut self) {
        info!("drawing context restored");
        self.init_graphics();
        if let SampleMode::RoomScale = self.mode {
            self.apply_stage_parameters();
        }
    }

    fn loop_mode(&self) -> LoopMode {
        if self.session.presenting() {
            LoopMode::Presenting
        } else {
            LoopMode::Windowed
        }
    }

    /// Runs one frame: drains notifications, waits on the active refresh
    /// source, updates timers and renders. Returns false when the active
    /// source is idle and no frame was produced.
    pub fn step(&mut self) -> bool {
        self.poll_display_events();
        let mode = self.loop_mode();
        let timestamp = match self.scheduler.next_frame(mode) {
            Some(timestamp) => timestamp,
            None => return false,
        };
        self.ui.update(timestamp);
        self.on_animation_frame(timestamp);
        true
    }

    /// Runs up to `count` frames, stopping early if the loop idles.
    pub fn run_frames(&mut self, count: u32) {
        for _ in 0..count {
            if !self.step() {
                break;
            }
        }
    }

    pub fn on_animation_frame(&mut self, timestamp: f64) {
        let needs_debug_geometry = self.mode == SampleMode::RoomScale;
        if self.gl.is_none()
            || self.stats.is_none()
            || self.scene.is_none()
            || (needs_debug_geometry && self.debug_geometry.is_none())
        {
            // Keep the device callback armed while presenting so stereo
            // timing survives the gap. The windowed source is ambient and
            // needs no re-arming.
            if self.session.presenting() {
                self.scheduler.request_frame(LoopMode::Presenting);
            }
            return;
        }

        let mode = self.mode;
        let presenting = self.session.presenting();
        let display = self.session.display();
        let stage = self.session.stage_parameters();
        let depth_near = self.session.depth_near();
        let depth_far = self.session.depth_far();
        let width = self.surface.width() as i32;
        let height = self.surface.height() as i32;
        let aspect = self.surface.aspect_ratio();

        if let (Some(gl), Some(scene), Some(stats)) =
            (self.gl.as_mut(), self.scene.as_mut(), self.stats.as_mut())
        {
            let gl = &mut **gl;
            let scene = &mut **scene;
            let mut debug_geometry = match mode {
                SampleMode::RoomScale => self.debug_geometry.as_mut(),
                SampleMode::CubeSea => None,
            };

            stats.begin();
            gl.clear(COLOR_BUFFER_BIT | DEPTH_BUFFER_BIT);
            self.scheduler
                .request_frame(if presenting { LoopMode::Presenting } else { LoopMode::Windowed });

            if let Some(display) = display {
                // Fetched after the callback request so the pose is as
                // fresh as possible.
                let frame_data = if presenting {
                    display.borrow().synced_frame_data(depth_near, depth_far)
                } else {
                    display.borrow().immediate_frame_data(depth_near, depth_far)
                };

                if presenting {
                    let (left_view, right_view) = match mode {
                        SampleMode::CubeSea => {
                            (frame_data.left_view_matrix, frame_data.right_view_matrix)
                        }
                        SampleMode::RoomScale => (
                            standing_view(stage.as_ref(), &frame_data.left_view_matrix),
                            standing_view(stage.as_ref(), &frame_data.right_view_matrix),
                        ),
                    };

                    gl.viewport(0, 0, width / 2, height);
                    Self::render_scene_view(
                        gl,
                        scene,
                        stats,
                        debug_geometry.as_deref_mut(),
                        &frame_data.left_projection_matrix,
                        &left_view,
                        &frame_data.pose,
                        timestamp,
                    );

                    gl.viewport(width / 2, 0, width / 2, height);
                    Self::render_scene_view(
                        gl,
                        scene,
                        stats,
                        debug_geometry.as_deref_mut(),
                        &frame_data.right_projection_matrix,
                        &right_view,
                        &frame_data.pose,
                        timestamp,
                    );

                    // Submitted as early as possible once both eyes are
                    // rendered.
                    display.borrow_mut().submit_frame();
                } else {
                    gl.viewport(0, 0, width, height);
                    let projection =
                        utils::perspective_matrix(WINDOWED_FOV, aspect, 0.1, 1024.0);
                    let view = windowed_view_matrix(mode, Some(&frame_data), stage.as_ref());
                    Self::render_scene_view(
                        gl,
                        scene,
                        stats,
                        debug_geometry.as_deref_mut(),
                        &projection,
                        &view,
                        &frame_data.pose,
                        timestamp,
                    );
                    stats.render_ortho(gl);
                }
            } else {
                gl.viewport(0, 0, width, height);
                let projection = utils::perspective_matrix(WINDOWED_FOV, aspect, 0.1, 1024.0);
                let view = windowed_view_matrix(mode, None, None);
                scene.render(gl, stats, &projection, &view, timestamp);
                stats.render_ortho(gl);
            }

            stats.end();
        }
    }

    fn render_scene_view(
        gl: &mut dyn GlContext,
        scene: &mut dyn Scene,
        stats: &mut FrameStats,
        debug_geometry: Option<&mut DebugGeometry>,
        projection: &[f32; 16],
        view: &[f32; 16],
        pose: &VrPose,
        timestamp: f64,
    ) {
        scene.render(gl, stats, projection, view, timestamp);
        if let Some(geometry) = debug_geometry {
            // Marker cube at the raw pose, before the standing conversion.
            let orientation = pose.orientation.unwrap_or([0.0, 0.0, 0.0, 1.0]);
            let position = pose.position.unwrap_or([0.0, 0.0, 0.0]);
            geometry.bind(projection, view);
            geometry.draw_cube(gl, orientation, position, 0.2, [0.0, 0.0, 1.0, 1.0]);
        }
    }

    /// Ends presentation if needed and drops every collaborator.
    pub fn teardown(&mut self) {
        if self.session.presenting() {
            if let Err(err) = self.session.exit_present() {
                warn!("{}", err);
            }
        }
        self.gl = None;
        self.scene = None;
        self.stats = None;
        self.debug_geometry = None;
    }

    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    pub fn ui(&self) -> &SampleUi {
        &self.ui
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn session(&self) -> &DisplaySession {
        &self.session
    }

    /// Play area footprint of the current scene, if it has one.
    pub fn scene_bounds(&self) -> Option<(f32, f32)> {
        self.scene.as_ref().and_then(|scene| scene.bounds())
    }

    /// Tests run the windowed loop with a zero interval.
    pub fn set_window_refresh_interval(&mut self, interval: Duration) {
        self.scheduler
            .set_window_source(WindowRefreshSource::with_interval(interval));
    }
}

/// View matrix of the single windowed eye.
///
/// With a device the windowed camera follows the tracked head: the cube
/// sea sample uses the raw left eye view, the room scale sample its
/// standing space conversion. Without a device the camera is fixed at
/// the origin, raised to standing height for the room scale scene.
pub fn windowed_view_matrix(
    mode: SampleMode,
    frame: Option<&VrFrameData>,
    stage: Option<&VrStageParameters>,
) -> [f32; 16] {
    match (mode, frame) {
        (SampleMode::CubeSea, Some(frame)) => frame.left_view_matrix,
        (SampleMode::RoomScale, Some(frame)) => standing_view(stage, &frame.left_view_matrix),
        (SampleMode::CubeSea, None) => utils::identity(),
        (SampleMode::RoomScale, None) => utils::translation_matrix(0.0, -PLAYER_HEIGHT, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_left_view(view: [f32; 16]) -> VrFrameData {
        VrFrameData {
            left_view_matrix: view,
            ..Default::default()
        }
    }

    #[test]
    fn windowed_view_without_device_is_identity_for_cube_sea() {
        let view = windowed_view_matrix(SampleMode::CubeSea, None, None);
        assert_eq!(view, utils::identity());
    }

    #[test]
    fn windowed_view_without_device_stands_at_player_height() {
        let view = windowed_view_matrix(SampleMode::RoomScale, None, None);
        assert_eq!(view, utils::translation_matrix(0.0, -PLAYER_HEIGHT, 0.0));
    }

    #[test]
    fn windowed_view_with_device_uses_left_eye_view() {
        let left = utils::translation_matrix(0.25, 0.0, -1.0);
        let frame = frame_with_left_view(left);
        let view = windowed_view_matrix(SampleMode::CubeSea, Some(&frame), None);
        assert_eq!(view, left);
    }

    #[test]
    fn windowed_view_with_device_converts_to_standing_space() {
        let left = utils::translation_matrix(0.25, 0.0, -1.0);
        let frame = frame_with_left_view(left);
        let view = windowed_view_matrix(SampleMode::RoomScale, Some(&frame), None);
        assert_eq!(view, standing_view(None, &left));
    }
}
