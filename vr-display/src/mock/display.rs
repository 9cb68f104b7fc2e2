use super::MockVrControlMsg;
use crate::utils;
use crate::{
    VrDisplay, VrDisplayData, VrDisplayEvent, VrFrameData, VrFuture, VrLayer, VrPose,
    VrStageParameters,
};
use std::cell::RefCell;
use std::mem;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub type MockVrDisplayPtr = Arc<RefCell<MockVrDisplay>>;

/// Simulates a virtual HTC Vive.
///
/// Presentation requests succeed immediately unless a rejection has been
/// scripted. State transitions are announced with `PresentChange` events,
/// exactly like a real backend.
pub struct MockVrDisplay {
    display_id: u32,
    presenting: bool,
    viewer_pose: VrPose,
    stage_parameters: Option<VrStageParameters>,
    reject_next_present: Option<String>,
    reject_next_exit: Option<String>,
    pending_events: Vec<VrDisplayEvent>,
    layer: Option<VrLayer>,
    present_requests: u32,
    exit_requests: u32,
    submitted_frames: u32,
}

impl MockVrDisplay {
    pub fn new() -> MockVrDisplayPtr {
        Arc::new(RefCell::new(MockVrDisplay {
            display_id: utils::new_id(),
            presenting: false,
            viewer_pose: VrPose {
                position: Some([0.5, -0.7, -0.3]),
                orientation: Some([0.9385081, -0.08066622, -0.3347714, 0.024972256]),
            },
            stage_parameters: Some(default_stage_parameters()),
            reject_next_present: None,
            reject_next_exit: None,
            pending_events: Vec::new(),
            layer: None,
            present_requests: 0,
            exit_requests: 0,
            submitted_frames: 0,
        }))
    }

    pub fn handle_msg(&mut self, msg: MockVrControlMsg) {
        match msg {
            MockVrControlMsg::SetViewerPose(position, orientation) => {
                self.viewer_pose.position = Some(position);
                self.viewer_pose.orientation = Some(orientation);
            }
            MockVrControlMsg::SetStageParameters(stage) => {
                self.stage_parameters = stage;
            }
            MockVrControlMsg::TriggerActivate(reason) => {
                let data = self.data();
                self.pending_events.push(VrDisplayEvent::Activate(data, reason));
            }
            MockVrControlMsg::TriggerDeactivate(reason) => {
                let data = self.data();
                self.pending_events.push(VrDisplayEvent::Deactivate(data, reason));
            }
            MockVrControlMsg::RejectNextPresent(msg) => {
                self.reject_next_present = Some(msg);
            }
            MockVrControlMsg::RejectNextExit(msg) => {
                self.reject_next_exit = Some(msg);
            }
        }
    }

    pub fn poll_events(&mut self) -> Vec<VrDisplayEvent> {
        mem::replace(&mut self.pending_events, Vec::new())
    }

    // State inspection, used by tests.

    pub fn is_presenting(&self) -> bool {
        self.presenting
    }

    pub fn present_request_count(&self) -> u32 {
        self.present_requests
    }

    pub fn exit_request_count(&self) -> u32 {
        self.exit_requests
    }

    pub fn submitted_frame_count(&self) -> u32 {
        self.submitted_frames
    }

    pub fn layer(&self) -> Option<VrLayer> {
        self.layer.clone()
    }
}

impl VrDisplay for MockVrDisplay {
    fn id(&self) -> u32 {
        self.display_id
    }

    fn data(&self) -> VrDisplayData {
        let mut data = VrDisplayData::default();

        // Mock display data
        // Simulates a virtual HTC Vive

        data.display_name = "Mock Stereo Display".into();
        data.display_id = self.display_id;
        data.connected = true;

        data.capabilities.can_present = true;
        data.capabilities.has_orientation = true;
        data.capabilities.has_external_display = true;
        data.capabilities.has_position = true;

        data.stage_parameters = self.stage_parameters.clone();

        data.left_eye_parameters.offset = [0.035949998, 0.0, 0.015];
        data.left_eye_parameters.render_width = 1512;
        data.left_eye_parameters.render_height = 1680;
        data.left_eye_parameters.field_of_view.up_degrees = 55.82093048095703;
        data.left_eye_parameters.field_of_view.right_degrees = 51.26948547363281;
        data.left_eye_parameters.field_of_view.down_degrees = 55.707801818847656;
        data.left_eye_parameters.field_of_view.left_degrees = 54.42263412475586;

        data.right_eye_parameters.offset = [-0.035949998, 0.0, 0.015];
        data.right_eye_parameters.render_width = 1512;
        data.right_eye_parameters.render_height = 1680;
        data.right_eye_parameters.field_of_view.up_degrees = 55.898048400878906;
        data.right_eye_parameters.field_of_view.right_degrees = 54.37410354614258;
        data.right_eye_parameters.field_of_view.down_degrees = 55.614715576171875;
        data.right_eye_parameters.field_of_view.left_degrees = 51.304901123046875;

        data
    }

    fn immediate_frame_data(&self, _near_z: f64, _far_z: f64) -> VrFrameData {
        let mut data = VrFrameData::default();
        data.pose = self.viewer_pose;

        // Simulates HTC Vive projections
        data.left_projection_matrix = [0.75620246, 0.0, 0.0, 0.0,
                                       0.0, 0.68050665, 0.0, 0.0,
                                      -0.05713458, -0.0021225351, -1.0000999, -1.0,
                                       0.0, 0.0, -0.10000999, 0.0];

        data.left_view_matrix = [1.0, 0.0, 0.0, 0.0,
                                 0.0, 1.0, 0.0, 0.0,
                                 0.0, 0.0, 1.0, 0.0,
                                -0.035949998, 0.0, 0.015, 1.0];

        data.right_projection_matrix = [0.75646526, 0.0, 0.0, 0.0,
                                        0.0, 0.68069947, 0.0, 0.0,
                                        0.055611316, -0.005315368, -1.0000999, -1.0,
                                        0.0, 0.0, -0.10000999, 0.0];

        data.right_view_matrix = [1.0, 0.0, 0.0, 0.0,
                                  0.0, 1.0, 0.0, 0.0,
                                  0.0, 0.0, 1.0, 0.0,
                                  0.035949998, 0.0, 0.015, 1.0];

        data.timestamp = utils::timestamp();

        data
    }

    fn synced_frame_data(&self, near_z: f64, far_z: f64) -> VrFrameData {
        self.immediate_frame_data(near_z, far_z)
    }

    fn sync_poses(&mut self) {
        // Simulate Vsync
        thread::sleep(Duration::from_millis(1));
    }

    fn request_present(&mut self, layer: &VrLayer) -> VrFuture<Result<(), String>> {
        self.present_requests += 1;
        if let Some(msg) = self.reject_next_present.take() {
            debug!("Mock display rejected present request: {}", msg);
            return VrFuture::resolved(Err(msg));
        }
        self.presenting = true;
        self.layer = Some(layer.clone());
        let data = self.data();
        self.pending_events.push(VrDisplayEvent::PresentChange(data, true));
        debug!("Mock display presenting from surface {}", layer.source_id);
        VrFuture::resolved(Ok(()))
    }

    fn exit_present(&mut self) -> VrFuture<Result<(), String>> {
        self.exit_requests += 1;
        if let Some(msg) = self.reject_next_exit.take() {
            debug!("Mock display rejected exit request: {}", msg);
            return VrFuture::resolved(Err(msg));
        }
        self.presenting = false;
        self.layer = None;
        let data = self.data();
        self.pending_events.push(VrDisplayEvent::PresentChange(data, false));
        debug!("Mock display stopped presenting");
        VrFuture::resolved(Ok(()))
    }

    fn submit_frame(&mut self) {
        self.submitted_frames += 1;
    }
}

fn default_stage_parameters() -> VrStageParameters {
    VrStageParameters {
        sitting_to_standing_transform: [-0.9317312, 0.0, 0.36314875, 0.0, 0.0, 0.99999994, 0.0, 0.0, -0.36314875,
                                        0.0, -0.9317312, 0.0, 0.23767996, 1.6813644, 0.45370483, 1.0],
        size_x: 2.0,
        size_z: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_request_succeeds_and_queues_event() {
        let display = MockVrDisplay::new();
        let layer = VrLayer {
            source_id: 7,
            ..Default::default()
        };
        let result = display.borrow_mut().request_present(&layer).block();
        assert!(result.is_ok());

        let mut display = display.borrow_mut();
        assert!(display.is_presenting());
        assert_eq!(display.layer().map(|l| l.source_id), Some(7));
        let events = display.poll_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            VrDisplayEvent::PresentChange(_, presenting) => assert!(*presenting),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn scripted_rejection_fails_once_and_leaves_state() {
        let display = MockVrDisplay::new();
        display
            .borrow_mut()
            .handle_msg(MockVrControlMsg::RejectNextPresent("device busy".into()));

        let result = display
            .borrow_mut()
            .request_present(&VrLayer::default())
            .block();
        assert_eq!(result, Err("device busy".into()));
        assert!(!display.borrow().is_presenting());
        assert!(display.borrow_mut().poll_events().is_empty());

        // The rejection is consumed; the next request succeeds.
        let result = display
            .borrow_mut()
            .request_present(&VrLayer::default())
            .block();
        assert!(result.is_ok());
        assert!(display.borrow().is_presenting());
    }

    #[test]
    fn scripted_pose_shows_up_in_frame_data() {
        let display = MockVrDisplay::new();
        display.borrow_mut().handle_msg(MockVrControlMsg::SetViewerPose(
            [1.0, 1.5, -2.0],
            [0.0, 0.0, 0.0, 1.0],
        ));
        let frame = display.borrow().immediate_frame_data(0.1, 1024.0);
        assert_eq!(frame.pose.position, Some([1.0, 1.5, -2.0]));
        assert_eq!(frame.pose.orientation, Some([0.0, 0.0, 0.0, 1.0]));
    }
}
