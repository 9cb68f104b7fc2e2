mod display;
mod service;

pub use self::display::{MockVrDisplay, MockVrDisplayPtr};
pub use self::service::MockVrService;

use crate::{VrDisplayEventReason, VrService, VrServiceCreator, VrStageParameters};
use std::sync::mpsc::{channel, Sender};

/// Scripts the state of the mock display from tests and demos.
/// Messages are applied on the next `poll_events` call.
#[derive(Debug, Clone)]
pub enum MockVrControlMsg {
    /// Overrides the tracked viewer pose: position, orientation quaternion.
    SetViewerPose([f32; 3], [f32; 4]),

    /// Replaces the reported stage calibration.
    SetStageParameters(Option<VrStageParameters>),

    /// Queues an Activate event with the given reason.
    TriggerActivate(VrDisplayEventReason),

    /// Queues a Deactivate event with the given reason.
    TriggerDeactivate(VrDisplayEventReason),

    /// Makes the next present request fail with the given message.
    RejectNextPresent(String),

    /// Makes the next exit request fail with the given message.
    RejectNextExit(String),
}

pub struct MockServiceCreator;

impl MockServiceCreator {
    pub fn new() -> Box<dyn VrServiceCreator> {
        Box::new(MockServiceCreator)
    }

    /// Creates a mock service together with the sender used to script it.
    pub fn new_service_with_remote() -> (Box<dyn VrService>, Sender<MockVrControlMsg>) {
        let (sender, receiver) = channel();
        let service = MockVrService::with_receiver(receiver);
        (Box::new(service), sender)
    }
}

impl VrServiceCreator for MockServiceCreator {
    fn new_service(&self) -> Box<dyn VrService> {
        Box::new(MockVrService::new())
    }
}
