//! Display discovery and the presentation session.

use crate::error::SampleError;
use vr_display::{
    VrDisplayData, VrDisplayEvent, VrDisplayPtr, VrLayer, VrServiceManager, VrStageParameters,
};

/// Depth plane distances configured on discovery, in meters.
pub const DEPTH_NEAR: f64 = 0.1;
pub const DEPTH_FAR: f64 = 1024.0;

/// The connection to a stereo display. Outlives graphics context loss;
/// it is dropped only on teardown.
///
/// The presenting flag follows `PresentChange` events exclusively. A
/// successful present request does not flip it by itself; the device
/// announces the transition.
pub struct DisplaySession {
    manager: VrServiceManager,
    display: Option<VrDisplayPtr>,
    presenting: bool,
    depth_near: f64,
    depth_far: f64,
}

impl DisplaySession {
    pub fn new(manager: VrServiceManager) -> DisplaySession {
        DisplaySession {
            manager,
            display: None,
            presenting: false,
            depth_near: DEPTH_NEAR,
            depth_far: DEPTH_FAR,
        }
    }

    /// Queries the platform for displays and connects to one.
    ///
    /// When several displays are enumerated the last one is selected: on
    /// every platform seen so far it is the most recently attached device.
    pub fn discover(&mut self) -> Result<VrDisplayData, SampleError> {
        if !self.manager.is_available() {
            return Err(SampleError::ApiUnsupported);
        }
        let displays = self.manager.get_displays();
        let display = match displays.last() {
            Some(display) => display.clone(),
            None => return Err(SampleError::NoDeviceFound),
        };
        let data = display.borrow().data();
        info!("Found display: {}", data.display_name);
        self.display = Some(display);
        Ok(data)
    }

    pub fn display(&self) -> Option<VrDisplayPtr> {
        self.display.clone()
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    /// Fresh display data, None before discovery succeeds.
    pub fn data(&self) -> Option<VrDisplayData> {
        self.display.as_ref().map(|display| display.borrow().data())
    }

    pub fn stage_parameters(&self) -> Option<VrStageParameters> {
        self.data().and_then(|data| data.stage_parameters)
    }

    pub fn presenting(&self) -> bool {
        self.presenting
    }

    /// Records a presenting transition announced by the device.
    pub fn set_presenting(&mut self, presenting: bool) {
        self.presenting = presenting;
    }

    pub fn depth_near(&self) -> f64 {
        self.depth_near
    }

    pub fn depth_far(&self) -> f64 {
        self.depth_far
    }

    /// Asks the display to present from the layer's source surface.
    /// Must only be called as a direct result of a user initiated action.
    ///
    /// Blocks until the device settles the request. On rejection the
    /// session state is unchanged and the request is not retried.
    pub fn request_present(&mut self, layer: &VrLayer) -> Result<(), SampleError> {
        let display = match &self.display {
            Some(display) => display.clone(),
            None => return Ok(()),
        };
        let future = display.borrow_mut().request_present(layer);
        future.block().map_err(SampleError::PresentRequestFailed)
    }

    /// Ends presentation. A no-op when not presenting, since deactivation
    /// notifications arrive whether or not this application presents.
    pub fn exit_present(&mut self) -> Result<(), SampleError> {
        if !self.presenting {
            return Ok(());
        }
        let display = match &self.display {
            Some(display) => display.clone(),
            None => return Ok(()),
        };
        let future = display.borrow_mut().exit_present();
        future.block().map_err(SampleError::ExitPresentFailed)
    }

    /// Drains pending device notifications.
    pub fn poll_events(&mut self) -> Vec<VrDisplayEvent> {
        self.manager.poll_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vr_display::{MockVrControlMsg, MockVrDisplayPtr, MockVrService};

    fn session_with_mock() -> (DisplaySession, MockVrDisplayPtr) {
        let service = MockVrService::new();
        let display = service.display_handle();
        let mut manager = VrServiceManager::new();
        manager.register(Box::new(service));
        (DisplaySession::new(manager), display)
    }

    #[test]
    fn discovery_without_services_is_unsupported() {
        let mut session = DisplaySession::new(VrServiceManager::new());
        assert_eq!(session.discover().unwrap_err(), SampleError::ApiUnsupported);
        assert!(!session.has_display());
    }

    #[test]
    fn discovery_without_devices_reports_none_found() {
        struct EmptyService;
        impl vr_display::VrService for EmptyService {
            fn initialize(&mut self) -> Result<(), String> {
                Ok(())
            }
            fn fetch_displays(&mut self) -> Result<Vec<VrDisplayPtr>, String> {
                Ok(Vec::new())
            }
            fn is_available(&self) -> bool {
                true
            }
            fn poll_events(&mut self) -> Vec<VrDisplayEvent> {
                Vec::new()
            }
        }

        let mut manager = VrServiceManager::new();
        manager.register(Box::new(EmptyService));
        let mut session = DisplaySession::new(manager);
        assert_eq!(session.discover().unwrap_err(), SampleError::NoDeviceFound);
        assert!(!session.has_display());
    }

    #[test]
    fn discovery_connects_to_the_mock_display() {
        let (mut session, _display) = session_with_mock();
        let data = session.discover().unwrap();
        assert!(data.capabilities.can_present);
        assert!(session.has_display());
        assert!(!session.presenting());
    }

    #[test]
    fn exit_without_presenting_performs_no_device_call() {
        let (mut session, display) = session_with_mock();
        session.discover().unwrap();
        assert_eq!(session.exit_present(), Ok(()));
        assert_eq!(display.borrow().exit_request_count(), 0);
    }

    #[test]
    fn rejected_present_leaves_session_unchanged() {
        let (mut session, display) = session_with_mock();
        session.discover().unwrap();
        display
            .borrow_mut()
            .handle_msg(MockVrControlMsg::RejectNextPresent("device busy".into()));

        let result = session.request_present(&VrLayer::default());
        assert_eq!(
            result,
            Err(SampleError::PresentRequestFailed("device busy".into()))
        );
        assert!(!session.presenting());
        assert_eq!(display.borrow().present_request_count(), 1);
    }

    #[test]
    fn presenting_follows_device_events_not_the_request() {
        let (mut session, display) = session_with_mock();
        session.discover().unwrap();

        assert_eq!(session.request_present(&VrLayer::default()), Ok(()));
        // The request succeeded but the flag waits for the event.
        assert!(!session.presenting());
        assert!(display.borrow().is_presenting());

        let events = session.poll_events();
        assert_eq!(events.len(), 1);
        if let VrDisplayEvent::PresentChange(_, presenting) = &events[0] {
            session.set_presenting(*presenting);
        }
        assert!(session.presenting());
    }
}
