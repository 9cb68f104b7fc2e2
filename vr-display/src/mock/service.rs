use super::display::{MockVrDisplay, MockVrDisplayPtr};
use super::MockVrControlMsg;
use crate::{VrDisplayEvent, VrDisplayPtr, VrService};
use std::sync::mpsc::Receiver;

/// Backend that discovers a single scriptable mock display.
pub struct MockVrService {
    display: MockVrDisplayPtr,
    control: Option<Receiver<MockVrControlMsg>>,
}

impl MockVrService {
    pub fn new() -> MockVrService {
        MockVrService {
            display: MockVrDisplay::new(),
            control: None,
        }
    }

    pub fn with_receiver(control: Receiver<MockVrControlMsg>) -> MockVrService {
        MockVrService {
            display: MockVrDisplay::new(),
            control: Some(control),
        }
    }

    /// Concrete handle to the mock display, for state inspection in tests.
    pub fn display_handle(&self) -> MockVrDisplayPtr {
        self.display.clone()
    }
}

impl VrService for MockVrService {
    fn initialize(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn fetch_displays(&mut self) -> Result<Vec<VrDisplayPtr>, String> {
        let display: VrDisplayPtr = self.display.clone();
        Ok(vec![display])
    }

    fn is_available(&self) -> bool {
        true
    }

    fn poll_events(&mut self) -> Vec<VrDisplayEvent> {
        if let Some(control) = &self.control {
            while let Ok(msg) = control.try_recv() {
                self.display.borrow_mut().handle_msg(msg);
            }
        }
        self.display.borrow_mut().poll_events()
    }
}

impl Default for MockVrService {
    fn default() -> MockVrService {
        MockVrService::new()
    }
}
