#[cfg(feature = "mock")]
use crate::mock::MockServiceCreator;
use crate::{VrDisplayEvent, VrDisplayPtr, VrService};
use std::collections::HashMap;

/// Single entry point to all the registered display backends and the
/// displays they discover.
pub struct VrServiceManager {
    initialized: bool,
    services: Vec<Box<dyn VrService>>,
    displays: HashMap<u32, VrDisplayPtr>,
}

impl VrServiceManager {
    pub fn new() -> VrServiceManager {
        VrServiceManager {
            initialized: false,
            services: Vec::new(),
            displays: HashMap::new(),
        }
    }

    pub fn register(&mut self, service: Box<dyn VrService>) {
        self.services.push(service);
    }

    /// Registers the scriptable mock backend.
    #[cfg(feature = "mock")]
    pub fn register_mock(&mut self) {
        let creator = MockServiceCreator::new();
        self.services.push(creator.new_service());
    }

    /// Whether any registered backend has a usable platform API behind it.
    /// False when no backend is registered at all.
    pub fn is_available(&mut self) -> bool {
        self.initialize_services();
        self.services.iter().any(|service| service.is_available())
    }

    pub fn initialize_services(&mut self) {
        if self.initialized {
            return;
        }
        for service in &mut self.services {
            if let Err(msg) = service.initialize() {
                error!("Error initializing display service: {:?}", msg);
            }
        }
        self.initialized = true;
    }

    /// All known displays, sorted by id for a deterministic order.
    pub fn get_displays(&mut self) -> Vec<VrDisplayPtr> {
        self.fetch_displays();
        let mut result: Vec<VrDisplayPtr> = self.displays.values().cloned().collect();
        result.sort_by(|a, b| a.borrow().id().cmp(&b.borrow().id()));
        result
    }

    /// Drains pending events from all registered backends.
    pub fn poll_events(&mut self) -> Vec<VrDisplayEvent> {
        let mut events = Vec::new();
        for service in &mut self.services {
            events.append(&mut service.poll_events());
        }
        events
    }

    fn fetch_displays(&mut self) {
        self.initialize_services();
        for service in &mut self.services {
            match service.fetch_displays() {
                Ok(displays) => {
                    for display in displays {
                        let id = display.borrow().id();
                        self.displays.entry(id).or_insert(display);
                    }
                }
                Err(msg) => error!("Error fetching displays: {:?}", msg),
            }
        }
    }
}

impl Default for VrServiceManager {
    fn default() -> VrServiceManager {
        VrServiceManager::new()
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::VrServiceManager;

    #[test]
    fn manager_without_services_reports_unavailable() {
        let mut manager = VrServiceManager::new();
        assert!(!manager.is_available());
        assert!(manager.get_displays().is_empty());
    }

    #[test]
    fn mock_service_discovers_one_display() {
        let mut manager = VrServiceManager::new();
        manager.register_mock();
        assert!(manager.is_available());
        let displays = manager.get_displays();
        assert_eq!(displays.len(), 1);
        let data = displays[0].borrow().data();
        assert!(data.connected);
        assert!(data.capabilities.can_present);
    }

    #[test]
    fn displays_are_not_duplicated_across_queries() {
        let mut manager = VrServiceManager::new();
        manager.register_mock();
        let first = manager.get_displays();
        let second = manager.get_displays();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].borrow().id(), second[0].borrow().id());
    }
}
