use crate::VrDisplayEvent;
use crate::VrDisplayPtr;

/// Implemented by each platform display API backend. Backends are driven
/// entirely from the frame loop thread.
pub trait VrService {
    /// Prepares the backend for use. Called lazily before the first
    /// display query. Idempotent.
    fn initialize(&mut self) -> Result<(), String>;

    /// Enumerates the displays the backend currently knows about.
    fn fetch_displays(&mut self) -> Result<Vec<VrDisplayPtr>, String>;

    /// Whether the platform API behind this backend is usable at all.
    /// May be queried before `initialize`.
    fn is_available(&self) -> bool;

    /// Drains pending display notifications.
    fn poll_events(&mut self) -> Vec<VrDisplayEvent>;
}

pub trait VrServiceCreator {
    fn new_service(&self) -> Box<dyn VrService>;
}
