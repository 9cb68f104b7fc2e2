use crate::VrDisplayData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VrDisplayEventReason {
    Navigation,

    /// The headset was put on.
    Mounted,

    /// The headset was taken off.
    Unmounted,
}

/// Notifications pushed by a display device. Delivered on the frame loop
/// thread via `VrServiceManager::poll_events`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum VrDisplayEvent {
    /// A display has been connected.
    Connect(VrDisplayData),

    /// A display has been disconnected, by id.
    Disconnect(u32),

    /// The display requests to begin presentation. Applications should
    /// honor this by requesting presentation themselves.
    Activate(VrDisplayData, VrDisplayEventReason),

    /// The display requests to end presentation. May fire whether or not
    /// the application is presenting.
    Deactivate(VrDisplayData, VrDisplayEventReason),

    /// Presentation to the display has begun or ended. Carries the display
    /// data current at the transition and the new presenting state.
    PresentChange(VrDisplayData, bool),
}
