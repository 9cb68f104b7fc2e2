use crate::VrDisplayData;
use crate::VrFrameData;
use crate::VrFuture;
use crate::VrLayer;
use std::cell::RefCell;
use std::sync::Arc;

pub type VrDisplayPtr = Arc<RefCell<dyn VrDisplay>>;

/// The VrDisplay trait forms the base of all stereo display device
/// implementations. Displays are owned by the service that discovered
/// them and shared with applications as `VrDisplayPtr`. All calls happen
/// on the frame loop thread.
pub trait VrDisplay {
    /// Returns the unique identifier of this display.
    fn id(&self) -> u32;

    /// Returns the current display data.
    fn data(&self) -> VrDisplayData;

    /// Returns the immediate frame data of the display.
    /// Should be used when not presenting to the device.
    fn immediate_frame_data(&self, near_z: f64, far_z: f64) -> VrFrameData;

    /// Returns the synced frame data to render the current frame.
    /// Should be used when presenting to the device.
    /// `sync_poses` must have been called for the current frame.
    fn synced_frame_data(&self, near_z: f64, far_z: f64) -> VrFrameData;

    /// Synchronization point to keep in step with the display's refresh.
    /// Blocks until the display is ready for the next frame.
    fn sync_poses(&mut self);

    /// Requests that the layer's source surface be presented on the
    /// display. The returned future settles exactly once: Ok on success,
    /// Err with a device message on rejection. Success is also announced
    /// with a `PresentChange` event.
    fn request_present(&mut self, layer: &VrLayer) -> VrFuture<Result<(), String>>;

    /// Ends presentation on the display. Announced with a `PresentChange`
    /// event on success.
    fn exit_present(&mut self) -> VrFuture<Result<(), String>>;

    /// Submits the rendered frame to the display. Must be called as early
    /// as possible after rendering both eyes finishes.
    fn submit_frame(&mut self);
}
