use std::error::Error;
use std::fmt;

/// Failures surfaced to the user as status messages. None of them abort
/// the process; the samples keep rendering whatever they still can.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// The platform has no stereo display support at all. Shown as a
    /// persistent error; the sample stays in windowed mode.
    ApiUnsupported,

    /// Display support exists but no device is connected. Shown as a
    /// transient info message.
    NoDeviceFound,

    /// The device rejected a presentation request. Carries the device
    /// message. Session state is unchanged.
    PresentRequestFailed(String),

    /// The device rejected a request to end presentation.
    ExitPresentFailed(String),

    /// No drawing context of the requested kind could be created.
    /// Rendering idles until a context becomes available.
    GraphicsApiUnavailable(String),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SampleError::ApiUnsupported => {
                write!(f, "Stereo display support is not available on this platform")
            }
            SampleError::NoDeviceFound => {
                write!(f, "Stereo displays supported, but none found")
            }
            SampleError::PresentRequestFailed(ref msg) => {
                write!(f, "Present request failed: {}", msg)
            }
            SampleError::ExitPresentFailed(ref msg) => {
                write!(f, "Exit present failed: {}", msg)
            }
            SampleError::GraphicsApiUnavailable(ref version) => {
                write!(f, "This platform does not support {}", version)
            }
        }
    }
}

impl Error for SampleError {}
