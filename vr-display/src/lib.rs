macro_rules! identity_matrix {
    () => {
        [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]
    };
}

#[macro_use]
extern crate log;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod capabilities;
pub mod display;
pub mod display_data;
pub mod event;
pub mod eye_parameters;
pub mod field_of_view;
pub mod frame_data;
pub mod future;
pub mod layer;
pub mod manager;
#[cfg(feature = "mock")]
pub mod mock;
pub mod pose;
pub mod service;
pub mod stage_parameters;
pub mod utils;

pub use crate::capabilities::VrDisplayCapabilities;
pub use crate::display::{VrDisplay, VrDisplayPtr};
pub use crate::display_data::VrDisplayData;
pub use crate::event::{VrDisplayEvent, VrDisplayEventReason};
pub use crate::eye_parameters::VrEyeParameters;
pub use crate::field_of_view::VrFieldOfView;
pub use crate::frame_data::VrFrameData;
pub use crate::future::{VrFuture, VrFutureResolver};
pub use crate::layer::VrLayer;
pub use crate::manager::VrServiceManager;
#[cfg(feature = "mock")]
pub use crate::mock::{MockServiceCreator, MockVrControlMsg, MockVrDisplay, MockVrDisplayPtr, MockVrService};
pub use crate::pose::VrPose;
pub use crate::service::{VrService, VrServiceCreator};
pub use crate::stage_parameters::VrStageParameters;
