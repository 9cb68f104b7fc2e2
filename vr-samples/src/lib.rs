//! Native stereo presentation samples built on the `vr-display`
//! abstraction. `SampleApp` owns the whole demo: display discovery, the
//! presentation session, the frame loop and the rendered scene.

#[macro_use]
extern crate log;

pub mod app;
pub mod config;
pub mod debug_geometry;
pub mod error;
pub mod graphics;
pub mod headless;
pub mod scene;
pub mod scheduler;
pub mod session;
pub mod standing;
pub mod stats;
pub mod surface;
pub mod ui;

pub use crate::app::{SampleApp, SampleMode};
pub use crate::config::SampleConfig;
pub use crate::error::SampleError;
