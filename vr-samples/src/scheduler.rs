//! Frame scheduling. The loop never free-runs on its own: every frame is
//! delivered by a refresh source, and which source is active follows the
//! presentation state.

use std::thread;
use std::time::{Duration, Instant};
use vr_display::VrDisplayPtr;

/// Which refresh source drives the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Windowed,
    Presenting,
}

/// A source of frame callbacks. A callback must be re-requested after
/// every delivery, mirroring how animation frame callbacks behave.
pub trait RefreshSource {
    /// Arms delivery of the next frame callback.
    fn request_frame(&mut self);

    /// Waits for the source's next refresh. Returns false when the source
    /// is idle because nothing was armed.
    fn wait_refresh(&mut self) -> bool;
}

/// The ambient windowed refresh source. Free running: it delivers whether
/// or not anyone re-armed it, and it is never cancelled.
pub struct WindowRefreshSource {
    interval: Duration,
}

impl WindowRefreshSource {
    pub fn new() -> WindowRefreshSource {
        WindowRefreshSource::with_interval(Duration::from_millis(16))
    }

    /// Tests use a zero interval to run the loop as fast as possible.
    pub fn with_interval(interval: Duration) -> WindowRefreshSource {
        WindowRefreshSource { interval }
    }
}

impl RefreshSource for WindowRefreshSource {
    fn request_frame(&mut self) {
        // Delivery does not depend on arming.
    }

    fn wait_refresh(&mut self) -> bool {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        true
    }
}

impl Default for WindowRefreshSource {
    fn default() -> WindowRefreshSource {
        WindowRefreshSource::new()
    }
}

/// The display's own refresh source. One delivery per arm; refreshes are
/// paced by synchronizing with the device.
pub struct DisplayRefreshSource {
    display: VrDisplayPtr,
    armed: bool,
}

impl DisplayRefreshSource {
    pub fn new(display: VrDisplayPtr) -> DisplayRefreshSource {
        DisplayRefreshSource {
            display,
            armed: false,
        }
    }
}

impl RefreshSource for DisplayRefreshSource {
    fn request_frame(&mut self) {
        self.armed = true;
    }

    fn wait_refresh(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.display.borrow_mut().sync_poses();
        true
    }
}

/// Owns both refresh sources and routes frame requests by loop mode.
/// All timestamps come from one clock so they stay comparable across
/// source switches.
pub struct FrameScheduler {
    started: Instant,
    window: WindowRefreshSource,
    display: Option<DisplayRefreshSource>,
}

impl FrameScheduler {
    pub fn new() -> FrameScheduler {
        FrameScheduler::with_window_source(WindowRefreshSource::new())
    }

    pub fn with_window_source(window: WindowRefreshSource) -> FrameScheduler {
        FrameScheduler {
            started: Instant::now(),
            window,
            display: None,
        }
    }

    /// Attaches the display whose refresh drives presenting frames.
    pub fn set_display(&mut self, display: VrDisplayPtr) {
        self.display = Some(DisplayRefreshSource::new(display));
    }

    /// Replaces the windowed source, keeping the frame clock.
    pub fn set_window_source(&mut self, window: WindowRefreshSource) {
        self.window = window;
    }

    pub fn request_frame(&mut self, mode: LoopMode) {
        match mode {
            LoopMode::Windowed => self.window.request_frame(),
            LoopMode::Presenting => {
                if let Some(display) = &mut self.display {
                    display.request_frame();
                }
            }
        }
    }

    /// Waits on the active source. Returns the frame timestamp in
    /// milliseconds, or None when the source is idle.
    pub fn next_frame(&mut self, mode: LoopMode) -> Option<f64> {
        let delivered = match mode {
            LoopMode::Windowed => self.window.wait_refresh(),
            LoopMode::Presenting => match &mut self.display {
                Some(display) => display.wait_refresh(),
                None => false,
            },
        };
        if delivered {
            Some(self.elapsed_ms())
        } else {
            None
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameScheduler {
    fn default() -> FrameScheduler {
        FrameScheduler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vr_display::MockVrDisplay;

    #[test]
    fn window_source_is_free_running() {
        let mut source = WindowRefreshSource::with_interval(Duration::ZERO);
        // Never armed, still delivers.
        assert!(source.wait_refresh());
        assert!(source.wait_refresh());
    }

    #[test]
    fn display_source_delivers_once_per_arm() {
        let display: VrDisplayPtr = MockVrDisplay::new();
        let mut source = DisplayRefreshSource::new(display);

        assert!(!source.wait_refresh());
        source.request_frame();
        assert!(source.wait_refresh());
        // Not re-armed after delivery.
        assert!(!source.wait_refresh());
    }

    #[test]
    fn presenting_without_display_is_idle() {
        let mut scheduler =
            FrameScheduler::with_window_source(WindowRefreshSource::with_interval(Duration::ZERO));
        scheduler.request_frame(LoopMode::Presenting);
        assert_eq!(scheduler.next_frame(LoopMode::Presenting), None);
        // The windowed source still works.
        assert!(scheduler.next_frame(LoopMode::Windowed).is_some());
    }

    #[test]
    fn timestamps_are_monotonic_across_sources() {
        let mut scheduler =
            FrameScheduler::with_window_source(WindowRefreshSource::with_interval(Duration::ZERO));
        scheduler.set_display(MockVrDisplay::new());

        let first = scheduler.next_frame(LoopMode::Windowed).unwrap();
        scheduler.request_frame(LoopMode::Presenting);
        let second = scheduler.next_frame(LoopMode::Presenting).unwrap();
        let third = scheduler.next_frame(LoopMode::Windowed).unwrap();
        assert!(second >= first);
        assert!(third >= second);
    }
}
