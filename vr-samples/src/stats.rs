//! Frame timing statistics and the stats overlay quad.

use crate::graphics::GlContext;
use std::collections::VecDeque;
use std::time::Instant;

/// Capacity of the rolling frame time window, about three seconds at 60Hz.
const WINDOW_SIZE: usize = 180;

/// Index count of the overlay geometry (background quad plus graph).
const OVERLAY_INDEX_COUNT: u32 = 6;

/// Measures the time spent between `begin` and `end` each frame and keeps
/// a rolling window of the results.
pub struct FrameStats {
    started: Option<Instant>,
    frame_times: VecDeque<f64>,
    total_frames: u64,
    performance_monitoring: bool,
}

impl FrameStats {
    pub fn new(performance_monitoring: bool) -> FrameStats {
        FrameStats {
            started: None,
            frame_times: VecDeque::with_capacity(WINDOW_SIZE),
            total_frames: 0,
            performance_monitoring,
        }
    }

    /// Marks the start of frame work.
    pub fn begin(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Marks the end of frame work and folds the measurement in.
    pub fn end(&mut self) {
        if let Some(started) = self.started.take() {
            let ms = started.elapsed().as_secs_f64() * 1000.0;
            self.record(ms);
        }
    }

    fn record(&mut self, ms: f64) {
        self.frame_times.push_back(ms);
        if self.frame_times.len() > WINDOW_SIZE {
            self.frame_times.pop_front();
        }
        self.total_frames += 1;
        if self.performance_monitoring && self.total_frames % 60 == 0 {
            debug!(
                "frame timing: avg {:.2} ms, p95 {:.2} ms, {:.1} fps over {} frames",
                self.average_ms(),
                self.percentile_ms(95.0),
                self.fps(),
                self.frame_times.len()
            );
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.total_frames
    }

    pub fn average_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn percentile_ms(&self, percentile: f64) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.frame_times.iter().cloned().collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let index = ((percentile / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[index]
    }

    pub fn fps(&self) -> f64 {
        let avg = self.average_ms();
        if avg == 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Draws the stats panel inside the scene with the given matrices.
    pub fn render(&mut self, gl: &mut dyn GlContext, _projection: &[f32; 16], _view: &[f32; 16]) {
        gl.draw_indexed(OVERLAY_INDEX_COUNT);
    }

    /// Draws the stats panel as a screen space overlay. Used in windowed
    /// mode only; while presenting the panel lives inside the scene.
    pub fn render_ortho(&mut self, gl: &mut dyn GlContext) {
        gl.draw_indexed(OVERLAY_INDEX_COUNT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_recorded_times() {
        let mut stats = FrameStats::new(false);
        stats.record(10.0);
        stats.record(20.0);
        stats.record(30.0);
        assert!((stats.average_ms() - 20.0).abs() < 1e-9);
        assert!((stats.fps() - 50.0).abs() < 1e-9);
        assert_eq!(stats.frame_count(), 3);
    }

    #[test]
    fn percentile_picks_from_sorted_window() {
        let mut stats = FrameStats::new(false);
        for ms in [5.0, 1.0, 3.0, 2.0, 4.0] {
            stats.record(ms);
        }
        assert!((stats.percentile_ms(0.0) - 1.0).abs() < 1e-9);
        assert!((stats.percentile_ms(50.0) - 3.0).abs() < 1e-9);
        assert!((stats.percentile_ms(100.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn window_drops_oldest_measurements() {
        let mut stats = FrameStats::new(false);
        for _ in 0..WINDOW_SIZE {
            stats.record(100.0);
        }
        for _ in 0..WINDOW_SIZE {
            stats.record(10.0);
        }
        assert!((stats.average_ms() - 10.0).abs() < 1e-9);
        assert_eq!(stats.frame_count(), 2 * WINDOW_SIZE as u64);
    }

    #[test]
    fn begin_end_records_a_measurement() {
        let mut stats = FrameStats::new(false);
        stats.begin();
        stats.end();
        assert_eq!(stats.frame_count(), 1);
        // end without begin is a no-op
        stats.end();
        assert_eq!(stats.frame_count(), 1);
    }
}
