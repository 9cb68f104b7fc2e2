/// Launch parameters shared by all the samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleConfig {
    /// Request a GLES 3 drawing context instead of GLES 2.
    pub use_gles3: bool,

    /// Collect and periodically log extended frame timing statistics.
    pub enable_performance_monitoring: bool,

    /// Request presentation from a plain surface click. Hook for automated
    /// runs where the presentation toggle is hard to reach.
    pub click_presents: bool,
}
