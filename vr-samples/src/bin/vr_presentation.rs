use clap::Parser;
use vr_display::{MockServiceCreator, MockVrControlMsg, VrDisplayEventReason, VrServiceManager};
use vr_samples::headless::HeadlessGlFactory;
use vr_samples::{SampleApp, SampleConfig, SampleMode};

/// Stereo presentation demo: renders a cube sea and walks the enter/exit
/// VR flow against a mock display.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Request a GLES 3 drawing context
    #[arg(long)]
    gles3: bool,

    /// Collect and log extended frame timing statistics
    #[arg(long)]
    performance_monitoring: bool,

    /// Enter VR from a surface click instead of the headset being put on
    #[arg(long)]
    click_presents: bool,

    /// Total number of frames to run
    #[arg(long, default_value_t = 180)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SampleConfig {
        use_gles3: args.gles3,
        enable_performance_monitoring: args.performance_monitoring,
        click_presents: args.click_presents,
    };

    let (service, remote) = MockServiceCreator::new_service_with_remote();
    let mut manager = VrServiceManager::new();
    manager.register(service);

    let factory = HeadlessGlFactory::new();
    let mut app = SampleApp::new(SampleMode::CubeSea, config, Box::new(factory), manager);
    app.init();

    let phase = args.frames / 3;

    // Windowed warmup.
    app.run_frames(phase);

    // Enter VR: a surface click or the headset being put on.
    if args.click_presents {
        app.on_surface_click();
    } else {
        remote
            .send(MockVrControlMsg::TriggerActivate(
                VrDisplayEventReason::Mounted,
            ))
            .unwrap();
    }
    app.run_frames(phase);

    // Take the headset off again.
    remote
        .send(MockVrControlMsg::TriggerDeactivate(
            VrDisplayEventReason::Unmounted,
        ))
        .unwrap();
    app.run_frames(args.frames - 2 * phase);

    app.teardown();
}
