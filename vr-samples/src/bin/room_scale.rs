use clap::Parser;
use vr_display::{MockServiceCreator, MockVrControlMsg, VrDisplayEventReason, VrServiceManager};
use vr_samples::headless::HeadlessGlFactory;
use vr_samples::{SampleApp, SampleConfig, SampleMode};

/// Room scale demo: an island sized to the play area, a standing space
/// camera and a marker cube at the raw head pose.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Request a GLES 3 drawing context
    #[arg(long)]
    gles3: bool,

    /// Collect and log extended frame timing statistics
    #[arg(long)]
    performance_monitoring: bool,

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
        click_presents: false,
    };

    let (service, remote) = MockServiceCreator::new_service_with_remote();
    let mut manager = VrServiceManager::new();
    manager.register(service);

    let factory = HeadlessGlFactory::new();
    let mut app = SampleApp::new(SampleMode::RoomScale, config, Box::new(factory), manager);
    app.init();

    let phase = args.frames / 3;

    // Windowed warmup.
    app.run_frames(phase);

    // Put the headset on.
    remote
        .send(MockVrControlMsg::TriggerActivate(
            VrDisplayEventReason::Mounted,
        ))
        .unwrap();

    // Walk the viewer around the play area while presenting, so the
    // marker cube drifts through the island.
    for i in 0..phase {
        let t = i as f32 / phase.max(1) as f32;
        remote
            .send(MockVrControlMsg::SetViewerPose(
                [t - 0.5, 1.6, 0.5 - t],
                [0.0, 0.0, 0.0, 1.0],
            ))
            .unwrap();
        app.run_frames(1);
    }

    // Take the headset off again.
    remote
        .send(MockVrControlMsg::TriggerDeactivate(
            VrDisplayEventReason::Unmounted,
        ))
        .unwrap();
    app.run_frames(args.frames - 2 * phase);

    app.teardown();
}
