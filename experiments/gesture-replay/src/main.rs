mod script;

use {
    base::*,
    gesture::{Indicator, Mode},
    script::{ReplayEstimator, ReplayVideo, Script},
    session::{DetectionSession, FrameReport, SessionConfig, Surface},
    std::{env, path::PathBuf, sync::Arc},
    store::{StoreClient, StoreServer, UserId},
};

/// Surface that logs what a page would do.
struct LogSurface {
    viewport: Vec2<f32>,
    clickable: bool,
}

impl Surface for LogSurface {
    fn viewport(&self) -> Vec2<f32> {
        self.viewport
    }

    fn move_pointer(&mut self, position: Vec2<f32>, indicator: Indicator, mode: Mode) {
        log_debug!("pointer {} {:?} ({} mode)", position, indicator, mode);
    }

    fn scroll_by(&mut self, dy: f32) {
        log_info!("scroll by {}", dy);
    }

    fn activate_at(&mut self, position: Vec2<f32>) -> bool {
        log_info!("activate at {}", position);
        self.clickable
    }

    fn notify(&mut self, message: &str) {
        println!("  [toast] {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    let script_path: PathBuf = env::var("GESTURE_SCRIPT")
        .unwrap_or_else(|_| "scripts/demo.json".to_string())
        .into();
    let user = env::var("GESTURE_USER").ok();

    println!("Gesture Replay Experiment");
    println!("Script: {}", script_path.display());
    println!("User: {}", user.as_deref().unwrap_or("(signed out)"));
    println!();

    let script = Script::load(&script_path)?;
    println!(
        "Frame: {}, viewport: {}, {} frames",
        script.frame_size(),
        script.viewport_size(),
        script.frames.len()
    );

    let clock = ManualClock::new(0);
    let (handle, store_task) = StoreServer::spawn(Arc::new(clock.clone()));
    let client = StoreClient::new(handle.clone());
    if let Some(user) = user {
        client.sign_in(UserId::new(user));
    }

    let surface = LogSurface {
        viewport: script.viewport_size(),
        clickable: script.clickable,
    };
    let mut session = DetectionSession::start(
        ReplayVideo::new(&script, clock.clone()),
        ReplayEstimator,
        surface,
        client,
        Arc::new(clock.clone()),
        SessionConfig::default(),
    )?;

    while let Some(report) = session.tick().await {
        let t = clock.now_ms();
        match report {
            FrameReport::Processed { outcome, submitted } => {
                let action = outcome
                    .action
                    .map(|action| action.description())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>6} ms  {:<9} {:<6} {}{}",
                    t,
                    outcome.gesture.as_str(),
                    outcome.mode,
                    action,
                    if submitted.is_some() { " (recorded)" } else { "" }
                );
            }
            FrameReport::InferenceFailed(error) => println!("{:>6} ms  failed: {}", t, error),
            FrameReport::Skipped(reason) => println!("{:>6} ms  skipped: {}", t, reason),
            FrameReport::Discarded => println!("{:>6} ms  discarded", t),
        }
    }

    let outcomes = session.drain_submissions().await;
    println!();
    for outcome in &outcomes {
        println!("submission {}", outcome);
    }
    println!("{:?}", session.stats());

    println!();
    println!("Recent gestures:");
    let recent = session.recent_gestures().await?;
    if recent.is_empty() {
        println!("  (none)");
    }
    for event in &recent {
        println!("  {}", event);
    }

    handle.shutdown().await;
    store_task.await?;
    Ok(())
}
