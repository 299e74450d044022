//! Auto-detect watcher: polls shared memory at a fixed rate, reports the
//! live car/track and a driving-style read-out. Never calls into the
//! pipeline directly; it only prints what a CLI wrapper could pass on to
//! `acr_setup --car-id ... --track-id ...`.
//!
//! Ctrl+C to stop, same as the existing physics recorder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use acc_shared_memory_rs::AccStatus;

use acr_setup::config;
use acr_setup::telemetry::reader::TelemetryReader;
use acr_setup::telemetry::style::StyleWindow;

static RUNNING: AtomicBool = AtomicBool::new(true);

fn main() {
    ctrlc::set_handler(|| {
        RUNNING.store(false, Ordering::Relaxed);
    })
    .expect("could not set Ctrl+C handler");

    let cfg = config::load_config();
    let poll_interval = Duration::from_millis(1000 / cfg.telemetry.poll_rate_hz.max(1));
    let idle_sleep = Duration::from_millis(cfg.telemetry.idle_sleep_ms);

    let mut reader = match TelemetryReader::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("could not open shared memory: {e}");
            std::process::exit(1);
        }
    };

    let mut window = StyleWindow::new();
    let mut last_car = String::new();
    let mut last_track = String::new();
    let mut last_print = std::time::Instant::now();

    println!("watching for a live session (Ctrl+C to stop)...");

    while RUNNING.load(Ordering::Relaxed) {
        match reader.poll() {
            Ok(Some(sample)) => {
                if sample.status != AccStatus::Live {
                    std::thread::sleep(idle_sleep);
                    continue;
                }
                if sample.car_model != last_car || sample.track != last_track {
                    println!("detected: car={} track={}", sample.car_model, sample.track);
                    last_car = sample.car_model.clone();
                    last_track = sample.track.clone();
                }
                window.push(sample);

                if last_print.elapsed() >= Duration::from_secs(5) {
                    if let Some((tag, profile)) = window.analyze() {
                        println!(
                            "style={} rotation={:.2} slide={:.2} aggression={:.2} drift={:.2} performance={:.2}",
                            tag.as_str(),
                            profile.rotation,
                            profile.slide,
                            profile.aggression,
                            profile.drift,
                            profile.performance
                        );
                    }
                    last_print = std::time::Instant::now();
                }
                std::thread::sleep(poll_interval);
            }
            Ok(None) => std::thread::sleep(poll_interval),
            Err(e) => {
                eprintln!("telemetry read error: {e}");
                std::thread::sleep(idle_sleep);
            }
        }
    }

    println!("stopped.");
}
