//! End-to-end scenarios for the setup-synthesis pipeline (S1-S6), mirroring
//! the vendored shared-memory crate's `tests/integration_tests.rs` layout:
//! one file, plain `assert!`/`assert_eq!`, epsilon comparisons for floats.

use std::path::PathBuf;

use acr_setup::category::{self, CategoryTag};
use acr_setup::debug_log::DebugTrace;
use acr_setup::mapper::ParameterCache;
use acr_setup::models::car::Drivetrain;
use acr_setup::models::{CarDescriptor, Conditions, Profile, TrackDescriptor, Weather};
use acr_setup::pipeline::{self, TrackType};

fn car(car_id: &str, drivetrain: Drivetrain, power_hp: f64, weight_kg: f64) -> CarDescriptor {
    CarDescriptor {
        car_id: car_id.to_string(),
        display_name: car_id.to_string(),
        brand: String::new(),
        class_hint: String::new(),
        drivetrain,
        power_hp: Some(power_hp),
        weight_kg: Some(weight_kg),
        content_path: PathBuf::from(format!("/nonexistent/acr_setup_test/{car_id}")),
    }
}

fn track(track_id: &str) -> TrackDescriptor {
    TrackDescriptor {
        track_id: track_id.to_string(),
        display_name: track_id.to_string(),
        config: String::new(),
        type_hint: String::new(),
        length_m: None,
    }
}

fn conditions(ambient_c: f64, road_c: f64) -> Conditions {
    Conditions { ambient_c, road_c, weather: Weather::Dry }
}

// S1: GT3 baseline.
#[test]
fn s1_gt3_baseline_matches_expected_targets() {
    let car = car("ks_ferrari_488_gt3", Drivetrain::Rwd, 500.0, 1300.0);
    assert_eq!(category::classify(&car), CategoryTag::Gt);

    let track = track("ks_nurburgring");
    let cache = ParameterCache::new();
    let mut trace = DebugTrace::new(false);

    let (setup, metadata) = pipeline::generate(
        &car,
        &track,
        "balanced",
        Some(&Profile::default()),
        &conditions(25.0, 30.0),
        &cache,
        &mut trace,
    )
    .unwrap();

    assert_eq!(metadata.category, CategoryTag::Gt);
    assert_eq!(metadata.track_type, TrackType::Circuit);

    let diff_power = setup.get("DIFFERENTIAL", "POWER").unwrap();
    let diff_coast = setup.get("DIFFERENTIAL", "COAST").unwrap();
    let diff_preload = setup.get("DIFFERENTIAL", "PRELOAD").unwrap();
    assert!((diff_power - 65.0).abs() < 1e-6);
    assert!((diff_coast - 50.0).abs() < 1e-6);
    assert!((diff_preload - 30.0).abs() < 1e-6);

    let brake_bias = setup.get("BRAKES", "FRONT_BIAS").unwrap();
    assert!((brake_bias - 58.0).abs() < 1e-6);

    let k_front = setup.get("SUSPENSION", "SPRING_RATE_LF").unwrap();
    assert!((k_front / 124_100.0 - 1.0).abs() < 0.01, "k_front={k_front}");
}

#[test]
fn s1_generate_and_export_writes_the_track_specific_file() {
    let car = car("ks_ferrari_488_gt3_s1export", Drivetrain::Rwd, 500.0, 1300.0);
    let track = track("ks_nurburgring");
    let cache = ParameterCache::new();

    let setups_root = std::env::temp_dir().join(format!("acr_setup_test_s1_{}", std::process::id()));
    std::fs::remove_dir_all(&setups_root).ok();

    let result = pipeline::generate_and_export(
        &car,
        &track,
        "balanced",
        Some(&Profile::default()),
        &conditions(25.0, 30.0),
        &setups_root,
        None,
        true,
        &cache,
        false,
    );

    assert!(result.ok, "{}", result.message);
    let path = result.path.expect("expected a written path");
    assert!(path.to_string_lossy().contains("ks_nurburgring"));
    assert!(path.exists());

    std::fs::remove_dir_all(&setups_root).ok();
}

// S2: formula with aggressive rake triggers anti-bottoming.
#[test]
fn s2_formula_rake_triggers_anti_bottoming() {
    let car = car("rss_formula_2020", Drivetrain::Rwd, 750.0, 650.0);
    assert_eq!(category::classify(&car), CategoryTag::Formula);

    let track = track("ks_monza");
    let cache = ParameterCache::new();
    let mut trace = DebugTrace::new(true);

    let (setup, _metadata) = pipeline::generate(
        &car,
        &track,
        "attack",
        None,
        &conditions(25.0, 30.0),
        &cache,
        &mut trace,
    )
    .unwrap();

    assert!(trace.lines().iter().any(|l| l.contains("category classified as formula")));

    // Formula motion ratio is 1.0 front/rear, so C4(a) leaves the spring rate
    // untouched; C4(b)'s anti-bottoming pass (rake 1.5 > 1.0) then multiplies
    // it by 1.15 relative to the un-refined baseline.
    let k_base = {
        let omega = 2.0 * std::f64::consts::PI * 3.8_f64;
        omega * omega * (650.0 / 4.0)
    };
    let k_front = setup.get("SUSPENSION", "SPRING_RATE_LF").unwrap();
    assert!((k_front / (k_base * 1.15) - 1.0).abs() < 0.01, "k_front={k_front} expected={}", k_base * 1.15);
}

// S3: touge with drift profile pushes rear camber past the legal envelope;
// the physical Setup itself is unclamped (C5 never clamps), but the
// converter (C8) clamps the written integer to the [-50, 0] tenths-of-a-
// degree envelope, i.e. 0 degrees.
#[test]
fn s3_touge_drift_profile_clamps_camber_and_differential() {
    let mut car = car("s13_drift", Drivetrain::Rwd, 300.0, 1100.0);
    assert_eq!(category::classify(&car), CategoryTag::Drift);

    // A real sample file so the mapper discovers CAMBER_RR and the writer
    // actually runs it through C8's converter instead of the no-discovery
    // fallback set.
    let content_path = std::env::temp_dir().join(format!("acr_setup_test_s3_content_{}", std::process::id()));
    std::fs::remove_dir_all(&content_path).ok();
    std::fs::create_dir_all(content_path.join("generic")).unwrap();
    std::fs::write(
        content_path.join("generic").join("last.ini"),
        "[CAMBER_RR]\nVALUE=-20\n\n[CAR]\nMODEL=s13_drift\n",
    )
    .unwrap();
    car.content_path = content_path.clone();

    let track = track("akina_downhill");
    let cache = ParameterCache::new();
    let mut trace = DebugTrace::new(true);

    let profile = Profile { drift: 1.0, ..Profile::default() };

    let (setup, metadata) = pipeline::generate(
        &car,
        &track,
        "drift",
        Some(&profile),
        &conditions(25.0, 30.0),
        &cache,
        &mut trace,
    )
    .unwrap();

    assert_eq!(metadata.track_type, TrackType::Touge);

    let diff_power = setup.get("DIFFERENTIAL", "POWER").unwrap();
    assert!((diff_power - 100.0).abs() < 1e-6, "diff_power={diff_power}");

    // category base 0.0 + C5's drift effect (+2.5) = 2.5, pre-clamp.
    let camber_rr = setup.get("ALIGNMENT", "CAMBER_RR").unwrap();
    assert!((camber_rr - 2.5).abs() < 1e-6, "camber_rr={camber_rr}");

    let setups_root = std::env::temp_dir().join(format!("acr_setup_test_s3_{}", std::process::id()));
    std::fs::remove_dir_all(&setups_root).ok();

    let result = pipeline::generate_and_export(
        &car,
        &track,
        "drift",
        Some(&profile),
        &conditions(25.0, 30.0),
        &setups_root,
        None,
        true,
        &cache,
        false,
    );
    assert!(result.ok, "{}", result.message);
    let content = std::fs::read_to_string(result.path.unwrap()).unwrap();
    assert!(content.contains("[CAMBER_RR]\nVALUE=0"), "{content}");

    std::fs::remove_dir_all(&setups_root).ok();
    std::fs::remove_dir_all(&content_path).ok();
}

// S4: FWD street_sport reduces the differential.
#[test]
fn s4_fwd_street_sport_reduces_differential() {
    let car = car("some_sleeper_fwd", Drivetrain::Fwd, 400.0, 1300.0);
    assert_eq!(category::classify(&car), CategoryTag::StreetSport);

    let track = track("generic_circuit");
    let cache = ParameterCache::new();
    let mut trace = DebugTrace::new(false);

    let (setup, _) = pipeline::generate(
        &car,
        &track,
        "balanced",
        None,
        &conditions(25.0, 30.0),
        &cache,
        &mut trace,
    )
    .unwrap();

    assert_eq!(setup.get("DIFFERENTIAL", "POWER"), Some(30.0));
    assert_eq!(setup.get("DIFFERENTIAL", "COAST"), Some(25.0));
    assert_eq!(setup.get("DIFFERENTIAL", "PRELOAD"), Some(15.0));
}

// S5: neutral profile idempotence.
#[test]
fn s5_neutral_profile_idempotence() {
    let car = car("ks_ferrari_488_gt3_s5", Drivetrain::Rwd, 500.0, 1300.0);
    let track = track("ks_nurburgring");
    let cache = ParameterCache::new();

    let run = || {
        let mut trace = DebugTrace::new(false);
        pipeline::generate(
            &car,
            &track,
            "balanced",
            Some(&Profile::default()),
            &conditions(25.0, 30.0),
            &cache,
            &mut trace,
        )
        .unwrap()
        .0
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

// S6: discovery-empty fallback writes the minimal parameter set.
#[test]
fn s6_discovery_empty_falls_back_to_minimal_parameter_set() {
    let car = car("unknown_untested_car", Drivetrain::Rwd, 300.0, 1200.0);
    let track = track("generic_circuit");
    let cache = ParameterCache::new();

    let setups_root = std::env::temp_dir().join(format!("acr_setup_test_s6_{}", std::process::id()));
    std::fs::remove_dir_all(&setups_root).ok();

    let result = pipeline::generate_and_export(
        &car,
        &track,
        "balanced",
        None,
        &conditions(25.0, 30.0),
        &setups_root,
        Some("fallback_test"),
        true,
        &cache,
        false,
    );

    assert!(result.ok, "{}", result.message);
    let path = result.path.unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("[PRESSURE_LF]\nVALUE=26"));
    assert!(content.contains("[CAMBER_LF]\nVALUE=-30"));
    assert!(content.contains("[CAMBER_LR]\nVALUE=-20"));
    assert!(content.contains("[FRONT_BIAS]\nVALUE=60"));
    assert!(content.contains("[BRAKE_POWER_MULT]\nVALUE=100"));
    assert!(content.contains("[FUEL]\nVALUE=30"));

    std::fs::remove_dir_all(&setups_root).ok();
}
