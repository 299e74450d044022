//! CLI entry point for the setup-synthesis pipeline.
//!
//! Usage:
//!   acr_setup --car-id <id> --track-id <id> [--drivetrain RWD|FWD|AWD]
//!             [--power-hp N] [--weight-kg N] [--behavior <tag>]
//!             [--rotation 0.0-1.0] [--slide 0.0-1.0] [--aggression 0.0-1.0]
//!             [--drift 0.0-1.0] [--performance 0.0-1.0] [--aero 0.0-1.0]
//!             [--name <setup name>] [--no-overwrite]

use std::path::PathBuf;

use acr_setup::config;
use acr_setup::mapper::ParameterCache;
use acr_setup::models::{CarDescriptor, Conditions, Drivetrain, Profile, TrackDescriptor};
use acr_setup::pipeline;

struct Args {
    car_id: String,
    track_id: String,
    drivetrain: Drivetrain,
    power_hp: Option<f64>,
    weight_kg: Option<f64>,
    behavior: String,
    profile: Profile,
    profile_given: bool,
    setup_name: Option<String>,
    overwrite: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut car_id = None;
    let mut track_id = None;
    let mut drivetrain = Drivetrain::Rwd;
    let mut power_hp = None;
    let mut weight_kg = None;
    let mut behavior = "balanced".to_string();
    let mut profile = Profile::default();
    let mut profile_given = false;
    let mut setup_name = None;
    let mut overwrite = true;

    let mut raw = std::env::args().skip(1);
    while let Some(flag) = raw.next() {
        let mut value = || raw.next().ok_or_else(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--car-id" => car_id = Some(value()?),
            "--track-id" => track_id = Some(value()?),
            "--drivetrain" => {
                let v = value()?;
                drivetrain = Drivetrain::parse(&v).ok_or_else(|| format!("invalid drivetrain: {v}"))?;
            }
            "--power-hp" => power_hp = Some(value()?.parse().map_err(|_| "invalid --power-hp")?),
            "--weight-kg" => weight_kg = Some(value()?.parse().map_err(|_| "invalid --weight-kg")?),
            "--behavior" => behavior = value()?,
            "--rotation" => {
                profile.rotation = value()?.parse().map_err(|_| "invalid --rotation")?;
                profile_given = true;
            }
            "--slide" => {
                profile.slide = value()?.parse().map_err(|_| "invalid --slide")?;
                profile_given = true;
            }
            "--aggression" => {
                profile.aggression = value()?.parse().map_err(|_| "invalid --aggression")?;
                profile_given = true;
            }
            "--drift" => {
                profile.drift = value()?.parse().map_err(|_| "invalid --drift")?;
                profile_given = true;
            }
            "--performance" => {
                profile.performance = value()?.parse().map_err(|_| "invalid --performance")?;
                profile_given = true;
            }
            "--aero" => {
                profile.aero = value()?.parse().map_err(|_| "invalid --aero")?;
                profile_given = true;
            }
            "--name" => setup_name = Some(value()?),
            "--no-overwrite" => overwrite = false,
            other => return Err(format!("unrecognised flag: {other}")),
        }
    }

    Ok(Args {
        car_id: car_id.ok_or("missing --car-id")?,
        track_id: track_id.ok_or("missing --track-id")?,
        drivetrain,
        power_hp,
        weight_kg,
        behavior,
        profile,
        profile_given,
        setup_name,
        overwrite,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let cfg = config::load_config();
    let setups_root = match config::resolve_setups_root(&cfg) {
        Some(p) => p,
        None => {
            eprintln!("error: could not resolve a setups_root (config it explicitly in acr_setup.toml)");
            std::process::exit(1);
        }
    };

    let content_path: PathBuf = setups_root.join(&args.car_id);
    let car = CarDescriptor {
        car_id: args.car_id.clone(),
        display_name: args.car_id.clone(),
        brand: String::new(),
        class_hint: String::new(),
        drivetrain: args.drivetrain,
        power_hp: args.power_hp,
        weight_kg: args.weight_kg,
        content_path,
    };
    let track = TrackDescriptor {
        track_id: args.track_id.clone(),
        display_name: args.track_id.clone(),
        config: String::new(),
        type_hint: String::new(),
        length_m: None,
    };

    let cache = ParameterCache::new();
    let profile = if args.profile_given { Some(args.profile) } else { None };

    let result = pipeline::generate_and_export(
        &car,
        &track,
        &args.behavior,
        profile.as_ref(),
        &Conditions::default(),
        &setups_root,
        args.setup_name.as_deref(),
        args.overwrite,
        &cache,
        cfg.enable_debug_logging,
    );

    if result.ok {
        println!("{}", result.message);
        if let Some(path) = result.path {
            println!("written to: {}", path.display());
        }
        std::process::exit(0);
    } else {
        eprintln!("error: {}", result.message);
        std::process::exit(1);
    }
}
