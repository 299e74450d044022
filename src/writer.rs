//! C9: setup writer. Converts a physical-unit `Setup` into AC's on-disk
//! integer format and writes it to both the generic and track-specific
//! setup folders.

use std::fs;
use std::path::{Path, PathBuf};

use crate::category::CategoryTag;
use crate::convert::{self, ParamFamily};
use crate::debug_log::DebugTrace;
use crate::mapper::ParameterCache;
use crate::models::{CarDescriptor, Setup, TrackDescriptor};

const VERSION_TAG: &str = "0.2.5-preview1";

/// canonical name, internal (section, key), game-name aliases for when the
/// mapping cache has nothing for this car, and the parameter family C8 uses
/// to convert it.
struct CanonicalParam {
    canonical: &'static str,
    section: &'static str,
    key: &'static str,
    aliases: &'static [&'static str],
    family: ParamFamily,
}

macro_rules! param {
    ($canonical:expr, $section:expr, $key:expr, $aliases:expr, $family:expr) => {
        CanonicalParam { canonical: $canonical, section: $section, key: $key, aliases: $aliases, family: $family }
    };
}

fn canonical_params() -> &'static [CanonicalParam] {
    &[
        param!("pressure_lf", "TYRES", "PRESSURE_LF", &[], ParamFamily::Pressure),
        param!("pressure_rf", "TYRES", "PRESSURE_RF", &[], ParamFamily::Pressure),
        param!("pressure_lr", "TYRES", "PRESSURE_LR", &[], ParamFamily::Pressure),
        param!("pressure_rr", "TYRES", "PRESSURE_RR", &[], ParamFamily::Pressure),
        param!("camber_lf", "ALIGNMENT", "CAMBER_LF", &[], ParamFamily::Camber),
        param!("camber_rf", "ALIGNMENT", "CAMBER_RF", &[], ParamFamily::Camber),
        param!("camber_lr", "ALIGNMENT", "CAMBER_LR", &[], ParamFamily::Camber),
        param!("camber_rr", "ALIGNMENT", "CAMBER_RR", &[], ParamFamily::Camber),
        param!("toe_lf", "ALIGNMENT", "TOE_LF", &[], ParamFamily::Toe),
        param!("toe_rf", "ALIGNMENT", "TOE_RF", &[], ParamFamily::Toe),
        param!("toe_lr", "ALIGNMENT", "TOE_LR", &[], ParamFamily::Toe),
        param!("toe_rr", "ALIGNMENT", "TOE_RR", &[], ParamFamily::Toe),
        param!("spring_lf", "SUSPENSION", "SPRING_RATE_LF", &[], ParamFamily::SpringFront),
        param!("spring_rf", "SUSPENSION", "SPRING_RATE_RF", &[], ParamFamily::SpringFront),
        param!("spring_lr", "SUSPENSION", "SPRING_RATE_LR", &[], ParamFamily::SpringRear),
        param!("spring_rr", "SUSPENSION", "SPRING_RATE_RR", &[], ParamFamily::SpringRear),
        param!("ride_height_lf", "SUSPENSION", "RIDE_HEIGHT_LF", &[], ParamFamily::RideHeight),
        param!("ride_height_rf", "SUSPENSION", "RIDE_HEIGHT_RF", &[], ParamFamily::RideHeight),
        param!("ride_height_lr", "SUSPENSION", "RIDE_HEIGHT_LR", &[], ParamFamily::RideHeight),
        param!("ride_height_rr", "SUSPENSION", "RIDE_HEIGHT_RR", &[], ParamFamily::RideHeight),
        param!("damp_bump_lf", "SUSPENSION", "DAMP_BUMP_LF", &[], ParamFamily::DamperBump),
        param!("damp_bump_rf", "SUSPENSION", "DAMP_BUMP_RF", &[], ParamFamily::DamperBump),
        param!("damp_bump_lr", "SUSPENSION", "DAMP_BUMP_LR", &[], ParamFamily::DamperBump),
        param!("damp_bump_rr", "SUSPENSION", "DAMP_BUMP_RR", &[], ParamFamily::DamperBump),
        param!("damp_rebound_lf", "SUSPENSION", "DAMP_REBOUND_LF", &[], ParamFamily::DamperRebound),
        param!("damp_rebound_rf", "SUSPENSION", "DAMP_REBOUND_RF", &[], ParamFamily::DamperRebound),
        param!("damp_rebound_lr", "SUSPENSION", "DAMP_REBOUND_LR", &[], ParamFamily::DamperRebound),
        param!("damp_rebound_rr", "SUSPENSION", "DAMP_REBOUND_RR", &[], ParamFamily::DamperRebound),
        param!("damp_fast_bump_lf", "SUSPENSION", "DAMP_FAST_BUMP_LF", &[], ParamFamily::DamperFastBump),
        param!("damp_fast_bump_rf", "SUSPENSION", "DAMP_FAST_BUMP_RF", &[], ParamFamily::DamperFastBump),
        param!("damp_fast_bump_lr", "SUSPENSION", "DAMP_FAST_BUMP_LR", &[], ParamFamily::DamperFastBump),
        param!("damp_fast_bump_rr", "SUSPENSION", "DAMP_FAST_BUMP_RR", &[], ParamFamily::DamperFastBump),
        param!("damp_fast_rebound_lf", "SUSPENSION", "DAMP_FAST_REBOUND_LF", &[], ParamFamily::DamperFastRebound),
        param!("damp_fast_rebound_rf", "SUSPENSION", "DAMP_FAST_REBOUND_RF", &[], ParamFamily::DamperFastRebound),
        param!("damp_fast_rebound_lr", "SUSPENSION", "DAMP_FAST_REBOUND_LR", &[], ParamFamily::DamperFastRebound),
        param!("damp_fast_rebound_rr", "SUSPENSION", "DAMP_FAST_REBOUND_RR", &[], ParamFamily::DamperFastRebound),
        param!("arb_front", "ARB", "ARB_FRONT", &[], ParamFamily::Arb),
        param!("arb_rear", "ARB", "ARB_REAR", &[], ParamFamily::Arb),
        param!("diff_power", "DIFFERENTIAL", "POWER", &[], ParamFamily::DiffPower),
        param!("diff_coast", "DIFFERENTIAL", "COAST", &[], ParamFamily::DiffCoast),
        param!("diff_preload", "DIFFERENTIAL", "PRELOAD", &[], ParamFamily::DiffPreload),
        param!("brake_bias", "BRAKES", "FRONT_BIAS", &["BIAS", "BRAKE_BIAS"], ParamFamily::BrakeBias),
        param!("brake_power", "BRAKES", "BRAKE_POWER_MULT", &[], ParamFamily::BrakePower),
        param!("wing_front", "AERO", "WING_FRONT", &["WING_0", "FWING"], ParamFamily::Wing),
        param!("wing_rear", "AERO", "WING_REAR", &["WING_1", "RWING", "WING"], ParamFamily::Wing),
        param!("caster_lf", "ALIGNMENT", "CASTER_LF", &[], ParamFamily::Caster),
        param!("caster_rf", "ALIGNMENT", "CASTER_RF", &[], ParamFamily::Caster),
    ]
}

fn sanitize_filename_component(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == ' ' || c == '-' { c } else { '_' })
        .collect::<String>()
        .replace(' ', "_")
        .replace('-', "_")
}

fn generate_filename(setup_name: Option<&str>, behavior_id: &str) -> String {
    match setup_name {
        Some(name) if !name.trim().is_empty() => sanitize_filename_component(name),
        _ => format!("rea_{behavior_id}_generated"),
    }
}

fn ensure_ini_suffix(name: &str) -> String {
    if name.ends_with(".ini") {
        name.to_string()
    } else {
        format!("{name}.ini")
    }
}

fn read_existing_integers(path: &Path) -> std::collections::HashMap<String, i64> {
    let mut values = std::collections::HashMap::new();
    let Ok(content) = fs::read_to_string(path) else { return values };
    let mut current: Option<String> = None;
    for line in content.lines() {
        let line = line.trim();
        if let Some(stripped) = line.strip_prefix('[') {
            if let Some(name) = stripped.strip_suffix(']') {
                current = Some(name.to_string());
                continue;
            }
        }
        if let Some(rest) = line.strip_prefix("VALUE=") {
            if let Some(section) = &current {
                if let Ok(v) = rest.trim().parse::<i64>() {
                    values.insert(section.clone(), v);
                }
            }
        }
    }
    values
}

fn minimal_fallback_set() -> std::collections::HashMap<String, i64> {
    let mut m = std::collections::HashMap::new();
    for k in ["PRESSURE_LF", "PRESSURE_RF", "PRESSURE_LR", "PRESSURE_RR"] {
        m.insert(k.to_string(), 26);
    }
    m.insert("CAMBER_LF".into(), -30);
    m.insert("CAMBER_RF".into(), -30);
    m.insert("CAMBER_LR".into(), -20);
    m.insert("CAMBER_RR".into(), -20);
    for k in ["TOE_OUT_LF", "TOE_OUT_RF", "TOE_OUT_LR", "TOE_OUT_RR"] {
        m.insert(k.to_string(), 0);
    }
    m.insert("FRONT_BIAS".into(), 60);
    m.insert("BRAKE_POWER_MULT".into(), 100);
    m.insert("FUEL".into(), 30);
    m.insert("TYRES".into(), 0);
    m
}

fn build_ini_content(params: &std::collections::BTreeMap<String, i64>, car_id: &str) -> String {
    let mut out = String::new();
    for (name, value) in params {
        out.push_str(&format!("[{name}]\nVALUE={value}\n\n"));
    }
    out.push_str(&format!("[CAR]\nMODEL={car_id}\n\n"));
    out.push_str(&format!("[__EXT_PATCH]\nVERSION={VERSION_TAG}\n"));
    out
}

fn write_atomically(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("ini.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}

pub enum WriteOutcome {
    Ok { message: String, path: PathBuf },
    Failed { message: String },
}

#[allow(clippy::too_many_arguments)]
pub fn write(
    setup: &Setup,
    car: &CarDescriptor,
    track: &TrackDescriptor,
    category: CategoryTag,
    setups_root: &Path,
    filename: Option<&str>,
    overwrite: bool,
    cache: &ParameterCache,
    trace: &mut DebugTrace,
) -> WriteOutcome {
    let filename = ensure_ini_suffix(&filename.map(str::to_string).unwrap_or_else(|| generate_filename(None, category.as_str())));

    let car_dir = setups_root.join(&car.car_id);
    let mapping = cache.get_mapping(&car.car_id, &car.content_path, false);
    let discovery_empty = mapping.is_empty();
    if discovery_empty {
        trace.log("DiscoveryEmpty: no sample setup files found, using minimal common-parameter set".to_string());
    }

    let generic_last = car_dir.join("generic").join("last.ini");
    let existing = read_existing_integers(&generic_last);

    let mut final_params: std::collections::BTreeMap<String, i64> = if discovery_empty {
        minimal_fallback_set().into_iter().collect()
    } else {
        existing.clone().into_iter().collect()
    };

    if !discovery_empty {
        for param in canonical_params() {
            let Some(game_name) = mapping.get(param.canonical) else {
                trace.log(format!("[SKIP] {}: not mapped for this car", param.canonical));
                continue;
            };

            let physical = setup
                .get(param.section, param.key)
                .or_else(|| setup.get_with_aliases(param.section, param.key, param.aliases).map(|(_, v)| v));

            let Some(physical) = physical else {
                trace.log(format!("[SKIP] {game_name}: no value in setup for {}/{}", param.section, param.key));
                continue;
            };

            let existing_value = existing.get(game_name).map(|v| *v as f64);
            let converted = convert::convert(category, param.family, physical, existing_value);
            trace.log(format!("{game_name}: {physical:.2} -> {} ({})", converted.value, converted.log));
            final_params.insert(game_name.to_string(), converted.value);
        }
    }

    let content = build_ini_content(&final_params, &car.car_id);

    let generic_dir = car_dir.join("generic");
    let generic_path = generic_dir.join(&filename);
    let generic_ok = write_atomically(&generic_path, &content).is_ok();
    if generic_ok {
        trace.log(format!("saved generic setup to {}", generic_path.display()));
    } else {
        trace.log(format!("warning: could not save generic setup to {}", generic_path.display()));
    }

    let track_dir = car_dir.join(&track.track_id);
    if fs::create_dir_all(&track_dir).is_err() {
        return if generic_ok {
            WriteOutcome::Ok { message: format!("setup saved to generic only: {}", generic_path.display()), path: generic_path }
        } else {
            WriteOutcome::Failed { message: "cannot create track-specific setup directory".to_string() }
        };
    }

    let track_path = track_dir.join(&filename);
    if track_path.exists() && !overwrite {
        return if generic_ok {
            WriteOutcome::Ok { message: format!("setup saved to generic: {}", generic_path.display()), path: generic_path }
        } else {
            WriteOutcome::Failed { message: "track setup exists and overwrite is false".to_string() }
        };
    }

    match write_atomically(&track_path, &content) {
        Ok(()) => WriteOutcome::Ok { message: format!("setup saved: {}", track_path.display()), path: track_path },
        Err(e) => {
            if generic_ok {
                WriteOutcome::Ok { message: format!("setup saved to generic only: {}", generic_path.display()), path: generic_path }
            } else {
                WriteOutcome::Failed { message: format!("cannot write track setup file: {e}") }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::Drivetrain;

    fn test_car(content_path: PathBuf) -> CarDescriptor {
        CarDescriptor {
            car_id: "test_car".into(),
            display_name: "Test Car".into(),
            brand: String::new(),
            class_hint: String::new(),
            drivetrain: Drivetrain::Rwd,
            power_hp: Some(500.0),
            weight_kg: Some(1300.0),
            content_path,
        }
    }

    fn test_track() -> TrackDescriptor {
        TrackDescriptor {
            track_id: "ks_nurburgring".into(),
            display_name: "Nurburgring".into(),
            config: String::new(),
            type_hint: String::new(),
            length_m: None,
        }
    }

    #[test]
    fn discovery_empty_falls_back_to_minimal_set() {
        let dir = std::env::temp_dir().join(format!("acr_setup_test_writer_{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();

        let car = test_car(dir.join("content"));
        let track = test_track();
        let cache = ParameterCache::new();
        let mut trace = DebugTrace::new(false);

        let setup = Setup::new();
        let outcome = write(&setup, &car, &track, CategoryTag::Gt, &dir, Some("test.ini"), true, &cache, &mut trace);

        match outcome {
            WriteOutcome::Ok { path, .. } => {
                let content = fs::read_to_string(path).unwrap();
                assert!(content.contains("[PRESSURE_LF]\nVALUE=26"));
                assert!(content.contains("[CAR]\nMODEL=test_car"));
            }
            WriteOutcome::Failed { message } => panic!("expected success, got: {message}"),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn filename_sanitizes_special_characters() {
        assert_eq!(generate_filename(Some("My Setup!"), "custom"), "My_Setup_");
    }
}
