//! C4: physics refiner. Three ordered passes on an already-built `Setup`:
//! motion-ratio spring correction, anti-bottoming, fast-damper cap. Never
//! reads the profile or conditions; pure function of category + rake +
//! track_type + car overrides + the current setup.

use std::path::Path;

use serde::Deserialize;

use crate::category::CategoryTag;
use crate::mapper::ParameterCache;
use crate::models::Setup;
use crate::pipeline::TrackType;

const CORNERS: [&str; 4] = ["LF", "RF", "LR", "RR"];
const FRONT: [&str; 2] = ["LF", "RF"];
const REAR: [&str; 2] = ["LR", "RR"];

/// Per-car physical overrides, loaded from `<content_path>/car_data.json` if
/// present. Mirrors the fields the originating tool keeps in its enriched
/// car-data JSON (`wheelbase_mm`, `max_torque_nm`, `motion_ratio_front/rear`);
/// only the motion ratios are consumed by the refiner.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CarOverrides {
    pub motion_ratio_front: Option<f64>,
    pub motion_ratio_rear: Option<f64>,
}

impl CarOverrides {
    pub fn load(content_path: &Path) -> Self {
        let path = content_path.join("car_data.json");
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }
}

fn motion_ratios(category: CategoryTag, overrides: &CarOverrides) -> (f64, f64) {
    let (cat_front, cat_rear) = match category {
        CategoryTag::Formula => (1.0, 1.0),
        CategoryTag::Prototype => (0.95, 0.95),
        CategoryTag::Gt => (0.9, 0.8),
        CategoryTag::StreetSport => (0.85, 0.75),
        CategoryTag::Street => (0.8, 0.7),
        CategoryTag::Vintage => (0.75, 0.65),
        CategoryTag::Drift => (0.85, 0.7),
    };
    (
        overrides.motion_ratio_front.unwrap_or(cat_front),
        overrides.motion_ratio_rear.unwrap_or(cat_rear),
    )
}

fn correct_motion_ratio(mut setup: Setup, category: CategoryTag, overrides: &CarOverrides) -> Setup {
    let (mr_front, mr_rear) = motion_ratios(category, overrides);
    let factor_front = 1.0 / (mr_front * mr_front);
    let factor_rear = 1.0 / (mr_rear * mr_rear);

    for corner in FRONT {
        let key = format!("SPRING_RATE_{corner}");
        if let Some(v) = setup.get("SUSPENSION", &key) {
            setup.set("SUSPENSION", &key, v * factor_front);
        }
    }
    for corner in REAR {
        let key = format!("SPRING_RATE_{corner}");
        if let Some(v) = setup.get("SUSPENSION", &key) {
            setup.set("SUSPENSION", &key, v * factor_rear);
        }
    }
    setup
}

fn apply_anti_bottoming(mut setup: Setup, category: CategoryTag, rake_deg: f64) -> Setup {
    let applies = matches!(category, CategoryTag::Formula | CategoryTag::Prototype) && rake_deg > 1.0;
    if !applies {
        return setup;
    }
    let slow_factor = 1.15_f64.sqrt();
    for corner in CORNERS {
        let spring_key = format!("SPRING_RATE_{corner}");
        if let Some(v) = setup.get("SUSPENSION", &spring_key) {
            setup.set("SUSPENSION", &spring_key, v * 1.15);
        }
        for field in ["DAMP_BUMP", "DAMP_REBOUND"] {
            let key = format!("{field}_{corner}");
            if let Some(v) = setup.get("SUSPENSION", &key) {
                setup.set("SUSPENSION", &key, v * slow_factor);
            }
        }
    }
    setup
}

fn cap_fast_damping(mut setup: Setup, track_type: TrackType) -> Setup {
    if !matches!(track_type, TrackType::Touge | TrackType::Street) {
        return setup;
    }
    for corner in CORNERS {
        let slow_bump = setup.get("SUSPENSION", &format!("DAMP_BUMP_{corner}"));
        let slow_rebound = setup.get("SUSPENSION", &format!("DAMP_REBOUND_{corner}"));

        if let Some(slow_bump) = slow_bump {
            let key = format!("DAMP_FAST_BUMP_{corner}");
            if let Some(fast) = setup.get("SUSPENSION", &key) {
                let cap = 0.5 * slow_bump;
                if fast > cap {
                    setup.set("SUSPENSION", &key, cap);
                }
            }
        }
        if let Some(slow_rebound) = slow_rebound {
            let key = format!("DAMP_FAST_REBOUND_{corner}");
            if let Some(fast) = setup.get("SUSPENSION", &key) {
                let cap = 0.5 * slow_rebound;
                if fast > cap {
                    setup.set("SUSPENSION", &key, cap);
                }
            }
        }
    }
    setup
}

#[allow(clippy::too_many_arguments)]
pub fn refine(
    setup: Setup,
    category: CategoryTag,
    rake_deg: f64,
    track_type: TrackType,
    car_id: &str,
    content_path: &Path,
    cache: &ParameterCache,
) -> Setup {
    let overrides = cache.car_overrides(car_id, content_path);
    let setup = correct_motion_ratio(setup, category, &overrides);
    let setup = apply_anti_bottoming(setup, category, rake_deg);
    cap_fast_damping(setup, track_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring_setup(k: f64) -> Setup {
        let mut s = Setup::new();
        for corner in CORNERS {
            s.set("SUSPENSION", &format!("SPRING_RATE_{corner}"), k);
        }
        s
    }

    #[test]
    fn motion_ratio_correction_matches_inverse_square() {
        let setup = spring_setup(100_500.0);
        let overrides = CarOverrides { motion_ratio_front: Some(0.9), motion_ratio_rear: Some(0.8) };
        let corrected = correct_motion_ratio(setup, CategoryTag::Gt, &overrides);
        let k_after = corrected.get("SUSPENSION", "SPRING_RATE_LF").unwrap();
        let expected = 100_500.0 / (0.9 * 0.9);
        assert!((k_after / expected - 1.0).abs() < 1e-6);
    }

    #[test]
    fn anti_bottoming_only_applies_for_formula_prototype_with_rake() {
        let mut setup = Setup::new();
        setup.set("SUSPENSION", "SPRING_RATE_LF", 100_000.0);
        setup.set("SUSPENSION", "DAMP_BUMP_LF", 50.0);
        setup.set("SUSPENSION", "DAMP_REBOUND_LF", 80.0);

        let unaffected = apply_anti_bottoming(setup.clone(), CategoryTag::Gt, 1.5);
        assert_eq!(unaffected.get("SUSPENSION", "SPRING_RATE_LF"), Some(100_000.0));

        let affected = apply_anti_bottoming(setup, CategoryTag::Formula, 1.5);
        assert!((affected.get("SUSPENSION", "SPRING_RATE_LF").unwrap() - 115_000.0).abs() < 1e-6);
    }

    #[test]
    fn fast_damper_cap_applies_on_touge_and_street() {
        let mut setup = Setup::new();
        setup.set("SUSPENSION", "DAMP_BUMP_LF", 50.0);
        setup.set("SUSPENSION", "DAMP_REBOUND_LF", 80.0);
        setup.set("SUSPENSION", "DAMP_FAST_BUMP_LF", 40.0);
        setup.set("SUSPENSION", "DAMP_FAST_REBOUND_LF", 70.0);

        let capped = cap_fast_damping(setup, TrackType::Touge);
        assert_eq!(capped.get("SUSPENSION", "DAMP_FAST_BUMP_LF"), Some(25.0));
        assert_eq!(capped.get("SUSPENSION", "DAMP_FAST_REBOUND_LF"), Some(40.0));
    }

    #[test]
    fn fast_damper_cap_leaves_already_lower_values_alone() {
        let mut setup = Setup::new();
        setup.set("SUSPENSION", "DAMP_BUMP_LF", 50.0);
        setup.set("SUSPENSION", "DAMP_FAST_BUMP_LF", 10.0);
        let capped = cap_fast_damping(setup, TrackType::Street);
        assert_eq!(capped.get("SUSPENSION", "DAMP_FAST_BUMP_LF"), Some(10.0));
    }
}
