//! C5: slider interdependency engine. Six named sliders (aero, rotation,
//! slide, aggression, drift, performance), each a fixed list of effects on
//! named (section, key) pairs. Applied after C4's physics refinement, never
//! before; sliders are about driver-intent shaping, not raw physics.

use crate::models::{Profile, Setup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderOp {
    Add,
    Multiply,
    Set,
}

#[derive(Debug, Clone, Copy)]
pub struct SliderEffect {
    pub section: &'static str,
    pub key: &'static str,
    pub op: SliderOp,
    pub magnitude: f64,
    pub description: &'static str,
}

const fn e(section: &'static str, key: &'static str, op: SliderOp, magnitude: f64, description: &'static str) -> SliderEffect {
    SliderEffect { section, key, op, magnitude, description }
}

/// Sliders normalized to [-1.0, 1.0] centered at 0.5: value=0.0 is the
/// "understeer" extreme, 0.5 is neutral, 1.0 is the "oversteer" extreme.
const CENTERED_SLIDERS: &[&str] = &["rotation", "slide"];

const AERO_EFFECTS: &[SliderEffect] = &[
    e("AERO", "WING_REAR", SliderOp::Add, 8.0, "more rear wing for stability"),
    e("AERO", "WING_FRONT", SliderOp::Add, 4.0, "more front wing to balance"),
    e("SUSPENSION", "RIDE_HEIGHT_LF", SliderOp::Add, -5.0, "lower front for aero efficiency"),
    e("SUSPENSION", "RIDE_HEIGHT_RF", SliderOp::Add, -5.0, "lower front for aero efficiency"),
    e("SUSPENSION", "RIDE_HEIGHT_LR", SliderOp::Add, 3.0, "raise rear for rake"),
    e("SUSPENSION", "RIDE_HEIGHT_RR", SliderOp::Add, 3.0, "raise rear for rake"),
    e("SUSPENSION", "SPRING_RATE_LR", SliderOp::Multiply, 0.15, "stiffer rear springs to hold platform"),
    e("SUSPENSION", "SPRING_RATE_RR", SliderOp::Multiply, 0.15, "stiffer rear springs to hold platform"),
    e("ARB", "REAR", SliderOp::Multiply, 0.10, "stiffer rear bar under more rear load"),
];

const ROTATION_EFFECTS: &[SliderEffect] = &[
    e("ALIGNMENT", "TOE_LR", SliderOp::Add, 0.4, "more rear toe-in sharpens turn-in"),
    e("ALIGNMENT", "TOE_RR", SliderOp::Add, 0.4, "more rear toe-in sharpens turn-in"),
    e("ARB", "REAR", SliderOp::Multiply, 0.30, "stiffer rear bar promotes rotation"),
    e("ARB", "FRONT", SliderOp::Multiply, -0.15, "softer front bar promotes rotation"),
    e("DIFFERENTIAL", "COAST", SliderOp::Add, -15.0, "less coast locking frees rear on entry"),
    e("BRAKES", "FRONT_BIAS", SliderOp::Add, -3.0, "rearward brake bias aids rotation"),
    e("ALIGNMENT", "CAMBER_LR", SliderOp::Add, 0.5, "less negative rear camber trades grip for rotation"),
    e("ALIGNMENT", "CAMBER_RR", SliderOp::Add, 0.5, "less negative rear camber trades grip for rotation"),
];

const SLIDE_EFFECTS: &[SliderEffect] = &[
    e("ALIGNMENT", "CAMBER_LR", SliderOp::Add, 1.5, "reduced rear camber loosens rear grip"),
    e("ALIGNMENT", "CAMBER_RR", SliderOp::Add, 1.5, "reduced rear camber loosens rear grip"),
    e("ALIGNMENT", "TOE_LR", SliderOp::Add, 0.3, "rear toe-in trims slide angle"),
    e("ALIGNMENT", "TOE_RR", SliderOp::Add, 0.3, "rear toe-in trims slide angle"),
    e("DIFFERENTIAL", "POWER", SliderOp::Add, 20.0, "more power lock sustains slide"),
    e("TYRES", "PRESSURE_LR", SliderOp::Add, 2.0, "higher rear pressure reduces rear mechanical grip"),
    e("TYRES", "PRESSURE_RR", SliderOp::Add, 2.0, "higher rear pressure reduces rear mechanical grip"),
    e("ALIGNMENT", "CAMBER_LF", SliderOp::Add, -0.5, "front camber kept planted while rear slides"),
    e("ALIGNMENT", "CAMBER_RF", SliderOp::Add, -0.5, "front camber kept planted while rear slides"),
];

const AGGRESSION_EFFECTS: &[SliderEffect] = &[
    e("SUSPENSION", "RIDE_HEIGHT_LF", SliderOp::Add, -8.0, "lower front for a sharper, aggressive platform"),
    e("SUSPENSION", "RIDE_HEIGHT_RF", SliderOp::Add, -8.0, "lower front for a sharper, aggressive platform"),
    e("SUSPENSION", "RIDE_HEIGHT_LR", SliderOp::Add, -6.0, "lower rear for a sharper, aggressive platform"),
    e("SUSPENSION", "RIDE_HEIGHT_RR", SliderOp::Add, -6.0, "lower rear for a sharper, aggressive platform"),
    e("SUSPENSION", "SPRING_RATE_LF", SliderOp::Multiply, 0.25, "stiffer springs for aggressive handling"),
    e("SUSPENSION", "SPRING_RATE_RF", SliderOp::Multiply, 0.25, "stiffer springs for aggressive handling"),
    e("SUSPENSION", "SPRING_RATE_LR", SliderOp::Multiply, 0.25, "stiffer springs for aggressive handling"),
    e("SUSPENSION", "SPRING_RATE_RR", SliderOp::Multiply, 0.25, "stiffer springs for aggressive handling"),
    e("SUSPENSION", "DAMP_REBOUND_LF", SliderOp::Multiply, 0.30, "stiffer rebound damping for aggressive handling"),
    e("SUSPENSION", "DAMP_REBOUND_RF", SliderOp::Multiply, 0.30, "stiffer rebound damping for aggressive handling"),
    e("SUSPENSION", "DAMP_REBOUND_LR", SliderOp::Multiply, 0.30, "stiffer rebound damping for aggressive handling"),
    e("SUSPENSION", "DAMP_REBOUND_RR", SliderOp::Multiply, 0.30, "stiffer rebound damping for aggressive handling"),
    e("SUSPENSION", "DAMP_BUMP_LF", SliderOp::Multiply, 0.20, "stiffer bump damping for aggressive handling"),
    e("SUSPENSION", "DAMP_BUMP_RF", SliderOp::Multiply, 0.20, "stiffer bump damping for aggressive handling"),
    e("SUSPENSION", "DAMP_BUMP_LR", SliderOp::Multiply, 0.20, "stiffer bump damping for aggressive handling"),
    e("SUSPENSION", "DAMP_BUMP_RR", SliderOp::Multiply, 0.20, "stiffer bump damping for aggressive handling"),
    e("BRAKES", "BRAKE_POWER_MULT", SliderOp::Multiply, 0.15, "stronger brakes for an aggressive driving style"),
];

const DRIFT_EFFECTS: &[SliderEffect] = &[
    e("DIFFERENTIAL", "POWER", SliderOp::Add, 40.0, "high power lock for sustained slide angle"),
    e("DIFFERENTIAL", "COAST", SliderOp::Add, 30.0, "high coast lock stabilizes entry"),
    e("DIFFERENTIAL", "PRELOAD", SliderOp::Add, 30.0, "high preload for predictable lock-up"),
    e("ALIGNMENT", "CAMBER_LR", SliderOp::Add, 2.5, "reduced rear camber for sustained slide angle"),
    e("ALIGNMENT", "CAMBER_RR", SliderOp::Add, 2.5, "reduced rear camber for sustained slide angle"),
    e("ALIGNMENT", "TOE_RR", SliderOp::Add, 0.5, "rear toe-out encourages rotation"),
    e("ALIGNMENT", "TOE_LR", SliderOp::Add, 0.5, "rear toe-out encourages rotation"),
    e("SUSPENSION", "SPRING_RATE_LR", SliderOp::Multiply, -0.20, "softer rear springs load the rear progressively"),
    e("SUSPENSION", "SPRING_RATE_RR", SliderOp::Multiply, -0.20, "softer rear springs load the rear progressively"),
    e("ALIGNMENT", "CAMBER_LF", SliderOp::Add, -1.0, "extra front camber keeps front end responsive"),
    e("ALIGNMENT", "CAMBER_RF", SliderOp::Add, -1.0, "extra front camber keeps front end responsive"),
    e("BRAKES", "FRONT_BIAS", SliderOp::Add, 5.0, "forward brake bias helps initiate the slide"),
    e("TYRES", "PRESSURE_LR", SliderOp::Add, 3.0, "higher rear pressure for a looser rear"),
    e("TYRES", "PRESSURE_RR", SliderOp::Add, 3.0, "higher rear pressure for a looser rear"),
];

const PERFORMANCE_EFFECTS: &[SliderEffect] = &[
    e("SUSPENSION", "DAMP_BUMP_LF", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_BUMP_RF", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_BUMP_LR", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_BUMP_RR", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_REBOUND_LF", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_REBOUND_RF", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_REBOUND_LR", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "DAMP_REBOUND_RR", SliderOp::Multiply, 0.40, "stiffer damping for outright performance"),
    e("SUSPENSION", "RIDE_HEIGHT_LF", SliderOp::Add, -6.0, "lower ride height for maximum aero/mechanical grip"),
    e("SUSPENSION", "RIDE_HEIGHT_RF", SliderOp::Add, -6.0, "lower ride height for maximum aero/mechanical grip"),
    e("SUSPENSION", "RIDE_HEIGHT_LR", SliderOp::Add, -4.0, "lower ride height for maximum aero/mechanical grip"),
    e("SUSPENSION", "RIDE_HEIGHT_RR", SliderOp::Add, -4.0, "lower ride height for maximum aero/mechanical grip"),
    e("TYRES", "PRESSURE_LF", SliderOp::Add, -1.0, "lower front pressure to grow the contact patch"),
    e("TYRES", "PRESSURE_RF", SliderOp::Add, -1.0, "lower front pressure to grow the contact patch"),
    e("TYRES", "PRESSURE_LR", SliderOp::Add, -0.5, "lower rear pressure to grow the contact patch"),
    e("TYRES", "PRESSURE_RR", SliderOp::Add, -0.5, "lower rear pressure to grow the contact patch"),
];

fn effects_for(slider_name: &str) -> Option<&'static [SliderEffect]> {
    match slider_name {
        "aero" => Some(AERO_EFFECTS),
        "rotation" => Some(ROTATION_EFFECTS),
        "slide" => Some(SLIDE_EFFECTS),
        "aggression" => Some(AGGRESSION_EFFECTS),
        "drift" => Some(DRIFT_EFFECTS),
        "performance" => Some(PERFORMANCE_EFFECTS),
        _ => None,
    }
}

fn aliases_for(key: &str) -> &'static [&'static str] {
    match key {
        "WING_REAR" => &["WING_1", "REAR_WING", "RWING", "WING"],
        "WING_FRONT" => &["WING_0", "FRONT_WING", "FWING"],
        "FRONT_BIAS" => &["BRAKE_BIAS", "BIAS"],
        "BRAKE_POWER_MULT" => &["BRAKE_POWER"],
        _ => &[],
    }
}

fn normalize(slider_name: &str, value: f64) -> f64 {
    if CENTERED_SLIDERS.contains(&slider_name) {
        (value - 0.5) * 2.0
    } else {
        value
    }
}

fn is_neutral(slider_name: &str, value: f64) -> bool {
    if CENTERED_SLIDERS.contains(&slider_name) {
        value == 0.5
    } else {
        value == 0.0
    }
}

/// Apply one slider's effects to `setup`, returning the modified setup and a
/// human-readable change log. Unresolvable keys are recorded as `[SKIP]`
/// entries rather than treated as errors; a car missing a channel simply
/// doesn't get that effect.
pub fn apply_slider(mut setup: Setup, slider_name: &str, slider_value: f64, is_click_based: bool) -> (Setup, Vec<String>) {
    let Some(effects) = effects_for(slider_name) else {
        return (setup, vec![format!("Unknown slider: {slider_name}")]);
    };

    let normalized = normalize(slider_name, slider_value);
    let mut changes = Vec::new();

    for effect in effects {
        let magnitude = effect.magnitude * normalized;

        let current = match setup.get(effect.section, effect.key) {
            Some(v) => Some(v),
            None => {
                let alts = aliases_for(effect.key);
                setup
                    .get_with_aliases(effect.section, effect.key, alts)
                    .map(|(_, v)| v)
            }
        };

        let Some(current) = current else {
            changes.push(format!("[SKIP] {}: not found in setup", effect.key));
            continue;
        };

        let mut new_value = match effect.op {
            SliderOp::Add => current + magnitude,
            SliderOp::Multiply => current * (1.0 + magnitude),
            SliderOp::Set => magnitude,
        };

        if is_click_based
            && effect.section == "SUSPENSION"
            && (effect.key.contains("SPRING") || effect.key.contains("DAMP"))
        {
            new_value = match effect.op {
                SliderOp::Add => current + (magnitude * 0.1),
                SliderOp::Multiply => current * (1.0 + magnitude * 0.5),
                SliderOp::Set => new_value,
            };
        }

        setup.set(effect.section, effect.key, new_value);
        changes.push(format!(
            "[{}] {}: {current:.2} -> {new_value:.2} ({})",
            slider_name.to_uppercase(),
            effect.key,
            effect.description
        ));
    }

    (setup, changes)
}

/// C5 entry point. Applies all six sliders from `profile` in a fixed order,
/// skipping any slider sitting at its neutral value.
pub fn apply_all(mut setup: Setup, profile: &Profile, is_click_based: bool) -> (Setup, Vec<String>) {
    let mut all_changes = Vec::new();
    let order: [(&str, f64); 6] = [
        ("rotation", profile.rotation),
        ("slide", profile.slide),
        ("aggression", profile.aggression),
        ("drift", profile.drift),
        ("performance", profile.performance),
        ("aero", profile.aero),
    ];

    for (name, value) in order {
        if is_neutral(name, value) {
            continue;
        }
        let (next, changes) = apply_slider(setup, name, value, is_click_based);
        setup = next;
        all_changes.extend(changes);
    }

    (setup, all_changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_setup() -> Setup {
        let mut s = Setup::new();
        s.set("SUSPENSION", "SPRING_RATE_LR", 100_000.0);
        s.set("SUSPENSION", "SPRING_RATE_RR", 100_000.0);
        s.set("ARB", "REAR", 5.0);
        s.set("AERO", "WING_REAR", 4.0);
        s
    }

    #[test]
    fn neutral_profile_produces_no_changes() {
        let setup = base_setup();
        let (out, changes) = apply_all(setup.clone(), &Profile::default(), false);
        assert!(changes.is_empty());
        assert_eq!(out, setup);
    }

    #[test]
    fn aero_slider_at_full_value_adds_full_magnitude() {
        let setup = base_setup();
        let (out, changes) = apply_slider(setup, "aero", 1.0, false);
        assert_eq!(out.get("AERO", "WING_REAR"), Some(12.0));
        assert!(!changes.is_empty());
    }

    #[test]
    fn rotation_slider_centered_at_zero_moves_negative() {
        let setup = base_setup();
        let (out, _) = apply_slider(setup, "rotation", 0.0, false);
        let rear_arb = out.get("ARB", "REAR").unwrap();
        assert!((rear_arb - 5.0 * (1.0 - 0.30)).abs() < 1e-9);
    }

    #[test]
    fn click_based_attenuates_spring_multiply() {
        let setup = base_setup();
        let (out, _) = apply_slider(setup, "aero", 1.0, true);
        let k = out.get("SUSPENSION", "SPRING_RATE_LR").unwrap();
        assert!((k - 100_000.0 * (1.0 + 0.15 * 0.5)).abs() < 1e-6);
    }

    #[test]
    fn wing_rear_alias_resolution_falls_back() {
        let mut setup = Setup::new();
        setup.set("AERO", "WING_1", 3.0);
        let (out, changes) = apply_slider(setup, "aero", 1.0, false);
        assert!(changes.iter().any(|c| c.contains("WING_REAR")));
        assert_eq!(out.get("AERO", "WING_1"), Some(3.0));
    }
}
