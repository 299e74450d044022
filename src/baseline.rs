//! C3: physics baseline builder. Produces a fully populated `Setup` in
//! physical units from category targets, the car, the track, and conditions.
//! No motion-ratio correction happens here; that is C4's job.

use std::f64::consts::PI;

use crate::models::{CarDescriptor, Conditions, Profile, Setup, TrackDescriptor};
use crate::pipeline::TrackType;
use crate::targets::CategoryTargets;

const DAMPER_SCALE: f64 = 0.01;
const REFERENCE_WHEELBASE_MM: f64 = 2600.0;
const ASSUMED_WHEELBASE_MM: f64 = 2600.0;
const DEFAULT_FUEL: f64 = 30.0;

/// Cold starting pressure that ramps to `hot_target` over `laps_to_optimal`
/// laps, then compensated for road/ambient temperature.
fn cold_pressure(hot_target: f64, gain_per_lap: f64, conditions: &Conditions) -> f64 {
    const LAPS_TO_OPTIMAL: f64 = 3.0;
    let mut p = hot_target - gain_per_lap * LAPS_TO_OPTIMAL;

    if conditions.road_c < 20.0 {
        p += (20.0 - conditions.road_c) * 0.075;
    } else if conditions.road_c > 35.0 {
        p -= (conditions.road_c - 35.0) * 0.05;
    }

    if conditions.ambient_c < 15.0 {
        p += (15.0 - conditions.ambient_c) * 0.03;
    } else if conditions.ambient_c > 30.0 {
        p -= (conditions.ambient_c - 30.0) * 0.02;
    }

    p.clamp(18.0, 35.0)
}

fn wheel_rate(frequency_hz: f64, corner_mass_kg: f64) -> f64 {
    let omega = 2.0 * PI * frequency_hz;
    omega * omega * corner_mass_kg
}

struct Damping {
    bump: f64,
    rebound: f64,
    fast_bump: f64,
    fast_rebound: f64,
}

fn damping_for(spring_rate: f64, corner_mass_kg: f64, targets: &CategoryTargets) -> Damping {
    let c_critical = 2.0 * (spring_rate * corner_mass_kg).sqrt();
    let total = 0.7 * c_critical;
    let bump = total / (1.0 + targets.bump_rebound_ratio);
    let rebound = bump * targets.bump_rebound_ratio;
    Damping {
        bump: bump * DAMPER_SCALE,
        rebound: rebound * DAMPER_SCALE,
        fast_bump: bump * targets.fast_slow_ratio * DAMPER_SCALE,
        fast_rebound: rebound * targets.fast_slow_ratio * DAMPER_SCALE,
    }
}

fn adjusted_toe(base_toe_deg: f64, wheelbase_mm: f64) -> f64 {
    let scale = REFERENCE_WHEELBASE_MM / wheelbase_mm;
    (base_toe_deg * scale).clamp(-0.5, 0.5)
}

/// Build the physical-unit baseline. `profile` is accepted for signature
/// symmetry with the other pipeline steps but C3 does not read it; sliders
/// are entirely C5's concern.
pub fn build(
    car: &CarDescriptor,
    _track: &TrackDescriptor,
    targets: &CategoryTargets,
    _profile: &Profile,
    conditions: &Conditions,
    track_type: TrackType,
    track_is_high_speed: bool,
    track_is_low_speed: bool,
) -> Setup {
    let mut setup = Setup::new();
    let corner_mass = car.corner_mass_kg();

    let cold_front = cold_pressure(targets.hot_pressure_front_psi, targets.pressure_gain_per_lap_psi, conditions);
    let cold_rear = cold_pressure(targets.hot_pressure_rear_psi, targets.pressure_gain_per_lap_psi, conditions);
    setup.set("TYRES", "PRESSURE_LF", cold_front);
    setup.set("TYRES", "PRESSURE_RF", cold_front);
    setup.set("TYRES", "PRESSURE_LR", cold_rear);
    setup.set("TYRES", "PRESSURE_RR", cold_rear);

    let k_front = wheel_rate(targets.frequency_front_hz, corner_mass);
    let k_rear = wheel_rate(targets.frequency_rear_hz, corner_mass);
    setup.set("SUSPENSION", "SPRING_RATE_LF", k_front);
    setup.set("SUSPENSION", "SPRING_RATE_RF", k_front);
    setup.set("SUSPENSION", "SPRING_RATE_LR", k_rear);
    setup.set("SUSPENSION", "SPRING_RATE_RR", k_rear);

    let d_front = damping_for(k_front, corner_mass, targets);
    let d_rear = damping_for(k_rear, corner_mass, targets);
    for (suffix, d) in [("LF", &d_front), ("RF", &d_front), ("LR", &d_rear), ("RR", &d_rear)] {
        setup.set("SUSPENSION", &format!("DAMP_BUMP_{suffix}"), d.bump);
        setup.set("SUSPENSION", &format!("DAMP_REBOUND_{suffix}"), d.rebound);
        setup.set("SUSPENSION", &format!("DAMP_FAST_BUMP_{suffix}"), d.fast_bump);
        setup.set("SUSPENSION", &format!("DAMP_FAST_REBOUND_{suffix}"), d.fast_rebound);
    }

    let (rh_bump_front, rh_bump_rear) = match track_type {
        TrackType::Touge => (15.0, 15.0),
        TrackType::Street => (10.0, 10.0),
        TrackType::Circuit | TrackType::Drift => (0.0, 0.0),
    };
    let rh_front = targets.ride_height_front_mm + rh_bump_front;
    let rh_rear = targets.ride_height_rear_mm + rh_bump_rear;
    setup.set("SUSPENSION", "RIDE_HEIGHT_LF", rh_front);
    setup.set("SUSPENSION", "RIDE_HEIGHT_RF", rh_front);
    setup.set("SUSPENSION", "RIDE_HEIGHT_LR", rh_rear);
    setup.set("SUSPENSION", "RIDE_HEIGHT_RR", rh_rear);

    let wing_multiplier = if track_is_high_speed {
        0.7
    } else if track_is_low_speed {
        1.3
    } else {
        1.0
    };
    let total_wing = 5.0 * wing_multiplier;
    let wing_front = (total_wing * (1.0 - targets.aero_balance)).clamp(0.0, 5.0);
    let wing_rear = (total_wing * targets.aero_balance).clamp(0.0, 5.0);
    setup.set("AERO", "WING_FRONT", wing_front);
    setup.set("AERO", "WING_REAR", wing_rear);

    let torque = car.torque_nm();
    let (mut power, mut coast, mut preload) = (targets.diff_power_pct, targets.diff_coast_pct, targets.diff_preload_nm);
    use crate::models::car::Drivetrain;
    match car.drivetrain {
        Drivetrain::Rwd => {
            if torque > 600.0 {
                power += 10.0;
                coast += 5.0;
                preload += 5.0;
            } else if torque > 400.0 {
                power += 5.0;
                coast += 3.0;
            }
        }
        Drivetrain::Fwd => {
            power -= 15.0;
            coast -= 10.0;
            preload -= 10.0;
        }
        Drivetrain::Awd => {
            power += 5.0;
            coast += 5.0;
        }
    }
    setup.set("DIFFERENTIAL", "POWER", power.clamp(0.0, 100.0));
    setup.set("DIFFERENTIAL", "COAST", coast.clamp(0.0, 100.0));
    setup.set("DIFFERENTIAL", "PRELOAD", preload.clamp(0.0, 200.0));

    let toe_front = adjusted_toe(targets.toe_front_deg, ASSUMED_WHEELBASE_MM);
    let toe_rear = adjusted_toe(targets.toe_rear_deg, ASSUMED_WHEELBASE_MM);
    setup.set("ALIGNMENT", "CAMBER_LF", targets.camber_front_deg);
    setup.set("ALIGNMENT", "CAMBER_RF", targets.camber_front_deg);
    setup.set("ALIGNMENT", "CAMBER_LR", targets.camber_rear_deg);
    setup.set("ALIGNMENT", "CAMBER_RR", targets.camber_rear_deg);
    setup.set("ALIGNMENT", "TOE_LF", toe_front);
    setup.set("ALIGNMENT", "TOE_RF", toe_front);
    setup.set("ALIGNMENT", "TOE_LR", toe_rear);
    setup.set("ALIGNMENT", "TOE_RR", toe_rear);
    setup.set("ALIGNMENT", "CASTER_LF", targets.caster_deg);
    setup.set("ALIGNMENT", "CASTER_RF", targets.caster_deg);

    setup.set("ARB", "ARB_FRONT", targets.arb_front);
    setup.set("ARB", "ARB_REAR", targets.arb_rear);

    setup.set("BRAKES", "FRONT_BIAS", targets.brake_bias_front_pct);

    setup.set("FUEL", "FUEL", DEFAULT_FUEL);

    setup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryTag;
    use crate::models::car::Drivetrain;
    use crate::targets::targets_for;
    use std::path::PathBuf;

    fn gt_car() -> CarDescriptor {
        CarDescriptor {
            car_id: "gt3".into(),
            display_name: "gt3".into(),
            brand: String::new(),
            class_hint: String::new(),
            drivetrain: Drivetrain::Rwd,
            power_hp: Some(500.0),
            weight_kg: Some(1300.0),
            content_path: PathBuf::new(),
        }
    }

    fn neutral_track() -> TrackDescriptor {
        TrackDescriptor {
            track_id: "ks_nurburgring".into(),
            display_name: "Nurburgring".into(),
            config: String::new(),
            type_hint: String::new(),
            length_m: None,
        }
    }

    #[test]
    fn gt3_front_spring_matches_expected_wheel_rate() {
        let car = gt_car();
        let targets = targets_for(CategoryTag::Gt);
        let setup = build(
            &car,
            &neutral_track(),
            targets,
            &Profile::default(),
            &Conditions { ambient_c: 25.0, road_c: 30.0, weather: crate::models::conditions::Weather::Dry },
            TrackType::Circuit,
            false,
            false,
        );
        let k = setup.get("SUSPENSION", "SPRING_RATE_LF").unwrap();
        // (2*pi*2.8)^2 * 325 ~= 100_500
        assert!((k - 100_500.0).abs() / 100_500.0 < 0.01, "k={k}");
    }

    #[test]
    fn pressures_are_axle_symmetric() {
        let car = gt_car();
        let targets = targets_for(CategoryTag::Gt);
        let setup = build(
            &car,
            &neutral_track(),
            targets,
            &Profile::default(),
            &Conditions::default(),
            TrackType::Circuit,
            false,
            false,
        );
        assert_eq!(
            setup.get("TYRES", "PRESSURE_LF"),
            setup.get("TYRES", "PRESSURE_RF")
        );
        assert_eq!(
            setup.get("TYRES", "PRESSURE_LR"),
            setup.get("TYRES", "PRESSURE_RR")
        );
    }

    #[test]
    fn fwd_street_sport_reduces_differential() {
        let mut car = gt_car();
        car.drivetrain = Drivetrain::Fwd;
        let targets = targets_for(CategoryTag::StreetSport);
        let setup = build(
            &car,
            &neutral_track(),
            targets,
            &Profile::default(),
            &Conditions::default(),
            TrackType::Circuit,
            false,
            false,
        );
        assert_eq!(setup.get("DIFFERENTIAL", "POWER"), Some(30.0));
        assert_eq!(setup.get("DIFFERENTIAL", "COAST"), Some(25.0));
        assert_eq!(setup.get("DIFFERENTIAL", "PRELOAD"), Some(15.0));
    }
}
