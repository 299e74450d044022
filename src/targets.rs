//! C2: static, read-only category targets table.

use crate::category::CategoryTag;

/// Engineer-validated per-category physical targets. One record per
/// `CategoryTag`; immutable for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTargets {
    pub frequency_front_hz: f64,
    pub frequency_rear_hz: f64,
    pub damping_ratio: f64,
    pub bump_rebound_ratio: f64,
    pub fast_slow_ratio: f64,
    pub hot_pressure_front_psi: f64,
    pub hot_pressure_rear_psi: f64,
    pub pressure_gain_per_lap_psi: f64,
    pub camber_front_deg: f64,
    pub camber_rear_deg: f64,
    pub toe_front_deg: f64,
    pub toe_rear_deg: f64,
    pub caster_deg: f64,
    pub rake_deg: f64,
    pub ride_height_front_mm: f64,
    pub ride_height_rear_mm: f64,
    pub aero_balance: f64,
    pub diff_power_pct: f64,
    pub diff_coast_pct: f64,
    pub diff_preload_nm: f64,
    pub arb_front: f64,
    pub arb_rear: f64,
    pub brake_bias_front_pct: f64,
}

/// `bump_rebound_ratio` and `fast_slow_ratio` are not tabulated per category
/// upstream; race-style setups run stiffer rebound than bump and fast valving
/// softer than slow, so a single pair of system constants is used across
/// categories as the baseline, consistent with the baseline builder treating
/// the 0.01 damper scale as a system constant rather than a per-car number.
const BUMP_REBOUND_RATIO: f64 = 1.6;
const FAST_SLOW_RATIO: f64 = 0.5;

pub fn targets_for(category: CategoryTag) -> &'static CategoryTargets {
    match category {
        CategoryTag::Formula => &FORMULA,
        CategoryTag::Prototype => &PROTOTYPE,
        CategoryTag::Gt => &GT,
        CategoryTag::StreetSport => &STREET_SPORT,
        CategoryTag::Street => &STREET,
        CategoryTag::Vintage => &VINTAGE,
        CategoryTag::Drift => &DRIFT,
    }
}

static FORMULA: CategoryTargets = CategoryTargets {
    frequency_front_hz: 3.8,
    frequency_rear_hz: 4.2,
    damping_ratio: 0.65,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 24.0,
    hot_pressure_rear_psi: 23.0,
    pressure_gain_per_lap_psi: 1.2,
    camber_front_deg: -3.5,
    camber_rear_deg: -2.0,
    toe_front_deg: -0.03,
    toe_rear_deg: 0.08,
    caster_deg: 5.5,
    rake_deg: 1.5,
    ride_height_front_mm: 35.0,
    ride_height_rear_mm: 50.0,
    aero_balance: 0.50,
    diff_power_pct: 75.0,
    diff_coast_pct: 55.0,
    diff_preload_nm: 40.0,
    arb_front: 6.0,
    arb_rear: 5.0,
    brake_bias_front_pct: 56.0,
};

static PROTOTYPE: CategoryTargets = CategoryTargets {
    frequency_front_hz: 3.5,
    frequency_rear_hz: 3.8,
    damping_ratio: 0.68,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 26.0,
    hot_pressure_rear_psi: 25.5,
    pressure_gain_per_lap_psi: 1.0,
    camber_front_deg: -3.8,
    camber_rear_deg: -2.5,
    toe_front_deg: -0.04,
    toe_rear_deg: 0.10,
    caster_deg: 5.8,
    rake_deg: 1.8,
    ride_height_front_mm: 40.0,
    ride_height_rear_mm: 58.0,
    aero_balance: 0.52,
    diff_power_pct: 70.0,
    diff_coast_pct: 55.0,
    diff_preload_nm: 35.0,
    arb_front: 6.0,
    arb_rear: 5.0,
    brake_bias_front_pct: 57.0,
};

static GT: CategoryTargets = CategoryTargets {
    frequency_front_hz: 2.8,
    frequency_rear_hz: 3.0,
    damping_ratio: 0.70,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 27.5,
    hot_pressure_rear_psi: 27.0,
    pressure_gain_per_lap_psi: 0.8,
    camber_front_deg: -4.0,
    camber_rear_deg: -3.0,
    toe_front_deg: -0.05,
    toe_rear_deg: 0.15,
    caster_deg: 6.0,
    rake_deg: 0.8,
    ride_height_front_mm: 50.0,
    ride_height_rear_mm: 58.0,
    aero_balance: 0.55,
    diff_power_pct: 65.0,
    diff_coast_pct: 50.0,
    diff_preload_nm: 30.0,
    arb_front: 5.0,
    arb_rear: 4.0,
    brake_bias_front_pct: 58.0,
};

static STREET_SPORT: CategoryTargets = CategoryTargets {
    frequency_front_hz: 2.2,
    frequency_rear_hz: 2.4,
    damping_ratio: 0.55,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 30.0,
    hot_pressure_rear_psi: 28.0,
    pressure_gain_per_lap_psi: 0.6,
    camber_front_deg: -2.8,
    camber_rear_deg: -2.2,
    toe_front_deg: -0.02,
    toe_rear_deg: 0.12,
    caster_deg: 5.5,
    rake_deg: 0.3,
    ride_height_front_mm: 90.0,
    ride_height_rear_mm: 95.0,
    aero_balance: 0.52,
    diff_power_pct: 45.0,
    diff_coast_pct: 35.0,
    diff_preload_nm: 25.0,
    arb_front: 4.0,
    arb_rear: 3.0,
    brake_bias_front_pct: 58.0,
};

static STREET: CategoryTargets = CategoryTargets {
    frequency_front_hz: 1.8,
    frequency_rear_hz: 2.0,
    damping_ratio: 0.50,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 32.0,
    hot_pressure_rear_psi: 30.0,
    pressure_gain_per_lap_psi: 0.5,
    camber_front_deg: -2.0,
    camber_rear_deg: -1.5,
    toe_front_deg: 0.0,
    toe_rear_deg: 0.10,
    caster_deg: 5.0,
    rake_deg: 0.0,
    ride_height_front_mm: 100.0,
    ride_height_rear_mm: 105.0,
    aero_balance: 0.50,
    diff_power_pct: 40.0,
    diff_coast_pct: 30.0,
    diff_preload_nm: 20.0,
    arb_front: 3.0,
    arb_rear: 3.0,
    brake_bias_front_pct: 60.0,
};

static VINTAGE: CategoryTargets = CategoryTargets {
    frequency_front_hz: 1.5,
    frequency_rear_hz: 1.6,
    damping_ratio: 0.45,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 28.0,
    hot_pressure_rear_psi: 26.0,
    pressure_gain_per_lap_psi: 0.4,
    camber_front_deg: -1.5,
    camber_rear_deg: -1.0,
    toe_front_deg: 0.0,
    toe_rear_deg: 0.05,
    caster_deg: 4.0,
    rake_deg: 0.0,
    ride_height_front_mm: 120.0,
    ride_height_rear_mm: 125.0,
    aero_balance: 0.45,
    diff_power_pct: 30.0,
    diff_coast_pct: 20.0,
    diff_preload_nm: 10.0,
    arb_front: 2.0,
    arb_rear: 2.0,
    brake_bias_front_pct: 55.0,
};

static DRIFT: CategoryTargets = CategoryTargets {
    frequency_front_hz: 2.5,
    frequency_rear_hz: 1.8,
    damping_ratio: 0.60,
    bump_rebound_ratio: BUMP_REBOUND_RATIO,
    fast_slow_ratio: FAST_SLOW_RATIO,
    hot_pressure_front_psi: 32.0,
    hot_pressure_rear_psi: 36.0,
    pressure_gain_per_lap_psi: 0.7,
    camber_front_deg: -5.0,
    camber_rear_deg: 0.0,
    toe_front_deg: -0.05,
    toe_rear_deg: 0.30,
    caster_deg: 7.0,
    rake_deg: 0.2,
    ride_height_front_mm: 110.0,
    ride_height_rear_mm: 120.0,
    aero_balance: 0.60,
    diff_power_pct: 85.0,
    diff_coast_pct: 65.0,
    diff_preload_nm: 50.0,
    arb_front: 5.0,
    arb_rear: 6.0,
    brake_bias_front_pct: 65.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gt_matches_the_engineer_validated_table() {
        let t = targets_for(CategoryTag::Gt);
        assert_eq!(t.frequency_front_hz, 2.8);
        assert_eq!(t.frequency_rear_hz, 3.0);
        assert_eq!(t.hot_pressure_front_psi, 27.5);
        assert_eq!(t.diff_power_pct, 65.0);
        assert_eq!(t.brake_bias_front_pct, 58.0);
    }

    #[test]
    fn all_categories_have_aero_balance_in_envelope() {
        for cat in [
            CategoryTag::Formula,
            CategoryTag::Prototype,
            CategoryTag::Gt,
            CategoryTag::StreetSport,
            CategoryTag::Street,
            CategoryTag::Vintage,
            CategoryTag::Drift,
        ] {
            let t = targets_for(cat);
            assert!((0.45..=0.60).contains(&t.aero_balance));
        }
    }
}
