//! C8: smart converter. Turns a physical-unit value into the integer the
//! game setup file actually stores, either a linearly-interpolated click
//! index or a clamped absolute value, depending on what the car's own
//! sample files say it uses.
//!
//! The per-category click tables below are transcribed from the
//! category-default range tables this component is grounded on. Two gaps in
//! that source are filled in here rather than left unhandled: it has no
//! `street_sport` entry at all, and its `street`/`drift`/`vintage` entries
//! omit fast-damper ranges. Both gaps are documented supplements, not
//! invented from nothing: `street_sport` sits between `street` and `gt`
//! (same shape as the category sits between those two elsewhere in this
//! crate), and the missing fast-damper ranges are derived as roughly
//! two-thirds of that category's slow-damper range, mirroring the
//! `fast_slow_ratio` relationship `baseline.rs` already uses to build fast
//! dampers from slow ones.

use crate::category::CategoryTag;

#[derive(Debug, Clone, Copy)]
pub struct ClickRange {
    pub min_value: f64,
    pub max_value: f64,
    pub max_clicks: u32,
}

impl ClickRange {
    const fn absolute(min: f64, max: f64) -> Self {
        Self { min_value: min, max_value: max, max_clicks: 0 }
    }

    const fn clicks(min: f64, max: f64, max_clicks: u32) -> Self {
        Self { min_value: min, max_value: max, max_clicks }
    }

    /// Interpolate `value` into a click index, or clamp it as an absolute
    /// value when `max_clicks == 0`.
    fn convert(&self, value: f64) -> i64 {
        if self.max_clicks == 0 {
            return value.clamp(self.min_value, self.max_value).round() as i64;
        }
        let step = (self.max_value - self.min_value) / self.max_clicks as f64;
        if step <= 0.0 {
            return 0;
        }
        let click = ((value - self.min_value) / step).clamp(0.0, self.max_clicks as f64);
        click.round() as i64
    }
}

pub struct ClickTable {
    pub spring_front: ClickRange,
    pub spring_rear: ClickRange,
    pub damper_bump: ClickRange,
    pub damper_rebound: ClickRange,
    pub damper_fast_bump: ClickRange,
    pub damper_fast_rebound: ClickRange,
    pub arb: ClickRange,
    pub wing: ClickRange,
}

fn table_for(category: CategoryTag) -> &'static ClickTable {
    match category {
        CategoryTag::Gt => &GT_TABLE,
        CategoryTag::Formula => &FORMULA_TABLE,
        CategoryTag::Prototype => &PROTOTYPE_TABLE,
        CategoryTag::StreetSport => &STREET_SPORT_TABLE,
        CategoryTag::Street => &STREET_TABLE,
        CategoryTag::Drift => &DRIFT_TABLE,
        CategoryTag::Vintage => &VINTAGE_TABLE,
    }
}

static GT_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::clicks(80_000.0, 200_000.0, 15),
    spring_rear: ClickRange::clicks(80_000.0, 200_000.0, 15),
    damper_bump: ClickRange::clicks(1500.0, 6000.0, 15),
    damper_rebound: ClickRange::clicks(3000.0, 12_000.0, 15),
    damper_fast_bump: ClickRange::clicks(1000.0, 4000.0, 15),
    damper_fast_rebound: ClickRange::clicks(2000.0, 8000.0, 15),
    arb: ClickRange::clicks(0.0, 10.0, 10),
    wing: ClickRange::clicks(0.0, 10.0, 10),
};

static FORMULA_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::clicks(120_000.0, 300_000.0, 20),
    spring_rear: ClickRange::clicks(120_000.0, 300_000.0, 20),
    damper_bump: ClickRange::clicks(2000.0, 8000.0, 20),
    damper_rebound: ClickRange::clicks(4000.0, 16_000.0, 20),
    damper_fast_bump: ClickRange::clicks(1500.0, 6000.0, 20),
    damper_fast_rebound: ClickRange::clicks(3000.0, 12_000.0, 20),
    arb: ClickRange::clicks(0.0, 15.0, 15),
    wing: ClickRange::clicks(0.0, 20.0, 20),
};

static PROTOTYPE_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::clicks(150_000.0, 350_000.0, 20),
    spring_rear: ClickRange::clicks(150_000.0, 350_000.0, 20),
    damper_bump: ClickRange::clicks(2500.0, 10_000.0, 20),
    damper_rebound: ClickRange::clicks(5000.0, 20_000.0, 20),
    damper_fast_bump: ClickRange::clicks(2000.0, 8000.0, 20),
    damper_fast_rebound: ClickRange::clicks(4000.0, 16_000.0, 20),
    arb: ClickRange::clicks(0.0, 15.0, 15),
    wing: ClickRange::clicks(0.0, 25.0, 25),
};

// Supplement: no source entry exists for street_sport. Built as an
// interpolation between `street` (absolute, soft) and `gt` (click-based,
// stiff) — click-based like gt, since street_sport cars in this crate are
// aftermarket-coilover territory rather than bone-stock road cars.
static STREET_SPORT_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::clicks(50_000.0, 140_000.0, 12),
    spring_rear: ClickRange::clicks(50_000.0, 140_000.0, 12),
    damper_bump: ClickRange::clicks(1200.0, 5000.0, 12),
    damper_rebound: ClickRange::clicks(2500.0, 10_000.0, 12),
    damper_fast_bump: ClickRange::clicks(800.0, 3300.0, 12),
    damper_fast_rebound: ClickRange::clicks(1600.0, 6600.0, 12),
    arb: ClickRange::clicks(0.0, 8.0, 8),
    wing: ClickRange::clicks(0.0, 8.0, 8),
};

// Supplement: source has no fast-damper entries for street. Derived as
// two-thirds of the slow-damper range, matching `fast_slow_ratio` elsewhere.
static STREET_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::absolute(25_000.0, 80_000.0),
    spring_rear: ClickRange::absolute(25_000.0, 80_000.0),
    damper_bump: ClickRange::absolute(1000.0, 4000.0),
    damper_rebound: ClickRange::absolute(2000.0, 8000.0),
    damper_fast_bump: ClickRange::absolute(670.0, 2680.0),
    damper_fast_rebound: ClickRange::absolute(1340.0, 5360.0),
    arb: ClickRange::absolute(0.0, 50_000.0),
    wing: ClickRange::clicks(0.0, 5.0, 5),
};

static DRIFT_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::clicks(40_000.0, 120_000.0, 10),
    spring_rear: ClickRange::clicks(30_000.0, 100_000.0, 10),
    damper_bump: ClickRange::clicks(1200.0, 5000.0, 10),
    damper_rebound: ClickRange::clicks(2500.0, 10_000.0, 10),
    // Supplement: source has no fast-damper entry for drift.
    damper_fast_bump: ClickRange::clicks(800.0, 3350.0, 10),
    damper_fast_rebound: ClickRange::clicks(1670.0, 6700.0, 10),
    arb: ClickRange::clicks(0.0, 8.0, 8),
    wing: ClickRange::clicks(0.0, 5.0, 5),
};

static VINTAGE_TABLE: ClickTable = ClickTable {
    spring_front: ClickRange::absolute(20_000.0, 60_000.0),
    spring_rear: ClickRange::absolute(20_000.0, 60_000.0),
    damper_bump: ClickRange::absolute(800.0, 3000.0),
    damper_rebound: ClickRange::absolute(1500.0, 6000.0),
    // Supplement: source has no fast-damper entry for vintage.
    damper_fast_bump: ClickRange::absolute(530.0, 2000.0),
    damper_fast_rebound: ClickRange::absolute(1000.0, 4000.0),
    arb: ClickRange::clicks(0.0, 5.0, 5),
    wing: ClickRange::absolute(0.0, 0.0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamFamily {
    Pressure,
    Camber,
    Toe,
    DiffPower,
    DiffCoast,
    DiffPreload,
    BrakeBias,
    SpringFront,
    SpringRear,
    DamperBump,
    DamperRebound,
    DamperFastBump,
    DamperFastRebound,
    Arb,
    Wing,
    RideHeight,
    Caster,
    BrakePower,
}

/// Converted value plus a short human-readable log line, mirroring the
/// `(int, log_string)` pair the originating conversion logic returns.
pub struct Converted {
    pub value: i64,
    pub log: String,
}

/// `convert`: family-specific rounding/clamping/click-interpolation.
/// `existing_value` is the value already present in the car's sample setup
/// file for this parameter, if any; it drives the toe scale-detection and
/// the spring/damper/arb/wing click-vs-absolute branch.
pub fn convert(category: CategoryTag, family: ParamFamily, physical_value: f64, existing_value: Option<f64>) -> Converted {
    match family {
        ParamFamily::Pressure => {
            let v = physical_value.round().clamp(20.0, 35.0) as i64;
            Converted { value: v, log: format!("pressure: {physical_value:.1} psi -> {v}") }
        }
        ParamFamily::Camber => {
            let v = (physical_value * 10.0).round().clamp(-50.0, 0.0) as i64;
            Converted { value: v, log: format!("camber: {physical_value:.2} deg -> {v}") }
        }
        ParamFamily::Toe => {
            let use_hundredths = existing_value.is_some_and(|e| e.abs() > 50.0);
            let (scale, clamp_bound) = if use_hundredths { (100.0, 300.0) } else { (10.0, 30.0) };
            let v = (physical_value * scale).round().clamp(-clamp_bound, clamp_bound) as i64;
            Converted { value: v, log: format!("toe: {physical_value:.3} deg -> {v} (x{scale})") }
        }
        ParamFamily::DiffPower | ParamFamily::DiffCoast => {
            let v = physical_value.round().clamp(0.0, 100.0) as i64;
            Converted { value: v, log: format!("diff: {physical_value:.1}% -> {v}") }
        }
        ParamFamily::DiffPreload => {
            let v = physical_value.round().clamp(0.0, 200.0) as i64;
            Converted { value: v, log: format!("preload: {physical_value:.1} Nm -> {v}") }
        }
        ParamFamily::BrakeBias => {
            let v = physical_value.round().clamp(40.0, 80.0) as i64;
            Converted { value: v, log: format!("brake bias: {physical_value:.1}% -> {v}") }
        }
        ParamFamily::RideHeight => {
            let v = physical_value.round() as i64;
            Converted { value: v, log: format!("ride height: {physical_value:.1} mm -> {v}") }
        }
        ParamFamily::Caster => {
            let v = (physical_value * 10.0).round().clamp(0.0, 120.0) as i64;
            Converted { value: v, log: format!("caster: {physical_value:.2} deg -> {v}") }
        }
        ParamFamily::BrakePower => {
            let v = physical_value.round().clamp(0.0, 200.0) as i64;
            Converted { value: v, log: format!("brake power: {physical_value:.1}% -> {v}") }
        }
        ParamFamily::SpringFront
        | ParamFamily::SpringRear
        | ParamFamily::DamperBump
        | ParamFamily::DamperRebound
        | ParamFamily::DamperFastBump
        | ParamFamily::DamperFastRebound
        | ParamFamily::Arb
        | ParamFamily::Wing => convert_click_or_absolute(category, family, physical_value, existing_value),
    }
}

fn threshold_for(family: ParamFamily) -> f64 {
    match family {
        ParamFamily::SpringFront | ParamFamily::SpringRear => 1000.0,
        ParamFamily::DamperBump | ParamFamily::DamperRebound | ParamFamily::DamperFastBump | ParamFamily::DamperFastRebound => 100.0,
        ParamFamily::Arb => 50.0,
        ParamFamily::Wing => 50.0,
        _ => unreachable!(),
    }
}

fn range_for<'a>(table: &'a ClickTable, family: ParamFamily) -> &'a ClickRange {
    match family {
        ParamFamily::SpringFront => &table.spring_front,
        ParamFamily::SpringRear => &table.spring_rear,
        ParamFamily::DamperBump => &table.damper_bump,
        ParamFamily::DamperRebound => &table.damper_rebound,
        ParamFamily::DamperFastBump => &table.damper_fast_bump,
        ParamFamily::DamperFastRebound => &table.damper_fast_rebound,
        ParamFamily::Arb => &table.arb,
        ParamFamily::Wing => &table.wing,
        _ => unreachable!(),
    }
}

fn convert_click_or_absolute(category: CategoryTag, family: ParamFamily, physical_value: f64, existing_value: Option<f64>) -> Converted {
    let table = table_for(category);
    let range = range_for(table, family);

    let is_absolute = match existing_value {
        Some(existing) => existing >= threshold_for(family),
        None => range.max_clicks == 0,
    };

    if is_absolute {
        let v = physical_value.round() as i64;
        return Converted { value: v, log: format!("{family:?}: {physical_value:.0} -> {v} (absolute)") };
    }

    let click = range.convert(physical_value);
    Converted { value: click, log: format!("{family:?}: {physical_value:.0} -> click {click} (range {:.0}-{:.0}/{})", range.min_value, range.max_value, range.max_clicks) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gt_spring_clicks_matches_worked_example() {
        // 154,687 N/m in an 80,000-200,000 range over 15 clicks -> click 9.
        let result = convert(CategoryTag::Gt, ParamFamily::SpringFront, 154_687.0, Some(12.0));
        assert_eq!(result.value, 9);
    }

    #[test]
    fn pressure_clamps_to_envelope() {
        let result = convert(CategoryTag::Gt, ParamFamily::Pressure, 40.0, None);
        assert_eq!(result.value, 35);
        let result = convert(CategoryTag::Gt, ParamFamily::Pressure, 5.0, None);
        assert_eq!(result.value, 20);
    }

    #[test]
    fn toe_scale_follows_existing_value_magnitude() {
        let tenths = convert(CategoryTag::Gt, ParamFamily::Toe, 0.15, Some(5.0));
        assert_eq!(tenths.value, 2);
        let hundredths = convert(CategoryTag::Gt, ParamFamily::Toe, 0.15, Some(120.0));
        assert_eq!(hundredths.value, 15);
    }

    #[test]
    fn street_spring_is_absolute_clamped() {
        let result = convert(CategoryTag::Street, ParamFamily::SpringFront, 999_999.0, None);
        assert_eq!(result.value, 80_000);
    }

    #[test]
    fn existing_value_above_threshold_forces_absolute_even_for_click_category() {
        let result = convert(CategoryTag::Gt, ParamFamily::SpringFront, 95_000.0, Some(95_000.0));
        assert_eq!(result.value, 95_000);
    }

    #[test]
    fn camber_clamps_to_never_positive() {
        let result = convert(CategoryTag::Gt, ParamFamily::Camber, 1.0, None);
        assert_eq!(result.value, 0);
    }
}
