//! C1: category classifier. Pure, total function from a car descriptor to a
//! single category tag.

use crate::models::CarDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryTag {
    Formula,
    Prototype,
    Gt,
    StreetSport,
    Street,
    Vintage,
    Drift,
}

impl CategoryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formula => "formula",
            Self::Prototype => "prototype",
            Self::Gt => "gt",
            Self::StreetSport => "street_sport",
            Self::Street => "street",
            Self::Vintage => "vintage",
            Self::Drift => "drift",
        }
    }
}

const FORMULA_HINTS: &[&str] = &["formula", "f1", "f2", "f3", "f4", "rss_formula", "fia_f"];
const PROTOTYPE_HINTS: &[&str] = &["lmp", "lmp1", "lmp2", "lmp3", "prototype", "p1", "p2"];
const GT_HINTS: &[&str] = &["gt3", "gt2", "gt4", "gte", "gtc", "gt1", "dtm", "tcr"];
const VINTAGE_HINTS: &[&str] = &[
    "vintage", "classic", "historic", "1960", "1970", "60s", "70s",
];
const STREET_SPORT_HINTS: &[&str] = &[
    "gt4", "m3", "m4", "m5", "rs", "gtr", "911", "cayman", "boxster", "corvette", "viper", "amg",
    "type_r", "sti", "evo",
];

fn any_contains(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Map a car descriptor to exactly one category tag. Rules are evaluated in
/// strict priority order, first match wins; see module docs for the order.
pub fn classify(car: &CarDescriptor) -> CategoryTag {
    let haystack = car.classifier_haystack();

    if haystack.contains("drift") {
        return CategoryTag::Drift;
    }
    if any_contains(&haystack, FORMULA_HINTS) {
        return CategoryTag::Formula;
    }
    if any_contains(&haystack, PROTOTYPE_HINTS) {
        return CategoryTag::Prototype;
    }
    if any_contains(&haystack, GT_HINTS) {
        return CategoryTag::Gt;
    }
    let light_and_weak = match (car.power_hp, car.weight_kg) {
        (Some(hp), Some(kg)) if kg > 0.0 => hp < 250.0 && hp / kg < 0.15,
        _ => false,
    };
    if any_contains(&haystack, VINTAGE_HINTS) || light_and_weak {
        return CategoryTag::Vintage;
    }
    let by_hint = any_contains(&haystack, STREET_SPORT_HINTS)
        && car.power_hp.map_or(false, |hp| hp > 250.0)
        && car.weight_kg.map_or(false, |kg| kg < 1500.0);
    let by_ratio = match car.power_to_weight() {
        Some(ratio) => (0.25..=0.45).contains(&ratio),
        None => false,
    };
    if by_hint || by_ratio {
        return CategoryTag::StreetSport;
    }
    CategoryTag::Street
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::Drivetrain;
    use std::path::PathBuf;

    fn car(car_id: &str, class_hint: &str, power_hp: Option<f64>, weight_kg: Option<f64>) -> CarDescriptor {
        CarDescriptor {
            car_id: car_id.into(),
            display_name: car_id.into(),
            brand: String::new(),
            class_hint: class_hint.into(),
            drivetrain: Drivetrain::Rwd,
            power_hp,
            weight_kg,
            content_path: PathBuf::new(),
        }
    }

    #[test]
    fn drift_beats_everything_else() {
        let c = car("drift_m3_evo", "gt3", Some(500.0), Some(1200.0));
        assert_eq!(classify(&c), CategoryTag::Drift);
    }

    #[test]
    fn formula_hint_wins_over_gt3_substring_absence() {
        let c = car("rss_formula_2020", "", Some(750.0), Some(650.0));
        assert_eq!(classify(&c), CategoryTag::Formula);
    }

    #[test]
    fn gt3_classifies_as_gt() {
        let c = car("ks_ferrari_488_gt3", "", Some(500.0), Some(1300.0));
        assert_eq!(classify(&c), CategoryTag::Gt);
    }

    #[test]
    fn low_power_to_weight_without_hint_is_vintage() {
        let c = car("old_racer", "", Some(120.0), Some(900.0));
        assert_eq!(classify(&c), CategoryTag::Vintage);
    }

    #[test]
    fn power_to_weight_ratio_alone_triggers_street_sport() {
        let c = car("some_sleeper", "", Some(400.0), Some(1300.0));
        assert_eq!(classify(&c), CategoryTag::StreetSport);
    }

    #[test]
    fn fallback_is_street() {
        let c = car("generic_hatchback", "", Some(120.0), Some(1200.0));
        assert_eq!(classify(&c), CategoryTag::Street);
    }

    #[test]
    fn classify_is_pure() {
        let c = car("ks_ferrari_488_gt3", "", Some(500.0), Some(1300.0));
        assert_eq!(classify(&c), classify(&c));
    }
}
