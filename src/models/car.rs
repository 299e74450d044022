//! Car descriptor: the immutable input to a single pipeline run.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drivetrain {
    Rwd,
    Fwd,
    Awd,
}

impl Drivetrain {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "RWD" => Some(Self::Rwd),
            "FWD" => Some(Self::Fwd),
            "AWD" => Some(Self::Awd),
            _ => None,
        }
    }
}

/// Immutable within a pipeline run. `content_path` is an opaque root the mapper
/// scans for sample setup files; it is not interpreted by the core otherwise.
#[derive(Debug, Clone)]
pub struct CarDescriptor {
    pub car_id: String,
    pub display_name: String,
    pub brand: String,
    pub class_hint: String,
    pub drivetrain: Drivetrain,
    pub power_hp: Option<f64>,
    pub weight_kg: Option<f64>,
    pub content_path: PathBuf,
}

impl CarDescriptor {
    /// Fallback corner mass used by C3 when `weight_kg` is absent.
    pub const DEFAULT_WEIGHT_KG: f64 = 1200.0;
    /// Fallback drivetrain torque (N·m) used by C3 when `power_hp` is absent.
    pub const DEFAULT_TORQUE_NM: f64 = 400.0;

    pub fn total_mass_kg(&self) -> f64 {
        self.weight_kg.unwrap_or(Self::DEFAULT_WEIGHT_KG)
    }

    pub fn corner_mass_kg(&self) -> f64 {
        self.total_mass_kg() / 4.0
    }

    /// Estimated drivetrain torque: `power_hp * 1.36`, else the default.
    pub fn torque_nm(&self) -> f64 {
        self.power_hp
            .map(|hp| hp * 1.36)
            .unwrap_or(Self::DEFAULT_TORQUE_NM)
    }

    /// Text fields concatenated lower-case for the C1 substring classifier.
    pub(crate) fn classifier_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.car_id.to_lowercase(),
            self.display_name.to_lowercase(),
            self.class_hint.to_lowercase()
        )
    }

    pub fn power_to_weight(&self) -> Option<f64> {
        match (self.power_hp, self.weight_kg) {
            (Some(hp), Some(kg)) if kg > 0.0 => Some(hp / kg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drivetrain_parse_is_case_insensitive() {
        assert_eq!(Drivetrain::parse("rwd"), Some(Drivetrain::Rwd));
        assert_eq!(Drivetrain::parse("Fwd"), Some(Drivetrain::Fwd));
        assert_eq!(Drivetrain::parse("bogus"), None);
    }

    #[test]
    fn corner_mass_uses_fallback_weight() {
        let car = CarDescriptor {
            car_id: "x".into(),
            display_name: "x".into(),
            brand: String::new(),
            class_hint: String::new(),
            drivetrain: Drivetrain::Rwd,
            power_hp: None,
            weight_kg: None,
            content_path: PathBuf::new(),
        };
        assert_eq!(car.corner_mass_kg(), 300.0);
        assert_eq!(car.torque_nm(), 400.0);
    }
}
