//! Track descriptor.

#[derive(Debug, Clone)]
pub struct TrackDescriptor {
    pub track_id: String,
    pub display_name: String,
    pub config: String,
    pub type_hint: String,
    pub length_m: Option<f64>,
}

impl TrackDescriptor {
    pub fn full_id(&self) -> String {
        if self.config.is_empty() {
            self.track_id.clone()
        } else {
            format!("{}/{}", self.track_id, self.config)
        }
    }

    pub(crate) fn classifier_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.track_id.to_lowercase(),
            self.display_name.to_lowercase(),
            self.config.to_lowercase(),
            self.type_hint.to_lowercase()
        )
    }

    /// Rough average-speed heuristic used by C3's aero wing split: tracks
    /// longer than 5.5 km average faster than short, technical ones.
    pub fn is_high_speed(&self) -> bool {
        self.length_m.map_or(false, |m| m > 5_500.0)
    }

    pub fn is_low_speed(&self) -> bool {
        self.length_m.map_or(false, |m| m < 2_500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_id_joins_config_when_present() {
        let t = TrackDescriptor {
            track_id: "ks_nurburgring".into(),
            display_name: "Nurburgring".into(),
            config: "gp".into(),
            type_hint: String::new(),
            length_m: None,
        };
        assert_eq!(t.full_id(), "ks_nurburgring/gp");
    }

    #[test]
    fn full_id_bare_when_config_empty() {
        let t = TrackDescriptor {
            track_id: "ks_nurburgring".into(),
            display_name: "Nurburgring".into(),
            config: String::new(),
            type_hint: String::new(),
            length_m: None,
        };
        assert_eq!(t.full_id(), "ks_nurburgring");
    }
}
