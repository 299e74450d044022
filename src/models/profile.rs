//! Driver preference profile: named sliders in [0,1] consumed by C5.

/// Axes recognised by the slider interdependency engine. `rotation` and
/// `slide` are centered around 0.5; the rest are zero-based around 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub rotation: f64,
    pub slide: f64,
    pub aggression: f64,
    pub drift: f64,
    pub performance: f64,
    pub aero: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            rotation: 0.5,
            slide: 0.5,
            aggression: 0.0,
            drift: 0.0,
            performance: 0.0,
            aero: 0.0,
        }
    }
}

impl Profile {
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert!(Profile::default().is_neutral());
    }
}
