//! Ambient/road conditions for a pipeline run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Dry,
    LightRain,
    HeavyRain,
    Wet,
}

#[derive(Debug, Clone, Copy)]
pub struct Conditions {
    pub ambient_c: f64,
    pub road_c: f64,
    pub weather: Weather,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            ambient_c: 25.0,
            road_c: 30.0,
            weather: Weather::Dry,
        }
    }
}
