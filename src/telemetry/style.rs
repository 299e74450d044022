//! A5: driving-style analyser. Consumes a sliding window of `TelemetrySample`s
//! already projected by A4 and emits a coarse style tag plus a metric vector
//! on the same axes as `Profile`, so the result can pre-fill sliders before
//! a pipeline run. Never calls into C1-C10; a CLI wires the two together.

use crate::models::Profile;
use crate::telemetry::reader::TelemetrySample;

/// Samples kept in the analysis window. At a 10 Hz poll rate this covers
/// roughly the last 10 seconds of driving.
const WINDOW_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Smooth,
    Balanced,
    Aggressive,
    Sliding,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Smooth => "smooth",
            StyleTag::Balanced => "balanced",
            StyleTag::Aggressive => "aggressive",
            StyleTag::Sliding => "sliding",
        }
    }
}

pub struct StyleWindow {
    samples: Vec<TelemetrySample>,
}

impl StyleWindow {
    pub fn new() -> Self {
        Self { samples: Vec::with_capacity(WINDOW_CAPACITY) }
    }

    pub fn push(&mut self, sample: TelemetrySample) {
        if self.samples.len() == WINDOW_CAPACITY {
            self.samples.remove(0);
        }
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Analyse the current window into a style tag and a pre-fill `Profile`.
    /// Returns `None` until the window holds at least a few samples.
    pub fn analyze(&self) -> Option<(StyleTag, Profile)> {
        if self.samples.len() < 5 {
            return None;
        }

        let n = self.samples.len() as f64;
        let mean_abs_lat_g: f64 = self.samples.iter().map(|s| s.g_force_lat.abs() as f64).sum::<f64>() / n;
        let mean_throttle: f64 = self.samples.iter().map(|s| s.throttle as f64).sum::<f64>() / n;
        let mean_brake: f64 = self.samples.iter().map(|s| s.brake as f64).sum::<f64>() / n;

        let steer_reversals = count_steer_reversals(&self.samples);
        let reversal_rate = steer_reversals as f64 / n;

        // Aggression: how hard and how often the driver is on the pedals.
        let aggression = ((mean_throttle + mean_brake) / 2.0).clamp(0.0, 1.0);
        // Slide: proxied by sustained lateral G combined with frequent
        // steering correction (countersteer pattern).
        let slide = ((mean_abs_lat_g / 2.5) * (0.5 + reversal_rate)).clamp(0.0, 1.0);
        // Rotation: centred slider; reversal rate above a typical cruising
        // baseline nudges it positive (more rotation-seeking), below nudges
        // it negative (more stable).
        let rotation = (0.5 + (reversal_rate - 0.15)).clamp(0.0, 1.0);
        // Drift: only rises when slide and aggression are both elevated and
        // lateral G stays high for a sustained window.
        let drift = (slide * aggression).clamp(0.0, 1.0);
        // Performance and aero track overall pace commitment, not any one
        // input; approximate with mean lateral G normalised against a
        // representative GT3 cornering ceiling.
        let performance = (mean_abs_lat_g / 2.0).clamp(0.0, 1.0);

        let profile = Profile {
            rotation,
            slide,
            aggression,
            drift,
            performance,
            aero: (performance * 0.5).clamp(0.0, 1.0),
        };

        let tag = if drift > 0.5 {
            StyleTag::Sliding
        } else if aggression > 0.6 {
            StyleTag::Aggressive
        } else if aggression < 0.25 && slide < 0.2 {
            StyleTag::Smooth
        } else {
            StyleTag::Balanced
        };

        Some((tag, profile))
    }
}

impl Default for StyleWindow {
    fn default() -> Self {
        Self::new()
    }
}

fn count_steer_reversals(samples: &[TelemetrySample]) -> usize {
    let mut reversals = 0;
    let mut last_sign = 0i32;
    for s in samples {
        let sign = if s.steer > 0.05 {
            1
        } else if s.steer < -0.05 {
            -1
        } else {
            0
        };
        if sign != 0 && last_sign != 0 && sign != last_sign {
            reversals += 1;
        }
        if sign != 0 {
            last_sign = sign;
        }
    }
    reversals
}

#[cfg(test)]
mod tests {
    use super::*;
    use acc_shared_memory_rs::AccStatus;

    fn sample(steer: f32, throttle: f32, brake: f32, lat_g: f32) -> TelemetrySample {
        TelemetrySample {
            car_model: "car".into(),
            track: "track".into(),
            track_config: String::new(),
            status: AccStatus::Live,
            current_time_ms: 0,
            last_time_ms: 0,
            best_time_ms: 0,
            last_sector_time_ms: 0,
            tyre_core_temp: [80.0; 4],
            g_force_lat: lat_g,
            g_force_long: 0.0,
            throttle,
            brake,
            steer,
        }
    }

    #[test]
    fn empty_window_yields_no_analysis() {
        let window = StyleWindow::new();
        assert!(window.analyze().is_none());
    }

    #[test]
    fn smooth_cruising_samples_tag_as_smooth() {
        let mut window = StyleWindow::new();
        for _ in 0..10 {
            window.push(sample(0.0, 0.3, 0.0, 0.3));
        }
        let (tag, _) = window.analyze().unwrap();
        assert_eq!(tag, StyleTag::Smooth);
    }

    #[test]
    fn hard_pedal_inputs_tag_as_aggressive() {
        let mut window = StyleWindow::new();
        for _ in 0..10 {
            window.push(sample(0.0, 0.95, 0.9, 0.5));
        }
        let (tag, profile) = window.analyze().unwrap();
        assert_eq!(tag, StyleTag::Aggressive);
        assert!(profile.aggression > 0.6);
    }

    #[test]
    fn window_respects_capacity_by_dropping_oldest() {
        let mut window = StyleWindow::new();
        for i in 0..(WINDOW_CAPACITY + 10) {
            window.push(sample(0.0, i as f32 * 0.0, 0.0, 0.0));
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
    }
}
