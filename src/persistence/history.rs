//! A7: JSON-backed persistence for named setup presets and a rolling
//! learning history of best laps per car/track/conditions. Mirrors
//! `notes.rs`'s pattern: a serde-derived container struct, read whole,
//! written back atomically through a temp file + rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::Profile;

/// Cap on how many best-lap entries are kept per (car_id, track_id) pair.
const MAX_HISTORY_PER_COMBO: usize = 20;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub car_id: String,
    pub behavior_id: String,
    pub profile: Profile,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LapRecord {
    pub car_id: String,
    pub track_id: String,
    pub weather: String,
    pub lap_ms: i64,
    pub behavior_id: String,
    pub recorded_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryJson {
    #[serde(default)]
    pub presets: Vec<Preset>,
    #[serde(default)]
    pub laps: Vec<LapRecord>,
}

pub struct History {
    path: PathBuf,
    data: HistoryJson,
}

impl History {
    /// Load from `path`, or start empty if the file doesn't exist or fails
    /// to parse (a corrupt history file should never block the pipeline).
    pub fn load(path: &Path) -> Self {
        let data = fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        Self { path: path.to_path_buf(), data }
    }

    pub fn add_preset(&mut self, name: &str, car_id: &str, behavior_id: &str, profile: Profile) {
        self.data.presets.retain(|p| !(p.name == name && p.car_id == car_id));
        self.data.presets.push(Preset {
            name: name.to_string(),
            car_id: car_id.to_string(),
            behavior_id: behavior_id.to_string(),
            profile,
            created_at: Utc::now().to_rfc3339(),
        });
    }

    pub fn presets_for_car(&self, car_id: &str) -> Vec<&Preset> {
        self.data.presets.iter().filter(|p| p.car_id == car_id).collect()
    }

    pub fn record_lap(&mut self, car_id: &str, track_id: &str, weather: &str, lap_ms: i64, behavior_id: &str) {
        self.data.laps.push(LapRecord {
            car_id: car_id.to_string(),
            track_id: track_id.to_string(),
            weather: weather.to_string(),
            lap_ms,
            behavior_id: behavior_id.to_string(),
            recorded_at: Utc::now().to_rfc3339(),
        });

        let mut indices: Vec<usize> = self
            .data
            .laps
            .iter()
            .enumerate()
            .filter(|(_, l)| l.car_id == car_id && l.track_id == track_id)
            .map(|(i, _)| i)
            .collect();
        if indices.len() > MAX_HISTORY_PER_COMBO {
            indices.sort_by_key(|&i| self.data.laps[i].lap_ms);
            let drop: std::collections::HashSet<usize> = indices
                .into_iter()
                .skip(MAX_HISTORY_PER_COMBO)
                .collect();
            let mut i = 0usize;
            self.data.laps.retain(|_| {
                let keep = !drop.contains(&i);
                i += 1;
                keep
            });
        }
    }

    pub fn best_lap(&self, car_id: &str, track_id: &str) -> Option<&LapRecord> {
        self.data
            .laps
            .iter()
            .filter(|l| l.car_id == car_id && l.track_id == track_id)
            .min_by_key(|l| l.lap_ms)
    }

    /// Write the whole history to disk via `<path>.tmp` then rename.
    pub fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("acr_setup_test_{name}_{}.json", std::process::id()))
    }

    #[test]
    fn missing_file_loads_empty_history() {
        let path = temp_path("history_missing");
        fs::remove_file(&path).ok();
        let history = History::load(&path);
        assert!(history.data.presets.is_empty());
        assert!(history.data.laps.is_empty());
    }

    #[test]
    fn presets_round_trip_through_save_and_load() {
        let path = temp_path("history_presets");
        fs::remove_file(&path).ok();

        let mut history = History::load(&path);
        history.add_preset("qualifying", "car_x", "attack", Profile::default());
        history.save().unwrap();

        let reloaded = History::load(&path);
        assert_eq!(reloaded.presets_for_car("car_x").len(), 1);
        assert_eq!(reloaded.presets_for_car("car_x")[0].name, "qualifying");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn best_lap_ignores_other_tracks() {
        let path = temp_path("history_bestlap");
        fs::remove_file(&path).ok();

        let mut history = History::load(&path);
        history.record_lap("car_x", "track_a", "dry", 92_300, "attack");
        history.record_lap("car_x", "track_b", "dry", 80_000, "attack");
        history.record_lap("car_x", "track_a", "dry", 91_800, "attack");

        let best = history.best_lap("car_x", "track_a").unwrap();
        assert_eq!(best.lap_ms, 91_800);

        fs::remove_file(&path).ok();
    }
}
