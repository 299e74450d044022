//! C6 (dynamic parameter mapper) and C7 (value-type detector), combined into
//! one read-only, car-scoped cache. Both look at the same sample `.ini`
//! files under a car's setups folder; splitting them into two caches would
//! just mean parsing the same files twice.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::refiner::CarOverrides;

const BOOKKEEPING_SECTIONS: &[&str] = &["CAR", "__EXT_PATCH", "VERSION", "INFO"];

/// Canonical name -> candidate AC section names, in priority order.
fn canonical_aliases() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("pressure_lf", &["PRESSURE_LF", "TYRE_PRESSURE_LF", "TYRE_PRESSURE_0", "PRESSURE_FL", "TIRE_PRESSURE_LF"]),
        ("pressure_rf", &["PRESSURE_RF", "TYRE_PRESSURE_RF", "TYRE_PRESSURE_1", "PRESSURE_FR", "TIRE_PRESSURE_RF"]),
        ("pressure_lr", &["PRESSURE_LR", "TYRE_PRESSURE_LR", "TYRE_PRESSURE_2", "PRESSURE_RL", "TIRE_PRESSURE_LR"]),
        ("pressure_rr", &["PRESSURE_RR", "TYRE_PRESSURE_RR", "TYRE_PRESSURE_3", "TIRE_PRESSURE_RR"]),
        ("camber_lf", &["CAMBER_LF", "CAMBER_ANGLE_LF", "CAMBER_FL", "CAMBER_0", "FRONT_CAMBER_L"]),
        ("camber_rf", &["CAMBER_RF", "CAMBER_ANGLE_RF", "CAMBER_FR", "CAMBER_1", "FRONT_CAMBER_R"]),
        ("camber_lr", &["CAMBER_LR", "CAMBER_ANGLE_LR", "CAMBER_RL", "CAMBER_2", "REAR_CAMBER_L"]),
        ("camber_rr", &["CAMBER_RR", "CAMBER_ANGLE_RR", "CAMBER_3", "REAR_CAMBER_R"]),
        ("toe_lf", &["TOE_OUT_LF", "TOE_LF", "TOE_ANGLE_LF", "TOE_FL", "TOE_0", "FRONT_TOE_L"]),
        ("toe_rf", &["TOE_OUT_RF", "TOE_RF", "TOE_ANGLE_RF", "TOE_FR", "TOE_1", "FRONT_TOE_R"]),
        ("toe_lr", &["TOE_OUT_LR", "TOE_LR", "TOE_ANGLE_LR", "TOE_RL", "TOE_2", "REAR_TOE_L"]),
        ("toe_rr", &["TOE_OUT_RR", "TOE_RR", "TOE_ANGLE_RR", "TOE_3", "REAR_TOE_R"]),
        ("spring_lf", &["SPRING_RATE_LF", "SPRING_LF", "SPRING_RATE_FL", "SPRING_0", "FRONT_SPRING_L", "ROD_LENGTH_LF"]),
        ("spring_rf", &["SPRING_RATE_RF", "SPRING_RF", "SPRING_RATE_FR", "SPRING_1", "FRONT_SPRING_R", "ROD_LENGTH_RF"]),
        ("spring_lr", &["SPRING_RATE_LR", "SPRING_LR", "SPRING_RATE_RL", "SPRING_2", "REAR_SPRING_L", "ROD_LENGTH_LR"]),
        ("spring_rr", &["SPRING_RATE_RR", "SPRING_RR", "SPRING_3", "REAR_SPRING_R", "ROD_LENGTH_RR"]),
        ("ride_height_lf", &["ROD_LENGTH_LF", "RIDE_HEIGHT_LF", "HEIGHT_LF", "FRONT_HEIGHT_L", "PACKER_LF"]),
        ("ride_height_rf", &["ROD_LENGTH_RF", "RIDE_HEIGHT_RF", "HEIGHT_RF", "FRONT_HEIGHT_R", "PACKER_RF"]),
        ("ride_height_lr", &["ROD_LENGTH_LR", "RIDE_HEIGHT_LR", "HEIGHT_LR", "REAR_HEIGHT_L", "PACKER_LR"]),
        ("ride_height_rr", &["ROD_LENGTH_RR", "RIDE_HEIGHT_RR", "HEIGHT_RR", "REAR_HEIGHT_R", "PACKER_RR"]),
        ("damp_bump_lf", &["DAMP_BUMP_LF", "BUMP_LF", "SLOW_BUMP_LF", "DAMPER_BUMP_LF", "DAMPER_0_BUMP"]),
        ("damp_bump_rf", &["DAMP_BUMP_RF", "BUMP_RF", "SLOW_BUMP_RF", "DAMPER_BUMP_RF", "DAMPER_1_BUMP"]),
        ("damp_bump_lr", &["DAMP_BUMP_LR", "BUMP_LR", "SLOW_BUMP_LR", "DAMPER_BUMP_LR", "DAMPER_2_BUMP"]),
        ("damp_bump_rr", &["DAMP_BUMP_RR", "BUMP_RR", "SLOW_BUMP_RR", "DAMPER_BUMP_RR", "DAMPER_3_BUMP"]),
        ("damp_rebound_lf", &["DAMP_REBOUND_LF", "REBOUND_LF", "SLOW_REBOUND_LF", "DAMPER_REBOUND_LF", "DAMPER_0_REBOUND"]),
        ("damp_rebound_rf", &["DAMP_REBOUND_RF", "REBOUND_RF", "SLOW_REBOUND_RF", "DAMPER_REBOUND_RF", "DAMPER_1_REBOUND"]),
        ("damp_rebound_lr", &["DAMP_REBOUND_LR", "REBOUND_LR", "SLOW_REBOUND_LR", "DAMPER_REBOUND_LR", "DAMPER_2_REBOUND"]),
        ("damp_rebound_rr", &["DAMP_REBOUND_RR", "REBOUND_RR", "SLOW_REBOUND_RR", "DAMPER_REBOUND_RR", "DAMPER_3_REBOUND"]),
        ("damp_fast_bump_lf", &["DAMP_FAST_BUMP_LF", "FAST_BUMP_LF", "DAMPER_FAST_BUMP_LF"]),
        ("damp_fast_bump_rf", &["DAMP_FAST_BUMP_RF", "FAST_BUMP_RF", "DAMPER_FAST_BUMP_RF"]),
        ("damp_fast_bump_lr", &["DAMP_FAST_BUMP_LR", "FAST_BUMP_LR", "DAMPER_FAST_BUMP_LR"]),
        ("damp_fast_bump_rr", &["DAMP_FAST_BUMP_RR", "FAST_BUMP_RR", "DAMPER_FAST_BUMP_RR"]),
        ("damp_fast_rebound_lf", &["DAMP_FAST_REBOUND_LF", "FAST_REBOUND_LF", "DAMPER_FAST_REBOUND_LF"]),
        ("damp_fast_rebound_rf", &["DAMP_FAST_REBOUND_RF", "FAST_REBOUND_RF", "DAMPER_FAST_REBOUND_RF"]),
        ("damp_fast_rebound_lr", &["DAMP_FAST_REBOUND_LR", "FAST_REBOUND_LR", "DAMPER_FAST_REBOUND_LR"]),
        ("damp_fast_rebound_rr", &["DAMP_FAST_REBOUND_RR", "FAST_REBOUND_RR", "DAMPER_FAST_REBOUND_RR"]),
        ("arb_front", &["ARB_FRONT", "FRONT_ARB", "ANTIROLL_FRONT", "SWAY_BAR_FRONT", "ARB_0"]),
        ("arb_rear", &["ARB_REAR", "REAR_ARB", "ANTIROLL_REAR", "SWAY_BAR_REAR", "ARB_1"]),
        ("diff_power", &["POWER", "DIFF_POWER", "LOCK_POWER", "ACCEL_LOCK", "DIFF_LOCK_POWER"]),
        ("diff_coast", &["COAST", "DIFF_COAST", "LOCK_COAST", "DECEL_LOCK", "DIFF_LOCK_COAST"]),
        ("diff_preload", &["PRELOAD", "DIFF_PRELOAD", "DIFF_PRELOAD_NM"]),
        ("brake_bias", &["FRONT_BIAS", "BRAKE_BIAS", "BIAS", "BRAKE_BALANCE", "FRONT_BRAKE_BIAS"]),
        ("brake_power", &["BRAKE_POWER_MULT", "BRAKE_POWER", "BRAKE_FORCE"]),
        ("wing_front", &["WING_0", "FRONT_WING", "FWING", "WING_FRONT", "AERO_FRONT", "SPLITTER"]),
        ("wing_rear", &["WING_1", "REAR_WING", "RWING", "WING_REAR", "AERO_REAR", "WING_2", "SPOILER", "WING"]),
        ("fuel", &["FUEL", "FUEL_LOAD", "FUEL_LEVEL"]),
        ("tyres", &["TYRES", "TYRE_COMPOUND", "COMPOUND", "TIRE_COMPOUND"]),
        ("caster_lf", &["CASTER_LF", "CASTER_FL", "FRONT_CASTER_L"]),
        ("caster_rf", &["CASTER_RF", "CASTER_FR", "FRONT_CASTER_R"]),
    ]
}

/// `canonical name -> observed AC section name`, as discovered from sample
/// setup files for one car.
#[derive(Debug, Clone, Default)]
pub struct ParameterMap(HashMap<String, String>);

impl ParameterMap {
    pub fn get(&self, canonical: &str) -> Option<&str> {
        self.0.get(canonical).map(String::as_str)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.0.contains_key(canonical)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Clicks,
    Absolute,
}

/// Per-family click/absolute classification for a car. Families not present
/// in any sample file default to `Absolute` (the safe, non-scaling choice).
#[derive(Debug, Clone)]
pub struct ValueTypeMap {
    pub spring: ValueKind,
    pub damper: ValueKind,
    pub arb: ValueKind,
    pub wing: ValueKind,
}

impl Default for ValueTypeMap {
    fn default() -> Self {
        Self {
            spring: ValueKind::Absolute,
            damper: ValueKind::Absolute,
            arb: ValueKind::Absolute,
            wing: ValueKind::Absolute,
        }
    }
}

impl ValueTypeMap {
    pub fn spring_is_clicks(&self) -> bool {
        self.spring == ValueKind::Clicks
    }
}

fn read_with_fallback(path: &Path) -> Option<String> {
    if let Ok(bytes) = fs::read(path) {
        if let Ok(s) = String::from_utf8(bytes.clone()) {
            return Some(s);
        }
        let utf16: Vec<u16> = bytes.chunks_exact(2).map(|c| u16::from_le_bytes([c[0], c[1]])).collect();
        if let Ok(s) = String::from_utf16(&utf16) {
            return Some(s);
        }
        return Some(bytes.iter().map(|&b| b as char).collect());
    }
    None
}

fn extract_sections(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if let Some(stripped) = line.strip_prefix('[') {
            if let Some(name) = stripped.strip_suffix(']') {
                if !BOOKKEEPING_SECTIONS.contains(&name) && !out.iter().any(|s: &String| s == name) {
                    out.push(name.to_string());
                }
            }
        }
    }
    out
}

fn extract_values(content: &str) -> HashMap<String, i64> {
    let mut values = HashMap::new();
    let mut current: Option<String> = None;
    for line in content.lines() {
        let line = line.trim();
        if let Some(stripped) = line.strip_prefix('[') {
            if let Some(name) = stripped.strip_suffix(']') {
                current = Some(name.to_string());
                continue;
            }
        }
        if let Some(rest) = line.strip_prefix("VALUE=") {
            if let Some(section) = &current {
                if let Ok(v) = rest.trim().parse::<i64>() {
                    values.insert(section.clone(), v);
                }
            }
        }
    }
    values
}

fn sample_files(content_path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let generic = content_path.join("generic").join("last.ini");
    if generic.is_file() {
        files.push(generic);
    }

    if let Ok(entries) = fs::read_dir(content_path) {
        for entry in entries.flatten() {
            let track_dir = entry.path();
            if track_dir.is_dir() {
                let last = track_dir.join("last.ini");
                if last.is_file() {
                    files.push(last);
                    break;
                }
            }
        }
    }

    if files.is_empty() {
        collect_ini_recursive(content_path, &mut files, 3);
    }

    files
}

fn collect_ini_recursive(dir: &Path, out: &mut Vec<PathBuf>, limit: usize) {
    if out.len() >= limit {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        if out.len() >= limit {
            return;
        }
        let path = entry.path();
        if path.is_dir() {
            collect_ini_recursive(&path, out, limit);
        } else if path.extension().is_some_and(|e| e == "ini") {
            out.push(path);
        }
    }
}

fn detect_available(content_path: &Path) -> Vec<String> {
    let mut observed: Vec<String> = Vec::new();
    for file in sample_files(content_path) {
        let Some(content) = read_with_fallback(&file) else { continue };
        for section in extract_sections(&content) {
            if !observed.contains(&section) {
                observed.push(section);
            }
        }
    }
    observed
}

fn build_mapping(observed: &[String]) -> ParameterMap {
    let mut map = HashMap::new();
    for (canonical, aliases) in canonical_aliases() {
        if let Some(found) = aliases.iter().find(|a| observed.iter().any(|o| o == *a)) {
            map.insert(canonical.to_string(), found.to_string());
        }
    }
    ParameterMap(map)
}

fn detect_value_types(content_path: &Path) -> ValueTypeMap {
    let files = sample_files(content_path);
    let Some(first) = files.first() else { return ValueTypeMap::default() };
    let Some(content) = read_with_fallback(first) else { return ValueTypeMap::default() };
    let values = extract_values(&content);

    let first_present = |names: &[&str]| names.iter().find_map(|n| values.get(*n).copied());

    let spring = match first_present(&["SPRING_RATE_LF", "SPRING_LF", "SPRING_0"]) {
        Some(v) if v < 1000 => ValueKind::Clicks,
        Some(_) => ValueKind::Absolute,
        None => ValueKind::Absolute,
    };
    let damper = match first_present(&["DAMP_BUMP_LF", "BUMP_LF", "DAMPER_BUMP_LF"]) {
        Some(v) if v < 100 => ValueKind::Clicks,
        Some(_) => ValueKind::Absolute,
        None => ValueKind::Absolute,
    };
    let arb = match first_present(&["ARB_FRONT", "FRONT_ARB"]) {
        Some(v) if v < 50 => ValueKind::Clicks,
        Some(_) => ValueKind::Absolute,
        None => ValueKind::Absolute,
    };
    let wing = match first_present(&["WING_0", "WING_1", "REAR_WING"]) {
        Some(v) if v < 50 => ValueKind::Clicks,
        Some(_) => ValueKind::Absolute,
        None => ValueKind::Absolute,
    };

    ValueTypeMap { spring, damper, arb, wing }
}

#[derive(Default)]
struct CacheState {
    mappings: HashMap<String, ParameterMap>,
    value_types: HashMap<String, ValueTypeMap>,
    overrides: HashMap<String, CarOverrides>,
}

/// The process-lifetime parameter cache. One of the two pieces of global
/// state the pipeline is allowed to carry (the other is the static category
/// target tables in `targets.rs`); everything it stores is derived purely
/// from reading files under a car's content directory.
pub struct ParameterCache {
    state: Mutex<CacheState>,
}

impl ParameterCache {
    pub fn new() -> Self {
        Self { state: Mutex::new(CacheState::default()) }
    }

    pub fn get_mapping(&self, car_id: &str, content_path: &Path, refresh: bool) -> ParameterMap {
        let mut state = self.state.lock().unwrap();
        if refresh {
            state.mappings.remove(car_id);
        }
        if let Some(cached) = state.mappings.get(car_id) {
            return cached.clone();
        }
        let observed = detect_available(content_path);
        let mapping = build_mapping(&observed);
        state.mappings.insert(car_id.to_string(), mapping.clone());
        mapping
    }

    pub fn value_types(&self, car_id: &str, content_path: &Path) -> ValueTypeMap {
        let mut state = self.state.lock().unwrap();
        if let Some(cached) = state.value_types.get(car_id) {
            return cached.clone();
        }
        let types = detect_value_types(content_path);
        state.value_types.insert(car_id.to_string(), types.clone());
        types
    }

    pub fn car_overrides(&self, car_id: &str, content_path: &Path) -> CarOverrides {
        let mut state = self.state.lock().unwrap();
        if let Some(cached) = state.overrides.get(car_id) {
            return cached.clone();
        }
        let overrides = CarOverrides::load(content_path);
        state.overrides.insert(car_id.to_string(), overrides.clone());
        overrides
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.mappings.clear();
        state.value_types.clear();
        state.overrides.clear();
    }
}

impl Default for ParameterCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_ini(path: &Path, sections: &[(&str, &str)]) {
        let mut f = fs::File::create(path).unwrap();
        for (name, value) in sections {
            writeln!(f, "[{name}]").unwrap();
            writeln!(f, "VALUE={value}").unwrap();
            writeln!(f).unwrap();
        }
    }

    #[test]
    fn mapping_resolves_first_alias_present() {
        let dir = std::env::temp_dir().join(format!("acr_setup_test_mapper_{}", std::process::id()));
        let generic = dir.join("generic");
        fs::create_dir_all(&generic).unwrap();
        write_ini(&generic.join("last.ini"), &[("SPRING_RATE_LF", "95000"), ("CAR", "1")]);

        let cache = ParameterCache::new();
        let mapping = cache.get_mapping("test_car", &dir, false);
        assert_eq!(mapping.get("spring_lf"), Some("SPRING_RATE_LF"));
        assert!(mapping.get("spring_rf").is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn value_type_detects_clicks_below_threshold() {
        let dir = std::env::temp_dir().join(format!("acr_setup_test_types_{}", std::process::id()));
        let generic = dir.join("generic");
        fs::create_dir_all(&generic).unwrap();
        write_ini(&generic.join("last.ini"), &[("SPRING_RATE_LF", "12"), ("DAMP_BUMP_LF", "150")]);

        let cache = ParameterCache::new();
        let types = cache.value_types("test_car", &dir);
        assert!(types.spring_is_clicks());
        assert_eq!(types.damper, ValueKind::Absolute);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_setup_tree_yields_empty_mapping() {
        let dir = std::env::temp_dir().join("acr_setup_test_nonexistent_dir_xyz");
        let cache = ParameterCache::new();
        let mapping = cache.get_mapping("ghost_car", &dir, false);
        assert!(mapping.is_empty());
    }
}
