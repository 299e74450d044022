//! C10: pipeline orchestrator. Sequences C1 -> C3 -> C4 -> C5 -> (C8/C9),
//! collecting metadata and an optional debug trace.

use crate::baseline;
use crate::category::{self, CategoryTag};
use crate::debug_log::DebugTrace;
use crate::error::{PipelineError, Result};
use crate::mapper::ParameterCache;
use crate::models::{CarDescriptor, Conditions, Profile, Setup, TrackDescriptor};
use crate::refiner;
use crate::sliders;
use crate::targets;
use crate::writer::{self, WriteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackType {
    Touge,
    Street,
    Drift,
    Circuit,
}

const TOUGE_HINTS: &[&str] = &["touge", "akina", "usui", "irohazaka", "hakone", "myogi"];
const STREET_HINTS: &[&str] = &["street", "city", "urban", "highway", "shutoko", "wangan"];
const DRIFT_HINTS: &[&str] = &["drift", "ebisu", "meihan"];

pub fn detect_track_type(track: &TrackDescriptor) -> TrackType {
    let haystack = track.classifier_haystack();
    if TOUGE_HINTS.iter().any(|h| haystack.contains(h)) {
        TrackType::Touge
    } else if STREET_HINTS.iter().any(|h| haystack.contains(h)) {
        TrackType::Street
    } else if DRIFT_HINTS.iter().any(|h| haystack.contains(h)) {
        TrackType::Drift
    } else {
        TrackType::Circuit
    }
}

#[derive(Debug, Clone)]
pub struct PipelineMetadata {
    pub version_tag: String,
    pub category: CategoryTag,
    pub track_type: TrackType,
    pub is_click_based: bool,
    pub changes: Vec<String>,
}

const VERSION_TAG: &str = "0.2.5-preview1";

fn validate(car: &CarDescriptor, track: &TrackDescriptor) -> Result<()> {
    if car.car_id.trim().is_empty() {
        return Err(PipelineError::InputInvalid("car_id is empty".into()));
    }
    if track.track_id.trim().is_empty() {
        return Err(PipelineError::InputInvalid("track_id is empty".into()));
    }
    Ok(())
}

/// `generate`: pure and synchronous other than the read-only filesystem scan
/// inside the parameter cache (C6/C7).
pub fn generate(
    car: &CarDescriptor,
    track: &TrackDescriptor,
    behavior_id: &str,
    profile: Option<&Profile>,
    conditions: &Conditions,
    cache: &ParameterCache,
    trace: &mut DebugTrace,
) -> Result<(Setup, PipelineMetadata)> {
    validate(car, track)?;
    let _ = behavior_id; // metadata only, per design note 4

    let category = category::classify(car);
    trace.log(format!("category classified as {}", category.as_str()));

    let cat_targets = targets::targets_for(category);
    let track_type = detect_track_type(track);
    trace.log(format!("track_type detected as {track_type:?}"));

    let setup0 = baseline::build(
        car,
        track,
        cat_targets,
        profile.unwrap_or(&Profile::default()),
        conditions,
        track_type,
        track.is_high_speed(),
        track.is_low_speed(),
    );

    let setup1 = refiner::refine(
        setup0,
        category,
        cat_targets.rake_deg,
        track_type,
        car.car_id.as_str(),
        &car.content_path,
        cache,
    );

    let value_types = cache.value_types(&car.car_id, &car.content_path);
    let is_click_based = value_types.spring_is_clicks();

    let (setup2, changes) = if let Some(profile) = profile {
        sliders::apply_all(setup1, profile, is_click_based)
    } else {
        (setup1, Vec::new())
    };
    for c in &changes {
        trace.log(c.clone());
    }

    let metadata = PipelineMetadata {
        version_tag: VERSION_TAG.to_string(),
        category,
        track_type,
        is_click_based,
        changes,
    };

    Ok((setup2, metadata))
}

pub struct ExportResult {
    pub ok: bool,
    pub message: String,
    pub path: Option<std::path::PathBuf>,
    pub setup: Setup,
}

#[allow(clippy::too_many_arguments)]
pub fn generate_and_export(
    car: &CarDescriptor,
    track: &TrackDescriptor,
    behavior_id: &str,
    profile: Option<&Profile>,
    conditions: &Conditions,
    setups_root: &std::path::Path,
    filename: Option<&str>,
    overwrite: bool,
    cache: &ParameterCache,
    enable_debug_logging: bool,
) -> ExportResult {
    let mut trace = DebugTrace::new(enable_debug_logging);

    let (setup, metadata) = match generate(car, track, behavior_id, profile, conditions, cache, &mut trace) {
        Ok(v) => v,
        Err(e) => {
            return ExportResult {
                ok: false,
                message: e.to_string(),
                path: None,
                setup: Setup::new(),
            };
        }
    };

    let outcome = writer::write(
        &setup,
        car,
        track,
        metadata.category,
        setups_root,
        filename,
        overwrite,
        cache,
        &mut trace,
    );

    if enable_debug_logging {
        let _ = trace.persist(setups_root, &car.car_id);
    }

    match outcome {
        WriteOutcome::Ok { message, path } => ExportResult {
            ok: true,
            message,
            path: Some(path),
            setup,
        },
        WriteOutcome::Failed { message } => ExportResult {
            ok: false,
            message,
            path: None,
            setup,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touge_substring_detected() {
        let t = TrackDescriptor {
            track_id: "akina_downhill".into(),
            display_name: String::new(),
            config: String::new(),
            type_hint: String::new(),
            length_m: None,
        };
        assert_eq!(detect_track_type(&t), TrackType::Touge);
    }

    #[test]
    fn unmatched_track_is_circuit() {
        let t = TrackDescriptor {
            track_id: "ks_nurburgring".into(),
            display_name: String::new(),
            config: String::new(),
            type_hint: String::new(),
            length_m: None,
        };
        assert_eq!(detect_track_type(&t), TrackType::Circuit);
    }
}
