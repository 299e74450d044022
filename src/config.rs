//! Configuration loading for acr_setup and acr_telemetry_watch.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Root of the game's setups tree, e.g. `Documents/Assetto Corsa/setups`.
    /// When absent the pipeline still runs; C6/C7/C9 just see an empty tree.
    #[serde(default)]
    pub setups_root: Option<String>,
    #[serde(default = "default_enable_debug_logging")]
    pub enable_debug_logging: bool,
    /// One of "safe", "balanced", "attack", "drift", or a custom tag; carried
    /// through to `PipelineMetadata` and the generated filename, not
    /// interpreted by the pipeline itself.
    #[serde(default = "default_behavior_id")]
    pub behavior_id: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            setups_root: None,
            enable_debug_logging: default_enable_debug_logging(),
            behavior_id: default_behavior_id(),
            telemetry: TelemetryConfig::default(),
            persistence: PersistenceConfig::default(),
        }
    }
}

fn default_enable_debug_logging() -> bool {
    true
}

fn default_behavior_id() -> String {
    "balanced".into()
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TelemetryConfig {
    /// Poll rate in Hz for the shared-memory watcher loop.
    #[serde(default = "default_poll_rate_hz")]
    pub poll_rate_hz: u64,
    /// How long to sleep between polls when no session is live (milliseconds).
    #[serde(default = "default_idle_sleep_ms")]
    pub idle_sleep_ms: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { poll_rate_hz: default_poll_rate_hz(), idle_sleep_ms: default_idle_sleep_ms() }
    }
}

fn default_poll_rate_hz() -> u64 {
    10
}

fn default_idle_sleep_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PersistenceConfig {
    /// SQLite database for driver profiles and setup records (A6).
    #[serde(default = "default_sqlite_path")]
    pub sqlite_db_path: String,
    /// JSON history log for driving-style/feedback notes (A7).
    #[serde(default = "default_history_path")]
    pub history_json_path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self { sqlite_db_path: default_sqlite_path(), history_json_path: default_history_path() }
    }
}

fn default_sqlite_path() -> String {
    "acr_setup_profiles.db".into()
}

fn default_history_path() -> String {
    "acr_setup_history.json".into()
}

/// Load config from standard locations:
/// 1. ./acr_setup.toml (current working directory)
/// 2. ~/.config/acr_setup/config.toml
pub fn load_config() -> Config {
    for path in config_paths() {
        if path.exists() {
            if let Ok(s) = std::fs::read_to_string(&path) {
                match toml::from_str(&s) {
                    Ok(cfg) => return cfg,
                    Err(e) => eprintln!("[config] parse error in {}: {}", path.display(), e),
                }
            }
        }
    }
    Config::default()
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("acr_setup.toml"));
    }
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("acr_setup").join("config.toml"));
    }
    paths
}

/// Resolve a path (relative or absolute). Relative paths are resolved against CWD.
pub fn resolve_path(s: &str) -> PathBuf {
    let p = Path::new(s);
    if p.is_absolute() {
        p.to_path_buf()
    } else if let Ok(cwd) = std::env::current_dir() {
        cwd.join(p)
    } else {
        p.to_path_buf()
    }
}

/// Resolve `setups_root` from config, falling back to the platform default
/// Documents/Assetto Corsa/setups location when unset.
pub fn resolve_setups_root(cfg: &Config) -> Option<PathBuf> {
    match &cfg.setups_root {
        Some(s) if !s.is_empty() => Some(resolve_path(s)),
        _ => dirs::document_dir().map(|d| d.join("Assetto Corsa").join("setups")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_debug_logging_enabled() {
        let cfg = Config::default();
        assert!(cfg.enable_debug_logging);
        assert_eq!(cfg.behavior_id, "balanced");
    }

    #[test]
    fn resolve_path_keeps_absolute_paths_untouched() {
        let p = resolve_path("/tmp/somewhere");
        assert_eq!(p, PathBuf::from("/tmp/somewhere"));
    }
}
