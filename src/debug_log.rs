//! A3: debug trace sink. Accumulates human-readable lines during one
//! pipeline run and, when enabled, persists them alongside the setup that
//! run produced.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;

pub struct DebugTrace {
    enabled: bool,
    lines: Vec<String>,
}

impl DebugTrace {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, lines: Vec::new() }
    }

    pub fn log(&mut self, line: String) {
        if self.enabled {
            self.lines.push(line);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write `debug_<timestamp>.log` under `<setups_root>/<car_id>/`. No-op
    /// when tracing was disabled for this run.
    pub fn persist(&self, setups_root: &Path, car_id: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let dir = setups_root.join(car_id);
        fs::create_dir_all(&dir)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("debug_{timestamp}.log"));
        fs::write(path, self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trace_ignores_log_lines() {
        let mut trace = DebugTrace::new(false);
        trace.log("should not be kept".to_string());
        assert!(trace.lines().is_empty());
    }

    #[test]
    fn enabled_trace_keeps_log_lines_in_order() {
        let mut trace = DebugTrace::new(true);
        trace.log("first".to_string());
        trace.log("second".to_string());
        assert_eq!(trace.lines(), ["first", "second"]);
    }

    #[test]
    fn persist_writes_a_file_under_the_car_directory() {
        let dir = std::env::temp_dir().join(format!("acr_setup_test_debuglog_{}", std::process::id()));
        fs::remove_dir_all(&dir).ok();

        let mut trace = DebugTrace::new(true);
        trace.log("category classified as gt".to_string());
        trace.persist(&dir, "test_car").unwrap();

        let car_dir = dir.join("test_car");
        let entries: Vec<_> = fs::read_dir(&car_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);

        fs::remove_dir_all(&dir).ok();
    }
}
