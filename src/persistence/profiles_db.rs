//! A6: SQLite-backed persistence for driver profiles and lap-time feedback,
//! keyed by car/track/profile. Schema and access pattern mirror the
//! existing telemetry SQLite exporter: a `const SCHEMA` batch-executed once,
//! then `params!`-based parameterised statements per call.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::models::Profile;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS driver_profiles (
    profile_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    rotation REAL NOT NULL DEFAULT 0.5,
    slide REAL NOT NULL DEFAULT 0.5,
    aggression REAL NOT NULL DEFAULT 0.0,
    drift REAL NOT NULL DEFAULT 0.0,
    performance REAL NOT NULL DEFAULT 0.0,
    aero REAL NOT NULL DEFAULT 0.0,
    behavior_id TEXT NOT NULL DEFAULT 'balanced',
    created_at TEXT NOT NULL,
    last_used_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS lap_feedback (
    feedback_id INTEGER PRIMARY KEY AUTOINCREMENT,
    profile_id INTEGER NOT NULL,
    car_id TEXT NOT NULL,
    track_id TEXT NOT NULL,
    best_lap_ms INTEGER,
    rating INTEGER NOT NULL DEFAULT 3,
    comments TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (profile_id) REFERENCES driver_profiles(profile_id)
);

CREATE INDEX IF NOT EXISTS idx_lap_feedback_car_track ON lap_feedback(car_id, track_id);
"#;

pub struct ProfilesDb {
    conn: Connection,
}

#[derive(Debug, Clone)]
pub struct StoredProfile {
    pub profile_id: i64,
    pub name: String,
    pub profile: Profile,
    pub behavior_id: String,
}

impl ProfilesDb {
    pub fn open(db_path: &Path) -> rusqlite::Result<Self> {
        if let Some(parent) = db_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn save_profile(&self, name: &str, profile: &Profile, behavior_id: &str) -> rusqlite::Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO driver_profiles (name, rotation, slide, aggression, drift, performance, aero, behavior_id, created_at, last_used_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
            params![
                name,
                profile.rotation,
                profile.slide,
                profile.aggression,
                profile.drift,
                profile.performance,
                profile.aero,
                behavior_id,
                now,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn load_profile(&self, profile_id: i64) -> rusqlite::Result<Option<StoredProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT profile_id, name, rotation, slide, aggression, drift, performance, aero, behavior_id
             FROM driver_profiles WHERE profile_id = ?1",
        )?;
        let mut rows = stmt.query(params![profile_id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(StoredProfile {
                profile_id: row.get(0)?,
                name: row.get(1)?,
                profile: Profile {
                    rotation: row.get(2)?,
                    slide: row.get(3)?,
                    aggression: row.get(4)?,
                    drift: row.get(5)?,
                    performance: row.get(6)?,
                    aero: row.get(7)?,
                },
                behavior_id: row.get(8)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn record_feedback(&self, profile_id: i64, car_id: &str, track_id: &str, best_lap_ms: Option<i64>, rating: i32, comments: Option<&str>) -> rusqlite::Result<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO lap_feedback (profile_id, car_id, track_id, best_lap_ms, rating, comments, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![profile_id, car_id, track_id, best_lap_ms, rating, comments, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn best_lap_ms(&self, car_id: &str, track_id: &str) -> rusqlite::Result<Option<i64>> {
        self.conn.query_row(
            "SELECT MIN(best_lap_ms) FROM lap_feedback WHERE car_id = ?1 AND track_id = ?2 AND best_lap_ms IS NOT NULL",
            params![car_id, track_id],
            |row| row.get(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("acr_setup_test_{name}_{}.db", std::process::id()))
    }

    #[test]
    fn save_and_reload_a_profile_round_trips() {
        let path = temp_db_path("profiles_roundtrip");
        std::fs::remove_file(&path).ok();
        let db = ProfilesDb::open(&path).unwrap();

        let profile = Profile { rotation: 0.7, slide: 0.3, aggression: 0.2, drift: 0.0, performance: 0.5, aero: 0.1 };
        let id = db.save_profile("test driver", &profile, "balanced").unwrap();

        let loaded = db.load_profile(id).unwrap().unwrap();
        assert_eq!(loaded.name, "test driver");
        assert_eq!(loaded.profile.rotation, 0.7);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn best_lap_picks_the_minimum_recorded_time() {
        let path = temp_db_path("profiles_bestlap");
        std::fs::remove_file(&path).ok();
        let db = ProfilesDb::open(&path).unwrap();

        let profile = Profile::default();
        let id = db.save_profile("driver", &profile, "balanced").unwrap();
        db.record_feedback(id, "car_a", "track_a", Some(95_400), 4, None).unwrap();
        db.record_feedback(id, "car_a", "track_a", Some(94_100), 5, Some("better")).unwrap();

        assert_eq!(db.best_lap_ms("car_a", "track_a").unwrap(), Some(94_100));

        std::fs::remove_file(&path).ok();
    }
}
