//! A4: thin projection over the vendored shared-memory crate. Reuses
//! `ACCSharedMemory`/`AccStatus` verbatim; never re-derives the shared
//! memory layout, only narrows each poll down to the fields named in the
//! telemetry contract (car/track identity, status, lap/sector times,
//! tire temps, G-force, throttle/brake/steer).

use acc_shared_memory_rs::{ACCError, ACCSharedMemory, AccStatus};

/// One narrowed snapshot of the shared-memory state, as consumed by the
/// driving-style analyser and by car/track auto-detect.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub car_model: String,
    pub track: String,
    pub track_config: String,
    pub status: AccStatus,
    pub current_time_ms: i32,
    pub last_time_ms: i32,
    pub best_time_ms: i32,
    pub last_sector_time_ms: i32,
    /// Front-left, front-right, rear-left, rear-right tyre core temperature (C).
    pub tyre_core_temp: [f32; 4],
    pub g_force_lat: f32,
    pub g_force_long: f32,
    pub throttle: f32,
    pub brake: f32,
    pub steer: f32,
}

pub struct TelemetryReader {
    handle: ACCSharedMemory,
}

impl TelemetryReader {
    pub fn new() -> Result<Self, ACCError> {
        Ok(Self { handle: ACCSharedMemory::new()? })
    }

    /// Poll once. `Ok(None)` means no new physics packet since the last
    /// poll (the caller should sleep and retry), matching the recorder's
    /// existing poll loop.
    pub fn poll(&mut self) -> Result<Option<TelemetrySample>, ACCError> {
        let data = match self.handle.read_shared_memory()? {
            Some(d) => d,
            None => return Ok(None),
        };

        Ok(Some(TelemetrySample {
            car_model: data.statics.car_model.clone(),
            track: data.statics.track.clone(),
            track_config: data.graphics.track_status.clone(),
            status: data.graphics.status,
            current_time_ms: data.graphics.current_time,
            last_time_ms: data.graphics.last_time,
            best_time_ms: data.graphics.best_time,
            last_sector_time_ms: data.graphics.last_sector_time,
            tyre_core_temp: [
                data.physics.tyre_core_temp.front_left,
                data.physics.tyre_core_temp.front_right,
                data.physics.tyre_core_temp.rear_left,
                data.physics.tyre_core_temp.rear_right,
            ],
            g_force_lat: data.physics.g_force.x,
            g_force_long: data.physics.g_force.z,
            throttle: data.physics.gas,
            brake: data.physics.brake,
            steer: steer_normalized(data.physics.steer_angle),
        }))
    }
}

/// Normalize a steering-wheel angle in degrees to [-1, 1] assuming a
/// typical 450-degree wheel; clamps beyond that range rather than panicking.
fn steer_normalized(steer_angle_deg: f32) -> f32 {
    (steer_angle_deg / 450.0).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steer_normalized_clamps_beyond_full_lock() {
        assert_eq!(steer_normalized(900.0), 1.0);
        assert_eq!(steer_normalized(-900.0), -1.0);
    }

    #[test]
    fn steer_normalized_center_is_zero() {
        assert_eq!(steer_normalized(0.0), 0.0);
    }
}
