use serde::Deserialize;

/// Scaling applied to terrain elevation when computing camera altitude.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TickAltitude {
    pub altitude_multiplier: f64,
    pub camera_base_altitude: f64,
    pub terrain_multiplier: f64,
}

impl Default for TickAltitude {
    fn default() -> Self {
        Self {
            altitude_multiplier: 1.0,
            camera_base_altitude: 4000.0,
            terrain_multiplier: 1.1,
        }
    }
}

/// Camera altitude at animation `phase` (0..=1) over sampled terrain `elevations`.
///
/// Elevation is linearly interpolated between the samples bracketing
/// `phase * len`, rounded, then scaled by `params`. Returns None without samples.
pub fn tick_elevation(phase: f64, elevations: &[f64], params: &TickAltitude) -> Option<f64> {
    let last_index = elevations.len().checked_sub(1)?;
    let position = elevations.len() as f64 * phase.clamp(0.0, 1.0);

    let lower = (position.floor() as usize).min(last_index);
    let upper = position.ceil() as usize;
    let elevation_last = elevations[lower];
    let elevation_next = elevations.get(upper).copied()
        .unwrap_or(elevations[upper.saturating_sub(1).min(last_index)]);
    let step_progress = position - position.floor();

    let estimate = elevation_last + (elevation_next - elevation_last) * step_progress;
    Some(params.altitude_multiplier * (params.camera_base_altitude + params.terrain_multiplier * estimate.round()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: TickAltitude = TickAltitude { altitude_multiplier: 1.0, camera_base_altitude: 0.0, terrain_multiplier: 1.0 };

    #[test]
    fn interpolates_between_samples() {
        let elevations = [100.0, 200.0, 300.0, 400.0];
        // position 1.5 -> halfway between 200 and 300
        assert_eq!(tick_elevation(0.375, &elevations, &UNIT), Some(250.0));
        assert_eq!(tick_elevation(0.0, &elevations, &UNIT), Some(100.0));
    }

    #[test]
    fn end_of_run_uses_final_sample() {
        let elevations = [100.0, 200.0, 300.0, 400.0];
        assert_eq!(tick_elevation(1.0, &elevations, &UNIT), Some(400.0));
    }

    #[test]
    fn scaling_is_applied_after_rounding() {
        let params = TickAltitude { altitude_multiplier: 2.0, camera_base_altitude: 1000.0, terrain_multiplier: 0.5 };
        assert_eq!(tick_elevation(0.0, &[10.4], &params), Some(2.0 * (1000.0 + 0.5 * 10.0)));
    }

    #[test]
    fn no_samples_no_altitude() {
        assert_eq!(tick_elevation(0.5, &[], &TickAltitude::default()), None);
    }
}
