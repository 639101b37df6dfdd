//! Everything the viewer needs to fly a camera down a named route.

use geo::Coord;
use serde_json::{json, Value};
use tracing::debug;

use crate::camera::{camera_path, pitch_from_elevation, tick_elevation, TickAltitude};
use crate::config::PathConfig;
use crate::flowline::{route_path, Flowline};
use crate::geom::{path_length, smooth_path};
use crate::io::path_to_json;
use crate::sample::{fill_gaps, interpolate_thinned, is_measured, sample_every, thinning_index};

/// Flowlines at the head of the route that are always fetched, regardless of thinning.
pub const FLOWRATE_BUFFER: usize = 50;

/// Smoothed route and trailing camera path for one run of flowlines.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    /// Smoothed route vertices the travelling point follows.
    pub path: Vec<Coord<f64>>,
    /// Camera positions; `path.len() - camera_target_distance` of them.
    pub camera: Vec<Coord<f64>>,
    /// Length of the smoothed route plus the configured camera lead, in metres.
    pub route_distance_m: f64,
    /// Ground distance between camera and target, in metres.
    pub camera_gap_m: f64,
    /// Vertices at which terrain elevation should be fetched.
    pub elevation_samples: Vec<Coord<f64>>,
    /// Flowlines whose flow rate should be fetched; the rest are interpolated.
    pub flowrate_comids: Vec<u64>,
    /// Stride between fetched flow rates past [`FLOWRATE_BUFFER`].
    pub thinning_index: usize,
    pub flowline_count: usize,
}

impl FlightPlan {
    /// Derive the plan from flowlines already in downstream order.
    pub fn build(flowlines: &[Flowline], config: &PathConfig) -> Self {
        let raw = route_path(flowlines);
        let path = smooth_path(&raw, config.smoothing, config.preserve_start, config.preserve_end);
        let route_distance_m = path_length(&path) + config.camera_lead_m;

        let truncated = path.len().saturating_sub(config.camera_target_distance);
        let camera_gap_m = route_distance_m - path_length(&path[..truncated]);
        let camera = camera_path(&path, config.camera_target_distance, route_distance_m);

        let thin = thinning_index(flowlines.len(), config.max_flowline_samples);
        let flowrate_comids = flowlines.iter().enumerate()
            .filter(|(i, _)| is_measured(*i, thin, FLOWRATE_BUFFER))
            .map(|(_, flowline)| flowline.comid)
            .collect::<Vec<_>>();

        debug!(vertices = raw.len(), smoothed = path.len(), camera = camera.len(), thin, "built flight plan");
        Self {
            elevation_samples: sample_every(&path, config.elevation_step),
            path,
            camera,
            route_distance_m,
            camera_gap_m,
            flowrate_comids,
            thinning_index: thin,
            flowline_count: flowlines.len(),
        }
    }

    /// Flow rate for every flowline, in route order.
    ///
    /// `fetched` holds the values fetched for [`Self::flowrate_comids`], in
    /// the same order (None where a fetch failed). Skipped flowlines are
    /// interpolated between their fetched neighbours.
    pub fn flowrates(&self, fetched: &[Option<f64>]) -> Vec<Option<f64>> {
        let mut fetched = fetched.iter().copied();
        let values = (0..self.flowline_count)
            .map(|i| if is_measured(i, self.thinning_index, FLOWRATE_BUFFER) { fetched.next().flatten() } else { None })
            .collect::<Vec<_>>();
        interpolate_thinned(&values, self.thinning_index, FLOWRATE_BUFFER)
    }

    /// Camera altitude at each of `frames` evenly spaced animation phases,
    /// given elevations fetched for [`Self::elevation_samples`] (missing ones
    /// filled from their neighbours).
    pub fn altitude_profile(&self, elevations: &[Option<f64>], frames: usize, params: &TickAltitude) -> Vec<f64> {
        let filled = fill_gaps(elevations);
        let last = frames.saturating_sub(1).max(1) as f64;
        (0..frames)
            .filter_map(|frame| tick_elevation(frame as f64 / last, &filled, params))
            .collect()
    }

    /// Camera pitch for each altitude, looking at the target `camera_gap_m` away.
    pub fn pitches(&self, altitudes: &[f64]) -> Vec<f64> {
        if self.camera_gap_m <= 0.0 { return Vec::new() }
        altitudes.iter().map(|&altitude| pitch_from_elevation(altitude, self.camera_gap_m)).collect()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "route_distance_m": self.route_distance_m,
            "camera_gap_m": self.camera_gap_m,
            "path": path_to_json(&self.path),
            "camera": path_to_json(&self.camera),
            "elevation_samples": path_to_json(&self.elevation_samples),
            "flowrate_comids": self.flowrate_comids,
        })
    }
}
