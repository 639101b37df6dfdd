use geo::Coord;

use crate::geom::{bearing, destination, path_length};

/// Destination `meters` from `from`, heading towards `to`.
#[inline]
pub fn project_distance(from: Coord<f64>, to: Coord<f64>, meters: f64) -> Coord<f64> {
    destination(from, bearing(from, to), meters)
}

/// Point `distance_gap` metres behind `target`, on the side facing `origin`.
#[inline]
pub fn artificial_camera_point(origin: Coord<f64>, target: Coord<f64>, distance_gap: f64) -> Coord<f64> {
    project_distance(target, origin, distance_gap)
}

/// Camera positions trailing the travelling point.
///
/// The camera looks at `path[i + target_distance]` from a point projected back
/// towards `path[i]`, at a constant ground distance of `route_distance_m`
/// minus the length of the truncated path. This keeps the camera a steady
/// distance behind the target even when vertex spacing is uneven.
///
/// Returns `path.len() - target_distance` points (none if the path is too short).
pub fn camera_path(path: &[Coord<f64>], target_distance: usize, route_distance_m: f64) -> Vec<Coord<f64>> {
    let truncated = &path[..path.len().saturating_sub(target_distance)];
    let distance_gap = route_distance_m - path_length(truncated);

    truncated.iter().enumerate()
        .map(|(i, &coord)| project_distance(path[i + target_distance], coord, distance_gap))
        .collect()
}

/// Camera pitch in degrees for a camera `elevation` above ground at horizontal `distance`.
/// `distance` must be non-zero.
#[inline]
pub fn pitch_from_elevation(elevation: f64, distance: f64) -> f64 {
    90.0 - (elevation / distance).atan().to_degrees()
}
