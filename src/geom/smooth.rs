use geo::Coord;

pub const DEFAULT_SMOOTHING: usize = 1;
pub const DEFAULT_PRESERVE_START: usize = 2;
pub const DEFAULT_PRESERVE_END: usize = 1;

/// Centred moving average over `[i - smoothing, i + smoothing]`, clamped to the path.
///
/// The first `preserve_start` and last `preserve_end` coordinates are copied
/// unchanged so the route keeps its true origin and mouth. Paths of three or
/// fewer coordinates are returned as-is.
pub fn smooth_path(
    coords: &[Coord<f64>],
    smoothing: usize,
    preserve_start: usize,
    preserve_end: usize,
) -> Vec<Coord<f64>> {
    let len = coords.len();
    if len <= 3 { return coords.to_vec() }

    coords.iter().enumerate()
        .map(|(i, &coord)| {
            if i < preserve_start || i >= len.saturating_sub(preserve_end) { return coord }

            let window = &coords[i.saturating_sub(smoothing)..i.saturating_add(smoothing).saturating_add(1).min(len)];
            let n = window.len() as f64;
            let (sum_x, sum_y) = window.iter()
                .fold((0.0, 0.0), |(x, y), c| (x + c.x, y + c.y));
            Coord { x: sum_x / n, y: sum_y / n }
        })
        .collect()
}

/// Smooth with the defaults used for route animation (window 3, keep 2 leading and 1 trailing point).
#[inline]
pub fn smooth_path_default(coords: &[Coord<f64>]) -> Vec<Coord<f64>> {
    smooth_path(coords, DEFAULT_SMOOTHING, DEFAULT_PRESERVE_START, DEFAULT_PRESERVE_END)
}
