//! Helpers for values fetched for only a subset of a route: terrain
//! elevations sampled every few vertices and flow rates fetched for every
//! N-th flowline.

/// Every `step`-th item starting with the first. A step of zero is treated as one.
pub fn sample_every<T: Copy>(items: &[T], step: usize) -> Vec<T> {
    items.iter().step_by(step.max(1)).copied().collect()
}

/// Replace missing samples with a neighbour: the first sample borrows the
/// next one, any later sample repeats the previous (already filled) value.
/// Values that cannot be filled from a neighbour become zero.
pub fn fill_gaps(values: &[Option<f64>]) -> Vec<f64> {
    let mut filled: Vec<f64> = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let value = match (value, i) {
            (Some(v), _) => *v,
            (None, 0) => values.get(1).copied().flatten().unwrap_or(0.0),
            (None, _) => filled[i - 1],
        };
        filled.push(value);
    }
    filled
}

/// Stride that keeps at most `max_samples` fetches for `len` items (at least one).
#[inline]
pub fn thinning_index(len: usize, max_samples: usize) -> usize {
    len.div_ceil(max_samples.max(1)).max(1)
}

/// True if item `i` is fetched rather than interpolated.
#[inline]
pub fn is_measured(i: usize, thinning_index: usize, buffer: usize) -> bool {
    i <= buffer || i % thinning_index.max(1) == 0
}

/// Fill values for items skipped by thinning.
///
/// Items within `buffer` of the start or on a multiple of `thinning_index` keep
/// their measured value. Others are interpolated linearly between the
/// surrounding multiples and rounded up; when the next multiple is past the
/// end (or unmeasured) the previous value is carried forward. Unmeasured
/// items with no measured predecessor stay None.
pub fn interpolate_thinned(values: &[Option<f64>], thinning_index: usize, buffer: usize) -> Vec<Option<f64>> {
    let step = thinning_index.max(1);
    (0..values.len())
        .map(|i| {
            if is_measured(i, step, buffer) { return values[i] }

            let last = values[step * (i / step)]?;
            let next = values.get(step * i.div_ceil(step)).copied().flatten();
            let estimate = match next {
                Some(next) => last + (next - last) * ((i % step) as f64 / step as f64),
                None => last,
            };
            Some(estimate.ceil())
        })
        .collect()
}
