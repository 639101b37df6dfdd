mod bbox;
mod footprint;
mod smooth;
mod sphere;

pub(crate) use bbox::FootprintIndex;
pub use footprint::{coords_bounds, Footprint};
pub use smooth::{smooth_path, smooth_path_default, DEFAULT_PRESERVE_END, DEFAULT_PRESERVE_START, DEFAULT_SMOOTHING};
pub use sphere::{bearing, destination, path_length, round_to_digits};
#[cfg(test)]
pub(crate) use sphere::distance;
