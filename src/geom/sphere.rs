use geo::{Bearing, Coord, Destination, Distance, Haversine, Point};

/// Initial bearing in degrees from `from` to `to` along the great circle.
#[inline]
pub fn bearing(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Haversine.bearing(Point::from(from), Point::from(to))
}

/// Great-circle distance in metres between two lon/lat coordinates.
#[inline]
pub fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to))
}

/// Coordinate reached by travelling `meters` from `origin` along `bearing` (degrees).
#[inline]
pub fn destination(origin: Coord<f64>, bearing: f64, meters: f64) -> Coord<f64> {
    Haversine.destination(Point::from(origin), bearing, meters).0
}

/// Total great-circle length in metres of a coordinate path.
/// Empty and single-point paths have zero length.
pub fn path_length(coords: &[Coord<f64>]) -> f64 {
    coords.windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}

/// Round `value` to `digits` decimal places (negative digits round to tens, hundreds, ...).
#[inline]
pub fn round_to_digits(value: f64, digits: i32) -> f64 {
    let divider = 10f64.powi(digits);
    (value * divider).round() / divider
}
