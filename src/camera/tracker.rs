use geo::Coord;

/// Degrees per radian, as approximated by the animation's camera math.
const DEGREES_PER_RADIAN: f64 = 57.29;
/// Approximate metres per degree of longitude over the continental US.
const METERS_PER_DEGREE_LNG: f64 = 70_000.0;
/// Approximate metres per degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 110_000.0;
/// Weight of the previous position when smoothing.
const SMOOTH_FACTOR: f64 = 0.95;

/// Linear interpolation from `start` (amount 0) to `end` (amount 1).
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * end
}

/// Computes the camera's ground position so its target stays in view,
/// optionally easing towards the previously returned position.
#[derive(Debug, Clone, Default)]
pub struct CameraTracker {
    previous: Option<Coord<f64>>,
}

impl CameraTracker {
    pub fn new() -> Self { Self::default() }

    /// Last position returned by [`CameraTracker::position`].
    #[inline] pub fn previous(&self) -> Option<Coord<f64>> { self.previous }

    /// Ground position of a camera at `altitude` metres looking at `target`
    /// with the given `pitch` and `bearing` (degrees).
    pub fn position(&mut self, pitch: f64, bearing: f64, target: Coord<f64>, altitude: f64, smooth: bool) -> Coord<f64> {
        let bearing_rad = bearing / DEGREES_PER_RADIAN;
        let pitch_rad = (90.0 - pitch) / DEGREES_PER_RADIAN;
        let ground_offset = altitude / pitch_rad.tan();

        let mut position = Coord {
            x: target.x + ground_offset * (-bearing_rad).sin() / METERS_PER_DEGREE_LNG,
            y: target.y - ground_offset * (-bearing_rad).cos() / METERS_PER_DEGREE_LAT,
        };

        if smooth {
            if let Some(previous) = self.previous {
                position = Coord {
                    x: lerp(position.x, previous.x, SMOOTH_FACTOR),
                    y: lerp(position.y, previous.y, SMOOTH_FACTOR),
                };
            }
        }

        self.previous = Some(position);
        position
    }
}
