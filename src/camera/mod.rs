mod altitude;
mod path;
mod tracker;

pub use altitude::{tick_elevation, TickAltitude};
pub use path::{artificial_camera_point, camera_path, pitch_from_elevation, project_distance};
pub use tracker::{lerp, CameraTracker};
