#![doc = "Riverrun: feature naming and camera paths for downstream river runs"]
pub mod camera;
mod config;
mod flight;
mod flowline;
mod geom;
pub mod io;
mod naming;
mod route;
pub mod sample;

#[doc(inline)]
pub use flowline::{route_coords, route_path, sort_downstream, Flowline};

#[doc(inline)]
pub use naming::{assign_names, group_features, FeatureGroup, InlandWaterFeature, InlandWaters, NameOverrides};

#[doc(inline)]
pub use route::{features_on_route, StopFeatureKind, StopIndex, StoppingFeature};

#[doc(inline)]
pub use geom::{path_length, round_to_digits, smooth_path, smooth_path_default, Footprint};

#[doc(inline)]
pub use camera::{camera_path, pitch_from_elevation};

#[doc(inline)]
pub use config::PathConfig;

#[doc(inline)]
pub use flight::{FlightPlan, FLOWRATE_BUFFER};
