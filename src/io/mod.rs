//! Reading and writing the files the pipeline exchanges: GeoJSON flowlines,
//! inland water and stopping features, JSON name overrides and the named
//! outputs.

mod export;
mod features;
mod overrides;

pub use export::{named_flowlines_to_geojson, path_to_json, write_json, write_named_flowlines};
pub use features::{
    parse_flowlines, parse_inland_features, parse_stopping_features,
    read_flowlines, read_inland_features, read_stopping_features,
};
pub use overrides::{parse_overrides, read_overrides};
