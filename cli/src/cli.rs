use std::path::PathBuf;

/// River run naming and camera path CLI
#[derive(clap::Parser, Debug)]
#[command(name = "riverrun", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Assign display names to a downstream run of flowlines
    Name(NameArgs),

    /// Derive the smoothed route and trailing camera path
    Camera(CameraArgs),

    /// List stopping features the route's bounding box touches
    Stops(StopsArgs),
}

#[derive(clap::Args, Debug)]
pub struct NameArgs {
    /// Flowlines GeoJSON (FeatureCollection of LineStrings)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub flowlines: PathBuf,

    /// Name overrides JSON keyed by levelpathid
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub overrides: Option<PathBuf>,

    /// Inland water features GeoJSON (lakes, reservoirs)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub inland: Option<PathBuf>,

    /// Output GeoJSON file, defaults to "./named.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct CameraArgs {
    /// Flowlines GeoJSON (FeatureCollection of LineStrings)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub flowlines: PathBuf,

    /// Path configuration JSON; defaults apply to missing fields
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output JSON file, defaults to "./camera.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct StopsArgs {
    /// Flowlines GeoJSON (FeatureCollection of LineStrings)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub flowlines: PathBuf,

    /// Stopping features GeoJSON (oceans, bays, terminal lakes)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub stops: PathBuf,
}
