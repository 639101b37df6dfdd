use anyhow::Result;
use riverrun::io::{read_flowlines, write_json};
use riverrun::{round_to_digits, sort_downstream, FlightPlan, PathConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::CameraArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./camera.json".into());

    let config = match &args.config {
        Some(path) => PathConfig::from_json_file(path)?,
        None => PathConfig::default(),
    };

    println!("[camera] loading flowlines from {}", args.flowlines.display());
    let mut flowlines = read_flowlines(&args.flowlines)?;
    sort_downstream(&mut flowlines);

    let plan = FlightPlan::build(&flowlines, &config);
    println!("[camera] route {} km, {} path vertices, {} camera points, {} elevation samples",
        round_to_digits(plan.route_distance_m / 1000.0, 1), plan.path.len(), plan.camera.len(), plan.elevation_samples.len());

    println!("[camera] writing camera path to {}", out_path.display());
    write_json(out_path, &plan.to_json())?;

    Ok(())
}
