use anyhow::Result;
use riverrun::io::{read_flowlines, read_inland_features, read_overrides, write_named_flowlines};
use riverrun::{assign_names, group_features, round_to_digits, InlandWaters, NameOverrides};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::NameArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./named.geojson".into());

    println!("[name] loading flowlines from {}", args.flowlines.display());
    let flowlines = read_flowlines(&args.flowlines)?;

    let overrides = match &args.overrides {
        Some(path) => read_overrides(path)?,
        None => NameOverrides::new(),
    };
    let inland = match &args.inland {
        Some(path) => InlandWaters::new(read_inland_features(path)?),
        None => InlandWaters::default(),
    };

    println!("[name] naming {} flowlines ({} overrides, {} inland features)", flowlines.len(), overrides.len(), inland.len());
    let named = assign_names(flowlines, &overrides, &inland);

    for group in group_features(&named) {
        let marker = if group.renamed_inland { " (inland)" } else { "" };
        println!("[name]   {}{marker}: {} reaches, {} km",
            group.feature_name, group.comids.len(), round_to_digits(group.length_m / 1000.0, 1));
    }

    println!("[name] writing named flowlines to {}", out_path.display());
    write_named_flowlines(out_path, &named)?;

    Ok(())
}
