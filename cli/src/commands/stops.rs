use anyhow::Result;
use riverrun::io::{read_flowlines, read_stopping_features};
use riverrun::StopIndex;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::StopsArgs) -> Result<()> {
    println!("[stops] loading flowlines from {}", args.flowlines.display());
    let flowlines = read_flowlines(&args.flowlines)?;

    println!("[stops] loading stopping features from {}", args.stops.display());
    let index = StopIndex::new(read_stopping_features(&args.stops)?);

    let hits = index.on_route(&flowlines);
    println!("[stops] {} of {} stopping features touch the route", hits.len(), index.len());
    for feature in hits {
        println!("[stops]   {} ({}, {} parts)", feature.name, feature.kind, feature.footprint.num_parts());
    }

    Ok(())
}
