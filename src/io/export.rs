use std::path::Path;

use anyhow::{Context, Result};
use geo::Coord;
use serde_json::{json, Value};
use tracing::info;

use crate::flowline::Flowline;

#[inline]
fn position(coord: &Coord<f64>) -> Value { json!([coord.x, coord.y]) }

/// Named flowlines as a GeoJSON FeatureCollection, in the given order.
pub fn named_flowlines_to_geojson(flowlines: &[Flowline]) -> Value {
    let features: Vec<Value> = flowlines.iter().map(|flowline| {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": flowline.coords().iter().map(position).collect::<Vec<_>>(),
            },
            "properties": {
                "comid": flowline.comid,
                "hydroseq": flowline.hydroseq,
                "levelpathid": flowline.levelpathid,
                "feature_name": flowline.feature_name,
                "feature_id": flowline.feature_id,
                "renamed_inland": flowline.renamed_inland,
            }
        })
    }).collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// A coordinate path as a JSON array of `[lng, lat]` pairs.
pub fn path_to_json(path: &[Coord<f64>]) -> Value {
    Value::Array(path.iter().map(position).collect())
}

/// Pretty-print `value` to `path`.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("[write_json] Failed to serialize JSON")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("[write_json] Failed to write {}", path.display()))
}

/// Write named flowlines to a GeoJSON file.
pub fn write_named_flowlines(path: &Path, flowlines: &[Flowline]) -> Result<()> {
    write_json(path, &named_flowlines_to_geojson(flowlines))?;
    info!(count = flowlines.len(), path = %path.display(), "wrote named flowlines");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    use crate::io::parse_flowlines;

    fn named(comid: u64, hydroseq: u64) -> Flowline {
        let mut flowline = Flowline::new(comid, hydroseq, 7, Some("Ohio River".into()),
            line_string![(x: -84.5, y: 39.1), (x: -84.4, y: 39.0)]);
        flowline.relabel("Ohio River".into(), "Ohio River".into(), false);
        flowline
    }

    #[test]
    fn named_output_carries_naming_properties() {
        let value = named_flowlines_to_geojson(&[named(1, 20), named(2, 10)]);
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["feature_id"], "Ohio River");
        assert_eq!(features[1]["properties"]["comid"], 2);
        assert_eq!(features[0]["geometry"]["coordinates"][1][0], -84.4);
    }

    #[test]
    fn written_output_reads_back_as_flowlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("named.geojson");
        write_named_flowlines(&path, &[named(1, 20), named(2, 10)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let flowlines = parse_flowlines(&text).unwrap();
        assert_eq!(flowlines.iter().map(|f| f.comid).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(flowlines[0].hydroseq, 20);
    }

    #[test]
    fn path_is_a_pair_array() {
        let value = path_to_json(&[Coord { x: 1.0, y: 2.0 }]);
        assert_eq!(value, json!([[1.0, 2.0]]));
    }
}
