use std::path::Path;

use ahash::AHashSet;
use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{feature::Id, Feature, GeoJson, Value};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::flowline::Flowline;
use crate::geom::Footprint;
use crate::naming::InlandWaterFeature;
use crate::route::{StopFeatureKind, StoppingFeature};

/// Name value the hydrography service uses for unnamed reaches.
const UNKNOWN_NAME: &str = "unknown";

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("[read_text] Failed to read {}", path.display()))
}

fn parse_features(text: &str) -> Result<Vec<Feature>> {
    match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection.features),
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::Geometry(_) => bail!("[parse_features] Expected a Feature or FeatureCollection, found a bare Geometry"),
    }
}

/// Property value by the first of `keys` that is present and not null.
fn property<'a>(feature: &'a Feature, keys: &[&str]) -> Option<&'a JsonValue> {
    let properties = feature.properties.as_ref()?;
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .find(|value| !value.is_null())
}

/// Interpret a JSON number (or numeric string) as an unsigned id.
fn as_id(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64().or_else(|| {
            n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64).map(|f| f as u64)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn required_id(feature: &Feature, keys: &[&str], index: usize) -> Result<u64> {
    let value = property(feature, keys)
        .ok_or_else(|| anyhow!("[required_id] Feature {index} has no {}", keys.join("/")))?;
    as_id(value).ok_or_else(|| anyhow!("[required_id] Feature {index} has non-numeric {}: {value}", keys[0]))
}

/// A non-empty string property, with the "unknown" sentinel treated as absent.
fn optional_name(feature: &Feature, keys: &[&str]) -> Option<String> {
    property(feature, keys)
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != UNKNOWN_NAME)
        .map(str::to_string)
}

fn to_coord(position: &[f64]) -> Result<Coord<f64>> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => bail!("[to_coord] Position needs at least two values, found {}", position.len()),
    }
}

fn to_line_string(positions: &[Vec<f64>]) -> Result<LineString<f64>> {
    positions.iter()
        .map(|p| to_coord(p))
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn to_polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| to_line_string(ring));
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[to_polygon] Polygon has no exterior ring"))??;
    Ok(Polygon::new(exterior, rings.collect::<Result<Vec<_>>>()?))
}

fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Flowline geometry; MultiLineString parts are concatenated in order.
fn line_geometry(feature: &Feature, index: usize) -> Result<LineString<f64>> {
    let geometry = feature.geometry.as_ref()
        .ok_or_else(|| anyhow!("[line_geometry] Feature {index} has no geometry"))?;
    match &geometry.value {
        Value::LineString(positions) => to_line_string(positions),
        Value::MultiLineString(lines) => {
            let coords = lines.iter()
                .map(|line| to_line_string(line))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .flat_map(|line| line.0)
                .collect::<Vec<_>>();
            Ok(LineString::new(coords))
        }
        other => bail!("[line_geometry] Feature {index} has unsupported geometry {}", geometry_type(other)),
    }
}

fn area_geometry(feature: &Feature, index: usize) -> Result<Footprint> {
    let geometry = feature.geometry.as_ref()
        .ok_or_else(|| anyhow!("[area_geometry] Feature {index} has no geometry"))?;
    match &geometry.value {
        Value::Polygon(rings) => Ok(Footprint::Polygon(to_polygon(rings)?)),
        Value::MultiPolygon(polygons) => Ok(Footprint::MultiPolygon(MultiPolygon(
            polygons.iter().map(|rings| to_polygon(rings)).collect::<Result<Vec<_>>>()?
        ))),
        other => bail!("[area_geometry] Feature {index} has unsupported geometry {}", geometry_type(other)),
    }
}

/// Parse flowlines from GeoJSON text as returned by the linked-data service.
/// Duplicate `comid`s are rejected.
pub fn parse_flowlines(text: &str) -> Result<Vec<Flowline>> {
    let features = parse_features(text)?;
    let mut seen = AHashSet::with_capacity(features.len());

    features.iter().enumerate()
        .map(|(i, feature)| {
            let comid = required_id(feature, &["nhdplus_comid", "comid"], i)?;
            if !seen.insert(comid) { bail!("[parse_flowlines] Duplicate comid {comid} at feature {i}") }

            Ok(Flowline::new(
                comid,
                required_id(feature, &["hydroseq"], i)?,
                required_id(feature, &["levelpathid", "levelpathi"], i)?,
                optional_name(feature, &["gnis_name", "nameid"]),
                line_geometry(feature, i)?,
            ))
        })
        .collect()
}

/// Parse inland water bodies. The id comes from the `id` property, the
/// feature id, or the feature's position in the file, in that order.
/// Ids must be unique across the file, whichever way they were derived.
pub fn parse_inland_features(text: &str) -> Result<Vec<InlandWaterFeature>> {
    let features = parse_features(text)?;
    let mut seen = AHashSet::with_capacity(features.len());

    features.iter().enumerate()
        .map(|(i, feature)| {
            let id = property(feature, &["id"]).and_then(as_id)
                .or_else(|| match &feature.id {
                    Some(Id::Number(n)) => n.as_u64(),
                    Some(Id::String(s)) => s.parse().ok(),
                    None => None,
                })
                .unwrap_or(i as u64);
            if !seen.insert(id) { bail!("[parse_inland_features] Duplicate inland feature id {id} at feature {i}") }
            Ok(InlandWaterFeature::new(id, optional_name(feature, &["stop_feature_name", "name"]), area_geometry(feature, i)?))
        })
        .collect()
}

/// Parse stopping features (oceans, bays, terminal lakes).
pub fn parse_stopping_features(text: &str) -> Result<Vec<StoppingFeature>> {
    parse_features(text)?.iter().enumerate()
        .map(|(i, feature)| {
            let name = optional_name(feature, &["stop_feature_name", "name"])
                .unwrap_or_else(|| format!("Stopping Feature {i}"));
            let kind = property(feature, &["stop_feature_type", "featurecla"])
                .and_then(JsonValue::as_str)
                .map(StopFeatureKind::classify)
                .unwrap_or(StopFeatureKind::Other(String::new()));
            Ok(StoppingFeature::new(name, kind, area_geometry(feature, i)?))
        })
        .collect()
}

/// Read flowlines from a GeoJSON file.
pub fn read_flowlines(path: &Path) -> Result<Vec<Flowline>> {
    let flowlines = parse_flowlines(&read_text(path)?)
        .with_context(|| format!("[read_flowlines] Invalid flowlines in {}", path.display()))?;
    info!(count = flowlines.len(), path = %path.display(), "read flowlines");
    Ok(flowlines)
}

/// Read inland water features from a GeoJSON file.
pub fn read_inland_features(path: &Path) -> Result<Vec<InlandWaterFeature>> {
    let inland = parse_inland_features(&read_text(path)?)
        .with_context(|| format!("[read_inland_features] Invalid inland features in {}", path.display()))?;
    info!(count = inland.len(), path = %path.display(), "read inland water features");
    Ok(inland)
}

/// Read stopping features from a GeoJSON file.
pub fn read_stopping_features(path: &Path) -> Result<Vec<StoppingFeature>> {
    let stops = parse_stopping_features(&read_text(path)?)
        .with_context(|| format!("[read_stopping_features] Invalid stopping features in {}", path.display()))?;
    info!(count = stops.len(), path = %path.display(), "read stopping features");
    Ok(stops)
}
