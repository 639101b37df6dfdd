mod kind;

use geo::Polygon;
use tracing::debug;

use crate::flowline::Flowline;
use crate::geom::{coords_bounds, Footprint, FootprintIndex};

pub use kind::StopFeatureKind;

/// A terminal basin (ocean, bay, endorheic lake) a route may end in.
#[derive(Debug, Clone, PartialEq)]
pub struct StoppingFeature {
    pub name: String,
    pub kind: StopFeatureKind,
    pub footprint: Footprint,
}

impl StoppingFeature {
    pub fn new(name: impl Into<String>, kind: StopFeatureKind, footprint: impl Into<Footprint>) -> Self {
        Self { name: name.into(), kind, footprint: footprint.into() }
    }
}

/// Stopping features with a bounding-box index.
#[derive(Debug, Clone)]
pub struct StopIndex {
    features: Vec<StoppingFeature>,
    index: FootprintIndex,
}

impl StopIndex {
    pub fn new(features: Vec<StoppingFeature>) -> Self {
        Self {
            index: FootprintIndex::new(features.iter().map(|feature| &feature.footprint)),
            features,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Features intersecting the bounding box of the whole route, in input order.
    ///
    /// The test is against the route's bounding rectangle, not its line, so
    /// features near a strongly curved route may be reported as well.
    pub fn on_route(&self, flowlines: &[Flowline]) -> Vec<&StoppingFeature> {
        let Some(bounds) = route_bounds(flowlines) else { return Vec::new() };
        let area = bounds.to_polygon();

        let hits = self.index.candidates_in(&bounds).into_iter()
            .map(|i| &self.features[i])
            .filter(|feature| feature.footprint.intersects_polygon(&area))
            .collect::<Vec<_>>();
        debug!(candidates = self.features.len(), hits = hits.len(), "filtered stopping features");
        hits
    }
}

/// Bounding rectangle of every vertex of every flowline.
fn route_bounds(flowlines: &[Flowline]) -> Option<geo::Rect<f64>> {
    coords_bounds(flowlines.iter().flat_map(|flowline| flowline.coords()))
}

/// Candidates whose footprint intersects the route's bounding box.
/// A MultiPolygon candidate matches when any of its parts does.
pub fn features_on_route<'a>(candidates: &'a [StoppingFeature], flowlines: &[Flowline]) -> Vec<&'a StoppingFeature> {
    let Some(bounds) = route_bounds(flowlines) else { return Vec::new() };
    let area: Polygon<f64> = bounds.to_polygon();

    candidates.iter()
        .filter(|candidate| candidate.footprint.intersects_polygon(&area))
        .collect()
}
