use tracing::debug;

use crate::flowline::Flowline;
use crate::geom::{Footprint, FootprintIndex};

/// Display name that marks a run as passing through the Great Lakes chain.
pub(crate) const GREAT_LAKES_MARKER: &str = "Lake Ontario";

/// A lake or reservoir that interrupts a river's named continuity.
#[derive(Debug, Clone, PartialEq)]
pub struct InlandWaterFeature {
    pub id: u64,
    /// Name of the water body, or None when the source left it blank.
    pub name: Option<String>,
    pub footprint: Footprint,
}

impl InlandWaterFeature {
    pub fn new(id: u64, name: Option<String>, footprint: impl Into<Footprint>) -> Self {
        Self { id, name, footprint: footprint.into() }
    }

    /// Name shown for reaches inside this water body.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Inland Water Feature {}", self.id),
        }
    }
}

/// Inland water features with a bounding-box index for start-vertex lookups.
#[derive(Debug, Clone)]
pub struct InlandWaters {
    features: Vec<InlandWaterFeature>,
    index: FootprintIndex,
}

impl InlandWaters {
    pub fn new(features: Vec<InlandWaterFeature>) -> Self {
        Self {
            index: FootprintIndex::new(features.iter().map(|feature| &feature.footprint)),
            features,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Every feature whose footprint covers `flowline`'s first vertex, in input order.
    /// Reaches that merely cross a water body without starting in it never match.
    pub fn containing_start<'a>(&'a self, flowline: &Flowline) -> impl Iterator<Item = &'a InlandWaterFeature> + 'a {
        let start = flowline.start();
        let candidates = start.map(|coord| self.index.candidates_at(coord)).unwrap_or_default();
        candidates.into_iter()
            .map(|i| &self.features[i])
            .filter(move |feature| start.is_some_and(|coord| feature.footprint.contains_coord(coord)))
    }
}

impl Default for InlandWaters {
    fn default() -> Self { Self::new(Vec::new()) }
}

/// Relabel every reach that starts inside an inland water body.
///
/// When several features cover the same start vertex the last one wins.
/// Returns the relabeled flowlines and whether any relabeling used
/// [`GREAT_LAKES_MARKER`].
pub(crate) fn relabel_inland(flowlines: Vec<Flowline>, inland: &InlandWaters) -> (Vec<Flowline>, bool) {
    flowlines.into_iter()
        .fold((Vec::new(), false), |(mut out, great_lakes), mut flowline| {
            let names = inland.containing_start(&flowline)
                .map(InlandWaterFeature::display_name)
                .collect::<Vec<_>>();
            let hit_marker = names.iter().any(|name| name == GREAT_LAKES_MARKER);

            if let Some(name) = names.into_iter().last() {
                debug!(comid = flowline.comid, from = %flowline.feature_name, to = %name, "relabeled inland reach");
                flowline.relabel(name.clone(), name, true);
            }

            out.push(flowline);
            (out, great_lakes || hit_marker)
        })
}
