use geo::{Coord, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::geom::Footprint;

/// A bounding box in an R-tree, associated with a footprint by index.
#[derive(Debug, Clone)]
pub(crate) struct BoundingBox {
    idx: usize, // Index of corresponding footprint in the indexed slice
    bbox: Rect<f64>,
}

impl BoundingBox {
    pub(crate) fn new(idx: usize, bbox: Rect<f64>) -> Self {
        Self { idx, bbox }
    }

    /// Get the index of the corresponding footprint.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// R-tree over footprint bounding boxes. Empty footprints are never indexed.
#[derive(Debug, Clone)]
pub(crate) struct FootprintIndex {
    rtree: RTree<BoundingBox>,
}

impl FootprintIndex {
    pub(crate) fn new<'a>(footprints: impl IntoIterator<Item = &'a Footprint>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                footprints.into_iter().enumerate()
                    .filter_map(|(i, footprint)| footprint.bounding_rect().map(|rect| BoundingBox::new(i, rect)))
                    .collect()
            ),
        }
    }

    /// Indices whose bounding box contains `coord`, in ascending order.
    pub(crate) fn candidates_at(&self, coord: Coord<f64>) -> Vec<usize> {
        let envelope = AABB::from_point([coord.x, coord.y]);
        let mut hits = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(BoundingBox::idx)
            .collect::<Vec<_>>();
        hits.sort_unstable();
        hits
    }

    /// Indices whose bounding box intersects `rect`, in ascending order.
    pub(crate) fn candidates_in(&self, rect: &Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        let mut hits = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(BoundingBox::idx)
            .collect::<Vec<_>>();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Polygon;

    fn rect_footprint(min: (f64, f64), max: (f64, f64)) -> Footprint {
        let polygon: Polygon<f64> = Rect::new(Coord { x: min.0, y: min.1 }, Coord { x: max.0, y: max.1 }).to_polygon();
        Footprint::from(polygon)
    }

    #[test]
    fn point_query_returns_sorted_candidates() {
        let footprints = vec![
            rect_footprint((0.0, 0.0), (2.0, 2.0)),
            rect_footprint((10.0, 10.0), (11.0, 11.0)),
            rect_footprint((1.0, 1.0), (3.0, 3.0)),
        ];
        let index = FootprintIndex::new(&footprints);
        assert_eq!(index.candidates_at(Coord { x: 1.5, y: 1.5 }), vec![0, 2]);
        assert!(index.candidates_at(Coord { x: 5.0, y: 5.0 }).is_empty());
    }

    #[test]
    fn rect_query_matches_overlapping_boxes() {
        let footprints = vec![
            rect_footprint((0.0, 0.0), (2.0, 2.0)),
            rect_footprint((10.0, 10.0), (11.0, 11.0)),
        ];
        let index = FootprintIndex::new(&footprints);
        let query = Rect::new(Coord { x: 9.0, y: 9.0 }, Coord { x: 10.5, y: 10.5 });
        assert_eq!(index.candidates_in(&query), vec![1]);
    }
}
