use geo::{BoundingRect, Coord, Intersects, MultiPolygon, Point, Polygon, Rect};

/// Areal geometry of an inland water body or stopping feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Footprint {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Footprint {
    /// True if `coord` lies inside or on the boundary of the footprint.
    pub fn contains_coord(&self, coord: Coord<f64>) -> bool {
        match self {
            Footprint::Polygon(polygon) => polygon.intersects(&Point::from(coord)),
            Footprint::MultiPolygon(parts) => parts.0.iter()
                .any(|part| part.intersects(&Point::from(coord))),
        }
    }

    /// True if the footprint shares any point with `other`.
    /// A MultiPolygon intersects when any of its parts does.
    pub fn intersects_polygon(&self, other: &Polygon<f64>) -> bool {
        match self {
            Footprint::Polygon(polygon) => polygon.intersects(other),
            Footprint::MultiPolygon(parts) => parts.0.iter()
                .any(|part| part.intersects(other)),
        }
    }

    /// Axis-aligned bounds, or None for an empty footprint.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            Footprint::Polygon(polygon) => polygon.bounding_rect(),
            Footprint::MultiPolygon(parts) => parts.bounding_rect(),
        }
    }

    /// Number of polygon parts.
    #[inline]
    pub fn num_parts(&self) -> usize {
        match self {
            Footprint::Polygon(_) => 1,
            Footprint::MultiPolygon(parts) => parts.0.len(),
        }
    }
}

impl From<Polygon<f64>> for Footprint {
    fn from(polygon: Polygon<f64>) -> Self { Footprint::Polygon(polygon) }
}

impl From<MultiPolygon<f64>> for Footprint {
    fn from(parts: MultiPolygon<f64>) -> Self { Footprint::MultiPolygon(parts) }
}

/// Smallest rectangle covering every coordinate, or None if there are none.
pub fn coords_bounds<'a>(coords: impl IntoIterator<Item = &'a Coord<f64>>) -> Option<Rect<f64>> {
    coords.into_iter()
        .map(|&c| Rect::new(c, c))
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}
