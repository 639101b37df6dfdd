use geo::{Coord, LineString};

/// One reach of a river network, as delivered by the hydrography service.
///
/// `feature_name`, `feature_id` and `renamed_inland` are derived fields: they
/// start empty and are populated by [`crate::assign_names`].
#[derive(Debug, Clone, PartialEq)]
pub struct Flowline {
    /// Unique NHDPlus identifier.
    pub comid: u64,
    /// Hydrologic sequence; larger values lie further upstream.
    pub hydroseq: u64,
    /// Grouping key for reaches belonging to the same waterway.
    pub levelpathid: u64,
    /// GNIS name, or None for unnamed reaches.
    pub name: Option<String>,
    /// Ordered `[lng, lat]` vertices, upstream first.
    pub geometry: LineString<f64>,

    pub feature_name: String,
    pub feature_id: String,
    pub renamed_inland: bool,
}

impl Flowline {
    pub fn new(comid: u64, hydroseq: u64, levelpathid: u64, name: Option<String>, geometry: LineString<f64>) -> Self {
        Self {
            comid,
            hydroseq,
            levelpathid,
            name,
            geometry,
            feature_name: String::new(),
            feature_id: String::new(),
            renamed_inland: false,
        }
    }

    /// First vertex of the reach, if it has any.
    #[inline] pub fn start(&self) -> Option<Coord<f64>> { self.geometry.0.first().copied() }

    /// Vertices of the reach.
    #[inline] pub fn coords(&self) -> &[Coord<f64>] { &self.geometry.0 }

    /// Overwrite the three derived naming fields at once.
    #[inline]
    pub(crate) fn relabel(&mut self, feature_name: String, feature_id: String, renamed_inland: bool) {
        self.feature_name = feature_name;
        self.feature_id = feature_id;
        self.renamed_inland = renamed_inland;
    }
}

/// Order flowlines downstream: descending `hydroseq`, ties by ascending `comid`.
pub fn sort_downstream(flowlines: &mut [Flowline]) {
    flowlines.sort_by(|a, b| b.hydroseq.cmp(&a.hydroseq).then(a.comid.cmp(&b.comid)));
}

/// Concatenate the vertices of every flowline, in the given order.
pub fn route_coords(flowlines: &[Flowline]) -> Vec<Coord<f64>> {
    flowlines.iter()
        .flat_map(|flowline| flowline.coords().iter().copied())
        .collect()
}

/// Concatenate the vertices of every flowline, dropping a vertex that repeats
/// the previous one (consecutive reaches share their junction vertex).
pub fn route_path(flowlines: &[Flowline]) -> Vec<Coord<f64>> {
    let mut path = route_coords(flowlines);
    path.dedup();
    path
}
