use ahash::AHashMap;
use geo::Coord;
use serde::Serialize;

use crate::flowline::Flowline;
use crate::geom::path_length;

/// Consecutive reaches sharing a `feature_id`, as listed to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureGroup {
    pub feature_id: String,
    pub feature_name: String,
    pub renamed_inland: bool,
    /// Member reaches in downstream order.
    pub comids: Vec<u64>,
    /// Summed great-circle length of the member reaches, in metres.
    pub length_m: f64,
    /// First vertex of the first member reach.
    #[serde(skip)]
    pub start: Option<Coord<f64>>,
}

/// Collapse named flowlines into one group per `feature_id`.
///
/// Groups are ordered by first appearance. A reuse of an id further
/// downstream is folded into its earlier group, which is why rivers resuming
/// below a lake carry a distinct `-copy` id.
pub fn group_features(flowlines: &[Flowline]) -> Vec<FeatureGroup> {
    let mut groups: Vec<FeatureGroup> = Vec::new();
    let mut by_id: AHashMap<&str, usize> = AHashMap::new();

    for flowline in flowlines {
        let length = path_length(flowline.coords());
        match by_id.get(flowline.feature_id.as_str()) {
            Some(&i) => {
                groups[i].comids.push(flowline.comid);
                groups[i].length_m += length;
            }
            None => {
                by_id.insert(&flowline.feature_id, groups.len());
                groups.push(FeatureGroup {
                    feature_id: flowline.feature_id.clone(),
                    feature_name: flowline.feature_name.clone(),
                    renamed_inland: flowline.renamed_inland,
                    comids: vec![flowline.comid],
                    length_m: length,
                    start: flowline.start(),
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    fn segment(comid: u64, id: &str, name: &str) -> Flowline {
        let mut flowline = Flowline::new(comid, 100 - comid, comid, Some(name.into()),
            line_string![(x: 0.0, y: comid as f64 * 0.01), (x: 0.0, y: (comid + 1) as f64 * 0.01)]);
        flowline.relabel(name.into(), id.into(), false);
        flowline
    }

    #[test]
    fn consecutive_reaches_share_a_group() {
        let groups = group_features(&[
            segment(1, "Ohio River", "Ohio River"),
            segment(2, "Ohio River", "Ohio River"),
            segment(3, "Mississippi River", "Mississippi River"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].comids, vec![1, 2]);
        assert_eq!(groups[1].comids, vec![3]);
        assert!(groups[0].length_m > groups[1].length_m);
    }

    #[test]
    fn copy_ids_stay_separate_while_reused_ids_merge() {
        let groups = group_features(&[
            segment(1, "Grand River", "Grand River"),
            segment(2, "Lake Pleasant", "Lake Pleasant"),
            segment(3, "Grand River-copy", "Grand River"),
            segment(4, "Lake Pleasant", "Lake Pleasant"),
        ]);
        let ids: Vec<_> = groups.iter().map(|g| g.feature_id.as_str()).collect();
        assert_eq!(ids, vec!["Grand River", "Lake Pleasant", "Grand River-copy"]);
        assert_eq!(groups[1].comids, vec![2, 4]);
        assert_eq!(groups[2].feature_name, "Grand River");
    }

    #[test]
    fn no_flowlines_no_groups() {
        assert!(group_features(&[]).is_empty());
    }
}
