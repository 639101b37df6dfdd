use tracing::debug;

use crate::flowline::Flowline;

/// Running state of the downstream scan for rivers resuming after a lake.
#[derive(Debug, Clone, Default)]
struct ResumeScan {
    /// Last river reach seen before an inland interruption.
    last_feature_id: Option<String>,
    last_feature_name: Option<String>,
    /// Original id of the river currently being carried as a copy.
    current_feature: Option<String>,
    previous_inland: bool,
}

impl ResumeScan {
    fn resumes(&self, flowline: &Flowline) -> bool {
        self.previous_inland || self.current_feature.as_deref() == Some(flowline.feature_id.as_str())
    }
}

/// Give a river that continues below a lake a distinct `feature_id`.
///
/// For `river -> lake -> same river`, the downstream part keeps its name but
/// takes `"<upstream id>-copy"` as id, so deduplicating by id does not fold
/// it back into its upstream self. Expects flowlines in downstream order.
pub(crate) fn correct_interrupted_lakes(flowlines: Vec<Flowline>) -> Vec<Flowline> {
    let (out, _) = flowlines.into_iter()
        .fold((Vec::new(), ResumeScan::default()), |(mut out, scan), mut flowline| {
            let scan = if flowline.renamed_inland {
                ResumeScan { previous_inland: true, ..scan }
            } else if scan.resumes(&flowline) && scan.last_feature_name.as_deref() == Some(flowline.feature_name.as_str()) {
                let copy_id = format!("{}-copy", scan.last_feature_id.as_deref().unwrap_or_default());
                debug!(comid = flowline.comid, feature_id = %copy_id, "river resumes below inland water");
                let original_id = std::mem::replace(&mut flowline.feature_id, copy_id);
                ResumeScan { current_feature: Some(original_id), previous_inland: false, ..scan }
            } else {
                ResumeScan {
                    last_feature_id: Some(flowline.feature_id.clone()),
                    last_feature_name: Some(flowline.feature_name.clone()),
                    current_feature: None,
                    previous_inland: false,
                }
            };

            out.push(flowline);
            (out, scan)
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn segment(comid: u64, name: &str, inland: bool) -> Flowline {
        let mut flowline = Flowline::new(comid, 100 - comid, comid, Some(name.into()), LineString::new(vec![]));
        flowline.relabel(name.into(), name.into(), inland);
        flowline
    }

    fn ids(flowlines: &[Flowline]) -> Vec<&str> {
        flowlines.iter().map(|f| f.feature_id.as_str()).collect()
    }

    #[test]
    fn river_resuming_after_lake_gets_copy_id() {
        let out = correct_interrupted_lakes(vec![
            segment(1, "Grand River", false),
            segment(2, "Grand River", false),
            segment(3, "Lake Pleasant", true),
            segment(4, "Grand River", false),
            segment(5, "Grand River", false),
        ]);
        assert_eq!(ids(&out), vec!["Grand River", "Grand River", "Lake Pleasant", "Grand River-copy", "Grand River-copy"]);
        assert_eq!(out[3].feature_name, "Grand River");
    }

    #[test]
    fn copy_carries_across_several_interruptions() {
        let out = correct_interrupted_lakes(vec![
            segment(1, "Grand River", false),
            segment(2, "Lake A", true),
            segment(3, "Grand River", false),
            segment(4, "Lake B", true),
            segment(5, "Lake B", true),
            segment(6, "Grand River", false),
        ]);
        assert_eq!(ids(&out), vec!["Grand River", "Lake A", "Grand River-copy", "Lake B", "Lake B", "Grand River-copy"]);
    }

    #[test]
    fn different_river_after_lake_is_untouched() {
        let out = correct_interrupted_lakes(vec![
            segment(1, "Grand River", false),
            segment(2, "Lake Pleasant", true),
            segment(3, "Maple River", false),
            segment(4, "Maple River", false),
            segment(5, "Lake Two", true),
            segment(6, "Maple River", false),
        ]);
        assert_eq!(ids(&out), vec!["Grand River", "Lake Pleasant", "Maple River", "Maple River", "Lake Two", "Maple River-copy"]);
    }

    #[test]
    fn leading_lake_has_nothing_to_copy() {
        let out = correct_interrupted_lakes(vec![segment(1, "Lake Pleasant", true), segment(2, "Grand River", false)]);
        assert_eq!(ids(&out), vec!["Lake Pleasant", "Grand River"]);
    }
}
