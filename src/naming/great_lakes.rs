use tracing::debug;

use crate::flowline::Flowline;

/// Name the hydrography gives to every Great Lakes connecting channel.
const MISLABELED_CHANNEL: &str = "Detroit River";

/// Channel actually flowing out of the given lake.
fn outflow_channel(lake: &str) -> Option<&'static str> {
    match lake {
        "Lake Huron" => Some("St. Clair River"),
        "Lake Erie" => Some("Niagara River"),
        "Lake Ontario" => Some("Saint Lawrence River"),
        _ => None,
    }
}

/// Running state of the downstream scan.
#[derive(Debug, Clone, Default)]
struct ChannelScan {
    last_lake: Option<String>,
}

impl ChannelScan {
    /// State after visiting a flowline named `name`.
    fn visit(self, name: &str) -> Self {
        let is_new_lake = name.contains("Lake") && self.last_lake.as_deref() != Some(name);
        if is_new_lake { Self { last_lake: Some(name.to_string()) } } else { self }
    }
}

/// Rename "Detroit River" reaches after the lake they drain.
/// Expects flowlines in downstream order.
pub(crate) fn correct_great_lakes_channels(flowlines: Vec<Flowline>) -> Vec<Flowline> {
    let (out, _) = flowlines.into_iter()
        .fold((Vec::new(), ChannelScan::default()), |(mut out, scan), mut flowline| {
            let channel = (flowline.feature_name == MISLABELED_CHANNEL)
                .then(|| scan.last_lake.as_deref().and_then(outflow_channel))
                .flatten();

            if let Some(channel) = channel {
                debug!(comid = flowline.comid, channel, "corrected Great Lakes channel");
                let renamed_inland = flowline.renamed_inland;
                flowline.relabel(channel.to_string(), channel.to_string(), renamed_inland);
            }

            let scan = scan.visit(&flowline.feature_name);
            out.push(flowline);
            (out, scan)
        });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn named(comid: u64, name: &str) -> Flowline {
        let mut flowline = Flowline::new(comid, 100 - comid, comid, Some(name.into()), LineString::new(vec![]));
        flowline.feature_name = name.into();
        flowline.feature_id = name.into();
        flowline
    }

    fn names(flowlines: &[Flowline]) -> Vec<&str> {
        flowlines.iter().map(|f| f.feature_name.as_str()).collect()
    }

    #[test]
    fn detroit_river_renamed_after_each_lake() {
        let out = correct_great_lakes_channels(vec![
            named(1, "Lake Huron"),
            named(2, "Detroit River"),
            named(3, "Lake St. Clair"),
            named(4, "Detroit River"),
            named(5, "Lake Erie"),
            named(6, "Lake Erie"),
            named(7, "Detroit River"),
            named(8, "Lake Ontario"),
            named(9, "Detroit River"),
        ]);
        assert_eq!(names(&out), vec![
            "Lake Huron",
            "St. Clair River",
            "Lake St. Clair",
            "Detroit River",
            "Lake Erie",
            "Lake Erie",
            "Niagara River",
            "Lake Ontario",
            "Saint Lawrence River",
        ]);
        assert_eq!(out[1].feature_id, "St. Clair River");
    }

    #[test]
    fn detroit_river_without_a_preceding_lake_is_kept() {
        let out = correct_great_lakes_channels(vec![named(1, "Clinton River"), named(2, "Detroit River")]);
        assert_eq!(names(&out), vec!["Clinton River", "Detroit River"]);
    }
}
