use crate::flowline::Flowline;
use crate::naming::NameOverrides;

/// Display name given to reaches without a GNIS name.
pub(crate) fn unidentified_name(levelpathid: u64) -> String {
    format!("Unidentified River {levelpathid}")
}

/// Seed `feature_name`/`feature_id` from the GNIS name (or the level path for
/// unnamed reaches). An override for the level path always wins.
pub(crate) fn base_names(flowlines: Vec<Flowline>, overrides: &NameOverrides) -> Vec<Flowline> {
    flowlines.into_iter()
        .map(|mut flowline| {
            let (feature_name, feature_id) = match (overrides.get(flowline.levelpathid), &flowline.name) {
                (Some(name), _) => (name.to_string(), name.to_string()),
                (None, Some(name)) => (name.clone(), name.clone()),
                (None, None) => (unidentified_name(flowline.levelpathid), flowline.levelpathid.to_string()),
            };
            flowline.feature_name = feature_name;
            flowline.feature_id = feature_id;
            flowline
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::LineString;

    fn flowline(levelpathid: u64, name: Option<&str>) -> Flowline {
        Flowline::new(1, 1, levelpathid, name.map(str::to_string), LineString::new(vec![]))
    }

    #[test]
    fn named_reach_uses_its_name() {
        let named = base_names(vec![flowline(3, Some("Ohio River"))], &NameOverrides::new());
        assert_eq!(named[0].feature_name, "Ohio River");
        assert_eq!(named[0].feature_id, "Ohio River");
    }

    #[test]
    fn unnamed_reach_uses_level_path() {
        let named = base_names(vec![flowline(99, None)], &NameOverrides::new());
        assert_eq!(named[0].feature_name, "Unidentified River 99");
        assert_eq!(named[0].feature_id, "99");
    }

    #[test]
    fn override_beats_both_named_and_unnamed() {
        let overrides: NameOverrides = [(3, "Big Muddy"), (99, "Little Creek")].into_iter().collect();
        let named = base_names(vec![flowline(3, Some("Ohio River")), flowline(99, None)], &overrides);
        assert_eq!((named[0].feature_name.as_str(), named[0].feature_id.as_str()), ("Big Muddy", "Big Muddy"));
        assert_eq!((named[1].feature_name.as_str(), named[1].feature_id.as_str()), ("Little Creek", "Little Creek"));
    }
}
