mod base;
mod great_lakes;
mod groups;
mod inland;
mod interrupted;
mod overrides;
mod trailing;

use tracing::info;

use crate::flowline::{sort_downstream, Flowline};

pub use groups::{group_features, FeatureGroup};
pub use inland::{InlandWaterFeature, InlandWaters};
pub use overrides::NameOverrides;

/// Assign `feature_name`, `feature_id` and `renamed_inland` to every flowline.
///
/// Runs, in order: base naming (overrides win), inland-water relabeling by
/// start vertex, sort into downstream order (descending `hydroseq`, ties by
/// `comid`), Great Lakes channel correction (only for runs through Lake
/// Ontario), interrupted-lake correction and trailing-stub correction.
/// Inland relabeling runs after overrides and may replace an override's name.
pub fn assign_names(flowlines: Vec<Flowline>, overrides: &NameOverrides, inland: &InlandWaters) -> Vec<Flowline> {
    let count = flowlines.len();
    let named = base::base_names(flowlines, overrides);
    let (mut named, great_lakes) = inland::relabel_inland(named, inland);

    sort_downstream(&mut named);

    let named = if great_lakes { great_lakes::correct_great_lakes_channels(named) } else { named };
    let named = interrupted::correct_interrupted_lakes(named);
    let named = trailing::correct_trailing_stub(named);

    info!(
        flowlines = count,
        inland = named.iter().filter(|f| f.renamed_inland).count(),
        great_lakes,
        "assigned feature names"
    );
    named
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, LineString, Rect};

    fn reach(comid: u64, hydroseq: u64, levelpathid: u64, name: Option<&str>, start: (f64, f64)) -> Flowline {
        let coords = vec![Coord { x: start.0, y: start.1 }, Coord { x: start.0 + 0.1, y: start.1 }];
        Flowline::new(comid, hydroseq, levelpathid, name.map(str::to_string), LineString::new(coords))
    }

    fn lake(id: u64, name: &str, min_x: f64) -> InlandWaterFeature {
        let rect = Rect::new(Coord { x: min_x, y: 0.0 }, Coord { x: min_x + 1.0, y: 1.0 });
        InlandWaterFeature::new(id, Some(name.to_string()), rect.to_polygon())
    }

    fn labels(flowlines: &[Flowline]) -> Vec<(u64, &str, &str)> {
        flowlines.iter().map(|f| (f.comid, f.feature_name.as_str(), f.feature_id.as_str())).collect()
    }

    #[test]
    fn unnamed_reach_is_named_after_its_level_path() {
        let named = assign_names(vec![
            reach(3, 10, 5, Some("Ohio River"), (2.0, 0.5)),
            reach(1, 30, 5, Some("Ohio River"), (0.0, 0.5)),
            reach(2, 20, 99, None, (1.0, 0.5)),
        ], &NameOverrides::new(), &InlandWaters::default());

        assert_eq!(labels(&named), vec![
            (1, "Ohio River", "Ohio River"),
            (2, "Unidentified River 99", "99"),
            (3, "Ohio River", "Ohio River"),
        ]);
    }

    #[test]
    fn output_is_strictly_downstream() {
        let named = assign_names(
            (1..=8).map(|i| reach(i, (i * 37) % 11, i, Some("Creek"), (i as f64, 5.0))).collect(),
            &NameOverrides::new(), &InlandWaters::default(),
        );
        assert!(named.windows(2).all(|pair| pair[0].hydroseq > pair[1].hydroseq));
    }

    #[test]
    fn override_replaces_name_and_id() {
        let overrides: NameOverrides = [(7, "Rio Grande")].into_iter().collect();
        let named = assign_names(vec![
            reach(1, 20, 7, Some("Rio Bravo"), (0.0, 5.0)),
            reach(2, 10, 7, None, (1.0, 5.0)),
        ], &overrides, &InlandWaters::default());

        assert_eq!(labels(&named), vec![(1, "Rio Grande", "Rio Grande"), (2, "Rio Grande", "Rio Grande")]);
    }

    #[test]
    fn reach_starting_in_a_lake_takes_its_name() {
        let inland = InlandWaters::new(vec![lake(1, "Lake Erie", 0.0)]);
        let named = assign_names(vec![reach(1, 10, 7, Some("Maumee River"), (0.5, 0.5))], &NameOverrides::new(), &inland);

        assert_eq!(labels(&named), vec![(1, "Lake Erie", "Lake Erie")]);
        assert!(named[0].renamed_inland);
    }

    #[test]
    fn inland_water_replaces_an_override() {
        let overrides: NameOverrides = [(7, "Rio Grande")].into_iter().collect();
        let inland = InlandWaters::new(vec![lake(1, "Elephant Butte Reservoir", 0.0)]);
        let named = assign_names(vec![reach(1, 10, 7, None, (0.5, 0.5))], &overrides, &inland);
        assert_eq!(named[0].feature_name, "Elephant Butte Reservoir");
    }

    #[test]
    fn river_resuming_below_a_lake_gets_a_copy_id() {
        let inland = InlandWaters::new(vec![lake(1, "Lake Pleasant", 2.0)]);
        let named = assign_names(vec![
            reach(1, 30, 7, Some("Grand River"), (0.5, 5.0)),
            reach(2, 20, 7, Some("Grand River"), (2.5, 0.5)),
            reach(3, 10, 7, Some("Grand River"), (4.5, 5.0)),
        ], &NameOverrides::new(), &inland);

        assert_eq!(labels(&named), vec![
            (1, "Grand River", "Grand River"),
            (2, "Lake Pleasant", "Lake Pleasant"),
            (3, "Grand River", "Grand River-copy"),
        ]);
    }

    #[test]
    fn detroit_river_below_lake_huron_becomes_st_clair() {
        let inland = InlandWaters::new(vec![lake(1, "Lake Huron", 0.0), lake(2, "Lake Ontario", 5.0)]);
        let named = assign_names(vec![
            reach(1, 60, 1, Some("Black River"), (-1.0, 0.5)),
            reach(2, 50, 2, Some("Detroit River"), (0.5, 0.5)),
            reach(3, 40, 2, Some("Detroit River"), (2.0, 0.5)),
            reach(4, 30, 2, Some("Detroit River"), (5.5, 0.5)),
            reach(5, 20, 3, Some("Saint Lawrence River"), (7.0, 0.5)),
            reach(6, 10, 3, Some("Saint Lawrence River"), (8.0, 0.5)),
        ], &NameOverrides::new(), &inland);

        assert_eq!(named[1].feature_name, "Lake Huron");
        assert_eq!((named[2].feature_name.as_str(), named[2].feature_id.as_str()), ("St. Clair River", "St. Clair River"));
        assert_eq!(named[3].feature_name, "Lake Ontario");
        assert_eq!(named[4].feature_name, "Saint Lawrence River");
    }

    #[test]
    fn detroit_river_is_kept_without_lake_ontario() {
        let inland = InlandWaters::new(vec![lake(1, "Lake Huron", 0.0)]);
        let named = assign_names(vec![
            reach(1, 20, 2, Some("Detroit River"), (0.5, 0.5)),
            reach(2, 10, 2, Some("Detroit River"), (2.0, 0.5)),
        ], &NameOverrides::new(), &inland);
        assert_eq!(named[1].feature_name, "Detroit River");
    }

    #[test]
    fn no_flowlines_no_names() {
        assert!(assign_names(Vec::new(), &NameOverrides::new(), &InlandWaters::default()).is_empty());
    }
}
