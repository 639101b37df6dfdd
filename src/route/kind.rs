use std::fmt;

use serde::Serialize;

/// Feature classes treated as open water when classifying coastline data.
const OCEAN_CLASSES: [&str; 13] = [
    "strait", "gulf", "river", "inlet", "sound", "lagoon", "ocean",
    "sea", "bay", "fjord", "generic", "channel", "reef",
];

/// Feature classes treated as closed inland water.
const LAKE_CLASSES: [&str; 3] = ["alkaline lake", "lake", "reservoir"];

/// What kind of terminal basin a stopping feature is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopFeatureKind {
    Ocean,
    InlandLake,
    Country,
    Other(String),
}

impl StopFeatureKind {
    /// Classify a `stop_feature_type` value or a raw `featurecla` class, case-insensitively.
    pub fn classify(class: &str) -> Self {
        let class = class.trim().to_lowercase();
        match class.as_str() {
            "inland lake" => StopFeatureKind::InlandLake,
            "country" => StopFeatureKind::Country,
            c if OCEAN_CLASSES.contains(&c) => StopFeatureKind::Ocean,
            c if LAKE_CLASSES.contains(&c) => StopFeatureKind::InlandLake,
            _ => StopFeatureKind::Other(class),
        }
    }
}

impl fmt::Display for StopFeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopFeatureKind::Ocean => write!(f, "ocean"),
            StopFeatureKind::InlandLake => write!(f, "inland lake"),
            StopFeatureKind::Country => write!(f, "country"),
            StopFeatureKind::Other(class) => write!(f, "{class}"),
        }
    }
}
