use ahash::AHashMap;

/// Curated `levelpathid -> feature_name` table for waterways the hydrography
/// names wrongly or not at all.
#[derive(Debug, Clone, Default)]
pub struct NameOverrides {
    names: AHashMap<u64, String>,
}

impl NameOverrides {
    pub fn new() -> Self { Self::default() }

    /// Register (or replace) the override for `levelpathid`.
    pub fn insert(&mut self, levelpathid: u64, feature_name: impl Into<String>) {
        self.names.insert(levelpathid, feature_name.into());
    }

    /// Override name for `levelpathid`, if one exists.
    #[inline] pub fn get(&self, levelpathid: u64) -> Option<&str> { self.names.get(&levelpathid).map(String::as_str) }

    #[inline] pub fn len(&self) -> usize { self.names.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

impl<S: Into<String>> FromIterator<(u64, S)> for NameOverrides {
    fn from_iter<I: IntoIterator<Item = (u64, S)>>(iter: I) -> Self {
        Self { names: iter.into_iter().map(|(id, name)| (id, name.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_override_is_none() {
        let overrides: NameOverrides = [(5, "Rio Grande")].into_iter().collect();
        assert_eq!(overrides.get(5), Some("Rio Grande"));
        assert_eq!(overrides.get(6), None);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn insert_replaces_existing() {
        let mut overrides = NameOverrides::new();
        overrides.insert(5, "Old Name");
        overrides.insert(5, "New Name");
        assert_eq!(overrides.get(5), Some("New Name"));
    }
}
