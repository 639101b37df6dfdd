use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::naming::NameOverrides;

/// An override entry: either the bare name or a record carrying it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OverrideEntry {
    Name(String),
    Record { feature_name: String },
}

impl OverrideEntry {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Record { feature_name: name } => name,
        }
    }
}

/// Parse a `{ "<levelpathid>": ... }` override table.
pub fn parse_overrides(text: &str) -> Result<NameOverrides> {
    let entries: BTreeMap<String, OverrideEntry> = serde_json::from_str(text)
        .context("[parse_overrides] Expected an object keyed by levelpathid")?;

    entries.into_iter()
        .map(|(key, entry)| {
            let levelpathid = key.trim().parse::<u64>()
                .map_err(|_| anyhow!("[parse_overrides] Key {key:?} is not a levelpathid"))?;
            Ok((levelpathid, entry.into_name()))
        })
        .collect()
}

/// Read an override table from a JSON file.
pub fn read_overrides(path: &Path) -> Result<NameOverrides> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("[read_overrides] Failed to read {}", path.display()))?;
    let overrides = parse_overrides(&text)
        .with_context(|| format!("[read_overrides] Invalid overrides in {}", path.display()))?;
    info!(count = overrides.len(), path = %path.display(), "read name overrides");
    Ok(overrides)
}
