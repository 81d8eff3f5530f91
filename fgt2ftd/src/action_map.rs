//! FortiGate policy action keyword to FTD rule action mapping.
//!
//! The default table ships as `mappings/actions.toml` and is embedded at build
//! time. A user file with the same layout can extend or override it:
//!
//! ```toml
//! [[action]]
//! keyword = "ipsec"
//! rule_action = "ALLOW"
//! ```
//!
//! Lookups are case-insensitive. Keywords missing from the table map to
//! [`RuleAction::Block`], so an unknown action never opens traffic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::target::RuleAction;

/// One keyword entry of an action mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionMapping {
    pub keyword: String,
    pub rule_action: RuleAction,
}

#[derive(Debug, Deserialize)]
struct ActionFile {
    #[serde(default)]
    action: Vec<ActionMapping>,
}

/// Errors returned when loading action mapping files.
#[derive(Debug, Error)]
pub enum ActionMapError {
    #[error("failed to read action map {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse action map {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Case-insensitive action lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMap {
    entries: BTreeMap<String, RuleAction>,
}

impl ActionMap {
    pub fn from_mappings(mappings: impl IntoIterator<Item = ActionMapping>) -> Self {
        let mut map = Self {
            entries: BTreeMap::new(),
        };
        map.extend(mappings);
        map
    }

    /// Add entries; later keywords replace earlier ones.
    pub fn extend(&mut self, mappings: impl IntoIterator<Item = ActionMapping>) {
        for mapping in mappings {
            self.entries
                .insert(mapping.keyword.to_ascii_lowercase(), mapping.rule_action);
        }
    }

    /// Map a FortiGate action keyword. Unknown keywords are [`RuleAction::Block`].
    pub fn lookup(&self, keyword: &str) -> RuleAction {
        self.entries
            .get(&keyword.to_ascii_lowercase())
            .copied()
            .unwrap_or(RuleAction::Block)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Built-in table: accept/allow are ALLOW, deny/reject are BLOCK.
pub fn default_action_map() -> ActionMap {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mappings/actions.toml"));
    match parse_mappings(embedded, "embedded action map".to_string()) {
        Ok(mappings) if !mappings.is_empty() => ActionMap::from_mappings(mappings),
        _ => ActionMap::from_mappings(fallback_mappings()),
    }
}

/// Load a user action map file on top of the built-in table.
pub fn load_action_map(path: &Path) -> Result<ActionMap, ActionMapError> {
    let raw = fs::read_to_string(path).map_err(|source| ActionMapError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut map = default_action_map();
    map.extend(parse_mappings(&raw, path.display().to_string())?);
    debug!(path = %path.display(), entries = map.len(), "loaded action map");
    Ok(map)
}

fn parse_mappings(raw: &str, path: String) -> Result<Vec<ActionMapping>, ActionMapError> {
    let parsed: ActionFile =
        toml::from_str(raw).map_err(|source| ActionMapError::Parse { path, source })?;
    Ok(parsed.action)
}

fn fallback_mappings() -> Vec<ActionMapping> {
    [
        ("accept", RuleAction::Allow),
        ("allow", RuleAction::Allow),
        ("deny", RuleAction::Block),
        ("reject", RuleAction::Block),
    ]
    .into_iter()
    .map(|(keyword, rule_action)| ActionMapping {
        keyword: keyword.to_string(),
        rule_action,
    })
    .collect()
}
