use std::fs;
use std::io;
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

use crate::tree::ConfigNode;

/// Errors that can occur while loading YAML into a [`ConfigNode`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input file does not exist.
    #[error("input file '{path}' not found")]
    NotFound { path: String },
    /// Failed to read input file.
    #[error("failed to read YAML file: {0}")]
    Io(#[from] io::Error),
    /// Input could not be parsed as YAML.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a YAML document into a [`ConfigNode`] tree.
///
/// An empty document parses to [`ConfigNode::Null`].
pub fn parse(yaml: &str) -> Result<ConfigNode, ParseError> {
    if yaml.trim().is_empty() {
        return Ok(ConfigNode::Null);
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    Ok(from_yaml(value))
}

/// Read and parse a YAML file from disk.
pub fn parse_file(path: &Path) -> Result<ConfigNode, ParseError> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.display().to_string(),
        },
        _ => ParseError::Io(err),
    })?;
    parse(&raw)
}

fn from_yaml(value: Value) -> ConfigNode {
    match value {
        Value::Null => ConfigNode::Null,
        Value::Bool(b) => ConfigNode::Scalar(b.to_string()),
        Value::Number(n) => ConfigNode::Scalar(n.to_string()),
        Value::String(s) => ConfigNode::Scalar(s),
        Value::Sequence(items) => ConfigNode::Sequence(items.into_iter().map(from_yaml).collect()),
        Value::Mapping(map) => ConfigNode::Mapping(
            map.into_iter()
                .map(|(key, value)| (key_text(key), from_yaml(value)))
                .collect(),
        ),
        Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

// Keys that are not scalars (rare, but legal YAML) collapse to an empty key.
fn key_text(key: Value) -> String {
    match from_yaml(key) {
        ConfigNode::Scalar(text) => text,
        _ => String::new(),
    }
}
