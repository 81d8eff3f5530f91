/// A generic, schema-agnostic config tree node.
///
/// Scalars keep their YAML textual form, so `443`, `true` and `"443"` all read
/// back through [`ConfigNode::as_text`] as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigNode {
    /// Explicit null or an empty document.
    #[default]
    Null,
    /// String, number or boolean leaf.
    Scalar(String),
    /// Ordered list of nodes.
    Sequence(Vec<ConfigNode>),
    /// String-keyed entries in document order.
    Mapping(Vec<(String, ConfigNode)>),
}

impl ConfigNode {
    /// Create a scalar leaf.
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::Scalar(text.into())
    }

    /// Return the first mapping entry with the provided key.
    pub fn get_child(&self, key: &str) -> Option<&ConfigNode> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Walk a nested key path and return terminal scalar text if found.
    pub fn get_text<'a>(&'a self, path: &[&str]) -> Option<&'a str> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        current.as_text()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigNode]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, ConfigNode)]> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Elements of a sequence; empty for every other node kind.
    pub fn items(&self) -> &[ConfigNode] {
        self.as_sequence().unwrap_or(&[])
    }

    /// Scalar elements of a list-valued field.
    ///
    /// A lone scalar reads as a one-element list. Non-scalar elements are
    /// skipped.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Scalar(text) => vec![text.as_str()],
            Self::Sequence(items) => items.iter().filter_map(ConfigNode::as_text).collect(),
            _ => Vec::new(),
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}
