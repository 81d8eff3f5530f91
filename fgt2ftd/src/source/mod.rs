//! Typed view of a FortiGate configuration tree.
//!
//! The raw [`ConfigNode`] tree is decoded once, section by section, into plain
//! records. Translation works on these records and never looks at the raw tree
//! again.
//!
//! ## Record Forms
//!
//! FortiGate YAML exports come in two shapes for named objects:
//!
//! ```yaml
//! address:
//!   - name: Server1            # list-of-records
//!     subnet: "10.0.0.1 255.255.255.255"
//!   - Server2:                 # named-map
//!       subnet: ["10.0.0.2", "255.255.255.255"]
//! ```
//!
//! Both decode to the same record type with a [`RecordForm`] tag. Policies are
//! always list-of-records.
//!
//! Missing sections decode as empty. Sections or records with the wrong shape
//! also decode as empty/default, with an `UnexpectedShape` warning.

use std::fmt::{self, Display, Formatter};

use config_tree::ConfigNode;

use crate::warning::{ConversionWarning, WarningKind};

mod address;
mod objects;
mod policy;

pub use address::{AddressEntry, AddressFields, Subnet};
pub use objects::{GroupEntry, ServiceEntry};
pub use policy::PolicyEntry;

/// Source section a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Address,
    AddressGroup,
    Service,
    ServiceGroup,
    Policy,
}

impl Section {
    /// Key path from the document root.
    pub fn path(self) -> &'static [&'static str] {
        match self {
            Section::Address => &["firewall", "address"],
            Section::AddressGroup => &["firewall", "addrgrp"],
            Section::Service => &["firewall", "service", "custom"],
            Section::ServiceGroup => &["firewall", "service", "group"],
            Section::Policy => &["firewall", "policy"],
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().join("."))
    }
}

/// How a named record was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordForm {
    /// Mapping with a `name` field next to the other fields.
    ListRecord,
    /// Single-entry mapping keyed by the object name.
    NamedMap,
}

/// All sections of a source configuration, decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceConfig {
    pub addresses: Vec<AddressEntry>,
    pub address_groups: Vec<GroupEntry>,
    pub services: Vec<ServiceEntry>,
    pub service_groups: Vec<GroupEntry>,
    pub policies: Vec<PolicyEntry>,
    /// Shape problems found while decoding.
    pub warnings: Vec<ConversionWarning>,
}

impl SourceConfig {
    /// Decode every known section below `root`.
    ///
    /// Never fails; the caller checks that `root` is a mapping first.
    pub fn decode(root: &ConfigNode) -> Self {
        let mut warnings = Vec::new();

        let addresses = section_items(root, Section::Address, &mut warnings)
            .iter()
            .map(|item| AddressEntry::decode(item, &mut warnings))
            .collect();
        let address_groups = section_items(root, Section::AddressGroup, &mut warnings)
            .iter()
            .map(|item| GroupEntry::decode(item, Section::AddressGroup, &mut warnings))
            .collect();
        let services = section_items(root, Section::Service, &mut warnings)
            .iter()
            .map(|item| ServiceEntry::decode(item, &mut warnings))
            .collect();
        let service_groups = section_items(root, Section::ServiceGroup, &mut warnings)
            .iter()
            .map(|item| GroupEntry::decode(item, Section::ServiceGroup, &mut warnings))
            .collect();
        let policies = section_items(root, Section::Policy, &mut warnings)
            .iter()
            .map(|item| PolicyEntry::decode(item, &mut warnings))
            .collect();

        Self {
            addresses,
            address_groups,
            services,
            service_groups,
            policies,
            warnings,
        }
    }
}

/// Resolve a section to its list of items.
///
/// Absent keys and explicit nulls are empty sections. Anything else that is not
/// a sequence is reported and treated as empty.
fn section_items<'a>(
    root: &'a ConfigNode,
    section: Section,
    warnings: &mut Vec<ConversionWarning>,
) -> &'a [ConfigNode] {
    let mut current = root;
    for (depth, segment) in section.path().iter().enumerate() {
        match current {
            ConfigNode::Null => return &[],
            ConfigNode::Mapping(_) => match current.get_child(segment) {
                Some(child) => current = child,
                None => return &[],
            },
            other => {
                warnings.push(shape_warning(
                    section,
                    section.path()[..depth].join("."),
                    format!("expected a mapping, found a {}", other.kind()),
                ));
                return &[];
            }
        }
    }

    match current {
        ConfigNode::Sequence(items) => items,
        ConfigNode::Null => &[],
        other => {
            warnings.push(shape_warning(
                section,
                section.to_string(),
                format!("expected a list of records, found a {}", other.kind()),
            ));
            &[]
        }
    }
}

static EMPTY: ConfigNode = ConfigNode::Null;

/// A record unwrapped from either [`RecordForm`].
struct RawRecord<'a> {
    name: Option<String>,
    form: RecordForm,
    fields: &'a ConfigNode,
}

/// The item itself when it is a mapping.
///
/// Anything else yields an empty record and an `UnexpectedShape` warning, so
/// the record still reaches the output.
fn record_fields<'a>(
    item: &'a ConfigNode,
    section: Section,
    warnings: &mut Vec<ConversionWarning>,
) -> &'a ConfigNode {
    if item.as_mapping().is_some() {
        return item;
    }
    warnings.push(shape_warning(
        section,
        item.as_text().unwrap_or_default().to_string(),
        format!("expected a record mapping, found a {}", item.kind()),
    ));
    &EMPTY
}

/// Split a section item into its name and field mapping.
fn unwrap_record<'a>(
    item: &'a ConfigNode,
    section: Section,
    warnings: &mut Vec<ConversionWarning>,
) -> RawRecord<'a> {
    let fields = record_fields(item, section, warnings);

    if let Some([(key, value @ ConfigNode::Mapping(_))]) = fields.as_mapping() {
        if key != "name" {
            return RawRecord {
                name: Some(key.clone()),
                form: RecordForm::NamedMap,
                fields: value,
            };
        }
    }

    RawRecord {
        name: text(fields, "name"),
        form: RecordForm::ListRecord,
        fields,
    }
}

/// Owned scalar text of a field, if present.
fn text(node: &ConfigNode, key: &str) -> Option<String> {
    node.get_text(&[key]).map(str::to_string)
}

/// Owned scalar items of a list-valued field; absent fields are empty.
fn texts(node: &ConfigNode, key: &str) -> Vec<String> {
    node.get_child(key)
        .map(|list| list.texts().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

fn shape_warning(section: Section, object: String, message: String) -> ConversionWarning {
    ConversionWarning {
        section,
        object,
        kind: WarningKind::UnexpectedShape,
        message,
    }
}
