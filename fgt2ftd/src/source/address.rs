use config_tree::ConfigNode;

use super::{text, unwrap_record, RecordForm, Section};
use crate::warning::ConversionWarning;

/// One `firewall.address` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressEntry {
    pub name: Option<String>,
    pub form: RecordForm,
    pub fields: AddressFields,
}

/// Descriptive fields shared by both record forms. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub uuid: Option<String>,
    /// The FortiGate `type` keyword (`ipmask`, `iprange`, `fqdn`, ...).
    pub kind: Option<String>,
    pub subnet: Option<Subnet>,
    pub start_ip: Option<String>,
    pub end_ip: Option<String>,
    pub fqdn: Option<String>,
    pub ip: Option<String>,
    pub comment: Option<String>,
}

/// A `subnet` field, normalised from either encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subnet {
    /// `"<ip> <netmask>"` or `[ip, netmask]`.
    Pair { address: String, netmask: String },
    /// Any other shape, kept as best-effort text.
    Malformed(String),
}

impl AddressEntry {
    pub(super) fn decode(item: &ConfigNode, warnings: &mut Vec<ConversionWarning>) -> Self {
        let record = unwrap_record(item, Section::Address, warnings);
        let fields = record.fields;
        Self {
            name: record.name,
            form: record.form,
            fields: AddressFields {
                uuid: text(fields, "uuid"),
                kind: text(fields, "type"),
                subnet: fields.get_child("subnet").and_then(Subnet::decode),
                start_ip: text(fields, "start-ip"),
                end_ip: text(fields, "end-ip"),
                fqdn: text(fields, "fqdn"),
                ip: text(fields, "ip"),
                comment: text(fields, "comment"),
            },
        }
    }
}

impl Subnet {
    /// Returns `None` for an explicit null, which counts as no subnet at all.
    fn decode(node: &ConfigNode) -> Option<Self> {
        match node {
            ConfigNode::Null => None,
            ConfigNode::Scalar(raw) => {
                let parts: Vec<&str> = raw.split_whitespace().collect();
                Some(match parts.as_slice() {
                    [address, netmask] => Subnet::pair(address, netmask),
                    _ => Subnet::Malformed(raw.clone()),
                })
            }
            ConfigNode::Sequence(_) => Some(match node.texts().as_slice() {
                [address, netmask] if node.items().len() == 2 => Subnet::pair(address, netmask),
                parts => Subnet::Malformed(parts.join(" ")),
            }),
            ConfigNode::Mapping(_) => Some(Subnet::Malformed(String::new())),
        }
    }

    fn pair(address: &str, netmask: &str) -> Self {
        Subnet::Pair {
            address: address.to_string(),
            netmask: netmask.to_string(),
        }
    }
}
