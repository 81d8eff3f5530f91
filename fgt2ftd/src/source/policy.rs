use config_tree::ConfigNode;

use super::{record_fields, text, texts, Section};
use crate::warning::ConversionWarning;

/// One `firewall.policy` entry. Feeds both access and NAT translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEntry {
    pub policyid: Option<String>,
    pub name: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    pub srcintf: Vec<String>,
    pub dstintf: Vec<String>,
    pub srcaddr: Vec<String>,
    pub dstaddr: Vec<String>,
    pub service: Vec<String>,
    pub logtraffic: Option<String>,
    pub nat: Option<String>,
    pub ippool: Option<String>,
    pub poolname: Option<String>,
}

impl PolicyEntry {
    pub(super) fn decode(item: &ConfigNode, warnings: &mut Vec<ConversionWarning>) -> Self {
        // Policies are keyed by id, so the named-map form never applies.
        let fields = record_fields(item, Section::Policy, warnings);
        Self {
            policyid: text(fields, "policyid"),
            name: text(fields, "name"),
            action: text(fields, "action"),
            status: text(fields, "status"),
            srcintf: texts(fields, "srcintf"),
            dstintf: texts(fields, "dstintf"),
            srcaddr: texts(fields, "srcaddr"),
            dstaddr: texts(fields, "dstaddr"),
            service: texts(fields, "service"),
            logtraffic: text(fields, "logtraffic"),
            nat: text(fields, "nat"),
            ippool: text(fields, "ippool"),
            poolname: text(fields, "poolname"),
        }
    }

    /// `policyid` as text, empty when absent.
    pub fn id(&self) -> &str {
        self.policyid.as_deref().unwrap_or_default()
    }
}
