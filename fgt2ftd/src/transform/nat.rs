//! NAT rules from `nat: enable` policies.
//!
//! The policy section is scanned a second time, independently of access rule
//! translation. Policies without NAT contribute nothing.

use tracing::debug;

use super::refs;
use crate::source::PolicyEntry;
use crate::target::{InterfaceRef, NatRule, NatType};

const ENABLE: &str = "enable";
const DEFAULT_TRANSLATED_SOURCE: &str = "interface";

pub fn convert_nat_policies(policies: &[PolicyEntry]) -> Vec<NatRule> {
    policies
        .iter()
        .filter(|policy| policy.nat.as_deref() == Some(ENABLE))
        .map(|policy| {
            let rule = NatRule {
                name: format!("NAT_{}", policy.id()),
                nat_type: if policy.ippool.as_deref() == Some(ENABLE) {
                    NatType::Dynamic
                } else {
                    NatType::Static
                },
                source_interface: InterfaceRef::first_of(&policy.srcintf),
                destination_interface: InterfaceRef::first_of(&policy.dstintf),
                original_source: refs(&policy.srcaddr),
                original_destination: refs(&policy.dstaddr),
                translated_source: policy
                    .poolname
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TRANSLATED_SOURCE.to_string()),
            };
            debug!(name = %rule.name, nat_type = ?rule.nat_type, "converted nat policy");
            rule
        })
        .collect()
}
