//! Firewall policies to FTD access rules.
//!
//! Every policy produces exactly one rule. The action keyword goes through the
//! [`ActionMap`]; anything it does not know becomes BLOCK. `logBegin` and
//! `logEnd` both follow `logtraffic`: on unless it says `disable`.

use tracing::debug;

use super::refs;
use crate::action_map::ActionMap;
use crate::source::PolicyEntry;
use crate::target::AccessRule;

const DISABLE: &str = "disable";

pub fn convert_policies(policies: &[PolicyEntry], actions: &ActionMap) -> Vec<AccessRule> {
    policies
        .iter()
        .map(|policy| {
            let logging = policy.logtraffic.as_deref() != Some(DISABLE);
            let rule = AccessRule {
                name: policy
                    .name
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
                    .map_or_else(|| format!("Rule_{}", policy.id()), str::to_string),
                rule_action: actions.lookup(policy.action.as_deref().unwrap_or_default()),
                enabled: policy.status.as_deref() != Some(DISABLE),
                source_zones: refs(&policy.srcintf),
                destination_zones: refs(&policy.dstintf),
                source_networks: refs(&policy.srcaddr),
                destination_networks: refs(&policy.dstaddr),
                source_ports: refs(&policy.service),
                log_begin: logging,
                log_end: logging,
            };
            debug!(
                name = %rule.name,
                rule_action = ?rule.rule_action,
                enabled = rule.enabled,
                "converted policy"
            );
            rule
        })
        .collect()
}
