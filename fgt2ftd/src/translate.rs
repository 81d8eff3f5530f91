//! Top-level FortiGate to FTD translation.
//!
//! [`translate`] decodes the source tree once, runs the six sub-translations
//! and assembles their independent outputs into one [`TargetConfig`].

use config_tree::ConfigNode;
use thiserror::Error;
use tracing::debug;

use crate::action_map::{default_action_map, ActionMap};
use crate::source::SourceConfig;
use crate::target::TargetConfig;
use crate::transform::{addresses, groups, nat, policies, services};
use crate::warning::ConversionWarning;

/// Result of a translation: the target config and everything worth reviewing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub config: TargetConfig,
    pub warnings: Vec<ConversionWarning>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The document root must be a mapping of sections.
    #[error("source configuration must be a mapping at the top level, found a {found}")]
    NotAMapping { found: &'static str },
}

/// Translate a parsed FortiGate configuration.
///
/// Missing sections and fields fall back to defaults; the only error is a
/// top level that is not a mapping.
pub fn translate(source: &ConfigNode, actions: &ActionMap) -> Result<Translation, TranslateError> {
    if source.as_mapping().is_none() {
        return Err(TranslateError::NotAMapping {
            found: source.kind(),
        });
    }

    let decoded = SourceConfig::decode(source);
    let address_out = addresses::convert_addresses(&decoded.addresses);

    let config = TargetConfig {
        network_objects: address_out.objects,
        network_groups: groups::convert_address_groups(&decoded.address_groups),
        port_objects: services::convert_services(&decoded.services),
        port_groups: groups::convert_service_groups(&decoded.service_groups),
        access_policies: policies::convert_policies(&decoded.policies, actions),
        nat_policies: nat::convert_nat_policies(&decoded.policies),
    };

    let mut warnings = decoded.warnings;
    warnings.extend(address_out.warnings);

    debug!(
        network_objects = config.network_objects.len(),
        network_groups = config.network_groups.len(),
        port_objects = config.port_objects.len(),
        port_groups = config.port_groups.len(),
        access_policies = config.access_policies.len(),
        nat_policies = config.nat_policies.len(),
        warnings = warnings.len(),
        "translation complete"
    );
    Ok(Translation { config, warnings })
}

/// [`translate`] with the built-in action table.
pub fn translate_with_defaults(source: &ConfigNode) -> Result<Translation, TranslateError> {
    translate(source, &default_action_map())
}
