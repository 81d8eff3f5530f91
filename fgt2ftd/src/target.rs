//! FTD FDM API object model produced by the translator.
//!
//! Every record is a flat value object. Field names serialize in the camelCase
//! form the FDM API expects; enum values serialize in upper case.

use serde::{Deserialize, Serialize};

/// The complete translated configuration: six independent object lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetConfig {
    pub network_objects: Vec<NetworkObject>,
    pub network_groups: Vec<NetworkGroup>,
    pub port_objects: Vec<PortObject>,
    pub port_groups: Vec<PortGroup>,
    pub access_policies: Vec<AccessRule>,
    pub nat_policies: Vec<NatRule>,
}

/// FDM object `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectType {
    #[serde(rename = "networkobject")]
    NetworkObject,
    #[serde(rename = "networkobjectgroup")]
    NetworkObjectGroup,
    #[serde(rename = "portobject")]
    PortObject,
    #[serde(rename = "portobjectgroup")]
    PortObjectGroup,
}

/// Network object classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubType {
    Host,
    Network,
    Range,
    Fqdn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleAction {
    Allow,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NatType {
    Dynamic,
    Static,
}

/// Reference to another object by name. Never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    pub name: String,
}

impl ObjectRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Interface on a NAT rule: the bare interface name, or `{}` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InterfaceRef {
    Name(String),
    Empty {},
}

impl InterfaceRef {
    /// First interface of a list, `{}` for an empty one.
    pub fn first_of(interfaces: &[String]) -> Self {
        match interfaces.first() {
            Some(name) => InterfaceRef::Name(name.clone()),
            None => InterfaceRef::Empty {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkObject {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub sub_type: SubType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkGroup {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub objects: Vec<ObjectRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortObject {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub protocol: String,
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortGroup {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub objects: Vec<ObjectRef>,
}

/// Access control rule. `log_begin` and `log_end` always carry the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    pub name: String,
    pub rule_action: RuleAction,
    pub enabled: bool,
    pub source_zones: Vec<ObjectRef>,
    pub destination_zones: Vec<ObjectRef>,
    pub source_networks: Vec<ObjectRef>,
    pub destination_networks: Vec<ObjectRef>,
    pub source_ports: Vec<ObjectRef>,
    pub log_begin: bool,
    pub log_end: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NatRule {
    pub name: String,
    pub nat_type: NatType,
    pub source_interface: InterfaceRef,
    pub destination_interface: InterfaceRef,
    pub original_source: Vec<ObjectRef>,
    pub original_destination: Vec<ObjectRef>,
    pub translated_source: String,
}
