use config_tree::ConfigNode;

use super::{text, texts, unwrap_record, Section};
use crate::warning::ConversionWarning;

/// An address group (`firewall.addrgrp`) or service group
/// (`firewall.service.group`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEntry {
    pub name: Option<String>,
    pub comment: Option<String>,
    /// Member names in source order. Not resolved against defined objects.
    pub members: Vec<String>,
}

/// A custom service (`firewall.service.custom`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub protocol: Option<String>,
    pub tcp_portrange: Option<String>,
    pub udp_portrange: Option<String>,
    pub sctp_portrange: Option<String>,
}

impl GroupEntry {
    pub(super) fn decode(
        item: &ConfigNode,
        section: Section,
        warnings: &mut Vec<ConversionWarning>,
    ) -> Self {
        let record = unwrap_record(item, section, warnings);
        Self {
            name: record.name,
            comment: text(record.fields, "comment"),
            members: texts(record.fields, "member"),
        }
    }
}

impl ServiceEntry {
    pub(super) fn decode(item: &ConfigNode, warnings: &mut Vec<ConversionWarning>) -> Self {
        let record = unwrap_record(item, Section::Service, warnings);
        let fields = record.fields;
        Self {
            name: record.name,
            comment: text(fields, "comment"),
            protocol: text(fields, "protocol"),
            tcp_portrange: text(fields, "tcp-portrange"),
            udp_portrange: text(fields, "udp-portrange"),
            sctp_portrange: text(fields, "sctp-portrange"),
        }
    }
}
