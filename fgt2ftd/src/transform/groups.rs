//! Address groups and service groups.
//!
//! Members are wrapped as `{name}` references in source order. Nothing checks
//! that a member names an object that exists.

use tracing::debug;

use super::{object_name, refs};
use crate::source::GroupEntry;
use crate::target::{NetworkGroup, ObjectType, PortGroup};

pub fn convert_address_groups(groups: &[GroupEntry]) -> Vec<NetworkGroup> {
    groups
        .iter()
        .map(|group| {
            let out = NetworkGroup {
                name: object_name(group.name.as_deref()),
                description: group.comment.clone().unwrap_or_default(),
                object_type: ObjectType::NetworkObjectGroup,
                objects: refs(&group.members),
            };
            debug!(name = %out.name, members = out.objects.len(), "converted address group");
            out
        })
        .collect()
}

pub fn convert_service_groups(groups: &[GroupEntry]) -> Vec<PortGroup> {
    groups
        .iter()
        .map(|group| {
            let out = PortGroup {
                name: object_name(group.name.as_deref()),
                description: group.comment.clone().unwrap_or_default(),
                object_type: ObjectType::PortObjectGroup,
                objects: refs(&group.members),
            };
            debug!(name = %out.name, members = out.objects.len(), "converted service group");
            out
        })
        .collect()
}
