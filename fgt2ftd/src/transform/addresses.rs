//! Address objects to FTD network objects.
//!
//! ## Classification
//!
//! The first matching rule wins:
//!
//! 1. `type: iprange` gives RANGE `"{start-ip}-{end-ip}"`
//! 2. `subnet` gives `"{ip}/{prefix}"`, HOST for a `255.255.255.255` mask and
//!    NETWORK otherwise
//! 3. `start-ip` and `end-ip` give RANGE
//! 4. `fqdn` gives FQDN
//! 5. anything else is HOST with the `ip` field, or an empty value
//!
//! A mask that cannot be read converts as `/32` and raises a warning. So does
//! a record that reaches the last rule.

use tracing::debug;

use super::netmask::{netmask_to_prefix, FALLBACK_PREFIX, HOST_NETMASK};
use super::object_name;
use crate::source::{AddressEntry, AddressFields, Section, Subnet};
use crate::target::{NetworkObject, ObjectType, SubType};
use crate::warning::{ConversionWarning, WarningKind};

/// Network objects plus the warnings raised while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressConversion {
    pub objects: Vec<NetworkObject>,
    pub warnings: Vec<ConversionWarning>,
}

/// Convert every address entry, one network object each, in source order.
pub fn convert_addresses(entries: &[AddressEntry]) -> AddressConversion {
    let mut out = AddressConversion::default();
    for entry in entries {
        let name = object_name(entry.name.as_deref());
        let mut report = |kind: WarningKind, message: String| {
            out.warnings.push(ConversionWarning {
                section: Section::Address,
                object: name.clone(),
                kind,
                message,
            });
        };
        let (sub_type, value) = classify(&entry.fields, &mut report);

        debug!(
            name = %name,
            uuid = entry.fields.uuid.as_deref().unwrap_or_default(),
            sub_type = ?sub_type,
            value = %value,
            "converted address"
        );
        out.objects.push(NetworkObject {
            name,
            description: entry.fields.comment.clone().unwrap_or_default(),
            object_type: ObjectType::NetworkObject,
            sub_type,
            value,
        });
    }
    out
}

fn classify(
    fields: &AddressFields,
    report: &mut impl FnMut(WarningKind, String),
) -> (SubType, String) {
    if fields
        .kind
        .as_deref()
        .is_some_and(|kind| kind.eq_ignore_ascii_case("iprange"))
    {
        if fields.start_ip.is_none() || fields.end_ip.is_none() {
            report(
                WarningKind::IncompleteRange,
                "iprange address is missing start-ip or end-ip".to_string(),
            );
        }
        return (
            SubType::Range,
            range_value(fields.start_ip.as_deref(), fields.end_ip.as_deref()),
        );
    }

    if let Some(subnet) = &fields.subnet {
        return subnet_value(subnet, report);
    }

    if let (Some(start), Some(end)) = (&fields.start_ip, &fields.end_ip) {
        return (SubType::Range, range_value(Some(start), Some(end)));
    }

    if let Some(fqdn) = &fields.fqdn {
        return (SubType::Fqdn, fqdn.clone());
    }

    let message = match &fields.ip {
        Some(ip) => format!("no subnet, range or fqdn field; emitting HOST '{ip}'"),
        None => "no subnet, range, fqdn or ip field; emitting an empty HOST".to_string(),
    };
    report(WarningKind::UnclassifiedAddress, message);
    (SubType::Host, fields.ip.clone().unwrap_or_default())
}

fn subnet_value(subnet: &Subnet, report: &mut impl FnMut(WarningKind, String)) -> (SubType, String) {
    match subnet {
        Subnet::Pair { address, netmask } => {
            let prefix = netmask_to_prefix(netmask).unwrap_or_else(|err| {
                report(
                    WarningKind::InvalidNetmask,
                    format!("{err}; using /{FALLBACK_PREFIX}"),
                );
                FALLBACK_PREFIX
            });
            let sub_type = if netmask == HOST_NETMASK {
                SubType::Host
            } else {
                SubType::Network
            };
            (sub_type, format!("{address}/{prefix}"))
        }
        Subnet::Malformed(raw) => {
            report(
                WarningKind::MalformedSubnet,
                format!("subnet '{raw}' is not '<ip> <netmask>'; copied as-is"),
            );
            (SubType::Network, raw.clone())
        }
    }
}

fn range_value(start: Option<&str>, end: Option<&str>) -> String {
    format!("{}-{}", start.unwrap_or_default(), end.unwrap_or_default())
}
