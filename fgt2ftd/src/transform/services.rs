use tracing::debug;

use super::object_name;
use crate::source::ServiceEntry;
use crate::target::{ObjectType, PortObject};

const DEFAULT_PROTOCOL: &str = "TCP";
const ANY_PORT: &str = "any";

/// Convert custom services to port objects.
///
/// The port comes from the first of `tcp-portrange`, `udp-portrange` and
/// `sctp-portrange` that is present, or `any`.
pub fn convert_services(services: &[ServiceEntry]) -> Vec<PortObject> {
    services
        .iter()
        .map(|service| {
            let port = service
                .tcp_portrange
                .as_ref()
                .or(service.udp_portrange.as_ref())
                .or(service.sctp_portrange.as_ref())
                .cloned()
                .unwrap_or_else(|| ANY_PORT.to_string());
            let out = PortObject {
                name: object_name(service.name.as_deref()),
                description: service.comment.clone().unwrap_or_default(),
                object_type: ObjectType::PortObject,
                protocol: service
                    .protocol
                    .as_deref()
                    .unwrap_or(DEFAULT_PROTOCOL)
                    .to_uppercase(),
                port,
            };
            debug!(name = %out.name, protocol = %out.protocol, port = %out.port, "converted service");
            out
        })
        .collect()
}
