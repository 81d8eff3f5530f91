use thiserror::Error;

/// Prefix length used when a netmask cannot be read.
pub const FALLBACK_PREFIX: u8 = 32;

/// The all-ones mask that marks a single host.
pub const HOST_NETMASK: &str = "255.255.255.255";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("netmask '{netmask}' is not four octets in 0-255")]
pub struct InvalidNetmask {
    pub netmask: String,
}

/// Convert a dotted-decimal netmask to a prefix length.
///
/// The result is the number of one-bits in the 32-bit mask, so non-contiguous
/// masks still produce a count rather than an error.
pub fn netmask_to_prefix(netmask: &str) -> Result<u8, InvalidNetmask> {
    let invalid = || InvalidNetmask {
        netmask: netmask.to_string(),
    };

    let octets = netmask
        .split('.')
        .map(|octet| octet.parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<u8>, _>>()?;
    let [a, b, c, d] = octets.as_slice() else {
        return Err(invalid());
    };

    let bits = u32::from_be_bytes([*a, *b, *c, *d]).count_ones();
    u8::try_from(bits).map_err(|_| invalid())
}
