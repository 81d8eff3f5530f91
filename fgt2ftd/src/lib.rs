//! FortiGate to Cisco FTD firewall object translation.
//!
//! This library turns a FortiGate configuration, loaded as a schema-agnostic
//! YAML tree, into the flat object lists the FTD Firewall Device Manager (FDM)
//! API expects: network objects and groups, port objects and groups, access
//! rules and NAT rules.
//!
//! # Architecture
//!
//! - [`source`]: Decode the raw tree into typed records, once
//! - [`transform`]: The six independent sub-translations
//!   - Address objects, including netmask to prefix length conversion
//!   - Address and service groups
//!   - Custom services
//!   - Policies to access rules, and NAT-enabled policies to NAT rules
//! - [`translate`]: Compose the sub-translations into a [`target::TargetConfig`]
//! - [`target`]: FDM object model, serialized with camelCase field names
//! - [`action_map`]: Policy action keyword table (TOML, embedded default)
//! - [`warning`]: Non-fatal conversion warnings
//!
//! Translation never does I/O. Loading and writing live in `config-tree`.
//!
//! # Examples
//!
//! ```
//! use config_tree::parse;
//! use fgt2ftd::target::SubType;
//! use fgt2ftd::translate::translate_with_defaults;
//!
//! let root = parse(
//!     "firewall:\n  address:\n    - name: Server1\n      subnet: \"192.168.1.10 255.255.255.255\"\n",
//! )
//! .unwrap();
//! let out = translate_with_defaults(&root).unwrap();
//! assert_eq!(out.config.network_objects[0].sub_type, SubType::Host);
//! assert_eq!(out.config.network_objects[0].value, "192.168.1.10/32");
//! ```

pub mod action_map;
pub mod source;
pub mod target;
pub mod transform;
pub mod translate;
pub mod warning;
