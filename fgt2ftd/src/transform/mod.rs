//! The six FortiGate to FTD sub-translations.
//!
//! Each submodule turns one decoded source section into one output list. They
//! share no state and can run in any order; [`crate::translate`] composes them.

use crate::target::ObjectRef;

pub mod addresses;
pub mod groups;
pub mod nat;
pub mod netmask;
pub mod policies;
pub mod services;

/// Name given to objects whose source record has none.
pub const UNNAMED: &str = "Unnamed";

/// The source name, or [`UNNAMED`] when it is absent or blank.
fn object_name(name: Option<&str>) -> String {
    name.filter(|name| !name.trim().is_empty())
        .unwrap_or(UNNAMED)
        .to_string()
}

fn refs(names: &[String]) -> Vec<ObjectRef> {
    names.iter().map(ObjectRef::new).collect()
}
