use std::fmt::{self, Display, Formatter};

use crate::source::Section;

/// Category of a non-fatal conversion problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Netmask could not be read; prefix length fell back to 32.
    InvalidNetmask,
    /// `subnet` was neither `"<ip> <mask>"` nor `[ip, mask]`.
    MalformedSubnet,
    /// `iprange` address without both endpoints.
    IncompleteRange,
    /// Address matched no known encoding and fell back to HOST.
    UnclassifiedAddress,
    /// Section or record present with the wrong structure.
    UnexpectedShape,
}

/// A non-fatal problem found while translating. Translation always continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub section: Section,
    /// Object name or section path the warning is about.
    pub object: String,
    pub kind: WarningKind,
    pub message: String,
}

impl Display for ConversionWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.object.is_empty() {
            write!(f, "{}: {}", self.section, self.message)
        } else {
            write!(f, "{} '{}': {}", self.section, self.object, self.message)
        }
    }
}
