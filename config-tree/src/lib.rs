//! Generic YAML loading, tree access and JSON writing primitives used by
//! higher-level config translators.

pub mod parser;
pub mod tree;
pub mod writer;

pub use parser::{parse, parse_file, ParseError};
pub use tree::ConfigNode;
pub use writer::{write, write_file, WriteError};
