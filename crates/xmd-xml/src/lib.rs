//! XML documentation export loading.
//!
//! Reads a compiler-generated documentation file and collects every
//! `<member>` element into a [`MemberNode`], in document order. Only the
//! member records themselves are interpreted; surrounding structure
//! (`<doc>`, `<assembly>`, `<members>`) is walked over without validation.

mod error;
mod loader;

pub use error::XmlDocError;
pub use loader::{load_members, parse_members};

pub use xmd_symbols::{MemberNode, ParamDoc};
