//! Type registry for the xmd documentation generator.
//!
//! Builds the mapping from type short names to their documented members in
//! two passes over the member records: all types under the root namespace
//! are discovered first, then fields, properties and methods are attached
//! to their owning type. The two-phase order is load-bearing - a member can
//! only attach to a type that already exists, and members whose owner was
//! never documented are dropped, never fabricated into a type.

mod registry;

pub use registry::{TypeEntry, TypeRegistry};
