//! Documentation member records.

use crate::id::{SymbolError, SymbolId};

/// One documented parameter of a method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDoc {
    /// Parameter name as written in the source.
    pub name: String,
    /// Human-written description, trimmed.
    pub description: String,
}

/// One `<member>` record from the documentation export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberNode {
    /// Raw identifier of the form `<kind>:<dotted.qualified.name>`.
    pub raw_id: String,
    /// Trimmed text of the member's first child element.
    pub summary: String,
    /// Parameter docs in document order; only populated for methods.
    pub params: Vec<ParamDoc>,
}

impl MemberNode {
    /// Parse this member's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] when the identifier is malformed.
    pub fn id(&self) -> Result<SymbolId, SymbolError> {
        SymbolId::parse(&self.raw_id)
    }
}
