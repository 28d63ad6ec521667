//! Symbol identifier parsing.
//!
//! A raw identifier has the form `<kind>:<dotted.qualified.name>`, e.g.
//! `M:UXF.Session.Begin(System.String,System.Int32)`. The kind prefix is a
//! closed set of four tags; anything else is a malformed input.

/// Symbol kind tag taken from a documentation identifier prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    /// `T:` - a type (class, struct, interface or enum).
    Type,
    /// `M:` - a method or constructor.
    Method,
    /// `F:` - a field.
    Field,
    /// `P:` - a property.
    Property,
}

/// Error produced for a malformed symbol identifier.
///
/// Both variants are structural input errors: the export format guarantees
/// well-formed identifiers, so these abort the run rather than being
/// recovered from.
#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    /// Identifier lacks the `kind:name` separator.
    #[error("symbol identifier missing ':' separator: {0}")]
    MissingSeparator(String),
    /// Identifier carries a kind prefix other than T/M/F/P.
    #[error("unknown symbol kind '{kind}' in identifier: {id}")]
    UnknownKind {
        /// The unrecognized prefix.
        kind: String,
        /// The full identifier it appeared in.
        id: String,
    },
}

/// A parsed symbol identifier: kind tag plus dotted path segments.
///
/// The path is the qualified name split on `.`. Method identifiers carry
/// their parameter list inside the final segments (the split is applied to
/// the raw text wholesale); only the first two segments are ever
/// interpreted structurally, as namespace and type short name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolId {
    /// Kind tag from the identifier prefix.
    pub kind: MemberKind,
    /// Dotted path segments, never empty.
    pub path: Vec<String>,
}

impl SymbolId {
    /// Parse a raw identifier into kind and path segments.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::MissingSeparator`] when the `:` separator is
    /// absent and [`SymbolError::UnknownKind`] for a prefix outside the
    /// T/M/F/P set.
    pub fn parse(raw_id: &str) -> Result<Self, SymbolError> {
        let (kind, name) = raw_id
            .split_once(':')
            .ok_or_else(|| SymbolError::MissingSeparator(raw_id.to_owned()))?;
        let kind = match kind {
            "T" => MemberKind::Type,
            "M" => MemberKind::Method,
            "F" => MemberKind::Field,
            "P" => MemberKind::Property,
            other => {
                return Err(SymbolError::UnknownKind {
                    kind: other.to_owned(),
                    id: raw_id.to_owned(),
                });
            }
        };
        let path = name.split('.').map(str::to_owned).collect();
        Ok(Self { kind, path })
    }

    /// Re-join the path segments into the qualified symbol name.
    #[must_use]
    pub fn qualified(&self) -> String {
        self.path.join(".")
    }
}
