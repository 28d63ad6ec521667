//! Two-pass registry construction.

use std::collections::HashMap;

use xmd_symbols::{MemberKind, MemberNode, SymbolError};

/// One documented type and the members attached to it.
///
/// Owns its member nodes outright; they are moved in during the build and
/// live for the duration of one generation run. Within each bucket, members
/// keep their input order.
#[derive(Debug)]
pub struct TypeEntry {
    /// Short name of the type (second path segment of its identifier).
    pub short_name: String,
    /// The record documenting the type itself.
    pub type_node: MemberNode,
    /// Field records, in input order.
    pub fields: Vec<MemberNode>,
    /// Property records, in input order.
    pub properties: Vec<MemberNode>,
    /// Method and constructor records, in input order.
    pub methods: Vec<MemberNode>,
}

impl TypeEntry {
    fn new(short_name: String, type_node: MemberNode) -> Self {
        Self {
            short_name,
            type_node,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Full qualified name of the type (its identifier minus the kind tag).
    #[must_use]
    pub fn full_name(&self) -> String {
        self.type_node
            .raw_id
            .split_once(':')
            .map_or_else(|| self.type_node.raw_id.clone(), |(_, name)| name.to_owned())
    }
}

/// Registry of documented types keyed by short name.
///
/// Iteration follows discovery order; lookup is by short name. Built once
/// per run via [`TypeRegistry::build`] and immutable afterwards.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
    index: HashMap<String, usize>,
    dropped: usize,
}

impl TypeRegistry {
    /// Build the registry from member records.
    ///
    /// Pass one discovers every type whose path has at least two segments
    /// and starts with `root_namespace`; when two type records share a
    /// short name, the last one discovered wins (the entry keeps its
    /// original position). Pass two attaches the remaining records to the
    /// entry matching their second path segment, bucketed by kind. A
    /// member whose owner was never discovered is dropped silently and
    /// counted; symbols outside the root namespace are ignored entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] when any record carries a malformed
    /// identifier. This is a structural fault in the export, not a
    /// recoverable condition.
    pub fn build(nodes: Vec<MemberNode>, root_namespace: &str) -> Result<Self, SymbolError> {
        let mut slots: Vec<Option<MemberNode>> = nodes.into_iter().map(Some).collect();
        let mut registry = Self::default();

        // Discovery pass: register every type under the root namespace so
        // that all owners exist before any member is attached.
        for slot in &mut slots {
            let Some(node) = slot.take() else { continue };
            let id = node.id()?;
            if id.kind == MemberKind::Type && id.path.len() >= 2 && id.path[0] == root_namespace {
                registry.insert_type(id.path[1].clone(), node);
            } else {
                *slot = Some(node);
            }
        }

        // Attachment pass: route the remaining records to their owner.
        for slot in &mut slots {
            let Some(node) = slot.take() else { continue };
            let id = node.id()?;
            if id.kind == MemberKind::Type || id.path.len() < 2 || id.path[0] != root_namespace {
                // Either a type outside the namespace filter or a symbol
                // with no owning type segment; invisible to the registry.
                continue;
            }
            match registry.index.get(&id.path[1]) {
                Some(&pos) => {
                    let entry = &mut registry.entries[pos];
                    match id.kind {
                        MemberKind::Field => entry.fields.push(node),
                        MemberKind::Property => entry.properties.push(node),
                        MemberKind::Method => entry.methods.push(node),
                        // Types were consumed by the discovery pass.
                        MemberKind::Type => unreachable!("types are skipped above"),
                    }
                }
                None => {
                    // Orphan member: its owner was never documented. Drop
                    // it rather than fabricating a type entry.
                    tracing::debug!(id = %node.raw_id, "dropping member with undocumented owner");
                    registry.dropped += 1;
                }
            }
        }

        Ok(registry)
    }

    fn insert_type(&mut self, short_name: String, type_node: MemberNode) {
        match self.index.get(&short_name) {
            Some(&pos) => {
                // Last-discovered wins; the entry keeps its position.
                tracing::debug!(name = %short_name, "duplicate type short name, keeping later record");
                self.entries[pos].type_node = type_node;
            }
            None => {
                self.index
                    .insert(short_name.clone(), self.entries.len());
                self.entries.push(TypeEntry::new(short_name, type_node));
            }
        }
    }

    /// Look up a type by short name.
    #[must_use]
    pub fn get(&self, short_name: &str) -> Option<&TypeEntry> {
        self.index.get(short_name).map(|&pos| &self.entries[pos])
    }

    /// Iterate over entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.iter()
    }

    /// Number of discovered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no types were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of members dropped because their owner was never discovered.
    #[must_use]
    pub fn dropped_members(&self) -> usize {
        self.dropped
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = &'a TypeEntry;
    type IntoIter = std::slice::Iter<'a, TypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
