//! Cross-type index page rendering.

use xmd_markdown::{MarkdownWriter, emphasis, wiki_link};
use xmd_registry::TypeRegistry;

use crate::GENERATED_NOTICE;

/// Render the index page: one linked heading per discovered type, in
/// registry order, each followed by the type's summary.
#[must_use]
pub fn render_index(registry: &TypeRegistry) -> Vec<String> {
    let mut w = MarkdownWriter::new();

    for entry in registry {
        w.heading(2, &wiki_link(&entry.full_name(), &entry.short_name));
        w.blank();
        w.line(entry.type_node.summary.clone());
        w.blank();
    }
    w.line(emphasis(GENERATED_NOTICE));

    w.into_lines()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xmd_symbols::MemberNode;

    use super::*;

    fn node(raw_id: &str, summary: &str) -> MemberNode {
        MemberNode {
            raw_id: raw_id.to_owned(),
            summary: summary.to_owned(),
            params: Vec::new(),
        }
    }

    #[test]
    fn test_index_lists_types_in_discovery_order() {
        let registry = TypeRegistry::build(
            vec![
                node("T:UXF.Session", "The session"),
                node("T:UXF.Trial", "One trial"),
            ],
            "UXF",
        )
        .unwrap();
        let lines = render_index(&registry);

        assert_eq!(lines[0], "## [[UXF.Session|Session]]");
        assert_eq!(lines[2], "The session");
        assert_eq!(lines[4], "## [[UXF.Trial|Trial]]");
        assert_eq!(lines[6], "One trial");
    }

    #[test]
    fn test_index_ends_with_generation_notice() {
        let registry = TypeRegistry::build(vec![node("T:UXF.Session", "")], "UXF").unwrap();
        let lines = render_index(&registry);
        assert_eq!(lines.last().unwrap(), &emphasis(GENERATED_NOTICE));
    }

    #[test]
    fn test_empty_registry_renders_only_the_notice() {
        let registry = TypeRegistry::build(Vec::new(), "UXF").unwrap();
        let lines = render_index(&registry);
        assert_eq!(lines, vec![emphasis(GENERATED_NOTICE)]);
    }
}
