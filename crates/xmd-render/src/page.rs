//! Per-type reference page rendering.

use xmd_markdown::{MarkdownWriter, bold, code, emphasis};
use xmd_registry::TypeEntry;
use xmd_symbols::{MemberNode, normalize_signature};

use crate::GENERATED_NOTICE;

/// Render one type's reference page as an ordered sequence of lines.
///
/// Fixed page shape: heading with the full qualified name, emphasized
/// summary, then Fields / Properties / Methods sections (every section is
/// emitted even when empty), closed by a rule and the generation notice.
#[must_use]
pub fn render_type_page(entry: &TypeEntry) -> Vec<String> {
    let full_name = entry.full_name();
    let mut w = MarkdownWriter::new();

    w.heading(1, &code(&full_name));
    w.line(emphasis(&entry.type_node.summary));
    w.blank();
    w.rule();
    w.blank();

    member_section(&mut w, "Fields", &entry.fields, &full_name);
    member_section(&mut w, "Properties", &entry.properties, &full_name);
    method_section(&mut w, entry);

    w.rule();
    w.blank();
    w.line(emphasis(GENERATED_NOTICE));

    w.into_lines()
}

/// Emit a Fields or Properties section: one line per member, short name in
/// inline code followed by the summary.
fn member_section(w: &mut MarkdownWriter, title: &str, members: &[MemberNode], full_name: &str) {
    w.heading(2, title);
    w.blank();
    if members.is_empty() {
        w.line(emphasis("None"));
        w.blank();
        return;
    }
    for member in members {
        let short = member_short_name(member, full_name);
        w.line(format!("{}: {}", code(&short), member.summary));
        w.blank();
    }
}

/// Emit the Methods section: per method the normalized signature, then a
/// block-quoted sub-section with the summary and parameter docs.
fn method_section(w: &mut MarkdownWriter, entry: &TypeEntry) {
    w.heading(2, "Methods");
    w.blank();
    if entry.methods.is_empty() {
        w.line(emphasis("None"));
        w.blank();
        return;
    }
    for method in &entry.methods {
        let signature = normalize_signature(qualified_name(method), &entry.short_name);
        w.line(code(&signature));
        w.blank();
        w.quoted(&method.summary);
        w.quoted("");
        w.quoted(&bold("Parameters"));
        w.quoted("");
        if method.params.is_empty() {
            w.quoted(&emphasis("None"));
        } else {
            for param in &method.params {
                w.quoted(&format!("* {}: {}", code(&param.name), param.description));
                w.quoted("");
            }
        }
        w.blank();
    }
}

/// Member short name: the qualified name with the owning type's full-name
/// prefix stripped. When the prefix is absent the full name is shown
/// unmodified.
fn member_short_name(member: &MemberNode, full_name: &str) -> String {
    let qualified = qualified_name(member);
    let prefix = format!("{full_name}.");
    qualified
        .strip_prefix(&prefix)
        .unwrap_or(qualified)
        .to_owned()
}

/// Qualified name portion of a member identifier (text after the kind tag).
fn qualified_name(member: &MemberNode) -> &str {
    member
        .raw_id
        .split_once(':')
        .map_or(member.raw_id.as_str(), |(_, name)| name)
}
