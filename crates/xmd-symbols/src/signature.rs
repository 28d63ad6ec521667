//! Method signature normalization.
//!
//! Rewrites a raw documented method symbol into a readable call signature.
//! The substitutions run in a fixed order: generic-arity brackets are
//! converted before alias substitution so the alias table sees the final
//! token text, and the trailing `()` is only appended once everything else
//! has settled.

/// Constructor marker used by the documentation export.
const CTOR_MARKER: &str = "#ctor";

/// Fully-qualified built-in type names and their short aliases, applied in
/// order. Names outside this table pass through unchanged.
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("System.String", "string"),
    ("System.Int32", "int"),
    ("System.Single", "float"),
    ("System.Object", "object"),
];

/// Normalize a raw method or constructor symbol into a display signature.
///
/// `raw_symbol` is the qualified symbol text as exported (e.g.
/// `UXF.Session.Begin(System.String,System.Int32)`); `type_short_name` is
/// the owning type's short name. Qualification up to and including the
/// owning type segment is stripped first; when that prefix is absent the
/// text is kept whole. Never fails.
#[must_use]
pub fn normalize_signature(raw_symbol: &str, type_short_name: &str) -> String {
    let marker = format!("{type_short_name}.");
    let local = match raw_symbol.find(&marker) {
        Some(pos) => &raw_symbol[pos + marker.len()..],
        None => raw_symbol,
    };

    let mut signature = local.replace(CTOR_MARKER, type_short_name);
    signature = signature.replace(',', ", ");
    signature = signature.replace('{', "<").replace('}', ">");
    for (qualified, alias) in TYPE_ALIASES {
        signature = signature.replace(qualified, alias);
    }
    if !signature.ends_with(')') {
        signature.push_str("()");
    }
    signature
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_constructor_marker_becomes_type_name() {
        assert_eq!(normalize_signature("UXF.Foo.#ctor", "Foo"), "Foo()");
    }

    #[test]
    fn test_parameter_list_gets_aliases_and_spacing() {
        assert_eq!(
            normalize_signature("UXF.Bar.Baz(System.String,System.Int32)", "Bar"),
            "Baz(string, int)"
        );
    }

    #[test]
    fn test_generic_arity_brackets() {
        assert_eq!(normalize_signature("UXF.Foo.Get{T}()", "Foo"), "Get<T>()");
    }

    #[test]
    fn test_missing_parens_appended() {
        assert_eq!(normalize_signature("UXF.Foo.Value", "Foo"), "Value()");
    }

    #[test]
    fn test_generic_parameter_gets_alias_after_bracket_conversion() {
        assert_eq!(
            normalize_signature("UXF.Qux.List{System.Object}", "Qux"),
            "List<object>()"
        );
    }

    #[test]
    fn test_unmapped_builtin_passes_through() {
        assert_eq!(
            normalize_signature("UXF.Foo.Set(System.Boolean)", "Foo"),
            "Set(System.Boolean)"
        );
    }

    #[test]
    fn test_constructor_with_parameters() {
        assert_eq!(
            normalize_signature("UXF.Trial.#ctor(System.Int32,System.Single)", "Trial"),
            "Trial(int, float)"
        );
    }

    #[test]
    fn test_absent_type_prefix_is_kept_whole() {
        assert_eq!(normalize_signature("Other.Thing.Run", "Foo"), "Other.Thing.Run()");
    }
}
