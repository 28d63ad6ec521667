//! Event-driven extraction of `<member>` records.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use xmd_symbols::{MemberNode, ParamDoc};

use crate::error::XmlDocError;

/// Load all `<member>` records from a documentation export file.
///
/// # Errors
///
/// Returns [`XmlDocError`] when the file cannot be read or is not
/// well-formed XML. There is no partial-success mode; a corrupt input
/// aborts the whole run.
pub fn load_members(path: &Path) -> Result<Vec<MemberNode>, XmlDocError> {
    let text = std::fs::read_to_string(path).map_err(|source| XmlDocError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_members(&text)
}

/// Parse `<member>` records from an XML string, in document order.
///
/// # Errors
///
/// Returns [`XmlDocError`] for malformed XML or a member without a `name`
/// attribute.
pub fn parse_members(xml: &str) -> Result<Vec<MemberNode>, XmlDocError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut members = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"member" => {
                let raw_id = required_name(&e)?;
                members.push(parse_member(&mut reader, raw_id)?);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"member" => {
                // Childless member: no summary, no params.
                members.push(MemberNode {
                    raw_id: required_name(&e)?,
                    summary: String::new(),
                    params: Vec::new(),
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(members)
}

/// Parse the children of one `<member>` element.
///
/// The summary is the text of the first child element; `<param>` children
/// contribute parameter docs in document order. Other children
/// (`<returns>`, `<remarks>`, ...) only matter when they happen to come
/// first.
fn parse_member<R: BufRead>(
    reader: &mut Reader<R>,
    raw_id: String,
) -> Result<MemberNode, XmlDocError> {
    let mut buf = Vec::new();
    let mut summary: Option<String> = None;
    let mut params = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let param_name = if e.local_name().as_ref() == b"param" {
                    Some(attr_value(&e, "name")?.unwrap_or_default())
                } else {
                    None
                };
                let text = collect_text(reader)?;
                let text = text.trim().to_owned();
                if summary.is_none() {
                    summary = Some(text.clone());
                }
                if let Some(name) = param_name {
                    params.push(ParamDoc {
                        name,
                        description: text,
                    });
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"param" {
                    params.push(ParamDoc {
                        name: attr_value(&e, "name")?.unwrap_or_default(),
                        description: String::new(),
                    });
                }
                if summary.is_none() {
                    summary = Some(String::new());
                }
            }
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(MemberNode {
        raw_id,
        summary: summary.unwrap_or_default(),
        params,
    })
}

/// Accumulate the text of the current element, including text nested in
/// inline markup such as `<see cref="..."/>` tails.
fn collect_text<R: BufRead>(reader: &mut Reader<R>) -> Result<String, XmlDocError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Text(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                text.push_str(&decode_entity(&entity));
            }
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Read the required `name` attribute of a `<member>` element.
fn required_name(e: &BytesStart) -> Result<String, XmlDocError> {
    attr_value(e, "name")?.ok_or(XmlDocError::MissingName)
}

/// Read an attribute value, unescaping entities.
fn attr_value(e: &BytesStart, name: &str) -> Result<Option<String>, XmlDocError> {
    let attr = e.try_get_attribute(name)?;
    Ok(attr.map(|a| {
        a.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&a.value).into_owned(),
            Cow::into_owned,
        )
    }))
}

/// Decode XML entity references to their character values.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        // Numeric character references
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        other => format!("&{other};"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>UXF</name>
    </assembly>
    <members>
        <member name="T:UXF.Timer">
            <summary>
            Tracks elapsed time
            </summary>
        </member>
        <member name="F:UXF.Timer.seconds">
            <summary>Elapsed seconds</summary>
        </member>
        <member name="M:UXF.Timer.Reset">
            <summary>Resets the timer</summary>
        </member>
        <member name="M:UXF.Session.Begin(System.String,System.Int32)">
            <summary>Begins the session</summary>
            <param name="experimentName">Name of the experiment</param>
            <param name="sessionNumber">Number of the session</param>
        </member>
    </members>
</doc>
"#;

    #[test]
    fn test_members_collected_in_document_order() {
        let members = parse_members(SAMPLE).unwrap();
        let ids: Vec<&str> = members.iter().map(|m| m.raw_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "T:UXF.Timer",
                "F:UXF.Timer.seconds",
                "M:UXF.Timer.Reset",
                "M:UXF.Session.Begin(System.String,System.Int32)",
            ]
        );
    }

    #[test]
    fn test_summary_is_trimmed_first_child_text() {
        let members = parse_members(SAMPLE).unwrap();
        assert_eq!(members[0].summary, "Tracks elapsed time");
        assert_eq!(members[1].summary, "Elapsed seconds");
    }

    #[test]
    fn test_params_in_document_order() {
        let members = parse_members(SAMPLE).unwrap();
        let begin = &members[3];
        assert_eq!(begin.params.len(), 2);
        assert_eq!(begin.params[0].name, "experimentName");
        assert_eq!(begin.params[0].description, "Name of the experiment");
        assert_eq!(begin.params[1].name, "sessionNumber");
    }

    #[test]
    fn test_inline_markup_text_is_kept() {
        let xml = r#"<doc><members>
            <member name="T:UXF.Session">
                <summary>See <see cref="T:UXF.Trial"/> for trials &amp; blocks</summary>
            </member>
        </members></doc>"#;
        let members = parse_members(xml).unwrap();
        assert_eq!(members[0].summary, "See  for trials & blocks");
    }

    #[test]
    fn test_childless_member() {
        let xml = r#"<doc><members><member name="F:UXF.Timer.seconds"/></members></doc>"#;
        let members = parse_members(xml).unwrap();
        assert_eq!(members[0].summary, "");
        assert!(members[0].params.is_empty());
    }

    #[test]
    fn test_member_without_name_is_an_error() {
        let xml = "<doc><members><member><summary>x</summary></member></members></doc>";
        let err = parse_members(xml).unwrap_err();
        assert!(matches!(err, XmlDocError::MissingName));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = r#"<doc><members><member name="T:UXF.Timer"><summary>x</wrong></member></members></doc>"#;
        assert!(parse_members(xml).is_err());
    }
}
