//! The generation run: parse input, build registry, write every page.

use std::path::Path;

use xmd_config::Config;
use xmd_registry::TypeRegistry;
use xmd_render::{render_index, render_type_page};
use xmd_xml::load_members;

use crate::error::CliError;
use crate::output::Output;

/// File name of the cross-type index page.
const INDEX_FILENAME: &str = "Home.md";

/// Load configuration and run one full generation.
pub(crate) fn run(input: &Path, output: &Output) -> Result<(), CliError> {
    let config = Config::load(None)?;
    generate(input, &config, output)
}

/// Run one full generation with the given configuration.
///
/// Every run regenerates the whole output set: the output directory is
/// created if absent and existing pages are overwritten, never merged.
///
/// # Errors
///
/// Returns an error for unreadable or malformed input and for any write
/// failure; the output directory may then be partially written.
pub(crate) fn generate(input: &Path, config: &Config, output: &Output) -> Result<(), CliError> {
    let docs = &config.docs_resolved;

    let members = load_members(input)?;
    tracing::info!(count = members.len(), "loaded member records");

    let registry = TypeRegistry::build(members, &docs.root_namespace)?;
    if registry.is_empty() {
        output.warning(&format!(
            "No types found under namespace '{}'",
            docs.root_namespace
        ));
    }

    std::fs::create_dir_all(&docs.output_dir)?;

    for entry in &registry {
        let path = docs.output_dir.join(format!("{}.md", entry.short_name));
        write_page(&path, &render_type_page(entry))?;
        tracing::info!(page = %path.display(), "wrote type page");
    }
    write_page(
        &docs.output_dir.join(INDEX_FILENAME),
        &render_index(&registry),
    )?;

    output.success(&format!(
        "Generated {} type page(s) + index in {}",
        registry.len(),
        docs.output_dir.display()
    ));
    if registry.dropped_members() > 0 {
        output.warning(&format!(
            "Dropped {} member(s) whose owning type was not documented",
            registry.dropped_members()
        ));
    }

    Ok(())
}

/// Write one page, newline-joined with a trailing newline.
fn write_page(path: &Path, lines: &[String]) -> Result<(), CliError> {
    std::fs::write(path, format!("{}\n", lines.join("\n")))?;
    Ok(())
}
