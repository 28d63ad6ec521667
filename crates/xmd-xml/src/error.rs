//! Error types for documentation export loading.

use std::path::PathBuf;

/// Error while reading or parsing a documentation export file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum XmlDocError {
    /// I/O error reading the input file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// XML parsing error.
    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// A `<member>` element without the required `name` attribute.
    #[error("<member> element missing its name attribute")]
    MissingName,
}
