//! CLI error types.

use xmd_config::ConfigError;
use xmd_symbols::SymbolError;
use xmd_xml::XmlDocError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] XmlDocError),

    #[error("{0}")]
    Symbol(#[from] SymbolError),
}
