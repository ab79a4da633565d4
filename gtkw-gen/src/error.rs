use std::io;
use std::path::PathBuf;

use gtkw_parser::ParseError;

use crate::config::ConfigError;

/// Errors that stop a run before any layout file is written.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A required reference was not found in the simulation script or project file.
    #[error("error parsing {}: {what}", file.display())]
    Lookup { file: PathBuf, what: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Verilog source has no usable declaration block.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl GenError {
    pub fn lookup(file: impl Into<PathBuf>, what: impl Into<String>) -> Self {
        GenError::Lookup {
            file: file.into(),
            what: what.into(),
        }
    }
}
