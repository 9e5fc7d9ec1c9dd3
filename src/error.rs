use std::path::PathBuf;

use thiserror::Error;

/// Why the catalog could not be loaded. The gallery stays usable with no data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("catalog body is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("catalog body is a JSON {found}, expected an array of records")]
    NotAnArray { found: &'static str },
}

/// Invalid names coming from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sort key {0:?}")]
    UnknownSortKey(String),

    #[error("unknown facet {0:?}")]
    UnknownFacet(String),
}
