use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the vote API and the output file.
#[derive(Debug, Error)]
pub enum Error {
    /// Bill or vote not found, or the API answered with an error payload.
    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("server returned {status}: {body}")]
    Http { status: u16, body: String },

    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// An embedded action payload could not be read. Never fatal on its own.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("cannot read {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    #[error("invalid topology: {0}")]
    Topology(String),

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
