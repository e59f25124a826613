use std::path::PathBuf;
use thiserror::Error;

/// anything that can go wrong loading `letters.json`. all of these are fatal at startup
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("unable to read glyph resource {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("glyph resource is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("glyph {label:?} is malformed: {reason}")]
    Malformed { label: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),
    /// the hour label and the glyph table disagree. there is no fallback glyph
    #[error("no glyph for hour label {0:?}")]
    MissingGlyph(char),
    #[error("device error: {0}")]
    Device(#[from] std::io::Error),
}

pub type ClockResult<T> = Result<T, ClockError>;
