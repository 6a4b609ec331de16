use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Core error: {0}")]
    Core(#[from] zoo_core::CoreError),

    #[error("Malformed arrival line: {0}")]
    Malformed(String),

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<IntakeError>,
    },
}
