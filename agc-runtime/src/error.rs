//! Runtime error types

use std::path::PathBuf;
use thiserror::Error;
use agc_spec::SpecError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Cannot read ROM image {}: {source}", .path.display())]
    RomOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
